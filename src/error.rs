//! 错误类型定义

use crate::graph::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("节点不存在: {0}")]
    NodeNotFound(NodeId),

    #[error("元素不在并查集全集中: {0}")]
    ElementNotInUniverse(String),

    #[error("无效的边权重: {0}")]
    InvalidWeight(f64),

    #[error("无效的配置: {0}")]
    InvalidConfig(String),

    #[error("持久化目标错误: {0}")]
    SinkError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
