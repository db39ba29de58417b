//! 节点定义
//!
//! 节点身份由图分配的句柄决定，而不是负载内容

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// 节点 ID（图内唯一，删除后不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 节点
///
/// 负载由调用方共享持有，图只保存一个 `Arc` 引用。
#[derive(Debug)]
pub struct Node<T> {
    /// 节点 ID
    id: NodeId,
    /// 负载
    payload: Arc<T>,
}

impl<T> Node<T> {
    /// 创建新节点
    pub fn new(id: NodeId, payload: Arc<T>) -> Self {
        Self { id, payload }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn payload(&self) -> &Arc<T> {
        &self.payload
    }

    /// 是否引用同一个负载对象（按引用比较，不比较内容）
    pub fn references(&self, payload: &Arc<T>) -> bool {
        Arc::ptr_eq(&self.payload, payload)
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            payload: Arc::clone(&self.payload),
        }
    }
}
