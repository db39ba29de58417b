//! 持久化边界模块
//!
//! 核心不实现任何文件格式，只定义快照和写入目标的契约

mod snapshot;

pub use snapshot::{GraphSink, GraphSnapshot, NodeSnapshot};
