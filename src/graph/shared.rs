//! 跨线程共享
//!
//! `Graph` 本身不做内部同步。需要跨线程时每个图实例配一把读写锁。

use super::graph::Graph;
use parking_lot::RwLock;
use std::sync::Arc;

/// 带读写锁的共享图
pub type SharedGraph<T> = Arc<RwLock<Graph<T>>>;

impl<T> Graph<T> {
    /// 包装为共享图
    pub fn into_shared(self) -> SharedGraph<T> {
        Arc::new(RwLock::new(self))
    }
}
