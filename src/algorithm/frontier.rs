//! 优先级前沿
//!
//! 最短路径算法只依赖 `PriorityFrontier` 契约；默认实现 `MinFrontier`
//! 基于 `priority-queue` crate 的可修改优先级堆。

use priority_queue::PriorityQueue;
use std::cmp::{Ordering, Reverse};
use std::hash::Hash;

/// 最小优先级前沿的契约
pub trait PriorityFrontier<I> {
    /// 以给定优先级插入；元素已存在时改写其优先级
    fn push(&mut self, item: I, priority: f64);

    /// 弹出优先级最小的元素，为空时返回 `None`
    fn pop(&mut self) -> Option<I>;

    /// 修改已存在元素的优先级，元素不在前沿中时返回 `false`
    fn update_priority(&mut self, item: &I, priority: f64) -> bool;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// 按 `total_cmp` 全序比较的优先级
#[derive(Debug, Clone, Copy)]
pub struct Priority(pub f64);

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// 基于二叉堆的最小优先级前沿
pub struct MinFrontier<I: Hash + Eq> {
    queue: PriorityQueue<I, Reverse<Priority>>,
}

impl<I: Hash + Eq> MinFrontier<I> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: PriorityQueue::with_capacity(capacity),
        }
    }

    /// 查看元素当前优先级
    pub fn priority_of(&self, item: &I) -> Option<f64> {
        self.queue.get_priority(item).map(|Reverse(p)| p.0)
    }
}

impl<I: Hash + Eq> Default for MinFrontier<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq> PriorityFrontier<I> for MinFrontier<I> {
    fn push(&mut self, item: I, priority: f64) {
        self.queue.push(item, Reverse(Priority(priority)));
    }

    fn pop(&mut self) -> Option<I> {
        self.queue.pop().map(|(item, _)| item)
    }

    fn update_priority(&mut self, item: &I, priority: f64) -> bool {
        self.queue
            .change_priority(item, Reverse(Priority(priority)))
            .is_some()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
