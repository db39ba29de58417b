//! 邻接索引
//!
//! 每个节点一张邻接表。新项在逻辑上插入表头，遍历顺序为插入顺序的逆序，
//! 这决定了最短路径松弛时的遍历次序。

use crate::graph::node::NodeId;
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// 邻接项：(邻居, 权重)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyEntry {
    pub neighbor: NodeId,
    pub weight: Weight,
}

/// 单个节点的邻接表
///
/// 物理上追加到尾部，逻辑上的表头是最后一个元素。
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    entries: SmallVec<[AdjacencyEntry; 4]>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入表头
    pub fn push_front(&mut self, neighbor: NodeId, weight: Weight) {
        self.entries.push(AdjacencyEntry { neighbor, weight });
    }

    /// 从表头开始遍历（插入逆序）
    pub fn iter(&self) -> impl Iterator<Item = &AdjacencyEntry> + '_ {
        self.entries.iter().rev()
    }

    /// 删除一个指向 neighbor 的邻接项
    ///
    /// 优先删除权重完全相同的项，否则删除离表头最近的指向 neighbor 的项。
    pub fn remove(&mut self, neighbor: NodeId, weight: Weight) -> Option<AdjacencyEntry> {
        let exact = self
            .entries
            .iter()
            .rposition(|e| e.neighbor == neighbor && e.weight == weight);
        let index = exact.or_else(|| self.entries.iter().rposition(|e| e.neighbor == neighbor))?;
        Some(self.entries.remove(index))
    }

    /// 删除所有指向 neighbor 的邻接项，返回删除数量
    pub fn remove_all(&mut self, neighbor: NodeId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.neighbor != neighbor);
        before - self.entries.len()
    }

    pub fn contains(&self, neighbor: NodeId) -> bool {
        self.entries.iter().any(|e| e.neighbor == neighbor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 邻接索引：节点 -> 邻接表
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    lists: HashMap<NodeId, AdjacencyList>,
}

impl AdjacencyIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 为节点登记一张空邻接表（已存在则保持不变）
    pub fn register(&mut self, node: NodeId) {
        self.lists.entry(node).or_default();
    }

    /// 移除节点自身的邻接表
    pub fn unregister(&mut self, node: NodeId) -> Option<AdjacencyList> {
        self.lists.remove(&node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.lists.contains_key(&node)
    }

    /// 添加单向邻接项
    pub fn add_directed(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.lists.entry(from).or_default().push_front(to, weight);
    }

    /// 添加双向邻接项
    pub fn add_undirected(&mut self, a: NodeId, b: NodeId, weight: Weight) {
        self.add_directed(a, b, weight);
        self.add_directed(b, a, weight);
    }

    /// 从 from 的邻接表删除一个指向 to 的项
    pub fn remove_entry(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Option<AdjacencyEntry> {
        self.lists.get_mut(&from)?.remove(to, weight)
    }

    /// 从所有邻接表中删除指向 node 的项
    pub fn purge_neighbor(&mut self, node: NodeId) -> usize {
        self.lists
            .values_mut()
            .map(|list| list.remove_all(node))
            .sum()
    }

    /// 获取节点的邻接表
    pub fn get(&self, node: NodeId) -> Option<&AdjacencyList> {
        self.lists.get(&node)
    }

    /// 获取邻接项（插入逆序）
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = &AdjacencyEntry> + '_ {
        self.lists.get(&node).into_iter().flat_map(|list| list.iter())
    }

    /// 获取节点的出度
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.lists.get(&node).map(|l| l.len()).unwrap_or(0)
    }
}
