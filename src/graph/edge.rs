//! 边定义
//!
//! 无向边的相等性与端点顺序无关，有向边要求方向一致。两者的相等性都不比较权重。

use crate::graph::node::NodeId;
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 无向边
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UndirectedEdge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: Weight,
}

impl UndirectedEdge {
    pub fn new(u: NodeId, v: NodeId, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// 是否连接 a 和 b（不区分顺序）
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }

    /// 给定一端，返回另一端
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.u == node {
            Some(self.v)
        } else if self.v == node {
            Some(self.u)
        } else {
            None
        }
    }

    /// 按权重比较，供排序算法使用
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl PartialEq for UndirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.u, other.v)
    }
}

/// 有向边
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DirectedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl DirectedEdge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl PartialEq for DirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

/// 图中的边
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edge {
    Undirected(UndirectedEdge),
    Directed(DirectedEdge),
}

impl Edge {
    pub fn undirected(u: NodeId, v: NodeId, weight: Weight) -> Self {
        Edge::Undirected(UndirectedEdge::new(u, v, weight))
    }

    pub fn directed(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Edge::Directed(DirectedEdge::new(from, to, weight))
    }

    /// 起点（无向边为 u）
    pub fn source(&self) -> NodeId {
        match self {
            Edge::Undirected(e) => e.u,
            Edge::Directed(e) => e.from,
        }
    }

    /// 终点（无向边为 v）
    pub fn target(&self) -> NodeId {
        match self {
            Edge::Undirected(e) => e.v,
            Edge::Directed(e) => e.to,
        }
    }

    pub fn weight(&self) -> Weight {
        match self {
            Edge::Undirected(e) => e.weight,
            Edge::Directed(e) => e.weight,
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, Edge::Directed(_))
    }

    pub fn as_undirected(&self) -> Option<&UndirectedEdge> {
        match self {
            Edge::Undirected(e) => Some(e),
            Edge::Directed(_) => None,
        }
    }

    /// 是否以 node 为端点
    pub fn touches(&self, node: NodeId) -> bool {
        self.source() == node || self.target() == node
    }
}

impl From<UndirectedEdge> for Edge {
    fn from(e: UndirectedEdge) -> Self {
        Edge::Undirected(e)
    }
}

impl From<DirectedEdge> for Edge {
    fn from(e: DirectedEdge) -> Self {
        Edge::Directed(e)
    }
}
