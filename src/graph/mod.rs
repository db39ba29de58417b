//! 图核心模块
//!
//! 定义节点、边、邻接索引和图的核心数据结构

mod adjacency;
mod edge;
mod graph;
mod node;
mod shared;

pub use adjacency::{AdjacencyEntry, AdjacencyIndex, AdjacencyList};
pub use edge::{DirectedEdge, Edge, UndirectedEdge};
pub use graph::Graph;
pub use node::{Node, NodeId};
pub use shared::SharedGraph;
