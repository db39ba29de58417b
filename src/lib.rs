//! GraphWeave - 内存图引擎
//!
//! 提供节点/边存储以及经典图算法：
//! - Dijkstra 单源最短路径与连通性查询
//! - 基于并查集的 Kruskal 最小生成树（非连通图得到生成森林）
//! - 连通分量划分

pub mod algorithm;
pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod storage;
pub mod types;

// 重导出常用类型
pub use algorithm::{DisjointSet, MinFrontier, PathResult, PriorityFrontier, SpanningForest};
pub use config::{GraphConfig, RemovalPolicy};
pub use error::{Error, Result};
pub use graph::{DirectedEdge, Edge, Graph, NodeId, SharedGraph, UndirectedEdge};
pub use storage::{GraphSink, GraphSnapshot};
pub use types::{Distance, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
