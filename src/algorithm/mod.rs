//! 图算法模块
//!
//! 包含并查集、优先级前沿、最短路径和最小生成树

mod components;
mod disjoint_set;
mod frontier;
mod shortest_path;
mod spanning_tree;

pub use disjoint_set::DisjointSet;
pub use frontier::{MinFrontier, Priority, PriorityFrontier};
pub use shortest_path::{Dijkstra, PathResult, ShortestPathTree};
pub use spanning_tree::{Kruskal, SpanningForest};
