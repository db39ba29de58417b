//! 单源最短路径（Dijkstra）
//!
//! 要求从起点可达的边权重非负，不做负权边或负环检测。

use super::frontier::{MinFrontier, PriorityFrontier};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::metrics::global_metrics;
use crate::types::{Distance, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的节点序列（含起点和终点）
    pub nodes: Vec<NodeId>,
    /// 路径边数
    pub length: usize,
    /// 路径总权重
    pub total_weight: Weight,
}

impl PathResult {
    fn with_start(start: NodeId) -> Self {
        Self {
            nodes: vec![start],
            length: 0,
            total_weight: 0.0,
        }
    }
}

/// 一次单源搜索的结果
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    dist: HashMap<NodeId, Weight>,
    prev: HashMap<NodeId, NodeId>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// 到 target 的距离，不可达返回 `None`
    pub fn distance_to(&self, target: NodeId) -> Distance {
        self.dist
            .get(&target)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// 沿前驱重构到 target 的路径
    pub fn path_to(&self, target: NodeId) -> Option<PathResult> {
        let total_weight = self.distance_to(target)?;
        if target == self.source {
            return Some(PathResult::with_start(target));
        }

        let mut nodes = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.prev.get(&current)?;
            nodes.push(current);
            // 负权边可能让前驱链成环
            if nodes.len() > self.dist.len() {
                return None;
            }
        }
        nodes.reverse();

        Some(PathResult {
            length: nodes.len() - 1,
            nodes,
            total_weight,
        })
    }
}

/// Dijkstra 最短路径
pub struct Dijkstra<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T> Dijkstra<'a, T> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }

    fn ensure_node(&self, id: NodeId) -> Result<()> {
        if self.graph.contains_node(id) {
            Ok(())
        } else {
            Err(Error::NodeNotFound(id))
        }
    }

    /// 使用默认前沿从 start 出发计算最短路径树
    pub fn solve(&self, start: NodeId) -> Result<ShortestPathTree> {
        self.solve_with(start, MinFrontier::with_capacity(self.graph.size()))
    }

    /// 使用给定前沿计算最短路径树
    ///
    /// 所有节点先以 +∞（起点为 0）入队，然后反复弹出最小者并松弛其邻接项。
    /// 指向节点表之外的邻接项会被忽略。
    #[instrument(skip(self, frontier), fields(nodes = self.graph.size()))]
    pub fn solve_with<F>(&self, start: NodeId, mut frontier: F) -> Result<ShortestPathTree>
    where
        F: PriorityFrontier<NodeId>,
    {
        self.ensure_node(start)?;

        let mut dist: HashMap<NodeId, Weight> = HashMap::with_capacity(self.graph.size());
        let mut prev: HashMap<NodeId, NodeId> = HashMap::new();

        for id in self.graph.node_ids() {
            let d = if id == start { 0.0 } else { f64::INFINITY };
            dist.insert(id, d);
            frontier.push(id, d);
        }

        let mut relaxed = 0u64;
        while let Some(u) = frontier.pop() {
            let du = match dist.get(&u) {
                Some(&d) => d,
                None => continue,
            };
            // 剩余节点全部不可达
            if du.is_infinite() {
                break;
            }

            for entry in self.graph.adjacency().neighbors(u) {
                let Some(&dn) = dist.get(&entry.neighbor) else {
                    continue;
                };
                let alt = du + entry.weight;
                if alt < dn {
                    dist.insert(entry.neighbor, alt);
                    prev.insert(entry.neighbor, u);
                    frontier.update_priority(&entry.neighbor, alt);
                    relaxed += 1;
                }
            }
        }

        global_metrics().record_edges_relaxed(relaxed);
        debug!(source = %start, relaxed, "最短路径搜索完成");

        Ok(ShortestPathTree {
            source: start,
            dist,
            prev,
        })
    }

    /// start 到 finish 的最短距离，不可达返回 `Ok(None)`
    pub fn distance(&self, start: NodeId, finish: NodeId) -> Result<Distance> {
        self.ensure_node(start)?;
        self.ensure_node(finish)?;
        global_metrics().record_distance_query();

        if start == finish {
            return Ok(Some(0.0));
        }
        Ok(self.solve(start)?.distance_to(finish))
    }

    /// start 到 finish 的最短路径
    pub fn shortest_path(&self, start: NodeId, finish: NodeId) -> Result<Option<PathResult>> {
        self.ensure_node(start)?;
        self.ensure_node(finish)?;
        global_metrics().record_distance_query();

        if start == finish {
            return Ok(Some(PathResult::with_start(start)));
        }
        Ok(self.solve(start)?.path_to(finish))
    }

    /// 两点是否连通（沿边方向可达）
    pub fn connected(&self, a: NodeId, b: NodeId) -> Result<bool> {
        Ok(self.distance(a, b)?.is_some())
    }
}

impl<T> Graph<T> {
    /// 最短距离，见 [`Dijkstra::distance`]
    pub fn distance(&self, start: NodeId, finish: NodeId) -> Result<Distance> {
        Dijkstra::new(self).distance(start, finish)
    }

    /// 最短路径，见 [`Dijkstra::shortest_path`]
    pub fn shortest_path(&self, start: NodeId, finish: NodeId) -> Result<Option<PathResult>> {
        Dijkstra::new(self).shortest_path(start, finish)
    }

    /// 两点是否连通
    pub fn connected(&self, a: NodeId, b: NodeId) -> Result<bool> {
        Dijkstra::new(self).connected(a, b)
    }
}
