//! 最小生成树（Kruskal）
//!
//! 在边表的局部副本上做稳定排序，原图不会被修改。
//! 非连通图得到最小生成森林，每个连通分量一棵树。

use super::disjoint_set::DisjointSet;
use crate::error::Result;
use crate::graph::{Graph, UndirectedEdge};
use crate::metrics::global_metrics;
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 最小生成森林
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningForest {
    /// 按选中顺序排列的边
    pub edges: Vec<UndirectedEdge>,
    /// 总权重
    pub total_weight: Weight,
    /// 树的数量（连通图为 1，空图为 0）
    pub tree_count: usize,
}

impl SpanningForest {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count == 1
    }
}

/// Kruskal 最小生成树
pub struct Kruskal<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T> Kruskal<'a, T> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }

    /// 计算最小生成森林
    ///
    /// 只考虑无向边，有向边被跳过。权重相同的边保持插入顺序。
    /// 边引用了节点表之外的节点时返回 `ElementNotInUniverse`。
    #[instrument(skip(self), fields(nodes = self.graph.size(), edges = self.graph.edge_count()))]
    pub fn forest(&self) -> Result<SpanningForest> {
        let mut candidates: Vec<UndirectedEdge> = self
            .graph
            .edges()
            .iter()
            .filter_map(|e| e.as_undirected())
            .copied()
            .collect();
        candidates.sort_by(|a, b| a.cmp_weight(b));

        let mut sets = DisjointSet::new(self.graph.node_ids());
        let mut edges = Vec::new();
        let mut total_weight = 0.0;

        for edge in candidates {
            if sets.find(&edge.u)? != sets.find(&edge.v)? {
                sets.union(&edge.u, &edge.v)?;
                total_weight += edge.weight;
                edges.push(edge);
            }
        }

        let tree_count = self.graph.size() - edges.len();
        global_metrics().record_mst_run();
        debug!(selected = edges.len(), tree_count, total_weight, "最小生成森林计算完成");

        Ok(SpanningForest {
            edges,
            total_weight,
            tree_count,
        })
    }

    /// 计算最小生成树，返回包含全部节点和选中边的新图
    pub fn tree(&self) -> Result<Graph<T>> {
        let forest = self.forest()?;
        let mut output = Graph::with_same_nodes(self.graph);
        for edge in forest.edges {
            output.add_undirected_edge(edge.u, edge.v, edge.weight)?;
        }
        Ok(output)
    }
}

impl<T> Graph<T> {
    /// 最小生成树（非连通时为森林），原图保持不变
    pub fn mst(&self) -> Result<Graph<T>> {
        Kruskal::new(self).tree()
    }

    /// 最小生成森林的边和统计信息
    pub fn minimum_spanning_forest(&self) -> Result<SpanningForest> {
        Kruskal::new(self).forest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GraphConfig, RemovalPolicy};
    use crate::graph::{Edge, NodeId};

    fn square() -> (Graph<char>, [NodeId; 4]) {
        let mut graph: Graph<char> = Graph::new();
        let a = graph.add_node('A');
        let b = graph.add_node('B');
        let c = graph.add_node('C');
        let d = graph.add_node('D');
        graph.add_undirected_edge(a, b, 1.0).unwrap();
        graph.add_undirected_edge(b, c, 2.0).unwrap();
        graph.add_undirected_edge(c, d, 1.0).unwrap();
        graph.add_undirected_edge(a, d, 5.0).unwrap();
        (graph, [a, b, c, d])
    }

    #[test]
    fn test_square_mst() {
        let (graph, [a, b, c, d]) = square();
        let forest = graph.minimum_spanning_forest().unwrap();

        assert_eq!(forest.total_weight, 4.0);
        assert_eq!(forest.tree_count, 1);
        assert!(forest.is_spanning_tree());
        // 权重相同的 (A,B) 与 (C,D) 保持插入顺序
        assert_eq!(
            forest.edges,
            vec![
                UndirectedEdge::new(a, b, 1.0),
                UndirectedEdge::new(c, d, 1.0),
                UndirectedEdge::new(b, c, 2.0),
            ]
        );
        assert!(!forest.edges.contains(&UndirectedEdge::new(a, d, 5.0)));
    }

    #[test]
    fn test_mst_returns_new_graph() {
        let (graph, [a, _, _, d]) = square();
        let order_before: Vec<Edge> = graph.edges().to_vec();

        let tree = graph.mst().unwrap();
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.node_ids(), graph.node_ids());
        assert_eq!(tree.distance(a, d).unwrap(), Some(4.0));

        // 原图的边顺序和内容不变
        assert_eq!(graph.edge_count(), 4);
        let order_after: Vec<f64> = graph.edges().iter().map(|e| e.weight()).collect();
        let expected: Vec<f64> = order_before.iter().map(|e| e.weight()).collect();
        assert_eq!(order_after, expected);
        assert_eq!(graph.edges(), order_before.as_slice());
    }

    #[test]
    fn test_disconnected_graph_gives_forest() {
        let mut graph: Graph<u32> = Graph::new();
        let ids: Vec<NodeId> = (0..5u32).map(|i| graph.add_node(i)).collect();
        // 分量 {0,1,2}（含一个环）和 {3,4}
        graph.add_undirected_edge(ids[0], ids[1], 1.0).unwrap();
        graph.add_undirected_edge(ids[1], ids[2], 1.0).unwrap();
        graph.add_undirected_edge(ids[0], ids[2], 3.0).unwrap();
        graph.add_undirected_edge(ids[3], ids[4], 2.0).unwrap();

        let forest = graph.minimum_spanning_forest().unwrap();
        assert_eq!(forest.edge_count(), 3);
        assert_eq!(forest.tree_count, 2);
        assert!(!forest.is_spanning_tree());
        assert_eq!(forest.total_weight, 4.0);
    }

    #[test]
    fn test_empty_and_edgeless() {
        let graph: Graph<u32> = Graph::new();
        let forest = graph.minimum_spanning_forest().unwrap();
        assert_eq!(forest.tree_count, 0);
        assert!(forest.edges.is_empty());

        let graph: Graph<u32> = Graph::from_payloads(vec![1u32, 2, 3]);
        let tree = graph.mst().unwrap();
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.edge_count(), 0);
        assert_eq!(graph.minimum_spanning_forest().unwrap().tree_count, 3);
    }

    #[test]
    fn test_directed_edges_and_self_loops_skipped() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_node(1u32);
        let b = graph.add_node(2u32);
        graph.add_directed_edge(a, b, 0.1).unwrap();
        graph.add_undirected_edge(a, a, 0.2).unwrap();
        graph.add_undirected_edge(a, b, 7.0).unwrap();

        let forest = graph.minimum_spanning_forest().unwrap();
        assert_eq!(forest.edges, vec![UndirectedEdge::new(a, b, 7.0)]);
        assert_eq!(forest.total_weight, 7.0);
    }

    #[test]
    fn test_duplicate_edges_pick_lightest() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_node(1u32);
        let b = graph.add_node(2u32);
        graph.add_undirected_edge(a, b, 4.0).unwrap();
        graph.add_undirected_edge(a, b, 1.5).unwrap();

        let forest = graph.minimum_spanning_forest().unwrap();
        assert_eq!(forest.edge_count(), 1);
        assert_eq!(forest.edges[0].weight, 1.5);
    }

    #[test]
    fn test_source_only_removed_node_still_spans() {
        let config = GraphConfig::new().with_removal(RemovalPolicy::SourceOnly);
        let mut graph: Graph<u32> = Graph::with_config(config).unwrap();
        let a = graph.add_node(1u32);
        let b = graph.add_node(2u32);
        let c = graph.add_node(3u32);
        graph.add_undirected_edge(a, b, 1.0).unwrap();
        graph.add_undirected_edge(b, c, 2.0).unwrap();
        graph.remove_node(b);

        // 节点记录和边表都还在，生成树照常计算
        let tree = graph.mst().unwrap();
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.edge_count(), 2);
        assert!(tree.connected(a, c).unwrap());
    }
}
