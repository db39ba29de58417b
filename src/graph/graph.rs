//! 图数据结构
//!
//! 节点保存在按插入顺序排列的节点表中，外部只通过 `NodeId` 句柄引用节点。
//! 边表保留插入顺序，邻接索引为每个节点维护一张邻接表。

use super::adjacency::{AdjacencyEntry, AdjacencyIndex};
use super::edge::{DirectedEdge, Edge, UndirectedEdge};
use super::node::{Node, NodeId};
use crate::config::{GraphConfig, RemovalPolicy};
use crate::error::{Error, Result};
use crate::metrics::global_metrics;
use crate::types::{validate_weight, Weight};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// 内存图
#[derive(Debug)]
pub struct Graph<T> {
    /// 配置
    config: GraphConfig,
    /// 节点表（保持插入顺序）
    nodes: IndexMap<NodeId, Node<T>>,
    /// 边表（保持插入顺序）
    edges: Vec<Edge>,
    /// 邻接索引
    adjacency: AdjacencyIndex,
    /// 下一个节点 ID
    next_node_id: u64,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Graph<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            adjacency: self.adjacency.clone(),
            next_node_id: self.next_node_id,
        }
    }
}

impl<T> Graph<T> {
    /// 使用默认配置创建空图
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
            adjacency: AdjacencyIndex::new(),
            next_node_id: 1,
        }
    }

    /// 使用指定配置创建空图
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// 由一组负载创建只有节点的图，每个负载对应一个新节点
    pub fn from_payloads<I, P>(payloads: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Arc<T>>,
    {
        let mut graph = Self::new();
        for payload in payloads {
            graph.add_node(payload);
        }
        graph
    }

    /// 由一组 (负载, 负载, 权重) 创建无向图
    ///
    /// 同一个 `Arc` 负载只登记一次，端点先登记再连边。
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Arc<T>, Arc<T>, Weight)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.connect_payloads(&a, &b, weight)?;
        }
        Ok(graph)
    }

    /// 创建与 other 拥有相同节点（相同句柄）但没有边的图
    pub fn with_same_nodes(other: &Graph<T>) -> Self {
        let mut adjacency = AdjacencyIndex::new();
        for &id in other.nodes.keys() {
            adjacency.register(id);
        }
        Self {
            config: other.config.clone(),
            nodes: other.nodes.clone(),
            edges: Vec::new(),
            adjacency,
            next_node_id: other.next_node_id,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ==================== 节点操作 ====================

    /// 添加节点
    ///
    /// 每次调用都会创建新节点，即使负载是同一个对象。
    pub fn add_node(&mut self, payload: impl Into<Arc<T>>) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;

        self.nodes.insert(id, Node::new(id, payload.into()));
        self.adjacency.register(id);
        global_metrics().record_node_insert();

        trace!(node = %id, "节点已添加");
        id
    }

    /// 按负载引用查找节点（返回第一个匹配项）
    pub fn get_node(&self, payload: &Arc<T>) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|node| node.references(payload))
            .map(|node| node.id())
    }

    /// 获取节点
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(&id)
    }

    /// 获取节点负载
    pub fn payload(&self, id: NodeId) -> Option<&Arc<T>> {
        self.nodes.get(&id).map(|node| node.payload())
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// 按插入顺序遍历节点
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.nodes.values()
    }

    /// 按插入顺序返回所有节点 ID
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// 删除节点
    ///
    /// 对称策略下删除节点、所有关联边和指向该节点的邻接项；
    /// 仅源端策略下只丢弃它自己的邻接表，节点记录、边表和其他节点的邻接项都保留。
    /// 节点不存在（或仅源端策略下邻接表已丢弃）时不做任何事。
    pub fn remove_node(&mut self, id: NodeId) -> Option<Arc<T>> {
        let payload = match self.config.removal {
            RemovalPolicy::Symmetric => {
                let node = self.nodes.shift_remove(&id)?;
                self.adjacency.unregister(id);

                let before = self.edges.len();
                self.edges.retain(|e| !e.touches(id));
                let dropped = before - self.edges.len();
                let purged = self.adjacency.purge_neighbor(id);
                global_metrics().record_edges_removed(dropped as u64);
                debug!(
                    node = %id,
                    edges_removed = dropped,
                    entries_purged = purged,
                    "节点已删除"
                );
                Arc::clone(node.payload())
            }
            RemovalPolicy::SourceOnly => {
                let payload = Arc::clone(self.nodes.get(&id)?.payload());
                self.adjacency.unregister(id)?;
                debug!(node = %id, "节点邻接表已丢弃，节点记录与关联边保留");
                payload
            }
        };
        global_metrics().record_node_remove();

        Some(payload)
    }

    /// 获取节点数量
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_count(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ==================== 边操作 ====================

    fn ensure_node(&self, id: NodeId) -> Result<()> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(Error::NodeNotFound(id))
        }
    }

    /// 添加无向边
    ///
    /// 允许重复边，两条都会保留在邻接表中。
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        let weight = validate_weight(weight)?;
        self.ensure_node(a)?;
        self.ensure_node(b)?;

        self.edges.push(Edge::undirected(a, b, weight));
        self.adjacency.add_undirected(a, b, weight);
        global_metrics().record_edge_insert();

        trace!(from = %a, to = %b, weight, "无向边已添加");
        Ok(())
    }

    /// 添加有向边
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        let weight = validate_weight(weight)?;
        self.ensure_node(from)?;
        self.ensure_node(to)?;

        self.edges.push(Edge::directed(from, to, weight));
        self.adjacency.add_directed(from, to, weight);
        global_metrics().record_edge_insert();

        trace!(from = %from, to = %to, weight, "有向边已添加");
        Ok(())
    }

    /// 使用默认权重添加无向边
    pub fn add_undirected_edge_default(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.add_undirected_edge(a, b, self.config.default_weight)
    }

    /// 使用默认权重添加有向边
    pub fn add_directed_edge_default(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.add_directed_edge(from, to, self.config.default_weight)
    }

    /// 添加一条已构造的边
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        match edge {
            Edge::Undirected(UndirectedEdge { u, v, weight }) => {
                self.add_undirected_edge(u, v, weight)
            }
            Edge::Directed(DirectedEdge { from, to, weight }) => {
                self.add_directed_edge(from, to, weight)
            }
        }
    }

    /// 按负载连接两个节点，未登记的负载先登记为节点
    pub fn connect_payloads(
        &mut self,
        a: &Arc<T>,
        b: &Arc<T>,
        weight: Weight,
    ) -> Result<(NodeId, NodeId)> {
        validate_weight(weight)?;
        let na = match self.get_node(a) {
            Some(id) => id,
            None => self.add_node(Arc::clone(a)),
        };
        let nb = match self.get_node(b) {
            Some(id) => id,
            None => self.add_node(Arc::clone(b)),
        };
        self.add_undirected_edge(na, nb, weight)?;
        Ok((na, nb))
    }

    /// 删除边
    ///
    /// 删除边表中第一条相等的边（相等性不比较权重），并按删除策略清理邻接项：
    /// 对称策略清理存储边的两端，仅源端策略只清理参数边起点指向终点的一项。
    /// 返回被删除的边；找不到时不做任何事并返回 `None`。
    pub fn remove_edge(&mut self, edge: &Edge) -> Option<Edge> {
        let position = self.edges.iter().position(|e| e == edge)?;
        let removed = self.edges.remove(position);
        let weight = removed.weight();

        match self.config.removal {
            RemovalPolicy::Symmetric => match removed {
                Edge::Undirected(UndirectedEdge { u, v, .. }) => {
                    self.adjacency.remove_entry(u, v, weight);
                    self.adjacency.remove_entry(v, u, weight);
                }
                Edge::Directed(DirectedEdge { from, to, .. }) => {
                    self.adjacency.remove_entry(from, to, weight);
                }
            },
            // 仅源端策略按调用方给出的端点顺序清理
            RemovalPolicy::SourceOnly => {
                self.adjacency.remove_entry(edge.source(), edge.target(), weight);
            }
        }
        global_metrics().record_edge_remove();

        debug!(
            from = %removed.source(),
            to = %removed.target(),
            policy = ?self.config.removal,
            "边已删除"
        );
        Some(removed)
    }

    /// 按插入顺序返回所有边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== 邻居查询 ====================

    /// 获取节点的邻接项（插入逆序）
    pub fn neighbors(&self, id: NodeId) -> Vec<AdjacencyEntry> {
        self.adjacency.neighbors(id).copied().collect()
    }

    /// 获取节点的出度（无向边计入两端）
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.out_degree(id)
    }

    /// 获取邻接索引引用
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }
}
