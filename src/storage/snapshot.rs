//! 图快照
//!
//! 持久化层的边界：核心只负责把当前节点和边交给 `GraphSink`，
//! 文件格式和解码由实现方决定。

use crate::error::Result;
use crate::graph::{Edge, Graph, NodeId};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// 节点快照
#[derive(Debug, Serialize)]
pub struct NodeSnapshot<'a, T> {
    pub id: NodeId,
    pub payload: &'a T,
}

/// 图快照（借用图中的数据，不复制负载）
#[derive(Debug, Serialize)]
pub struct GraphSnapshot<'a, T> {
    pub nodes: Vec<NodeSnapshot<'a, T>>,
    pub edges: &'a [Edge],
}

impl<'a, T> GraphSnapshot<'a, T> {
    /// 按插入顺序捕获节点和边
    pub fn capture(graph: &'a Graph<T>) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeSnapshot {
                id: node.id(),
                payload: node.payload().as_ref(),
            })
            .collect();
        Self {
            nodes,
            edges: graph.edges(),
        }
    }
}

/// 持久化目标
pub trait GraphSink<T> {
    /// 把快照写到 path
    fn write(&self, snapshot: &GraphSnapshot<'_, T>, path: &Path) -> Result<()>;
}

impl<T> Graph<T> {
    /// 通过 sink 把当前图保存到 path
    pub fn save<S, P>(&self, path: P, sink: &S) -> Result<()>
    where
        S: GraphSink<T> + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let snapshot = GraphSnapshot::capture(self);
        sink.write(&snapshot, path)?;
        debug!(
            path = %path.display(),
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "图已保存"
        );
        Ok(())
    }
}
