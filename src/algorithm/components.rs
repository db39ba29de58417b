//! 连通分量
//!
//! 忽略边的方向，用并查集把节点划分为连通分量。

use super::disjoint_set::DisjointSet;
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use indexmap::IndexMap;

impl<T> Graph<T> {
    /// 连通分量，按每个分量第一个节点的插入顺序排列，分量内保持节点插入顺序
    pub fn components(&self) -> Result<Vec<Vec<NodeId>>> {
        let node_ids = self.node_ids();
        let mut sets = DisjointSet::new(node_ids.iter().copied());
        for edge in self.edges() {
            sets.union(&edge.source(), &edge.target())?;
        }

        let mut groups: IndexMap<NodeId, Vec<NodeId>> = IndexMap::new();
        for id in node_ids {
            let root = sets.find(&id)?;
            groups.entry(root).or_default().push(id);
        }
        Ok(groups.into_values().collect())
    }
}
