//! 运行指标收集模块
//!
//! 进程级计数器，记录图变更和算法调用次数

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// 全局指标
#[derive(Debug)]
pub struct Metrics {
    /// 图变更统计
    graph_stats: GraphStats,
    /// 算法统计
    algorithm_stats: AlgorithmStats,
    /// 创建时间
    start_time: Instant,
}

/// 图变更统计
#[derive(Debug, Default)]
struct GraphStats {
    nodes_inserted: AtomicU64,
    nodes_removed: AtomicU64,
    edges_inserted: AtomicU64,
    edges_removed: AtomicU64,
}

/// 算法统计
#[derive(Debug, Default)]
struct AlgorithmStats {
    /// 最短距离 / 路径查询数
    distance_queries: AtomicU64,
    /// 松弛成功的边数
    edges_relaxed: AtomicU64,
    /// 最小生成树计算次数
    mst_runs: AtomicU64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub nodes_inserted: u64,
    pub nodes_removed: u64,
    pub edges_inserted: u64,
    pub edges_removed: u64,

    pub distance_queries: u64,
    pub edges_relaxed: u64,
    pub mst_runs: u64,

    pub uptime_seconds: u64,
}

impl MetricsSnapshot {
    /// 导出为 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            graph_stats: GraphStats::default(),
            algorithm_stats: AlgorithmStats::default(),
            start_time: Instant::now(),
        }
    }

    pub fn record_node_insert(&self) {
        self.graph_stats.nodes_inserted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_node_remove(&self) {
        self.graph_stats.nodes_removed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_edge_insert(&self) {
        self.graph_stats.edges_inserted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_edge_remove(&self) {
        self.graph_stats.edges_removed.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录一次批量删除的边数
    pub fn record_edges_removed(&self, count: u64) {
        self.graph_stats.edges_removed.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_distance_query(&self) {
        self.algorithm_stats
            .distance_queries
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录一次搜索中松弛成功的边数
    pub fn record_edges_relaxed(&self, count: u64) {
        self.algorithm_stats
            .edges_relaxed
            .fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_mst_run(&self) {
        self.algorithm_stats.mst_runs.fetch_add(1, Ordering::Relaxed);
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            nodes_inserted: self.graph_stats.nodes_inserted.load(Ordering::Relaxed),
            nodes_removed: self.graph_stats.nodes_removed.load(Ordering::Relaxed),
            edges_inserted: self.graph_stats.edges_inserted.load(Ordering::Relaxed),
            edges_removed: self.graph_stats.edges_removed.load(Ordering::Relaxed),
            distance_queries: self.algorithm_stats.distance_queries.load(Ordering::Relaxed),
            edges_relaxed: self.algorithm_stats.edges_relaxed.load(Ordering::Relaxed),
            mst_runs: self.algorithm_stats.mst_runs.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        self.graph_stats.nodes_inserted.store(0, Ordering::Relaxed);
        self.graph_stats.nodes_removed.store(0, Ordering::Relaxed);
        self.graph_stats.edges_inserted.store(0, Ordering::Relaxed);
        self.graph_stats.edges_removed.store(0, Ordering::Relaxed);

        self.algorithm_stats.distance_queries.store(0, Ordering::Relaxed);
        self.algorithm_stats.edges_relaxed.store(0, Ordering::Relaxed);
        self.algorithm_stats.mst_runs.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}
