//! 图引擎配置

use crate::error::{Error, Result};
use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 删除策略
///
/// 决定 `remove_edge` / `remove_node` 是否同时清理反向邻接项和关联边。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// 对称删除：删边时清理两端邻接项，删节点时级联删除所有关联边
    #[default]
    Symmetric,
    /// 仅源端删除：删边只清理参数边起点的邻接项，删节点只丢弃其自身邻接表（节点记录保留）
    SourceOnly,
}

/// 图配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 未显式指定权重时使用的默认边权重
    pub default_weight: Weight,
    /// 删除策略
    pub removal: RemovalPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_weight: 1.0,
            removal: RemovalPolicy::Symmetric,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_weight(mut self, weight: Weight) -> Self {
        self.default_weight = weight;
        self
    }

    pub fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if !self.default_weight.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "默认权重必须是有限值, 实际为 {}",
                self.default_weight
            )));
        }
        Ok(())
    }

    /// 从 JSON 字符串加载配置，缺省字段取默认值
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
