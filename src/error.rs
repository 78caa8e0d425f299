//! 错误类型
//!
//! 引擎只会抛出两类错误：配置错误（不可恢复，拓扑本身无效）与端口溢出
//! （并行链路请求超出 leaf 的上行端口预算，可由调用方重新输入）。
//! 单层（rail-only）拓扑中的除零情况不是错误，而是用哨兵值表示。

use crate::model::{BreakoutMode, PortSpeed};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 交换机角色（用于错误信息定位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchRole {
    Spine,
    Leaf,
}

impl std::fmt::Display for SwitchRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwitchRole::Spine => f.write_str("spine"),
            SwitchRole::Leaf => f.write_str("leaf"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("no breakout options defined for {role} port speed {speed}")]
    MissingBreakoutOptions { role: SwitchRole, speed: PortSpeed },

    #[error("breakout mode {mode} is not available for {role} port speed {speed}")]
    UnknownBreakoutMode {
        role: SwitchRole,
        speed: PortSpeed,
        mode: BreakoutMode,
    },

    #[error("breakout mode {mode} at {speed} has invalid factor {factor}")]
    InvalidBreakoutFactor {
        speed: PortSpeed,
        mode: BreakoutMode,
        factor: u32,
    },

    #[error("{role} port count must be greater than zero")]
    ZeroPortCount { role: SwitchRole },

    #[error("parallel links per spine must be at least 1 with {spines} spines")]
    ZeroParallelLinks { spines: u32 },

    #[error("tier count must be at least 1, got {0}")]
    InvalidTierCount(u32),

    #[error("no optics cost defined for link speed {0}")]
    MissingOpticsCost(PortSpeed),

    #[error("no optics power usage defined for link speed {0}")]
    MissingOpticsPower(PortSpeed),
}

/// 并行链路请求超出上行端口预算
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{per_spine} links per spine x {spines} spines needs {requested} uplink ports, \
     only {available} available (over by {overflow})"
)]
pub struct PortOverflowError {
    pub per_spine: u32,
    pub spines: u32,
    pub requested: u64,
    pub available: u32,
    pub overflow: u64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("invalid topology configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("port overflow: {0}")]
    PortOverflow(#[from] PortOverflowError),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
