//! leaf 端口预算与并行链路
//!
//! 每个 leaf 先按固定比例预留下行端口，剩余的作为上行预算平分给各 spine。

use super::breakout::{ResolvedBreakout, resolve_leaf_breakout};
use super::devices::{DeviceCount, resolve_device_count};
use super::opts::EngineOpts;
use crate::error::{ConfigurationError, PortOverflowError, Result};
use crate::model::{ParallelLinksMode, TopologyConfiguration};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortBudget {
    /// leaf 的有效（breakout 之后的）端口数
    pub leaf_ports: u32,
    pub estimated_downlink_ports: u32,
    pub available_uplink_ports: u32,
}

impl PortBudget {
    pub fn new(leaf_ports: u32, downlink_reservation: f64) -> Self {
        let reserved = (f64::from(leaf_ports) * downlink_reservation.clamp(0.0, 1.0)).floor();
        let estimated_downlink_ports = (reserved as u32).min(leaf_ports);
        Self {
            leaf_ports,
            estimated_downlink_ports,
            available_uplink_ports: leaf_ports - estimated_downlink_ports,
        }
    }
}

/// 一个 leaf 的上行分配方案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelLinkPlan {
    pub budget: PortBudget,
    pub spines: u32,
    pub enabled: bool,
    pub mode: ParallelLinksMode,
    pub per_spine: u32,
}

impl ParallelLinkPlan {
    /// 每个 leaf 实际占用的上行端口数
    pub fn requested_uplink_ports(&self) -> u64 {
        u64::from(self.per_spine) * u64::from(self.spines)
    }

    pub fn overflow(&self) -> u64 {
        self.requested_uplink_ports()
            .saturating_sub(u64::from(self.budget.available_uplink_ports))
    }

    /// 相等时合法（零余量）。未启用并行链路时没有请求，不受预算约束。
    pub fn check(&self) -> std::result::Result<(), PortOverflowError> {
        let overflow = self.overflow();
        if !self.enabled || overflow == 0 {
            return Ok(());
        }
        Err(PortOverflowError {
            per_spine: self.per_spine,
            spines: self.spines,
            requested: self.requested_uplink_ports(),
            available: self.budget.available_uplink_ports,
            overflow,
        })
    }
}

/// 自动模式：上行预算平分给每个 spine，至少 1 条；没有 spine 时固定为 1。
pub fn auto_links_per_spine(available_uplink_ports: u32, spines: u32) -> u32 {
    if spines == 0 {
        return 1;
    }
    (available_uplink_ports / spines).max(1)
}

pub fn plan_parallel_links(
    config: &TopologyConfiguration,
    opts: &EngineOpts,
) -> Result<ParallelLinkPlan> {
    let devices = resolve_device_count(config)?;
    let leaf = resolve_leaf_breakout(config)?;
    Ok(plan_with(config, &devices, &leaf, opts)?)
}

pub(crate) fn plan_with(
    config: &TopologyConfiguration,
    devices: &DeviceCount,
    leaf: &ResolvedBreakout,
    opts: &EngineOpts,
) -> std::result::Result<ParallelLinkPlan, ConfigurationError> {
    let budget = PortBudget::new(leaf.effective_port_count, opts.downlink_reservation);

    let per_spine = if !config.parallel_links_enabled {
        1
    } else {
        match config.parallel_links_mode {
            ParallelLinksMode::Auto => {
                auto_links_per_spine(budget.available_uplink_ports, devices.spines)
            }
            ParallelLinksMode::Manual => config.parallel_links_per_spine,
        }
    };
    // 有 spine 层时每个 spine 至少 1 条
    if per_spine == 0 && devices.has_spine_layer() {
        return Err(ConfigurationError::ZeroParallelLinks {
            spines: devices.spines,
        });
    }

    Ok(ParallelLinkPlan {
        budget,
        spines: devices.spines,
        enabled: config.parallel_links_enabled,
        mode: config.parallel_links_mode,
        per_spine,
    })
}

/// 实际生效的每 spine 链路数（未启用并行链路时为 1）
pub fn get_parallel_links_per_spine(config: &TopologyConfiguration) -> Result<u32> {
    get_parallel_links_per_spine_with(config, &EngineOpts::default())
}

pub fn get_parallel_links_per_spine_with(
    config: &TopologyConfiguration,
    opts: &EngineOpts,
) -> Result<u32> {
    Ok(plan_parallel_links(config, opts)?.per_spine)
}

/// 自动模式下会得到的每 spine 链路数，与当前模式无关
pub fn calculate_auto_parallel_links(config: &TopologyConfiguration) -> Result<u32> {
    calculate_auto_parallel_links_with(config, &EngineOpts::default())
}

pub fn calculate_auto_parallel_links_with(
    config: &TopologyConfiguration,
    opts: &EngineOpts,
) -> Result<u32> {
    let devices = resolve_device_count(config)?;
    let leaf = resolve_leaf_breakout(config)?;
    let budget = PortBudget::new(leaf.effective_port_count, opts.downlink_reservation);
    Ok(auto_links_per_spine(
        budget.available_uplink_ports,
        devices.spines,
    ))
}

/// 供表单展示的校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelLinkValidation {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<u64>,
}

impl From<&ParallelLinkPlan> for ParallelLinkValidation {
    fn from(plan: &ParallelLinkPlan) -> Self {
        match plan.check() {
            Ok(()) => ParallelLinkValidation {
                valid: true,
                reason: None,
                overflow: None,
            },
            Err(err) => ParallelLinkValidation {
                valid: false,
                reason: Some(err.to_string()),
                overflow: Some(err.overflow),
            },
        }
    }
}

pub fn validate_parallel_links(config: &TopologyConfiguration) -> Result<ParallelLinkValidation> {
    validate_parallel_links_with(config, &EngineOpts::default())
}

/// 与 `calculate_all_metrics_with` 使用同一份 `opts`，两者对同一拓扑的结论一致
pub fn validate_parallel_links_with(
    config: &TopologyConfiguration,
    opts: &EngineOpts,
) -> Result<ParallelLinkValidation> {
    let plan = plan_parallel_links(config, opts)?;
    Ok(ParallelLinkValidation::from(&plan))
}
