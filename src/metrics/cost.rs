use super::devices::DeviceCount;
use super::links::LinkPlan;
use crate::error::ConfigurationError;
use crate::model::{PortSpeed, SpeedTable, TopologyConfiguration};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SwitchTotals {
    pub spine: f64,
    pub leaf: f64,
    pub total: f64,
}

impl SwitchTotals {
    pub fn new(devices: &DeviceCount, per_spine: f64, per_leaf: f64) -> Self {
        let spine = f64::from(devices.spines) * per_spine;
        let leaf = f64::from(devices.leafs) * per_leaf;
        Self {
            spine,
            leaf,
            total: spine + leaf,
        }
    }
}

/// 交换机 + 光模块的汇总（成本与功耗共用此结构）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub switches: SwitchTotals,
    pub optics: f64,
    pub total: f64,
}

impl Breakdown {
    pub(crate) fn new(switches: SwitchTotals, optics: f64) -> Self {
        Self {
            switches,
            optics,
            total: switches.total + optics,
        }
    }
}

/// 光模块单价/功耗只在确实需要光模块时才查表。
pub(crate) fn optics_total(
    links: &LinkPlan,
    table: &SpeedTable,
    missing: fn(PortSpeed) -> ConfigurationError,
) -> Result<f64, ConfigurationError> {
    if links.optics_needed == 0 {
        return Ok(0.0);
    }
    let unit = table
        .get(&links.link_speed)
        .copied()
        .ok_or_else(|| missing(links.link_speed))?;
    Ok(links.optics_needed as f64 * unit)
}

pub fn calculate_cost(
    config: &TopologyConfiguration,
    devices: &DeviceCount,
    links: &LinkPlan,
) -> Result<Breakdown, ConfigurationError> {
    let switches = SwitchTotals::new(
        devices,
        config.switch_cost.spine,
        config.switch_cost.leaf,
    );
    let optics = optics_total(
        links,
        &config.optics_cost,
        ConfigurationError::MissingOpticsCost,
    )?;
    Ok(Breakdown::new(switches, optics))
}
