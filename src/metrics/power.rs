//! 功耗（W）：与成本同口径，光模块数量取自同一个 [`LinkPlan`]。

use super::cost::{Breakdown, SwitchTotals, optics_total};
use super::devices::DeviceCount;
use super::links::LinkPlan;
use crate::error::ConfigurationError;
use crate::model::TopologyConfiguration;

pub fn calculate_power(
    config: &TopologyConfiguration,
    devices: &DeviceCount,
    links: &LinkPlan,
) -> Result<Breakdown, ConfigurationError> {
    let power = &config.power_usage;
    let switches = SwitchTotals::new(devices, power.spine, power.leaf);
    let optics = optics_total(
        links,
        &power.optics,
        ConfigurationError::MissingOpticsPower,
    )?;
    Ok(Breakdown::new(switches, optics))
}
