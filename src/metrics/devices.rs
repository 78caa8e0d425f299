use crate::error::ConfigurationError;
use crate::model::TopologyConfiguration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCount {
    pub spines: u32,
    pub leafs: u32,
    pub total: u32,
}

impl DeviceCount {
    pub fn has_spine_layer(&self) -> bool {
        self.spines > 0
    }
}

/// 唯一决定 spine/leaf 数量的地方：`num_tiers == 1` 时 spine 一律为 0，
/// 不管 `num_spines` 存的是什么。
pub fn resolve_device_count(
    config: &TopologyConfiguration,
) -> Result<DeviceCount, ConfigurationError> {
    if config.num_tiers == 0 {
        return Err(ConfigurationError::InvalidTierCount(config.num_tiers));
    }

    let spines = if config.is_rail_only() {
        0
    } else {
        config.num_spines
    };
    let leafs = config.num_leafs;

    Ok(DeviceCount {
        spines,
        leafs,
        total: spines.saturating_add(leafs),
    })
}
