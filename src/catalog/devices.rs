use crate::model::{BreakoutMode, PortSpeed, TopologyConfiguration};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown device id `{0}`")]
    UnknownDevice(String),
}

/// 目录中的一款交换机
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSpec {
    pub id: String,
    pub name: String,
    pub port_count: u32,
    pub port_speed: PortSpeed,
    pub cost: f64,
    /// W
    pub power: f64,
    pub rack_units: u32,
}

pub trait DeviceCatalog {
    fn device(&self, id: &str) -> Option<&DeviceSpec>;

    fn require(&self, id: &str) -> Result<&DeviceSpec, CatalogError> {
        self.device(id)
            .ok_or_else(|| CatalogError::UnknownDevice(id.to_string()))
    }
}

/// 内置的静态目录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    pub devices: Vec<DeviceSpec>,
}

impl StaticCatalog {
    pub fn builtin() -> Self {
        let spec = |id: &str, name: &str, ports, speed, cost, power, ru| DeviceSpec {
            id: id.to_string(),
            name: name.to_string(),
            port_count: ports,
            port_speed: speed,
            cost,
            power,
            rack_units: ru,
        };

        StaticCatalog {
            devices: vec![
                spec("tor-48x100g", "48x100G ToR", 48, PortSpeed::G100, 18_000.0, 450.0, 1),
                spec("leaf-32x400g", "32x400G leaf", 32, PortSpeed::G400, 30_000.0, 900.0, 1),
                spec("leaf-64x400g", "64x400G leaf", 64, PortSpeed::G400, 45_000.0, 1_300.0, 2),
                spec("spine-64x400g", "64x400G spine", 64, PortSpeed::G400, 55_000.0, 1_500.0, 2),
                spec("spine-64x800g", "64x800G spine", 64, PortSpeed::G800, 90_000.0, 2_200.0, 2),
            ],
        }
    }
}

impl DeviceCatalog for StaticCatalog {
    fn device(&self, id: &str) -> Option<&DeviceSpec> {
        self.devices.iter().find(|d| d.id.eq_ignore_ascii_case(id))
    }
}

/// 用目录中的设备替换 spine/leaf 的端口、价格、功耗与机架参数，返回新的配置。
///
/// 端口一律恢复为不拆分（1x 原速率）；下行速率保持原值。
pub fn apply_devices(
    config: &TopologyConfiguration,
    catalog: &dyn DeviceCatalog,
    spine_id: &str,
    leaf_id: &str,
) -> Result<TopologyConfiguration, CatalogError> {
    let spine = catalog.require(spine_id)?;
    let leaf = catalog.require(leaf_id)?;

    let mut next = config.clone();

    next.spine_config.port_count = spine.port_count;
    next.spine_config.port_speed = spine.port_speed;
    next.spine_config.breakout_mode = BreakoutMode::native(spine.port_speed);

    next.leaf_config.port_count = leaf.port_count;
    next.leaf_config.port_speed = leaf.port_speed;
    next.leaf_config.breakout_mode = BreakoutMode::native(leaf.port_speed);

    next.switch_cost.spine = spine.cost;
    next.switch_cost.leaf = leaf.cost;
    next.power_usage.spine = spine.power;
    next.power_usage.leaf = leaf.power;
    next.rack_space_parameters.spine_rack_units = spine.rack_units;
    next.rack_space_parameters.leaf_rack_units = leaf.rack_units;

    Ok(next)
}
