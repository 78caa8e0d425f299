use super::devices::DeviceCount;
use crate::model::RackSpaceParameters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RackSpace {
    pub spine_rack_units: u64,
    pub leaf_rack_units: u64,
    pub total_rack_units: u64,
    pub racks_needed: u64,
}

pub fn calculate_rack_space(
    devices: &DeviceCount,
    params: &RackSpaceParameters,
    rack_units_per_rack: u32,
) -> RackSpace {
    let spine_rack_units = u64::from(devices.spines) * u64::from(params.spine_rack_units);
    let leaf_rack_units = u64::from(devices.leafs) * u64::from(params.leaf_rack_units);
    let total_rack_units = spine_rack_units + leaf_rack_units;
    let per_rack = u64::from(rack_units_per_rack.max(1));

    RackSpace {
        spine_rack_units,
        leaf_rack_units,
        total_rack_units,
        racks_needed: total_rack_units.div_ceil(per_rack),
    }
}
