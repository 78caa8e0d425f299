use super::breakout::{ResolvedBreakout, negotiate_link_speed};
use super::devices::DeviceCount;
use crate::model::PortSpeed;
use serde::{Deserialize, Serialize};

/// spine-leaf 之间的链路规模；成本、功耗与布线共用同一份，保证数量一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPlan {
    pub link_speed: PortSpeed,
    pub per_spine: u32,
    pub total_links: u64,
    /// 每条链路两端各一个光模块
    pub optics_needed: u64,
    pub spine_breakout: bool,
    pub leaf_breakout: bool,
}

impl LinkPlan {
    pub fn uses_breakout(&self) -> bool {
        self.spine_breakout || self.leaf_breakout
    }
}

/// `spine` 为 `None` 表示没有 spine 层，此时链路数为 0。
pub fn plan_links(
    devices: &DeviceCount,
    per_spine: u32,
    spine: Option<&ResolvedBreakout>,
    leaf: &ResolvedBreakout,
) -> LinkPlan {
    let (link_speed, total_links, spine_breakout) = match spine {
        Some(spine) if devices.has_spine_layer() => (
            negotiate_link_speed(spine, leaf),
            u64::from(devices.spines)
                .saturating_mul(u64::from(devices.leafs))
                .saturating_mul(u64::from(per_spine)),
            spine.is_breakout(),
        ),
        _ => (leaf.effective_speed, 0, false),
    };

    LinkPlan {
        link_speed,
        per_spine,
        total_links,
        optics_needed: total_links.saturating_mul(2),
        spine_breakout,
        leaf_breakout: leaf.is_breakout(),
    }
}
