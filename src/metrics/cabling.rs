use super::links::LinkPlan;
use serde::{Deserialize, Serialize};

/// spine-leaf 线缆数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cabling {
    pub standard: u64,
    pub breakout: u64,
    pub total: u64,
}

/// 每条链路只计一次：任一端使用 factor > 1 的 breakout 时记为 breakout 线缆，
/// 两端同时 breakout 也不重复计数。
pub fn calculate_cabling(links: &LinkPlan) -> Cabling {
    let (standard, breakout) = if links.uses_breakout() {
        (0, links.total_links)
    } else {
        (links.total_links, 0)
    };

    Cabling {
        standard,
        breakout,
        total: standard + breakout,
    }
}
