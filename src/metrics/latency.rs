use crate::model::TopologyConfiguration;
use serde::{Deserialize, Serialize};

/// 端到端时延估算（µs），闭式模型而非测量值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Latency {
    pub switch_latency: f64,
    pub fiber_latency: f64,
    pub hops: u32,
    pub total: f64,
}

/// leaf -> spine -> ... -> spine -> leaf 的跳数；单层设计记为 0 跳。
pub fn hop_count(num_tiers: u32) -> u32 {
    if num_tiers <= 1 {
        return 0;
    }
    2 * (num_tiers - 1)
}

pub fn calculate_latency(config: &TopologyConfiguration, cable_length_km: f64) -> Latency {
    let hops = hop_count(config.num_tiers);
    let params = &config.latency_parameters;

    let switch_latency = f64::from(hops) * params.switch_latency;
    let fiber_latency = f64::from(hops) * params.fiber_latency * cable_length_km;

    Latency {
        switch_latency,
        fiber_latency,
        hops,
        total: switch_latency + fiber_latency,
    }
}
