//! 拓扑指标引擎
//!
//! 给定一个完整的拓扑配置，推导设备数量、成本、功耗、收敛比、时延、机架空间与布线，
//! 以及多拓扑之间的归一化评分。所有计算都是纯函数：不修改输入，不保留状态。
//!
//! 数据流：breakout / 端口预算 -> 设备数 -> 各项计算 -> 汇总 ->（可选）对比评分

mod aggregate;
mod breakout;
mod cabling;
mod compare;
mod cost;
mod devices;
mod latency;
mod links;
mod opts;
mod oversubscription;
mod ports;
mod power;
mod rack;

pub use aggregate::{MetricsResult, calculate_all_metrics, calculate_all_metrics_with};
pub use breakout::{
    ResolvedBreakout, negotiate_link_speed, resolve_breakout, resolve_leaf_breakout,
    resolve_spine_breakout,
};
pub use cabling::{Cabling, calculate_cabling};
pub use compare::{
    ComparisonResult, Scores, compare_topologies, compare_topologies_with, normalize_score,
};
pub use cost::{Breakdown, SwitchTotals, calculate_cost};
pub use devices::{DeviceCount, resolve_device_count};
pub use latency::{Latency, calculate_latency, hop_count};
pub use links::{LinkPlan, plan_links};
pub use opts::{
    DEFAULT_CABLE_LENGTH_KM, DEFAULT_DOWNLINK_RESERVATION, DEFAULT_RACK_UNITS_PER_RACK,
    EngineOpts, ScoreScales,
};
pub use oversubscription::{
    NOT_APPLICABLE, Oversubscription, OversubscriptionRatio, calculate_oversubscription, round2,
};
pub use ports::{
    ParallelLinkPlan, ParallelLinkValidation, PortBudget, auto_links_per_spine,
    calculate_auto_parallel_links, calculate_auto_parallel_links_with,
    get_parallel_links_per_spine, get_parallel_links_per_spine_with, plan_parallel_links,
    validate_parallel_links, validate_parallel_links_with,
};
pub use power::calculate_power;
pub use rack::{RackSpace, calculate_rack_space};
