//! 引擎可调参数
//!
//! 这些是引擎层面的启发式常量，不属于拓扑配置本身。

/// leaf 端口中预留给下行（终端）的比例
pub const DEFAULT_DOWNLINK_RESERVATION: f64 = 0.5;
/// 每跳假定的光纤长度（km）
pub const DEFAULT_CABLE_LENGTH_KM: f64 = 1.0;
/// 标准机柜高度（U）
pub const DEFAULT_RACK_UNITS_PER_RACK: u32 = 42;

/// 各评分维度的归一化尺度：`score = 100 - min(100, raw / scale * 20)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreScales {
    pub cost: f64,
    pub power: f64,
    /// 端到端时延（µs）
    pub latency: f64,
    pub oversubscription: f64,
    /// 机架单元（U）
    pub rack_space: f64,
    /// 线缆根数
    pub cabling: f64,
}

impl Default for ScoreScales {
    fn default() -> Self {
        Self {
            cost: 1_000_000.0,
            power: 10_000.0,
            latency: 10.0,
            oversubscription: 1.0,
            rack_space: 42.0,
            cabling: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOpts {
    pub downlink_reservation: f64,
    pub cable_length_km: f64,
    pub rack_units_per_rack: u32,
    pub score_scales: ScoreScales,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            downlink_reservation: DEFAULT_DOWNLINK_RESERVATION,
            cable_length_km: DEFAULT_CABLE_LENGTH_KM,
            rack_units_per_rack: DEFAULT_RACK_UNITS_PER_RACK,
            score_scales: ScoreScales::default(),
        }
    }
}
