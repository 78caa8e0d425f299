use super::speed::{BreakoutMode, PortSpeed};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 某个速率下可选的 breakout 方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakoutOption {
    #[serde(rename = "type")]
    pub mode: BreakoutMode,
    pub factor: u32,
}

impl BreakoutOption {
    pub const fn new(mode: BreakoutMode, factor: u32) -> Self {
        Self { mode, factor }
    }
}

/// 速率 -> 该速率下有序的 breakout 选项
pub type BreakoutTable = BTreeMap<PortSpeed, Vec<BreakoutOption>>;

/// 速率 -> 数值（单价或功耗）
pub type SpeedTable = BTreeMap<PortSpeed, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchConfig {
    pub port_count: u32,
    pub port_speed: PortSpeed,
    pub breakout_mode: BreakoutMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafConfig {
    pub port_count: u32,
    pub port_speed: PortSpeed,
    pub breakout_mode: BreakoutMode,
    /// 面向终端的下行速率
    pub downlink_speed: PortSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchCost {
    pub spine: f64,
    pub leaf: f64,
}

impl Default for SwitchCost {
    fn default() -> Self {
        Self {
            spine: 50_000.0,
            leaf: 25_000.0,
        }
    }
}

/// 功耗参数（瓦特）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUsage {
    pub spine: f64,
    pub leaf: f64,
    #[serde(default = "default_optics_power")]
    pub optics: SpeedTable,
}

impl Default for PowerUsage {
    fn default() -> Self {
        Self {
            spine: 1_500.0,
            leaf: 800.0,
            optics: default_optics_power(),
        }
    }
}

/// 时延参数：每跳交换时延（µs）与光纤时延（µs/km）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyParameters {
    pub switch_latency: f64,
    pub fiber_latency: f64,
}

impl Default for LatencyParameters {
    fn default() -> Self {
        Self {
            switch_latency: 0.5,
            fiber_latency: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RackSpaceParameters {
    pub spine_rack_units: u32,
    pub leaf_rack_units: u32,
}

impl Default for RackSpaceParameters {
    fn default() -> Self {
        Self {
            spine_rack_units: 2,
            leaf_rack_units: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallelLinksMode {
    /// 根据 leaf 上行端口预算自动平分给每个 spine
    #[default]
    Auto,
    /// 使用配置中的 `parallel_links_per_spine`
    Manual,
}

/// 一个拓扑的完整结构配置（计算期间只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyConfiguration {
    pub num_spines: u32,
    pub num_leafs: u32,
    /// 1 表示仅 leaf 的单层（rail-only）设计，>= 2 表示 Clos
    pub num_tiers: u32,
    pub spine_config: SwitchConfig,
    pub leaf_config: LeafConfig,
    #[serde(default = "default_breakout_options")]
    pub breakout_options: BreakoutTable,
    #[serde(default)]
    pub switch_cost: SwitchCost,
    #[serde(default = "default_optics_cost")]
    pub optics_cost: SpeedTable,
    #[serde(default)]
    pub power_usage: PowerUsage,
    #[serde(default)]
    pub latency_parameters: LatencyParameters,
    #[serde(default)]
    pub rack_space_parameters: RackSpaceParameters,
    #[serde(default)]
    pub parallel_links_enabled: bool,
    #[serde(default)]
    pub parallel_links_mode: ParallelLinksMode,
    #[serde(default = "default_parallel_links_per_spine")]
    pub parallel_links_per_spine: u32,
    #[serde(default)]
    pub disjointed_spines: bool,
    #[serde(default)]
    pub rail_optimized: bool,
}

impl TopologyConfiguration {
    /// 单层（rail-only）设计：层数标志优先于 spine 数量
    pub fn is_rail_only(&self) -> bool {
        self.num_tiers == 1
    }
}

impl Default for TopologyConfiguration {
    /// 参考设计：4 spine x 8 leaf，64 口 400G，不拆分
    fn default() -> Self {
        Self {
            num_spines: 4,
            num_leafs: 8,
            num_tiers: 2,
            spine_config: SwitchConfig {
                port_count: 64,
                port_speed: PortSpeed::G400,
                breakout_mode: BreakoutMode::native(PortSpeed::G400),
            },
            leaf_config: LeafConfig {
                port_count: 64,
                port_speed: PortSpeed::G400,
                breakout_mode: BreakoutMode::native(PortSpeed::G400),
                downlink_speed: PortSpeed::G400,
            },
            breakout_options: default_breakout_options(),
            switch_cost: SwitchCost::default(),
            optics_cost: default_optics_cost(),
            power_usage: PowerUsage::default(),
            latency_parameters: LatencyParameters::default(),
            rack_space_parameters: RackSpaceParameters::default(),
            parallel_links_enabled: false,
            parallel_links_mode: ParallelLinksMode::Auto,
            parallel_links_per_spine: default_parallel_links_per_spine(),
            disjointed_spines: false,
            rail_optimized: false,
        }
    }
}

fn default_parallel_links_per_spine() -> u32 {
    1
}

/// 各速率常见的 breakout 方式
pub fn default_breakout_options() -> BreakoutTable {
    use PortSpeed::*;

    let table: [(PortSpeed, &[(u32, PortSpeed)]); 8] = [
        (G10, &[(1, G10)]),
        (G25, &[(1, G25)]),
        (G40, &[(1, G40), (4, G10)]),
        (G50, &[(1, G50), (2, G25)]),
        (G100, &[(1, G100), (2, G50), (4, G25)]),
        (G200, &[(1, G200), (2, G100), (4, G50)]),
        (G400, &[(1, G400), (2, G200), (4, G100)]),
        (G800, &[(1, G800), (2, G400), (4, G200), (8, G100)]),
    ];

    table
        .into_iter()
        .map(|(speed, modes)| {
            let options: Vec<BreakoutOption> = modes
                .iter()
                .map(|&(lanes, lane)| BreakoutOption::new(BreakoutMode::new(lanes, lane), lanes))
                .collect();
            (speed, options)
        })
        .collect()
}

/// 单个光模块价格
pub fn default_optics_cost() -> SpeedTable {
    use PortSpeed::*;
    [
        (G10, 20.0),
        (G25, 40.0),
        (G40, 100.0),
        (G50, 150.0),
        (G100, 250.0),
        (G200, 500.0),
        (G400, 900.0),
        (G800, 1_600.0),
    ]
    .into_iter()
    .collect()
}

/// 单个光模块功耗（W）
pub fn default_optics_power() -> SpeedTable {
    use PortSpeed::*;
    [
        (G10, 1.0),
        (G25, 1.5),
        (G40, 3.5),
        (G50, 4.0),
        (G100, 4.5),
        (G200, 8.0),
        (G400, 12.0),
        (G800, 16.0),
    ]
    .into_iter()
    .collect()
}
