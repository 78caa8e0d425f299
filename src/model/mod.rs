//! 拓扑数据模型
//!
//! 包含端口速率/breakout 标签、拓扑配置及其默认参考表，以及导入导出用的拓扑记录。

mod config;
mod speed;
mod topology;

pub use config::{
    BreakoutOption, BreakoutTable, LatencyParameters, LeafConfig, ParallelLinksMode, PowerUsage,
    RackSpaceParameters, SpeedTable, SwitchConfig, SwitchCost, TopologyConfiguration,
    default_breakout_options, default_optics_cost, default_optics_power,
};
pub use speed::{BreakoutMode, LabelError, PortSpeed};
pub use topology::{TOPOLOGY_SCHEMA_VERSION, Topology};
