use crate::model::{BreakoutMode, ParallelLinksMode, PortSpeed, TopologyConfiguration};

/// 2 层 Clos，spine/leaf 均为 400G 不拆分
pub fn clos(spines: u32, leafs: u32, leaf_ports: u32) -> TopologyConfiguration {
    let mut cfg = TopologyConfiguration::default();
    cfg.num_spines = spines;
    cfg.num_leafs = leafs;
    cfg.num_tiers = 2;
    cfg.leaf_config.port_count = leaf_ports;
    cfg
}

pub fn auto_links(mut cfg: TopologyConfiguration) -> TopologyConfiguration {
    cfg.parallel_links_enabled = true;
    cfg.parallel_links_mode = ParallelLinksMode::Auto;
    cfg
}

pub fn manual_links(mut cfg: TopologyConfiguration, per_spine: u32) -> TopologyConfiguration {
    cfg.parallel_links_enabled = true;
    cfg.parallel_links_mode = ParallelLinksMode::Manual;
    cfg.parallel_links_per_spine = per_spine;
    cfg
}

/// 单层设计，但故意保留一个非零的 spine 数量
pub fn rail_only(leafs: u32) -> TopologyConfiguration {
    let mut cfg = TopologyConfiguration::default();
    cfg.num_tiers = 1;
    cfg.num_spines = 4;
    cfg.num_leafs = leafs;
    cfg
}

pub fn leaf_breakout(
    mut cfg: TopologyConfiguration,
    lanes: u32,
    lane: PortSpeed,
) -> TopologyConfiguration {
    cfg.leaf_config.breakout_mode = BreakoutMode::new(lanes, lane);
    cfg
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
