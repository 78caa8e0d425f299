use super::fixtures::{assert_close, clos, leaf_breakout, manual_links, rail_only};
use crate::error::{ConfigurationError, MetricsError};
use crate::metrics::{
    DeviceCount, EngineOpts, OversubscriptionRatio, ResolvedBreakout, calculate_all_metrics,
    calculate_all_metrics_with, hop_count, plan_links,
};
use crate::model::{BreakoutMode, PortSpeed, TopologyConfiguration};
use crate::observe::NoopObserver;

#[test]
fn reference_design_metrics() {
    let cfg = TopologyConfiguration::default();
    let m = calculate_all_metrics(&cfg).expect("metrics");

    assert_eq!(m.device_count.spines, 4);
    assert_eq!(m.device_count.leafs, 8);
    assert_eq!(m.device_count.total, 12);

    assert_close(m.cost.switches.spine, 200_000.0);
    assert_close(m.cost.switches.leaf, 200_000.0);
    assert_close(m.cost.switches.total, 400_000.0);
    // 4 * 8 links, two 400G optics each
    assert_close(m.cost.optics, 64.0 * 900.0);
    assert_close(m.cost.total, 457_600.0);

    assert_close(m.power.switches.total, 12_400.0);
    assert_close(m.power.optics, 64.0 * 12.0);
    assert_close(m.power.total, 13_168.0);

    assert_eq!(m.oversubscription.uplink_ports_per_leaf, 4);
    assert_eq!(m.oversubscription.downlink_ports_per_leaf, 60);
    assert_eq!(m.oversubscription.uplink_capacity, 1_600);
    assert_eq!(m.oversubscription.downlink_capacity, 24_000);
    assert_eq!(m.oversubscription.ratio, OversubscriptionRatio::Ratio(15.0));

    assert_eq!(m.latency.hops, 2);
    assert_close(m.latency.switch_latency, 1.0);
    assert_close(m.latency.fiber_latency, 10.0);
    assert_close(m.latency.total, 11.0);

    assert_eq!(m.rack_space.spine_rack_units, 8);
    assert_eq!(m.rack_space.leaf_rack_units, 8);
    assert_eq!(m.rack_space.total_rack_units, 16);
    assert_eq!(m.rack_space.racks_needed, 1);

    assert_eq!(m.cabling.standard, 32);
    assert_eq!(m.cabling.breakout, 0);
    assert_eq!(m.cabling.total, 32);
}

#[test]
fn rail_only_zeroes_spine_quantities_regardless_of_stored_count() {
    let cfg = rail_only(6);
    assert_eq!(cfg.num_spines, 4);
    let m = calculate_all_metrics(&cfg).expect("rail-only is valid");

    assert_eq!(m.device_count.spines, 0);
    assert_eq!(m.device_count.total, 6);
    assert_close(m.cost.switches.spine, 0.0);
    assert_close(m.power.switches.spine, 0.0);
    assert_close(m.cost.optics, 0.0);
    assert_close(m.power.optics, 0.0);
    assert_eq!(m.rack_space.spine_rack_units, 0);
    assert_eq!(m.cabling.total, 0);

    assert_eq!(m.oversubscription.ratio, OversubscriptionRatio::NotApplicable);
    assert_eq!(m.oversubscription.uplink_capacity, 0);
    assert_eq!(m.oversubscription.downlink_ports_per_leaf, 64);
    assert_eq!(m.oversubscription.ratio.to_string(), "N/A");

    assert_eq!(m.latency.hops, 0);
    assert_close(m.latency.total, 0.0);
}

#[test]
fn rail_only_does_not_resolve_spine_config() {
    let mut cfg = rail_only(4);
    cfg.spine_config.breakout_mode = BreakoutMode::new(8, PortSpeed::G10);
    cfg.optics_cost.clear();
    cfg.power_usage.optics.clear();
    assert!(calculate_all_metrics(&cfg).is_ok());
}

#[test]
fn doubling_parallel_links_doubles_optics_cost_and_power() {
    let single = calculate_all_metrics(&manual_links(clos(4, 4, 64), 2)).expect("x2");
    let double = calculate_all_metrics(&manual_links(clos(4, 4, 64), 4)).expect("x4");

    assert_close(double.cost.optics, single.cost.optics * 2.0);
    assert_close(double.power.optics, single.power.optics * 2.0);
    assert_close(single.cost.optics, (2 * 4 * 4 * 2) as f64 * 900.0);
    assert_close(double.cost.switches.total, single.cost.switches.total);
    assert_eq!(double.cabling.total, single.cabling.total * 2);
}

#[test]
fn optics_follow_negotiated_link_speed() {
    let cfg = leaf_breakout(clos(2, 2, 32), 4, PortSpeed::G100);
    let m = calculate_all_metrics(&cfg).expect("metrics");

    // 2 * 2 links at 100G
    assert_close(m.cost.optics, 8.0 * 250.0);
    assert_close(m.power.optics, 8.0 * 4.5);
    assert_eq!(m.cabling.standard, 0);
    assert_eq!(m.cabling.breakout, 4);
    assert_eq!(m.cabling.total, 4);

    // leaf has 128 logical ports, 2 go up at 100G, 126 go down at 400G
    assert_eq!(m.oversubscription.uplink_capacity, 200);
    assert_eq!(m.oversubscription.downlink_capacity, 126 * 400);
    assert_eq!(m.oversubscription.ratio, OversubscriptionRatio::Ratio(252.0));
}

#[test]
fn both_ends_breaking_out_count_each_cable_once() {
    let mut cfg = leaf_breakout(clos(2, 3, 32), 2, PortSpeed::G200);
    cfg.spine_config.breakout_mode = BreakoutMode::new(2, PortSpeed::G200);
    let m = calculate_all_metrics(&cfg).expect("metrics");
    assert_eq!(m.cabling.breakout, 6);
    assert_eq!(m.cabling.standard, 0);
    assert_eq!(m.cabling.total, 6);
}

#[test]
fn ratio_is_rounded_to_two_decimals() {
    let mut cfg = manual_links(clos(3, 2, 64), 10);
    cfg.leaf_config.downlink_speed = PortSpeed::G100;
    let m = calculate_all_metrics(&cfg).expect("metrics");
    // 30 uplinks at 400G vs 34 downlinks at 100G
    assert_eq!(m.oversubscription.uplink_capacity, 12_000);
    assert_eq!(m.oversubscription.downlink_capacity, 3_400);
    assert_eq!(m.oversubscription.ratio, OversubscriptionRatio::Ratio(0.28));
}

#[test]
fn missing_optics_price_is_a_configuration_error() {
    let mut cfg = clos(2, 2, 32);
    cfg.optics_cost.remove(&PortSpeed::G400);
    assert_eq!(
        calculate_all_metrics(&cfg),
        Err(MetricsError::Configuration(
            ConfigurationError::MissingOpticsCost(PortSpeed::G400)
        ))
    );

    let mut cfg = clos(2, 2, 32);
    cfg.power_usage.optics.remove(&PortSpeed::G400);
    assert_eq!(
        calculate_all_metrics(&cfg),
        Err(MetricsError::Configuration(
            ConfigurationError::MissingOpticsPower(PortSpeed::G400)
        ))
    );
}

#[test]
fn zero_tiers_is_rejected() {
    let mut cfg = clos(2, 2, 32);
    cfg.num_tiers = 0;
    assert_eq!(
        calculate_all_metrics(&cfg),
        Err(MetricsError::Configuration(
            ConfigurationError::InvalidTierCount(0)
        ))
    );
}

#[test]
fn three_tier_latency_counts_four_hops() {
    assert_eq!(hop_count(1), 0);
    assert_eq!(hop_count(2), 2);
    assert_eq!(hop_count(3), 4);

    let mut cfg = clos(2, 2, 32);
    cfg.num_tiers = 3;
    let m = calculate_all_metrics(&cfg).expect("metrics");
    assert_eq!(m.latency.hops, 4);
    assert_close(m.latency.switch_latency, 2.0);
    assert_close(m.latency.fiber_latency, 20.0);
}

#[test]
fn engine_opts_override_cable_length_and_rack_size() {
    let cfg = clos(16, 48, 64);
    let opts = EngineOpts {
        cable_length_km: 0.1,
        rack_units_per_rack: 40,
        ..EngineOpts::default()
    };
    let m = calculate_all_metrics_with(&cfg, &opts, &mut NoopObserver).expect("metrics");
    assert_close(m.latency.fiber_latency, 1.0);
    // 16 * 2U + 48 * 1U = 80U
    assert_eq!(m.rack_space.total_rack_units, 80);
    assert_eq!(m.rack_space.racks_needed, 2);

    let default = calculate_all_metrics(&cfg).expect("metrics");
    assert_eq!(default.rack_space.racks_needed, 2);
    let mut taller = cfg.clone();
    taller.num_leafs = 53;
    let m = calculate_all_metrics(&taller).expect("metrics");
    assert_eq!(m.rack_space.total_rack_units, 85);
    assert_eq!(m.rack_space.racks_needed, 3);
}

#[test]
fn repeated_calls_are_identical_and_leave_input_untouched() {
    let cfg = manual_links(clos(4, 8, 64), 4);
    let before = cfg.clone();
    let first = calculate_all_metrics(&cfg).expect("first");
    let second = calculate_all_metrics(&cfg).expect("second");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("encode"),
        serde_json::to_string(&second).expect("encode")
    );
    assert_eq!(cfg, before);
}

#[test]
fn link_counts_saturate_instead_of_wrapping() {
    let devices = DeviceCount {
        spines: u32::MAX,
        leafs: u32::MAX,
        total: u32::MAX,
    };
    let native = ResolvedBreakout {
        factor: 1,
        effective_port_count: u32::MAX,
        effective_speed: PortSpeed::G400,
    };
    let links = plan_links(&devices, u32::MAX, Some(&native), &native);
    assert_eq!(links.total_links, u64::MAX);
    assert_eq!(links.optics_needed, u64::MAX);

    // (2^32 - 1)^2 links fit in u64, twice that many optics do not
    let links = plan_links(&devices, 1, Some(&native), &native);
    assert_eq!(links.total_links, u64::from(u32::MAX) * u64::from(u32::MAX));
    assert_eq!(links.optics_needed, u64::MAX);
}
