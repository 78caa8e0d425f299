use super::breakout::{ResolvedBreakout, resolve_leaf_breakout, resolve_spine_breakout};
use super::cabling::{Cabling, calculate_cabling};
use super::cost::{Breakdown, calculate_cost};
use super::devices::{DeviceCount, resolve_device_count};
use super::latency::{Latency, calculate_latency};
use super::links::plan_links;
use super::opts::EngineOpts;
use super::oversubscription::{Oversubscription, calculate_oversubscription};
use super::ports::plan_with;
use super::power::calculate_power;
use super::rack::{RackSpace, calculate_rack_space};
use crate::error::{Result, SwitchRole};
use crate::model::TopologyConfiguration;
use crate::observe::{MetricsEvent, MetricsObserver, NoopObserver};
use serde::{Deserialize, Serialize};

/// 单个拓扑的全部指标；每次调用都重新计算，不保留任何状态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    pub device_count: DeviceCount,
    pub cost: Breakdown,
    pub power: Breakdown,
    pub oversubscription: Oversubscription,
    pub latency: Latency,
    pub rack_space: RackSpace,
    pub cabling: Cabling,
}

pub fn calculate_all_metrics(config: &TopologyConfiguration) -> Result<MetricsResult> {
    calculate_all_metrics_with(config, &EngineOpts::default(), &mut NoopObserver)
}

fn breakout_event(
    role: SwitchRole,
    config: &TopologyConfiguration,
    resolved: &ResolvedBreakout,
) -> MetricsEvent {
    let (port_speed, mode) = match role {
        SwitchRole::Spine => (
            config.spine_config.port_speed,
            config.spine_config.breakout_mode,
        ),
        SwitchRole::Leaf => (
            config.leaf_config.port_speed,
            config.leaf_config.breakout_mode,
        ),
    };
    MetricsEvent::Breakout {
        role,
        port_speed,
        mode,
        factor: resolved.factor,
        effective_ports: u64::from(resolved.effective_port_count),
        effective_speed: resolved.effective_speed,
    }
}

/// 依赖顺序：breakout -> 设备数 -> 端口预算 -> 链路 -> 各项指标
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(spines = config.num_spines, leafs = config.num_leafs, tiers = config.num_tiers)
)]
pub fn calculate_all_metrics_with(
    config: &TopologyConfiguration,
    opts: &EngineOpts,
    observer: &mut dyn MetricsObserver,
) -> Result<MetricsResult> {
    let devices = resolve_device_count(config)?;
    observer.on_event(&MetricsEvent::Devices {
        spines: devices.spines,
        leafs: devices.leafs,
        rail_only: config.is_rail_only(),
        disjointed_spines: config.disjointed_spines,
        rail_optimized: config.rail_optimized,
    });

    let leaf = resolve_leaf_breakout(config)?;
    observer.on_event(&breakout_event(SwitchRole::Leaf, config, &leaf));

    // 没有 spine 层时不解析 spine 配置
    let spine = if devices.has_spine_layer() {
        let spine = resolve_spine_breakout(config)?;
        observer.on_event(&breakout_event(SwitchRole::Spine, config, &spine));
        Some(spine)
    } else {
        None
    };

    let plan = plan_with(config, &devices, &leaf, opts)?;
    observer.on_event(&MetricsEvent::ParallelLinks {
        enabled: plan.enabled,
        mode: plan.mode,
        per_spine: plan.per_spine,
        available_uplink_ports: plan.budget.available_uplink_ports,
    });
    plan.check()?;

    let links = plan_links(&devices, plan.per_spine, spine.as_ref(), &leaf);
    observer.on_event(&MetricsEvent::Links {
        link_speed: links.link_speed,
        total_links: links.total_links,
        optics_needed: links.optics_needed,
    });

    let cost = calculate_cost(config, &devices, &links)?;
    let power = calculate_power(config, &devices, &links)?;
    let oversubscription = calculate_oversubscription(
        &devices,
        &links,
        leaf.effective_port_count,
        config.leaf_config.downlink_speed,
    );
    observer.on_event(&MetricsEvent::Oversubscription {
        ratio: oversubscription.ratio.value(),
    });

    let latency = calculate_latency(config, opts.cable_length_km);
    let rack_space = calculate_rack_space(
        &devices,
        &config.rack_space_parameters,
        opts.rack_units_per_rack,
    );
    let cabling = calculate_cabling(&links);

    observer.on_event(&MetricsEvent::Done {
        total_cost: cost.total,
        total_power: power.total,
        latency_us: latency.total,
        racks_needed: rack_space.racks_needed,
    });

    Ok(MetricsResult {
        device_count: devices,
        cost,
        power,
        oversubscription,
        latency,
        rack_space,
        cabling,
    })
}
