use crate::error::SwitchRole;
use crate::model::{BreakoutMode, ParallelLinksMode, PortSpeed};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 计算过程中的一个步骤结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricsEvent {
    /// breakout 解析完成
    Breakout {
        role: SwitchRole,
        port_speed: PortSpeed,
        mode: BreakoutMode,
        factor: u32,
        effective_ports: u64,
        effective_speed: PortSpeed,
    },
    /// 每个 leaf 到每个 spine 的并行链路数已确定
    ParallelLinks {
        enabled: bool,
        mode: ParallelLinksMode,
        per_spine: u32,
        available_uplink_ports: u32,
    },
    /// 设备数量（rail-only 时 spine 为 0）
    Devices {
        spines: u32,
        leafs: u32,
        rail_only: bool,
        disjointed_spines: bool,
        rail_optimized: bool,
    },
    /// spine-leaf 链路与光模块数量
    Links {
        link_speed: PortSpeed,
        total_links: u64,
        optics_needed: u64,
    },
    /// 收敛比；`None` 表示无上行（N/A）
    Oversubscription { ratio: Option<f64> },
    /// 全部指标计算完成
    Done {
        total_cost: f64,
        total_power: f64,
        latency_us: f64,
        racks_needed: u64,
    },
}

impl MetricsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MetricsEvent::Breakout { .. } => "breakout",
            MetricsEvent::ParallelLinks { .. } => "parallel_links",
            MetricsEvent::Devices { .. } => "devices",
            MetricsEvent::Links { .. } => "links",
            MetricsEvent::Oversubscription { .. } => "oversubscription",
            MetricsEvent::Done { .. } => "done",
        }
    }
}

pub trait MetricsObserver {
    fn on_event(&mut self, event: &MetricsEvent);
}

/// 丢弃所有事件
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MetricsObserver for NoopObserver {
    fn on_event(&mut self, _event: &MetricsEvent) {}
}

/// 把事件转发到 `tracing`（debug 级别）
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl MetricsObserver for TracingObserver {
    fn on_event(&mut self, event: &MetricsEvent) {
        debug!(step = event.name(), ?event, "📐 指标计算步骤");
    }
}

/// 一个简单的事件收集器（存内存，可序列化为 JSON）
#[derive(Debug, Default, Clone, Serialize)]
pub struct EventLog {
    pub events: Vec<MetricsEvent>,
}

impl EventLog {
    pub fn push(&mut self, ev: MetricsEvent) {
        self.events.push(ev);
    }
}

impl MetricsObserver for EventLog {
    fn on_event(&mut self, event: &MetricsEvent) {
        self.push(event.clone());
    }
}
