use super::aggregate::{MetricsResult, calculate_all_metrics_with};
use super::opts::{EngineOpts, ScoreScales};
use crate::error::Result;
use crate::model::Topology;
use crate::observe::{MetricsObserver, NoopObserver};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 0-100 的归一化评分，越高越好
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub cost_score: f64,
    pub power_score: f64,
    pub latency_score: f64,
    pub oversubscription_score: f64,
    pub rack_space_score: f64,
    pub cabling_score: f64,
}

impl Scores {
    pub fn from_metrics(metrics: &MetricsResult, scales: &ScoreScales) -> Self {
        Self {
            cost_score: normalize_score(metrics.cost.total, scales.cost),
            power_score: normalize_score(metrics.power.total, scales.power),
            latency_score: normalize_score(metrics.latency.total, scales.latency),
            oversubscription_score: normalize_score(
                metrics.oversubscription.ratio.effective(),
                scales.oversubscription,
            ),
            rack_space_score: normalize_score(
                metrics.rack_space.total_rack_units as f64,
                scales.rack_space,
            ),
            cabling_score: normalize_score(metrics.cabling.total as f64, scales.cabling),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub name: String,
    pub metrics: MetricsResult,
    pub scores: Scores,
}

/// `100 - min(100, raw / scale * 20)`，结果夹在 [0, 100]；
/// 超过 5 倍尺度的原始值统一压到 0。
pub fn normalize_score(raw: f64, scale: f64) -> f64 {
    if !raw.is_finite() || !scale.is_finite() || scale <= 0.0 {
        return 0.0;
    }
    let penalty = (raw / scale * 20.0).min(100.0);
    (100.0 - penalty).clamp(0.0, 100.0)
}

pub fn compare_topologies(topologies: &[Topology]) -> Result<Vec<ComparisonResult>> {
    compare_topologies_with(topologies, &EngineOpts::default(), &mut NoopObserver)
}

/// 按输入顺序返回；任一拓扑无效时整体失败。
#[tracing::instrument(level = "debug", skip_all, fields(count = topologies.len()))]
pub fn compare_topologies_with(
    topologies: &[Topology],
    opts: &EngineOpts,
    observer: &mut dyn MetricsObserver,
) -> Result<Vec<ComparisonResult>> {
    topologies
        .iter()
        .map(|topology| -> Result<ComparisonResult> {
            let metrics =
                calculate_all_metrics_with(&topology.configuration, opts, &mut *observer)?;
            let scores = Scores::from_metrics(&metrics, &opts.score_scales);
            debug!(name = %topology.name, ?scores, "📊 拓扑评分完成");
            Ok(ComparisonResult {
                name: topology.name.clone(),
                metrics,
                scores,
            })
        })
        .collect()
}
