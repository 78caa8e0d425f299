//! 收敛比（下行容量 / 上行容量，每个 leaf）

use super::devices::DeviceCount;
use super::links::LinkPlan;
use crate::model::PortSpeed;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const NOT_APPLICABLE: &str = "N/A";

/// 收敛比；没有上行容量时为 `NotApplicable`，而不是 NaN/Infinity。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OversubscriptionRatio {
    Ratio(f64),
    NotApplicable,
}

impl OversubscriptionRatio {
    pub fn value(&self) -> Option<f64> {
        match self {
            OversubscriptionRatio::Ratio(r) => Some(*r),
            OversubscriptionRatio::NotApplicable => None,
        }
    }

    /// 评分时 N/A 按 1:1 计
    pub fn effective(&self) -> f64 {
        self.value().unwrap_or(1.0)
    }
}

impl fmt::Display for OversubscriptionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OversubscriptionRatio::Ratio(r) => write!(f, "{r:.2}:1"),
            OversubscriptionRatio::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

impl Serialize for OversubscriptionRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OversubscriptionRatio::Ratio(r) => serializer.serialize_f64(*r),
            OversubscriptionRatio::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

impl<'de> Deserialize<'de> for OversubscriptionRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(r) => Ok(OversubscriptionRatio::Ratio(r)),
            Raw::Text(s) if s == NOT_APPLICABLE => Ok(OversubscriptionRatio::NotApplicable),
            Raw::Text(s) => Err(de::Error::custom(format!(
                "expected a number or \"{NOT_APPLICABLE}\", got \"{s}\""
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Oversubscription {
    pub ratio: OversubscriptionRatio,
    /// Gbps
    pub uplink_capacity: u64,
    /// Gbps
    pub downlink_capacity: u64,
    pub uplink_ports_per_leaf: u64,
    pub downlink_ports_per_leaf: u64,
}

/// 保留两位小数
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn calculate_oversubscription(
    devices: &DeviceCount,
    links: &LinkPlan,
    leaf_ports: u32,
    downlink_speed: PortSpeed,
) -> Oversubscription {
    let uplink_ports_per_leaf = u64::from(links.per_spine) * u64::from(devices.spines);
    let downlink_ports_per_leaf = u64::from(leaf_ports).saturating_sub(uplink_ports_per_leaf);

    let uplink_capacity = uplink_ports_per_leaf * links.link_speed.gbps();
    let downlink_capacity = downlink_ports_per_leaf * downlink_speed.gbps();

    let ratio = if uplink_capacity == 0 {
        OversubscriptionRatio::NotApplicable
    } else {
        OversubscriptionRatio::Ratio(round2(
            downlink_capacity as f64 / uplink_capacity as f64,
        ))
    };

    Oversubscription {
        ratio,
        uplink_capacity,
        downlink_capacity,
        uplink_ports_per_leaf,
        downlink_ports_per_leaf,
    }
}
