//! 端口速率与 breakout 标签
//!
//! 速率与 breakout 模式都是封闭集合：未识别的标签在反序列化时就会失败，
//! 而不是在计算过程中悄悄查表落空。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("unrecognized port speed label `{0}`")]
    UnknownSpeed(String),
    #[error("malformed breakout label `{0}` (expected <lanes>x<speed>, e.g. 4x100G)")]
    MalformedBreakout(String),
}

/// 端口速率
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PortSpeed {
    #[serde(rename = "10G")]
    G10,
    #[serde(rename = "25G")]
    G25,
    #[serde(rename = "40G")]
    G40,
    #[serde(rename = "50G")]
    G50,
    #[serde(rename = "100G")]
    G100,
    #[serde(rename = "200G")]
    G200,
    #[serde(rename = "400G")]
    G400,
    #[serde(rename = "800G")]
    G800,
}

impl PortSpeed {
    pub const ALL: [PortSpeed; 8] = [
        PortSpeed::G10,
        PortSpeed::G25,
        PortSpeed::G40,
        PortSpeed::G50,
        PortSpeed::G100,
        PortSpeed::G200,
        PortSpeed::G400,
        PortSpeed::G800,
    ];

    pub fn gbps(self) -> u64 {
        match self {
            PortSpeed::G10 => 10,
            PortSpeed::G25 => 25,
            PortSpeed::G40 => 40,
            PortSpeed::G50 => 50,
            PortSpeed::G100 => 100,
            PortSpeed::G200 => 200,
            PortSpeed::G400 => 400,
            PortSpeed::G800 => 800,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PortSpeed::G10 => "10G",
            PortSpeed::G25 => "25G",
            PortSpeed::G40 => "40G",
            PortSpeed::G50 => "50G",
            PortSpeed::G100 => "100G",
            PortSpeed::G200 => "200G",
            PortSpeed::G400 => "400G",
            PortSpeed::G800 => "800G",
        }
    }
}

impl fmt::Display for PortSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PortSpeed {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PortSpeed::ALL
            .into_iter()
            .find(|speed| speed.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LabelError::UnknownSpeed(s.to_string()))
    }
}

/// Breakout 模式：把一个物理端口拆成 `lanes` 个 `lane_speed` 的逻辑端口。
///
/// 文本形式为 `<lanes>x<speed>`，例如 `1x400G`（不拆分）、`4x100G`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BreakoutMode {
    pub lanes: u32,
    pub lane_speed: PortSpeed,
}

impl BreakoutMode {
    pub const fn new(lanes: u32, lane_speed: PortSpeed) -> Self {
        Self { lanes, lane_speed }
    }

    /// 不拆分（1x 原速率）
    pub const fn native(speed: PortSpeed) -> Self {
        Self::new(1, speed)
    }

    pub fn is_breakout(&self) -> bool {
        self.lanes > 1
    }
}

impl fmt::Display for BreakoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.lanes, self.lane_speed)
    }
}

impl FromStr for BreakoutMode {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LabelError::MalformedBreakout(s.to_string());
        let (lanes, speed) = s.trim().split_once(['x', 'X']).ok_or_else(malformed)?;
        let lanes: u32 = lanes.trim().parse().map_err(|_| malformed())?;
        if lanes == 0 {
            return Err(malformed());
        }
        let lane_speed = speed.parse::<PortSpeed>().map_err(|_| malformed())?;
        Ok(BreakoutMode { lanes, lane_speed })
    }
}

impl TryFrom<String> for BreakoutMode {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BreakoutMode> for String {
    fn from(mode: BreakoutMode) -> Self {
        mode.to_string()
    }
}
