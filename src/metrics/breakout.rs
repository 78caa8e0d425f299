use crate::error::{ConfigurationError, SwitchRole};
use crate::model::{BreakoutMode, BreakoutTable, PortSpeed, TopologyConfiguration};

/// breakout 解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBreakout {
    pub factor: u32,
    pub effective_port_count: u32,
    pub effective_speed: PortSpeed,
}

impl ResolvedBreakout {
    pub fn is_breakout(&self) -> bool {
        self.factor > 1
    }
}

/// 在 `options[port_speed]` 中查找 `mode`；找不到就是配置错误，不做任何默认替换。
pub fn resolve_breakout(
    role: SwitchRole,
    port_count: u32,
    port_speed: PortSpeed,
    mode: BreakoutMode,
    options: &BreakoutTable,
) -> Result<ResolvedBreakout, ConfigurationError> {
    if port_count == 0 {
        return Err(ConfigurationError::ZeroPortCount { role });
    }

    let choices = options
        .get(&port_speed)
        .ok_or(ConfigurationError::MissingBreakoutOptions {
            role,
            speed: port_speed,
        })?;
    let option = choices
        .iter()
        .find(|opt| opt.mode == mode)
        .ok_or(ConfigurationError::UnknownBreakoutMode {
            role,
            speed: port_speed,
            mode,
        })?;

    if option.factor == 0 || option.factor != mode.lanes {
        return Err(ConfigurationError::InvalidBreakoutFactor {
            speed: port_speed,
            mode,
            factor: option.factor,
        });
    }

    Ok(ResolvedBreakout {
        factor: option.factor,
        effective_port_count: port_count.saturating_mul(option.factor),
        effective_speed: mode.lane_speed,
    })
}

pub fn resolve_spine_breakout(
    config: &TopologyConfiguration,
) -> Result<ResolvedBreakout, ConfigurationError> {
    let spine = &config.spine_config;
    resolve_breakout(
        SwitchRole::Spine,
        spine.port_count,
        spine.port_speed,
        spine.breakout_mode,
        &config.breakout_options,
    )
}

pub fn resolve_leaf_breakout(
    config: &TopologyConfiguration,
) -> Result<ResolvedBreakout, ConfigurationError> {
    let leaf = &config.leaf_config;
    resolve_breakout(
        SwitchRole::Leaf,
        leaf.port_count,
        leaf.port_speed,
        leaf.breakout_mode,
        &config.breakout_options,
    )
}

/// spine 与 leaf 协商出的链路速率：两端有效速率中较低者
pub fn negotiate_link_speed(spine: &ResolvedBreakout, leaf: &ResolvedBreakout) -> PortSpeed {
    if spine.effective_speed.gbps() <= leaf.effective_speed.gbps() {
        spine.effective_speed
    } else {
        leaf.effective_speed
    }
}
