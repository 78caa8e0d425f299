use super::fixtures::{clos, leaf_breakout};
use crate::error::{ConfigurationError, SwitchRole};
use crate::metrics::{
    negotiate_link_speed, resolve_breakout, resolve_leaf_breakout, resolve_spine_breakout,
};
use crate::model::{BreakoutMode, BreakoutOption, PortSpeed, default_breakout_options};

#[test]
fn native_mode_keeps_port_count_and_speed() {
    let options = default_breakout_options();
    let resolved = resolve_breakout(
        SwitchRole::Spine,
        64,
        PortSpeed::G400,
        BreakoutMode::native(PortSpeed::G400),
        &options,
    )
    .expect("resolve native");
    assert_eq!(resolved.factor, 1);
    assert_eq!(resolved.effective_port_count, 64);
    assert_eq!(resolved.effective_speed, PortSpeed::G400);
    assert!(!resolved.is_breakout());
}

#[test]
fn breakout_multiplies_ports_and_lowers_speed() {
    let cfg = leaf_breakout(clos(4, 4, 32), 4, PortSpeed::G100);
    let leaf = resolve_leaf_breakout(&cfg).expect("resolve leaf");
    assert_eq!(leaf.factor, 4);
    assert_eq!(leaf.effective_port_count, 128);
    assert_eq!(leaf.effective_speed, PortSpeed::G100);

    let spine = resolve_spine_breakout(&cfg).expect("resolve spine");
    assert_eq!(negotiate_link_speed(&spine, &leaf), PortSpeed::G100);
    assert_eq!(negotiate_link_speed(&leaf, &spine), PortSpeed::G100);
}

#[test]
fn mode_missing_from_speed_table_is_an_error() {
    let cfg = leaf_breakout(clos(4, 4, 32), 8, PortSpeed::G50);
    let err = resolve_leaf_breakout(&cfg).expect_err("8x50G is not offered at 400G");
    assert_eq!(
        err,
        ConfigurationError::UnknownBreakoutMode {
            role: SwitchRole::Leaf,
            speed: PortSpeed::G400,
            mode: BreakoutMode::new(8, PortSpeed::G50),
        }
    );
}

#[test]
fn speed_missing_from_table_is_an_error() {
    let mut cfg = clos(4, 4, 32);
    cfg.breakout_options.remove(&PortSpeed::G400);
    let err = resolve_spine_breakout(&cfg).expect_err("no 400G entry");
    assert_eq!(
        err,
        ConfigurationError::MissingBreakoutOptions {
            role: SwitchRole::Spine,
            speed: PortSpeed::G400,
        }
    );
}

#[test]
fn factor_must_match_lane_count() {
    let mut cfg = leaf_breakout(clos(4, 4, 32), 4, PortSpeed::G100);
    cfg.breakout_options.insert(
        PortSpeed::G400,
        vec![BreakoutOption::new(BreakoutMode::new(4, PortSpeed::G100), 2)],
    );
    let err = resolve_leaf_breakout(&cfg).expect_err("factor 2 for 4 lanes");
    assert!(matches!(
        err,
        ConfigurationError::InvalidBreakoutFactor { factor: 2, .. }
    ));
}

#[test]
fn zero_port_count_is_an_error() {
    let cfg = clos(4, 4, 0);
    assert_eq!(
        resolve_leaf_breakout(&cfg),
        Err(ConfigurationError::ZeroPortCount {
            role: SwitchRole::Leaf
        })
    );
}
