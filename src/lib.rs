pub mod catalog;
pub mod error;
pub mod metrics;
pub mod model;
pub mod observe;

pub use error::{ConfigurationError, MetricsError, PortOverflowError, Result, SwitchRole};
pub use metrics::{
    ComparisonResult, MetricsResult, calculate_all_metrics, calculate_auto_parallel_links,
    compare_topologies, get_parallel_links_per_spine, validate_parallel_links,
};
pub use model::{Topology, TopologyConfiguration};

#[cfg(test)]
mod test;
