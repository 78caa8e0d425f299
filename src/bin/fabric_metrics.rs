use clap::Parser;
use fabric_metrics::metrics::{
    ComparisonResult, EngineOpts, compare_topologies_with, get_parallel_links_per_spine_with,
    validate_parallel_links_with,
};
use fabric_metrics::model::Topology;
use fabric_metrics::observe::{EventLog, MetricsEvent, MetricsObserver, TracingObserver};
use fabric_metrics::MetricsError;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "fabric-metrics",
    about = "Evaluate and compare spine-leaf fabric designs"
)]
struct Args {
    /// Path to a topology JSON document (repeat to compare several)
    #[arg(long, required = true)]
    topology: Vec<PathBuf>,

    /// Print comparison results as JSON instead of key=value lines
    #[arg(long)]
    json: bool,

    /// Only check the parallel-link port budget of each topology
    #[arg(long)]
    validate_only: bool,

    /// Write every calculation step as JSON events to this file
    #[arg(long)]
    events_json: Option<PathBuf>,

    /// Override the share of leaf ports reserved for downlinks (0.0-1.0)
    #[arg(long)]
    downlink_reservation: Option<f64>,

    /// Override the assumed per-hop cable length in km
    #[arg(long)]
    cable_length_km: Option<f64>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// 同时写 tracing 日志并（可选）收集事件
struct CliObserver {
    log: Option<EventLog>,
}

impl MetricsObserver for CliObserver {
    fn on_event(&mut self, event: &MetricsEvent) {
        TracingObserver.on_event(event);
        if let Some(log) = self.log.as_mut() {
            log.on_event(event);
        }
    }
}

fn load_topology(path: &PathBuf) -> Result<Topology, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.clone(),
        source,
    })
}

fn print_result(result: &ComparisonResult) {
    let m = &result.metrics;
    println!(
        "metrics name={} spines={} leafs={} devices={} cost_total={:.2} optics_cost={:.2} \
         power_total={:.2} oversub={} uplink_gbps={} downlink_gbps={} latency_us={:.3} hops={} \
         rack_units={} racks={} cables_standard={} cables_breakout={} cables_total={}",
        result.name,
        m.device_count.spines,
        m.device_count.leafs,
        m.device_count.total,
        m.cost.total,
        m.cost.optics,
        m.power.total,
        m.oversubscription.ratio,
        m.oversubscription.uplink_capacity,
        m.oversubscription.downlink_capacity,
        m.latency.total,
        m.latency.hops,
        m.rack_space.total_rack_units,
        m.rack_space.racks_needed,
        m.cabling.standard,
        m.cabling.breakout,
        m.cabling.total,
    );
    let s = &result.scores;
    println!(
        "score name={} cost={:.1} power={:.1} latency={:.1} oversub={:.1} rack_space={:.1} cabling={:.1}",
        result.name,
        s.cost_score,
        s.power_score,
        s.latency_score,
        s.oversubscription_score,
        s.rack_space_score,
        s.cabling_score,
    );
}

fn run(args: Args) -> Result<(), CliError> {
    let topologies = args
        .topology
        .iter()
        .map(load_topology)
        .collect::<Result<Vec<_>, _>>()?;
    info!(count = topologies.len(), "📂 已加载拓扑");

    let mut opts = EngineOpts::default();
    if let Some(r) = args.downlink_reservation {
        opts.downlink_reservation = r;
    }
    if let Some(km) = args.cable_length_km {
        opts.cable_length_km = km;
    }

    if args.validate_only {
        for topology in &topologies {
            let per_spine = get_parallel_links_per_spine_with(&topology.configuration, &opts)?;
            let validation = validate_parallel_links_with(&topology.configuration, &opts)?;
            println!(
                "validate name={} valid={} per_spine={} overflow={}",
                topology.name,
                validation.valid,
                per_spine,
                validation.overflow.unwrap_or(0),
            );
            if let Some(reason) = &validation.reason {
                info!(name = %topology.name, %reason, "⚠️ 并行链路超出上行端口预算");
            }
        }
        return Ok(());
    }

    let mut observer = CliObserver {
        log: args.events_json.as_ref().map(|_| EventLog::default()),
    };
    let results = compare_topologies_with(&topologies, &opts, &mut observer)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        results.iter().for_each(print_result);
    }

    if let (Some(path), Some(log)) = (&args.events_json, &observer.log) {
        let encoded = serde_json::to_string_pretty(log)?;
        fs::write(path, encoded).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), events = log.events.len(), "📝 已写出计算事件");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "❌ 计算失败");
            ExitCode::FAILURE
        }
    }
}
