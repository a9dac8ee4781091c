//! `sar compare` — classic vs. security-aware routing over one topology.

use clap::Args;
use std::path::PathBuf;

use sar_analysis::{compare_all, ComparisonReport, RouteMetrics};
use sar_core::{EngineKind, NodeId, RoutingPolicy, RunConfig, Topology};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Topology JSON file.
    #[arg(short, long, default_value = "topology.json")]
    pub topology: PathBuf,

    /// Start node id.
    #[arg(short, long)]
    pub start: String,

    /// Security weight for the SAR side, in [0, 1].
    #[arg(long)]
    pub beta: Option<f64>,

    /// Engine override (dijkstra, bellman-ford).
    #[arg(long)]
    pub engine: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &CompareArgs, config: &RunConfig) -> anyhow::Result<()> {
    // The comparison view historically runs Bellman-Ford under both
    // policies; honor an explicit override, otherwise that default.
    let engine: EngineKind = match &args.engine {
        Some(s) => s.parse()?,
        None => EngineKind::BellmanFord,
    };
    let beta = args.beta.unwrap_or(config.beta);
    let classic = RoutingPolicy::classic();
    let security_aware = RoutingPolicy::security_aware(beta)?;

    let topology = Topology::from_json(&std::fs::read_to_string(&args.topology)?)?;
    let graph = topology.into_graph()?;
    let start = NodeId::new(args.start.clone());

    let report = compare_all(&graph, &start, &classic, &security_aware, engine);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, beta);
    Ok(())
}

fn format_metrics(metrics: &Option<RouteMetrics>) -> String {
    match metrics {
        Some(m) => format!(
            "dist {:.2}, risk {:.2}, {} hops via {}",
            m.total_distance,
            m.total_security_risk,
            m.hop_count,
            m.path_nodes
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>()
                .join("→")
        ),
        None => "unreachable".to_string(),
    }
}

fn print_report(report: &ComparisonReport, beta: f64) {
    println!(
        "Classic vs. SAR (β = {:.2}) from {} using {}:",
        beta, report.start, report.engine
    );
    for row in &report.results {
        println!("  {} [{}]", row.destination, row.outcome);
        println!("    classic: {}", format_metrics(&row.classic));
        println!("    sar:     {}", format_metrics(&row.security_aware));
    }

    let s = &report.summary;
    println!(
        "Summary: {} destinations, {} reachable classic, {} reachable sar, {} route changes",
        s.destinations, s.reachable_classic, s.reachable_security_aware, s.route_changes
    );
    println!(
        "  avg risk reduction: {:.1}%, avg distance increase: {:.1}%",
        s.avg_risk_reduction_pct, s.avg_distance_increase_pct
    );
}
