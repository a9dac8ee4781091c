//! `sar run` — run one engine over a topology file.

use clap::Args;
use std::path::PathBuf;

use sar_analysis::build_path;
use sar_core::{
    validate_risk_threshold, EngineKind, NodeId, RoutingMode, RoutingPolicy, RunConfig, Topology,
};
use sar_engine::{run_bellman_ford, run_dijkstra, Step, TraceCursor};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Topology JSON file.
    #[arg(short, long, default_value = "topology.json")]
    pub topology: PathBuf,

    /// Start node id.
    #[arg(short, long)]
    pub start: String,

    /// Engine override (dijkstra, bellman-ford).
    #[arg(long)]
    pub engine: Option<String>,

    /// Mode override (classic, sar).
    #[arg(long)]
    pub mode: Option<String>,

    /// Security weight override in [0, 1].
    #[arg(long)]
    pub beta: Option<f64>,

    /// Risk threshold override in [0, 1] (Dijkstra admission control).
    #[arg(long)]
    pub risk_threshold: Option<f64>,

    /// Replay the full step trace instead of the distance table.
    #[arg(long)]
    pub trace: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &RunArgs, config: &RunConfig) -> anyhow::Result<()> {
    let engine: EngineKind = match &args.engine {
        Some(s) => s.parse()?,
        None => config.engine,
    };
    let mode: RoutingMode = match &args.mode {
        Some(s) => s.parse()?,
        None => config.mode,
    };
    let policy = RoutingPolicy::new(mode, args.beta.unwrap_or(config.beta))?;
    let threshold = validate_risk_threshold(args.risk_threshold.unwrap_or(config.risk_threshold))?;

    let topology = Topology::from_json(&std::fs::read_to_string(&args.topology)?)?;
    let graph = topology.into_graph()?;
    let start = NodeId::new(args.start.clone());

    tracing::info!(%engine, mode = %policy.mode, beta = policy.beta(), %start, "starting run");

    let steps = match engine {
        EngineKind::Dijkstra => run_dijkstra(&graph, &start, &policy, Some(threshold)),
        EngineKind::BellmanFord => run_bellman_ford(&graph, &start, &policy),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    if args.trace {
        print_trace(steps);
    } else {
        print_distance_table(&graph, &steps, &start);
    }

    Ok(())
}

/// Walk the trace through a replay cursor, one line per step.
fn print_trace(steps: Vec<Step>) {
    let mut cursor = TraceCursor::new(steps);
    loop {
        match cursor.step_forward() {
            Some(step) => println!("[{:>4}] {}", step.index, step.message),
            None => break,
        }
        if cursor.is_at_end() {
            break;
        }
    }
}

fn print_distance_table(graph: &sar_core::Graph, steps: &[Step], start: &NodeId) {
    let Some(last) = steps.last() else {
        println!("(empty trace)");
        return;
    };

    println!("Shortest paths from {}:", start);
    for node in graph.nodes() {
        let distance = last.distance_to(node);
        let path = build_path(steps, start, node);
        let path_display = if path.is_empty() {
            "unreachable".to_string()
        } else {
            path.iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>()
                .join(" → ")
        };
        println!("  {:<12} {:>10}   {}", node.as_str(), distance.to_string(), path_display);
    }

    if steps.iter().any(|s| s.negative_cycle_detected()) {
        println!("warning: negative cycle detected — distances are unreliable");
    }
}
