//! Export the route table and topology view as JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use physarum::prelude::*;
use serde::Serialize;

use super::{load_events, load_wormholes, warm_router};

#[derive(Serialize)]
struct ExportedTopology {
    nodes: Vec<RoutingNode>,
    edges: Vec<ExportedEdge>,
    table: RouteTable,
    stats: RouterStats,
}

#[derive(Serialize)]
struct ExportedEdge {
    from: NodeKey,
    to: NodeKey,
    #[serde(flatten)]
    edge: RoutingEdge,
}

pub fn run(
    config: RouterConfig,
    wormhole_path: &str,
    output: &str,
    event_path: Option<&str>,
    cycles: u64,
) -> Result<()> {
    let wormholes = load_wormholes(wormhole_path)?;
    let events = load_events(event_path)?;
    let router = warm_router(config, &wormholes, &events, cycles);

    let topology = router.topology();
    let nodes = topology
        .node_keys()
        .into_iter()
        .filter_map(|key| topology.get_node(&key).cloned())
        .collect();
    let edges = topology
        .edge_keys()
        .into_iter()
        .filter_map(|(from, to)| {
            let edge = topology.get_edge(&from, &to)?.clone();
            Some(ExportedEdge { from, to, edge })
        })
        .collect();

    let exported = ExportedTopology {
        nodes,
        edges,
        table: RouteTable::build(&router),
        stats: router.stats(),
    };

    let json = serde_json::to_string_pretty(&exported)?;
    std::fs::write(output, json).with_context(|| format!("writing export to {}", output))?;

    println!(
        "{} Exported {} nodes, {} edges to {}",
        "✓".green(),
        exported.stats.node_count.to_string().cyan(),
        exported.stats.edge_count.to_string().cyan(),
        output.cyan()
    );
    Ok(())
}
