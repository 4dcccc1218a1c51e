//! Show topology statistics after a run.

use anyhow::Result;
use colored::Colorize;
use physarum::prelude::*;

use super::{load_events, load_wormholes, warm_router};

pub fn run(
    config: RouterConfig,
    wormhole_path: &str,
    event_path: Option<&str>,
    cycles: u64,
) -> Result<()> {
    let wormholes = load_wormholes(wormhole_path)?;
    let events = load_events(event_path)?;
    let router = warm_router(config, &wormholes, &events, cycles);
    let stats = router.stats();

    println!("{}", "Physarum Topology Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Structure".blue().bold());
    println!("  Nodes:             {}", stats.node_count.to_string().cyan());
    println!("  Edges:             {}", stats.edge_count.to_string().cyan());
    println!(
        "  Cycles run:        {}",
        router.cycle().to_string().cyan()
    );
    println!();

    println!("{}", "Node averages".blue().bold());
    println!("  Latency:           {:.2} ms", stats.avg_latency_ms);
    println!("  Cost per unit:     {:.5}", stats.avg_cost_per_unit);
    println!("  Reliability:       {:.3}", stats.avg_reliability);
    println!();

    println!("{}", "Edge aggregates".blue().bold());
    println!("  Avg strength:      {:.4}", stats.avg_strength);
    println!(
        "  Traffic (last cycle): {}",
        stats.total_traffic.to_string().cyan()
    );

    Ok(())
}
