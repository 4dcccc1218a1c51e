//! Run optimization cycles and report how the topology evolves.

use anyhow::Result;
use colored::Colorize;
use physarum::prelude::*;

use super::{load_events, load_wormholes};

pub fn run(
    config: RouterConfig,
    wormhole_path: &str,
    event_path: Option<&str>,
    cycles: u64,
) -> Result<()> {
    let wormholes = load_wormholes(wormhole_path)?;
    let events = load_events(event_path)?;

    let mut router = SlimeRouter::with_config(config);
    router.seed(&wormholes);

    let initial = router.stats();
    println!(
        "{} Seeded {} nodes, {} edges from {} declarations",
        "→".blue(),
        initial.node_count.to_string().cyan(),
        initial.edge_count.to_string().cyan(),
        wormholes.len().to_string().cyan()
    );
    println!(
        "{} Running {} cycles with {} events per cycle...",
        "→".blue(),
        cycles.to_string().cyan(),
        events.len().to_string().cyan()
    );
    println!();
    println!(
        "{}",
        format!(
            "{:>6} {:>7} {:>14} {:>14}",
            "cycle", "edges", "avg strength", "total traffic"
        )
        .white()
        .bold()
    );

    for _ in 0..cycles {
        router.optimize(&events);
        let stats = router.stats();
        println!(
            "{:>6} {:>7} {:>14.4} {:>14}",
            router.cycle(),
            stats.edge_count,
            stats.avg_strength,
            stats.total_traffic
        );
    }

    let survivors = router.stats().edge_count;
    let pruned = initial.edge_count.saturating_sub(survivors);
    println!();
    println!(
        "{} {} edges survived, {} pruned",
        "✓".green(),
        survivors.to_string().cyan(),
        pruned.to_string().cyan()
    );

    let table = RouteTable::build(&router);
    if !table.routes.is_empty() {
        println!();
        println!("{}", "Best routes".white().bold());
        for (from, candidates) in &table.routes {
            let best = &candidates[0];
            println!(
                "  {} {} {}  (score {:.5})",
                from.as_str().cyan(),
                "→".dimmed(),
                best.to.as_str().cyan(),
                best.score
            );
        }
    }

    Ok(())
}
