//! Show the best route for a single event.

use anyhow::Result;
use colored::Colorize;
use physarum::prelude::*;

use super::{load_events, load_wormholes, warm_router};

pub fn run(
    config: RouterConfig,
    wormhole_path: &str,
    source_type: &str,
    event_type: &str,
    event_path: Option<&str>,
    cycles: u64,
) -> Result<()> {
    let wormholes = load_wormholes(wormhole_path)?;
    let events = load_events(event_path)?;
    let router = warm_router(config, &wormholes, &events, cycles);

    let event = Event::new(source_type, event_type);
    let route = router.optimal_route(&event);

    if route.is_empty() {
        // No route is a result, not an error: the caller's fallback applies.
        println!(
            "{} No route available for {}",
            "∅".yellow(),
            event.source_key().as_str().cyan()
        );
        return Ok(());
    }

    println!(
        "{} {}",
        "Route:".white().bold(),
        route
            .iter()
            .map(|k| k.as_str().cyan().to_string())
            .collect::<Vec<_>>()
            .join(&format!(" {} ", "→".dimmed()))
    );
    Ok(())
}
