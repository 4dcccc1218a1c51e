//! CLI command implementations.

pub mod export;
pub mod route;
pub mod simulate;
pub mod stats;

use anyhow::{Context, Result};
use physarum::prelude::*;

/// Read a JSON array of wormhole declarations.
pub fn load_wormholes(path: &str) -> Result<Vec<WormholeDecl>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading wormhole file {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing wormhole file {}", path))
}

/// Read a JSON array of events; `None` means an empty batch.
pub fn load_events(path: Option<&str>) -> Result<Vec<Event>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading event file {}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing event file {}", path))
        }
        None => Ok(Vec::new()),
    }
}

/// Seed a router and replay the batch for the requested cycles.
pub fn warm_router(
    config: RouterConfig,
    wormholes: &[WormholeDecl],
    events: &[Event],
    cycles: u64,
) -> SlimeRouter {
    let mut router = SlimeRouter::with_config(config);
    router.seed(wormholes);
    for _ in 0..cycles {
        router.optimize(events);
    }
    router
}
