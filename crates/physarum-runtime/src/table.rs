//! RouteTable — immutable, serializable routing snapshot.
//!
//! Built from the live topology at the end of a cycle, the table gives
//! readers a consistent view they can query without touching the
//! optimizer's state. `SharedRouter` swaps a fresh table in atomically
//! after every mutation so route queries never block on, or observe,
//! a half-updated cycle.

use crate::router::SlimeRouter;
use physarum_core::topology::RoutingTopology;
use physarum_core::types::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// One scored candidate target for a source.
#[derive(Debug, Clone, Serialize)]
pub struct RouteCandidate {
    pub to: NodeKey,
    pub score: f64,
}

/// Scored candidates for every source, best first, frozen at one cycle.
///
/// Lookup semantics match [`SlimeRouter::optimal_route`] exactly: same
/// scoring, same descending sort, same ascending-key tie-break.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteTable {
    pub cycle: Cycle,
    pub routes: BTreeMap<NodeKey, Vec<RouteCandidate>>,
}

impl RouteTable {
    /// Freeze the router's current topology into a table.
    pub fn build(router: &SlimeRouter) -> Self {
        let topology = router.topology();
        let mut routes: BTreeMap<NodeKey, Vec<RouteCandidate>> = BTreeMap::new();

        for from in topology.node_keys() {
            let mut candidates: Vec<RouteCandidate> = topology
                .out_edges(&from)
                .into_iter()
                .filter_map(|(to, edge)| {
                    let target = topology.get_node(&to)?;
                    let score = edge.strength * (1.0 / edge.latency_ms) * target.reliability;
                    Some(RouteCandidate { to, score })
                })
                .collect();
            if candidates.is_empty() {
                continue;
            }
            candidates.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.to.cmp(&b.to))
            });
            routes.insert(from, candidates);
        }

        Self {
            cycle: router.cycle(),
            routes,
        }
    }

    /// Best path for one event against this frozen view.
    pub fn route(&self, event: &Event) -> Route {
        if !event.is_routable() {
            return Vec::new();
        }
        let from = event.source_key();
        match self.routes.get(&from).and_then(|c| c.first()) {
            Some(best) => vec![from, best.to.clone()],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wormhole(source: &str, event: &str, role: &str, action: &str) -> WormholeDecl {
        WormholeDecl {
            from: SourceDescriptor {
                source_type: source.to_string(),
                event_type: event.to_string(),
            },
            to: TargetDescriptor {
                target_role: role.to_string(),
                action_type: action.to_string(),
            },
        }
    }

    #[test]
    fn table_matches_live_routing() {
        let mut router = SlimeRouter::new();
        router.seed(&[
            wormhole("svc", "ping", "agent", "pong"),
            wormhole("svc", "ping", "agent", "ack"),
            wormhole("bus", "tick", "worker", "drain"),
        ]);
        let batch: Vec<Event> = (0..60).map(|_| Event::new("svc", "ping")).collect();
        router.optimize(&batch);

        let table = RouteTable::build(&router);
        assert_eq!(table.cycle, 1);
        for event in [
            Event::new("svc", "ping"),
            Event::new("bus", "tick"),
            Event::new("ghost", "boo"),
        ] {
            assert_eq!(table.route(&event), router.optimal_route(&event));
        }
    }

    #[test]
    fn candidates_are_sorted_best_first() {
        let mut router = SlimeRouter::new();
        router.seed(&[
            wormhole("svc", "ping", "zeta", "act"),
            wormhole("svc", "ping", "alpha", "act"),
        ]);

        let table = RouteTable::build(&router);
        let candidates = &table.routes[&NodeKey::source("svc", "ping")];
        assert_eq!(candidates.len(), 2);
        // Equal scores: ascending key wins
        assert_eq!(candidates[0].to, NodeKey::target("alpha", "act"));
        assert!(candidates[0].score >= candidates[1].score);
    }

    #[test]
    fn sources_without_edges_are_absent() {
        let mut router = SlimeRouter::new();
        router.seed(&[wormhole("svc", "ping", "agent", "pong")]);
        // Starve until the only edge is pruned
        for _ in 0..10 {
            router.optimize(&[]);
        }

        let table = RouteTable::build(&router);
        assert!(table.routes.is_empty());
        assert!(table.route(&Event::new("svc", "ping")).is_empty());
    }

    #[test]
    fn table_serializes_to_json() {
        let mut router = SlimeRouter::new();
        router.seed(&[wormhole("svc", "ping", "agent", "pong")]);

        let table = RouteTable::build(&router);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["cycle"], 0);
        assert!(json["routes"]["svc:ping"].is_array());
    }
}
