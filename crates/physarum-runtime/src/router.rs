//! SlimeRouter — the adaptive event-routing optimizer.
//!
//! A slime mold explores every path to food at once, then thickens the
//! tubes that carry flow efficiently and abandons the rest. The router
//! does the same with event routes: every optimization cycle it
//!
//! 1. ingests a batch of observed events into per-source traffic counts,
//! 2. runs N growth/decay iterations over every edge,
//! 3. prunes edges whose reinforcement fell below the viability threshold.
//!
//! Reinforcement from a single traffic snapshot compounds across the N
//! iterations (traffic does not reset mid-cycle), approximating the
//! positive-feedback dynamics of the physical network without a
//! continuous-time simulation.
//!
//! The router is an owned instance, not a global: embedders construct one
//! per topology (per tenant, per test) and pass it by handle.

use crate::config::RouterConfig;
use crate::topology_impl::PetRoutingTopology;
use physarum_core::topology::RoutingTopology;
use physarum_core::types::*;
use std::collections::HashMap;
use tracing::{debug, trace};

/// The slime-mold event router. Owns the topology exclusively; all
/// mutation flows through [`SlimeRouter::seed`] and [`SlimeRouter::optimize`].
pub struct SlimeRouter {
    topology: PetRoutingTopology,
    config: RouterConfig,
    cycle: Cycle,
}

impl SlimeRouter {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            topology: PetRoutingTopology::new(),
            config,
            cycle: 0,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Completed optimization cycles since construction.
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    pub fn topology(&self) -> &PetRoutingTopology {
        &self.topology
    }

    /// Seed the topology from wormhole declarations.
    ///
    /// Idempotent: existing nodes and edges are never touched, so
    /// re-seeding cannot reset learned strength or per-cycle traffic.
    /// Declarations with a missing descriptor component are skipped.
    /// This is also the only way a pruned edge comes back — resumed
    /// traffic alone never resurrects a route.
    pub fn seed(&mut self, wormholes: &[WormholeDecl]) {
        let mut seeded = 0usize;
        for decl in wormholes {
            if !decl.from.is_complete() || !decl.to.is_complete() {
                trace!(?decl, "skipping malformed wormhole declaration");
                continue;
            }

            let from = decl.from.node_key();
            let to = decl.to.node_key();

            let d = &self.config.source_defaults;
            self.topology.ensure_node(RoutingNode {
                key: from.clone(),
                kind: NodeKind::Service,
                latency_ms: d.latency_ms,
                cost_per_unit: d.cost_per_unit,
                reliability: d.reliability,
                capacity: d.capacity,
            });
            let d = &self.config.target_defaults;
            self.topology.ensure_node(RoutingNode {
                key: to.clone(),
                kind: NodeKind::Agent,
                latency_ms: d.latency_ms,
                cost_per_unit: d.cost_per_unit,
                reliability: d.reliability,
                capacity: d.capacity,
            });
            let d = &self.config.edge_defaults;
            self.topology.ensure_edge(
                from,
                to,
                RoutingEdge {
                    traffic: 0,
                    latency_ms: d.latency_ms,
                    cost_per_unit: d.cost_per_unit,
                    strength: d.initial_strength,
                },
            );
            seeded += 1;
        }

        debug!(
            declarations = wormholes.len(),
            seeded,
            nodes = self.topology.node_count(),
            edges = self.topology.edge_count(),
            "topology seeded"
        );
    }

    /// Run one full optimization cycle: ingest → iterate × N → prune.
    pub fn optimize(&mut self, events: &[Event]) {
        self.ingest(events);
        for _ in 0..self.config.iterations {
            self.iterate();
        }
        let pruned = self.prune();

        self.cycle += 1;
        debug!(
            cycle = self.cycle,
            events = events.len(),
            pruned = pruned.len(),
            edges = self.topology.edge_count(),
            "optimization cycle complete"
        );
    }

    /// Overwrite every edge's traffic with this cycle's per-source count.
    ///
    /// Traffic measures pressure at the source fan-out, not a chosen path,
    /// so all edges sharing a source see the same count. Edges whose
    /// source emitted nothing are set back to zero.
    fn ingest(&mut self, events: &[Event]) {
        let mut counts: HashMap<NodeKey, u64> = HashMap::new();
        for event in events {
            if !event.is_routable() {
                continue;
            }
            *counts.entry(event.source_key()).or_insert(0) += 1;
        }

        for (from, to) in self.topology.edge_keys() {
            let traffic = counts.get(&from).copied().unwrap_or(0);
            if let Some(edge) = self.topology.get_edge_mut(&from, &to) {
                edge.traffic = traffic;
            }
        }
    }

    /// One growth/decay pass over every edge.
    ///
    /// Trafficked edges grow proportional to their transit efficiency,
    /// gated on target reliability: an unreliable target is never
    /// reinforced, but existing reinforcement is not punished either —
    /// decay applies only to edges with zero traffic. Strength stays
    /// clamped to [0, 1].
    fn iterate(&mut self) {
        for (from, to) in self.topology.edge_keys() {
            // Defensive: endpoints should always exist given the seeder
            // contract, but a half-formed edge is skipped, not an error.
            if self.topology.get_node(&from).is_none() {
                continue;
            }
            let Some(target) = self.topology.get_node(&to) else {
                continue;
            };
            let target_reliability = target.reliability;

            let growth_rate = self.config.growth_rate;
            let decay_rate = self.config.decay_rate;
            let min_reliability = self.config.min_reliability;
            let traffic_norm = self.config.traffic_norm;

            let Some(edge) = self.topology.get_edge_mut(&from, &to) else {
                continue;
            };

            let efficiency = 1.0 / (edge.latency_ms + edge.cost_per_unit * 1000.0);
            if edge.traffic > 0 && target_reliability >= min_reliability {
                let load = edge.traffic as f64 / traffic_norm;
                edge.strength = (edge.strength + growth_rate * efficiency * load).min(1.0);
            } else if edge.traffic == 0 {
                edge.strength = (edge.strength - decay_rate).max(0.0);
            }
            // traffic > 0 but reliability gate failed: strength untouched.
        }
    }

    /// Remove every edge whose strength decayed below the viability
    /// threshold. Nodes are never removed — a node with no remaining
    /// out-edges simply becomes unroutable.
    fn prune(&mut self) -> Vec<PrunedRoute> {
        let threshold = self.config.prune_threshold;
        let mut pruned = Vec::new();

        for (from, to) in self.topology.edge_keys() {
            let below = self
                .topology
                .get_edge(&from, &to)
                .map(|e| e.strength < threshold)
                .unwrap_or(false);
            if below {
                if let Some(edge) = self.topology.remove_edge(&from, &to) {
                    trace!(%from, %to, strength = edge.strength, "pruned edge");
                    pruned.push(PrunedRoute {
                        from,
                        to,
                        final_strength: edge.strength,
                    });
                }
            }
        }

        pruned
    }

    /// Best single-hop path for one event, `[source, target]`.
    ///
    /// Candidates are scored `strength × (1 / latency) × target
    /// reliability`; ties break deterministically on ascending target key.
    /// An unknown source or a source with no surviving edges yields an
    /// empty route — "no route available" is a result, not an error, and
    /// callers supply their own fallback.
    pub fn optimal_route(&self, event: &Event) -> Route {
        if !event.is_routable() {
            return Vec::new();
        }
        let from = event.source_key();

        let mut candidates: Vec<(NodeKey, f64)> = self
            .topology
            .out_edges(&from)
            .into_iter()
            .filter_map(|(to, edge)| {
                let target = self.topology.get_node(&to)?;
                let score = edge.strength * (1.0 / edge.latency_ms) * target.reliability;
                Some((to, score))
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        match candidates.into_iter().next() {
            Some((to, _)) => vec![from, to],
            None => Vec::new(),
        }
    }

    /// Aggregate view of the current topology. All-zero when empty.
    pub fn stats(&self) -> RouterStats {
        let node_keys = self.topology.node_keys();
        let node_count = node_keys.len();

        let mut latency_sum = 0.0;
        let mut cost_sum = 0.0;
        let mut reliability_sum = 0.0;
        for key in &node_keys {
            if let Some(node) = self.topology.get_node(key) {
                latency_sum += node.latency_ms;
                cost_sum += node.cost_per_unit;
                reliability_sum += node.reliability;
            }
        }

        let edge_keys = self.topology.edge_keys();
        let edge_count = edge_keys.len();
        let mut strength_sum = 0.0;
        let mut total_traffic = 0u64;
        for (from, to) in &edge_keys {
            if let Some(edge) = self.topology.get_edge(from, to) {
                strength_sum += edge.strength;
                total_traffic += edge.traffic;
            }
        }

        RouterStats {
            node_count,
            edge_count,
            avg_latency_ms: if node_count > 0 {
                latency_sum / node_count as f64
            } else {
                0.0
            },
            avg_cost_per_unit: if node_count > 0 {
                cost_sum / node_count as f64
            } else {
                0.0
            },
            avg_reliability: if node_count > 0 {
                reliability_sum / node_count as f64
            } else {
                0.0
            },
            avg_strength: if edge_count > 0 {
                strength_sum / edge_count as f64
            } else {
                0.0
            },
            total_traffic,
        }
    }
}

impl Default for SlimeRouter {
    fn default() -> Self {
        Self::new()
    }
}
