//! Concrete implementation of the RoutingTopology trait using petgraph.
//!
//! The routing graph is the optimizer's structural backbone. This
//! implementation uses petgraph's directed `Graph` as the backing store
//! with a HashMap index for O(1) node lookup by key.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use physarum_core::topology::RoutingTopology;
use physarum_core::types::*;
use std::collections::HashMap;

/// Petgraph-backed implementation of the routing topology.
pub struct PetRoutingTopology {
    graph: DiGraph<RoutingNode, RoutingEdge>,
    /// Map from node key to petgraph's internal index.
    node_index: HashMap<NodeKey, NodeIndex>,
}

impl PetRoutingTopology {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
        }
    }
}

impl Default for PetRoutingTopology {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingTopology for PetRoutingTopology {
    fn ensure_node(&mut self, node: RoutingNode) {
        if self.node_index.contains_key(&node.key) {
            return;
        }
        let key = node.key.clone();
        let idx = self.graph.add_node(node);
        self.node_index.insert(key, idx);
    }

    fn get_node(&self, key: &NodeKey) -> Option<&RoutingNode> {
        self.node_index.get(key).map(|idx| &self.graph[*idx])
    }

    fn ensure_edge(&mut self, from: NodeKey, to: NodeKey, edge: RoutingEdge) {
        let Some(&from_idx) = self.node_index.get(&from) else {
            return;
        };
        let Some(&to_idx) = self.node_index.get(&to) else {
            return;
        };

        if self.graph.find_edge(from_idx, to_idx).is_none() {
            self.graph.add_edge(from_idx, to_idx, edge);
        }
    }

    fn get_edge(&self, from: &NodeKey, to: &NodeKey) -> Option<&RoutingEdge> {
        let from_idx = self.node_index.get(from)?;
        let to_idx = self.node_index.get(to)?;
        let edge_idx = self.graph.find_edge(*from_idx, *to_idx)?;
        Some(&self.graph[edge_idx])
    }

    fn get_edge_mut(&mut self, from: &NodeKey, to: &NodeKey) -> Option<&mut RoutingEdge> {
        let from_idx = *self.node_index.get(from)?;
        let to_idx = *self.node_index.get(to)?;
        let edge_idx = self.graph.find_edge(from_idx, to_idx)?;
        Some(&mut self.graph[edge_idx])
    }

    fn remove_edge(&mut self, from: &NodeKey, to: &NodeKey) -> Option<RoutingEdge> {
        let from_idx = *self.node_index.get(from)?;
        let to_idx = *self.node_index.get(to)?;
        let edge_idx = self.graph.find_edge(from_idx, to_idx)?;
        self.graph.remove_edge(edge_idx)
    }

    fn node_keys(&self) -> Vec<NodeKey> {
        let mut keys: Vec<NodeKey> = self
            .graph
            .node_indices()
            .map(|idx| self.graph[idx].key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn edge_keys(&self) -> Vec<(NodeKey, NodeKey)> {
        let mut keys: Vec<(NodeKey, NodeKey)> = self
            .graph
            .edge_indices()
            .map(|idx| {
                let (a, b) = self.graph.edge_endpoints(idx).expect("edge has endpoints");
                (self.graph[a].key.clone(), self.graph[b].key.clone())
            })
            .collect();
        keys.sort();
        keys
    }

    fn out_edges(&self, from: &NodeKey) -> Vec<(NodeKey, &RoutingEdge)> {
        let Some(&from_idx) = self.node_index.get(from) else {
            return Vec::new();
        };

        let mut edges: Vec<(NodeKey, &RoutingEdge)> = self
            .graph
            .edges_directed(from_idx, Direction::Outgoing)
            .map(|edge| (self.graph[edge.target()].key.clone(), edge.weight()))
            .collect();
        edges.sort_by(|a, b| a.0.cmp(&b.0));
        edges
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node(key: NodeKey, kind: NodeKind) -> RoutingNode {
        RoutingNode {
            key,
            kind,
            latency_ms: 50.0,
            cost_per_unit: 0.01,
            reliability: 0.99,
            capacity: 1000.0,
        }
    }

    fn make_edge(strength: f64) -> RoutingEdge {
        RoutingEdge {
            traffic: 0,
            latency_ms: 80.0,
            cost_per_unit: 0.001,
            strength,
        }
    }

    #[test]
    fn ensure_node_is_idempotent() {
        let mut topo = PetRoutingTopology::new();
        let key = NodeKey::source("svc", "ping");

        let mut first = make_node(key.clone(), NodeKind::Service);
        first.latency_ms = 10.0;
        topo.ensure_node(first);
        // Second insert with different attributes must not overwrite
        let mut second = make_node(key.clone(), NodeKind::Service);
        second.latency_ms = 999.0;
        topo.ensure_node(second);

        assert_eq!(topo.node_count(), 1);
        assert_eq!(topo.get_node(&key).unwrap().latency_ms, 10.0);
    }

    #[test]
    fn ensure_edge_preserves_existing() {
        let mut topo = PetRoutingTopology::new();
        let from = NodeKey::source("svc", "ping");
        let to = NodeKey::target("agent", "pong");
        topo.ensure_node(make_node(from.clone(), NodeKind::Service));
        topo.ensure_node(make_node(to.clone(), NodeKind::Agent));

        topo.ensure_edge(from.clone(), to.clone(), make_edge(0.9));
        topo.ensure_edge(from.clone(), to.clone(), make_edge(0.1));

        assert_eq!(topo.edge_count(), 1);
        assert_eq!(topo.get_edge(&from, &to).unwrap().strength, 0.9);
    }

    #[test]
    fn ensure_edge_requires_both_endpoints() {
        let mut topo = PetRoutingTopology::new();
        let from = NodeKey::source("svc", "ping");
        let to = NodeKey::target("agent", "pong");
        topo.ensure_node(make_node(from.clone(), NodeKind::Service));

        // Target node missing — the edge is silently not created
        topo.ensure_edge(from.clone(), to.clone(), make_edge(0.5));
        assert_eq!(topo.edge_count(), 0);
    }

    #[test]
    fn edges_are_directed() {
        let mut topo = PetRoutingTopology::new();
        let a = NodeKey::source("svc", "ping");
        let b = NodeKey::target("agent", "pong");
        topo.ensure_node(make_node(a.clone(), NodeKind::Service));
        topo.ensure_node(make_node(b.clone(), NodeKind::Agent));
        topo.ensure_edge(a.clone(), b.clone(), make_edge(0.5));

        assert!(topo.get_edge(&a, &b).is_some());
        assert!(topo.get_edge(&b, &a).is_none());
        assert!(topo.out_edges(&b).is_empty());
    }

    #[test]
    fn out_edges_sorted_by_target_key() {
        let mut topo = PetRoutingTopology::new();
        let from = NodeKey::source("svc", "ping");
        topo.ensure_node(make_node(from.clone(), NodeKind::Service));
        // Insert targets out of order
        for role in ["zeta", "alpha", "mid"] {
            let to = NodeKey::target(role, "act");
            topo.ensure_node(make_node(to.clone(), NodeKind::Agent));
            topo.ensure_edge(from.clone(), to, make_edge(0.5));
        }

        let targets: Vec<String> = topo
            .out_edges(&from)
            .iter()
            .map(|(k, _)| k.as_str().to_string())
            .collect();
        assert_eq!(targets, vec!["alpha:act", "mid:act", "zeta:act"]);
    }

    #[test]
    fn remove_edge_returns_data() {
        let mut topo = PetRoutingTopology::new();
        let from = NodeKey::source("svc", "ping");
        let to = NodeKey::target("agent", "pong");
        topo.ensure_node(make_node(from.clone(), NodeKind::Service));
        topo.ensure_node(make_node(to.clone(), NodeKind::Agent));
        topo.ensure_edge(from.clone(), to.clone(), make_edge(0.42));

        let removed = topo.remove_edge(&from, &to).unwrap();
        assert_eq!(removed.strength, 0.42);
        assert_eq!(topo.edge_count(), 0);
        // Nodes survive edge removal
        assert_eq!(topo.node_count(), 2);
    }

    #[test]
    fn edge_keys_sorted() {
        let mut topo = PetRoutingTopology::new();
        for (s, t) in [("b", "y"), ("a", "z"), ("a", "x")] {
            let from = NodeKey::source(s, "e");
            let to = NodeKey::target(t, "a");
            topo.ensure_node(make_node(from.clone(), NodeKind::Service));
            topo.ensure_node(make_node(to.clone(), NodeKind::Agent));
            topo.ensure_edge(from, to, make_edge(0.5));
        }

        let keys = topo.edge_keys();
        assert_eq!(keys[0].0.as_str(), "a:e");
        assert_eq!(keys[0].1.as_str(), "x:a");
        assert_eq!(keys[1].1.as_str(), "z:a");
        assert_eq!(keys[2].0.as_str(), "b:e");
    }
}
