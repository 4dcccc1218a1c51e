//! Topology — the routing graph structure.
//!
//! The topology is the router's memory: which source→target links exist
//! and how strongly each has been reinforced. It is owned exclusively by
//! the optimizer; no other component mutates it directly.

use crate::types::*;

/// A handle to the routing graph, used by the optimizer and route selector.
///
/// This is a trait rather than a concrete type so that different runtime
/// implementations can use different graph backends.
pub trait RoutingTopology {
    /// Insert a node if its key is unseen. Existing nodes are left
    /// untouched (seeding is idempotent).
    fn ensure_node(&mut self, node: RoutingNode);

    /// Get node data by key.
    fn get_node(&self, key: &NodeKey) -> Option<&RoutingNode>;

    /// Insert an edge if the ordered pair is unseen. Existing edges keep
    /// their strength and traffic.
    fn ensure_edge(&mut self, from: NodeKey, to: NodeKey, edge: RoutingEdge);

    /// Get edge data.
    fn get_edge(&self, from: &NodeKey, to: &NodeKey) -> Option<&RoutingEdge>;

    /// Get mutable edge data.
    fn get_edge_mut(&mut self, from: &NodeKey, to: &NodeKey) -> Option<&mut RoutingEdge>;

    /// Remove an edge. Returns the removed edge data if it existed.
    fn remove_edge(&mut self, from: &NodeKey, to: &NodeKey) -> Option<RoutingEdge>;

    /// All node keys, sorted ascending.
    fn node_keys(&self) -> Vec<NodeKey>;

    /// All edge keys as ordered `(from, to)` pairs, sorted ascending.
    ///
    /// The explicit sort is load-bearing: route scoring and pruning walk
    /// edges in this order, which makes tie-breaks reproducible across
    /// runs instead of depending on hash-map iteration order.
    fn edge_keys(&self) -> Vec<(NodeKey, NodeKey)>;

    /// Outgoing edges of a node, sorted ascending by target key.
    fn out_edges(&self, from: &NodeKey) -> Vec<(NodeKey, &RoutingEdge)>;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;
}
