//! Shared types used across all Physarum crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an event flowing through the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable identifier for a node in the routing graph.
///
/// Source nodes are keyed `{source_type}:{event_type}`, target nodes
/// `{target_role}:{action_type}`. The key is the node's identity and is
/// immutable for the node's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey(pub String);

impl NodeKey {
    /// Key for an event-source node.
    pub fn source(source_type: &str, event_type: &str) -> Self {
        Self(format!("{}:{}", source_type, event_type))
    }

    /// Key for an action-target node.
    pub fn target(target_role: &str, action_type: &str) -> Self {
        Self(format!("{}:{}", target_role, action_type))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of participant a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// An event-emitting service (source side).
    Service,
    /// An action-taking agent (target side).
    Agent,
}

/// A participant in the routing graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingNode {
    pub key: NodeKey,
    pub kind: NodeKind,
    pub latency_ms: f64,
    pub cost_per_unit: f64,
    /// Delivery reliability in [0, 1].
    pub reliability: f64,
    /// Advisory throughput ceiling; not enforced by the optimizer.
    pub capacity: f64,
}

/// A directed, weighted candidate path between two nodes.
///
/// `latency_ms` and `cost_per_unit` model the link itself, independent of
/// the endpoint nodes' own attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingEdge {
    /// Events observed at the source during the current cycle. Overwritten
    /// each cycle, never accumulated.
    pub traffic: u64,
    pub latency_ms: f64,
    pub cost_per_unit: f64,
    /// The sole persistent reinforcement signal, clamped to [0, 1] after
    /// every mutation.
    pub strength: f64,
}

/// A declared routing intent: events of one shape should be able to reach
/// one agent action. Wormholes seed the topology; they carry no weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WormholeDecl {
    #[serde(default)]
    pub from: SourceDescriptor,
    #[serde(default)]
    pub to: TargetDescriptor,
}

/// Source half of a wormhole declaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDescriptor {
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub event_type: String,
}

impl SourceDescriptor {
    /// A descriptor with any empty component is malformed and skipped.
    pub fn is_complete(&self) -> bool {
        !self.source_type.is_empty() && !self.event_type.is_empty()
    }

    pub fn node_key(&self) -> NodeKey {
        NodeKey::source(&self.source_type, &self.event_type)
    }
}

/// Target half of a wormhole declaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetDescriptor {
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub action_type: String,
}

impl TargetDescriptor {
    pub fn is_complete(&self) -> bool {
        !self.target_role.is_empty() && !self.action_type.is_empty()
    }

    pub fn node_key(&self) -> NodeKey {
        NodeKey::target(&self.target_role, &self.action_type)
    }
}

/// An observed event, supplied in batches by the event-bus collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: EventId,
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub event_type: String,
    /// Opaque payload; the router never inspects it.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Event {
    pub fn new(source_type: impl Into<String>, event_type: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            source_type: source_type.into(),
            event_type: event_type.into(),
            payload: serde_json::Value::Null,
        }
    }

    /// Events missing either component are ignored by ingestion and routing.
    pub fn is_routable(&self) -> bool {
        !self.source_type.is_empty() && !self.event_type.is_empty()
    }

    pub fn source_key(&self) -> NodeKey {
        NodeKey::source(&self.source_type, &self.event_type)
    }
}

/// The ordered node sequence selected as the best path for one event.
/// Empty means "no route available" — callers apply their own fallback.
pub type Route = Vec<NodeKey>;

/// An edge removed by pruning, with the strength it died at.
#[derive(Debug, Clone, Serialize)]
pub struct PrunedRoute {
    pub from: NodeKey,
    pub to: NodeKey,
    pub final_strength: f64,
}

/// Read-only aggregate view of the topology.
///
/// Averages are arithmetic means over node attributes; `avg_strength` and
/// `total_traffic` aggregate over edges. All fields are zero when the
/// corresponding registry is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouterStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub avg_latency_ms: f64,
    pub avg_cost_per_unit: f64,
    pub avg_reliability: f64,
    pub avg_strength: f64,
    pub total_traffic: u64,
}

/// Monotonic optimization-cycle counter.
pub type Cycle = u64;
