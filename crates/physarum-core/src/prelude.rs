//! Physarum Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use physarum_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    Cycle, Event, EventId, NodeKey, NodeKind, PrunedRoute, Route, RouterStats, RoutingEdge,
    RoutingNode, SourceDescriptor, TargetDescriptor, WormholeDecl,
};

// Re-export the RoutingTopology trait
pub use crate::topology::RoutingTopology;

// Re-export error types
pub use crate::error::{ConfigError, PhysarumError, Result};
