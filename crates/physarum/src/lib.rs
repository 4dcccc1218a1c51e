//! # Physarum
//!
//! A slime-mold-inspired adaptive event router.
//!
//! Physarum learns which paths between event sources and agent-action
//! targets are worth keeping. Declared routes ("wormholes") seed a
//! topology; each optimization cycle reinforces edges in proportion to
//! observed traffic and link efficiency, starves idle edges, and prunes
//! the dead ones — the way a slime mold thickens nutrient-carrying tubes
//! and abandons the rest.
//!
//! ## Quick Start
//!
//! ```rust
//! use physarum::prelude::*;
//!
//! let mut router = SlimeRouter::new();
//!
//! // Declare a route intent
//! router.seed(&[WormholeDecl {
//!     from: SourceDescriptor {
//!         source_type: "payments".into(),
//!         event_type: "charge.created".into(),
//!     },
//!     to: TargetDescriptor {
//!         target_role: "billing".into(),
//!         action_type: "record".into(),
//!     },
//! }]);
//!
//! // Feed one cycle of observed traffic
//! let events: Vec<Event> = (0..100)
//!     .map(|_| Event::new("payments", "charge.created"))
//!     .collect();
//! router.optimize(&events);
//!
//! // Ask for the best path right now
//! let route = router.optimal_route(&Event::new("payments", "charge.created"));
//! assert_eq!(route.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`physarum_core`] — shared types, the `RoutingTopology` trait, errors
//! - [`physarum_runtime`] — the optimization loop, route selection,
//!   snapshots, and the thread-safe [`prelude::SharedRouter`]
//!
//! ## Key Concepts
//!
//! | Concept | Biological analog | What it does |
//! |---------|-------------------|--------------|
//! | Wormhole | Food source placement | Declares a source→target route intent |
//! | Strength | Tube thickness | Persistent reinforcement signal in [0, 1] |
//! | Growth | Protoplasmic flow | Trafficked, reliable, efficient edges thicken |
//! | Decay | Starvation | Idle edges thin every iteration |
//! | Pruning | Tube abandonment | Edges below viability are removed |
//!
//! For concurrent embedding, [`prelude::SharedRouter`] runs cycles behind
//! a single writer lock and serves route queries from immutable snapshots.

pub use physarum_core as core;
pub use physarum_runtime as runtime;

pub mod prelude {
    pub use physarum_runtime::prelude::*;
}
