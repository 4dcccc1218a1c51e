//! # Physarum Runtime
//!
//! The slime-mold optimization loop and routing runtime.
//!
//! The runtime owns the routing topology and drives it through discrete
//! optimization cycles (ingest → growth/decay iterations → prune), while
//! answering read-only "best path for this event" queries against
//! immutable snapshots.

pub mod config;
pub mod router;
pub mod shared;
pub mod table;
pub mod topology_impl;

pub mod prelude;
