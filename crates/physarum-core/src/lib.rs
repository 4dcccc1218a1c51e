//! # Physarum Core
//!
//! Core traits and types for the Physarum adaptive event router.
//!
//! Physarum learns, over repeated optimization cycles, which paths between
//! event sources and agent-action targets are worth keeping — the way a
//! slime mold reinforces tubes that carry nutrients and abandons the rest:
//!
//! - **Wormholes** declare routing intent and seed the topology
//! - **Traffic** observed each cycle reinforces efficient, reliable edges
//! - **Decay** starves idle edges; **pruning** removes the dead ones
//! - **Route selection** answers "best path for this event right now"
//!
//! This crate defines the shared data model, the [`topology::RoutingTopology`]
//! trait seam, and error types. The optimization loop itself lives in
//! `physarum-runtime`.

pub mod error;
pub mod prelude;
pub mod topology;
pub mod types;
