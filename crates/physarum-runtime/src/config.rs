//! Tunable parameters for the slime-mold optimization loop.

use physarum_core::error::{PhysarumError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the router's growth/decay dynamics.
///
/// Defaults reproduce the canonical behavior; use [`RouterConfig::validate`]
/// before feeding in external values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Reinforcement multiplier applied per iteration to trafficked edges
    /// (default: 0.1).
    pub growth_rate: f64,
    /// Strength lost per iteration by edges with zero traffic (default: 0.05).
    pub decay_rate: f64,
    /// Edges below this strength are removed at the end of a cycle
    /// (default: 0.1).
    pub prune_threshold: f64,
    /// Targets below this reliability are never reinforced (default: 0.95).
    pub min_reliability: f64,
    /// Growth/decay iterations per optimization cycle (default: 10).
    pub iterations: u32,
    /// Traffic count treated as one "unit" of load (default: 100).
    pub traffic_norm: f64,
    /// Attribute defaults for source (service) nodes created by seeding.
    pub source_defaults: NodeDefaults,
    /// Attribute defaults for target (agent) nodes created by seeding.
    pub target_defaults: NodeDefaults,
    /// Attribute defaults for edges created by seeding.
    pub edge_defaults: EdgeDefaults,
}

/// Default attributes for nodes created by the seeder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefaults {
    pub latency_ms: f64,
    pub cost_per_unit: f64,
    pub reliability: f64,
    pub capacity: f64,
}

/// Default attributes for edges created by the seeder.
///
/// Edge latency and cost model the link itself, independent of the
/// endpoint nodes' attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDefaults {
    pub latency_ms: f64,
    pub cost_per_unit: f64,
    /// Neutral prior for fresh edges.
    pub initial_strength: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            growth_rate: 0.1,
            decay_rate: 0.05,
            prune_threshold: 0.1,
            min_reliability: 0.95,
            iterations: 10,
            traffic_norm: 100.0,
            source_defaults: NodeDefaults {
                latency_ms: 50.0,
                cost_per_unit: 0.01,
                reliability: 0.99,
                capacity: 1000.0,
            },
            target_defaults: NodeDefaults {
                latency_ms: 30.0,
                cost_per_unit: 0.005,
                reliability: 0.98,
                capacity: 500.0,
            },
            edge_defaults: EdgeDefaults {
                latency_ms: 80.0,
                cost_per_unit: 0.001,
                initial_strength: 0.5,
            },
        }
    }
}

impl RouterConfig {
    /// Check every field against its permitted range.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("growth_rate", self.growth_rate),
            ("decay_rate", self.decay_rate),
            ("prune_threshold", self.prune_threshold),
            ("min_reliability", self.min_reliability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PhysarumError::out_of_range(field, 0.0, 1.0, value));
            }
        }
        if self.iterations == 0 {
            return Err(PhysarumError::not_positive("iterations", 0.0));
        }
        if self.traffic_norm <= 0.0 {
            return Err(PhysarumError::not_positive("traffic_norm", self.traffic_norm));
        }
        for (prefix, defaults) in [
            ("source_defaults", &self.source_defaults),
            ("target_defaults", &self.target_defaults),
        ] {
            if defaults.latency_ms < 0.0 {
                return Err(PhysarumError::not_positive(
                    format!("{}.latency_ms", prefix),
                    defaults.latency_ms,
                ));
            }
            if !(0.0..=1.0).contains(&defaults.reliability) {
                return Err(PhysarumError::out_of_range(
                    format!("{}.reliability", prefix),
                    0.0,
                    1.0,
                    defaults.reliability,
                ));
            }
            if defaults.capacity <= 0.0 {
                return Err(PhysarumError::not_positive(
                    format!("{}.capacity", prefix),
                    defaults.capacity,
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.edge_defaults.initial_strength) {
            return Err(PhysarumError::out_of_range(
                "edge_defaults.initial_strength",
                0.0,
                1.0,
                self.edge_defaults.initial_strength,
            ));
        }
        Ok(())
    }
}
