//! SharedRouter — thread-safe handle around a SlimeRouter.
//!
//! Single-writer, cycle-driven: exactly one seed or optimize runs at a
//! time behind a mutex, while route queries read an immutable
//! [`RouteTable`] snapshot swapped in at the end of each mutation.
//! Readers never block writers and never observe a half-updated edge.
//!
//! A heartbeat collaborator that triggers cycles faster than they
//! complete should use [`SharedRouter::try_optimize`], which skips
//! instead of queuing when a cycle is already in flight.

use crate::config::RouterConfig;
use crate::router::SlimeRouter;
use crate::table::RouteTable;
use physarum_core::types::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use tracing::debug;

/// Clonable, thread-safe router handle.
#[derive(Clone)]
pub struct SharedRouter {
    inner: Arc<Inner>,
}

struct Inner {
    writer: Mutex<SlimeRouter>,
    table: RwLock<Arc<RouteTable>>,
    cycle_in_progress: AtomicBool,
}

impl SharedRouter {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                writer: Mutex::new(SlimeRouter::with_config(config)),
                table: RwLock::new(Arc::new(RouteTable::default())),
                cycle_in_progress: AtomicBool::new(false),
            }),
        }
    }

    /// Seed the topology and publish a fresh snapshot.
    pub fn seed(&self, wormholes: &[WormholeDecl]) {
        let mut router = self.inner.writer.lock().expect("router lock poisoned");
        router.seed(wormholes);
        self.publish(&router);
    }

    /// Run one optimization cycle and publish a fresh snapshot.
    pub fn optimize(&self, events: &[Event]) {
        let mut router = self.inner.writer.lock().expect("router lock poisoned");
        router.optimize(events);
        self.publish(&router);
    }

    /// Run a cycle unless one is already in progress. Returns whether the
    /// cycle ran. Cycles are short and synchronous, so skipped triggers
    /// are made up for by the next heartbeat.
    pub fn try_optimize(&self, events: &[Event]) -> bool {
        if self
            .inner
            .cycle_in_progress
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            debug!("optimization cycle already in progress, skipping");
            return false;
        }
        self.optimize(events);
        self.inner.cycle_in_progress.store(false, Ordering::Release);
        true
    }

    /// Best path for one event against the latest published snapshot.
    pub fn route(&self, event: &Event) -> Route {
        self.snapshot().route(event)
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> Arc<RouteTable> {
        self.inner
            .table
            .read()
            .expect("table lock poisoned")
            .clone()
    }

    /// Aggregate statistics over the live topology.
    pub fn stats(&self) -> RouterStats {
        self.inner
            .writer
            .lock()
            .expect("router lock poisoned")
            .stats()
    }

    /// Completed optimization cycles.
    pub fn cycle(&self) -> Cycle {
        self.inner
            .writer
            .lock()
            .expect("router lock poisoned")
            .cycle()
    }

    fn publish(&self, router: &SlimeRouter) {
        let table = Arc::new(RouteTable::build(router));
        *self.inner.table.write().expect("table lock poisoned") = table;
    }
}

impl Default for SharedRouter {
    fn default() -> Self {
        Self::new()
    }
}
