//! Physarum Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use physarum_runtime::prelude::*;
//! ```

pub use crate::config::{EdgeDefaults, NodeDefaults, RouterConfig};
pub use crate::router::SlimeRouter;
pub use crate::shared::SharedRouter;
pub use crate::table::{RouteCandidate, RouteTable};
pub use crate::topology_impl::PetRoutingTopology;

pub use physarum_core::prelude::*;
