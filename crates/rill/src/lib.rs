//! Rill: steepest-descent flow direction for terrain models.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the rill sub-crates. Adding `rill` as a single dependency is enough for
//! most users.
//!
//! # Quick start
//!
//! ```rust
//! use rill::prelude::*;
//!
//! // Three nodes in a line, draining to an outlet at node 2.
//! let mesh = LinkList::from_links(3, &[
//!     (NodeId(0), NodeId(1), 1.0),
//!     (NodeId(1), NodeId(2), 1.0),
//! ]).unwrap();
//! let statuses = [BoundaryStatus::Core, BoundaryStatus::Core, BoundaryStatus::FixedValue];
//!
//! let result = rill::direct_flow(&mesh, &[10.0, 5.0, 0.0], &statuses).unwrap();
//! assert_eq!(result.receiver(NodeId(0)), Some(NodeId(1)));
//! assert_eq!(result.steepest_slope(NodeId(1)), 5.0);
//! assert!(result.is_outlet(NodeId(2)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rill-core` | Ids, boundary statuses, elevation checks, `FlowError` |
//! | [`grid`] | `rill-grid` | `Topology` trait and the D4, D8, and mesh adapters |
//! | [`director`] | `rill-director` | `FlowDirector`, configuration, results |
//!
//! # Features
//!
//! - `parallel` (default): route large grids on the rayon pool.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Ids, boundary statuses, and error types (`rill-core`).
pub use rill_core as types;

/// Topologies (`rill-grid`).
///
/// Provides the [`grid::Topology`] trait and [`grid::Raster4`],
/// [`grid::Raster8`], and [`grid::LinkList`].
pub use rill_grid as grid;

/// Flow direction (`rill-director`).
pub use rill_director as director;

pub use rill_director::{direct_flow, flow_directions};

/// Common imports for typical rill usage.
///
/// ```rust
/// use rill::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use rill_core::{BoundaryStatus, LinkId, NodeId};

    // Errors
    pub use rill_core::FlowError;
    pub use rill_director::ConfigError;
    pub use rill_grid::GridError;

    // Topologies
    pub use rill_grid::{LinkList, Neighbour, Raster4, Raster8, Topology};

    // Director
    pub use rill_director::{
        DirectorConfig, FixedGradientPolicy, FlowDirectionResult, FlowDirector, FlowKind,
    };
}
