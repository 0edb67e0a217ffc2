//! Steepest-descent flow direction for rill.
//!
//! Given a [`Topology`], one elevation per node, and one
//! [`BoundaryStatus`] per node, a [`FlowDirector`] assigns every node a
//! single receiver:
//!
//! - closed nodes get none and are never chosen as receivers,
//! - fixed-value nodes (and baselevel nodes) are outlets draining to
//!   themselves,
//! - every other node drains along the strictly steepest downhill link,
//!   keeping the earliest neighbour in canonical order on exact ties, or
//!   is flagged as a pit when nothing is downhill.
//!
//! The pass is a pure function of its inputs. Nodes are independent, so
//! large grids are routed on the rayon pool when the `parallel` feature
//! is enabled; the output is identical either way.
//!
//! ```
//! use rill_core::{BoundaryStatus, NodeId};
//! use rill_grid::Raster4;
//!
//! let grid = Raster4::new(3, 3).unwrap();
//! let elevations = [9.0, 9.0, 9.0, 9.0, 5.0, 9.0, 9.0, 9.0, 9.0];
//! let result = rill_director::direct_flow(&grid, &elevations, &grid.default_statuses()).unwrap();
//!
//! assert!(result.is_sink(NodeId(4)));
//! assert!(result.is_outlet(NodeId(0)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod director;
mod maybe_rayon;
pub mod result;
mod selector;

pub use config::{ConfigError, DirectorConfig, FixedGradientPolicy};
pub use director::{FlowDirector, FlowDirectorBuilder};
pub use result::{FlowDirectionResult, FlowKind, FlowSummary};

use rill_core::{BoundaryStatus, FlowError, NodeId};
use rill_grid::{Neighbour, Topology};

/// Route `topology` with the default [`FlowDirector`].
pub fn direct_flow<T: Topology + ?Sized>(
    topology: &T,
    elevations: &[f64],
    statuses: &[BoundaryStatus],
) -> Result<FlowDirectionResult, FlowError> {
    FlowDirector::default().direct_flow(topology, elevations, statuses)
}

/// Route raw per-node neighbour lists with the default [`FlowDirector`].
///
/// See [`FlowDirector::flow_directions`].
pub fn flow_directions(
    adjacency: &[Vec<Neighbour>],
    elevations: &[f64],
    statuses: &[BoundaryStatus],
    baselevel: &[NodeId],
) -> Result<FlowDirectionResult, FlowError> {
    FlowDirector::default().flow_directions(adjacency, elevations, statuses, baselevel)
}
