//! Grid topologies for rill flow routing.
//!
//! This crate defines the [`Topology`] trait, the single capability the
//! steepest-descent selector is written against, along with the three
//! concrete adapters.
//!
//! # Adapters
//!
//! - [`Raster4`]: regular raster, 4-connected (D4), canonical order E, N, W, S
//! - [`Raster8`]: regular raster, 8-connected (D8), orthogonal before diagonal
//! - [`LinkList`]: arbitrary mesh described by a node/link adjacency list
//!
//! Adapters are immutable once built and are shared read-only across every
//! per-node computation of a pass.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod link_list;
pub mod raster;
pub mod raster4;
pub mod raster8;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::GridError;
pub use link_list::LinkList;
pub use raster::RasterShape;
pub use raster4::Raster4;
pub use raster8::Raster8;
pub use topology::{Neighbour, Neighbours, Topology};
