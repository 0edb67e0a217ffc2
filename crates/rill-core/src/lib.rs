//! Core types for the rill flow-routing workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the node and link identifiers, the per-node boundary status and its
//! classifier, elevation-field validation, and the error taxonomy every
//! flow-direction pass reports through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod elevation;
pub mod error;
pub mod id;

pub use boundary::{BoundaryClassifier, BoundaryStatus};
pub use elevation::validate_elevations;
pub use error::FlowError;
pub use id::{LinkId, NodeId};
