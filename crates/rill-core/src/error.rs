//! Error types for flow-direction passes.
//!
//! Every variant is a whole-call failure: a pass that reports one of these
//! produces no result at all. Pits and outlets are not errors.

use crate::id::{LinkId, NodeId};
use std::error::Error;
use std::fmt;

/// Errors from validating inputs to, or resolving adjacency during, a
/// flow-direction pass.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowError {
    /// An input sequence does not have one entry per node.
    ShapeMismatch {
        /// Which input was the wrong length (`"elevations"`, `"statuses"`, ...).
        what: &'static str,
        /// The topology's node count.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },
    /// An elevation is NaN or infinite.
    InvalidElevation {
        /// The node carrying the bad value.
        node: NodeId,
        /// The offending value.
        value: f64,
    },
    /// A neighbour entry names a node outside `[0, N)`.
    DanglingLink {
        /// The node whose adjacency was being resolved.
        node: NodeId,
        /// The out-of-range neighbour id.
        neighbour: NodeId,
        /// The link that carried the bad reference.
        link: LinkId,
    },
    /// A neighbour entry carries a non-positive or non-finite link length.
    InvalidLinkLength {
        /// The node whose adjacency was being resolved.
        node: NodeId,
        /// The offending link.
        link: LinkId,
        /// Its length.
        length: f64,
    },
    /// A raw boundary status code is not one of the recognised values.
    UnknownBoundaryStatus {
        /// The node carrying the bad code.
        node: NodeId,
        /// The unrecognised code.
        code: u8,
    },
    /// A node id passed alongside the topology is outside `[0, N)`.
    UnknownNode {
        /// The offending id.
        node: NodeId,
        /// The topology's node count.
        node_count: usize,
    },
    /// The topology declares more nodes than [`NodeId`] can address.
    NodeCountOverflow {
        /// The declared node count.
        count: usize,
    },
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "{what} has {actual} entries, expected one per node ({expected})"
            ),
            Self::InvalidElevation { node, value } => {
                write!(f, "non-finite elevation {value} at node {node}")
            }
            Self::DanglingLink {
                node,
                neighbour,
                link,
            } => write!(
                f,
                "link {link} at node {node} references unknown node {neighbour}"
            ),
            Self::InvalidLinkLength { node, link, length } => {
                write!(f, "link {link} at node {node} has invalid length {length}")
            }
            Self::UnknownBoundaryStatus { node, code } => {
                write!(f, "unknown boundary status code {code} at node {node}")
            }
            Self::UnknownNode { node, node_count } => {
                write!(f, "node {node} out of range for {node_count} nodes")
            }
            Self::NodeCountOverflow { count } => {
                write!(f, "node count {count} exceeds u32 id space")
            }
        }
    }
}

impl Error for FlowError {}
