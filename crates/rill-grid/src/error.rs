//! Error types for topology construction.

use rill_core::{LinkId, NodeId};
use std::fmt;

/// Errors arising from building a grid topology.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Attempted to construct a raster with zero rows or columns.
    EmptyGrid,
    /// A raster dimension exceeds the addressable range.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest permitted value.
        max: u32,
    },
    /// Raster node spacing is not a positive finite number.
    InvalidSpacing {
        /// The offending spacing.
        value: f64,
    },
    /// The grid has more nodes than a `NodeId` can address.
    NodeCountOverflow {
        /// The requested node count.
        count: u64,
    },
    /// The grid has more links than a `LinkId` can address.
    LinkCountOverflow {
        /// The requested link count.
        count: u64,
    },
    /// A link references a node outside `[0, node_count)`.
    DanglingLink {
        /// The offending link.
        link: LinkId,
        /// The out-of-range node id.
        node: NodeId,
        /// Number of nodes in the topology.
        node_count: usize,
    },
    /// A link length is not a positive finite number.
    InvalidLinkLength {
        /// The offending link.
        link: LinkId,
        /// Its length.
        length: f64,
    },
    /// One link id is used between two different node pairs.
    InconsistentLink {
        /// The offending link.
        link: LinkId,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one node"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::InvalidSpacing { value } => {
                write!(f, "node spacing {value} must be positive and finite")
            }
            Self::NodeCountOverflow { count } => {
                write!(f, "node count {count} exceeds u32 id space")
            }
            Self::LinkCountOverflow { count } => {
                write!(f, "link count {count} exceeds u32 id space")
            }
            Self::DanglingLink {
                link,
                node,
                node_count,
            } => write!(
                f,
                "link {link} references node {node}, but the grid has {node_count} nodes"
            ),
            Self::InvalidLinkLength { link, length } => {
                write!(f, "link {link} has invalid length {length}")
            }
            Self::InconsistentLink { link } => {
                write!(f, "link {link} joins more than one node pair")
            }
        }
    }
}

impl std::error::Error for GridError {}
