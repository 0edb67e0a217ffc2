//! The core `Topology` trait.

use rill_core::{LinkId, NodeId};
use smallvec::SmallVec;

/// One candidate receiver of a node: the neighbour, the link reaching it,
/// and that link's geometric length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    /// The node at the far end of the link.
    pub node: NodeId,
    /// The connecting link.
    pub link: LinkId,
    /// Geometric length of the link (positive, finite).
    pub length: f64,
}

impl Neighbour {
    /// Bundle a neighbour entry.
    pub fn new(node: NodeId, link: LinkId, length: f64) -> Self {
        Self { node, link, length }
    }
}

/// Neighbour sequence returned by [`Topology::neighbours`].
///
/// Eight inline slots cover both raster adapters without heap allocation;
/// high-degree mesh nodes spill transparently.
pub type Neighbours = SmallVec<[Neighbour; 8]>;

/// Adjacency source for a flow-direction pass.
///
/// The selector is written once against this trait and is oblivious to
/// which adapter supplies the neighbours.
///
/// # Canonical order
///
/// [`neighbours`](Self::neighbours) must return entries in a fixed,
/// adapter-defined order. The selector breaks exact slope ties in favour
/// of the earliest entry, so the order is part of the routing contract:
/// two calls for the same node must return the same sequence.
///
/// # Thread Safety
///
/// `Sync` is required because a pass may resolve different nodes on
/// different worker threads against one shared topology.
pub trait Topology: Send + Sync {
    /// Number of nodes; valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Number of links; valid ids are `0..link_count()`.
    fn link_count(&self) -> usize;

    /// Candidate neighbours of `node` in canonical order.
    ///
    /// Returns an empty sequence for an out-of-range `node`.
    fn neighbours(&self, node: NodeId) -> Neighbours;

    /// The `(tail, head)` endpoints of `link`, or `None` if out of range.
    fn link_nodes(&self, link: LinkId) -> Option<(NodeId, NodeId)>;

    /// Largest neighbour count of any node.
    ///
    /// Default implementation scans every node; adapters with a closed
    /// form should override it.
    fn max_neighbour_degree(&self) -> usize {
        (0..self.node_count())
            .map(|i| self.neighbours(NodeId(i as u32)).len())
            .max()
            .unwrap_or(0)
    }
}
