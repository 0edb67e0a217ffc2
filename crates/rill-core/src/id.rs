//! Strongly-typed node and link identifiers.

use std::fmt;

/// Identifies a node (grid point) within a topology.
///
/// Node ids are dense: a topology with `N` nodes uses ids `0..N`, and
/// every per-node array in a flow-direction result is indexed by
/// [`NodeId::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Largest node count a topology may declare: ids must fit in `u32`.
    pub const MAX_COUNT: usize = u32::MAX as usize;

    /// The id as an array index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Build a node id from an array index.
    ///
    /// Returns `None` if `index` does not fit in a `u32`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a link (edge) between two nodes.
///
/// A node that is its own receiver has no link to it; results represent
/// that as `None` rather than a reserved id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub u32);

impl LinkId {
    /// The id as an array index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Build a link id from an array index.
    ///
    /// Returns `None` if `index` does not fit in a `u32`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LinkId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
