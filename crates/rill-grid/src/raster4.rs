//! Regular raster with 4-connected neighbourhood (D4).

use crate::error::GridError;
use crate::raster::{RasterShape, ORTHOGONAL};
use crate::topology::{Neighbours, Topology};
use rill_core::{BoundaryStatus, LinkId, NodeId};

/// A regular raster whose nodes route only to their orthogonal neighbours.
///
/// Neighbours come in the canonical order east, north, west, south; any
/// neighbour that would fall outside the grid is omitted, so corners have
/// two neighbours and edges three. Every link has length equal to the node
/// spacing.
///
/// # Examples
///
/// ```
/// use rill_grid::{Raster4, Topology};
/// use rill_core::NodeId;
///
/// let grid = Raster4::new(3, 3).unwrap();
/// assert_eq!(grid.node_count(), 9);
///
/// // Centre node: east, north, west, south.
/// let ids: Vec<u32> = grid.neighbours(NodeId(4)).iter().map(|n| n.node.0).collect();
/// assert_eq!(ids, vec![5, 7, 3, 1]);
///
/// // Corner node: only two neighbours.
/// assert_eq!(grid.neighbours(NodeId(0)).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster4 {
    shape: RasterShape,
}

impl Raster4 {
    /// Create a `rows * cols` raster with unit node spacing.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        Self::with_spacing(rows, cols, 1.0)
    }

    /// Create a `rows * cols` raster with the given node spacing.
    pub fn with_spacing(rows: u32, cols: u32, spacing: f64) -> Result<Self, GridError> {
        Ok(Self {
            shape: RasterShape::new(rows, cols, spacing, false)?,
        })
    }

    /// Grid dimensions and spacing.
    pub fn shape(&self) -> &RasterShape {
        &self.shape
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.shape.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.shape.cols()
    }

    /// Node id at `(row, col)`, or `None` outside the grid.
    pub fn node_at(&self, row: i32, col: i32) -> Option<NodeId> {
        self.shape.node_at(row, col)
    }

    /// Perimeter nodes in ascending order.
    pub fn perimeter_nodes(&self) -> Vec<NodeId> {
        self.shape.perimeter_nodes()
    }

    /// Perimeter fixed-value, interior core.
    pub fn default_statuses(&self) -> Vec<BoundaryStatus> {
        self.shape.default_statuses()
    }
}

impl Topology for Raster4 {
    fn node_count(&self) -> usize {
        self.shape.node_count()
    }

    fn link_count(&self) -> usize {
        self.shape.orthogonal_link_count()
    }

    fn neighbours(&self, node: NodeId) -> Neighbours {
        self.shape.neighbours_with(node, &[&ORTHOGONAL[..]])
    }

    fn link_nodes(&self, link: LinkId) -> Option<(NodeId, NodeId)> {
        self.shape.link_nodes(link, false)
    }

    fn max_neighbour_degree(&self) -> usize {
        self.shape.max_degree(false)
    }
}
