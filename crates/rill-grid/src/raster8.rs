//! Regular raster with 8-connected neighbourhood (D8).

use crate::error::GridError;
use crate::raster::{RasterShape, DIAGONAL, ORTHOGONAL};
use crate::topology::{Neighbours, Topology};
use rill_core::{BoundaryStatus, LinkId, NodeId};

/// A regular raster whose nodes route to orthogonal and diagonal neighbours.
///
/// Neighbours come in the canonical order E, N, W, S, NE, NW, SW, SE.
/// Orthogonal entries precede diagonal ones so that, at equal slope, an
/// orthogonal receiver wins the tie. Diagonal links are `spacing * √2` long.
/// Out-of-grid neighbours are omitted (corners have 3, edges 5).
#[derive(Debug, Clone, PartialEq)]
pub struct Raster8 {
    shape: RasterShape,
}

impl Raster8 {
    /// Create a `rows * cols` raster with unit node spacing.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        Self::with_spacing(rows, cols, 1.0)
    }

    /// Create a `rows * cols` raster with the given node spacing.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::InvalidSpacing)` for a non-positive or non-finite
    /// spacing, or an overflow error if node or link ids would not fit `u32`.
    pub fn with_spacing(rows: u32, cols: u32, spacing: f64) -> Result<Self, GridError> {
        Ok(Self {
            shape: RasterShape::new(rows, cols, spacing, true)?,
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

impl Topology for Raster8 {
    fn node_count(&self) -> usize {
        self.shape.node_count()
    }

    fn link_count(&self) -> usize {
        self.shape.orthogonal_link_count() + self.shape.diagonal_link_count()
    }

    fn neighbours(&self, node: NodeId) -> Neighbours {
        self.shape
            .neighbours_with(node, &[&ORTHOGONAL[..], &DIAGONAL[..]])
    }

    fn link_nodes(&self, link: LinkId) -> Option<(NodeId, NodeId)> {
        self.shape.link_nodes(link, true)
    }

    fn max_neighbour_degree(&self) -> usize {
        self.shape.max_degree(true)
    }
}
