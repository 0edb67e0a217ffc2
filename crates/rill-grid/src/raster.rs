//! Shared geometry for the raster adapters (Raster4, Raster8).
//!
//! Nodes are numbered row-major from the bottom-left corner: node id is
//! `row * cols + col`, and "north" is `row + 1`. Links always point from
//! the lower to the higher node id.
//!
//! Orthogonal links are numbered row by row: each row contributes its
//! `cols - 1` horizontal links, then the `cols` vertical links joining it
//! to the row above. Diagonal links follow every orthogonal link, two per
//! cell (the cell whose lower-left node is `(row, col)`): first the rising
//! diagonal `(row, col) -> (row + 1, col + 1)`, then the falling diagonal
//! `(row, col + 1) -> (row + 1, col)`.

use crate::error::GridError;
use crate::topology::{Neighbour, Neighbours};
use rill_core::{BoundaryStatus, LinkId, NodeId};
use std::f64::consts::SQRT_2;

/// Direction offsets as `(d_row, d_col)`.
pub(crate) type Offset = (i32, i32);

/// Orthogonal directions in canonical order: E, N, W, S.
pub(crate) const ORTHOGONAL: [Offset; 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Diagonal directions in canonical order: NE, NW, SW, SE.
pub(crate) const DIAGONAL: [Offset; 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Dimensions and spacing of a regular raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterShape {
    rows: u32,
    cols: u32,
    spacing: f64,
}

impl RasterShape {
    /// Maximum dimension size: row/column arithmetic uses `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Validate and build a shape.
    ///
    /// `diagonals` selects whether the link count must also cover the
    /// diagonal links of an 8-connected raster.
    pub(crate) fn new(rows: u32, cols: u32, spacing: f64, diagonals: bool) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(GridError::InvalidSpacing { value: spacing });
        }
        let nodes = rows as u64 * cols as u64;
        if nodes > u32::MAX as u64 {
            return Err(GridError::NodeCountOverflow { count: nodes });
        }
        let shape = Self {
            rows,
            cols,
            spacing,
        };
        let links = if diagonals {
            shape.orthogonal_link_count_u64() + shape.diagonal_link_count_u64()
        } else {
            shape.orthogonal_link_count_u64()
        };
        if links > u32::MAX as u64 {
            return Err(GridError::LinkCountOverflow { count: links });
        }
        Ok(shape)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Distance between orthogonally adjacent nodes.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Node id at `(row, col)`, or `None` outside the grid.
    pub fn node_at(&self, row: i32, col: i32) -> Option<NodeId> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        Some(NodeId(row as u32 * self.cols + col as u32))
    }

    /// `(row, col)` of `node`, or `None` if out of range.
    pub fn row_col(&self, node: NodeId) -> Option<(i32, i32)> {
        if node.index() >= self.node_count() {
            return None;
        }
        Some(((node.0 / self.cols) as i32, (node.0 % self.cols) as i32))
    }

    /// Whether `node` lies on the outer ring of the raster.
    pub fn is_perimeter(&self, node: NodeId) -> bool {
        match self.row_col(node) {
            Some((r, c)) => {
                r == 0 || c == 0 || r == self.rows as i32 - 1 || c == self.cols as i32 - 1
            }
            None => false,
        }
    }

    /// All perimeter node ids in ascending order.
    pub fn perimeter_nodes(&self) -> Vec<NodeId> {
        (0..self.node_count() as u32)
            .map(NodeId)
            .filter(|&n| self.is_perimeter(n))
            .collect()
    }

    /// Conventional starting layout: perimeter nodes are fixed-value
    /// outlets, interior nodes are core.
    pub fn default_statuses(&self) -> Vec<BoundaryStatus> {
        (0..self.node_count() as u32)
            .map(|i| {
                if self.is_perimeter(NodeId(i)) {
                    BoundaryStatus::FixedValue
                } else {
                    BoundaryStatus::Core
                }
            })
            .collect()
    }

    fn orthogonal_link_count_u64(&self) -> u64 {
        let (r, c) = (self.rows as u64, self.cols as u64);
        r * (c - 1) + (r - 1) * c
    }

    fn diagonal_link_count_u64(&self) -> u64 {
        2 * (self.rows as u64 - 1) * (self.cols as u64 - 1)
    }

    /// Number of horizontal plus vertical links.
    pub fn orthogonal_link_count(&self) -> usize {
        self.orthogonal_link_count_u64() as usize
    }

    /// Number of diagonal links (two per cell).
    pub fn diagonal_link_count(&self) -> usize {
        self.diagonal_link_count_u64() as usize
    }

    /// Links per row block: horizontal links of one row plus the vertical
    /// links above it.
    fn row_stride(&self) -> u32 {
        2 * self.cols - 1
    }

    /// Link `(row, col) -> (row, col + 1)`.
    fn horizontal_link(&self, row: i32, col: i32) -> LinkId {
        LinkId(row as u32 * self.row_stride() + col as u32)
    }

    /// Link `(row, col) -> (row + 1, col)`.
    fn vertical_link(&self, row: i32, col: i32) -> LinkId {
        LinkId(row as u32 * self.row_stride() + (self.cols - 1) + col as u32)
    }

    /// Diagonal link of the cell with lower-left node `(row, col)`;
    /// `falling` selects `(row, col + 1) -> (row + 1, col)`.
    fn diagonal_link(&self, row: i32, col: i32, falling: bool) -> LinkId {
        let cell = row as u32 * (self.cols - 1) + col as u32;
        LinkId(self.orthogonal_link_count() as u32 + 2 * cell + falling as u32)
    }

    /// The link joining `(row, col)` to its neighbour at `offset`.
    ///
    /// The neighbour must lie inside the grid.
    fn link_towards(&self, row: i32, col: i32, offset: Offset) -> LinkId {
        match offset {
            (0, 1) => self.horizontal_link(row, col),
            (0, -1) => self.horizontal_link(row, col - 1),
            (1, 0) => self.vertical_link(row, col),
            (-1, 0) => self.vertical_link(row - 1, col),
            (1, 1) => self.diagonal_link(row, col, false),
            (-1, -1) => self.diagonal_link(row - 1, col - 1, false),
            (1, -1) => self.diagonal_link(row, col - 1, true),
            (-1, 1) => self.diagonal_link(row - 1, col, true),
            _ => unreachable!("raster offsets are unit steps"),
        }
    }

    /// In-bounds neighbours of `node` for the given direction sets, in
    /// the order the sets are listed.
    pub(crate) fn neighbours_with(&self, node: NodeId, sets: &[&[Offset]]) -> Neighbours {
        let mut out = Neighbours::new();
        let Some((r, c)) = self.row_col(node) else {
            return out;
        };
        for set in sets {
            for &(dr, dc) in set.iter() {
                if let Some(nb) = self.node_at(r + dr, c + dc) {
                    let length = if dr != 0 && dc != 0 {
                        self.spacing * SQRT_2
                    } else {
                        self.spacing
                    };
                    out.push(Neighbour::new(nb, self.link_towards(r, c, (dr, dc)), length));
                }
            }
        }
        out
    }

    /// Endpoints of `link`; diagonal ids are only valid when `diagonals`.
    pub(crate) fn link_nodes(&self, link: LinkId, diagonals: bool) -> Option<(NodeId, NodeId)> {
        let id = link.index();
        let ortho = self.orthogonal_link_count();
        if id < ortho {
            let stride = self.row_stride() as usize;
            let r = (id / stride) as i32;
            let rem = (id % stride) as i32;
            let horizontal = self.cols - 1;
            return if (rem as u32) < horizontal {
                Some((self.node_at(r, rem)?, self.node_at(r, rem + 1)?))
            } else {
                let c = rem - horizontal as i32;
                Some((self.node_at(r, c)?, self.node_at(r + 1, c)?))
            };
        }
        if !diagonals || id >= ortho + self.diagonal_link_count() {
            return None;
        }
        let d = id - ortho;
        let cell = d / 2;
        let cells_per_row = (self.cols - 1) as usize;
        let r = (cell / cells_per_row) as i32;
        let c = (cell % cells_per_row) as i32;
        if d % 2 == 0 {
            Some((self.node_at(r, c)?, self.node_at(r + 1, c + 1)?))
        } else {
            Some((self.node_at(r, c + 1)?, self.node_at(r + 1, c)?))
        }
    }

    /// Closed-form largest degree over the grid for the given connectivity.
    pub(crate) fn max_degree(&self, diagonals: bool) -> usize {
        let row_span = (self.rows as usize).min(3);
        let col_span = (self.cols as usize).min(3);
        if diagonals {
            // The fullest 3x3 window around a node, minus the node itself.
            row_span * col_span - 1
        } else {
            (row_span - 1) + (col_span - 1)
        }
    }
}
