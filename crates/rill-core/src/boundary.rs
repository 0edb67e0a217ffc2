//! Per-node boundary status and the classifier that gates routing.

use crate::error::FlowError;
use crate::id::NodeId;
use std::fmt;

/// Boundary condition attached to a node.
///
/// The integer codes follow the conventional grid-status numbering
/// (`CORE = 0`, `FIXED_VALUE = 1`, `FIXED_GRADIENT = 2`, `CLOSED = 4`).
/// Code 3 (looped boundaries) is not supported and decodes as unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BoundaryStatus {
    /// Interior node; routes by elevation.
    Core = 0,
    /// Outlet; terminates flow regardless of neighbour elevations.
    FixedValue = 1,
    /// Routes like [`Core`](Self::Core), but may drain off-grid when the
    /// director is configured with a virtual off-grid neighbour.
    FixedGradient = 2,
    /// Excluded: never a source and never a receiver.
    Closed = 4,
}

impl BoundaryStatus {
    /// Decode a raw status code.
    ///
    /// Returns `None` for any code outside the four recognised values.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Core),
            1 => Some(Self::FixedValue),
            2 => Some(Self::FixedGradient),
            4 => Some(Self::Closed),
            _ => None,
        }
    }

    /// The raw status code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode one code per node, failing on the first unrecognised value.
    pub fn decode_all(codes: &[u8]) -> Result<Vec<Self>, FlowError> {
        codes
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                Self::from_code(code).ok_or(FlowError::UnknownBoundaryStatus {
                    node: NodeId(i as u32),
                    code,
                })
            })
            .collect()
    }

    /// `false` only for [`Closed`](Self::Closed).
    #[inline]
    pub fn is_routable(self) -> bool {
        self != Self::Closed
    }

    /// `true` only for [`FixedValue`](Self::FixedValue).
    #[inline]
    pub fn is_outlet(self) -> bool {
        self == Self::FixedValue
    }
}

impl fmt::Display for BoundaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Core => "CORE",
            Self::FixedValue => "FIXED_VALUE",
            Self::FixedGradient => "FIXED_GRADIENT",
            Self::Closed => "CLOSED",
        };
        f.write_str(name)
    }
}

/// Read-only boundary lookup over caller-owned per-node statuses.
///
/// Every component consults the classifier before touching a node:
/// closed nodes are skipped both as sources and as receiver candidates,
/// and outlets short-circuit the steepest-descent scan.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryClassifier<'a> {
    statuses: &'a [BoundaryStatus],
}

impl<'a> BoundaryClassifier<'a> {
    /// Wrap a status slice, checking it has exactly one entry per node.
    pub fn new(statuses: &'a [BoundaryStatus], node_count: usize) -> Result<Self, FlowError> {
        if statuses.len() != node_count {
            return Err(FlowError::ShapeMismatch {
                what: "statuses",
                expected: node_count,
                actual: statuses.len(),
            });
        }
        Ok(Self { statuses })
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Whether the classifier covers zero nodes.
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Status of `node`. Panics if `node` is out of range.
    #[inline]
    pub fn status(&self, node: NodeId) -> BoundaryStatus {
        self.statuses[node.index()]
    }

    /// `false` only for closed nodes.
    #[inline]
    pub fn is_routable(&self, node: NodeId) -> bool {
        self.status(node).is_routable()
    }

    /// `true` only for fixed-value nodes.
    #[inline]
    pub fn is_outlet(&self, node: NodeId) -> bool {
        self.status(node).is_outlet()
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &'a [BoundaryStatus] {
        self.statuses
    }
}
