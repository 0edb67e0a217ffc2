//! Elevation-field validation.

use crate::error::FlowError;
use crate::id::NodeId;

/// Check that `elevations` has one finite value per node.
///
/// Runs before any node is processed, so a failing field never yields a
/// partial result.
pub fn validate_elevations(elevations: &[f64], node_count: usize) -> Result<(), FlowError> {
    if elevations.len() != node_count {
        return Err(FlowError::ShapeMismatch {
            what: "elevations",
            expected: node_count,
            actual: elevations.len(),
        });
    }
    if let Some((i, &value)) = elevations.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(FlowError::InvalidElevation {
            node: NodeId(i as u32),
            value,
        });
    }
    Ok(())
}
