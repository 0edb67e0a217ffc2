//! Test utilities for rill development.
//!
//! [`fixtures`] provides seeded terrains and boundary layouts;
//! [`assert_result_invariants`] checks a [`FlowDirectionResult`] against
//! every property a flow-direction pass must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use rill_core::{BoundaryStatus, NodeId};
use rill_director::{FlowDirectionResult, FlowKind};
use rill_grid::Topology;

/// Assert that `result` is a valid routing of `elevations` over `topology`
/// with `statuses` and no baselevel overrides.
///
/// Checks, per node: closed nodes have no receiver and are never chosen;
/// outlets and pits drain to themselves without a link; routed receivers
/// are strictly lower neighbours reached over the reported link with the
/// reported slope, and no eligible neighbour is steeper; `is_sink` holds
/// exactly for pits; pits have no strictly lower eligible neighbour.
pub fn assert_result_invariants(
    topology: &dyn Topology,
    elevations: &[f64],
    statuses: &[BoundaryStatus],
    result: &FlowDirectionResult,
) {
    let n = topology.node_count();
    assert_eq!(result.len(), n, "result length");

    for i in 0..n {
        let node = NodeId(i as u32);
        let status = statuses[i];
        let here = elevations[i];
        let kind = result.kind(node);
        let eligible: Vec<_> = topology
            .neighbours(node)
            .into_iter()
            .filter(|nb| statuses[nb.node.index()] != BoundaryStatus::Closed)
            .collect();

        assert_eq!(
            result.is_sink(node),
            kind == FlowKind::Pit,
            "node {node}: is_sink disagrees with kind {kind:?}"
        );
        if let Some(r) = result.receiver(node) {
            assert_ne!(
                statuses[r.index()],
                BoundaryStatus::Closed,
                "node {node} drains into closed node {r}"
            );
        }

        match status {
            BoundaryStatus::Closed => {
                assert_eq!(kind, FlowKind::Closed, "node {node}");
                assert_eq!(result.receiver(node), None, "closed node {node}");
                continue;
            }
            BoundaryStatus::FixedValue => {
                assert_eq!(kind, FlowKind::Outlet, "node {node}");
            }
            BoundaryStatus::Core => {
                assert!(
                    matches!(kind, FlowKind::Routed | FlowKind::Pit),
                    "core node {node} has kind {kind:?}"
                );
            }
            BoundaryStatus::FixedGradient => {
                assert!(
                    matches!(kind, FlowKind::Routed | FlowKind::Pit | FlowKind::OffGrid),
                    "fixed-gradient node {node} has kind {kind:?}"
                );
            }
        }

        match kind {
            FlowKind::Routed => {
                let r = result.receiver(node).unwrap_or_else(|| panic!("node {node}"));
                let link = result
                    .receiver_link(node)
                    .unwrap_or_else(|| panic!("routed node {node} has no link"));
                let via = eligible
                    .iter()
                    .find(|nb| nb.node == r && nb.link == link)
                    .unwrap_or_else(|| panic!("node {node}: receiver {r} via {link} not a neighbour"));
                assert!(
                    elevations[r.index()] < here,
                    "node {node}: receiver {r} is not strictly lower"
                );
                let slope = result.steepest_slope(node);
                assert_eq!(slope, (here - elevations[r.index()]) / via.length);
                for nb in &eligible {
                    let s = (here - elevations[nb.node.index()]) / nb.length;
                    assert!(s <= slope, "node {node}: {} is steeper than {r}", nb.node);
                }
            }
            FlowKind::Pit | FlowKind::Outlet | FlowKind::OffGrid => {
                assert_eq!(result.receiver(node), Some(node), "node {node}");
                assert_eq!(result.receiver_link(node), None, "node {node}");
                if kind == FlowKind::Pit {
                    assert_eq!(result.steepest_slope(node), 0.0, "pit {node}");
                    assert!(
                        eligible.iter().all(|nb| elevations[nb.node.index()] >= here),
                        "pit {node} has a strictly lower neighbour"
                    );
                }
                if kind == FlowKind::Outlet {
                    assert_eq!(result.steepest_slope(node), 0.0, "outlet {node}");
                }
            }
            FlowKind::Closed => unreachable!("handled above"),
        }
    }
}

/// Assert two results are bit-for-bit identical, slopes included.
pub fn assert_bitwise_equal(a: &FlowDirectionResult, b: &FlowDirectionResult) {
    assert_eq!(a.receiver_nodes(), b.receiver_nodes());
    assert_eq!(a.receiver_links(), b.receiver_links());
    assert_eq!(a.sink_flags(), b.sink_flags());
    assert_eq!(a.kinds(), b.kinds());
    let bits = |r: &FlowDirectionResult| -> Vec<u64> {
        r.steepest_slopes().iter().map(|s| s.to_bits()).collect()
    };
    assert_eq!(bits(a), bits(b));
}
