//! Topology trait compliance test helpers.
//!
//! These functions verify that a Topology implementation satisfies the
//! invariants the flow director relies on. Reused across all adapter test
//! modules (Raster4, Raster8, LinkList).

use crate::topology::Topology;
use indexmap::IndexSet;
use rill_core::NodeId;

fn nodes(topology: &dyn Topology) -> impl Iterator<Item = NodeId> {
    (0..topology.node_count() as u32).map(NodeId)
}

/// Assert that every neighbour id is in range and every length is positive.
pub fn assert_neighbours_in_range(topology: &dyn Topology) {
    let n = topology.node_count();
    for node in nodes(topology) {
        for nb in topology.neighbours(node) {
            assert!(
                nb.node.index() < n,
                "N({node}) contains out-of-range node {}",
                nb.node
            );
            assert!(
                nb.length.is_finite() && nb.length > 0.0,
                "N({node}) link {} has length {}",
                nb.link,
                nb.length
            );
            assert!(
                nb.link.index() < topology.link_count(),
                "N({node}) link {} >= link_count {}",
                nb.link,
                topology.link_count()
            );
        }
    }
}

/// Assert that `b in neighbours(a)` via link `l` implies `a in neighbours(b)`
/// via the same link and length.
pub fn assert_neighbours_symmetric(topology: &dyn Topology) {
    for node in nodes(topology) {
        for nb in topology.neighbours(node) {
            let back = topology.neighbours(nb.node);
            assert!(
                back.iter()
                    .any(|b| b.node == node && b.link == nb.link && b.length == nb.length),
                "neighbour symmetry violated: {} in N({node}) via link {} but not the reverse",
                nb.node,
                nb.link
            );
        }
    }
}

/// Assert that each neighbour's link joins exactly that node pair.
pub fn assert_links_join_endpoints(topology: &dyn Topology) {
    for node in nodes(topology) {
        for nb in topology.neighbours(node) {
            let (tail, head) = topology
                .link_nodes(nb.link)
                .unwrap_or_else(|| panic!("link {} has no endpoints", nb.link));
            assert!(
                (tail, head) == (node, nb.node) || (tail, head) == (nb.node, node),
                "link {} joins {tail}-{head}, but is listed between {node} and {}",
                nb.link,
                nb.node
            );
        }
    }
}

/// Assert that a node never lists the same neighbour link twice.
pub fn assert_no_duplicate_links(topology: &dyn Topology) {
    for node in nodes(topology) {
        let n = topology.neighbours(node);
        let unique: IndexSet<_> = n.iter().map(|nb| nb.link).collect();
        assert_eq!(unique.len(), n.len(), "N({node}) repeats a link");
    }
}

/// Assert that two calls to `neighbours` return the same sequence.
pub fn assert_canonical_order_deterministic(topology: &dyn Topology) {
    for node in nodes(topology) {
        assert_eq!(
            topology.neighbours(node),
            topology.neighbours(node),
            "neighbours({node}) is non-deterministic"
        );
    }
}

/// Assert that `max_neighbour_degree` matches a full scan.
pub fn assert_max_degree_exact(topology: &dyn Topology) {
    let scanned = nodes(topology)
        .map(|n| topology.neighbours(n).len())
        .max()
        .unwrap_or(0);
    assert_eq!(
        topology.max_neighbour_degree(),
        scanned,
        "max_neighbour_degree disagrees with a full scan"
    );
}

/// Run all compliance checks on a topology.
pub fn run_full_compliance(topology: &dyn Topology) {
    assert_neighbours_in_range(topology);
    assert_neighbours_symmetric(topology);
    assert_links_join_endpoints(topology);
    assert_no_duplicate_links(topology);
    assert_canonical_order_deterministic(topology);
    assert_max_degree_exact(topology);
}
