//! Steepest-descent receiver selection for a single node.
//!
//! [`route_node`] is a pure function of one node's neighbour sequence and
//! the shared read-only [`RoutingContext`]; the director maps it over every
//! node id, in any order and on any thread.

use crate::config::FixedGradientPolicy;
use crate::result::FlowKind;
use rill_core::{BoundaryClassifier, BoundaryStatus, FlowError, LinkId, NodeId};
use rill_grid::Neighbour;

/// Outcome for one node, before assembly into the parallel result arrays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NodeFlow {
    pub(crate) receiver: Option<NodeId>,
    pub(crate) link: Option<LinkId>,
    pub(crate) slope: f64,
    pub(crate) kind: FlowKind,
}

impl NodeFlow {
    pub(crate) fn routed(receiver: NodeId, link: LinkId, slope: f64) -> Self {
        Self {
            receiver: Some(receiver),
            link: Some(link),
            slope,
            kind: FlowKind::Routed,
        }
    }

    pub(crate) fn pit(node: NodeId) -> Self {
        Self::terminal(node, 0.0, FlowKind::Pit)
    }

    pub(crate) fn outlet(node: NodeId) -> Self {
        Self::terminal(node, 0.0, FlowKind::Outlet)
    }

    pub(crate) fn off_grid(node: NodeId, gradient: f64) -> Self {
        Self::terminal(node, gradient, FlowKind::OffGrid)
    }

    pub(crate) fn closed() -> Self {
        Self {
            receiver: None,
            link: None,
            slope: 0.0,
            kind: FlowKind::Closed,
        }
    }

    fn terminal(node: NodeId, slope: f64, kind: FlowKind) -> Self {
        Self {
            receiver: Some(node),
            link: None,
            slope,
            kind,
        }
    }
}

/// Read-only inputs shared by every node of one pass.
///
/// Built only after the elevation field, the statuses, and the baselevel
/// ids have been validated against the node count.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RoutingContext<'a> {
    pub(crate) elevations: &'a [f64],
    pub(crate) boundary: BoundaryClassifier<'a>,
    /// Per-node "forced outlet" mask; empty when no baselevel was given.
    pub(crate) baselevel: &'a [bool],
    pub(crate) fixed_gradient: FixedGradientPolicy,
}

impl RoutingContext<'_> {
    fn node_count(&self) -> usize {
        self.elevations.len()
    }

    fn is_baselevel(&self, node: NodeId) -> bool {
        self.baselevel.get(node.index()).copied().unwrap_or(false)
    }
}

/// Reject neighbour entries that point outside the node range or carry a
/// length no slope can be computed over.
pub(crate) fn check_neighbours(
    node: NodeId,
    neighbours: &[Neighbour],
    node_count: usize,
) -> Result<(), FlowError> {
    for nb in neighbours {
        if nb.node.index() >= node_count {
            return Err(FlowError::DanglingLink {
                node,
                neighbour: nb.node,
                link: nb.link,
            });
        }
        if !(nb.length.is_finite() && nb.length > 0.0) {
            return Err(FlowError::InvalidLinkLength {
                node,
                link: nb.link,
                length: nb.length,
            });
        }
    }
    Ok(())
}

/// Choose the receiver of `node` from its canonical-order `neighbours`.
///
/// Closed nodes get no receiver. Outlets (fixed-value or baselevel) drain
/// to themselves. Everything else takes the strictly steepest positive
/// slope, keeping the earliest candidate on exact ties, and is a pit when
/// no candidate descends.
pub(crate) fn route_node(
    node: NodeId,
    neighbours: &[Neighbour],
    ctx: &RoutingContext<'_>,
) -> Result<NodeFlow, FlowError> {
    check_neighbours(node, neighbours, ctx.node_count())?;

    let status = ctx.boundary.status(node);
    if !status.is_routable() {
        return Ok(NodeFlow::closed());
    }
    if status.is_outlet() || ctx.is_baselevel(node) {
        return Ok(NodeFlow::outlet(node));
    }

    let here = ctx.elevations[node.index()];
    let mut steepest = 0.0;
    let mut best: Option<&Neighbour> = None;
    for nb in neighbours {
        if !ctx.boundary.is_routable(nb.node) {
            continue;
        }
        let slope = (here - ctx.elevations[nb.node.index()]) / nb.length;
        if slope > steepest {
            steepest = slope;
            best = Some(nb);
        }
    }

    // The virtual off-grid candidate ranks after every real neighbour.
    if status == BoundaryStatus::FixedGradient {
        if let FixedGradientPolicy::OffGrid { gradient } = ctx.fixed_gradient {
            if gradient > steepest {
                return Ok(NodeFlow::off_grid(node, gradient));
            }
        }
    }

    Ok(match best {
        Some(nb) => NodeFlow::routed(nb.node, nb.link, steepest),
        None => NodeFlow::pit(node),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::SQRT_2;

    const CORE: BoundaryStatus = BoundaryStatus::Core;

    fn nb(node: u32, link: u32, length: f64) -> Neighbour {
        Neighbour::new(NodeId(node), LinkId(link), length)
    }

    fn ctx<'a>(elevations: &'a [f64], statuses: &'a [BoundaryStatus]) -> RoutingContext<'a> {
        RoutingContext {
            elevations,
            boundary: BoundaryClassifier::new(statuses, elevations.len()).unwrap(),
            baselevel: &[],
            fixed_gradient: FixedGradientPolicy::RouteAsCore,
        }
    }

    #[test]
    fn picks_steepest_not_lowest() {
        // Node 1 is lower but twice as far away.
        let elev = [10.0, 0.0, 4.0];
        let statuses = [CORE; 3];
        let flow = route_node(
            NodeId(0),
            &[nb(1, 0, 4.0), nb(2, 1, 1.0)],
            &ctx(&elev, &statuses),
        )
        .unwrap();
        assert_eq!(flow, NodeFlow::routed(NodeId(2), LinkId(1), 6.0));
    }

    #[test]
    fn first_candidate_wins_exact_tie() {
        let elev = [5.0, 4.0, 4.0];
        let statuses = [CORE; 3];
        let flow = route_node(
            NodeId(0),
            &[nb(2, 7, 1.0), nb(1, 3, 1.0)],
            &ctx(&elev, &statuses),
        )
        .unwrap();
        assert_eq!(flow.receiver, Some(NodeId(2)));
        assert_eq!(flow.link, Some(LinkId(7)));
    }

    #[test]
    fn orthogonal_beats_diagonal_at_equal_slope() {
        // Diagonal drop scaled by sqrt(2) gives the same gradient.
        let elev = [2.0, 1.0, 2.0 - SQRT_2];
        let statuses = [CORE; 3];
        let flow = route_node(
            NodeId(0),
            &[nb(1, 0, 1.0), nb(2, 1, SQRT_2)],
            &ctx(&elev, &statuses),
        )
        .unwrap();
        assert_eq!(flow.receiver, Some(NodeId(1)));
    }

    #[test]
    fn flat_neighbour_is_never_a_receiver() {
        let elev = [3.0, 3.0, 3.0];
        let statuses = [CORE; 3];
        let flow = route_node(
            NodeId(1),
            &[nb(0, 0, 1.0), nb(2, 1, 1.0)],
            &ctx(&elev, &statuses),
        )
        .unwrap();
        assert_eq!(flow, NodeFlow::pit(NodeId(1)));
    }

    #[test]
    fn isolated_node_is_a_pit() {
        let flow = route_node(NodeId(0), &[], &ctx(&[1.0], &[CORE])).unwrap();
        assert_eq!(flow.kind, FlowKind::Pit);
        assert_eq!(flow.receiver, Some(NodeId(0)));
        assert_eq!(flow.slope, 0.0);
    }

    #[test]
    fn closed_neighbours_are_skipped() {
        let elev = [5.0, 0.0, 4.0];
        let statuses = [CORE, BoundaryStatus::Closed, CORE];
        let flow = route_node(
            NodeId(0),
            &[nb(1, 0, 1.0), nb(2, 1, 1.0)],
            &ctx(&elev, &statuses),
        )
        .unwrap();
        assert_eq!(flow.receiver, Some(NodeId(2)));
    }

    #[test]
    fn only_closed_neighbours_means_pit() {
        let elev = [5.0, 0.0];
        let statuses = [CORE, BoundaryStatus::Closed];
        let flow = route_node(NodeId(0), &[nb(1, 0, 1.0)], &ctx(&elev, &statuses)).unwrap();
        assert_eq!(flow.kind, FlowKind::Pit);
    }

    #[test]
    fn closed_node_has_no_receiver() {
        let elev = [5.0, 0.0];
        let statuses = [BoundaryStatus::Closed, CORE];
        let flow = route_node(NodeId(0), &[nb(1, 0, 1.0)], &ctx(&elev, &statuses)).unwrap();
        assert_eq!(flow, NodeFlow::closed());
    }

    #[test]
    fn outlet_ignores_lower_neighbour() {
        let elev = [5.0, 0.0];
        let statuses = [BoundaryStatus::FixedValue, CORE];
        let flow = route_node(NodeId(0), &[nb(1, 0, 1.0)], &ctx(&elev, &statuses)).unwrap();
        assert_eq!(flow, NodeFlow::outlet(NodeId(0)));
    }

    #[test]
    fn baselevel_mask_forces_outlet() {
        let elev = [5.0, 0.0];
        let statuses = [CORE; 2];
        let mask = [true, false];
        let c = RoutingContext {
            baselevel: &mask,
            ..ctx(&elev, &statuses)
        };
        let flow = route_node(NodeId(0), &[nb(1, 0, 1.0)], &c).unwrap();
        assert_eq!(flow.kind, FlowKind::Outlet);
    }

    #[test]
    fn closed_baselevel_stays_closed() {
        let elev = [5.0, 0.0];
        let statuses = [BoundaryStatus::Closed, CORE];
        let mask = [true, false];
        let c = RoutingContext {
            baselevel: &mask,
            ..ctx(&elev, &statuses)
        };
        let flow = route_node(NodeId(0), &[nb(1, 0, 1.0)], &c).unwrap();
        assert_eq!(flow.kind, FlowKind::Closed);
    }

    #[test]
    fn fixed_gradient_routes_as_core_by_default() {
        let elev = [5.0, 4.0];
        let statuses = [BoundaryStatus::FixedGradient, CORE];
        let flow = route_node(NodeId(0), &[nb(1, 0, 1.0)], &ctx(&elev, &statuses)).unwrap();
        assert_eq!(flow, NodeFlow::routed(NodeId(1), LinkId(0), 1.0));
    }

    #[test]
    fn off_grid_wins_only_when_strictly_steeper() {
        let elev = [5.0, 4.0];
        let statuses = [BoundaryStatus::FixedGradient, CORE];
        let neighbours = [nb(1, 0, 1.0)];

        let steeper = RoutingContext {
            fixed_gradient: FixedGradientPolicy::OffGrid { gradient: 2.0 },
            ..ctx(&elev, &statuses)
        };
        let flow = route_node(NodeId(0), &neighbours, &steeper).unwrap();
        assert_eq!(flow, NodeFlow::off_grid(NodeId(0), 2.0));
        assert_eq!(flow.link, None);

        let tied = RoutingContext {
            fixed_gradient: FixedGradientPolicy::OffGrid { gradient: 1.0 },
            ..ctx(&elev, &statuses)
        };
        let flow = route_node(NodeId(0), &neighbours, &tied).unwrap();
        assert_eq!(flow.kind, FlowKind::Routed);
    }

    #[test]
    fn off_grid_does_not_apply_to_core_nodes() {
        let elev = [5.0, 6.0];
        let statuses = [CORE; 2];
        let c = RoutingContext {
            fixed_gradient: FixedGradientPolicy::OffGrid { gradient: 2.0 },
            ..ctx(&elev, &statuses)
        };
        let flow = route_node(NodeId(0), &[nb(1, 0, 1.0)], &c).unwrap();
        assert_eq!(flow.kind, FlowKind::Pit);
    }

    #[test]
    fn dangling_neighbour_is_an_error() {
        let elev = [5.0, 4.0];
        let statuses = [CORE; 2];
        let err = route_node(NodeId(0), &[nb(9, 3, 1.0)], &ctx(&elev, &statuses)).unwrap_err();
        assert_eq!(
            err,
            FlowError::DanglingLink {
                node: NodeId(0),
                neighbour: NodeId(9),
                link: LinkId(3)
            }
        );
    }

    #[test]
    fn dangling_neighbour_of_closed_node_is_still_reported() {
        let elev = [5.0];
        let statuses = [BoundaryStatus::Closed];
        let err = route_node(NodeId(0), &[nb(1, 0, 1.0)], &ctx(&elev, &statuses)).unwrap_err();
        assert!(matches!(err, FlowError::DanglingLink { .. }));
    }

    #[test]
    fn zero_length_link_is_an_error() {
        let elev = [5.0, 4.0];
        let statuses = [CORE; 2];
        let err = route_node(NodeId(0), &[nb(1, 0, 0.0)], &ctx(&elev, &statuses)).unwrap_err();
        assert!(matches!(err, FlowError::InvalidLinkLength { .. }));
    }

    proptest! {
        #[test]
        fn receiver_is_strictly_lower_or_self(
            here in -100.0f64..100.0,
            others in prop::collection::vec((-100.0f64..100.0, 0.1f64..5.0), 0..10),
        ) {
            let mut elev = vec![here];
            elev.extend(others.iter().map(|&(e, _)| e));
            let statuses = vec![CORE; elev.len()];
            let neighbours: Vec<Neighbour> = others
                .iter()
                .enumerate()
                .map(|(i, &(_, len))| nb(i as u32 + 1, i as u32, len))
                .collect();
            let flow = route_node(NodeId(0), &neighbours, &ctx(&elev, &statuses)).unwrap();
            let r = flow.receiver.unwrap();
            if r == NodeId(0) {
                prop_assert_eq!(flow.kind, FlowKind::Pit);
                prop_assert!(others.iter().all(|&(e, _)| e >= here));
            } else {
                prop_assert!(elev[r.index()] < here);
                prop_assert!(flow.slope > 0.0);
                for (i, &(e, len)) in others.iter().enumerate() {
                    prop_assert!((here - e) / len <= flow.slope, "candidate {} steeper", i);
                }
            }
        }
    }
}
