//! Assembled output of one flow-direction pass.

use crate::selector::NodeFlow;
use rill_core::{LinkId, NodeId};
use std::fmt;

/// How a node's receiver was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
    /// Drains to a strictly lower neighbour.
    Routed,
    /// No eligible neighbour is strictly downhill; receiver is self.
    Pit,
    /// Fixed-value or baselevel node; receiver is self by definition.
    Outlet,
    /// Fixed-gradient node draining to the virtual off-grid neighbour.
    OffGrid,
    /// Closed node; excluded from routing and has no receiver.
    Closed,
}

/// Per-node receivers, receiver links, slopes, and sink flags.
///
/// All arrays have one entry per node and are indexed by [`NodeId::index`].
/// A value is only ever handed to callers fully populated: the director
/// builds it after every node has been resolved.
///
/// The per-node query methods panic on an out-of-range id, like slice
/// indexing.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowDirectionResult {
    receiver_node: Vec<Option<NodeId>>,
    receiver_link: Vec<Option<LinkId>>,
    steepest_slope: Vec<f64>,
    is_sink: Vec<bool>,
    kind: Vec<FlowKind>,
}

impl FlowDirectionResult {
    pub(crate) fn assemble(flows: Vec<NodeFlow>) -> Self {
        let n = flows.len();
        let mut result = Self {
            receiver_node: Vec::with_capacity(n),
            receiver_link: Vec::with_capacity(n),
            steepest_slope: Vec::with_capacity(n),
            is_sink: Vec::with_capacity(n),
            kind: Vec::with_capacity(n),
        };
        for flow in flows {
            result.receiver_node.push(flow.receiver);
            result.receiver_link.push(flow.link);
            result.steepest_slope.push(flow.slope);
            result.is_sink.push(flow.kind == FlowKind::Pit);
            result.kind.push(flow.kind);
        }
        result
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.kind.len()
    }

    /// Whether the result covers zero nodes.
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    // ── Whole-array views ───────────────────────────────────────

    /// Receiver of every node; `None` only for closed nodes.
    pub fn receiver_nodes(&self) -> &[Option<NodeId>] {
        &self.receiver_node
    }

    /// Link to each receiver; `None` whenever the receiver is self or absent.
    pub fn receiver_links(&self) -> &[Option<LinkId>] {
        &self.receiver_link
    }

    /// Downhill gradient to each receiver.
    pub fn steepest_slopes(&self) -> &[f64] {
        &self.steepest_slope
    }

    /// Pit flags.
    pub fn sink_flags(&self) -> &[bool] {
        &self.is_sink
    }

    /// Classification of every node.
    pub fn kinds(&self) -> &[FlowKind] {
        &self.kind
    }

    // ── Per-node queries ────────────────────────────────────────

    /// Receiver of `node`.
    pub fn receiver(&self, node: NodeId) -> Option<NodeId> {
        self.receiver_node[node.index()]
    }

    /// Link from `node` to its receiver.
    pub fn receiver_link(&self, node: NodeId) -> Option<LinkId> {
        self.receiver_link[node.index()]
    }

    /// Gradient from `node` to its receiver.
    pub fn steepest_slope(&self, node: NodeId) -> f64 {
        self.steepest_slope[node.index()]
    }

    /// Whether `node` is a pit.
    pub fn is_sink(&self, node: NodeId) -> bool {
        self.is_sink[node.index()]
    }

    /// Whether `node` is an outlet (fixed-value or baselevel).
    pub fn is_outlet(&self, node: NodeId) -> bool {
        self.kind(node) == FlowKind::Outlet
    }

    /// How the receiver of `node` was decided.
    pub fn kind(&self, node: NodeId) -> FlowKind {
        self.kind[node.index()]
    }

    /// Pit node ids, ascending.
    pub fn sinks(&self) -> Vec<NodeId> {
        self.nodes_of(FlowKind::Pit)
    }

    /// Outlet node ids, ascending.
    pub fn outlets(&self) -> Vec<NodeId> {
        self.nodes_of(FlowKind::Outlet)
    }

    fn nodes_of(&self, wanted: FlowKind) -> Vec<NodeId> {
        self.kind
            .iter()
            .enumerate()
            .filter(|&(_, &k)| k == wanted)
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    /// Node counts per [`FlowKind`].
    pub fn summary(&self) -> FlowSummary {
        let mut s = FlowSummary {
            nodes: self.len(),
            ..FlowSummary::default()
        };
        for k in &self.kind {
            match k {
                FlowKind::Routed => s.routed += 1,
                FlowKind::Pit => s.pits += 1,
                FlowKind::Outlet => s.outlets += 1,
                FlowKind::OffGrid => s.off_grid += 1,
                FlowKind::Closed => s.closed += 1,
            }
        }
        s
    }
}

/// Node counts of a [`FlowDirectionResult`], by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowSummary {
    /// Total nodes.
    pub nodes: usize,
    /// Nodes with a downhill receiver.
    pub routed: usize,
    /// Pits.
    pub pits: usize,
    /// Outlets.
    pub outlets: usize,
    /// Nodes draining off-grid.
    pub off_grid: usize,
    /// Closed nodes.
    pub closed: usize,
}

impl fmt::Display for FlowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes: {} routed, {} pits, {} outlets, {} off-grid, {} closed",
            self.nodes, self.routed, self.pits, self.outlets, self.off_grid, self.closed
        )
    }
}
