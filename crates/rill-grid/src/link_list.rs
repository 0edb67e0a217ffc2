//! Generic mesh topology described by an explicit node/link list.

use crate::error::GridError;
use crate::topology::{Neighbour, Neighbours, Topology};
use indexmap::map::Entry;
use indexmap::IndexMap;
use rill_core::{LinkId, NodeId};

/// An arbitrary mesh given only by its links.
///
/// No geometry is assumed: every neighbour, link id, and link length comes
/// from caller data, and each node's neighbours are returned exactly in the
/// order they were supplied. Adjacency is stored in compressed form
/// (`offsets` into one flat `entries` array), so lookups never allocate for
/// nodes of degree eight or less.
///
/// # Examples
///
/// ```
/// use rill_grid::{LinkList, Topology};
/// use rill_core::NodeId;
///
/// // Three nodes in a line, 5 units apart.
/// let mesh = LinkList::from_links(3, &[
///     (NodeId(0), NodeId(1), 5.0),
///     (NodeId(1), NodeId(2), 5.0),
/// ]).unwrap();
///
/// let middle: Vec<u32> = mesh.neighbours(NodeId(1)).iter().map(|n| n.node.0).collect();
/// assert_eq!(middle, vec![0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinkList {
    offsets: Vec<usize>,
    entries: Vec<Neighbour>,
    links: IndexMap<LinkId, (NodeId, NodeId)>,
    link_count: usize,
}

impl LinkList {
    /// Build from a link list: link `i` joins `links[i].0` (tail) to
    /// `links[i].1` (head) with length `links[i].2`.
    ///
    /// Each link appears in the neighbour list of both endpoints, in
    /// ascending link-id order.
    pub fn from_links(node_count: usize, links: &[(NodeId, NodeId, f64)]) -> Result<Self, GridError> {
        check_counts(node_count, links.len())?;

        let mut degree = vec![0usize; node_count];
        for (i, &(tail, head, length)) in links.iter().enumerate() {
            let link = LinkId(i as u32);
            check_node(link, tail, node_count)?;
            check_node(link, head, node_count)?;
            check_length(link, length)?;
            degree[tail.index()] += 1;
            degree[head.index()] += 1;
        }

        let offsets = prefix_offsets(&degree);
        let mut cursor = offsets[..node_count].to_vec();
        let placeholder = Neighbour::new(NodeId(0), LinkId(0), 0.0);
        let mut entries = vec![placeholder; offsets[node_count]];
        for (i, &(tail, head, length)) in links.iter().enumerate() {
            let link = LinkId(i as u32);
            entries[cursor[tail.index()]] = Neighbour::new(head, link, length);
            cursor[tail.index()] += 1;
            entries[cursor[head.index()]] = Neighbour::new(tail, link, length);
            cursor[head.index()] += 1;
        }

        Ok(Self {
            offsets,
            entries,
            links: links
                .iter()
                .enumerate()
                .map(|(i, &(t, h, _))| (LinkId(i as u32), (t, h)))
                .collect(),
            link_count: links.len(),
        })
    }

    /// Build from per-node neighbour lists, taken verbatim.
    ///
    /// `adjacency[i]` is node `i`'s neighbour sequence in canonical order.
    /// Link endpoints are inferred from the entries (tail is the lower id);
    /// a link id used for two different node pairs is rejected, as is any
    /// neighbour id outside `[0, adjacency.len())`. Link ids may be sparse;
    /// `link_count()` is one past the largest id seen.
    pub fn from_adjacency(adjacency: &[Vec<Neighbour>]) -> Result<Self, GridError> {
        let node_count = adjacency.len();
        let entry_count: usize = adjacency.iter().map(Vec::len).sum();
        check_counts(node_count, entry_count)?;

        let mut links: IndexMap<LinkId, (NodeId, NodeId)> = IndexMap::new();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut entries = Vec::with_capacity(entry_count);
        offsets.push(0);
        for (i, list) in adjacency.iter().enumerate() {
            let node = NodeId(i as u32);
            for nb in list {
                check_node(nb.link, nb.node, node_count)?;
                check_length(nb.link, nb.length)?;
                let pair = if node <= nb.node {
                    (node, nb.node)
                } else {
                    (nb.node, node)
                };
                match links.entry(nb.link) {
                    Entry::Vacant(slot) => {
                        slot.insert(pair);
                    }
                    Entry::Occupied(slot) if *slot.get() == pair => {}
                    Entry::Occupied(_) => {
                        return Err(GridError::InconsistentLink { link: nb.link })
                    }
                }
                entries.push(*nb);
            }
            offsets.push(entries.len());
        }

        let link_count = links.keys().map(|l| l.index() + 1).max().unwrap_or(0);
        Ok(Self {
            offsets,
            entries,
            links,
            link_count,
        })
    }

    /// Neighbours of `node` as a borrowed slice, in canonical order.
    pub fn neighbour_slice(&self, node: NodeId) -> &[Neighbour] {
        let i = node.index();
        if i + 1 >= self.offsets.len() {
            return &[];
        }
        &self.entries[self.offsets[i]..self.offsets[i + 1]]
    }
}

impl Topology for LinkList {
    fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    fn link_count(&self) -> usize {
        self.link_count
    }

    fn neighbours(&self, node: NodeId) -> Neighbours {
        Neighbours::from_slice(self.neighbour_slice(node))
    }

    fn link_nodes(&self, link: LinkId) -> Option<(NodeId, NodeId)> {
        self.links.get(&link).copied()
    }

    fn max_neighbour_degree(&self) -> usize {
        self.offsets
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }
}

fn check_counts(node_count: usize, link_count: usize) -> Result<(), GridError> {
    if node_count == 0 {
        return Err(GridError::EmptyGrid);
    }
    if node_count > NodeId::MAX_COUNT {
        return Err(GridError::NodeCountOverflow {
            count: node_count as u64,
        });
    }
    if link_count > u32::MAX as usize {
        return Err(GridError::LinkCountOverflow {
            count: link_count as u64,
        });
    }
    Ok(())
}

fn check_node(link: LinkId, node: NodeId, node_count: usize) -> Result<(), GridError> {
    if node.index() >= node_count {
        return Err(GridError::DanglingLink {
            link,
            node,
            node_count,
        });
    }
    Ok(())
}

fn check_length(link: LinkId, length: f64) -> Result<(), GridError> {
    if !(length.is_finite() && length > 0.0) {
        return Err(GridError::InvalidLinkLength { link, length });
    }
    Ok(())
}

fn prefix_offsets(degree: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(degree.len() + 1);
    let mut total = 0;
    offsets.push(0);
    for d in degree {
        total += d;
        offsets.push(total);
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    fn n(i: u32) -> NodeId {
        NodeId(i)
    }

    /// A unit square split by one diagonal: 0-1, 1-2, 2-3, 3-0, 0-2.
    fn square_with_diagonal() -> LinkList {
        LinkList::from_links(
            4,
            &[
                (n(0), n(1), 1.0),
                (n(1), n(2), 1.0),
                (n(2), n(3), 1.0),
                (n(3), n(0), 1.0),
                (n(0), n(2), std::f64::consts::SQRT_2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn from_links_orders_by_link_id() {
        let mesh = square_with_diagonal();
        let zero: Vec<(u32, u32)> = mesh
            .neighbours(n(0))
            .iter()
            .map(|nb| (nb.node.0, nb.link.0))
            .collect();
        // Links touching node 0 in id order: 0 (to 1), 3 (to 3), 4 (to 2).
        assert_eq!(zero, vec![(1, 0), (3, 3), (2, 4)]);
    }

    #[test]
    fn from_links_keeps_tail_head() {
        let mesh = square_with_diagonal();
        assert_eq!(mesh.link_nodes(LinkId(3)), Some((n(3), n(0))));
        assert_eq!(mesh.link_count(), 5);
        assert_eq!(mesh.link_nodes(LinkId(5)), None);
    }

    #[test]
    fn from_links_rejects_dangling() {
        let err = LinkList::from_links(2, &[(n(0), n(5), 1.0)]).unwrap_err();
        assert_eq!(
            err,
            GridError::DanglingLink {
                link: LinkId(0),
                node: n(5),
                node_count: 2
            }
        );
    }

    #[test]
    fn from_links_rejects_bad_length() {
        for bad in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            let err = LinkList::from_links(2, &[(n(0), n(1), bad)]).unwrap_err();
            assert!(matches!(err, GridError::InvalidLinkLength { .. }));
        }
    }

    #[test]
    fn from_links_rejects_empty() {
        assert_eq!(LinkList::from_links(0, &[]), Err(GridError::EmptyGrid));
    }

    #[test]
    fn isolated_node_has_no_neighbours() {
        let mesh = LinkList::from_links(3, &[(n(0), n(1), 1.0)]).unwrap();
        assert!(mesh.neighbours(n(2)).is_empty());
        assert_eq!(mesh.max_neighbour_degree(), 1);
    }

    #[test]
    fn from_adjacency_preserves_supplied_order() {
        let adjacency = vec![
            vec![
                Neighbour::new(n(2), LinkId(1), 2.0),
                Neighbour::new(n(1), LinkId(0), 1.0),
            ],
            vec![Neighbour::new(n(0), LinkId(0), 1.0)],
            vec![Neighbour::new(n(0), LinkId(1), 2.0)],
        ];
        let mesh = LinkList::from_adjacency(&adjacency).unwrap();
        assert_eq!(mesh.neighbour_slice(n(0)), adjacency[0].as_slice());
        assert_eq!(mesh.link_nodes(LinkId(1)), Some((n(0), n(2))));
    }

    #[test]
    fn from_adjacency_rejects_dangling() {
        let adjacency = vec![vec![Neighbour::new(n(3), LinkId(0), 1.0)]];
        let err = LinkList::from_adjacency(&adjacency).unwrap_err();
        assert!(matches!(err, GridError::DanglingLink { node: NodeId(3), .. }));
    }

    #[test]
    fn from_adjacency_rejects_reused_link_id() {
        let adjacency = vec![
            vec![Neighbour::new(n(1), LinkId(0), 1.0)],
            vec![Neighbour::new(n(2), LinkId(0), 1.0)],
            vec![],
        ];
        let err = LinkList::from_adjacency(&adjacency).unwrap_err();
        assert_eq!(err, GridError::InconsistentLink { link: LinkId(0) });
    }

    #[test]
    fn high_degree_node_spills_without_loss() {
        let spokes: Vec<(NodeId, NodeId, f64)> =
            (1..=12).map(|i| (n(0), n(i), i as f64)).collect();
        let mesh = LinkList::from_links(13, &spokes).unwrap();
        let hub = mesh.neighbours(n(0));
        assert_eq!(hub.len(), 12);
        assert_eq!(hub[11].node, n(12));
        assert_eq!(hub[11].length, 12.0);
        assert_eq!(mesh.max_neighbour_degree(), 12);
    }

    #[test]
    fn compliance_square_with_diagonal() {
        compliance::run_full_compliance(&square_with_diagonal());
    }
}
