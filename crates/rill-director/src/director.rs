//! The flow director: input validation, the per-node pass, and assembly.

use crate::config::{ConfigError, DirectorConfig, FixedGradientPolicy};
use crate::maybe_rayon::*;
use crate::result::FlowDirectionResult;
use crate::selector::{route_node, NodeFlow, RoutingContext};
use rill_core::{validate_elevations, BoundaryClassifier, BoundaryStatus, FlowError, NodeId};
use rill_grid::{Neighbour, Topology};

/// Assigns one steepest-descent receiver to every node of a topology.
///
/// A director holds only validated configuration; each call borrows the
/// topology, elevations, and statuses read-only and returns a fresh
/// [`FlowDirectionResult`]. Nothing is cached between calls.
///
/// # Construction
///
/// ```
/// use rill_director::FlowDirector;
///
/// let director = FlowDirector::builder()
///     .off_grid_gradient(0.05)
///     .parallel_threshold(10_000)
///     .build()
///     .unwrap();
/// assert_eq!(director.config().parallel_threshold, 10_000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FlowDirector {
    config: DirectorConfig,
}

/// Builder for [`FlowDirector`].
#[derive(Clone, Debug, Default)]
pub struct FlowDirectorBuilder {
    config: DirectorConfig,
}

impl FlowDirectorBuilder {
    /// Set how fixed-gradient nodes choose their receiver.
    pub fn fixed_gradient(mut self, policy: FixedGradientPolicy) -> Self {
        self.config.fixed_gradient = policy;
        self
    }

    /// Shorthand for `fixed_gradient(FixedGradientPolicy::OffGrid { gradient })`.
    pub fn off_grid_gradient(self, gradient: f64) -> Self {
        self.fixed_gradient(FixedGradientPolicy::OffGrid { gradient })
    }

    /// Node count at or above which the pass runs in parallel.
    pub fn parallel_threshold(mut self, nodes: usize) -> Self {
        self.config.parallel_threshold = nodes;
        self
    }

    /// Validate the configuration and build the director.
    pub fn build(self) -> Result<FlowDirector, ConfigError> {
        FlowDirector::new(self.config)
    }
}

impl FlowDirector {
    /// Create a builder with default configuration.
    pub fn builder() -> FlowDirectorBuilder {
        FlowDirectorBuilder::default()
    }

    /// Build a director from an explicit configuration.
    pub fn new(config: DirectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    /// Assign receivers over `topology`.
    ///
    /// `elevations` and `statuses` must each hold one entry per node.
    /// Fails without producing a result on a length mismatch, a non-finite
    /// elevation, or a neighbour entry that cannot be resolved.
    pub fn direct_flow<T: Topology + ?Sized>(
        &self,
        topology: &T,
        elevations: &[f64],
        statuses: &[BoundaryStatus],
    ) -> Result<FlowDirectionResult, FlowError> {
        self.run_pass(
            topology.node_count(),
            |node| topology.neighbours(node),
            elevations,
            statuses,
            &[],
        )
    }

    /// Like [`direct_flow`](Self::direct_flow), with statuses given as raw
    /// integer codes (`0` core, `1` fixed value, `2` fixed gradient,
    /// `4` closed).
    pub fn direct_flow_codes<T: Topology + ?Sized>(
        &self,
        topology: &T,
        elevations: &[f64],
        codes: &[u8],
    ) -> Result<FlowDirectionResult, FlowError> {
        let node_count = topology.node_count();
        if codes.len() != node_count {
            return Err(FlowError::ShapeMismatch {
                what: "statuses",
                expected: node_count,
                actual: codes.len(),
            });
        }
        let statuses = BoundaryStatus::decode_all(codes)?;
        self.direct_flow(topology, elevations, &statuses)
    }

    /// Assign receivers from raw per-node neighbour lists, bypassing
    /// topology construction.
    ///
    /// `adjacency[i]` is node `i`'s candidate list in canonical order.
    /// Every id in `baselevel` is treated as an outlet whatever its status,
    /// except that a closed baselevel node stays closed.
    pub fn flow_directions(
        &self,
        adjacency: &[Vec<Neighbour>],
        elevations: &[f64],
        statuses: &[BoundaryStatus],
        baselevel: &[NodeId],
    ) -> Result<FlowDirectionResult, FlowError> {
        self.run_pass(
            adjacency.len(),
            |node| adjacency[node.index()].as_slice(),
            elevations,
            statuses,
            baselevel,
        )
    }

    fn goes_parallel(&self, node_count: usize) -> bool {
        cfg!(feature = "parallel") && node_count >= self.config.parallel_threshold
    }

    fn run_pass<F, S>(
        &self,
        node_count: usize,
        neighbours: F,
        elevations: &[f64],
        statuses: &[BoundaryStatus],
        baselevel: &[NodeId],
    ) -> Result<FlowDirectionResult, FlowError>
    where
        F: Fn(NodeId) -> S + Send + Sync,
        S: AsRef<[Neighbour]>,
    {
        if node_count > NodeId::MAX_COUNT {
            return Err(FlowError::NodeCountOverflow { count: node_count });
        }
        validate_elevations(elevations, node_count)?;
        let boundary = BoundaryClassifier::new(statuses, node_count)?;
        let mask = baselevel_mask(baselevel, node_count)?;

        let ctx = RoutingContext {
            elevations,
            boundary,
            baselevel: &mask,
            fixed_gradient: self.config.fixed_gradient,
        };
        let route = |i: usize| {
            let node = NodeId(i as u32);
            route_node(node, neighbours(node).as_ref(), &ctx)
        };

        let outcomes: Vec<Result<NodeFlow, FlowError>> = if self.goes_parallel(node_count) {
            log::trace!("routing {node_count} nodes on the rayon pool");
            (0..node_count).into_par_iter().map(&route).collect()
        } else {
            (0..node_count).map(&route).collect()
        };
        // Lowest failing node id wins, whichever thread saw it first.
        let flows = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;

        let result = FlowDirectionResult::assemble(flows);
        log::debug!("flow directions assigned: {}", result.summary());
        Ok(result)
    }
}

fn baselevel_mask(baselevel: &[NodeId], node_count: usize) -> Result<Vec<bool>, FlowError> {
    if baselevel.is_empty() {
        return Ok(Vec::new());
    }
    let mut mask = vec![false; node_count];
    for &node in baselevel {
        match mask.get_mut(node.index()) {
            Some(slot) => *slot = true,
            None => return Err(FlowError::UnknownNode { node, node_count }),
        }
    }
    Ok(mask)
}
