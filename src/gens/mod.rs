/*!
# Graph Generators

This module provides the builder traits for random graph generators and the [`RandomGraph`] trait
that turns a generator's edges into a whole graph instance.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnm::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m)`).
3. Generate edges via `generate(rng)`.

In contrast to a plain edge stream, generation is fallible: asking for more edges than a simple
graph on `n` nodes can hold is reported as [`GeneratorError::InvalidArgument`] instead of being
clamped, and a graph whose storage cannot be allocated is reported as
[`GeneratorError::OutOfMemory`] instead of aborting the process.

Supported models:
- G(n,m): Uniform random simple graphs with a fixed number of nodes and edges
*/

use std::collections::TryReserveError;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use thiserror::Error;

use crate::prelude::*;

mod gnm;

pub use gnm::*;

/// Errors raised when a generator is configured with parameters no graph can satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The requested parameters are invalid; the message is meant to be shown verbatim.
    #[error("{0}")]
    InvalidArgument(&'static str),
    /// Nodes or edges of the requested size could not be allocated
    #[error("not enough memory for a graph of this size")]
    OutOfMemory,
}

impl From<TryReserveError> for GeneratorError {
    fn from(_: TryReserveError) -> Self {
        GeneratorError::OutOfMemory
    }
}

impl GeneratorError {
    pub(crate) const TOO_MANY_EDGES: Self = GeneratorError::InvalidArgument(
        "m exceeds the maximum number of edges for a simple undirected graph",
    );
}

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges, or fails if the configuration is invalid.
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>, GeneratorError>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a uniformly random simple `G(n,m)` graph with exactly `m` edges.
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self, GeneratorError>
    where
        R: Rng;

    /// Creates a uniformly random simple graph with exactly `m` edges from a seed.
    ///
    /// The same `(n, m, seed)` always yields the same edge set. The generator state is owned by
    /// this call alone.
    fn random_simple(n: NumNodes, m: NumEdges, seed: u64) -> Result<Self, GeneratorError> {
        Self::gnm(&mut Pcg64Mcg::seed_from_u64(seed), n, m)
    }
}

impl<G> RandomGraph for G
where
    G: GraphEdgeEditing,
{
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self, GeneratorError>
    where
        R: Rng,
    {
        let edges = Gnm::new().nodes(n).edges(m).generate(rng)?;

        let mut graph = Self::try_new(n)?;
        graph.add_edges(edges);
        Ok(graph)
    }
}
