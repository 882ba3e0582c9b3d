use fxhash::FxHashSet;
use rand::seq::SliceRandom;

use super::*;

/// Sampling strategy used by [`Gnm`].
///
/// Rejection sampling is cheap as long as most pairs are still free; once more than half of all
/// pairs are requested, repeated draws become wasteful and a shuffle of the full pair space wins.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum GnmStrategy {
    /// Pick [`GnmStrategy::Rejection`] if `m <= max_m / 2` and [`GnmStrategy::Shuffle`] otherwise
    #[default]
    Auto,
    /// Draw uniform pairs and discard self-loops and pairs seen before
    Rejection,
    /// Enumerate all `n(n-1)/2` pairs, shuffle them and keep the first `m`
    Shuffle,
}

/// Generator for uniform `G(n,m)` random simple graphs with `n` nodes and exactly `m` edges.
///
/// The generator can be parameterized via:
/// - `.nodes(n)`: total number of nodes
/// - `.edges(m)`: total number of edges
/// - `.strategy(s)`: force a sampling strategy instead of choosing by density
///
/// All produced edges are normalized and pairwise distinct.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: NumNodes,
    m: NumEdges,
    strategy: GnmStrategy,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the sampling strategy.
    pub fn strategy(mut self, strategy: GnmStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Checks the parameters and returns the size of the pair space `n(n-1)/2`.
    /// For `n <= 1` the pair space is empty, so any `m > 0` is rejected as well.
    fn validate(&self) -> Result<NumEdges, GeneratorError> {
        let max_m = max_undirected_edges(self.n);
        if self.m > max_m {
            return Err(GeneratorError::TOO_MANY_EDGES);
        }
        Ok(max_m)
    }

    fn resolved_strategy(&self, max_m: NumEdges) -> GnmStrategy {
        match self.strategy {
            GnmStrategy::Auto if self.m <= max_m / 2 => GnmStrategy::Rejection,
            GnmStrategy::Auto => GnmStrategy::Shuffle,
            forced => forced,
        }
    }

    fn sample_by_rejection<R: Rng>(&self, rng: &mut R) -> Result<Vec<Edge>, GeneratorError> {
        let m = usize::try_from(self.m).map_err(|_| GeneratorError::OutOfMemory)?;
        let mut seen: FxHashSet<u64> = FxHashSet::default();
        seen.try_reserve(m)?;

        // the set only answers membership; the vector keeps the draw order deterministic
        let mut edges = Vec::new();
        edges.try_reserve_exact(m)?;
        while edges.len() < m {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            if u == v {
                continue;
            }

            let edge = Edge(u, v).normalized();
            if seen.insert(edge.canonical_key()) {
                edges.push(edge);
            }
        }

        Ok(edges)
    }

    fn sample_by_shuffle<R: Rng>(
        &self,
        rng: &mut R,
        max_m: NumEdges,
    ) -> Result<Vec<Edge>, GeneratorError> {
        let n = self.n;
        let capacity = usize::try_from(max_m).map_err(|_| GeneratorError::OutOfMemory)?;
        let mut edges = Vec::new();
        edges.try_reserve_exact(capacity)?;
        edges.extend((0..n).flat_map(|u| (u + 1..n).map(move |v| Edge(u, v))));

        edges.shuffle(rng);
        edges.truncate(self.m as usize);
        Ok(edges)
    }
}

impl NumNodesGen for Gnm {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl NumEdgesGen for Gnm {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl GraphGenerator for Gnm {
    /// Returns exactly `m` distinct normalized edges over the nodes `0..n`.
    ///
    /// # Errors
    /// Fails if `m > n(n-1)/2` or if the edge buffers cannot be allocated.
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<Edge>, GeneratorError>
    where
        R: Rng,
    {
        let max_m = self.validate()?;
        if self.m == 0 || self.n <= 1 {
            return Ok(Vec::new());
        }

        match self.resolved_strategy(max_m) {
            GnmStrategy::Shuffle => self.sample_by_shuffle(rng, max_m),
            _ => self.sample_by_rejection(rng),
        }
    }
}
