/*!
# Maximum Flow (Edmonds–Karp)

Computes a maximum `s`-`t` flow with unit capacities via shortest augmenting paths.

Every adjacency entry `u → v` of the undirected input is an arc of capacity one on its own, so an
edge `{u, v}` contributes two independent unit arcs `u → v` and `v → u`. The residual network reuses
the topology of a [`CrossCsrGraph`]: each adjacency slot carries the residual capacity of its arc,
and the cross position of the slot addresses the opposite arc, which doubles as the reverse
residual arc. Pushing flow along `u → v` therefore decrements the slot of `u → v` and increments the
slot of `v → u`, exactly as in a dense capacity matrix.

The solver is an iterator over augmenting paths; [`MaxFlow::max_flow`] simply sums them up.
*/

use std::collections::VecDeque;

use super::*;

/// A single augmentation step: the path from source to target and the flow pushed along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    pub nodes: Vec<Node>,
    pub flow: u32,
}

/// Implementation of the Edmonds–Karp algorithm on a unit-capacity residual network.
pub struct EdmondsKarp {
    residual: CrossCsrGraph,
    capacity: Vec<u32>,
    source: Node,
    target: Node,
    /// `(u, i)` such that the BFS reached `v` through entry `i` of `u`
    predecessor: Vec<(Node, NumNodes)>,
}

impl EdmondsKarp {
    /// Builds the residual network of `graph` with capacity one on every adjacency entry.
    /// ** Panics if `source >= n` or `target >= n` **
    pub fn new<G>(graph: &G, source: Node, target: Node) -> Self
    where
        G: AdjacencyList + GraphEdgeOrder,
    {
        assert!(graph.contains_node(source) && graph.contains_node(target));

        let residual = CrossCsrGraph::from_graph(graph);
        let num_slots = 2 * graph.number_of_edges() as usize;

        Self {
            residual,
            capacity: vec![1; num_slots],
            source,
            target,
            predecessor: vec![(INVALID_NODE, 0); graph.len()],
        }
    }

    /// Residual capacity of entry `i` of `u`
    fn residual_capacity(&self, u: Node, i: NumNodes) -> u32 {
        self.capacity[self.residual.slot_of(u, i)]
    }

    /// Searches a shortest path with positive residual capacity and records it in `predecessor`.
    /// Returns *true* if the target was reached.
    fn bfs(&mut self) -> bool {
        self.predecessor.fill((INVALID_NODE, 0));
        self.predecessor[self.source as usize] = (self.source, 0);

        let mut queue = VecDeque::from([self.source]);
        while let Some(u) = queue.pop_front() {
            for i in 0..self.residual.degree_of(u) {
                let v = self.residual.ith_entry(u, i).node;
                if self.predecessor[v as usize].0 != INVALID_NODE
                    || self.residual_capacity(u, i) == 0
                {
                    continue;
                }

                self.predecessor[v as usize] = (u, i);
                if v == self.target {
                    return true;
                }
                queue.push_back(v);
            }
        }

        false
    }

    /// Walks the predecessor chain from the target back to the source and pushes the
    /// bottleneck capacity along it.
    fn augment(&mut self) -> AugmentingPath {
        let mut arcs = Vec::new();
        let mut v = self.target;
        while v != self.source {
            let (u, i) = self.predecessor[v as usize];
            arcs.push((u, i));
            v = u;
        }
        arcs.reverse();

        let flow = arcs
            .iter()
            .map(|&(u, i)| self.residual_capacity(u, i))
            .min()
            .unwrap_or(0);

        let mut nodes = Vec::with_capacity(arcs.len() + 1);
        nodes.push(self.source);
        for &(u, i) in &arcs {
            let entry = self.residual.ith_entry(u, i);
            let forward = self.residual.slot_of(u, i);
            let backward = self.residual.slot_of(entry.node, entry.cross_pos);

            self.capacity[forward] -= flow;
            self.capacity[backward] += flow;
            nodes.push(entry.node);
        }

        AugmentingPath { nodes, flow }
    }

    /// Runs the algorithm to completion and returns the value of a maximum flow.
    pub fn total_flow(&mut self) -> u64 {
        self.map(|path| path.flow as u64).sum()
    }
}

impl Iterator for EdmondsKarp {
    type Item = AugmentingPath;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source == self.target || !self.bfs() {
            return None;
        }

        Some(self.augment())
    }
}

/// Max-flow queries on undirected graphs with unit arc capacities.
pub trait MaxFlow: AdjacencyList + GraphEdgeOrder + Sized {
    /// Returns the value of a maximum flow from `source` to `target`.
    /// The flow from a node to itself is zero.
    /// ** Panics if `source >= n` or `target >= n` **
    fn max_flow(&self, source: Node, target: Node) -> u64 {
        EdmondsKarp::new(self, source, target).total_flow()
    }
}

impl<G: AdjacencyList + GraphEdgeOrder + Sized> MaxFlow for G {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(2, &[], 0)]
    #[case(2, &[(0, 1)], 1)]
    #[case(4, &[(0, 1), (2, 3)], 0)]
    #[case(4, &[(0, 1), (1, 3), (0, 2), (2, 3)], 2)]
    #[case(4, &[(0, 1), (1, 2), (2, 3), (0, 2), (1, 3)], 2)]
    #[case(5, &[(0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 4)], 3)]
    fn small_graphs(#[case] n: NumNodes, #[case] edges: &[(Node, Node)], #[case] flow: u64) {
        let graph = AdjArrayUndir::from_edges(n, edges);
        assert_eq!(graph.max_flow(0, n - 1), flow);
    }

    #[test]
    fn bottleneck_in_the_middle() {
        // two triangles joined by a single bridge
        let graph =
            AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]);
        assert_eq!(graph.max_flow(0, 5), 1);
        assert_eq!(graph.max_flow(0, 1), 2);
    }

    #[test]
    fn complete_graph() {
        for n in 2..10 {
            let graph = AdjArrayUndir::from_edges(
                n,
                (0..n).tuple_combinations().map(|(u, v)| Edge(u, v)),
            );
            assert_eq!(graph.max_flow(0, n - 1), (n - 1) as u64);
        }
    }

    #[test]
    fn same_source_and_target() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(graph.max_flow(1, 1), 0);
    }

    #[test]
    fn paths_are_valid_and_input_is_untouched() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (1, 4)]);
        let before = graph.clone();

        let paths = EdmondsKarp::new(&graph, 0, 4).collect_vec();
        assert_eq!(paths.iter().map(|p| p.flow as u64).sum::<u64>(), 2);
        for path in &paths {
            assert_eq!(path.nodes.first(), Some(&0));
            assert_eq!(path.nodes.last(), Some(&4));
        }

        assert_eq!(graph, before);
    }

    #[test]
    fn bounded_by_endpoint_degrees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..100 {
            let n = rng.random_range(2..20);
            let mut graph = AdjArrayUndir::new(n);
            for _ in 0..rng.random_range(0..4 * n) {
                graph.try_add_edge(rng.random_range(0..n), rng.random_range(0..n));
            }

            let flow = graph.max_flow(0, n - 1);
            assert!(flow <= graph.degree_of(0).min(graph.degree_of(n - 1)) as u64);
            assert_eq!(flow, graph.max_flow(n - 1, 0));
        }
    }
}
