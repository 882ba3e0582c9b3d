/*!
# Undirected CSR Graph with Cross Pointers

[`CrossCsrGraph`] stores all adjacency lists of an undirected graph in a single flattened buffer,
with offset indices marking the start of each vertex's neighbor list.
Every entry additionally knows the *cross position* of its reciprocal entry, i.e. the index of
`u` within the neighbor list of `v` for an entry `v` within the neighbor list of `u`.

This enables *O(1)* edge deletion: an entry is removed by swapping it with the last live entry of
its list and shrinking the list, and the cross position of the moved entry is patched in its
neighbor's list. The graph is built once from another representation and is then only shrunk,
which makes it a cheap owned working copy for algorithms that consume edges (Hierholzer) or that
need to address the reverse arc of an edge (residual networks).
*/

use fxhash::FxHashMap;

use super::*;

/// A neighbor node paired with its **cross position**.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeWithCrossPos {
    pub node: Node,
    pub cross_pos: NumNodes,
}

/// Undirected **CSR graph** with cross-pointers between reciprocal entries and
/// swap-with-last edge deletion.
#[derive(Debug, Clone)]
pub struct CrossCsrGraph {
    nbs: Vec<NodeWithCrossPos>,
    offsets: Vec<usize>,
    degrees: Vec<NumNodes>,
    num_edges: NumEdges,
}

impl CrossCsrGraph {
    /// Builds the working copy of `graph`, preserving the neighbor order of every node.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphEdgeOrder,
    {
        let n = graph.len();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0usize);
        for d in graph.degrees() {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + d as usize);
        }

        let mut nbs = vec![NodeWithCrossPos::default(); offsets[n]];
        let mut degrees: Vec<NumNodes> = vec![0; n];

        // Slots are filled in neighbor order; the reciprocal slot of a normalized edge is known
        // once both endpoints have reached it, so we resolve it on the second visit.
        let mut pending: FxHashMap<u64, NumNodes> = FxHashMap::default();
        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                let pos_u = degrees[u as usize];
                nbs[offsets[u as usize] + pos_u as usize].node = v;
                degrees[u as usize] += 1;

                match pending.remove(&Edge(u, v).canonical_key()) {
                    Some(pos_v) => {
                        nbs[offsets[u as usize] + pos_u as usize].cross_pos = pos_v;
                        nbs[offsets[v as usize] + pos_v as usize].cross_pos = pos_u;
                    }
                    None => {
                        pending.insert(Edge(u, v).canonical_key(), pos_u);
                    }
                }
            }
        }
        debug_assert!(pending.is_empty());

        Self {
            nbs,
            offsets,
            degrees,
            num_edges: graph.number_of_edges(),
        }
    }

    /// Returns the live entries of `u`
    /// ** Panics if `u >= n` **
    pub fn entries_of(&self, u: Node) -> &[NodeWithCrossPos] {
        let start = self.offsets[u as usize];
        &self.nbs[start..start + self.degrees[u as usize] as usize]
    }

    /// Returns the `i`-th live neighbor of `u`
    /// ** Panics if `u >= n || i >= deg(u)` **
    pub fn ith_entry(&self, u: Node, i: NumNodes) -> NodeWithCrossPos {
        self.entries_of(u)[i as usize]
    }

    /// Returns the index of the global slot belonging to entry `i` of node `u`.
    /// Slots stay stable as long as no edge is removed.
    pub fn slot_of(&self, u: Node, i: NumNodes) -> usize {
        debug_assert!(i < self.degrees[u as usize]);
        self.offsets[u as usize] + i as usize
    }

    /// Returns the last live neighbor of `u` if there is any
    pub fn last_neighbor(&self, u: Node) -> Option<Node> {
        self.entries_of(u).last().map(|nb| nb.node)
    }

    /// Removes the edge stored at entry `i` of `u` from both endpoints and returns the other endpoint.
    /// ** Panics if `u >= n || i >= deg(u)` **
    pub fn remove_ith_edge(&mut self, u: Node, i: NumNodes) -> Node {
        let NodeWithCrossPos { node: v, cross_pos } = self.ith_entry(u, i);

        self.swap_remove_entry(u, i);
        // In a simple graph the entry moved into `i` cannot point to `v`, so `cross_pos` stays valid
        self.swap_remove_entry(v, cross_pos);
        self.num_edges -= 1;

        v
    }

    /// Removes the last edge of `u` and returns its other endpoint, or `None` if `u` is isolated
    pub fn pop_edge(&mut self, u: Node) -> Option<Node> {
        let d = self.degrees[u as usize];
        (d > 0).then(|| self.remove_ith_edge(u, d - 1))
    }

    fn swap_remove_entry(&mut self, u: Node, i: NumNodes) {
        let start = self.offsets[u as usize];
        let last = self.degrees[u as usize] - 1;

        if i != last {
            let moved = self.nbs[start + last as usize];
            self.nbs[start + i as usize] = moved;
            self.nbs[self.offsets[moved.node as usize] + moved.cross_pos as usize].cross_pos = i;
        }

        self.degrees[u as usize] = last;
    }
}

impl GraphNodeOrder for CrossCsrGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.degrees.len() as NumNodes
    }
}

impl GraphEdgeOrder for CrossCsrGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for CrossCsrGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.entries_of(u).iter().map(|nb| nb.node)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.degrees[u as usize]
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn assert_cross_positions(graph: &CrossCsrGraph) {
        for u in graph.vertices() {
            for (i, nb) in graph.entries_of(u).iter().enumerate() {
                let back = graph.ith_entry(nb.node, nb.cross_pos);
                assert_eq!(back.node, u);
                assert_eq!(back.cross_pos as usize, i);
            }
        }
    }

    #[test]
    fn copy_preserves_order() {
        let mut graph = AdjArrayUndir::new(5);
        graph.add_edges([(0, 3), (0, 1), (4, 0), (1, 3)]);

        let copy = CrossCsrGraph::from_graph(&graph);
        assert_eq!(copy.number_of_edges(), 4);
        for u in graph.vertices() {
            assert_eq!(
                copy.neighbors_of(u).collect_vec(),
                graph.neighbors_of(u).collect_vec()
            );
        }
        assert_cross_positions(&copy);
    }

    #[test]
    fn removal_keeps_cross_positions() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [5 as NumNodes, 12, 30] {
            let mut graph = AdjArrayUndir::new(n);
            for _ in 0..n * 4 {
                graph.try_add_edge(rng.random_range(0..n), rng.random_range(0..n));
            }

            let mut copy = CrossCsrGraph::from_graph(&graph);
            let mut removed = Vec::new();
            while copy.number_of_edges() > 0 {
                let u = rng.random_range(0..n);
                if copy.degree_of(u) == 0 {
                    continue;
                }
                let i = rng.random_range(0..copy.degree_of(u));
                let v = copy.remove_ith_edge(u, i);
                removed.push(Edge(u, v).normalized());
                assert_cross_positions(&copy);
            }

            removed.sort_unstable();
            assert_eq!(removed, graph.ordered_edges(true));
            assert!(copy.degrees().all(|d| d == 0));
        }
    }

    #[test]
    fn pop_edge() {
        let mut graph = AdjArrayUndir::new(3);
        graph.add_edges([(0, 1), (0, 2)]);

        let mut copy = CrossCsrGraph::from_graph(&graph);
        assert_eq!(copy.pop_edge(0), Some(2));
        assert_eq!(copy.degree_of(2), 0);
        assert_eq!(copy.last_neighbor(0), Some(1));
        assert_eq!(copy.pop_edge(1), Some(0));
        assert_eq!(copy.pop_edge(0), None);

        // the source graph is never touched
        assert_eq!(graph.number_of_edges(), 2);
    }
}
