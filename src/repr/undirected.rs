use std::collections::TryReserveError;

use super::*;

/// An undirected simple graph stored as an Adjacency-Array.
///
/// Each node keeps its neighbors in insertion order; every edge `{u, v}` appears exactly once
/// in the list of `u` and once in the list of `v`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjArrayUndir {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjArrayUndir {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArrayUndir {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArrayUndir {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl NeighborsSlice for AdjArrayUndir {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}

impl AdjacencyTest for AdjArrayUndir {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs
            .get(u as usize)
            .is_some_and(|nbs| nbs.contains(&v))
    }
}

impl GraphNew for AdjArrayUndir {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    fn try_new(n: NumNodes) -> Result<Self, TryReserveError> {
        let mut nbs = Vec::new();
        nbs.try_reserve_exact(n as usize)?;
        nbs.resize_with(n as usize, Vec::new);

        Ok(Self { nbs, num_edges: 0 })
    }
}

impl GraphEdgeEditing for AdjArrayUndir {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.check_edge(u, v).is_some() {
            return false;
        }

        self.nbs[u as usize].push(v);
        self.nbs[v as usize].push(u);
        self.num_edges += 1;
        true
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn graph_new() {
        for n in 0..50 {
            let graph = AdjArrayUndir::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert!(graph.degrees().all(|d| d == 0));
        }
    }

    #[test]
    fn fallible_allocation() {
        let graph = AdjArrayUndir::try_new(7).unwrap();
        assert_eq!(graph, AdjArrayUndir::new(7));
        assert!(graph.degrees().all(|d| d == 0));

        assert!(AdjArrayUndir::try_new(0).unwrap().is_empty());
    }

    #[test]
    fn rejections_leave_graph_untouched() {
        let mut graph = AdjArrayUndir::new(4);
        assert!(graph.try_add_edge(0, 1));

        let before = graph.clone();

        assert_eq!(graph.check_edge(4, 4), Some(EdgeRejection::OutOfRange));
        assert!(!graph.try_add_edge(4, 4));
        assert_eq!(graph.check_edge(0, 9), Some(EdgeRejection::OutOfRange));
        assert!(!graph.try_add_edge(0, 9));
        assert_eq!(graph.check_edge(2, 2), Some(EdgeRejection::SelfLoop));
        assert!(!graph.try_add_edge(2, 2));
        assert_eq!(graph.check_edge(1, 0), Some(EdgeRejection::Duplicate));
        assert!(!graph.try_add_edge(1, 0));
        assert!(!graph.try_add_edge(0, 1));

        assert_eq!(graph, before);
        assert_eq!(graph.check_edge(2, 3), None);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for m_ub in [n * 2, n * 5, n * 10] {
                let mut graph = AdjArrayUndir::new(n);
                let mut expected = Vec::new();

                for _ in 0..m_ub {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    let fresh = u != v && !expected.contains(&Edge(u, v).normalized());
                    assert_eq!(graph.try_add_edge(u, v), fresh);
                    if fresh {
                        expected.push(Edge(u, v).normalized());
                    }
                }

                expected.sort_unstable();
                assert_eq!(graph.number_of_edges(), expected.len() as NumEdges);
                assert_eq!(graph.ordered_edges(true), expected);

                let degree_sum: NumEdges = graph.degrees().map(|d| d as NumEdges).sum();
                assert_eq!(degree_sum, 2 * graph.number_of_edges());

                for Edge(u, v) in graph.edges(false) {
                    assert!(graph.has_edge(v, u));
                    assert_ne!(u, v);
                }
            }
        }
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut graph = AdjArrayUndir::new(5);
        graph.add_edges([(0, 3), (0, 1), (4, 0)]);

        assert_eq!(graph.as_neighbors_slice(0), &[3, 1, 4]);
        assert_eq!(graph.neighbors_of(4).collect_vec(), vec![0]);
        assert_eq!(graph.max_degree(), 3);
        assert_eq!(graph.number_of_nodes_with_neighbors(), 4);
        assert!(graph.is_isolated(2));
    }
}
