/*!
# Euler Circuits

An undirected graph has an Euler circuit, i.e. a closed walk using every edge exactly once,
iff all non-isolated vertices are connected and every vertex has even degree.

[`EulerCircuit::find_circuit`] implements Hierholzer's algorithm with an explicit stack on a
[`CrossCsrGraph`] working copy. Walking an edge removes it from both endpoints in *O(1)*, so the
whole construction runs in *O(n + m)* and never touches the caller's graph.
*/

use super::*;

/// Result of [`EulerCircuit::euler_feasibility`]: whether a circuit exists and, if not, why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EulerFeasibility {
    pub ok: bool,
    pub reason: &'static str,
}

impl EulerFeasibility {
    pub const FEASIBLE: Self = Self {
        ok: true,
        reason: "",
    };

    pub const NOT_CONNECTED: Self = Self {
        ok: false,
        reason: "not connected ignoring isolated vertices",
    };

    pub const ODD_DEGREE: Self = Self {
        ok: false,
        reason: "not all degrees even",
    };
}

pub trait EulerCircuit: AdjacencyList + GraphEdgeOrder + Sized {
    /// Checks whether the graph admits an Euler circuit.
    /// Connectivity is checked first, so a disconnected graph with odd degrees reports
    /// [`EulerFeasibility::NOT_CONNECTED`].
    fn euler_feasibility(&self) -> EulerFeasibility {
        if !self.is_connected_ignoring_isolated() {
            EulerFeasibility::NOT_CONNECTED
        } else if !self.all_even_degrees() {
            EulerFeasibility::ODD_DEGREE
        } else {
            EulerFeasibility::FEASIBLE
        }
    }

    /// Returns an Euler circuit as a closed vertex sequence of length `m + 1`.
    ///
    /// The sequence is empty if the graph has no nodes, no edges or is infeasible;
    /// use [`EulerCircuit::euler_feasibility`] to tell these cases apart.
    fn find_circuit(&self) -> Vec<Node> {
        if self.is_empty() || self.number_of_edges() == 0 || !self.euler_feasibility().ok {
            return Vec::new();
        }

        let mut residual = CrossCsrGraph::from_graph(self);
        let Some(start) = residual.vertices_with_neighbors().next() else {
            return Vec::new();
        };

        let mut circuit = Vec::with_capacity(self.number_of_edges() as usize + 1);
        let mut stack = vec![start];

        while let Some(&u) = stack.last() {
            match residual.pop_edge(u) {
                Some(v) => stack.push(v),
                None => {
                    circuit.push(u);
                    stack.pop();
                }
            }
        }

        circuit.reverse();
        debug_assert_eq!(circuit.len() as NumEdges, self.number_of_edges() + 1);
        circuit
    }
}

impl<G: AdjacencyList + GraphEdgeOrder + Sized> EulerCircuit for G {}

#[cfg(test)]
mod test {
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;

    use super::*;
    use crate::gens::RandomGraph;

    /// Checks closedness, adjacency of consecutive nodes and that each edge is used exactly once
    fn assert_valid_circuit(graph: &AdjArrayUndir, circuit: &[Node]) {
        assert_eq!(circuit.len() as NumEdges, graph.number_of_edges() + 1);
        assert_eq!(circuit.first(), circuit.last());

        let mut used = FxHashSet::default();
        for (&u, &v) in circuit.iter().tuple_windows() {
            assert!(graph.has_edge(u, v), "({u},{v}) is no edge");
            assert!(used.insert(Edge(u, v).canonical_key()), "({u},{v}) used twice");
        }
        assert_eq!(used.len() as NumEdges, graph.number_of_edges());
    }

    #[test]
    fn triangle() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.euler_feasibility(), EulerFeasibility::FEASIBLE);

        let circuit = graph.find_circuit();
        assert_eq!(circuit.len(), 4);
        assert_valid_circuit(&graph, &circuit);
    }

    #[test]
    fn bowtie() {
        let graph =
            AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        let circuit = graph.find_circuit();
        assert_valid_circuit(&graph, &circuit);
    }

    #[rstest]
    #[case(1, &[])]
    #[case(4, &[])]
    fn edgeless_is_feasible_but_empty(#[case] n: NumNodes, #[case] edges: &[(Node, Node)]) {
        let graph = AdjArrayUndir::from_edges(n, edges);
        assert!(graph.euler_feasibility().ok);
        assert!(graph.find_circuit().is_empty());
    }

    #[test]
    fn path_has_odd_degrees() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        assert_eq!(graph.euler_feasibility(), EulerFeasibility::ODD_DEGREE);
        assert_eq!(graph.euler_feasibility().reason, "not all degrees even");
        assert!(graph.find_circuit().is_empty());
    }

    #[test]
    fn disjoint_edges_are_disconnected() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
        assert_eq!(graph.euler_feasibility(), EulerFeasibility::NOT_CONNECTED);
        assert_eq!(
            graph.euler_feasibility().reason,
            "not connected ignoring isolated vertices"
        );
        assert!(graph.find_circuit().is_empty());
    }

    #[test]
    fn isolated_vertices_are_skipped() {
        let graph = AdjArrayUndir::from_edges(6, [(2, 3), (3, 5), (5, 2)]);
        let circuit = graph.find_circuit();
        assert_eq!(circuit[0], 2);
        assert_valid_circuit(&graph, &circuit);
    }

    #[test]
    fn random_even_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        let mut found = 0;
        for n in [5 as NumNodes, 9, 15] {
            for m in [n as NumEdges, 2 * n as NumEdges, max_undirected_edges(n)] {
                for _ in 0..200 {
                    let graph = AdjArrayUndir::gnm(rng, n, m).unwrap();
                    let circuit = graph.find_circuit();
                    if graph.euler_feasibility().ok {
                        found += 1;
                        assert_valid_circuit(&graph, &circuit);
                    } else {
                        assert!(circuit.is_empty());
                    }
                }
            }
        }
        assert!(found > 0);
    }

    proptest! {
        #[test]
        fn circuit_is_valid_whenever_present(n in 1u32..12, frac in 0.0f64..=1.0, seed in any::<u64>()) {
            let m = (max_undirected_edges(n) as f64 * frac) as NumEdges;
            let graph = AdjArrayUndir::random_simple(n, m, seed).unwrap();
            let circuit = graph.find_circuit();

            if circuit.is_empty() {
                prop_assert!(m == 0 || !graph.euler_feasibility().ok);
            } else {
                assert_valid_circuit(&graph, &circuit);
            }
        }
    }
}
