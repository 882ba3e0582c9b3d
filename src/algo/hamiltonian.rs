use super::*;

#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: Node,
    cursor: usize,
}

/// Hamiltonian cycles via exhaustive backtracking.
///
/// The search starts at node `0`, extends the current path by the first unused neighbor in
/// adjacency order and backtracks once a node has no unused neighbor left. Once the path holds
/// all nodes, it is closed if its last node is adjacent to `0`. The running time is exponential
/// in the worst case.
pub trait HamiltonianCycle: AdjacencyTest + NeighborsSlice + Sized {
    /// Returns a Hamiltonian cycle `0, v1, ..., v_{n-1}, 0` or `None` if there is none.
    /// The empty graph has no Hamiltonian cycle, and neither has a single node.
    fn hamiltonian_cycle(&self) -> Option<Vec<Node>> {
        let n = self.len();
        if n == 0 {
            return None;
        }

        let mut used = vec![false; n];
        used[0] = true;
        let mut stack = vec![StackFrame { node: 0, cursor: 0 }];

        while let Some(&StackFrame { node: u, cursor }) = stack.last() {
            if stack.len() == n {
                if self.has_edge(u, 0) {
                    let mut cycle: Vec<Node> = stack.iter().map(|frame| frame.node).collect();
                    cycle.push(0);
                    return Some(cycle);
                }

                used[u as usize] = false;
                stack.pop();
                continue;
            }

            let nbs = self.as_neighbors_slice(u);
            match (cursor..nbs.len()).find(|&i| !used[nbs[i] as usize]) {
                Some(i) => {
                    let v = nbs[i];
                    if let Some(frame) = stack.last_mut() {
                        frame.cursor = i + 1;
                    }
                    used[v as usize] = true;
                    stack.push(StackFrame { node: v, cursor: 0 });
                }
                None => {
                    used[u as usize] = false;
                    stack.pop();
                }
            }
        }

        None
    }
}

impl<G: AdjacencyTest + NeighborsSlice + Sized> HamiltonianCycle for G {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rstest::rstest;

    use super::*;

    fn assert_hamiltonian(graph: &AdjArrayUndir, cycle: &[Node]) {
        let n = graph.len();
        assert_eq!(cycle.len(), n + 1);
        assert_eq!(cycle[0], 0);
        assert_eq!(cycle[n], 0);
        assert!(cycle[..n].iter().all_unique());
        for (&u, &v) in cycle.iter().tuple_windows() {
            assert!(graph.has_edge(u, v));
        }
    }

    #[test]
    fn square() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(graph.hamiltonian_cycle(), Some(vec![0, 1, 2, 3, 0]));
    }

    #[test]
    fn needs_backtracking() {
        // the first neighbor of 0 leads into a dead end
        let graph = AdjArrayUndir::from_edges(5, [(0, 4), (4, 1), (0, 1), (1, 2), (2, 3), (3, 4)]);
        let cycle = graph.hamiltonian_cycle().unwrap();
        assert_hamiltonian(&graph, &cycle);
    }

    #[test]
    fn complete_graphs() {
        for n in 3..8 {
            let graph = AdjArrayUndir::from_edges(n, (0..n).tuple_combinations::<(_, _)>());
            let cycle = graph.hamiltonian_cycle().unwrap();
            assert_eq!(cycle, (0..n).chain([0]).collect_vec());
        }
    }

    #[test]
    fn petersen_graph() {
        let graph = AdjArrayUndir::from_edges(
            10,
            [
                (0, 1), (1, 2), (2, 3), (3, 4), (4, 0),
                (0, 5), (1, 6), (2, 7), (3, 8), (4, 9),
                (5, 7), (7, 9), (9, 6), (6, 8), (8, 5),
            ],
        );
        assert_eq!(graph.hamiltonian_cycle(), None);
    }

    #[rstest]
    #[case(0, &[])]
    #[case(1, &[])]
    #[case(3, &[(0, 1), (1, 2)])]
    #[case(4, &[(0, 1), (0, 2), (0, 3)])]
    #[case(5, &[(0, 1), (1, 2), (2, 0), (3, 4)])]
    fn no_cycle(#[case] n: NumNodes, #[case] edges: &[(Node, Node)]) {
        let graph = AdjArrayUndir::from_edges(n, edges);
        assert_eq!(graph.hamiltonian_cycle(), None);
    }

    #[test]
    fn single_edge_closes_on_itself() {
        let graph = AdjArrayUndir::from_edges(2, [(0, 1)]);
        assert_eq!(graph.hamiltonian_cycle(), Some(vec![0, 1, 0]));
    }
}
