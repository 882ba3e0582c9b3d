use itertools::Itertools;

use super::*;

/// Connectivity queries on undirected graphs.
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if all vertices with at least one neighbor lie in a single connected
    /// component. Isolated vertices are ignored, hence graphs with at most one non-isolated
    /// vertex are trivially connected.
    fn is_connected_ignoring_isolated(&self) -> bool {
        let Some(start) = self.vertices_with_neighbors().next() else {
            return true;
        };

        // a search started at a non-isolated node only ever reaches non-isolated nodes
        self.bfs(start).count() as NumNodes == self.number_of_nodes_with_neighbors()
    }

    /// Returns *true* if the graph has a single connected component (or no nodes at all)
    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }

    /// Returns all connected components in order of their smallest node.
    /// Within a component, nodes are listed in BFS order.
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let mut assigned = vec![false; self.len()];
        let mut components = Vec::new();

        for u in self.vertices() {
            if assigned[u as usize] {
                continue;
            }

            let component = self.bfs(u).collect_vec();
            for &v in &component {
                assigned[v as usize] = true;
            }
            components.push(component);
        }

        components
    }
}

impl<G: AdjacencyList + Sized> Connectivity for G {}
