use super::*;

/// Minimum spanning forests with unit edge weights.
///
/// Kruskal's algorithm scans the normalized edges (all weights are equal, so no sorting is
/// required) and keeps every edge joining two different components of a [`DisjointSet`].
pub trait SpanningForest: AdjacencyList + Sized {
    /// Returns the edges of a maximal spanning forest in scan order.
    fn spanning_forest(&self) -> Vec<Edge> {
        let mut components = DisjointSet::new(self.number_of_nodes());
        self.edges(true)
            .filter(|&Edge(u, v)| components.union(u, v))
            .collect()
    }

    /// Returns the total weight of a minimum spanning forest, i.e. its number of edges.
    fn mst_weight(&self) -> NumEdges {
        self.spanning_forest().len() as NumEdges
    }
}

impl<G: AdjacencyList + Sized> SpanningForest for G {}
