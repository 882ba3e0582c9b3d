use std::{collections::TryReserveError, ops::Range};

use itertools::Itertools;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all vertices.
    /// In contrast to `self.vertices()`, the range does not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if `u` is a valid node of the graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns *true* if `u` has no neighbors
    /// ** Panics if `u >= n` **
    fn is_isolated(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(move |u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&u| !self.is_isolated(u))
    }

    /// Returns the number of nodes with non-zero degree
    fn number_of_nodes_with_neighbors(&self) -> NumNodes {
        self.vertices_with_neighbors().count() as NumNodes
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns *true* if every vertex has even degree (vacuously true for `n = 0`)
    fn all_even_degrees(&self) -> bool {
        self.degrees().all(|d| d % 2 == 0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// Out-of-range nodes are never adjacent to anything.
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the neighborhood of a given vertex
    /// ** Panics if `u >= n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with n singleton nodes
    /// ** Aborts if the node storage cannot be allocated **
    fn new(n: NumNodes) -> Self;

    /// Creates an empty graph with n singleton nodes, or fails if the node storage cannot be
    /// allocated. Use this whenever `n` stems from untrusted input.
    fn try_new(n: NumNodes) -> Result<Self, TryReserveError>;
}

/// Reason why an edge could not be inserted into a simple graph.
///
/// Variants are listed in order of precedence: an edge that is both a self-loop and
/// out of range is reported as [`EdgeRejection::OutOfRange`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeRejection {
    /// At least one endpoint is `>= n`
    OutOfRange,
    /// Both endpoints are equal
    SelfLoop,
    /// The edge is already present
    Duplicate,
}

impl std::fmt::Display for EdgeRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EdgeRejection::OutOfRange => "node id out of range",
            EdgeRejection::SelfLoop => "self-loop",
            EdgeRejection::Duplicate => "duplicate edge",
        })
    }
}

/// Provides functions to insert edges into a simple graph
pub trait GraphEdgeEditing: GraphNew + AdjacencyTest {
    /// Returns why `(u, v)` would be rejected by [`GraphEdgeEditing::try_add_edge`],
    /// or `None` if it would be accepted.
    fn check_edge(&self, u: Node, v: Node) -> Option<EdgeRejection> {
        if !self.contains_node(u) || !self.contains_node(v) {
            Some(EdgeRejection::OutOfRange)
        } else if u == v {
            Some(EdgeRejection::SelfLoop)
        } else if self.has_edge(u, v) {
            Some(EdgeRejection::Duplicate)
        } else {
            None
        }
    }

    /// Adds the edge `{u, v}` to the graph.
    /// Returns *true* exactly if the edge was accepted. A rejected edge (out of range,
    /// self-loop or duplicate) leaves the graph untouched.
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds the edge `{u, v}` to the graph.
    /// ** Panics if the edge is rejected **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_add_edge(u, v), "edge ({u},{v}) was rejected");
    }

    /// Adds all edges in the collection
    /// ** Panics if any edge is rejected **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges.
    /// ** Panics if any edge is rejected **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
