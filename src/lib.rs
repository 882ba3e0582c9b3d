/*!
`eulergraphs` is a small library for simple undirected graphs, centred on Euler circuits, plus a
line-based TCP server that runs graph algorithms on request.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; as all graphs are undirected,
`Edge(u, v)` and `Edge(v, u)` denote the same edge.

Graphs are always **simple**: adding a self-loop, a duplicate edge or an edge with an
out-of-range endpoint is rejected (see [`ops::GraphEdgeEditing`]).

See the [`repr`] module for the storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir): the mutable graph built for every request,
- [`CrossCsrGraph`](crate::repr::CrossCsrGraph): a compact working copy for algorithms that
  delete edges or need reverse arcs.

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the graph representations,
- [`gens`] generates uniformly random simple graphs with `n` nodes and exactly `m` edges,
- [`algo`] includes algorithm traits implemented on graphs itself such as
  `graph.find_circuit()`, `graph.spanning_forest()` or `graph.max_flow(s, t)`, and the
  [`Algorithm`](crate::algo::Algorithm) registry used by the server,
- [`io`] reads graphs from edge list files,
- [`protocol`] and [`server`] implement the request/response protocol and its TCP server,
- [`logging`] installs the `tracing` subscriber used by the binaries.

In most use-cases, `use eulergraphs::{prelude::*, algo::*};` suffices for your needs.

```
use eulergraphs::{algo::*, gens::*, prelude::*};

let graph = AdjArrayUndir::from_edges(3, [Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
assert!(graph.euler_feasibility().ok);
assert_eq!(graph.find_circuit().len(), 4);

let random = AdjArrayUndir::random_simple(10, 20, 7).unwrap();
assert_eq!(random.number_of_edges(), 20);
```
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod logging;
pub mod node;
pub mod ops;
pub mod protocol;
pub mod repr;
pub mod server;

/// `eulergraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
