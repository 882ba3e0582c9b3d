/*!
# Graph Algorithms

This module provides the graph algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use eulergraphs::algo::*;
```
and gain access to traversal, connectivity, Euler circuits, spanning forests, strongly connected
components, max-flow and Hamiltonian cycles. Most of them are provided as traits with blanket
implementations, so they are available as methods on every suitable graph, e.g.
`graph.find_circuit()` or `graph.max_flow(s, t)`.

[`Algorithm`] bundles them into the closed set of algorithms that can be requested by name.
*/

mod connectivity;
mod euler;
mod hamiltonian;
mod network_flow;
mod registry;
mod scc;
mod spanning_forest;
mod traversal;
mod union_find;

use crate::prelude::*;

pub use connectivity::*;
pub use euler::*;
pub use hamiltonian::*;
pub use network_flow::*;
pub use registry::*;
pub use scc::*;
pub use spanning_forest::*;
pub use traversal::*;
pub use union_find::*;
