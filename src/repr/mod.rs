/*!
# Graph Representations

- [`AdjArrayUndir`]: the mutable simple undirected graph every request builds,
- [`CrossCsrGraph`]: a compact, shrink-only copy with cross pointers used as the owned working
  copy of algorithms that delete edges or need reverse arcs.
*/

use crate::{edge::*, node::*, ops::*};

mod cross_csr;
mod undirected;

pub use cross_csr::*;
pub use undirected::*;
