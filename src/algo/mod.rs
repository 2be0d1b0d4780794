/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph
representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest paths, connectivity, Euler walks,
coloring, and matching routines.
All of them are implemented as traits on the graph representations themselves,
so `graph.dijkstra(s, t)` works without further setup.
*/

mod all_pairs;
mod bipartite;
mod bridges;
mod euler;
mod matching;
mod scc;
mod shortest_path;
mod traversal;
mod tree;

use crate::{prelude::*, utils::*};

pub use all_pairs::*;
pub use bipartite::*;
pub use bridges::*;
pub use euler::*;
pub use matching::*;
pub use scc::*;
pub use shortest_path::*;
pub use traversal::*;
pub use tree::*;
