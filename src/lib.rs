/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : every edge carries a signed 64-bit weight
- unlabelled : Nodes are numbered `0` to `n - 1`
- directed or undirected : both orientations ship their own representation

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph. For **edges**, we use a simple tuple-struct
`WeightedEdge(Node, Node, Weight)`.

Both [`repr::DirectedGraph`] and [`repr::UndirectedGraph`] store edge records
in an arena addressed by stable [`LineId`](edge::LineId) handles and keep every
adjacency chain in **ascending weight order**. Parallel edges and self-loops
are supported throughout; the cheapest link of a node is always the first
chain entry.

# Design

Algorithms are provided as traits blanket-implemented on the graph
representations, so they are usable directly on a graph value:
`graph.dijkstra(s, t)`, `graph.strongly_connected_components()`,
`graph.hierholzer(s)`, `graph.kuhn_munkres(Objective::Minimize)`, ...

Fallible operations return typed errors ([`error::GraphError`],
[`error::HeapKeyError`]) instead of panicking; panics are reserved for
out-of-range node ids and dead edge handles.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, weights, edges, errors, basic
  graph operations, and both graph representations,
- [`algo`] includes algorithm traits implemented on the graphs themselves:
  traversal, shortest paths & spanning trees, strongly connected components,
  bridges, Euler walks & the postman tour, two-coloring, and bipartite
  matchings,
- [`heap`] exposes the addressable binomial heap driving the tree-growing
  algorithms,
- [`utils`] includes helper structures such as [`utils::DisjointSet`].

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod heap;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;
pub mod weight;

pub use edge::*;
pub use error::*;
pub use node::*;
pub use ops::*;
pub use repr::*;
pub use weight::*;

/// `wgraphs::prelude` includes definitions for nodes, weights and edges, the
/// error types, all basic graph operation traits as well as both implemented
/// representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, weight::*};
}

/// Builds a [`DirectedGraph`] with `n` nodes from a list of weighted edges.
/// Fails with [`GraphError::InvalidNodeId`] on the first endpoint `>= n`.
pub fn build_directed_graph(
    n: NumNodes,
    edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
) -> Result<DirectedGraph, GraphError> {
    DirectedGraph::try_from_edges(n, edges)
}

/// Builds an [`UndirectedGraph`] with `n` nodes from a list of weighted edges.
/// Fails with [`GraphError::InvalidNodeId`] on the first endpoint `>= n`.
pub fn build_undirected_graph(
    n: NumNodes,
    edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
) -> Result<UndirectedGraph, GraphError> {
    UndirectedGraph::try_from_edges(n, edges)
}
