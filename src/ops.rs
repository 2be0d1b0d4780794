/*!
# Graph Operations

Trait layer shared by all graph representations. Getters over nodes and
weighted adjacency chains, plus edge editing and construction from scratch.
*/

use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    ///
    /// The range does not borrow self and hence may be used where additional
    /// mutable references of self are needed
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
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

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Marker for directed graphs
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;

/// Marker for undirected graphs
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

/// Binds a representation to its orientation so algorithms that only make
/// sense on one of them can express that in their trait bounds
pub trait GraphType {
    type Dir;

    fn is_undirected() -> bool;
}

/// Traits pertaining getters for weighted neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over the adjacency chain of a given vertex in
    /// **ascending weight order**.
    /// For directed graphs this is the out-chain.
    /// ** Panics if `u >= n` **
    fn links_of(&self, u: Node) -> impl Iterator<Item = Link> + '_;

    /// Returns the number of chain entries of `u`.
    /// A self-loop contributes 2 in undirected graphs.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the (open, outgoing) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.links_of(u).map(|l| l.node)
    }

    /// Returns the cheapest link of `u`, if any.
    /// ** Panics if `u >= n` **
    fn min_link_of(&self, u: Node) -> Option<Link> {
        self.links_of(u).next()
    }

    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).any(|w| w == v)
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.links_of(u)
            .map(move |l| WeightedEdge(u, l.node, l.weight))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered;
    /// in undirected graphs this yields every proper edge exactly once.
    /// Self-loops occupy two chain entries and are yielded twice either way.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Getters for the reverse chains of directed graphs
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over the in-chain of a given vertex in
    /// ascending weight order.
    /// ** Panics if `u >= n` **
    fn in_links_of(&self, u: Node) -> impl Iterator<Item = Link> + '_;

    /// Returns the number of incoming edges of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_links_of(u).map(|l| l.node)
    }

    #[inline]
    fn out_links_of(&self, u: Node) -> impl Iterator<Item = Link> + '_ {
        self.links_of(u)
    }

    #[inline]
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }

    #[inline]
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u)
    }

    /// Returns the out-degree plus in-degree of a given vertex
    /// ** Panics if `u >= n` **
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* with weight `w` to the graph, splicing it into
    /// the adjacency chains **before** the first entry of equal or greater
    /// weight. Parallel edges and self-loops are permitted.
    /// Returns the handle of the new edge record.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> LineId;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v, w);
        }
    }

    /// Removes the first edge *(u,v)* found in `u`'s chain, i.e. the cheapest
    /// among parallel edges. Returns its weight, or `None` if no such edge exists.
    /// ** Panics if `u >= n || v >= n` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight>;

    /// Removes the first edge *(u,v)* found in `u`'s chain and returns its weight.
    /// ** Panics if `u >= n || v >= n` **
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<Weight, GraphError> {
        self.try_remove_edge(u, v)
            .ok_or(GraphError::EdgeNotFound { src: u, dest: v })
    }

    /// Removes the exact edge record behind a handle obtained from
    /// [`add_edge`](GraphEdgeEditing::add_edge) or a [`Link`].
    /// ** Panics if the handle is not live **
    fn remove_link(&mut self, id: LineId) -> WeightedEdge;

    /// Removes all edges, keeping the node set
    fn clear_edges(&mut self);
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over weighted edges.
    /// ** Panics if any endpoint is `>= n` **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self;

    /// Create a graph from a number of nodes and an iterator over weighted edges.
    /// Fails with [`GraphError::InvalidNodeId`] on the first endpoint `>= n`;
    /// no partially built graph escapes.
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self, GraphError>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(n);
        for WeightedEdge(u, v, w) in edges.into_iter().map(|d| d.into()) {
            if u >= n || v >= n {
                return Err(GraphError::InvalidNodeId {
                    src: u,
                    dest: v,
                    capacity: n,
                });
            }
            graph.add_edge(u, v, w);
        }
        Ok(graph)
    }
}
