/*!
# Error Types

All fallible graph operations surface typed errors to the direct caller.
Heap key violations get their own enum as they signal misuse of the
priority-queue contract rather than a property of the graph.
*/

use thiserror::Error;

use crate::{Node, NumEdges, NumNodes, Weight};

/// Errors raised by graph construction, edits, and algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An endpoint lies outside the graph's node range
    #[error("edge ({src},{dest}) references a node outside 0..{capacity}")]
    InvalidNodeId {
        src: Node,
        dest: Node,
        capacity: NumNodes,
    },

    /// No edge between the given endpoints
    #[error("no edge from {src} to {dest}")]
    EdgeNotFound { src: Node, dest: Node },

    /// No path between the given endpoints
    #[error("node {dest} is unreachable from {src}")]
    Unreachable { src: Node, dest: Node },

    /// The graph admits no two-coloring; the payload is a node
    /// at which two colorings collide (part of an odd closed walk)
    #[error("graph is not bipartite, conflict at node {0}")]
    NotBipartite(Node),

    /// The requested start node has no incident edge
    #[error("node {0} has no incident edges")]
    IsolatedNode(Node),

    /// An Euler walk got stuck with edges left over
    #[error("no euler path exists, {remaining} edges left unwalked")]
    NotEulerian { remaining: NumEdges },
}

/// Contract violations of [`BinomialHeap::decrease_key`](crate::heap::BinomialHeap::decrease_key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapKeyError {
    /// The node is not currently stored in the heap
    #[error("node {0} is not in the heap")]
    Absent(Node),

    /// The new key does not undercut the stored one; the heap is unchanged
    #[error("new key {new} for node {node} does not undercut current key {current}")]
    NotDecreasing {
        node: Node,
        current: Weight,
        new: Weight,
    },
}
