/*!
Single-source tree growing: Dijkstra shortest paths and Prim spanning trees.

Both algorithms share one loop. A [`BinomialHeap`] holds the frontier; the
key of a candidate is either the cumulative distance through its predecessor
(Dijkstra) or the raw weight of the connecting edge (Prim). Extracted nodes
move into a [`ResultTree`] under the predecessor that proposed their key.
*/

use super::*;
use crate::heap::{BinomialHeap, HeapItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyRule {
    /// Key of a candidate is `dist(pred) + w`, growing a shortest-path tree
    CumulativeDistance,
    /// Key of a candidate is `w` alone, growing a minimum spanning tree
    EdgeWeight,
}

fn grow_tree<G: AdjacencyList>(
    graph: &G,
    src: Node,
    dest: Option<Node>,
    rule: KeyRule,
) -> ResultTree {
    let mut heap = BinomialHeap::new(graph.number_of_nodes());
    let mut tree = ResultTree::new();

    heap.push(HeapItem {
        node: src,
        dist: 0,
        pred: None,
    });

    while let Some(HeapItem { node: u, dist, pred }) = heap.pop_min() {
        match pred {
            Some(p) => tree.insert_child(p, u, dist),
            None => tree.insert_root(u, dist),
        }

        if dest == Some(u) {
            break;
        }

        for Link {
            node: v, weight, ..
        } in graph.links_of(u)
        {
            if tree.contains(v) {
                continue;
            }

            let cand = match rule {
                KeyRule::CumulativeDistance => dist + weight,
                KeyRule::EdgeWeight => weight,
            };

            if heap.contains(v) {
                // a candidate that does not undercut the stored key is discarded
                let _ = heap.decrease_key(v, cand, Some(u));
            } else {
                heap.push(HeapItem {
                    node: v,
                    dist: cand,
                    pred: Some(u),
                });
            }
        }
    }

    tree
}

/// Tree-growing algorithms over the binomial-heap frontier.
///
/// Weights must be non-negative for [`dijkstra`](ShortestPath::dijkstra) and
/// [`shortest_path_tree`](ShortestPath::shortest_path_tree) to produce
/// shortest paths.
pub trait ShortestPath: AdjacencyList {
    /// Computes a shortest path from `src` to `dest` and stops expanding as
    /// soon as `dest` is settled.
    /// Fails with [`GraphError::Unreachable`] if no path exists.
    /// ** Panics if `src >= n || dest >= n` **
    fn dijkstra(&self, src: Node, dest: Node) -> Result<Path, GraphError> {
        let tree = grow_tree(self, src, Some(dest), KeyRule::CumulativeDistance);
        tree.path_to(dest)
            .ok_or(GraphError::Unreachable { src, dest })
    }

    /// Grows the full shortest-path tree rooted at `src`, covering every
    /// node reachable from it. Keys are cumulative distances.
    /// ** Panics if `src >= n` **
    fn shortest_path_tree(&self, src: Node) -> ResultTree {
        grow_tree(self, src, None, KeyRule::CumulativeDistance)
    }

    /// Grows a minimum spanning tree of the component of `src`.
    /// Keys are the weights of the connecting edges.
    /// ** Panics if `src >= n` **
    fn prim(&self, src: Node) -> ResultTree {
        grow_tree(self, src, None, KeyRule::EdgeWeight)
    }
}

impl<G> ShortestPath for G where G: AdjacencyList {}
