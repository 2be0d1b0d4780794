/*!
Graph traversal iterators.

A [`GraphWalk`] lazily visits the component of its start node. The frontier
container decides the order (queue for BFS, stack for DFS) and the item type
decides whether the traversal-tree parent is reported alongside each node.
A drained walk can be reseeded at the smallest unvisited node, which covers
the remaining components one by one.
*/

use std::{collections::VecDeque, marker::PhantomData};

use super::*;

/// Item yielded by a [`GraphWalk`]: the visited node, optionally together
/// with the parent it was discovered from
pub trait WalkItem: Copy {
    fn root(node: Node) -> Self;
    fn via(parent: Node, node: Node) -> Self;

    fn node(&self) -> Node;

    /// Parent in the traversal tree; `None` for roots
    fn parent(&self) -> Option<Node>;
}

impl WalkItem for Node {
    fn root(node: Node) -> Self {
        node
    }
    fn via(_: Node, node: Node) -> Self {
        node
    }
    fn node(&self) -> Node {
        *self
    }
    fn parent(&self) -> Option<Node> {
        None
    }
}

/// `(parent, node)` pair; a root carries itself as its parent
pub type ParentedNode = (Node, Node);

impl WalkItem for ParentedNode {
    fn root(node: Node) -> Self {
        (node, node)
    }
    fn via(parent: Node, node: Node) -> Self {
        (parent, node)
    }
    fn node(&self) -> Node {
        self.1
    }
    fn parent(&self) -> Option<Node> {
        (self.0 != self.1).then_some(self.0)
    }
}

/// Pending items of a walk; the container decides the visit order:
/// [`VecDeque`] pops oldest-first (BFS), [`Vec`] pops newest-first (DFS)
pub trait Frontier<I>: Default {
    fn put(&mut self, item: I);
    fn take(&mut self) -> Option<I>;
}

impl<I> Frontier<I> for VecDeque<I> {
    fn put(&mut self, item: I) {
        self.push_back(item);
    }
    fn take(&mut self) -> Option<I> {
        self.pop_front()
    }
}

impl<I> Frontier<I> for Vec<I> {
    fn put(&mut self, item: I) {
        self.push(item);
    }
    fn take(&mut self) -> Option<I> {
        self.pop()
    }
}

/// Lazy traversal of the component of a start node.
///
/// Every node is yielded at most once; neighbors are expanded in chain
/// order, so among the children of one node the cheapest edge is walked
/// first.
pub struct GraphWalk<'a, G, F, I>
where
    G: AdjacencyList,
    F: Frontier<I>,
    I: WalkItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    frontier: F,
    _item: PhantomData<I>,
}

/// Breadth-first traversal
pub type Bfs<'a, G> = GraphWalk<'a, G, VecDeque<Node>, Node>;

/// Depth-first traversal
pub type Dfs<'a, G> = GraphWalk<'a, G, Vec<Node>, Node>;

/// Breadth-first traversal reporting traversal-tree parents
pub type BfsTree<'a, G> = GraphWalk<'a, G, VecDeque<ParentedNode>, ParentedNode>;

impl<G, F, I> Iterator for GraphWalk<'_, G, F, I>
where
    G: AdjacencyList,
    F: Frontier<I>,
    I: WalkItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.frontier.take()?;
        let u = item.node();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.frontier.put(I::via(u, v));
            }
        }

        Some(item)
    }
}

impl<'a, G, F, I> GraphWalk<'a, G, F, I>
where
    G: AdjacencyList,
    F: Frontier<I>,
    I: WalkItem,
{
    /// Creates a walk rooted at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        let mut frontier = F::default();
        frontier.put(I::root(start));

        Self {
            graph,
            visited,
            frontier,
            _item: PhantomData,
        }
    }

    /// Reseeds a drained walk at the smallest unvisited node and returns
    /// it, or `None` once every node was visited. The reseeded node is a
    /// fresh root of the traversal tree.
    pub fn restart_at_next_unvisited(&mut self) -> Option<Node> {
        let next = self.graph.vertices().find(|&u| !self.visited.get_bit(u))?;
        self.visited.set_bit(next);
        self.frontier.put(I::root(next));
        Some(next)
    }

    /// Consumes the walk; *true* if it visits `target`
    pub fn reaches(mut self, target: Node) -> bool {
        self.any(|item| item.node() == target)
    }
}

/// Provides traversal methods directly on the graph representations
pub trait Traversal: AdjacencyList {
    /// Walks the nodes reachable from `start` in breadth-first order.
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        GraphWalk::new(self, start)
    }

    /// Walks the nodes reachable from `start` in depth-first order.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> Dfs<'_, Self> {
        GraphWalk::new(self, start)
    }

    /// Breadth-first walk that also reports the traversal-tree parent of
    /// every visited node.
    /// ** Panics if `start >= n` **
    fn bfs_tree(&self, start: Node) -> BfsTree<'_, Self> {
        GraphWalk::new(self, start)
    }

    /// Returns `true` if there exists a (directed) path from `start` to `end`.
    /// ** Panics if `start >= n || end >= n` **
    fn is_connected_to(&self, start: Node, end: Node) -> bool {
        start == end || self.bfs(start).reaches(end)
    }
}

impl<G> Traversal for G where G: AdjacencyList {}
