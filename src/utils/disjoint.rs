use crate::{Node, NumNodes};

/// Union-Find over the nodes `0..n`.
///
/// `find` compresses paths in two passes, so repeated queries flatten the
/// forest without recursion. Union is by arbitrary root choice; with path
/// compression this is fast enough for the single-consumer use here.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Node>,
}

impl DisjointSet {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Number of elements (not sets)
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `u`'s set.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut cur = u;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }

        root
    }

    /// Merges the sets of `u` and `v`.
    /// Returns *true* if they were distinct before.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }
        self.parent[rv as usize] = ru;
        true
    }

    /// Returns *true* if `u` and `v` belong to the same set.
    /// ** Panics if `u >= n || v >= n` **
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }
}
