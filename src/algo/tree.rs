/*!
Result structures of the tree-growing algorithms.

[`ResultTree`] is the arena-backed rooted tree produced by Dijkstra and Prim:
every entry records the node, its key (cumulative distance or connecting edge
weight), a back-reference to its parent, and a child list kept in ascending
key order. [`Path`] is the flat forward view of a single root-to-node walk.
*/

use fxhash::FxHashMap;

use super::*;

/// One hop of a [`Path`]: the node reached and the cumulative distance
/// from the source up to and including this hop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub node: Node,
    pub dist: Weight,
}

/// A walk through the graph, source first, with cumulative distances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    pub(crate) fn from_steps(steps: Vec<PathStep>) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps }
    }

    /// First node of the walk
    pub fn source(&self) -> Node {
        self.steps[0].node
    }

    /// Last node of the walk
    pub fn target(&self) -> Node {
        self.steps[self.steps.len() - 1].node
    }

    /// Cumulative distance of the full walk
    pub fn total_dist(&self) -> Weight {
        self.steps[self.steps.len() - 1].dist
    }

    /// Number of hops, i.e. number of nodes minus one
    pub fn number_of_hops(&self) -> usize {
        self.steps.len() - 1
    }

    /// All steps in walk order
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// All visited nodes in walk order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.steps.iter().map(|s| s.node)
    }
}

#[derive(Debug, Clone)]
struct TreeNode {
    node: Node,
    dist: Weight,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Rooted result tree of a tree-growing algorithm.
///
/// Entries live in a growable arena; a hash index maps node ids to arena
/// positions. Child lists are kept in ascending key order by binary-search
/// insertion, so iterating children always starts with the cheapest.
#[derive(Debug, Clone, Default)]
pub struct ResultTree {
    slots: Vec<TreeNode>,
    position: FxHashMap<Node, usize>,
}

impl ResultTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns *true* if the node was reached
    pub fn contains(&self, node: Node) -> bool {
        self.position.contains_key(&node)
    }

    /// Key of a node, if it was reached
    pub fn dist_of(&self, node: Node) -> Option<Weight> {
        Some(self.slots[*self.position.get(&node)?].dist)
    }

    /// Parent of a node; `None` for the root or unreached nodes
    pub fn parent_of(&self, node: Node) -> Option<Node> {
        let slot = &self.slots[*self.position.get(&node)?];
        Some(self.slots[slot.parent?].node)
    }

    /// Children of a node in ascending key order
    pub fn children_of(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.position
            .get(&node)
            .into_iter()
            .flat_map(|&pos| self.slots[pos].children.iter())
            .map(|&child| self.slots[child].node)
    }

    /// Root of the tree, if any node was inserted yet
    pub fn root(&self) -> Option<Node> {
        self.slots.first().map(|slot| slot.node)
    }

    /// Makes `node` the root with key `dist`.
    /// ** Panics if the tree is non-empty **
    pub(crate) fn insert_root(&mut self, node: Node, dist: Weight) {
        assert!(self.is_empty());
        self.slots.push(TreeNode {
            node,
            dist,
            parent: None,
            children: Vec::new(),
        });
        self.position.insert(node, 0);
    }

    /// Attaches `node` with key `dist` under `parent`, keeping the child
    /// list sorted by key.
    /// ** Panics if `parent` is unreached or `node` already inserted **
    pub(crate) fn insert_child(&mut self, parent: Node, node: Node, dist: Weight) {
        let parent_pos = self.position[&parent];
        let pos = self.slots.len();

        self.slots.push(TreeNode {
            node,
            dist,
            parent: Some(parent_pos),
            children: Vec::new(),
        });
        let prev = self.position.insert(node, pos);
        assert!(prev.is_none(), "node {node} inserted twice");

        let at = self.slots[parent_pos]
            .children
            .partition_point(|&c| self.slots[c].dist < dist);
        self.slots[parent_pos].children.insert(at, pos);
    }

    /// Re-expresses the walk from the root to `node` as a forward [`Path`].
    /// Returns `None` if `node` was not reached.
    pub fn path_to(&self, node: Node) -> Option<Path> {
        let mut pos = *self.position.get(&node)?;

        let mut steps = Vec::new();
        loop {
            let slot = &self.slots[pos];
            steps.push(PathStep {
                node: slot.node,
                dist: slot.dist,
            });
            match slot.parent {
                Some(parent) => pos = parent,
                None => break,
            }
        }

        steps.reverse();
        Some(Path::from_steps(steps))
    }
}
