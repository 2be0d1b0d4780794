/*!
Two-coloring of undirected graphs.

Colors along a [`BfsTree`] walk restarted per component, then validates the
coloring against every edge. On success the partition is returned with its
member lists; on failure one endpoint of an edge inside a color class (part
of an odd closed walk) is reported as the [`GraphError::NotBipartite`]
witness.
*/

use super::*;

/// A two-coloring of the node set.
///
/// Nodes are on the **left** (0) or **right** (1) side; every edge of the
/// graph the partition was computed for crosses sides. Isolated nodes end
/// up on the left.
#[derive(Debug, Clone)]
pub struct Bipartition {
    side: NodeBitSet,
    left: Vec<Node>,
    right: Vec<Node>,
}

impl Bipartition {
    /// Nodes on the left side, in increasing order
    pub fn left(&self) -> &[Node] {
        &self.left
    }

    /// Nodes on the right side, in increasing order
    pub fn right(&self) -> &[Node] {
        &self.right
    }

    /// Returns `true` if the node is on the left (0) side of the partition.
    pub fn is_on_left_side(&self, u: Node) -> bool {
        !self.side.get_bit(u)
    }

    /// Returns `true` if the node is on the right (1) side of the partition.
    pub fn is_on_right_side(&self, u: Node) -> bool {
        self.side.get_bit(u)
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest: AdjacencyList + GraphType<Dir = Undirected> {
    /// Computes a valid bipartition of the graph, if one exists.
    ///
    /// Every component is colored along its BFS tree with the smallest
    /// node on the left; the graph is bipartite iff this coloring leaves
    /// no edge inside a color class. Fails with
    /// [`GraphError::NotBipartite`] carrying one endpoint of the first
    /// offending edge.
    fn two_color(&self) -> Result<Bipartition, GraphError> {
        let mut side = self.vertex_bitset_unset();

        if !self.is_empty() {
            let mut walk = self.bfs_tree(0);
            loop {
                for item in walk.by_ref() {
                    if let Some(p) = item.parent() {
                        if !side.get_bit(p) {
                            side.set_bit(item.node());
                        }
                    }
                }
                if walk.restart_at_next_unvisited().is_none() {
                    break;
                }
            }
        }

        if let Some(WeightedEdge(_, v, _)) = self
            .edges(false)
            .find(|&WeightedEdge(u, v, _)| side.get_bit(u) == side.get_bit(v))
        {
            return Err(GraphError::NotBipartite(v));
        }

        let (mut left, mut right) = (Vec::new(), Vec::new());
        for u in self.vertices() {
            if side.get_bit(u) {
                right.push(u);
            } else {
                left.push(u);
            }
        }

        Ok(Bipartition { side, left, right })
    }

    /// Tests whether the given candidate partition is valid for this graph.
    fn is_bipartition(&self, bipartition: &Bipartition) -> bool {
        self.edges(false)
            .all(|WeightedEdge(u, v, _)| {
                bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v)
            })
    }

    /// Tests whether the graph is bipartite.
    fn is_bipartite(&self) -> bool {
        self.two_color().is_ok()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList + GraphType<Dir = Undirected> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn paths_are_bipartite() {
        for n in 2..10 {
            let mut graph = UndirectedGraph::new(n);
            for u in 0..n - 1 {
                graph.add_edge(u, u + 1, 1);
            }

            let bip = graph.two_color().unwrap();
            assert!(graph.is_bipartition(&bip));
            assert_eq!(bip.left().len(), (n as usize + 1) / 2);
            assert!(bip.is_on_left_side(0));
            assert!(bip.is_on_right_side(1));
        }
    }

    #[test]
    fn even_cycle_vs_odd_cycle() {
        let even = UndirectedGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]);
        assert!(even.is_bipartite());

        let odd = UndirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        match odd.two_color() {
            Err(GraphError::NotBipartite(witness)) => assert!(witness < 3),
            other => panic!("expected NotBipartite, got {other:?}"),
        }
        assert!(!odd.is_bipartite());
    }

    #[test]
    fn self_loop_is_never_bipartite() {
        let graph = UndirectedGraph::from_edges(2, [(0, 1, 1), (1, 1, 1)]);
        assert_eq!(graph.two_color().err(), Some(GraphError::NotBipartite(1)));
    }

    #[test]
    fn components_are_colored_independently() {
        let graph =
            UndirectedGraph::from_edges(6, [(0, 1, 1), (2, 3, 1), (3, 4, 1)]);

        let bip = graph.two_color().unwrap();
        assert!(graph.is_bipartition(&bip));
        // component roots and isolated nodes go left
        assert_eq!(bip.left(), &[0, 2, 4, 5]);
        assert_eq!(bip.right(), &[1, 3]);
    }

    #[test]
    fn parallel_edges_do_not_confuse_coloring() {
        let graph = UndirectedGraph::from_edges(2, [(0, 1, 1), (0, 1, 9)]);
        let bip = graph.two_color().unwrap();
        assert!(graph.is_bipartition(&bip));
    }

    #[test]
    fn foreign_partition_is_rejected() {
        let path = UndirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 1)]);
        let triangle_free = path.two_color().unwrap();

        let clique = UndirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
        assert!(!clique.is_bipartition(&triangle_free));
    }
}
