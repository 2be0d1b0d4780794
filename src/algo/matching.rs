/*!
# Matching Algorithms

Matchings in bipartite undirected graphs.

- [`BipartiteMatching::hungarian`] grows a **maximum-cardinality** matching
  with one augmenting-path search per left node, O(V·E).
- [`BipartiteMatching::kuhn_munkres`] solves the **assignment problem** over
  node potentials and tight edges, minimizing or maximizing the total weight,
  O(V³). Left nodes that cannot be matched feasibly stay unmatched, so the
  result may be partial.

Both first two-color the graph; the left color class takes the role of X,
the right one of Y.
*/

use super::*;

/// A set of node-disjoint edges of a bipartite graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    pairs: Vec<(Node, Node, Weight)>,
    total_weight: Weight,
}

impl Matching {
    fn collect(matched: &[Option<(Node, Weight)>], right: &[Node]) -> Self {
        let mut pairs = Vec::new();
        let mut total_weight = 0;
        for &y in right {
            if let Some((x, w)) = matched[y as usize] {
                pairs.push((x, y, w));
                total_weight += w;
            }
        }
        Self {
            pairs,
            total_weight,
        }
    }

    /// Matched `(x, y, weight)` triples, in increasing order of `y`
    pub fn pairs(&self) -> &[(Node, Node, Weight)] {
        &self.pairs
    }

    /// Number of matched pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sum of the matched edge weights
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }
}

/// Optimization direction of [`BipartiteMatching::kuhn_munkres`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Minimize,
    Maximize,
}

/// Matching algorithms on bipartite undirected graphs
pub trait BipartiteMatching: AdjacencyList + GraphType<Dir = Undirected> {
    /// Computes a maximum-cardinality matching.
    /// Fails with [`GraphError::NotBipartite`] on non-bipartite graphs.
    fn hungarian(&self) -> Result<Matching, GraphError>;

    /// Computes a matching of optimal total weight among the
    /// maximum-cardinality matchings reachable over tight edges.
    /// Fails with [`GraphError::NotBipartite`] on non-bipartite graphs.
    fn kuhn_munkres(&self, objective: Objective) -> Result<Matching, GraphError>;
}

impl<G> BipartiteMatching for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn hungarian(&self) -> Result<Matching, GraphError> {
        let bip = self.two_color()?;

        let mut ctx = AugmentCtx {
            graph: self,
            matched: vec![None; self.len()],
            visited: self.vertex_bitset_unset(),
        };

        for &x in bip.left() {
            ctx.visited.clear_all();
            ctx.augment(x);
        }

        Ok(Matching::collect(&ctx.matched, bip.right()))
    }

    fn kuhn_munkres(&self, objective: Objective) -> Result<Matching, GraphError> {
        let bip = self.two_color()?;

        let mut ctx = KmCtx {
            graph: self,
            objective,
            pot: vec![0; self.len()],
            slack: vec![Weight::MAX; self.len()],
            touched: Vec::new(),
            visited_x: self.vertex_bitset_unset(),
            visited_y: self.vertex_bitset_unset(),
            matched: vec![None; self.len()],
        };

        // initial potentials make the extreme incident edge of every left
        // node tight
        for &x in bip.left() {
            ctx.pot[x as usize] = match objective {
                Objective::Minimize => self.min_link_of(x).map_or(0, |l| l.weight),
                Objective::Maximize => self.links_of(x).last().map_or(0, |l| l.weight),
            };
        }

        for &x in bip.left() {
            if self.degree_of(x) == 0 {
                continue;
            }

            ctx.reset_slacks();
            loop {
                ctx.visited_x.clear_all();
                ctx.visited_y.clear_all();
                if ctx.try_augment(x) {
                    break;
                }

                let delta = ctx
                    .touched
                    .iter()
                    .filter(|&&y| !ctx.visited_y.get_bit(y))
                    .map(|&y| ctx.slack[y as usize])
                    .min();

                // no edge leaves the alternating forest, x stays unmatched
                let Some(delta) = delta else {
                    break;
                };

                ctx.shift_potentials(bip.left(), bip.right(), delta);
            }
        }

        Ok(Matching::collect(&ctx.matched, bip.right()))
    }
}

/// One left node on the alternating path under construction
struct SearchFrame {
    x: Node,
    links: Vec<Link>,
    cursor: usize,
    /// matched link whose partner the search descended into
    pending: Option<Link>,
}

/// Re-matches the partners of every frame below the one that found a free
/// node, flipping the alternating path in one unwinding pass
fn flip_alternating_path(frames: &mut Vec<SearchFrame>, matched: &mut [Option<(Node, Weight)>]) {
    while let Some(done) = frames.pop() {
        if let Some(link) = done.pending {
            matched[link.node as usize] = Some((done.x, link.weight));
        }
    }
}

/// State of one maximum-cardinality augmentation pass
struct AugmentCtx<'a, G> {
    graph: &'a G,
    /// right node -> (left partner, weight of the matched edge)
    matched: Vec<Option<(Node, Weight)>>,
    visited: NodeBitSet,
}

impl<G: AdjacencyList> AugmentCtx<'_, G> {
    fn open(&self, x: Node) -> SearchFrame {
        SearchFrame {
            x,
            links: self.graph.links_of(x).collect(),
            cursor: 0,
            pending: None,
        }
    }

    /// Tries to match `x`, re-matching current partners along the
    /// alternating path. Runs over an explicit frame stack, so long
    /// alternating chains never exhaust the call stack.
    fn augment(&mut self, x: Node) -> bool {
        let mut frames = vec![self.open(x)];

        while let Some(frame) = frames.last_mut() {
            let Some(link) = frame.links.get(frame.cursor).copied() else {
                frames.pop();
                continue;
            };
            frame.cursor += 1;

            let y = link.node;
            if self.visited.set_bit(y) {
                continue;
            }

            match self.matched[y as usize] {
                Some((x2, _)) => {
                    frame.pending = Some(link);
                    let next = self.open(x2);
                    frames.push(next);
                }
                None => {
                    self.matched[y as usize] = Some((frame.x, link.weight));
                    frames.pop();
                    flip_alternating_path(&mut frames, &mut self.matched);
                    return true;
                }
            }
        }

        false
    }
}

/// State of the assignment solver
struct KmCtx<'a, G> {
    graph: &'a G,
    objective: Objective,
    /// node potential, shared id space for both sides
    pot: Vec<Weight>,
    /// per right node: smallest gap towards the alternating forest
    slack: Vec<Weight>,
    /// right nodes whose slack dropped below `MAX` since the last reset
    touched: Vec<Node>,
    visited_x: NodeBitSet,
    visited_y: NodeBitSet,
    /// right node -> (left partner, weight of the matched edge)
    matched: Vec<Option<(Node, Weight)>>,
}

impl<G: AdjacencyList> KmCtx<'_, G> {
    /// Gap of an edge towards tightness; 0 means the edge may be walked
    fn gap(&self, x: Node, y: Node, w: Weight) -> Weight {
        match self.objective {
            Objective::Minimize => w - self.pot[x as usize] + self.pot[y as usize],
            Objective::Maximize => self.pot[x as usize] + self.pot[y as usize] - w,
        }
    }

    fn open(&mut self, x: Node) -> SearchFrame {
        self.visited_x.set_bit(x);
        SearchFrame {
            x,
            links: self.graph.links_of(x).collect(),
            cursor: 0,
            pending: None,
        }
    }

    /// Augmenting-path search restricted to tight edges; records slacks of
    /// the non-tight edges seen along the way. Runs over an explicit frame
    /// stack like [`AugmentCtx::augment`].
    fn try_augment(&mut self, x: Node) -> bool {
        let mut frames = vec![self.open(x)];

        while let Some(frame) = frames.last_mut() {
            let Some(link) = frame.links.get(frame.cursor).copied() else {
                frames.pop();
                continue;
            };
            frame.cursor += 1;

            let y = link.node;
            if self.visited_y.get_bit(y) {
                continue;
            }

            let gap = self.gap(frame.x, y, link.weight);
            if gap != 0 {
                let slack = &mut self.slack[y as usize];
                if *slack == Weight::MAX {
                    self.touched.push(y);
                }
                *slack = (*slack).min(gap);
                continue;
            }

            self.visited_y.set_bit(y);
            match self.matched[y as usize] {
                Some((x2, _)) => {
                    frame.pending = Some(link);
                    let next = self.open(x2);
                    frames.push(next);
                }
                None => {
                    self.matched[y as usize] = Some((frame.x, link.weight));
                    frames.pop();
                    flip_alternating_path(&mut frames, &mut self.matched);
                    return true;
                }
            }
        }

        false
    }

    /// Restores the all-`MAX` slack invariant before the next left node,
    /// revisiting only the entries the previous searches lowered
    fn reset_slacks(&mut self) {
        for y in self.touched.drain(..) {
            self.slack[y as usize] = Weight::MAX;
        }
    }

    /// Moves the potentials by `delta` so at least one new edge out of the
    /// alternating forest becomes tight; tight edges inside stay tight
    fn shift_potentials(&mut self, left: &[Node], right: &[Node], delta: Weight) {
        for &x in left {
            if self.visited_x.get_bit(x) {
                match self.objective {
                    Objective::Minimize => self.pot[x as usize] += delta,
                    Objective::Maximize => self.pot[x as usize] -= delta,
                }
            }
        }
        for &y in right {
            if self.visited_y.get_bit(y) {
                self.pot[y as usize] += delta;
            } else if self.slack[y as usize] < Weight::MAX {
                self.slack[y as usize] -= delta;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hungarian_on_path() {
        let graph = UndirectedGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]);

        let matching = graph.hungarian().unwrap();
        assert_eq!(matching.len(), 2);
    }

    #[test]
    fn hungarian_rematches_via_augmenting_path() {
        // left {0, 2}, right {1, 3}; 2 only knows 1, so 0 must move to 3
        let graph = UndirectedGraph::from_edges(4, [(0, 1, 1), (0, 3, 5), (2, 1, 2)]);

        let matching = graph.hungarian().unwrap();
        assert_eq!(matching.len(), 2);
        assert_eq!(matching.pairs(), &[(2, 1, 2), (0, 3, 5)]);
    }

    #[test]
    fn hungarian_rejects_odd_cycles() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        assert!(matches!(
            graph.hungarian(),
            Err(GraphError::NotBipartite(_))
        ));
        assert!(matches!(
            graph.kuhn_munkres(Objective::Minimize),
            Err(GraphError::NotBipartite(_))
        ));
    }

    /// Complete bipartite 2x2 instance with cost matrix
    /// ```text
    ///        y=2  y=3
    /// x=0  [  4    1 ]
    /// x=1  [  2    3 ]
    /// ```
    fn square_instance() -> UndirectedGraph {
        UndirectedGraph::from_edges(4, [(0, 2, 4), (0, 3, 1), (1, 2, 2), (1, 3, 3)])
    }

    #[test]
    fn kuhn_munkres_minimize() {
        let matching = square_instance().kuhn_munkres(Objective::Minimize).unwrap();

        assert_eq!(matching.len(), 2);
        assert_eq!(matching.total_weight(), 3);
        assert_eq!(matching.pairs(), &[(1, 2, 2), (0, 3, 1)]);
    }

    #[test]
    fn kuhn_munkres_maximize() {
        let matching = square_instance().kuhn_munkres(Objective::Maximize).unwrap();

        assert_eq!(matching.len(), 2);
        assert_eq!(matching.total_weight(), 7);
        assert_eq!(matching.pairs(), &[(0, 2, 4), (1, 3, 3)]);
    }

    #[test]
    fn kuhn_munkres_needs_potential_shift() {
        // both left nodes prefer y=2; x=0 must be pushed to its dearer edge
        let graph = UndirectedGraph::from_edges(4, [(0, 2, 1), (0, 3, 2), (1, 2, 1), (1, 3, 5)]);

        let matching = graph.kuhn_munkres(Objective::Minimize).unwrap();
        assert_eq!(matching.len(), 2);
        assert_eq!(matching.total_weight(), 3);
        assert_eq!(matching.pairs(), &[(1, 2, 1), (0, 3, 2)]);
    }

    #[test]
    fn kuhn_munkres_leaves_surplus_left_nodes_unmatched() {
        // three left nodes compete for two right nodes
        let graph = UndirectedGraph::from_edges(
            5,
            [
                (0, 3, 1),
                (0, 4, 2),
                (1, 3, 2),
                (1, 4, 4),
                (2, 3, 3),
                (2, 4, 6),
            ],
        );

        let matching = graph.kuhn_munkres(Objective::Minimize).unwrap();
        assert_eq!(matching.len(), 2);
        assert_eq!(matching.total_weight(), 4);
    }

    #[test]
    fn kuhn_munkres_skips_isolated_left_nodes() {
        let graph = UndirectedGraph::from_edges(3, [(0, 2, 7)]);

        let matching = graph.kuhn_munkres(Objective::Minimize).unwrap();
        assert_eq!(matching.pairs(), &[(0, 2, 7)]);
    }

    #[test]
    fn parallel_edges_pick_the_objective_extreme() {
        let graph = UndirectedGraph::from_edges(2, [(0, 1, 5), (0, 1, 2), (0, 1, 9)]);

        let min = graph.kuhn_munkres(Objective::Minimize).unwrap();
        assert_eq!(min.total_weight(), 2);

        let max = graph.kuhn_munkres(Objective::Maximize).unwrap();
        assert_eq!(max.total_weight(), 9);
    }

    #[test]
    fn deep_alternating_chains_do_not_overflow() {
        // path 0 - 1 - ... - 2n, all weights equal. The edges towards
        // 2i + 1 are inserted last, so equal-weight splicing puts the
        // higher neighbor first in every chain and the nodes pair up
        // left to right without stealing. The final search from 2n then
        // walks the whole alternating chain once before giving up.
        let n: usize = 50_000;
        let mut graph = UndirectedGraph::new((2 * n + 1) as NumNodes);
        for i in 1..=n {
            graph.add_edge(2 * i as Node, 2 * i as Node - 1, 1);
        }
        for i in 0..n {
            graph.add_edge(2 * i as Node, 2 * i as Node + 1, 1);
        }

        let matching = graph.hungarian().unwrap();
        assert_eq!(matching.len(), n);

        let matching = graph.kuhn_munkres(Objective::Minimize).unwrap();
        assert_eq!(matching.len(), n);
        assert_eq!(matching.total_weight(), n as Weight);
    }

    #[test]
    fn empty_graph_has_empty_matching() {
        let graph = UndirectedGraph::new(4);

        assert!(graph.hungarian().unwrap().is_empty());
        assert!(graph.kuhn_munkres(Objective::Maximize).unwrap().is_empty());
    }
}
