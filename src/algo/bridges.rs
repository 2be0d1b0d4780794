/*!
Bridge detection in undirected graphs.

Classic low-link search over an explicit frame stack, so deep components
never exhaust the call stack. Since the representations are multigraphs,
the walk back over the *entering edge record* is forbidden by its [`LineId`]
rather than by the parent node: a parallel edge between the same endpoints
is a legal back edge and correctly prevents either copy from being a bridge.
*/

use fxhash::FxHashSet;

use super::*;

/// Trait providing bridge detection on undirected graphs
pub trait Bridges: GraphType<Dir = Undirected> {
    /// All bridges as edges, in discovery order
    fn compute_bridges(&self) -> Vec<WeightedEdge>;

    /// The edge records of all bridges
    fn compute_bridge_ids(&self) -> FxHashSet<LineId>;

    /// Returns *true* if some edge between `u` and `v` is a bridge.
    /// ** Panics if `u >= n || v >= n` **
    fn is_bridge(&self, u: Node, v: Node) -> bool;
}

impl<G> Bridges for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn compute_bridges(&self) -> Vec<WeightedEdge> {
        BridgeSearch::new(self)
            .compute()
            .into_iter()
            .map(|(_, e)| e)
            .collect()
    }

    fn compute_bridge_ids(&self) -> FxHashSet<LineId> {
        BridgeSearch::new(self)
            .compute()
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    fn is_bridge(&self, u: Node, v: Node) -> bool {
        BridgeSearch::new(self)
            .compute()
            .iter()
            .any(|(_, e)| (e.0 == u && e.1 == v) || (e.0 == v && e.1 == u))
    }
}

struct BridgeSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    bridges: Vec<(LineId, WeightedEdge)>,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            visited: NodeBitSet::new(n),
            nodes_info: vec![NodeInfo::default(); n as usize],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<(LineId, WeightedEdge)> {
        for u in self.graph.vertices_with_neighbors() {
            if self.visited.set_bit(u) {
                continue;
            }

            self.run_from(u);
        }

        self.bridges
    }

    fn open(&mut self, entering: Option<Link>, u: Node) -> WalkFrame {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };

        WalkFrame {
            node: u,
            entering,
            links: self.graph.links_of(u).collect(),
            cursor: 0,
        }
    }

    fn run_from(&mut self, root: Node) {
        let mut frames = vec![self.open(None, root)];

        while let Some(frame) = frames.last_mut() {
            let u = frame.node;

            if let Some(link) = frame.links.get(frame.cursor).copied() {
                frame.cursor += 1;

                // the entering record itself may not be walked back, any
                // parallel copy may
                if frame.entering.map(|e| e.id) == Some(link.id) {
                    continue;
                }

                let v = link.node;
                if !self.visited.set_bit(v) {
                    let child = self.open(Some(link), v);
                    frames.push(child);
                } else {
                    let v_disc = self.nodes_info[v as usize].discovery;
                    self.nodes_info[u as usize].update_low(v_disc);
                }
                continue;
            }

            let entering = frame.entering;
            let low_u = self.nodes_info[u as usize].low;
            frames.pop();

            // only the root frame has no entering edge and no parent
            if let (Some(parent), Some(enter)) = (frames.last(), entering) {
                let p = parent.node;
                self.nodes_info[p as usize].update_low(low_u);

                if low_u > self.nodes_info[p as usize].discovery {
                    self.bridges.push((enter.id, WeightedEdge(p, u, enter.weight)));
                }
            }
        }
    }
}

struct WalkFrame {
    node: Node,
    entering: Option<Link>,
    links: Vec<Link>,
    cursor: usize,
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}
