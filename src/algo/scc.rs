/*!
Strongly connected components of directed graphs.

Tarjan's algorithm with an explicit frame stack, so arbitrarily deep graphs
never exhaust the call stack. Component membership is folded into a
[`DisjointSet`] during the search and flattened into a per-node
representative table afterwards, so `are_strongly_connected` is a plain
read-only lookup.
*/

use itertools::Itertools;

use super::*;

/// Result of a strongly-connected-components decomposition
#[derive(Debug, Clone)]
pub struct StronglyConnected {
    components: Vec<Vec<Node>>,
    /// node -> representative of its component
    comp_of: Vec<Node>,
}

impl StronglyConnected {
    /// Number of components
    pub fn number_of_components(&self) -> NumNodes {
        self.components.len() as NumNodes
    }

    /// Member lists, in reverse topological order of the condensation
    pub fn components(&self) -> &[Vec<Node>] {
        &self.components
    }

    /// Returns *true* if `u` and `v` lie on a common directed cycle
    /// (or are the same node).
    /// ** Panics if `u >= n || v >= n` **
    pub fn are_strongly_connected(&self, u: Node, v: Node) -> bool {
        self.comp_of[u as usize] == self.comp_of[v as usize]
    }
}

/// Trait providing the decomposition on directed graphs
pub trait Scc: GraphType<Dir = Directed> {
    fn strongly_connected_components(&self) -> StronglyConnected;
}

impl<G> Scc for G
where
    G: DirectedAdjacencyList + GraphType<Dir = Directed>,
{
    fn strongly_connected_components(&self) -> StronglyConnected {
        SccSearch::new(self).compute()
    }
}

struct Frame {
    node: Node,
    neighbors: Vec<Node>,
    cursor: usize,
}

struct SccSearch<'a, G> {
    graph: &'a G,
    disc: Vec<Node>,
    low: Vec<Node>,
    on_stack: NodeBitSet,
    stack: Vec<Node>,
    time: Node,
    components: Vec<Vec<Node>>,
    membership: DisjointSet,
}

impl<'a, G> SccSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            disc: vec![INVALID_NODE; n as usize],
            low: vec![INVALID_NODE; n as usize],
            on_stack: NodeBitSet::new(n),
            stack: Vec::new(),
            time: 0,
            components: Vec::new(),
            membership: DisjointSet::new(n),
        }
    }

    fn compute(mut self) -> StronglyConnected {
        for root in self.graph.vertices() {
            if self.disc[root as usize] == INVALID_NODE {
                self.run_from(root);
            }
        }

        let graph = self.graph;
        let comp_of = graph.vertices().map(|u| self.membership.find(u)).collect();

        StronglyConnected {
            components: self.components,
            comp_of,
        }
    }

    fn discover(&mut self, u: Node) -> Frame {
        self.disc[u as usize] = self.time;
        self.low[u as usize] = self.time;
        self.time += 1;
        self.stack.push(u);
        self.on_stack.set_bit(u);

        Frame {
            node: u,
            neighbors: self.graph.out_neighbors_of(u).collect_vec(),
            cursor: 0,
        }
    }

    fn run_from(&mut self, root: Node) {
        let mut frames = vec![self.discover(root)];

        while let Some(frame) = frames.last_mut() {
            let u = frame.node;

            if let Some(&v) = frame.neighbors.get(frame.cursor) {
                frame.cursor += 1;

                if self.disc[v as usize] == INVALID_NODE {
                    let child = self.discover(v);
                    frames.push(child);
                } else if self.on_stack.get_bit(v) {
                    self.low[u as usize] = self.low[u as usize].min(self.disc[v as usize]);
                }
                continue;
            }

            frames.pop();

            if self.low[u as usize] == self.disc[u as usize] {
                let mut component = Vec::new();
                loop {
                    let v = self.stack.pop().unwrap();
                    self.on_stack.clear_bit(v);
                    self.membership.union(u, v);
                    component.push(v);
                    if v == u {
                        break;
                    }
                }
                component.sort_unstable();
                self.components.push(component);
            }

            if let Some(parent) = frames.last() {
                let p = parent.node;
                self.low[p as usize] = self.low[p as usize].min(self.low[u as usize]);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cycle_plus_isolated_node() {
        let graph = DirectedGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]);

        let scc = graph.strongly_connected_components();
        assert_eq!(scc.number_of_components(), 2);

        assert!(scc.are_strongly_connected(0, 2));
        assert!(scc.are_strongly_connected(1, 2));
        assert!(!scc.are_strongly_connected(0, 3));

        let mut sizes = scc.components().iter().map(|c| c.len()).collect::<Vec<_>>();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 3]);
    }

    #[test]
    fn dag_has_singleton_components() {
        let graph = DirectedGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 1)]);

        let scc = graph.strongly_connected_components();
        assert_eq!(scc.number_of_components(), 4);
        assert!(!scc.are_strongly_connected(0, 1));
        assert!(scc.are_strongly_connected(2, 2));
    }

    #[test]
    fn two_cycles_joined_by_edge() {
        let graph = DirectedGraph::from_edges(
            6,
            [
                (0, 1, 1),
                (1, 0, 1),
                (1, 2, 1),
                (2, 3, 1),
                (3, 4, 1),
                (4, 2, 1),
                (4, 5, 1),
            ],
        );

        let scc = graph.strongly_connected_components();
        assert_eq!(scc.number_of_components(), 3);
        assert!(scc.are_strongly_connected(0, 1));
        assert!(scc.are_strongly_connected(2, 4));
        assert!(!scc.are_strongly_connected(1, 2));
        assert!(!scc.are_strongly_connected(4, 5));

        // reverse topological order of the condensation
        let comps = scc.components();
        assert_eq!(comps[0], vec![5]);
        assert_eq!(comps[1], vec![2, 3, 4]);
        assert_eq!(comps[2], vec![0, 1]);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n: NumNodes = 200_000;
        let mut graph = DirectedGraph::new(n);
        for u in 0..n - 1 {
            graph.add_edge(u, u + 1, 1);
        }

        let scc = graph.strongly_connected_components();
        assert_eq!(scc.number_of_components(), n);
    }

    #[test]
    fn queries_work_on_shared_references() {
        let graph = DirectedGraph::from_edges(3, [(0, 1, 1), (1, 0, 1)]);

        let scc = graph.strongly_connected_components();
        let view = &scc;
        assert!(view.are_strongly_connected(0, 1));
        assert!(!view.are_strongly_connected(0, 2));
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph = DirectedGraph::from_edges(2, [(0, 1, 1), (0, 1, 2), (1, 0, 3), (0, 0, 4)]);

        let scc = graph.strongly_connected_components();
        assert_eq!(scc.number_of_components(), 1);
    }
}
