use super::*;

/// Undirected multigraph over arena-backed adjacency chains.
///
/// Every edge record is shared by both endpoints: the same `LineId` is
/// spliced into both incident chains (twice into one chain for self-loops,
/// which therefore contribute 2 to the degree). Deleting a record unlinks
/// both occurrences at once.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    lines: LineArena,
    chains: Vec<Vec<LineId>>,
    num_edges: NumEdges,
}

impl GraphType for UndirectedGraph {
    type Dir = Undirected;

    fn is_undirected() -> bool {
        true
    }
}

impl GraphNodeOrder for UndirectedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.chains.len() as NumNodes
    }
}

impl GraphEdgeOrder for UndirectedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphNew for UndirectedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            lines: LineArena::default(),
            chains: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl AdjacencyList for UndirectedGraph {
    fn links_of(&self, u: Node) -> impl Iterator<Item = Link> + '_ {
        self.chains[u as usize].iter().map(move |&id| {
            let rec = self.lines.get(id);
            Link {
                id,
                node: if rec.u == u { rec.v } else { rec.u },
                weight: rec.weight,
            }
        })
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.chains[u as usize].len() as NumNodes
    }
}

impl GraphEdgeEditing for UndirectedGraph {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> LineId {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());

        let id = self.lines.alloc(LineRecord { u, v, weight: w });
        splice_by_weight(&mut self.chains[u as usize], &self.lines, id);
        splice_by_weight(&mut self.chains[v as usize], &self.lines, id);
        self.num_edges += 1;
        id
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight> {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());

        let id = *self.chains[u as usize].iter().find(|&&id| {
            let rec = self.lines.get(id);
            (rec.u == u && rec.v == v) || (rec.u == v && rec.v == u)
        })?;
        Some(self.remove_link(id).2)
    }

    fn remove_link(&mut self, id: LineId) -> WeightedEdge {
        let rec = self.lines.release(id);
        unlink(&mut self.chains[rec.u as usize], id);
        unlink(&mut self.chains[rec.v as usize], id);
        self.num_edges -= 1;
        WeightedEdge(rec.u, rec.v, rec.weight)
    }

    fn clear_edges(&mut self) {
        self.lines.clear();
        self.chains.iter_mut().for_each(Vec::clear);
        self.num_edges = 0;
    }
}

impl UndirectedGraph {
    /// Iterates over all live edge records in arbitrary order, each once
    pub fn lines(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.lines
            .iter()
            .map(|(_, rec)| WeightedEdge(rec.u, rec.v, rec.weight))
    }

    /// Nodes of odd degree, in increasing order.
    /// Self-loops never change the parity of a node.
    pub fn odd_degree_vertices(&self) -> Vec<Node> {
        self.vertices()
            .filter(|&u| self.degree_of(u) % 2 == 1)
            .collect()
    }
}
