use super::*;

/// Directed multigraph over arena-backed adjacency chains.
///
/// Every edge record is linked into the source's out-chain and the target's
/// in-chain, both kept in ascending weight order. Parallel edges and
/// self-loops are allowed.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    lines: LineArena,
    out_chains: Vec<Vec<LineId>>,
    in_chains: Vec<Vec<LineId>>,
    num_edges: NumEdges,
}

impl GraphType for DirectedGraph {
    type Dir = Directed;

    fn is_undirected() -> bool {
        false
    }
}

impl GraphNodeOrder for DirectedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_chains.len() as NumNodes
    }
}

impl GraphEdgeOrder for DirectedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphNew for DirectedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            lines: LineArena::default(),
            out_chains: vec![Vec::new(); n as usize],
            in_chains: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl AdjacencyList for DirectedGraph {
    fn links_of(&self, u: Node) -> impl Iterator<Item = Link> + '_ {
        self.out_chains[u as usize].iter().map(|&id| {
            let rec = self.lines.get(id);
            Link {
                id,
                node: rec.v,
                weight: rec.weight,
            }
        })
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_chains[u as usize].len() as NumNodes
    }
}

impl DirectedAdjacencyList for DirectedGraph {
    fn in_links_of(&self, u: Node) -> impl Iterator<Item = Link> + '_ {
        self.in_chains[u as usize].iter().map(|&id| {
            let rec = self.lines.get(id);
            Link {
                id,
                node: rec.u,
                weight: rec.weight,
            }
        })
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_chains[u as usize].len() as NumNodes
    }
}

impl GraphEdgeEditing for DirectedGraph {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> LineId {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());

        let id = self.lines.alloc(LineRecord { u, v, weight: w });
        splice_by_weight(&mut self.out_chains[u as usize], &self.lines, id);
        splice_by_weight(&mut self.in_chains[v as usize], &self.lines, id);
        self.num_edges += 1;
        id
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight> {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());

        let id = *self.out_chains[u as usize]
            .iter()
            .find(|&&id| self.lines.get(id).v == v)?;
        Some(self.remove_link(id).2)
    }

    fn remove_link(&mut self, id: LineId) -> WeightedEdge {
        let rec = self.lines.release(id);
        unlink(&mut self.out_chains[rec.u as usize], id);
        unlink(&mut self.in_chains[rec.v as usize], id);
        self.num_edges -= 1;
        WeightedEdge(rec.u, rec.v, rec.weight)
    }

    fn clear_edges(&mut self) {
        self.lines.clear();
        self.out_chains.iter_mut().for_each(Vec::clear);
        self.in_chains.iter_mut().for_each(Vec::clear);
        self.num_edges = 0;
    }
}

impl DirectedGraph {
    /// Iterates over all live edge records in arbitrary order
    pub fn lines(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.lines
            .iter()
            .map(|(_, rec)| WeightedEdge(rec.u, rec.v, rec.weight))
    }
}
