/*!
Euler walks and the Chinese Postman tour on undirected graphs.

All three algorithms consume a private clone of the graph, walking edges by
deleting their records. [`Eulerian::fleury`] re-checks bridges before every
step and crosses one only when no other edge is left; [`Eulerian::hierholzer`]
runs the walk-until-stuck scheme over an explicit stack, so long tours never
exhaust the call stack. [`Eulerian::chinese_postman`] makes a non-Eulerian
graph Eulerian first: odd-degree nodes are paired up at minimum
shortest-path cost (via the Kuhn-Munkres component on a bipartite mirror of
the odd set) and the connecting paths are duplicated.
*/

use itertools::Itertools;

use super::*;

/// Euler walks & postman tours on undirected graphs
pub trait Eulerian:
    AdjacencyList + GraphEdgeEditing + GraphType<Dir = Undirected> + Clone
{
    /// Walks an Euler path from `src`, preferring the cheapest non-bridge
    /// edge in every step and crossing a bridge only when forced to.
    /// O(E²) due to the bridge recomputation per step.
    ///
    /// Fails with [`GraphError::IsolatedNode`] if `src` has no incident edge
    /// and [`GraphError::NotEulerian`] if the walk gets stuck with edges
    /// left over.
    /// ** Panics if `src >= n` **
    fn fleury(&self, src: Node) -> Result<Path, GraphError> {
        if self.degree_of(src) == 0 {
            return Err(GraphError::IsolatedNode(src));
        }

        let mut graph = self.clone();
        let mut steps = vec![PathStep { node: src, dist: 0 }];
        let mut dist = 0;
        let mut cur = src;

        loop {
            let bridges = graph.compute_bridge_ids();

            let links = graph.links_of(cur).collect_vec();
            let Some(link) = links
                .iter()
                .find(|l| !bridges.contains(&l.id))
                .or_else(|| links.first())
                .copied()
            else {
                break;
            };

            graph.remove_link(link.id);
            dist += link.weight;
            cur = link.node;
            steps.push(PathStep { node: cur, dist });
        }

        if !graph.is_edgeless() {
            return Err(GraphError::NotEulerian {
                remaining: graph.number_of_edges(),
            });
        }

        Ok(Path::from_steps(steps))
    }

    /// Walks an Euler path from `src` in O(E) by walking until stuck and
    /// splicing detours in on backtracking. The walk runs over an explicit
    /// stack of `(node, weight of the entering edge)` entries; the reversed
    /// finish order is the path.
    ///
    /// Same error conditions as [`fleury`](Eulerian::fleury).
    /// ** Panics if `src >= n` **
    fn hierholzer(&self, src: Node) -> Result<Path, GraphError> {
        if self.degree_of(src) == 0 {
            return Err(GraphError::IsolatedNode(src));
        }

        // splicing is only sound on an Euler circuit or an Euler path
        // walked from one of its odd ends
        let odd = self
            .vertices()
            .filter(|&u| self.degree_of(u) % 2 == 1)
            .collect_vec();
        if !(odd.is_empty() || (odd.len() == 2 && odd.contains(&src))) {
            return Err(GraphError::NotEulerian {
                remaining: self.number_of_edges(),
            });
        }

        let mut graph = self.clone();
        let mut walk: Vec<(Node, Weight)> = vec![(src, 0)];
        let mut finished: Vec<(Node, Weight)> = Vec::new();

        while let Some(&(u, _)) = walk.last() {
            if let Some(link) = graph.min_link_of(u) {
                graph.remove_link(link.id);
                walk.push((link.node, link.weight));
            } else {
                // dead end, this node's position in the path is final
                finished.push(walk.pop().unwrap());
            }
        }

        if !graph.is_edgeless() {
            return Err(GraphError::NotEulerian {
                remaining: graph.number_of_edges(),
            });
        }

        let mut dist = 0;
        let steps = finished
            .into_iter()
            .rev()
            .map(|(node, weight)| {
                dist += weight;
                PathStep { node, dist }
            })
            .collect_vec();

        Ok(Path::from_steps(steps))
    }

    /// Computes a Chinese Postman walk from `src`: a minimum-cost walk that
    /// crosses every edge at least once.
    ///
    /// If the graph is already Eulerian from `src`, this is a plain
    /// [`hierholzer`](Eulerian::hierholzer) walk. Otherwise the odd-degree
    /// nodes are paired at minimum total shortest-path distance and each
    /// pairing path is doubled before walking.
    ///
    /// Fails with [`GraphError::IsolatedNode`] if `src` has no incident
    /// edge, [`GraphError::Unreachable`] if an odd node cannot be reached
    /// from `src` or paired up, and [`GraphError::NotEulerian`] if the
    /// graph is disconnected beyond repair.
    /// ** Panics if `src >= n` **
    fn chinese_postman(&self, src: Node) -> Result<Path, GraphError> {
        if self.degree_of(src) == 0 {
            return Err(GraphError::IsolatedNode(src));
        }

        let odd = self
            .vertices()
            .filter(|&u| self.degree_of(u) % 2 == 1)
            .collect_vec();

        // already walkable: Euler circuit, or Euler path starting at src
        if odd.is_empty() || (odd.len() == 2 && odd.contains(&src)) {
            return self.hierholzer(src);
        }

        // no pairing can help if an odd node sits in another component
        if let Some(&stray) = odd.iter().find(|&&u| !self.is_connected_to(src, u)) {
            return Err(GraphError::Unreachable { src, dest: stray });
        }

        let mut augmented = self.clone();
        for (a, b) in pair_odd_vertices(self, &odd)? {
            let path = self.dijkstra(a, b)?;
            for (s1, s2) in path.steps().iter().tuple_windows() {
                augmented.add_edge(s1.node, s2.node, s2.dist - s1.dist);
            }
        }

        augmented.hierholzer(src)
    }
}

impl<G> Eulerian for G where
    G: AdjacencyList + GraphEdgeEditing + GraphType<Dir = Undirected> + Clone
{
}

/// Pairs up the odd-degree nodes at minimum total shortest-path distance.
///
/// The pairing is a minimum-weight perfect matching on the complete graph
/// over `odd`, which is reduced to an assignment problem on a bipartite
/// mirror: left node `i` and right node `k + j` are connected with the
/// shortest-path distance of `odd[i]` and `odd[j]`. An optimal assignment
/// of the mirror is symmetric up to ties; mutual pairs are taken as-is and
/// the few tie leftovers are matched greedily by distance.
fn pair_odd_vertices<G>(graph: &G, odd: &[Node]) -> Result<Vec<(Node, Node)>, GraphError>
where
    G: AdjacencyList,
{
    let k = odd.len();
    debug_assert!(k % 2 == 0 && k >= 2);

    let matrix = graph.floyd_warshall();

    let mut mirror = UndirectedGraph::new(2 * k as NumNodes);
    for i in 0..k {
        for j in 0..k {
            if i == j {
                continue;
            }
            if let Some(d) = matrix.get(odd[i], odd[j]) {
                mirror.add_edge(i as Node, (k + j) as Node, d);
            }
        }
    }

    let matching = mirror.kuhn_munkres(Objective::Minimize)?;

    let mut partner: Vec<Option<usize>> = vec![None; k];
    for &(x, y, _) in matching.pairs() {
        partner[x as usize] = Some(y as usize - k);
    }

    let mut paired = vec![false; k];
    let mut pairs = Vec::with_capacity(k / 2);
    for i in 0..k {
        if paired[i] {
            continue;
        }
        if let Some(j) = partner[i] {
            if j != i && !paired[j] && partner[j] == Some(i) {
                paired[i] = true;
                paired[j] = true;
                pairs.push((odd[i], odd[j]));
            }
        }
    }

    // ties in the assignment can leave a rest, close it greedily by distance
    let mut rest = (0..k).filter(|&i| !paired[i]).collect_vec();
    while let Some(i) = rest.pop() {
        let nearest = rest
            .iter()
            .enumerate()
            .filter_map(|(pos, &j)| Some((pos, matrix.get(odd[i], odd[j])?)))
            .min_by_key(|&(_, d)| d);

        let Some((pos, _)) = nearest else {
            return Err(GraphError::Unreachable {
                src: odd[i],
                dest: odd[*rest.first().unwrap_or(&i)],
            });
        };

        let j = rest.swap_remove(pos);
        pairs.push((odd[i], odd[j]));
    }

    Ok(pairs)
}

#[cfg(test)]
mod test {
    use super::*;
    use fxhash::FxHashMap;

    /// Checks that `path` starts at `src`, walks only existing edges,
    /// crosses every edge of `graph` exactly `multiplicity` times at
    /// minimum, and accumulates distances hop by hop
    fn assert_walk_covers(graph: &UndirectedGraph, path: &Path, src: Node) {
        assert_eq!(path.source(), src);

        let mut used: FxHashMap<(Node, Node), usize> = FxHashMap::default();
        let mut last_dist = 0;
        for (s1, s2) in path.steps().iter().tuple_windows() {
            let hop = s2.dist - last_dist;
            last_dist = s2.dist;
            assert!(hop >= 0);

            let key = (s1.node.min(s2.node), s1.node.max(s2.node));
            *used.entry(key).or_default() += 1;
        }

        for e in graph.lines() {
            let e = e.normalized();
            assert!(
                *used.get(&(e.0, e.1)).unwrap_or(&0) >= 1,
                "edge {e} never walked"
            );
        }
    }

    #[test]
    fn hierholzer_closed_circuit() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 2), (2, 0, 3)]);

        let path = graph.hierholzer(0).unwrap();
        assert_eq!(path.source(), 0);
        assert_eq!(path.target(), 0);
        assert_eq!(path.number_of_hops(), 3);
        assert_eq!(path.total_dist(), 6);
        assert_walk_covers(&graph, &path, 0);
    }

    #[test]
    fn hierholzer_open_path() {
        // 0 and 3 are odd
        let graph = UndirectedGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]);

        let path = graph.hierholzer(0).unwrap();
        assert_eq!(path.target(), 3);
        assert_eq!(path.number_of_hops(), 3);
        assert_eq!(path.total_dist(), 3);
    }

    #[test]
    fn hierholzer_splices_subtours() {
        // two triangles sharing node 0
        let graph = UndirectedGraph::from_edges(
            5,
            [
                (0, 1, 1),
                (1, 2, 1),
                (2, 0, 1),
                (0, 3, 1),
                (3, 4, 1),
                (4, 0, 1),
            ],
        );

        let path = graph.hierholzer(0).unwrap();
        assert_eq!(path.number_of_hops(), 6);
        assert_eq!(path.total_dist(), 6);
        assert_eq!(path.target(), 0);
        assert_walk_covers(&graph, &path, 0);
    }

    #[test]
    fn hierholzer_rejects_four_odd_nodes() {
        // star of three edges plus one more: nodes 1..4 odd
        let graph = UndirectedGraph::from_edges(5, [(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1)]);

        assert!(matches!(
            graph.hierholzer(1),
            Err(GraphError::NotEulerian { remaining: 4 })
        ));
    }

    #[test]
    fn hierholzer_rejects_disconnected_edges() {
        let graph = UndirectedGraph::from_edges(4, [(0, 1, 1), (1, 0, 1), (2, 3, 1), (3, 2, 1)]);

        assert!(matches!(
            graph.hierholzer(0),
            Err(GraphError::NotEulerian { remaining: 2 })
        ));
    }

    #[test]
    fn isolated_start_node() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 1)]);

        assert_eq!(graph.hierholzer(2), Err(GraphError::IsolatedNode(2)));
        assert_eq!(graph.fleury(2), Err(GraphError::IsolatedNode(2)));
        assert_eq!(graph.chinese_postman(2), Err(GraphError::IsolatedNode(2)));
    }

    #[test]
    fn fleury_avoids_bridges() {
        // two triangles joined by the bridge (2,3)
        let graph = UndirectedGraph::from_edges(
            6,
            [
                (0, 1, 1),
                (1, 2, 1),
                (2, 0, 1),
                (2, 3, 9),
                (3, 4, 1),
                (4, 5, 1),
                (5, 3, 1),
            ],
        );

        let path = graph.fleury(2).unwrap();
        assert_eq!(path.number_of_hops(), 7);
        assert_eq!(path.total_dist(), 15);
        assert_eq!(path.target(), 3);
        assert_walk_covers(&graph, &path, 2);
    }

    #[test]
    fn fleury_matches_hierholzer_on_circuit() {
        let graph = UndirectedGraph::from_edges(
            4,
            [(0, 1, 2), (1, 2, 2), (2, 3, 2), (3, 0, 2)],
        );

        let f = graph.fleury(1).unwrap();
        let h = graph.hierholzer(1).unwrap();
        assert_eq!(f.total_dist(), h.total_dist());
        assert_eq!(f.number_of_hops(), h.number_of_hops());
    }

    #[test]
    fn postman_on_eulerian_graph_is_plain_walk() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 2), (2, 0, 3)]);

        let tour = graph.chinese_postman(1).unwrap();
        assert_eq!(tour.total_dist(), 6);
        assert_eq!(tour.number_of_hops(), 3);
    }

    #[test]
    fn postman_doubles_the_cheap_connection() {
        // path 0 -(1)- 1 -(2)- 2, start in the middle: 0 and 2 are odd and
        // both pairing paths run through the start node
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 2)]);

        let tour = graph.chinese_postman(1).unwrap();
        assert_eq!(tour.total_dist(), 6);
        assert_eq!(tour.number_of_hops(), 4);
        assert_eq!(tour.target(), 1);
        assert_walk_covers(&graph, &tour, 1);
    }

    #[test]
    fn postman_with_four_odd_nodes() {
        //   1 --- 2
        //   |  X  |     complete graph on {1,2,3,4} has all degrees 3;
        //   3 --- 4     node 0 hangs off node 1 twice to stay even
        let graph = UndirectedGraph::from_edges(
            5,
            [
                (1, 2, 1),
                (1, 3, 1),
                (1, 4, 1),
                (2, 3, 1),
                (2, 4, 1),
                (3, 4, 1),
                (0, 1, 1),
                (0, 1, 1),
            ],
        );

        let tour = graph.chinese_postman(0).unwrap();
        // 8 edges of total weight 8 plus two doubled pairing paths of length 1
        assert_eq!(tour.total_dist(), 10);
        assert_walk_covers(&graph, &tour, 0);
        assert_eq!(tour.target(), 0);
    }

    #[test]
    fn postman_open_path_from_odd_start() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 2)]);

        // start is odd, so the plain Euler path suffices
        let tour = graph.chinese_postman(0).unwrap();
        assert_eq!(tour.total_dist(), 3);
        assert_eq!(tour.number_of_hops(), 2);
    }

    #[test]
    fn postman_on_disconnected_graph_fails() {
        let graph = UndirectedGraph::from_edges(4, [(0, 1, 1), (2, 3, 1)]);

        assert_eq!(
            graph.chinese_postman(0),
            Err(GraphError::Unreachable { src: 0, dest: 2 })
        );
    }
}
