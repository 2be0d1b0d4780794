/*!
All-pairs shortest distances via Floyd-Warshall.

The result is a dense n×n matrix of optional distances; unreachable pairs
stay `None`. Entries are stored as [`OptionalWeight`] so the matrix costs
one `i64` per pair instead of padding every entry to two.
*/

use super::*;

/// Dense matrix of pairwise distances; `None` marks unreachable pairs
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: NumNodes,
    dist: Vec<Option<OptionalWeight>>,
}

impl DistanceMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            n,
            dist: vec![None; (n as usize) * (n as usize)],
        }
    }

    #[inline]
    fn idx(&self, u: Node, v: Node) -> usize {
        (u as usize) * (self.n as usize) + (v as usize)
    }

    /// Number of nodes the matrix covers
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Distance from `u` to `v`, or `None` if `v` is unreachable from `u`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn get(&self, u: Node, v: Node) -> Option<Weight> {
        self.dist[self.idx(u, v)].map(|w| w.get())
    }

    fn set(&mut self, u: Node, v: Node, w: Weight) {
        let idx = self.idx(u, v);
        self.dist[idx] = OptionalWeight::new(w);
    }

    fn set_min(&mut self, u: Node, v: Node, w: Weight) {
        match self.get(u, v) {
            Some(cur) if cur <= w => {}
            _ => self.set(u, v, w),
        }
    }
}

/// Trait providing the all-pairs computation
pub trait AllPairs: AdjacencyList {
    /// Computes shortest distances between all node pairs, O(n³).
    /// The diagonal is 0; parallel edges are seeded with their minimum weight.
    /// Weights must be non-negative.
    fn floyd_warshall(&self) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::new(self.number_of_nodes());

        for u in self.vertices() {
            matrix.set(u, u, 0);
            for Link {
                node: v, weight, ..
            } in self.links_of(u)
            {
                matrix.set_min(u, v, weight);
            }
        }

        for k in self.vertices() {
            for i in self.vertices() {
                let Some(first) = matrix.get(i, k) else {
                    continue;
                };
                for j in self.vertices() {
                    let Some(second) = matrix.get(k, j) else {
                        continue;
                    };
                    matrix.set_min(i, j, first + second);
                }
            }
        }

        matrix
    }
}

impl<G> AllPairs for G where G: AdjacencyList {}
