/*!
# Binomial Heap

Addressable min-heap keyed by distance, used as the frontier of the
tree-growing algorithms in [`algo::shortest_path`](crate::algo::shortest_path).

Binomial trees live in an arena of slots addressed by `SlotId`; the root
list is kept in ascending degree order and trees of equal degree are linked
pairwise after every structural change. A per-node position index maps node
ids to their current slot, which makes [`decrease_key`](BinomialHeap::decrease_key)
an O(log n) bubble-up of item payloads (the slot structure never moves,
only the items swap with their parents).
*/

use crate::{HeapKeyError, Node, NumNodes, Weight};

/// Payload of one heap entry: the node, its current key, and the
/// predecessor that proposed this key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapItem {
    pub node: Node,
    pub dist: Weight,
    pub pred: Option<Node>,
}

type SlotId = u32;

const NIL: SlotId = SlotId::MAX;

#[derive(Debug, Clone)]
struct Slot {
    item: HeapItem,
    degree: u32,
    child: SlotId,
    parent: SlotId,
    sibling: SlotId,
}

/// Addressable binomial min-heap over at most one entry per node
#[derive(Debug, Clone)]
pub struct BinomialHeap {
    slots: Vec<Slot>,
    free: Vec<SlotId>,
    head: SlotId,
    index: Vec<SlotId>,
    len: usize,
}

impl BinomialHeap {
    /// Creates an empty heap able to hold the nodes `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: NIL,
            index: vec![NIL; n as usize],
            len: 0,
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns *true* if the node currently has an entry
    pub fn contains(&self, node: Node) -> bool {
        self.index[node as usize] != NIL
    }

    /// Returns the current key of a node, if it has an entry
    pub fn dist_of(&self, node: Node) -> Option<Weight> {
        let slot = self.index[node as usize];
        (slot != NIL).then(|| self.slots[slot as usize].item.dist)
    }

    /// Inserts a new entry, O(log n).
    /// ** Panics if the node already has an entry **
    pub fn push(&mut self, item: HeapItem) {
        assert!(
            !self.contains(item.node),
            "node {} already in heap",
            item.node
        );

        let slot = self.alloc(item);
        self.index[item.node as usize] = slot;
        self.len += 1;

        let mut roots = self.take_roots();
        roots.push(slot);
        self.rebuild(roots);
    }

    /// Removes and returns the entry with the smallest key
    pub fn pop_min(&mut self) -> Option<HeapItem> {
        if self.head == NIL {
            return None;
        }

        let mut min = self.head;
        let mut cur = self.slots[min as usize].sibling;
        while cur != NIL {
            if self.slots[cur as usize].item.dist < self.slots[min as usize].item.dist {
                min = cur;
            }
            cur = self.slots[cur as usize].sibling;
        }

        let mut roots = self.take_roots();
        roots.retain(|&s| s != min);

        // children of min re-enter the root list as orphans
        let mut child = self.slots[min as usize].child;
        while child != NIL {
            let next = self.slots[child as usize].sibling;
            self.slots[child as usize].parent = NIL;
            self.slots[child as usize].sibling = NIL;
            roots.push(child);
            child = next;
        }

        self.rebuild(roots);

        let item = self.slots[min as usize].item;
        self.index[item.node as usize] = NIL;
        self.free.push(min);
        self.len -= 1;
        Some(item)
    }

    /// Lowers the key of an existing entry and records the predecessor that
    /// proposed the new key. On failure the heap is left untouched.
    pub fn decrease_key(
        &mut self,
        node: Node,
        dist: Weight,
        pred: Option<Node>,
    ) -> Result<(), HeapKeyError> {
        let slot = self.index[node as usize];
        if slot == NIL {
            return Err(HeapKeyError::Absent(node));
        }

        let current = self.slots[slot as usize].item.dist;
        if dist >= current {
            return Err(HeapKeyError::NotDecreasing {
                node,
                current,
                new: dist,
            });
        }

        self.slots[slot as usize].item = HeapItem { node, dist, pred };

        // bubble the payload up, the tree structure stays put
        let mut cur = slot;
        loop {
            let parent = self.slots[cur as usize].parent;
            if parent == NIL
                || self.slots[parent as usize].item.dist <= self.slots[cur as usize].item.dist
            {
                break;
            }

            let item = self.slots[cur as usize].item;
            self.slots[cur as usize].item = self.slots[parent as usize].item;
            self.slots[parent as usize].item = item;

            self.index[self.slots[cur as usize].item.node as usize] = cur;
            self.index[self.slots[parent as usize].item.node as usize] = parent;

            cur = parent;
        }

        Ok(())
    }

    fn alloc(&mut self, item: HeapItem) -> SlotId {
        let slot = Slot {
            item,
            degree: 0,
            child: NIL,
            parent: NIL,
            sibling: NIL,
        };
        if let Some(id) = self.free.pop() {
            self.slots[id as usize] = slot;
            id
        } else {
            self.slots.push(slot);
            (self.slots.len() - 1) as SlotId
        }
    }

    /// Detaches the current root list and returns it in order
    fn take_roots(&mut self) -> Vec<SlotId> {
        let mut roots = Vec::new();
        let mut cur = self.head;
        while cur != NIL {
            roots.push(cur);
            cur = self.slots[cur as usize].sibling;
        }
        self.head = NIL;
        roots
    }

    /// Makes `child` the leftmost child of `parent`
    fn link_under(&mut self, parent: SlotId, child: SlotId) {
        self.slots[child as usize].parent = parent;
        self.slots[child as usize].sibling = self.slots[parent as usize].child;
        self.slots[parent as usize].child = child;
        self.slots[parent as usize].degree += 1;
    }

    /// Restores the binomial shape: sorts the given roots by degree, chains
    /// them as the new root list, and links trees of equal degree pairwise
    fn rebuild(&mut self, mut roots: Vec<SlotId>) {
        if roots.is_empty() {
            self.head = NIL;
            return;
        }

        roots.sort_by_key(|&s| self.slots[s as usize].degree);

        self.head = roots[0];
        for pair in roots.windows(2) {
            self.slots[pair[0] as usize].sibling = pair[1];
        }
        let last = roots[roots.len() - 1];
        self.slots[last as usize].sibling = NIL;

        let mut prev = NIL;
        let mut cur = self.head;
        loop {
            let next = self.slots[cur as usize].sibling;
            if next == NIL {
                break;
            }

            let after_next = self.slots[next as usize].sibling;
            let same_degree =
                self.slots[cur as usize].degree == self.slots[next as usize].degree;
            let three_in_a_row = after_next != NIL
                && self.slots[after_next as usize].degree == self.slots[next as usize].degree;

            if !same_degree || three_in_a_row {
                prev = cur;
                cur = next;
            } else if self.slots[cur as usize].item.dist <= self.slots[next as usize].item.dist {
                self.slots[cur as usize].sibling = after_next;
                self.link_under(cur, next);
            } else {
                if prev == NIL {
                    self.head = next;
                } else {
                    self.slots[prev as usize].sibling = next;
                }
                self.link_under(next, cur);
                cur = next;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn item(node: Node, dist: Weight) -> HeapItem {
        HeapItem {
            node,
            dist,
            pred: None,
        }
    }

    #[test]
    fn pops_in_sorted_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 2, 10, 100, 500] {
            let mut dists: Vec<Weight> = (0..n)
                .map(|_| rng.random_range(-1000..1000))
                .collect_vec();

            let mut heap = BinomialHeap::new(n);
            for (node, &dist) in dists.iter().enumerate() {
                heap.push(item(node as Node, dist));
            }
            assert_eq!(heap.len(), n as usize);

            let popped = std::iter::from_fn(|| heap.pop_min())
                .map(|it| it.dist)
                .collect_vec();

            dists.sort_unstable();
            assert_eq!(popped, dists);
            assert!(heap.is_empty());
        }
    }

    #[test]
    fn decrease_key_reorders() {
        let mut heap = BinomialHeap::new(5);
        for node in 0..5 {
            heap.push(item(node, 10 + node as Weight));
        }

        heap.decrease_key(4, -1, Some(0)).unwrap();
        heap.decrease_key(3, 5, None).unwrap();

        let popped = std::iter::from_fn(|| heap.pop_min()).collect_vec();
        assert_eq!(
            popped,
            vec![
                HeapItem {
                    node: 4,
                    dist: -1,
                    pred: Some(0)
                },
                item(3, 5),
                item(0, 10),
                item(1, 11),
                item(2, 12),
            ]
        );
    }

    #[test]
    fn decrease_key_failures_leave_heap_untouched() {
        let mut heap = BinomialHeap::new(4);
        heap.push(item(0, 10));
        heap.push(item(1, 20));

        assert_eq!(heap.decrease_key(2, 5, None), Err(HeapKeyError::Absent(2)));
        assert_eq!(
            heap.decrease_key(1, 20, None),
            Err(HeapKeyError::NotDecreasing {
                node: 1,
                current: 20,
                new: 20
            })
        );
        assert_eq!(
            heap.decrease_key(1, 25, None),
            Err(HeapKeyError::NotDecreasing {
                node: 1,
                current: 20,
                new: 25
            })
        );

        assert_eq!(heap.dist_of(0), Some(10));
        assert_eq!(heap.dist_of(1), Some(20));
        assert_eq!(heap.len(), 2);

        assert_eq!(heap.pop_min(), Some(item(0, 10)));
        assert_eq!(heap.pop_min(), Some(item(1, 20)));
        assert_eq!(heap.pop_min(), None);
    }

    #[test]
    fn index_survives_mixed_operations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let n: NumNodes = 64;

        let mut heap = BinomialHeap::new(n);
        let mut reference: Vec<Option<Weight>> = vec![None; n as usize];

        for _ in 0..2000 {
            let node = rng.random_range(0..n);
            match rng.random_range(0..3) {
                0 if reference[node as usize].is_none() => {
                    let dist = rng.random_range(0..10_000);
                    heap.push(item(node, dist));
                    reference[node as usize] = Some(dist);
                }
                1 => {
                    if let Some(cur) = reference[node as usize] {
                        let dist = rng.random_range((cur - 100)..cur);
                        heap.decrease_key(node, dist, None).unwrap();
                        reference[node as usize] = Some(dist);
                    }
                }
                _ => {
                    if let Some(min) = heap.pop_min() {
                        let expected = reference
                            .iter()
                            .filter_map(|d| *d)
                            .min()
                            .unwrap();
                        assert_eq!(min.dist, expected);
                        assert_eq!(reference[min.node as usize], Some(min.dist));
                        reference[min.node as usize] = None;
                    }
                }
            }

            for node in 0..n {
                assert_eq!(heap.dist_of(node), reference[node as usize]);
            }
        }
    }

    #[test]
    fn push_after_pop_reuses_slots() {
        let mut heap = BinomialHeap::new(8);
        let mut order = (0..8 as Node).collect_vec();
        order.shuffle(&mut Pcg64Mcg::seed_from_u64(11));

        for &node in &order {
            heap.push(item(node, node as Weight));
        }
        for node in 0..4 {
            assert_eq!(heap.pop_min(), Some(item(node, node as Weight)));
        }
        for node in 0..4 {
            heap.push(item(node, 100 + node as Weight));
        }

        let popped = std::iter::from_fn(|| heap.pop_min())
            .map(|it| it.node)
            .collect_vec();
        assert_eq!(popped, vec![4, 5, 6, 7, 0, 1, 2, 3]);
    }
}
