/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly
manipulate node values without abstracting over them.
*/

use bitvec::prelude::*;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// A fixed-capacity BitSet over Nodes.
///
/// Thin wrapper around a `BitVec` that speaks in `Node`-values so callers
/// never have to cast at the call-site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBitSet {
    bits: BitVec,
}

impl NodeBitSet {
    /// Creates an empty bitset with capacity for `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            bits: bitvec![0; n as usize],
        }
    }

    /// Creates a bitset with capacity for `n` nodes and all given bits set
    pub fn new_with_bits_set<I: IntoIterator<Item = Node>>(n: NumNodes, set_bits: I) -> Self {
        let mut bs = Self::new(n);
        for u in set_bits {
            bs.set_bit(u);
        }
        bs
    }

    /// Number of nodes the bitset can hold
    pub fn capacity(&self) -> NumNodes {
        self.bits.len() as NumNodes
    }

    /// Sets bit `u` and returns *true* if it was set before
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.bits.replace(u as usize, true)
    }

    /// Clears bit `u` and returns *true* if it was set before
    pub fn clear_bit(&mut self, u: Node) -> bool {
        self.bits.replace(u as usize, false)
    }

    /// Returns *true* if bit `u` is set
    pub fn get_bit(&self, u: Node) -> bool {
        self.bits[u as usize]
    }

    /// Clears all bits
    pub fn clear_all(&mut self) {
        self.bits.fill(false);
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.bits.count_ones() as NumNodes
    }

    /// Returns *true* if no bit is set
    pub fn are_all_unset(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterates over all set bits in increasing order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits.iter_ones().map(|u| u as Node)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn set_and_clear() {
        let mut bs = NodeBitSet::new(10);
        assert!(bs.are_all_unset());

        assert!(!bs.set_bit(3));
        assert!(bs.set_bit(3));
        assert!(bs.get_bit(3));
        assert_eq!(bs.cardinality(), 1);

        assert!(bs.clear_bit(3));
        assert!(!bs.clear_bit(3));
        assert!(bs.are_all_unset());
    }

    #[test]
    fn iter_set_bits() {
        let bs = NodeBitSet::new_with_bits_set(10, [7, 2, 5]);
        assert_eq!(bs.iter_set_bits().collect_vec(), vec![2, 5, 7]);
    }
}
