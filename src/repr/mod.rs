/*!
# Graph Representations

Both representations store edge records in a **line arena**: a slab of
`LineRecord`s addressed by stable `LineId` handles with a free list for
reuse. Adjacency chains are `Vec<LineId>` per node, kept in ascending
weight order. A new record is spliced in *before* the first entry of equal
or greater weight, so among equal weights the youngest edge comes first.

- [`DirectedGraph`] links each record into the source's out-chain and the
  target's in-chain.
- [`UndirectedGraph`] links each record into both endpoints' chains
  (twice into the same chain for self-loops).
*/

use crate::*;

mod directed;
mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

/// Physical storage of one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineRecord {
    pub(crate) u: Node,
    pub(crate) v: Node,
    pub(crate) weight: Weight,
}

/// Slab of edge records with handle reuse
#[derive(Debug, Clone, Default)]
pub(crate) struct LineArena {
    slots: Vec<Option<LineRecord>>,
    free: Vec<LineId>,
}

impl LineArena {
    pub(crate) fn alloc(&mut self, rec: LineRecord) -> LineId {
        if let Some(id) = self.free.pop() {
            self.slots[id as usize] = Some(rec);
            id
        } else {
            self.slots.push(Some(rec));
            (self.slots.len() - 1) as LineId
        }
    }

    /// ** Panics if the handle is not live **
    pub(crate) fn release(&mut self, id: LineId) -> LineRecord {
        let rec = self.slots[id as usize].take();
        self.free.push(id);
        match rec {
            Some(rec) => rec,
            None => panic!("released dead line handle {id}"),
        }
    }

    /// ** Panics if the handle is not live **
    pub(crate) fn get(&self, id: LineId) -> &LineRecord {
        match self.slots[id as usize].as_ref() {
            Some(rec) => rec,
            None => panic!("accessed dead line handle {id}"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Iterates over all live records
    pub(crate) fn iter(&self) -> impl Iterator<Item = (LineId, &LineRecord)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| Some((id as LineId, slot.as_ref()?)))
    }
}

/// Splices `id` into `chain` before the first entry of equal or greater weight
pub(crate) fn splice_by_weight(chain: &mut Vec<LineId>, arena: &LineArena, id: LineId) {
    let w = arena.get(id).weight;
    let pos = chain.partition_point(|&x| arena.get(x).weight < w);
    chain.insert(pos, id);
}

/// Removes `id` from `chain`.
/// ** Panics if the chain does not hold `id` **
pub(crate) fn unlink(chain: &mut Vec<LineId>, id: LineId) {
    let pos = chain.iter().position(|&x| x == id);
    match pos {
        Some(pos) => {
            chain.remove(pos);
        }
        None => panic!("chain does not hold line handle {id}"),
    }
}
