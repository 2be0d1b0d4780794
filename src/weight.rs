/*!
# Edge Weights

Weights are signed 64-bit integers. Most algorithms accumulate weights along
paths, so `i64` leaves plenty of headroom before overflow becomes a concern.
*/

use std::num::NonZero;

/// Weight attached to every edge
pub type Weight = i64;

/// As `Option<Weight>` uses additional bytes for padding, it can be inefficient
/// since we often need a `Vec<Option<Weight>>` (e.g. the all-pairs distance
/// matrix). This instead uses the `NonZero`-Wrapper to assign a constant value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalWeightImpl<const N: Weight>(NonZero<Weight>);

/// `Weight::MIN` is safe to pick as the `None`-Value for distances
pub type OptionalWeight = OptionalWeightImpl<{ Weight::MIN }>;

impl<const N: Weight> OptionalWeightImpl<N> {
    /// Returns `Some(OptionalWeightImpl)` if `w != N` and `None` otherwise
    pub const fn new(w: Weight) -> Option<Self> {
        match NonZero::new(w ^ N) {
            Some(inner) => Some(OptionalWeightImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Weight-Value
    pub const fn get(&self) -> Weight {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn niche_roundtrip() {
        assert!(OptionalWeight::new(Weight::MIN).is_none());

        for w in [Weight::MIN + 1, -7, 0, 1, 42, Weight::MAX] {
            assert_eq!(OptionalWeight::new(w).map(|o| o.get()), Some(w));
        }

        assert_eq!(
            std::mem::size_of::<Option<OptionalWeight>>(),
            std::mem::size_of::<Weight>()
        );
    }
}
