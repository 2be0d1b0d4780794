/*!
# Utils

Helper data structures shared by the algorithm modules.
*/

mod disjoint;

pub use disjoint::DisjointSet;
