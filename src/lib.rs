//! Resizable coordinate maps.
//!
//! Store any payload type in a [`QuadMap`](crate::QuadMap), [`OctoMap`](crate::OctoMap), or
//! [`HexaMap`](crate::HexaMap), all of which are specific instances of the generic
//! [`CMap`](crate::CMap). A [`CMap`](crate::CMap) represents a map from unsigned integer
//! coordinates `[A; DIM]` to `T`, backed by a depth-bounded `2^DIM`-ary tree that discriminates
//! one coordinate bit per level. Colliding inserts are fused through the caller's
//! [`Merge`](crate::Merge) operation instead of overwriting, and the map as a whole can be
//! [`resize`](crate::CMap::resize)d: every coordinate axis is halved in place and entries whose
//! quotient coordinates coincide are merged, so repeated resizes coarsen the stored point set
//! level by level.
//!
//! # Design Advantages
//!
//! - Since a [`CMap`](crate::CMap) has its own internal arena, all tree links are plain `u32`
//!   indices that are completely local to the data structure; parent back-references are
//!   non-owning indices, so ownership stays strictly tree-shaped.
//! - A leaf's bucket holds up to `2^DIM` entries inline, so leaves never allocate separately and
//!   a lookup touches at most one bucket after the bit-wise descent.
//! - Removals re-collapse the tree: any subtree whose entry count fits in a single bucket is
//!   pruned back into one leaf, so the tree never degrades into long chains of sparse nodes.
//! - By implementing [`Axis`](crate::Axis) for a custom scalar, the coordinate width can be
//!   extended beyond the primitive integers; a two-word [`U256`](crate::U256) is bundled.
//!
//! # Performance
//!
//! - random access by coordinate: O(depth), where depth shrinks by one per resize
//! - insert: O(depth) plus a bucket scan of at most `2^DIM` entries
//! - resize: O(nodes)
//! - iteration: O(nodes)
//!
//! # Example
//!
//! ```
//! use cmap::{Merge, OctoMap};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Mass(u64);
//!
//! impl Merge for Mass {
//!     fn merge(&mut self, incoming: Self) {
//!         self.0 += incoming.0;
//!     }
//! }
//!
//! let mut map = OctoMap::<u32, Mass>::new();
//! map.insert([1, 2, 3], Mass(10));
//! map.insert([1, 2, 3], Mass(5));
//! map.insert([8, 0, 0], Mass(1));
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(&[1, 2, 3]), Some(&Mass(15)));
//!
//! // Halve every coordinate axis; colliding quotients fuse.
//! map.resize();
//! assert_eq!(map.get(&[0, 1, 1]), Some(&Mass(15)));
//! assert_eq!(map.get(&[4, 0, 0]), Some(&Mass(1)));
//! assert_eq!(map.num_resizes(), 1);
//! ```

mod allocator;
mod axis;
mod iter;
mod node;
mod tree;
mod u256;

pub use allocator::{AllocPtr, EMPTY_PTR};
pub use axis::Axis;
pub use iter::{Cursor, Iter, IterMut};
pub use tree::CMap;
pub use u256::U256;

/// A bit position within a coordinate axis. The root discriminates the most significant bit
/// (`Axis::BITS - 1`) and each level below discriminates the next lower bit.
pub type Level = u8;

/// A linear index of a child relative to its parent.
pub type ChildIndex = u8;

/// Folds one payload into another when two entries collide on the same coordinate.
///
/// The container calls `merge` with the already-stored payload as `self` and the newer payload
/// as `incoming`, both on colliding inserts and when [`resize`](crate::CMap::resize) fuses
/// entries whose halved coordinates coincide. During a resize, entries fuse in bucket order and
/// the earlier entry is always the survivor, so a non-commutative `merge` sees its operands in
/// first-stored-first order.
pub trait Merge {
    /// Folds `incoming` into `self`.
    fn merge(&mut self, incoming: Self);
}

/// A quadtree-backed map over 2-dimensional coordinates.
pub type QuadMap<A, T> = CMap<A, T, 2, 4>;

/// An octree-backed map over 3-dimensional coordinates.
pub type OctoMap<A, T> = CMap<A, T, 3, 8>;

/// A hexadecatree-backed map over 4-dimensional coordinates.
pub type HexaMap<A, T> = CMap<A, T, 4, 16>;
