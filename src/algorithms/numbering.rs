use std::cmp::Ordering;

use crate::data::{IndexedVertex, Ring};
use crate::{Error, TotalOrd};

/// Assigns 1-based indices to the ring's vertices in traversal order.
///
/// The closing duplicate never receives an index (the ring does not store
/// it). Rings with fewer than three distinct vertices are rejected.
pub fn index_ring<T>(ring: &Ring<T>) -> Result<Vec<IndexedVertex<T>>, Error>
where
  T: TotalOrd + Clone,
{
  ring.validate()?;
  Ok(
    ring
      .iter()
      .cloned()
      .enumerate()
      .map(|(nth, point)| IndexedVertex {
        index: nth + 1,
        point,
      })
      .collect(),
  )
}

/// Rotation amount that moves the topmost vertex to index 1.
///
/// Ties at the maximum Y coordinate go to the earliest vertex in ring
/// order; the scan below only replaces the candidate on a strictly
/// greater Y.
///
/// # Panics
///
/// Panics if `vertices` is empty.
pub fn anchor_shift<T>(vertices: &[IndexedVertex<T>]) -> usize
where
  T: TotalOrd,
{
  let mut top = &vertices[0];
  for vertex in &vertices[1..] {
    if vertex.point.y_coord().total_cmp(top.point.y_coord()) == Ordering::Greater {
      top = vertex;
    }
  }
  // 1-based indices keep the difference non-negative; the absolute value
  // pins the result should an out-of-range index ever get through.
  (top.index as isize - 1).unsigned_abs()
}

/// Rotates a 1-based ring index down by `shift`, wrapping into `[1, count]`.
///
/// Zero is never a valid index: an exact zero wraps to `count`. For a
/// fixed `shift` the mapping is a bijection on `[1, count]`.
pub fn shifted_index(old_index: usize, shift: usize, count: usize) -> usize {
  debug_assert!(1 <= old_index && old_index <= count);
  // Single wrap only. A shift derived from a 1-based index cannot reach
  // `count`.
  debug_assert!(shift < count);
  let new_index = old_index as isize - shift as isize;
  if new_index <= 0 {
    (new_index + count as isize) as usize
  } else {
    new_index as usize
  }
}

/// Per-polygon pipeline: index the ring, locate the topmost vertex,
/// rotate all indices so that vertex becomes 1.
///
/// Vertices stay in ring-traversal order; only the index values are
/// rewritten.
pub fn renumber_ring<T>(ring: &Ring<T>) -> Result<Vec<IndexedVertex<T>>, Error>
where
  T: TotalOrd + Clone,
{
  let mut vertices = index_ring(ring)?;
  let shift = anchor_shift(&vertices);
  let count = vertices.len();
  for vertex in vertices.iter_mut() {
    vertex.index = shifted_index(vertex.index, shift, count);
  }
  Ok(vertices)
}
