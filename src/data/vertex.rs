use super::Point;

/// A ring vertex with its 1-based position in traversal order.
///
/// Intermediate shape between ring indexing and renumbering; within one
/// polygon the indices cover `[1, N]` with no gaps or duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedVertex<T> {
  pub index: usize,
  pub point: Point<T, 2>,
}

/// A finished output point: final (rotated) index, owning polygon id,
/// and coordinate. The vertex with the maximum Y coordinate of its
/// polygon carries index 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPoint<P, T> {
  pub index: usize,
  pub polygon_id: P,
  pub point: Point<T, 2>,
}
