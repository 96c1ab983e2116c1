use std::cmp::Ordering;

use super::Point;
use crate::{Error, TotalOrd};

/// Exterior ring of a polygon.
///
/// Vertices are stored in traversal order without the closing duplicate;
/// a ring given as `[a, b, c, a]` is stored as `[a, b, c]`. The winding
/// order of the input is preserved as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<T> {
  vertices: Vec<Point<T, 2>>,
}

impl<T> Ring<T> {
  /// Builds a ring and checks that it has at least three distinct vertices.
  pub fn new(vertices: Vec<Point<T, 2>>) -> Result<Ring<T>, Error>
  where
    T: TotalOrd + PartialEq,
  {
    let ring = Ring::new_unchecked(vertices);
    ring.validate()?;
    Ok(ring)
  }

  /// Builds a ring without validating it.
  ///
  /// The closing duplicate is still stripped when present.
  pub fn new_unchecked(mut vertices: Vec<Point<T, 2>>) -> Ring<T>
  where
    T: PartialEq,
  {
    if vertices.len() > 1 && vertices.first() == vertices.last() {
      vertices.pop();
    }
    Ring { vertices }
  }

  /// A ring is degenerate unless it has three or more distinct vertices.
  pub fn validate(&self) -> Result<(), Error>
  where
    T: TotalOrd,
  {
    let mut seen: Vec<&Point<T, 2>> = self.vertices.iter().collect();
    seen.sort_by(|a, b| a.total_cmp(b));
    seen.dedup_by(|a, b| a.total_cmp(b) == Ordering::Equal);
    if seen.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    Ok(())
  }

  /// Vertices in traversal order, closing duplicate excluded.
  pub fn vertices(&self) -> &[Point<T, 2>] {
    &self.vertices
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T, 2>> {
    self.vertices.iter()
  }

  /// Traversal order including the closing duplicate, for writers that
  /// expect `first == last`.
  pub fn closed_coords(&self) -> impl Iterator<Item = &Point<T, 2>> {
    self.vertices.iter().chain(self.vertices.first())
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }
}

impl<T: PartialEq> From<Vec<(T, T)>> for Ring<T> {
  fn from(coords: Vec<(T, T)>) -> Ring<T> {
    Ring::new_unchecked(coords.into_iter().map(Point::from).collect())
  }
}
