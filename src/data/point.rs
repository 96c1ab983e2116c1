use array_init::{array_init, try_array_init};
use ordered_float::{FloatCore, FloatIsNan, NotNan};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::Deref;
use std::ops::Index;

use crate::TotalOrd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [T; N]) -> Point<NotNan<T>, N>
  where
    T: FloatCore,
  {
    Point::new(array_init(|i| NotNan::new(array[i]).unwrap()))
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

// Coordinate-wise lexicographic order. Used for counting distinct vertices.
impl<T: TotalOrd, const N: usize> TotalOrd for Point<T, N> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    for i in 0..N {
      match self.array[i].total_cmp(&other.array[i]) {
        Ordering::Equal => continue,
        ord => return ord,
      }
    }
    Ordering::Equal
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<const N: usize> TryFrom<Point<f64, N>> for Point<NotNan<f64>, N> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64, N>) -> Result<Point<NotNan<f64>, N>, FloatIsNan> {
    Ok(Point {
      array: try_array_init(|i| NotNan::try_from(point.array[i]))?,
    })
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accessors() {
    let pt = Point::new([3, 7]);
    assert_eq!(*pt.x_coord(), 3);
    assert_eq!(*pt.y_coord(), 7);
    assert_eq!(pt[1], 7);
    assert_eq!(pt.iter().sum::<i32>(), 10);
  }

  #[test]
  fn total_order_is_lexicographic() {
    let a = Point::new([0.0, 1.0]);
    let b = Point::new([0.0, 2.0]);
    assert_eq!(a.total_cmp(&b), Ordering::Less);
    assert_eq!(a.total_cmp(&a), Ordering::Equal);
    assert_eq!(b.total_cmp(&a), Ordering::Greater);
  }

  #[test]
  #[should_panic]
  fn new_nn_rejects_nan() {
    let _ = Point::new_nn([f64::NAN, 0.0]);
  }

  #[test]
  fn cast_between_scalars() {
    let pt = Point::new([1_i32, 2]);
    let as_f64: Point<f64, 2> = pt.cast(f64::from);
    assert_eq!(as_f64, Point::new([1.0, 2.0]));
  }
}
