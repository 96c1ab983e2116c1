#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A ring has fewer than three distinct vertices.
  InsufficientVertices,
  /// Nothing in the input collection could be processed.
  NoValidPolygons,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::NoValidPolygons => write!(f, "No valid polygons found"),
    }
  }
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

macro_rules! fixed_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }
    )*
  };
}

fixed_precision!(i8, i16, i32, i64, i128, isize);
fixed_precision!(u8, u16, u32, u64, u128, usize);

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }
    )*
  };
}

wrapped_floating_precision!(
  ordered_float::OrderedFloat<f32>,
  ordered_float::OrderedFloat<f64>,
  ordered_float::NotNan<f32>,
  ordered_float::NotNan<f64>
);

#[cfg(test)]
pub mod testing;
