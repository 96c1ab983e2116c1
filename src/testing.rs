// This module contains strategies for:
//  * points
//  * rings (valid and deliberately degenerate)
//  * feature sets with mixed geometry kinds
use crate::data::{Crs, Feature, FeatureSet, Geometry, Point, Ring};

use ordered_float::NotNan;
use proptest::collection::vec;
use proptest::prelude::*;
use std::convert::TryFrom;

// Arbitrary isn't defined for NotNan.
pub fn any_nn() -> impl Strategy<Value = Point<NotNan<f64>, 2>> {
  any::<(f64, f64)>().prop_filter_map("Check for NaN", |(x, y)| {
    Point::<NotNan<f64>, 2>::try_from(Point::new([x, y])).ok()
  })
}

fn any_i64() -> impl Strategy<Value = Point<i64, 2>> {
  // Small coordinate range so collisions (and thus tie-breaks) actually
  // show up in the generated rings.
  any::<(i8, i8)>().prop_map(|(x, y)| Point::new([i64::from(x), i64::from(y)]))
}

/// Rings that pass validation: at least three distinct vertices.
pub fn ring_nn() -> impl Strategy<Value = Ring<NotNan<f64>>> {
  vec(any_nn(), 3..32).prop_filter_map("Too few distinct vertices", |points| {
    let ring = Ring::new_unchecked(points);
    if ring.validate().is_ok() {
      Some(ring)
    } else {
      None
    }
  })
}

/// Valid integer rings, duplicates and ties included.
pub fn ring_i64() -> impl Strategy<Value = Ring<i64>> {
  vec(any_i64(), 3..32).prop_filter_map("Too few distinct vertices", |points| {
    let ring = Ring::new_unchecked(points);
    if ring.validate().is_ok() {
      Some(ring)
    } else {
      None
    }
  })
}

// May be degenerate on purpose; extraction has to cope.
fn raw_ring_i64() -> impl Strategy<Value = Ring<i64>> {
  vec(any_i64(), 1..12).prop_map(Ring::new_unchecked)
}

fn geometry_i64() -> impl Strategy<Value = Geometry<i64>> {
  prop_oneof![
    any_i64().prop_map(Geometry::Point),
    vec(any_i64(), 2..6).prop_map(Geometry::Line),
    raw_ring_i64().prop_map(Geometry::Polygon),
    vec(raw_ring_i64(), 1..3).prop_map(Geometry::MultiPolygon),
  ]
}

/// Mixed feature sets: polygons next to skippable geometries, with and
/// without a CRS tag.
pub fn feature_set_i64() -> impl Strategy<Value = FeatureSet<u32, i64>> {
  let features = vec(
    (any::<u32>(), geometry_i64()).prop_map(|(id, geometry)| Feature::new(id, geometry)),
    0..8,
  );
  let crs = proptest::option::of(any::<u16>().prop_map(|n| Crs::from(format!("EPSG:{}", n))));
  (features, crs).prop_map(|(features, crs)| FeatureSet { features, crs })
}
