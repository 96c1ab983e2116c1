use super::{Point, Ring};

/// Opaque coordinate-reference-system tag. Carried from the input
/// collection to the output unchanged; never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crs(String);

impl Crs {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<String> for Crs {
  fn from(tag: String) -> Crs {
    Crs(tag)
  }
}

impl From<&str> for Crs {
  fn from(tag: &str) -> Crs {
    Crs(tag.to_owned())
  }
}

impl std::fmt::Display for Crs {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    write!(f, "{}", self.0)
  }
}

/// Decoded geometry of a single feature. Only `Polygon` carries enough
/// structure for vertex extraction; the other kinds exist so that mixed
/// collections can be walked and skipped without failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry<T> {
  Point(Point<T, 2>),
  Line(Vec<Point<T, 2>>),
  Polygon(Ring<T>),
  MultiPolygon(Vec<Ring<T>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
  Point,
  Line,
  Polygon,
  MultiPolygon,
}

impl<T> Geometry<T> {
  pub fn kind(&self) -> GeometryKind {
    match self {
      Geometry::Point(_) => GeometryKind::Point,
      Geometry::Line(_) => GeometryKind::Line,
      Geometry::Polygon(_) => GeometryKind::Polygon,
      Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
    }
  }
}

impl std::fmt::Display for GeometryKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      GeometryKind::Point => write!(f, "Point"),
      GeometryKind::Line => write!(f, "Line"),
      GeometryKind::Polygon => write!(f, "Polygon"),
      GeometryKind::MultiPolygon => write!(f, "MultiPolygon"),
    }
  }
}

/// One input record: an opaque identifier paired with its geometry.
///
/// The identifier type is caller-chosen (attribute value, row number,
/// uuid). It is cloned onto every extracted point of the feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<P, T> {
  pub id: P,
  pub geometry: Geometry<T>,
}

impl<P, T> Feature<P, T> {
  pub fn new(id: P, geometry: Geometry<T>) -> Feature<P, T> {
    Feature { id, geometry }
  }

  pub fn polygon(id: P, ring: Ring<T>) -> Feature<P, T> {
    Feature {
      id,
      geometry: Geometry::Polygon(ring),
    }
  }
}

/// A decoded feature collection plus its CRS tag.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet<P, T> {
  pub features: Vec<Feature<P, T>>,
  pub crs: Option<Crs>,
}

impl<P, T> FeatureSet<P, T> {
  pub fn new(features: Vec<Feature<P, T>>) -> FeatureSet<P, T> {
    FeatureSet {
      features,
      crs: None,
    }
  }

  pub fn with_crs(features: Vec<Feature<P, T>>, crs: Crs) -> FeatureSet<P, T> {
    FeatureSet {
      features,
      crs: Some(crs),
    }
  }

  pub fn len(&self) -> usize {
    self.features.len()
  }

  pub fn is_empty(&self) -> bool {
    self.features.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn geometry_kinds() {
    let ring: Ring<i64> = vec![(0, 0), (1, 0), (1, 1)].into();
    assert_eq!(Geometry::Polygon(ring.clone()).kind(), GeometryKind::Polygon);
    assert_eq!(
      Geometry::MultiPolygon(vec![ring]).kind(),
      GeometryKind::MultiPolygon
    );
    assert_eq!(
      Geometry::<i64>::Point(Point::new([0, 0])).kind(),
      GeometryKind::Point
    );
    assert_eq!(format!("{}", GeometryKind::MultiPolygon), "MultiPolygon");
  }

  #[test]
  fn crs_round_trip() {
    let crs = Crs::from("EPSG:25832");
    assert_eq!(crs.as_str(), "EPSG:25832");
    assert_eq!(format!("{}", crs), "EPSG:25832");
  }
}
