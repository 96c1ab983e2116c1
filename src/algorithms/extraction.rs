use crate::algorithms::numbering::renumber_ring;
use crate::data::{Crs, ExtractedPoint, FeatureSet, Geometry, GeometryKind};
use crate::{Error, TotalOrd};

/// Why a feature produced no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  /// The geometry is not a single simple polygon.
  NotAPolygon(GeometryKind),
  /// The exterior ring failed validation.
  MalformedRing(Error),
}

impl std::fmt::Display for SkipReason {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      SkipReason::NotAPolygon(kind) => write!(f, "geometry is a {}, not a Polygon", kind),
      SkipReason::MalformedRing(err) => write!(f, "malformed exterior ring: {}", err),
    }
  }
}

/// Skip report for one feature. Replaces console printing with data the
/// caller can log, count, or assert on.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped<P> {
  pub id: P,
  pub reason: SkipReason,
}

/// Result of a batch extraction: the flat point collection, the skip
/// reports, and the CRS tag copied from the input set.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<P, T> {
  pub points: Vec<ExtractedPoint<P, T>>,
  pub skipped: Vec<Skipped<P>>,
  pub crs: Option<Crs>,
}

/// Extracts renumbered vertex points from every polygon in the set.
///
/// Features are visited in input order. Non-polygon geometries and
/// degenerate rings are skip-reported and never abort the batch; points
/// of surviving polygons are concatenated in ring-traversal order with
/// their indices already rotated (index 1 on the topmost vertex).
///
/// Returns `Error::NoValidPolygons` when not a single feature could be
/// processed, so an all-skipped batch is distinguishable from a small
/// but valid result.
pub fn extract_points<P, T>(set: &FeatureSet<P, T>) -> Result<Extraction<P, T>, Error>
where
  P: Clone,
  T: TotalOrd + Clone,
{
  let mut points = Vec::new();
  let mut skipped = Vec::new();
  let mut processed = 0;
  for feature in &set.features {
    let ring = match &feature.geometry {
      Geometry::Polygon(ring) => ring,
      other => {
        skipped.push(Skipped {
          id: feature.id.clone(),
          reason: SkipReason::NotAPolygon(other.kind()),
        });
        continue;
      }
    };
    match renumber_ring(ring) {
      Ok(vertices) => {
        processed += 1;
        points.extend(vertices.into_iter().map(|vertex| ExtractedPoint {
          index: vertex.index,
          polygon_id: feature.id.clone(),
          point: vertex.point,
        }));
      }
      Err(err) => skipped.push(Skipped {
        id: feature.id.clone(),
        reason: SkipReason::MalformedRing(err),
      }),
    }
  }
  if processed == 0 {
    return Err(Error::NoValidPolygons);
  }
  Ok(Extraction {
    points,
    skipped,
    crs: set.crs.clone(),
  })
}
