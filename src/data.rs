mod geometry;
pub(crate) mod point;
mod ring;
mod vertex;

pub use geometry::{Crs, Feature, FeatureSet, Geometry, GeometryKind};
pub use point::Point;
pub use ring::Ring;
pub use vertex::{ExtractedPoint, IndexedVertex};
