//! Geometries in geographic coordinates (latitude and longitude) and
//! conversions between geographic and display coordinate systems.

mod datum;
mod point;
mod projection;

pub use datum::Datum;
pub use point::GeoPoint2d;
pub use projection::web_mercator::WebMercator;
pub use projection::{Crs, InvertedProjection, Projection, ProjectionType};
