//! Geometry types for the `geodraw` sketching toolkit.
//!
//! The crate provides two coordinate spaces and the conversions between them:
//!
//! * cartesian display coordinates ([`Point2d`]) that the map widget works in;
//! * geographic coordinates ([`geo::GeoPoint2d`]) in which distances along the
//!   surface of the Earth are meaningful.
//!
//! Contours and polygons store points of either space and can be reprojected
//! point-wise through a [`geo::Projection`]. Geodesic constructions (distances,
//! destination points, circle approximations) are parameterized by a
//! [`geo::Datum`].

pub mod geo;

mod cartesian;
pub use cartesian::{Point2d, Vec2d};

mod contour;
pub use contour::{ClosedContour, Contour};

mod polygon;
pub use polygon::Polygon;
