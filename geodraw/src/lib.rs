//! Interactive sketching tools for map widgets: geodesic circle drawing and
//! editing, geodesic measurement, and marker animation along a route.
//!
//! The crate owns no display surface. Everything here is plain geometry and
//! state driven by the host widget's events:
//!
//! * [`sketch`] keeps a geodesic circle consistent while the user draws or
//!   drags it. The circle lives in display coordinates as a
//!   [`sketch::GeodesicSketch`] - the circle polygon paired with its center
//!   point; every edit regenerates the polygon from the current center and
//!   radius.
//! * [`measure`] computes geodesic lengths and areas of sketched shapes and
//!   formats them the way measure tooltips display them.
//! * [`route`] loads a route from an encoded polyline and [`animation`] moves
//!   a marker along it from elapsed time alone, so the logic runs without a
//!   render loop.
//!
//! ```
//! use geodraw::sketch::GeodesicSketch;
//! use geodraw_types::geo::Crs;
//! use geodraw_types::Point2d;
//!
//! let projection = Crs::EPSG3857.get_projection().expect("known projection");
//! let sketch = GeodesicSketch::from_two_points(
//!     Point2d::new(0.0, 0.0),
//!     Point2d::new(10_000.0, 0.0),
//!     &*projection,
//! )
//! .expect("points are projectable");
//! assert_eq!(sketch.polygon().outer_contour.points.len(), 128);
//! ```

pub mod animation;
pub mod error;
pub mod measure;
pub mod route;
pub mod sketch;

pub use error::GeodrawError;

// Reexport geodraw_types
pub use geodraw_types;
