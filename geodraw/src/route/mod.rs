//! Routes a marker can be animated along.
//!
//! A [`Route`] is an ordered sequence of display-space points with
//! precomputed cumulative segment lengths, so a position at any fraction of
//! the total length is a binary search plus one interpolation.

mod loader;
mod polyline;

pub use loader::{route_from_json, RouteGeometry, RouteResponse};
#[cfg(not(target_arch = "wasm32"))]
pub use loader::{load_route, load_route_from_file, load_route_or_log};
pub use polyline::{decode, decode_with_precision, DEFAULT_PRECISION};

use geodraw_types::geo::{GeoPoint2d, Projection};
use geodraw_types::Point2d;

use crate::error::GeodrawError;

/// Polyline path through display space with cumulative lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Point2d>,
    cumulative: Vec<f64>,
}

impl Route {
    /// Creates a route from display-space points.
    pub fn new(points: Vec<Point2d>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                total += points[i - 1].distance(point);
            }
            cumulative.push(total);
        }

        Self { points, cumulative }
    }

    /// Creates a route by projecting geographic points into display space.
    ///
    /// Returns `None` if any point is not projectable.
    pub fn from_geo_points<Proj>(points: &[GeoPoint2d], projection: &Proj) -> Option<Self>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        let points = points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(points))
    }

    /// Decodes an encoded polyline and projects it into display space.
    pub fn from_encoded_polyline<Proj>(
        encoded: &str,
        projection: &Proj,
    ) -> Result<Self, GeodrawError>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        let geo_points = polyline::decode(encoded)?;
        Self::from_geo_points(&geo_points, projection).ok_or(GeodrawError::Projection)
    }

    /// Points of the route in display coordinates.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    /// Whether the route has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length of the route in display units.
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Position at the given fraction of the route's total length.
    ///
    /// The fraction is clamped to `[0, 1]`: 0 is the first point, 1 the
    /// last. Returns `None` for an empty route.
    pub fn position_at(&self, fraction: f64) -> Option<Point2d> {
        let last = *self.points.last()?;
        let length = self.length();
        if length == 0.0 {
            return Some(last);
        }

        let target = fraction.clamp(0.0, 1.0) * length;
        let next = self.cumulative.partition_point(|&c| c < target);
        if next == 0 {
            return self.points.first().copied();
        }
        if next >= self.points.len() {
            return Some(last);
        }

        let segment = self.cumulative[next] - self.cumulative[next - 1];
        if segment == 0.0 {
            return Some(self.points[next]);
        }

        let k = (target - self.cumulative[next - 1]) / segment;
        let start = self.points[next - 1];
        Some(start + (self.points[next] - start) * k)
    }
}
