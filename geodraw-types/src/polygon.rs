//! Polygons with an outer ring and optional holes.

use serde::{Deserialize, Serialize};

use crate::contour::ClosedContour;
use crate::geo::{Datum, GeoPoint2d, Projection};

/// Polygon defined by a closed outer contour and zero or more closed inner
/// contours (holes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon<P> {
    /// Outer ring of the polygon.
    pub outer_contour: ClosedContour<P>,
    /// Holes of the polygon.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a polygon without holes.
    pub fn new(outer_contour: ClosedContour<P>) -> Self {
        Self {
            outer_contour,
            inner_contours: vec![],
        }
    }

    /// Iterates over all contours of the polygon, starting with the outer one.
    pub fn iter_contours(&self) -> impl Iterator<Item = &ClosedContour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }

    /// Creates a polygon with the same structure converting every point with
    /// `cast`.
    pub fn cast_points<T>(&self, cast: impl Fn(&P) -> T) -> Polygon<T> {
        Polygon {
            outer_contour: ClosedContour::new(
                self.outer_contour.points.iter().map(&cast).collect(),
            ),
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| ClosedContour::new(c.points.iter().map(&cast).collect()))
                .collect(),
        }
    }

    /// Projects every point of the polygon with the given projection.
    ///
    /// Returns `None` if any point is not projectable.
    pub fn project_points<Proj>(&self, projection: &Proj) -> Option<Polygon<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        Some(Polygon {
            outer_contour: self.outer_contour.project_points(projection)?,
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| c.project_points(projection))
                .collect::<Option<Vec<_>>>()?,
        })
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}

impl Polygon<GeoPoint2d> {
    /// Approximates the geodesic circle with the given `center` and `radius`
    /// (meters) by a closed polygon of `vertex_count` vertices placed at equal
    /// azimuth steps.
    ///
    /// A zero radius produces a degenerate point-like polygon with all
    /// vertices at the center.
    pub fn circular(datum: &Datum, center: &GeoPoint2d, radius: f64, vertex_count: usize) -> Self {
        let points = (0..vertex_count)
            .map(|i| {
                let azimuth = 2.0 * std::f64::consts::PI * i as f64 / vertex_count as f64;
                datum.destination(center, azimuth, radius)
            })
            .collect();

        Self::new(ClosedContour::new(points))
    }
}
