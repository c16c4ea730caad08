//! Geodesic measurement of sketched shapes and tooltip formatting.
//!
//! Lengths and areas are computed over the surface of the datum sphere, not
//! in the display plane, so measurements stay correct regardless of where on
//! the map the shape is drawn.

use geodraw_types::geo::{Datum, GeoPoint2d, InvertedProjection, Projection};
use geodraw_types::{Contour, Point2d};

use crate::sketch::DrawShape;

/// Great-circle length of a display-space contour in meters.
///
/// The contour is reprojected to geographic coordinates and the great-circle
/// distances of its segments are summed (including the closing segment for
/// closed contours). Returns `None` if any point is not projectable.
pub fn geodesic_length<Proj>(
    contour: &Contour<Point2d>,
    projection: &Proj,
    datum: &Datum,
) -> Option<f64>
where
    Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
{
    let geo = contour.project_points(&InvertedProjection::new(projection))?;

    let mut length = 0.0;
    let mut prev: Option<GeoPoint2d> = None;
    for point in geo.iter_points_closing() {
        if let Some(prev) = prev {
            length += datum.distance(&prev, point);
        }
        prev = Some(*point);
    }

    Some(length)
}

/// Geodesic area enclosed by a display-space ring, in square meters.
///
/// Uses the spherical excess sum over the ring's edges (Chamberlain &
/// Duquette), so opposite traversal directions yield the same value. Open
/// contours are treated as implicitly closed. Returns `None` if any point is
/// not projectable.
pub fn geodesic_area<Proj>(
    ring: &Contour<Point2d>,
    projection: &Proj,
    datum: &Datum,
) -> Option<f64>
where
    Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
{
    let geo = ring.project_points(&InvertedProjection::new(projection))?;
    if geo.points.len() < 3 {
        return Some(0.0);
    }

    let mut sum = 0.0;
    for i in 0..geo.points.len() {
        let p1 = &geo.points[i];
        let p2 = &geo.points[(i + 1) % geo.points.len()];
        sum += (p2.lon_rad() - p1.lon_rad()) * (2.0 + p1.lat_rad().sin() + p2.lat_rad().sin());
    }

    Some((sum * datum.semimajor() * datum.semimajor() / 2.0).abs())
}

/// Formats a length in meters for a measure tooltip.
///
/// Lengths over 100 m are shown in kilometers, shorter ones in meters, both
/// rounded to two decimals.
pub fn format_length(meters: f64) -> String {
    if meters > 100.0 {
        format!("{:.2} km", meters / 1000.0)
    } else {
        format!("{meters:.2} m")
    }
}

/// Formats an area in square meters for a measure tooltip.
///
/// Areas over 10 000 m² are shown in square kilometers, smaller ones in
/// square meters, both rounded to two decimals.
pub fn format_area(square_meters: f64) -> String {
    if square_meters > 10_000.0 {
        format!("{:.2} km²", square_meters / 1_000_000.0)
    } else {
        format!("{square_meters:.2} m²")
    }
}

/// Formats a geographic coordinate for display, two decimals per component.
pub fn format_coordinate(point: &GeoPoint2d) -> String {
    format!("lon: {:.2}, lat: {:.2}", point.lon(), point.lat())
}

/// Shifts `x` by whole multiples of `world_width` to the world copy nearest
/// to `reference`.
///
/// On an endlessly panning map a feature has a representation every world
/// width; popups should anchor to the copy closest to where the user
/// clicked.
pub fn nearest_world_copy(x: f64, reference: f64, world_width: f64) -> f64 {
    x + ((reference - x) / world_width).round() * world_width
}

/// What a [`MeasureSketch`] measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureKind {
    /// Length of an open line.
    Length,
    /// Area of a polygon.
    Area,
}

/// A shape being drawn for measurement.
///
/// Vertices are appended as the user clicks; the last vertex follows the
/// pointer. The sketch exposes the formatted measurement label and the
/// display position to anchor it at.
#[derive(Debug, Clone)]
pub struct MeasureSketch {
    kind: MeasureKind,
    points: Vec<Point2d>,
    datum: Datum,
}

impl MeasureSketch {
    /// Creates an empty sketch.
    pub fn new(kind: MeasureKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
            datum: Datum::default(),
        }
    }

    /// What the sketch measures.
    pub fn kind(&self) -> MeasureKind {
        self.kind
    }

    /// Shape the sketch draws, for pointer hints.
    pub fn shape(&self) -> DrawShape {
        match self.kind {
            MeasureKind::Length => DrawShape::Line,
            MeasureKind::Area => DrawShape::Polygon,
        }
    }

    /// Vertices of the sketch in display coordinates.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    /// Appends a vertex at `position`.
    pub fn add_vertex(&mut self, position: Point2d) {
        self.points.push(position);
    }

    /// Moves the pending (last) vertex to the pointer `position`.
    pub fn move_last(&mut self, position: Point2d) {
        if let Some(last) = self.points.last_mut() {
            *last = position;
        }
    }

    /// Formatted measurement of the sketch so far.
    ///
    /// `None` until the sketch has enough vertices to measure, or when a
    /// vertex is not projectable.
    pub fn label<Proj>(&self, projection: &Proj) -> Option<String>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        match self.kind {
            MeasureKind::Length => {
                if self.points.len() < 2 {
                    return None;
                }
                let contour = Contour::open(self.points.clone());
                geodesic_length(&contour, projection, &self.datum).map(format_length)
            }
            MeasureKind::Area => {
                if self.points.len() < 3 {
                    return None;
                }
                let ring = Contour::closed(self.points.clone());
                geodesic_area(&ring, projection, &self.datum).map(format_area)
            }
        }
    }

    /// Display position to anchor the measurement label at: the last vertex
    /// for lines, the ring centroid for areas.
    pub fn anchor(&self) -> Option<Point2d> {
        match self.kind {
            MeasureKind::Length => self.points.last().copied(),
            MeasureKind::Area => {
                if self.points.is_empty() {
                    return None;
                }
                let n = self.points.len() as f64;
                let (x, y) = self
                    .points
                    .iter()
                    .fold((0.0, 0.0), |(x, y), p| (x + p.x(), y + p.y()));
                Some(Point2d::new(x / n, y / n))
            }
        }
    }

    /// Consumes the sketch returning the drawn contour.
    pub fn into_contour(self) -> Contour<Point2d> {
        Contour::new(self.points, self.kind == MeasureKind::Area)
    }
}
