//! The paired geometry of an editable geodesic circle.

use geodraw_types::geo::{Datum, GeoPoint2d, Projection};
use geodraw_types::{ClosedContour, Point2d, Polygon};

/// Number of vertices used to approximate a geodesic circle.
pub const CIRCLE_VERTEX_COUNT: usize = 128;

/// Editable geodesic circle: the circle polygon paired with its center point.
///
/// Both parts are kept in display coordinates, ready to be handed to the map
/// widget. The radius is never stored; every edit recomputes it from the
/// geometry itself and regenerates the polygon, so the polygon is always the
/// geodesic circle of the current center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct GeodesicSketch {
    polygon: Polygon<Point2d>,
    center: Point2d,
    datum: Datum,
    vertex_count: usize,
}

impl GeodesicSketch {
    /// Creates the paired geometry from the circle center and a point on its
    /// rim, both in display coordinates.
    ///
    /// The radius is the great-circle distance between the two points. When
    /// `edge` coincides with `center` the circle degenerates to a point-like
    /// polygon. Returns `None` if either point is not projectable.
    pub fn from_two_points<Proj>(center: Point2d, edge: Point2d, projection: &Proj) -> Option<Self>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        let datum = Datum::default();
        let center_geo = projection.unproject(&center)?;
        let edge_geo = projection.unproject(&edge)?;
        let radius = datum.distance(&center_geo, &edge_geo);

        let polygon = Polygon::circular(&datum, &center_geo, radius, CIRCLE_VERTEX_COUNT)
            .project_points(projection)?;

        Some(Self {
            polygon,
            center,
            datum,
            vertex_count: CIRCLE_VERTEX_COUNT,
        })
    }

    /// The circle polygon in display coordinates.
    pub fn polygon(&self) -> &Polygon<Point2d> {
        &self.polygon
    }

    /// The center point in display coordinates.
    pub fn center(&self) -> Point2d {
        self.center
    }

    /// Current radius of the circle in meters, recomputed from the center and
    /// the first rim vertex.
    pub fn radius<Proj>(&self, projection: &Proj) -> Option<f64>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        let center = projection.unproject(&self.center)?;
        let rim = projection.unproject(self.polygon.outer_contour.points.first()?)?;
        Some(self.datum.distance(&center, &rim))
    }

    /// Moves the center handle without touching the rim. The caller is
    /// expected to follow up with [`GeodesicSketch::update_dragged`].
    pub(crate) fn set_center(&mut self, position: Point2d) {
        self.center = position;
    }

    /// Updates the geometry after one of its vertices was dragged to
    /// `dragged` (display coordinates).
    ///
    /// When `dragged` equals the stored center point the move is a center
    /// move: the radius is held constant, recovered as half the great-circle
    /// distance between the first rim vertex and the diametrically opposite
    /// one (both still unmoved). Otherwise it is a radius move: the center is
    /// held constant and the radius becomes the distance from the center to
    /// the dragged vertex.
    ///
    /// Either way the circle polygon is regenerated for the resulting center
    /// and radius. Returns `false` and leaves the geometry untouched if a
    /// point is not projectable.
    pub fn update_dragged<Proj>(&mut self, dragged: Point2d, projection: &Proj) -> bool
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        let result = if dragged == self.center {
            self.drag_center(dragged, projection)
        } else {
            self.drag_rim(dragged, projection)
        };
        result.is_some()
    }

    fn drag_center<Proj>(&mut self, position: Point2d, projection: &Proj) -> Option<()>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        let rim = &self.polygon.outer_contour.points;
        let first = projection.unproject(rim.first()?)?;
        let opposite = projection.unproject(rim.get(self.vertex_count / 2)?)?;
        let radius = self.datum.distance(&first, &opposite) / 2.0;

        let center_geo = projection.unproject(&position)?;
        self.polygon = self.regenerate(&center_geo, radius, projection)?;
        self.center = position;
        Some(())
    }

    fn drag_rim<Proj>(&mut self, position: Point2d, projection: &Proj) -> Option<()>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        let center_geo = projection.unproject(&self.center)?;
        let dragged_geo = projection.unproject(&position)?;
        let radius = self.datum.distance(&center_geo, &dragged_geo);

        self.polygon = self.regenerate(&center_geo, radius, projection)?;
        Some(())
    }

    fn regenerate<Proj>(
        &self,
        center: &GeoPoint2d,
        radius: f64,
        projection: &Proj,
    ) -> Option<Polygon<Point2d>>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d> + ?Sized,
    {
        Polygon::circular(&self.datum, center, radius, self.vertex_count)
            .project_points(projection)
    }

    /// Consumes the paired geometry, keeping the circle polygon as the sole
    /// geometry of the finished feature.
    pub fn into_polygon(self) -> Polygon<Point2d> {
        self.polygon
    }

    /// Rim vertices of the circle polygon in display coordinates.
    pub fn rim(&self) -> &ClosedContour<Point2d> {
        &self.polygon.outer_contour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use geodraw_types::geo::Crs;

    fn projection() -> Box<dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2d>> {
        Crs::EPSG3857
            .get_projection()
            .expect("EPSG:3857 is projectable")
    }

    fn sketch_1000m_east() -> GeodesicSketch {
        let projection = projection();
        GeodesicSketch::from_two_points(
            Point2d::new(0.0, 0.0),
            Point2d::new(1000.0, 0.0),
            &*projection,
        )
        .expect("points are projectable")
    }

    #[test]
    fn all_vertices_lie_at_the_radius() {
        let projection = projection();
        // At the equator a web mercator offset of 1000 display units is
        // 1000 m on the ground.
        let sketch = sketch_1000m_east();
        let datum = Datum::default();
        let center = projection
            .unproject(&sketch.center())
            .expect("center is unprojectable");

        assert_eq!(sketch.rim().points.len(), CIRCLE_VERTEX_COUNT);
        for vertex in &sketch.rim().points {
            let vertex = projection.unproject(vertex).expect("vertex is unprojectable");
            assert_relative_eq!(datum.distance(&center, &vertex), 1000.0, max_relative = 1e-6);
        }
    }

    #[test]
    fn coincident_points_make_a_point_like_circle() {
        let projection = projection();
        let center = Point2d::new(1_000_000.0, 2_000_000.0);
        let sketch = GeodesicSketch::from_two_points(center, center, &*projection)
            .expect("points are projectable");

        // Projection round trips leave nanometer-scale noise.
        assert_abs_diff_eq!(
            sketch.radius(&*projection).expect("has rim"),
            0.0,
            epsilon = 1e-6
        );
        for vertex in &sketch.rim().points {
            assert_abs_diff_eq!(vertex.x(), center.x(), epsilon = 1e-6);
            assert_abs_diff_eq!(vertex.y(), center.y(), epsilon = 1e-6);
        }
    }

    #[test]
    fn center_drag_preserves_radius() {
        let projection = projection();
        let mut sketch = sketch_1000m_east();
        let radius_before = sketch.radius(&*projection).expect("has rim");

        let new_center = Point2d::new(50_000.0, 80_000.0);
        // The widget moves the center handle first, so the dragged position
        // equals the stored center when the update runs.
        sketch.set_center(new_center);
        assert!(sketch.update_dragged(new_center, &*projection));

        assert_eq!(sketch.center(), new_center);
        assert_relative_eq!(
            sketch.radius(&*projection).expect("has rim"),
            radius_before,
            max_relative = 1e-6
        );
    }

    #[test]
    fn rim_drag_preserves_center() {
        let projection = projection();
        let mut sketch = sketch_1000m_east();
        let center_before = sketch.center();

        assert!(sketch.update_dragged(Point2d::new(2_500.0, 0.0), &*projection));

        assert_eq!(sketch.center(), center_before);
        assert_relative_eq!(
            sketch.radius(&*projection).expect("has rim"),
            2_500.0,
            max_relative = 1e-4
        );
    }

    #[test]
    fn rim_drag_regenerates_every_vertex() {
        let projection = projection();
        let mut sketch = sketch_1000m_east();
        let datum = Datum::default();

        assert!(sketch.update_dragged(Point2d::new(0.0, 3_000.0), &*projection));

        let center = projection
            .unproject(&sketch.center())
            .expect("center is unprojectable");
        let radius = sketch.radius(&*projection).expect("has rim");
        for vertex in &sketch.rim().points {
            let vertex = projection.unproject(vertex).expect("vertex is unprojectable");
            assert_relative_eq!(
                datum.distance(&center, &vertex),
                radius,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn into_polygon_drops_the_center() {
        let sketch = sketch_1000m_east();
        let rim = sketch.rim().clone();
        let polygon = sketch.into_polygon();
        assert_eq!(polygon.outer_contour, rim);
    }
}
