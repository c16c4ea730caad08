use crate::geo::{Datum, GeoPoint2d, Projection};
use crate::Point2d;

/// Spherical Mercator projection (EPSG:3857).
#[derive(Debug, Copy, Clone)]
pub struct WebMercator {
    datum: Datum,
}

impl WebMercator {
    /// Creates a new projection based on the given datum.
    pub fn new(datum: Datum) -> Self {
        Self { datum }
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self {
            datum: Datum::WGS84,
        }
    }
}

impl Projection for WebMercator {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2d;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let x = self.datum.semimajor() * input.lon_rad();
        let y = self.datum.semimajor()
            * (std::f64::consts::FRAC_PI_4 + input.lat_rad() / 2.0)
                .tan()
                .ln();

        if x.is_finite() && y.is_finite() {
            Some(Point2d::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let lat = 2.0 * (input.y() / self.datum.semimajor()).exp().atan()
            - std::f64::consts::FRAC_PI_2;
        let lon = input.x() / self.datum.semimajor();

        if lat.is_finite() && lon.is_finite() {
            Some(GeoPoint2d::latlon(lat.to_degrees(), lon.to_degrees()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn projects_origin_to_origin() {
        let projection = WebMercator::default();
        let projected = projection
            .project(&GeoPoint2d::latlon(0.0, 0.0))
            .expect("point is projectable");
        assert_abs_diff_eq!(projected.x(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projected.y(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn longitude_is_linear() {
        let projection = WebMercator::default();
        let projected = projection
            .project(&GeoPoint2d::latlon(0.0, 180.0))
            .expect("point is projectable");
        assert_abs_diff_eq!(
            projected.x(),
            Datum::WGS84.semimajor() * std::f64::consts::PI,
            epsilon = 1e-6
        );
    }

    #[test]
    fn round_trip() {
        let projection = WebMercator::default();
        for &(lat, lon) in &[
            (0.0, 0.0),
            (45.0, -110.0),
            (-60.0, 13.5),
            (84.9, 179.9),
            (-84.9, -179.9),
        ] {
            let point = GeoPoint2d::latlon(lat, lon);
            let projected = projection.project(&point).expect("point is projectable");
            let unprojected = projection
                .unproject(&projected)
                .expect("point is unprojectable");

            assert_abs_diff_eq!(unprojected.lat(), lat, epsilon = 1e-9);
            assert_abs_diff_eq!(unprojected.lon(), lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn degenerate_latitude_is_not_projectable() {
        let projection = WebMercator::default();
        // The south pole maps to y = -inf, latitudes beyond the poles to NaN.
        assert!(projection
            .project(&GeoPoint2d::latlon(-90.0, 0.0))
            .is_none());
        assert!(projection
            .project(&GeoPoint2d::latlon(180.0, 0.0))
            .is_none());
    }
}
