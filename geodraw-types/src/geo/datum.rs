use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint2d;

/// Description of the reference ellipsoid used for geodesic calculations.
///
/// Surface calculations (see [`Datum::distance`] and [`Datum::destination`])
/// approximate the ellipsoid by a sphere with the radius of the semimajor
/// axis. The same radius is used for both the direct and the inverse problem,
/// so constructions that combine them (e.g. building a circle and then
/// measuring its radius) are exactly self-consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS84 datum.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Semimajor axis of the ellipsoid in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening of the ellipsoid.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Great-circle (haversine) distance between two points in meters.
    pub fn distance(&self, a: &GeoPoint2d, b: &GeoPoint2d) -> f64 {
        let d_lat = (b.lat_rad() - a.lat_rad()) / 2.0;
        let d_lon = (b.lon_rad() - a.lon_rad()) / 2.0;

        let h = d_lat.sin().powi(2)
            + a.lat_rad().cos() * b.lat_rad().cos() * d_lon.sin().powi(2);

        2.0 * self.semimajor * h.sqrt().asin()
    }

    /// Point at the given great-circle `distance` (meters) from `origin`,
    /// leaving it with the initial bearing `azimuth` (radians, clockwise from
    /// north).
    pub fn destination(&self, origin: &GeoPoint2d, azimuth: f64, distance: f64) -> GeoPoint2d {
        let delta = distance / self.semimajor;
        let lat1 = origin.lat_rad();

        let lat2 =
            (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * azimuth.cos()).asin();
        let lon2 = origin.lon_rad()
            + (azimuth.sin() * delta.sin() * lat1.cos())
                .atan2(delta.cos() - lat1.sin() * lat2.sin());

        GeoPoint2d::latlon(lat2.to_degrees(), lon2.to_degrees())
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
