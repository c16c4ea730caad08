pub(crate) mod web_mercator;

use serde::{Deserialize, Serialize};

use crate::geo::{Datum, WebMercator};

/// Conversion between geographic and projected display coordinates.
///
/// `project` converts a point from the input (geographic) space into the
/// output (display) space, `unproject` goes the opposite way. Both return
/// `None` when the input point cannot be represented in the target space.
pub trait Projection {
    /// Point type of the input space.
    type InPoint;
    /// Point type of the output space.
    type OutPoint;

    /// Projects a point into the output space.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;

    /// Converts a projected point back into the input space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Projection that swaps the direction of another projection.
///
/// Useful for applying the display → geographic direction to whole contours
/// and polygons via their `project_points` methods.
pub struct InvertedProjection<'a, P: ?Sized> {
    inner: &'a P,
}

impl<'a, P: Projection + ?Sized> InvertedProjection<'a, P> {
    /// Creates a new inverted projection.
    pub fn new(inner: &'a P) -> Self {
        Self { inner }
    }
}

impl<P: Projection + ?Sized> Projection for InvertedProjection<'_, P> {
    type InPoint = P::OutPoint;
    type OutPoint = P::InPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.inner.unproject(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.inner.project(input)
    }
}

/// Coordinate reference system of a map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crs {
    datum: Datum,
    projection_type: ProjectionType,
}

/// Projection used by a [`Crs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ProjectionType {
    /// Projection is not known. Points cannot be converted to geographic
    /// coordinates.
    Unknown,
    /// Web Mercator (spherical Mercator) projection.
    WebMercator,
}

impl Crs {
    /// Web Mercator CRS used by most web maps (EPSG:3857).
    pub const EPSG3857: Crs = Crs {
        datum: Datum::WGS84,
        projection_type: ProjectionType::WebMercator,
    };

    /// Creates a new CRS.
    pub fn new(datum: Datum, projection_type: ProjectionType) -> Self {
        Self {
            datum,
            projection_type,
        }
    }

    /// Datum of the CRS.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Returns the projection between geographic coordinates and the display
    /// coordinates of this CRS, if one is known.
    pub fn get_projection(
        &self,
    ) -> Option<Box<dyn Projection<InPoint = crate::geo::GeoPoint2d, OutPoint = crate::Point2d>>>
    {
        match self.projection_type {
            ProjectionType::WebMercator => Some(Box::new(WebMercator::new(self.datum))),
            _ => None,
        }
    }
}
