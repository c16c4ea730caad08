//! Contours are sequences of points, either open (a road) or closed (a
//! shoreline).
//!
//! Closed contours do not duplicate the first point at the end; use
//! [`Contour::iter_points_closing`] to iterate with the closing point
//! repeated.

use serde::{Deserialize, Serialize};

use crate::geo::Projection;

/// Sequence of points, open or closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour<P> {
    /// Points of the contour. The first point is not repeated at the end for
    /// closed contours.
    pub points: Vec<P>,
    /// Whether the last point connects back to the first one.
    pub is_closed: bool,
}

impl<P> Contour<P> {
    /// Creates a new contour.
    pub fn new(points: Vec<P>, is_closed: bool) -> Self {
        Self { points, is_closed }
    }

    /// Creates an open contour.
    pub fn open(points: Vec<P>) -> Self {
        Self {
            points,
            is_closed: false,
        }
    }

    /// Creates a closed contour.
    pub fn closed(points: Vec<P>) -> Self {
        Self {
            points,
            is_closed: true,
        }
    }

    /// Converts into a [`ClosedContour`] if the contour is closed.
    pub fn into_closed(self) -> Option<ClosedContour<P>> {
        if self.is_closed {
            Some(ClosedContour {
                points: self.points,
            })
        } else {
            None
        }
    }

    /// Iterates over the points, repeating the first point at the end for
    /// closed contours.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &P> {
        self.points
            .iter()
            .chain(self.points.first().filter(|_| self.is_closed))
    }

    /// Projects every point of the contour with the given projection.
    ///
    /// Returns `None` if any point is not projectable.
    pub fn project_points<Proj>(&self, projection: &Proj) -> Option<Contour<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<_>>>()?;
        Some(Contour {
            points,
            is_closed: self.is_closed,
        })
    }
}

/// Contour that is guaranteed to be closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedContour<P> {
    /// Points of the contour. The first point is not repeated at the end.
    pub points: Vec<P>,
}

impl<P> ClosedContour<P> {
    /// Creates a new closed contour.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Projects every point of the contour with the given projection.
    ///
    /// Returns `None` if any point is not projectable.
    pub fn project_points<Proj>(&self, projection: &Proj) -> Option<ClosedContour<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<_>>>()?;
        Some(ClosedContour { points })
    }
}

impl<P> From<ClosedContour<P>> for Contour<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            points: value.points,
            is_closed: true,
        }
    }
}
