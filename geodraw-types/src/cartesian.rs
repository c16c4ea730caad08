//! Points and vectors in projected (display) coordinates.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// 2d point in projected display coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2d<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num: num_traits::Num + Copy> Point2d<Num> {
    /// Creates a new point.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> Num {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> Num {
        self.y
    }
}

impl<Num: Float> Point2d<Num> {
    /// Euclidean distance to `other` in the display plane.
    ///
    /// Note that this is a distance between projected points, not a distance
    /// over the surface. Use [`Datum::distance`](crate::geo::Datum::distance)
    /// for the latter.
    pub fn distance(&self, other: &Self) -> Num {
        (*self - *other).length()
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Add<Vec2d<Num>> for Point2d<Num> {
    type Output = Self;

    fn add(self, rhs: Vec2d<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Sub<Vec2d<Num>> for Point2d<Num> {
    type Output = Self;

    fn sub(self, rhs: Vec2d<Num>) -> Self::Output {
        Self {
            x: self.x - rhs.dx,
            y: self.y - rhs.dy,
        }
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Sub<Point2d<Num>> for Point2d<Num> {
    type Output = Vec2d<Num>;

    fn sub(self, rhs: Point2d<Num>) -> Self::Output {
        Vec2d {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

/// Displacement between two display points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2d<Num = f64> {
    pub(crate) dx: Num,
    pub(crate) dy: Num,
}

impl<Num: num_traits::Num + Copy> Vec2d<Num> {
    /// Creates a new vector.
    pub const fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// X component.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Y component.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Squared length of the vector.
    pub fn length_sq(&self) -> Num {
        self.dx * self.dx + self.dy * self.dy
    }
}

impl<Num: Float> Vec2d<Num> {
    /// Length of the vector.
    pub fn length(&self) -> Num {
        self.length_sq().sqrt()
    }
}

impl<Num: num_traits::Num + Copy> std::ops::Mul<Num> for Vec2d<Num> {
    type Output = Self;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn point_arithmetic() {
        let a = Point2d::new(1.0, 2.0);
        let b = Point2d::new(4.0, 6.0);

        let v = b - a;
        assert_abs_diff_eq!(v.dx(), 3.0);
        assert_abs_diff_eq!(v.dy(), 4.0);
        assert_abs_diff_eq!(v.length(), 5.0);

        let c = a + v;
        assert_eq!(c, b);
        assert_eq!(c - v, a);
    }

    #[test]
    fn distance_is_planar() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(3.0, 4.0);
        assert_abs_diff_eq!(a.distance(&b), 5.0);
        assert_abs_diff_eq!(a.distance(&a), 0.0);
    }
}
