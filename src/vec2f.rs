use std::fmt;

use crate::shared::Rectangle;

/// A 2D vector where the components are 32-bit floats.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Vec2f(pub f32, pub f32);
impl Vec2f {
    pub const ZERO: Vec2f = Vec2f(0.0, 0.0);
    pub const ONE: Vec2f = Vec2f(1.0, 1.0);

    /// Obtains the length of the vector.
    pub fn length(self) -> f32 {
        (self.0 * self.0 + self.1 * self.1).sqrt()
    }

    /// Obtains the squared length of the vector.
    pub fn length_squared(self) -> f32 {
        self.0 * self.0 + self.1 * self.1
    }

    /// Euclidean distance between two positions.
    pub fn distance(self, other: Vec2f) -> f32 {
        (self - other).length()
    }

    /// Scales the vector by a scalar.
    pub fn scale(self, s: f32) -> Vec2f {
        Vec2f(self.0 * s, self.1 * s)
    }

    /// Checks if another position lies strictly closer than `range`.
    ///
    /// Accepts anything convertible into a `Vec2f`, so a `Point` is widened to floats first.
    /// A range of zero is never satisfied, not even by the same position.
    pub fn is_around<P: Into<Vec2f>>(self, other: P, range: f32) -> bool {
        self.distance(other.into()) < range
    }

    /// Checks if the position is within the bounds of the rectangle, edges included.
    pub fn is_inside(self, rectangle: &Rectangle) -> bool {
        rectangle.contains(self)
    }
}

impl std::ops::Add for Vec2f {
    type Output = Vec2f;

    fn add(self, other: Vec2f) -> Vec2f {
        Vec2f(self.0 + other.0, self.1 + other.1)
    }
}

impl std::ops::AddAssign for Vec2f {
    fn add_assign(&mut self, other: Vec2f) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl std::ops::Sub for Vec2f {
    type Output = Vec2f;

    fn sub(self, other: Vec2f) -> Vec2f {
        Vec2f(self.0 - other.0, self.1 - other.1)
    }
}

impl std::ops::SubAssign for Vec2f {
    fn sub_assign(&mut self, other: Vec2f) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl From<Vec2f> for (f32, f32) {
    fn from(v: Vec2f) -> (f32, f32) {
        (v.0, v.1)
    }
}

impl From<(f32, f32)> for Vec2f {
    fn from(v: (f32, f32)) -> Vec2f {
        Vec2f(v.0, v.1)
    }
}

impl fmt::Display for Vec2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Vec2f(0.0, 0.0).distance(Vec2f(3.0, 4.0)), 5.0);
        assert_eq!(Vec2f(3.0, 4.0).length_squared(), 25.0);
    }

    #[test]
    fn around_is_strict() {
        let origin = Vec2f(1.5, -2.0);
        assert!(origin.is_around(origin, 0.001));
        assert!(!origin.is_around(origin, 0.0));

        // Exactly on the range boundary is not around.
        assert!(!Vec2f::ZERO.is_around(Vec2f(3.0, 4.0), 5.0));
        assert!(Vec2f::ZERO.is_around(Vec2f(3.0, 4.0), 5.01));
    }

    #[test]
    fn around_accepts_points() {
        let origin = Vec2f(0.5, 0.5);
        assert!(origin.is_around(Point::new(1, 1), 1.0));
        assert!(!origin.is_around(Point::new(2, 2), 1.0));
    }

    #[test]
    fn inside_delegates_to_contains() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(Vec2f(10.0, 0.0).is_inside(&rect));
        assert!(!Vec2f(10.5, 0.0).is_inside(&rect));
        assert!(!Vec2f(f32::NAN, 1.0).is_inside(&rect));
    }

    #[test]
    fn arithmetic() {
        let mut v = Vec2f(1.0, 2.0) + Vec2f::ZERO;
        v += Vec2f::ONE;
        assert_eq!(v, Vec2f(2.0, 3.0));
        v -= Vec2f(0.5, 0.5);
        assert_eq!(v, Vec2f(1.5, 2.5));
        assert_eq!(v.scale(2.0), Vec2f(3.0, 5.0));
        assert_eq!(v.to_string(), "<1.5, 2.5>");
    }
}
