use std::fmt;

use crate::point::Point;
use crate::vec2f::Vec2f;

/// An axis-aligned rectangle, positioned by its top-left corner.
///
/// Width and height are expected to be non-negative but are never checked.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f32,      // Left edge.
    pub y: f32,      // Top edge.
    pub width: f32,  // Width (x-axis).
    pub height: f32, // Height (y-axis).
}

impl Rectangle {
    /// Creates a new rectangle from its position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a top-left position and a size vector.
    pub fn from_vectors(position: Vec2f, size: Vec2f) -> Self {
        Self::new(position.0, position.1, size.0, size.1)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left position of the rectangle.
    pub fn position(&self) -> Vec2f {
        Vec2f(self.x, self.y)
    }

    /// Width and height as a vector.
    pub fn size(&self) -> Vec2f {
        Vec2f(self.width, self.height)
    }

    /// Moves the rectangle by `offset`, keeping its size.
    pub fn translate(self, offset: Point) -> Self {
        let position = self.position() + offset;
        Self::new(position.0, position.1, self.width, self.height)
    }

    /// Checks if a given point is within the bounds of the rectangle.
    /// All four edges count as inside.
    pub fn contains<P: Into<Vec2f>>(&self, point: P) -> bool {
        let point = point.into();
        let within_x = point.0 >= self.left() && point.0 <= self.right();
        let within_y = point.1 >= self.top() && point.1 <= self.bottom();
        within_x && within_y
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{X:{} Y:{} Width:{} Height:{}}}",
            self.x, self.y, self.width, self.height
        )
    }
}
