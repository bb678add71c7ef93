use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::shared::Rectangle;
use crate::vec2f::Vec2f;

/// An integer position in a 2D space.
///
/// Conversions from floats truncate toward zero, the same as an `as i32` cast. Addition,
/// subtraction and multiplication wrap on overflow in every build profile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);

    /// Creates a new point from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a point with both components set to `value`.
    pub const fn splat(value: i32) -> Self {
        Self::new(value, value)
    }

    /// Creates a point from float components, truncating each toward zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self::new(x as i32, y as i32)
    }

    /// Creates a point with both components set to the truncated `value`.
    pub fn splat_f32(value: f32) -> Self {
        Self::from_f32(value, value)
    }

    /// Converts a float vector into a point, truncating each component toward zero.
    pub fn from_vec2f(vector: Vec2f) -> Self {
        Self::from_f32(vector.0, vector.1)
    }

    /// Widens the point into a float vector.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vec2f(self) -> Vec2f {
        Vec2f(self.x as f32, self.y as f32)
    }

    /// True when both components are strictly greater than `value`.
    pub fn all_greater_than(self, value: i32) -> bool {
        self.x > value && self.y > value
    }

    /// True when both components are strictly less than `value`.
    pub fn all_less_than(self, value: i32) -> bool {
        self.x < value && self.y < value
    }

    /// Checks if the point is within the bounds of the rectangle, edges included.
    pub fn is_inside(self, rectangle: &Rectangle) -> bool {
        rectangle.contains(self)
    }

    /// Checks if another position lies strictly closer than `range`.
    pub fn is_around<P: Into<Vec2f>>(self, other: P, range: f32) -> bool {
        self.to_vec2f().is_around(other, range)
    }

    /// Formats the point using the separator of the provided number format.
    pub fn to_string_with(&self, format: &NumberFormat) -> String {
        self.display_with(format).to_string()
    }

    /// Formatting adapter that separates components with the number format's separator.
    ///
    /// Formatter options apply to each component: `format!("{:03}", p.display_with(&fmt))`.
    pub fn display_with<'a>(&self, format: &'a NumberFormat) -> PointDisplay<'a> {
        PointDisplay {
            point: *self,
            format,
        }
    }
}

/// A `Point` paired with the number format used to render it.
#[derive(Debug, Clone, Copy)]
pub struct PointDisplay<'a> {
    point: Point,
    format: &'a NumberFormat,
}

/// Writes `<X{sep} Y>`, rendering each component with `component`.
fn write_components(
    f: &mut fmt::Formatter<'_>,
    point: Point,
    separator: char,
    component: fn(&i32, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    f.write_str("<")?;
    component(&point.x, f)?;
    write!(f, "{separator} ")?;
    component(&point.y, f)?;
    f.write_str(">")
}

impl fmt::Display for PointDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.point, self.format.group_separator, <i32 as fmt::Display>::fmt)
    }
}

impl fmt::LowerHex for PointDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.point, self.format.group_separator, <i32 as fmt::LowerHex>::fmt)
    }
}

impl fmt::UpperHex for PointDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.point, self.format.group_separator, <i32 as fmt::UpperHex>::fmt)
    }
}

/// Number formatting conventions used when rendering a `Point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub group_separator: char, // Placed between components, followed by a space.
}

impl NumberFormat {
    /// Culture-neutral conventions, matching `Display`.
    pub const INVARIANT: NumberFormat = NumberFormat {
        group_separator: ',',
    };

    /// Creates a format with a custom group separator.
    pub const fn new(group_separator: char) -> Self {
        Self { group_separator }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl Add<Vec2f> for Point {
    type Output = Point;

    fn add(self, other: Vec2f) -> Point {
        Point::from_vec2f(self.to_vec2f() + other)
    }
}

impl Add<Point> for Vec2f {
    type Output = Vec2f;

    fn add(self, other: Point) -> Vec2f {
        self + other.to_vec2f()
    }
}

impl Add<Point> for Rectangle {
    type Output = Rectangle;

    fn add(self, other: Point) -> Rectangle {
        self.translate(other)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        *self = *self + other;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Point) {
        *self = *self - other;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl Mul for Point {
    type Output = Point;

    fn mul(self, other: Point) -> Point {
        Point::new(self.x.wrapping_mul(other.x), self.y.wrapping_mul(other.y))
    }
}

impl Mul<Vec2f> for Point {
    type Output = Point;

    fn mul(self, other: Vec2f) -> Point {
        let v = self.to_vec2f();
        Point::from_f32(v.0 * other.0, v.1 * other.1)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, amount: i32) -> Point {
        Point::new(self.x.wrapping_mul(amount), self.y.wrapping_mul(amount))
    }
}

/// Panics if either component of the divisor is zero.
impl Div for Point {
    type Output = Point;

    fn div(self, other: Point) -> Point {
        Point::new(self.x / other.x, self.y / other.y)
    }
}

/// Division happens in floats; a zero component saturates the cast instead of panicking.
impl Div<Vec2f> for Point {
    type Output = Point;

    fn div(self, other: Vec2f) -> Point {
        let v = self.to_vec2f();
        Point::from_f32(v.0 / other.0, v.1 / other.1)
    }
}

/// Panics if `amount` is zero.
impl Div<i32> for Point {
    type Output = Point;

    fn div(self, amount: i32) -> Point {
        Point::new(self.x / amount, self.y / amount)
    }
}

impl From<Vec2f> for Point {
    fn from(v: Vec2f) -> Point {
        Point::from_vec2f(v)
    }
}

impl From<Point> for Vec2f {
    fn from(p: Point) -> Vec2f {
        p.to_vec2f()
    }
}

impl From<(i32, i32)> for Point {
    fn from(v: (i32, i32)) -> Point {
        Point::new(v.0, v.1)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> (i32, i32) {
        (p.x, p.y)
    }
}

/// Renders as `<X, Y>`. Formatter options such as width or sign apply to each component.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&NumberFormat::INVARIANT), f)
    }
}

impl fmt::LowerHex for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.display_with(&NumberFormat::INVARIANT), f)
    }
}

impl fmt::UpperHex for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.display_with(&NumberFormat::INVARIANT), f)
    }
}
