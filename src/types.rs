//! Strongly-typed numeric primitives for ringcal (zero-cost newtypes).
//!
//! All drawing happens in millimeters on a page whose origin is the top-left
//! corner, with y growing downward. Angles are degrees in the same screen
//! space: 0° points along +x and positive angles turn clockwise, so -90° is
//! 12 o'clock.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

/// Millimeters per inch used for all page math.
///
/// Deliberately 25, not 25.4. Existing printed sheets and reference SVGs
/// were produced with this value and must stay bit-identical.
pub const MM_PER_INCH: f64 = 25.0;

/// Convert inches to millimeters with the 25 mm/inch approximation.
#[inline]
pub fn inch_to_millimeter(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Length in millimeters (the canonical drawing unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    /// Length from inches, using [`MM_PER_INCH`].
    #[inline]
    pub fn inches(val: f64) -> Length {
        Length(inch_to_millimeter(val))
    }

    /// Raw millimeter value
    #[inline]
    pub const fn raw(self) -> f64 {
        self.0
    }

    /// Midpoint between two radii
    #[inline]
    pub fn midpoint(self, other: Length) -> Length {
        Length((self.0 + other.0) / 2.0)
    }
}

impl From<f64> for Length {
    fn from(val: f64) -> Self {
        Length(val)
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}

impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}

impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}

impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length { Length(-self.0) }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle in degrees, screen convention (clockwise-positive, -90° is up)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Straight up on the page. Every month is drawn centred here before it
    /// is rotated into place.
    pub const TWELVE_O_CLOCK: Angle = Angle(-90.0);

    /// A half turn; arcs wider than this need the SVG large-arc flag.
    pub const HALF_TURN: Angle = Angle(180.0);

    #[inline]
    pub const fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        crate::geometry::to_radian(self.0)
    }

    /// Absolute angular distance to another angle (no wrapping)
    #[inline]
    pub fn span_to(self, other: Angle) -> Angle {
        Angle((other.0 - self.0).abs())
    }

    #[inline]
    pub fn midpoint(self, other: Angle) -> Angle {
        Angle((self.0 + other.0) / 2.0)
    }
}

impl From<f64> for Angle {
    fn from(val: f64) -> Self {
        Angle(val)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle { Angle(self.0 * rhs) }
}

impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, rhs: f64) -> Angle { Angle(self.0 / rhs) }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable page-relative point in millimeters
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    pub fn new(x: impl Into<Length>, y: impl Into<Length>) -> Self {
        Point { x: x.into(), y: y.into() }
    }

    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x.0, self.y.0)
    }

    pub fn from_dvec2(v: DVec2) -> Self {
        Point { x: Length(v.x), y: Length(v.y) }
    }

    /// Same point moved down the page by `dy`
    pub fn shifted_down(self, dy: Length) -> Self {
        Point { x: self.x, y: self.y + dy }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> Length {
        Length(self.to_dvec2().distance(other.to_dvec2()))
    }

    /// Coordinate pair as used inside SVG path data (`x,y`)
    pub fn path_text(self) -> String {
        format!("{},{}", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_use_twenty_five_millimeters() {
        assert_eq!(inch_to_millimeter(1.0), 25.0);
        assert_eq!(Length::inches(8.5).raw(), 212.5);
        assert_eq!(Length::inches(11.0).raw(), 275.0);
    }

    #[test]
    fn length_arithmetic() {
        let a = Length(10.0);
        let b = Length(4.0);
        assert_eq!(a + b, Length(14.0));
        assert_eq!(a - b, Length(6.0));
        assert_eq!(a * 0.5, Length(5.0));
        assert_eq!(a / 4.0, Length(2.5));
        assert_eq!(-b, Length(-4.0));
        assert_eq!(a.midpoint(b), Length(7.0));
    }

    #[test]
    fn angle_span_ignores_direction() {
        assert_eq!(Angle(-100.0).span_to(Angle(-80.0)), Angle(20.0));
        assert_eq!(Angle(-80.0).span_to(Angle(-100.0)), Angle(20.0));
    }

    #[test]
    fn point_path_text() {
        assert_eq!(Point::new(1.5, -2.0).path_text(), "1.5,-2");
    }

    #[test]
    fn shifted_down_keeps_x() {
        let p = Point::new(3.0, 4.0).shifted_down(Length(2.0));
        assert_eq!(p, Point::new(3.0, 6.0));
    }
}
