//! Polar geometry primitives: points on circles, arcs and ring wedges.
//!
//! Angles follow the screen convention documented in [`crate::types`]:
//! 0° is 3 o'clock and angles grow clockwise, so -90° is 12 o'clock. Every
//! rotation offset in the renderer and builder assumes this.

use std::f64::consts::PI;
use std::fmt;

use glam::dvec2;

use crate::types::{Angle, Length, Point};

/// Degrees to radians
#[inline]
pub fn to_radian(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Cartesian point at `radius` from `origin` in direction `angle`.
///
/// `sin` is applied to y directly, so with y pointing down the page the
/// angle increases clockwise.
pub fn point_on_circle(origin: Point, radius: Length, angle: Angle) -> Point {
    let rad = angle.to_radians();
    let run = radius.raw() * rad.cos();
    let rise = radius.raw() * rad.sin();
    Point::from_dvec2(origin.to_dvec2() + dvec2(run, rise))
}

/// SVG elliptical-arc flag triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcFlags {
    /// Always 0 for circular arcs
    pub x_axis_rotation: u8,
    pub large_arc: bool,
    pub sweep: bool,
}

impl fmt::Display for ArcFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.x_axis_rotation,
            u8::from(self.large_arc),
            u8::from(self.sweep)
        )
    }
}

/// How an arc's path fragment reaches its start point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStart {
    /// Begin a new subpath (`M`)
    Move,
    /// Continue the current subpath with a straight line (`L`)
    LineTo,
}

impl PathStart {
    fn command(self) -> &'static str {
        match self {
            PathStart::Move => "M",
            PathStart::LineTo => "L",
        }
    }
}

/// A single-radius circular arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: Point,
    pub stop: Point,
    pub radius: Length,
    pub flags: ArcFlags,
}

impl Arc {
    /// Path fragment: `<M|L> start A r,r flags stop ` (trailing space included
    /// so fragments concatenate).
    pub fn path(&self, mode: PathStart) -> String {
        format!(
            "{} {} A {},{} {} {} ",
            mode.command(),
            self.start.path_text(),
            self.radius,
            self.radius,
            self.flags,
            self.stop.path_text()
        )
    }
}

/// Arc of `radius` around `origin` from `start_angle` to `stop_angle`.
///
/// The large-arc flag is set only when the span exceeds 180°; the sweep flag
/// is set when the angles increase (clockwise on screen). Angles outside
/// one turn are accepted as-is.
pub fn arc(origin: Point, radius: Length, start_angle: Angle, stop_angle: Angle) -> Arc {
    let start = point_on_circle(origin, radius, start_angle);
    let stop = point_on_circle(origin, radius, stop_angle);

    let flags = ArcFlags {
        x_axis_rotation: 0,
        large_arc: start_angle.span_to(stop_angle) > Angle::HALF_TURN,
        sweep: start_angle < stop_angle,
    };

    Arc {
        start,
        stop,
        radius,
        flags,
    }
}

/// A ring wedge: the filled region between two radii and two angles.
///
/// The inner arc runs in the opposite direction to the outer one, so
/// outer → inner → back to the outer start is always a closed outline.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionalArc {
    pub outer: Arc,
    pub inner: Arc,
    pub stroke: String,
    pub fill: String,
}

impl DimensionalArc {
    /// Closed path data for the wedge outline
    pub fn path(&self) -> String {
        let mut d = self.outer.path(PathStart::Move);
        d.push_str(&self.inner.path(PathStart::LineTo));
        d.push_str(&format!("L {} ", self.outer.start.path_text()));
        d
    }
}

/// Build a ring wedge between `inner_radius` and `outer_radius` spanning
/// `[start_angle, stop_angle]`.
pub fn dimensional_arc(
    origin: Point,
    inner_radius: Length,
    outer_radius: Length,
    start_angle: Angle,
    stop_angle: Angle,
    stroke: impl Into<String>,
    fill: impl Into<String>,
) -> DimensionalArc {
    let outer = arc(origin, outer_radius, start_angle, stop_angle);
    let inner = arc(origin, inner_radius, stop_angle, start_angle);

    DimensionalArc {
        outer,
        inner,
        stroke: stroke.into(),
        fill: fill.into(),
    }
}
