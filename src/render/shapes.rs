//! Drawable primitives for month rendering
//!
//! A month is a flat list of three kinds of part: ring wedges, the curved
//! month name, and point-centred day numerals. [`Drawable`] is the closed set
//! and [`Draw`] the single operation they share.

use enum_dispatch::enum_dispatch;
use svg::node::element::{Group, Path, Text, TextPath};

use super::context::RenderContext;
use crate::geometry::{Arc, DimensionalArc, PathStart};
use crate::types::{Angle, Length, Point};

/// Font stack for curved month names
pub const LABEL_FONT_FAMILY: &str = "Arimo, Arial, Helvetica, sans-serif";

/// Numerals sit this fraction of their font size below the anchor point so
/// they look vertically centred.
const NUMERAL_BASELINE_NUDGE: f64 = 0.1;

/// Common behavior for all drawable parts
#[enum_dispatch]
pub trait Draw {
    /// Append this part's SVG nodes to `group`
    fn draw(&self, ctx: &mut RenderContext, group: Group) -> Group;
}

/// Filled ring wedge (month background or day box)
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub shape: DimensionalArc,
}

impl Draw for Wedge {
    fn draw(&self, ctx: &mut RenderContext, group: Group) -> Group {
        let path = Path::new()
            .set("d", self.shape.path())
            .set("stroke", self.shape.stroke.as_str())
            .set("stroke-width", ctx.stroke_width)
            .set("fill", self.shape.fill.as_str());
        group.add(path)
    }
}

/// Text that follows an arc, read in the arc's direction of travel
#[derive(Debug, Clone, PartialEq)]
pub struct CurvedLabel {
    pub arc: Arc,
    pub text: String,
    pub font_size: Length,
}

impl Draw for CurvedLabel {
    fn draw(&self, ctx: &mut RenderContext, group: Group) -> Group {
        let id = ctx.next_text_path_id();

        // invisible guide path
        let guide = Path::new()
            .set("id", id.as_str())
            .set("d", self.arc.path(PathStart::Move))
            .set("stroke", "none")
            .set("fill", "none");

        let text_path = TextPath::new(self.text.as_str())
            .set("href", format!("#{id}"))
            .set("startOffset", "50%")
            .set("method", "align")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle");

        let text = Text::new("")
            .set("font-size", self.font_size.raw())
            .set("font-family", LABEL_FONT_FAMILY)
            .add(text_path);

        group.add(guide).add(text)
    }
}

/// Text centred on a point and rotated about it
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub position: Point,
    pub text: String,
    pub font_size: Length,
    pub rotation: Angle,
}

impl PointLabel {
    /// Baseline y after the centring nudge
    pub fn baseline_y(&self) -> Length {
        self.position.y + self.font_size * NUMERAL_BASELINE_NUDGE
    }
}

impl Draw for PointLabel {
    fn draw(&self, _ctx: &mut RenderContext, group: Group) -> Group {
        let Point { x, y } = self.position;
        let text = Text::new(self.text.as_str())
            .set("x", x.raw())
            .set("y", self.baseline_y().raw())
            .set("font-size", self.font_size.raw())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("transform", format!("rotate({}, {}, {})", self.rotation, x, y));
        group.add(text)
    }
}

/// A drawable part of a month
#[enum_dispatch(Draw)]
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Wedge(Wedge),
    CurvedLabel(CurvedLabel),
    PointLabel(PointLabel),
}

impl Drawable {
    pub fn as_wedge(&self) -> Option<&Wedge> {
        match self {
            Drawable::Wedge(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_curved_label(&self) -> Option<&CurvedLabel> {
        match self {
            Drawable::CurvedLabel(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_point_label(&self) -> Option<&PointLabel> {
        match self {
            Drawable::PointLabel(p) => Some(p),
            _ => None,
        }
    }
}
