//! Month rendering
//!
//! This module is organized into submodules:
//! - `context`: RenderContext carrying per-document state (textPath ids, stroke width)
//! - `shapes`: the closed set of drawable parts and their SVG output
//! - `page`: page canvases and month groups
//!
//! [`month_parts`] turns one [`MonthInstance`] into drawables, always centred
//! at 12 o'clock around `origin`. Placing the month on a strip or rotating it
//! onto the cover circle is the builder's job.

pub mod context;
pub mod page;
pub mod shapes;

pub use context::RenderContext;
pub use page::{Orientation, month_group, page_canvas, transformed_month_group};
pub use shapes::{CurvedLabel, Draw, Drawable, PointLabel, Wedge};

use crate::calendar::{DATE_FILL_COLOR, MonthInstance};
use crate::geometry::{arc, dimensional_arc, point_on_circle};
use crate::log::warn;
use crate::types::{Angle, Length, Point};

/// Outline colour of every wedge
pub const WEDGE_STROKE: &str = "black";

/// Numerals fill this share of the date band
const NUMERAL_SIZE_RATIO: f64 = 0.6;

/// Angular span of a month: `360 * days / days_in_year`, centred on 12 o'clock
pub fn month_span(num_days: u32, days_in_year: u32) -> (Angle, Angle) {
    let width = Angle(360.0 * f64::from(num_days) / f64::from(days_in_year));
    let half = width / 2.0;
    (Angle::TWELVE_O_CLOCK - half, Angle::TWELVE_O_CLOCK + half)
}

/// Radii of the date band and the month name inside one ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthBands {
    pub date_inner: Length,
    pub date_outer: Length,
    /// Midway across the part of the ring the date band leaves free
    pub name_radius: Length,
}

impl MonthBands {
    pub fn for_month(month: &MonthInstance) -> Self {
        if month.date_on_top {
            let date_inner = month.outer_radius - month.date_box_height;
            Self {
                date_inner,
                date_outer: month.outer_radius,
                name_radius: date_inner.midpoint(month.inner_radius),
            }
        } else {
            let date_outer = month.inner_radius + month.date_box_height;
            Self {
                date_inner: month.inner_radius,
                date_outer,
                name_radius: date_outer.midpoint(month.outer_radius),
            }
        }
    }

    pub fn date_height(&self) -> Length {
        self.date_outer - self.date_inner
    }
}

/// Drawables for one month, in paint order: background wedge, curved name,
/// then a (box, numeral) pair per day. Always `2 + 2 * num_days` parts.
///
/// Degenerate input (no days, inverted radii) still renders; it just draws
/// zero-width or inside-out shapes.
pub fn month_parts(month: &MonthInstance, days_in_year: u32, origin: Point) -> Vec<Drawable> {
    if month.num_days == 0 || days_in_year == 0 {
        warn!(month = %month.name, days_in_year, "month with no days");
    }
    if month.inner_radius > month.outer_radius {
        warn!(
            month = %month.name,
            inner = month.inner_radius.raw(),
            outer = month.outer_radius.raw(),
            "inner radius exceeds outer radius"
        );
    }

    let (start, stop) = month_span(month.num_days, days_in_year);
    let mut parts = Vec::with_capacity(2 + 2 * month.num_days as usize);

    parts.push(Drawable::from(Wedge {
        shape: dimensional_arc(
            origin,
            month.inner_radius,
            month.outer_radius,
            start,
            stop,
            WEDGE_STROKE,
            month.color.as_str(),
        ),
    }));

    let bands = MonthBands::for_month(month);

    // text on a path reads along the path, so flipping the arc flips the name
    let name_arc = if month.name_upside_down {
        arc(origin, bands.name_radius, stop, start)
    } else {
        arc(origin, bands.name_radius, start, stop)
    };
    parts.push(Drawable::from(CurvedLabel {
        arc: name_arc,
        text: month.name.clone(),
        font_size: (month.outer_radius - month.inner_radius - month.date_box_height) / 2.0,
    }));

    let day_width = (stop - start) / f64::from(month.num_days);
    let numeral_radius = bands.date_inner.midpoint(bands.date_outer);
    let numeral_size = bands.date_height() * NUMERAL_SIZE_RATIO;

    let mut day_end = start;
    for day in 1..=month.num_days {
        let day_start = day_end;
        day_end = day_start + day_width;

        parts.push(Drawable::from(Wedge {
            shape: dimensional_arc(
                origin,
                bands.date_inner,
                bands.date_outer,
                day_start,
                day_end,
                WEDGE_STROKE,
                DATE_FILL_COLOR,
            ),
        }));

        parts.push(Drawable::from(PointLabel {
            position: point_on_circle(origin, numeral_radius, day_start.midpoint(day_end)),
            text: day.to_string(),
            font_size: numeral_size,
            rotation: month.date_angle_offset,
        }));
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn instance(num_days: u32, date_on_top: bool, name_upside_down: bool) -> MonthInstance {
        MonthInstance {
            name: "Test".to_string(),
            num_days,
            color: "#abcdef".to_string(),
            name_upside_down,
            date_on_top,
            date_box_height: Length(2.0),
            inner_radius: Length(90.0),
            outer_radius: Length(100.0),
            date_angle_offset: Angle(-60.0),
        }
    }

    #[test]
    fn part_count_is_two_plus_two_per_day() {
        for days in [0, 1, 28, 29, 30, 31] {
            let parts = month_parts(&instance(days, false, false), 366, Point::new(100.0, 100.0));
            assert_eq!(parts.len(), 2 + 2 * days as usize, "{days} days");
        }
    }

    #[test]
    fn paint_order() {
        let parts = month_parts(&instance(3, false, false), 366, Point::default());
        assert!(parts[0].as_wedge().is_some());
        assert!(parts[1].as_curved_label().is_some());
        for pair in parts[2..].chunks(2) {
            assert!(pair[0].as_wedge().is_some());
            assert!(pair[1].as_point_label().is_some());
        }
    }

    #[test]
    fn span_is_centred_on_twelve() {
        let (start, stop) = month_span(183, 366);
        assert!((start.raw() + 180.0).abs() < EPS);
        assert!(stop.raw().abs() < EPS);
    }

    #[test]
    fn background_uses_month_colour() {
        let parts = month_parts(&instance(30, false, false), 366, Point::default());
        let bg = parts[0].as_wedge().unwrap();
        assert_eq!(bg.shape.fill, "#abcdef");
        assert_eq!(bg.shape.stroke, "black");
        assert_eq!(bg.shape.outer.radius, Length(100.0));
        assert_eq!(bg.shape.inner.radius, Length(90.0));
    }

    #[test]
    fn date_band_at_inner_edge() {
        let bands = MonthBands::for_month(&instance(30, false, false));
        assert_eq!(bands.date_inner, Length(90.0));
        assert_eq!(bands.date_outer, Length(92.0));
        assert_eq!(bands.name_radius, Length(96.0));
    }

    #[test]
    fn date_band_at_outer_edge() {
        let bands = MonthBands::for_month(&instance(30, true, false));
        assert_eq!(bands.date_inner, Length(98.0));
        assert_eq!(bands.date_outer, Length(100.0));
        assert_eq!(bands.name_radius, Length(94.0));
    }

    #[test]
    fn day_boxes_use_date_fill_and_band() {
        let parts = month_parts(&instance(2, true, false), 366, Point::default());
        let day = parts[2].as_wedge().unwrap();
        assert_eq!(day.shape.fill, DATE_FILL_COLOR);
        assert_eq!(day.shape.outer.radius, Length(100.0));
        assert_eq!(day.shape.inner.radius, Length(98.0));
    }

    #[test]
    fn upside_down_name_reverses_arc() {
        let origin = Point::default();
        let upright = month_parts(&instance(30, false, false), 366, origin);
        let flipped = month_parts(&instance(30, false, true), 366, origin);
        let a = &upright[1].as_curved_label().unwrap().arc;
        let b = &flipped[1].as_curved_label().unwrap().arc;
        assert!(a.flags.sweep);
        assert!(!b.flags.sweep);
        assert_eq!(a.start, b.stop);
        assert_eq!(a.stop, b.start);
    }

    #[test]
    fn name_font_size() {
        let parts = month_parts(&instance(30, false, false), 366, Point::default());
        assert_eq!(parts[1].as_curved_label().unwrap().font_size, Length(4.0));
    }

    #[test]
    fn numerals_at_polar_midpoint_with_month_rotation() {
        let origin = Point::new(50.0, 50.0);
        let month = instance(30, false, false);
        let parts = month_parts(&month, 360, origin);
        let (start, _) = month_span(30, 360);
        let numerals: Vec<&PointLabel> = parts.iter().filter_map(Drawable::as_point_label).collect();
        assert_eq!(numerals.len(), 30);
        for (i, label) in numerals.iter().enumerate() {
            assert_eq!(label.text, (i + 1).to_string());
            assert_eq!(label.rotation, Angle(-60.0));
            assert!((label.font_size.raw() - 1.2).abs() < EPS);
            let mid = start + Angle(i as f64 + 0.5);
            let expected = point_on_circle(origin, Length(91.0), mid);
            assert!(label.position.distance(expected).raw() < 1e-6, "day {}", i + 1);
        }
    }

    #[test]
    fn day_boxes_tile_the_month() {
        let origin = Point::default();
        let (start, stop) = month_span(31, 366);
        let parts = month_parts(&instance(31, false, false), 366, origin);
        let boxes: Vec<&Wedge> = parts[2..].iter().filter_map(Drawable::as_wedge).collect();
        assert_eq!(boxes.len(), 31);
        let first = boxes[0];
        let last = boxes[30];
        let first_edge = point_on_circle(origin, Length(90.0), start);
        let last_edge = point_on_circle(origin, Length(92.0), stop);
        assert!(first.shape.inner.stop.distance(first_edge).raw() < EPS);
        assert!(last.shape.outer.stop.distance(last_edge).raw() < 1e-6);
    }
}
