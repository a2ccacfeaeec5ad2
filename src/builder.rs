//! Calendar composition: month instances, strip pages and the circular cover.
//!
//! Every month is drawn by [`month_parts`] centred at 12 o'clock. Strip pages
//! stack those drawings vertically; the cover wraps each one in a rotate
//! transform that puts it at its true angle on the year circle.

use std::ops::Range;

use crate::alignment::{AlignmentParams, rotate_months};
use crate::calendar::{ISLAMIC_YEAR, Month, MonthInstance, MonthSettings, SOLAR_YEAR};
use crate::layout::{ComputedLayout, LayoutConfig, compute_layout};
use crate::log::debug;
use crate::render::{Orientation, RenderContext, month_group, month_parts, page_canvas, transformed_month_group};
use crate::types::{Angle, Point};

/// Vertical advance between consecutive solar/Islamic pairs, in ring
/// thickness plus gap
const PAIR_SPACING: f64 = 2.3;

/// Placement of the shrunken ring on the cover page
const COVER_TRANSLATE: (f64, f64) = (75.0, 50.0);
const COVER_SCALE: f64 = 0.3;

/// Numeral counter-rotation for a month at `number` (1-based) around the
/// circle: each month is 30° further clockwise.
pub fn date_rotation(month: &Month) -> Angle {
    let steps = f64::from(month.number.saturating_sub(1));
    // subtract from +0 so January prints as `0`, not `-0`
    Angle(0.0 - steps * (360.0 / 12.0))
}

/// Angle that rotates a month drawn at 12 o'clock to its place on the year
/// circle, given the days before its start.
pub fn true_rotation_angle(days_elapsed: f64, num_days: f64, days_in_year: u32) -> Angle {
    Angle(360.0 * (days_elapsed + num_days / 2.0) / f64::from(days_in_year))
}

/// Cover rotation for each month of a ring.
///
/// The first month is centred on 12 o'clock, shifted by `base` days; each
/// following month starts where the previous one ended.
pub fn ring_rotations(num_days: &[f64], base: f64, days_in_year: u32) -> Vec<Angle> {
    let mut days_elapsed = base - num_days.first().map_or(0.0, |d| d / 2.0);
    num_days
        .iter()
        .map(|&days| {
            let angle = true_rotation_angle(days_elapsed, days, days_in_year);
            days_elapsed += days;
            angle
        })
        .collect()
}

/// Month index ranges for consecutive strip pages.
///
/// Pages start while the start index is below `len - 1`, so a lone final
/// month never gets a page to itself.
pub fn page_ranges(len: usize, per_page: usize) -> Vec<Range<usize>> {
    let per_page = per_page.max(1);
    let mut ranges = Vec::new();
    let mut start = 0;
    while start + 1 < len {
        let end = (start + per_page).min(len);
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// `transform` for one month group on the cover
pub fn cover_transform(rotation: Angle, origin: Point, origin_first: Point) -> String {
    let (tx, ty) = COVER_TRANSLATE;
    format!(
        "translate({tx}, {ty}) scale({COVER_SCALE}) rotate({rotation}, {}, {}) translate(0, {})",
        origin.x,
        origin.y,
        origin_first.y - origin.y
    )
}

/// Strip pages plus the cover for one alignment
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSet {
    pub pages: Vec<String>,
    pub cover: String,
}

/// Builds calendar SVG documents from a layout configuration
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    config: LayoutConfig,
    layout: ComputedLayout,
}

impl CalendarBuilder {
    pub fn new(config: LayoutConfig) -> Self {
        let layout = compute_layout(&config);
        Self { config, layout }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self) -> &ComputedLayout {
        &self.layout
    }

    /// Fresh per-document rendering state
    fn context(&self) -> RenderContext {
        RenderContext::new(self.layout.stroke_width)
    }

    /// Centre of the first strip; also the cover's rotation pivot
    fn first_origin(&self) -> Point {
        Point::new(
            self.layout.width_center,
            self.layout.outermost_radius + self.layout.vertical_offset_scaled,
        )
    }

    /// Solar months on the outer ring, January first.
    ///
    /// April through September sit on the lower half of the circle, so their
    /// names are flipped to stay readable.
    pub fn solar_month_instances(&self) -> Vec<MonthInstance> {
        let l = &self.layout;
        SOLAR_YEAR
            .months
            .iter()
            .enumerate()
            .map(|(index, month)| {
                month.instance(MonthSettings {
                    name_upside_down: (3..9).contains(&index),
                    date_on_top: false,
                    date_box_height: l.date_box_height,
                    inner_radius: l.inner_radius,
                    outer_radius: l.outermost_radius,
                    date_angle_offset: date_rotation(month),
                })
            })
            .collect()
    }

    /// Islamic months on the inner ring, starting at the current month.
    ///
    /// The ring sits one thickness inside the solar ring with its date boxes
    /// facing outward, against the solar dates.
    pub fn islamic_month_instances(&self, alignment: &AlignmentParams) -> Vec<MonthInstance> {
        let l = &self.layout;
        let rotation_offset = Angle(alignment.rotation_offset as f64);
        rotate_months(&ISLAMIC_YEAR.months, alignment.current_month_index)
            .iter()
            .map(|month| {
                month.instance(MonthSettings {
                    name_upside_down: month.number > 3 && month.number <= 9,
                    date_on_top: true,
                    date_box_height: l.date_box_height,
                    inner_radius: l.inner_radius - l.ring_thickness,
                    outer_radius: l.outermost_radius - l.ring_thickness,
                    date_angle_offset: date_rotation(month) + rotation_offset,
                })
            })
            .collect()
    }

    /// One strip page: each solar month with its positional Islamic partner
    /// stacked below it, pairs running down the page.
    pub fn calendar_svg(&self, solar: &[MonthInstance], islamic: &[MonthInstance]) -> String {
        let l = &self.layout;
        let mut ctx = self.context();
        let mut doc = page_canvas(Orientation::Portrait);
        let mut origin = self.first_origin();

        for (i, month) in solar.iter().enumerate() {
            doc = doc.add(month_group(&month_parts(month, l.days_in_year, origin), &mut ctx));
            origin = origin.shifted_down(l.month_offset);

            if let Some(partner) = islamic.get(i) {
                doc = doc.add(month_group(&month_parts(partner, l.days_in_year, origin), &mut ctx));
            }

            origin = origin.shifted_down((l.ring_thickness + l.month_offset) * PAIR_SPACING);
        }

        doc.to_string()
    }

    /// Single-page cover with both rings assembled into circles.
    ///
    /// `islamic_base` is the alignment's `days_elapsed`: how far past
    /// January 1 the first Islamic month begins.
    pub fn circle_cover_svg(&self, solar: &[MonthInstance], islamic: &[MonthInstance], islamic_base: f64) -> String {
        let l = &self.layout;
        let mut ctx = self.context();
        let mut doc = page_canvas(Orientation::Portrait);
        let origin_first = self.first_origin();
        let origin = origin_first;

        let solar_angles = ring_rotations(&day_counts(solar), 0.0, l.days_in_year);
        let islamic_angles = ring_rotations(&day_counts(islamic), islamic_base, l.days_in_year);

        for (i, (month, angle)) in solar.iter().zip(&solar_angles).enumerate() {
            let transform = cover_transform(*angle, origin, origin_first);
            let parts = month_parts(month, l.days_in_year, origin);
            doc = doc.add(transformed_month_group(&parts, &mut ctx, &transform));

            if let (Some(partner), Some(angle)) = (islamic.get(i), islamic_angles.get(i)) {
                let transform = cover_transform(*angle, origin, origin_first);
                let parts = month_parts(partner, l.days_in_year, origin);
                doc = doc.add(transformed_month_group(&parts, &mut ctx, &transform));
            }
        }

        doc.to_string()
    }

    /// All strip pages, `num_rows * num_columns` month pairs per page
    pub fn strip_pages(&self, solar: &[MonthInstance], islamic: &[MonthInstance]) -> Vec<String> {
        let ranges = page_ranges(solar.len(), self.layout.months_per_page());
        debug!(pages = ranges.len(), per_page = self.layout.months_per_page(), "paginating strips");
        ranges
            .into_iter()
            .map(|range| {
                let partners = &islamic[range.start.min(islamic.len())..range.end.min(islamic.len())];
                self.calendar_svg(&solar[range], partners)
            })
            .collect()
    }

    /// Strip pages and cover for `alignment`
    pub fn build(&self, alignment: &AlignmentParams) -> CalendarSet {
        let solar = self.solar_month_instances();
        let islamic = self.islamic_month_instances(alignment);
        CalendarSet {
            pages: self.strip_pages(&solar, &islamic),
            cover: self.circle_cover_svg(&solar, &islamic, alignment.days_elapsed),
        }
    }
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

fn day_counts(months: &[MonthInstance]) -> Vec<f64> {
    months.iter().map(|m| f64::from(m.num_days)).collect()
}
