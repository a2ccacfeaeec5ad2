//! Page layout: everything derived from the scale factor and canvas size.

use crate::types::{Length, inch_to_millimeter};

/// Circumference approximation used to turn the 8" ring width into a radius.
/// Kept at 3.14 so radii match previously printed sheets.
const PI_APPROX: f64 = 3.14;

/// Inner radius as a fraction of the outermost radius
const INNER_RADIUS_RATIO: f64 = 9.2 / 10.0;

/// Date boxes take this share of the ring thickness
const DATE_BOX_RATIO: f64 = 0.2;

/// Nominal ring width in inches before scaling
const RING_WIDTH_INCHES: f64 = 8.0;

/// User-facing layout knobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub scale_factor: f64,
    pub canvas_width_inches: f64,
    /// 365 or 366
    pub days_in_year: u32,
    /// Horizontal nudge of the strip centre, in mm
    pub extra_width_offset: f64,
    /// Top margin of the first strip before scaling, in mm
    pub vertical_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale_factor: 0.7,
            canvas_width_inches: 11.0,
            days_in_year: 366,
            extra_width_offset: 10.0,
            vertical_offset: 30.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_scale(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_days_in_year(mut self, days_in_year: u32) -> Self {
        self.days_in_year = days_in_year;
        self
    }
}

/// Derived dimensions, a pure function of [`LayoutConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedLayout {
    pub scale_factor: f64,
    pub days_in_year: u32,
    pub outermost_radius: Length,
    pub inner_radius: Length,
    pub ring_thickness: Length,
    pub date_box_height: Length,
    /// x of every strip origin
    pub width_center: Length,
    pub vertical_offset_scaled: Length,
    /// Gap between the solar and Islamic strips of a pair
    pub month_offset: Length,
    pub stroke_width: f64,
    pub num_rows: usize,
    pub num_columns: usize,
}

impl ComputedLayout {
    /// Month pairs that fit on one strip page
    pub fn months_per_page(&self) -> usize {
        self.num_rows * self.num_columns
    }
}

/// Page grid for a scale factor: small rings pack two columns of five.
fn grid_for_scale(scale_factor: f64) -> (usize, usize) {
    if scale_factor <= 0.5 {
        (5, 2)
    } else if scale_factor < 0.75 {
        (4, 1)
    } else {
        (2, 1)
    }
}

/// Derive radii, thickness, grid and stroke width from `config`.
pub fn compute_layout(config: &LayoutConfig) -> ComputedLayout {
    let s = config.scale_factor;

    let width = inch_to_millimeter(RING_WIDTH_INCHES * s);
    let outermost_radius = Length(width / ((2.0 * PI_APPROX) / 12.0));
    let inner_radius = outermost_radius * INNER_RADIUS_RATIO;
    let ring_thickness = outermost_radius - inner_radius;
    let date_box_height = ring_thickness * DATE_BOX_RATIO;

    let width_center = Length(inch_to_millimeter(config.canvas_width_inches * s) / 2.0 + config.extra_width_offset);
    let (num_rows, num_columns) = grid_for_scale(s);

    ComputedLayout {
        scale_factor: s,
        days_in_year: config.days_in_year,
        outermost_radius,
        inner_radius,
        ring_thickness,
        date_box_height,
        width_center,
        vertical_offset_scaled: Length(config.vertical_offset * s),
        month_offset: Length(4.0 * s),
        stroke_width: 0.1 * s,
        num_rows,
        num_columns,
    }
}
