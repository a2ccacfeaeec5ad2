//! Printable two-ring calendars aligning the Gregorian and Hijri years.
//!
//! The outer ring carries the twelve solar months, the inner ring the twelve
//! Islamic months rotated so the current one lines up with today. Output is
//! plain SVG: cut-and-assemble strip pages and a circular cover.
//!
//! ```no_run
//! use ringcal::{AlignmentParams, LayoutConfig};
//!
//! let alignment = AlignmentParams::today();
//! let set = ringcal::generate(LayoutConfig::default(), &alignment);
//! assert!(set.cover.starts_with("<svg"));
//! ```

pub mod alignment;
pub mod args;
pub mod builder;
pub mod calendar;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod log;
pub mod raster;
pub mod render;
pub mod types;

pub use alignment::{AlignmentParams, HijriDate, alignment_for_hijri, alignment_params, rotate_months};
pub use builder::{CalendarBuilder, CalendarSet};
pub use calendar::{Month, MonthInstance};
pub use errors::DateArgError;
pub use layout::{ComputedLayout, LayoutConfig, compute_layout};
pub use raster::{RasterPage, SvgRenderer};

/// Generate strip pages and the cover for `alignment`.
pub fn generate(config: LayoutConfig, alignment: &AlignmentParams) -> CalendarSet {
    CalendarBuilder::new(config).build(alignment)
}
