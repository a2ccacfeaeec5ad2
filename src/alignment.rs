//! Hijri alignment: which Islamic month is current, and where it starts
//! relative to January 1.
//!
//! This is a linear heuristic anchored on a single known date
//! (1 Sha'ban 1447 AH = 2026-01-20) and the mean synodic month. It does not
//! model moon sighting, so results can be a day or so off the observed
//! calendar, and drift grows slowly with distance from the anchor. That is
//! accepted: the output only decides how the inner ring is rotated.

use std::fmt;

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::calendar::Month;
use crate::log::debug;

/// Mean length of a lunar month in days
pub const LUNAR_MONTH_DAYS: f64 = 29.530588853;

/// Hijri year of the anchor date
pub const REFERENCE_HIJRI_YEAR: i32 = 1447;

/// Hijri month of the anchor date (Sha'ban)
pub const REFERENCE_HIJRI_MONTH: u8 = 8;

/// Canonical Islamic month names, Muharram first
pub const ISLAMIC_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi ath-Thani",
    "Jumada al-Awwal",
    "Jumada ath-Thani",
    "Rajab",
    "Sha'baan",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qa'dah",
    "Dhu al-Hijja",
];

/// Gregorian date of 1 Sha'ban 1447 AH
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 20).expect("2026-01-20 is a valid date")
}

/// Islamic month name for a 0-based index
pub fn islamic_month_name(index: usize) -> Option<&'static str> {
    ISLAMIC_MONTHS.get(index).copied()
}

/// An explicit Hijri date supplied instead of a Gregorian one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriDate {
    pub year: i32,
    /// 1..=12
    pub month: u8,
    /// 1..=30
    pub day: u8,
}

impl HijriDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Months since 1 Muharram of year 1
    fn months_from_muharram(year: i32, month: u8) -> i64 {
        (i64::from(year) - 1) * 12 + (i64::from(month) - 1)
    }

    /// Approximate offset of this date from the anchor, in (fractional) days
    fn days_from_reference(self) -> f64 {
        let months = Self::months_from_muharram(self.year, self.month)
            - Self::months_from_muharram(REFERENCE_HIJRI_YEAR, REFERENCE_HIJRI_MONTH);
        months as f64 * LUNAR_MONTH_DAYS + (f64::from(self.day) - 1.0)
    }

    /// Approximate Gregorian date for this Hijri date, or `None` when it
    /// falls outside the range chrono can represent.
    pub fn to_gregorian(self) -> Option<NaiveDate> {
        let days = Duration::try_days(self.days_from_reference().floor() as i64)?;
        reference_date().checked_add_signed(days)
    }
}

/// Everything the builder needs to rotate the Islamic ring.
///
/// Computed once per generation and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentParams {
    /// 0-based index of the current Islamic month (0 = Muharram)
    pub current_month_index: usize,
    /// Days from January 1 to the first of the current Islamic month, plus
    /// 0.5 so the ring lands on the middle of that day
    pub days_elapsed: f64,
    /// Rotation applied to Islamic day numerals: minus the unbiased day count
    pub rotation_offset: i64,
    pub gregorian_date: NaiveDate,
    /// 1..=12
    pub hijri_month: u8,
    pub hijri_year: i32,
}

impl AlignmentParams {
    /// Alignment for a Gregorian date
    pub fn for_date(date: NaiveDate) -> Self {
        align_on(date)
    }

    /// Alignment for an explicit Hijri date; `None` if it projects outside
    /// chrono's date range
    pub fn for_hijri(date: HijriDate) -> Option<Self> {
        alignment_for_hijri(date)
    }

    /// Alignment for the local current date
    pub fn today() -> Self {
        align_on(Local::now().date_naive())
    }

    /// Name of the current Islamic month
    pub fn month_name(&self) -> &'static str {
        islamic_month_name(self.current_month_index).unwrap_or("?")
    }
}

impl fmt::Display for AlignmentParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.month_name();
        writeln!(f, "=== Islamic Calendar Alignment ===")?;
        writeln!(f, "Gregorian date: {}", self.gregorian_date.format("%Y-%m-%d"))?;
        writeln!(f, "Hijri date: {} {} AH", name, self.hijri_year)?;
        writeln!(f, "Current month index: {} ({})", self.current_month_index, name)?;
        writeln!(f, "Days elapsed from Jan 1: {:.1}", self.days_elapsed)?;
        writeln!(f, "Rotation offset: {}", self.rotation_offset)?;
        write!(f, "==================================")
    }
}

/// Compute alignment parameters.
///
/// An explicit Hijri date wins; otherwise the Gregorian date is used, and if
/// neither is given the local current date. Only a Hijri date can fail, when
/// its projection lies outside chrono's date range.
pub fn alignment_params(gregorian: Option<NaiveDate>, hijri: Option<HijriDate>) -> Option<AlignmentParams> {
    match (hijri, gregorian) {
        (Some(h), _) => alignment_for_hijri(h),
        (None, Some(date)) => Some(align_on(date)),
        (None, None) => Some(AlignmentParams::today()),
    }
}

/// Alignment for an explicit Hijri date, ignoring any Gregorian input
pub fn alignment_for_hijri(date: HijriDate) -> Option<AlignmentParams> {
    date.to_gregorian().map(align_on)
}

/// Alignment for a Gregorian date, measured from the anchor
fn align_on(gregorian_date: NaiveDate) -> AlignmentParams {
    let days_since_epoch = (gregorian_date - reference_date()).num_days();

    // floor, not truncation: dates before the anchor belong to earlier months
    let month_offset = (days_since_epoch as f64 / LUNAR_MONTH_DAYS).floor() as i64;

    let months_from_muharram = i64::from(REFERENCE_HIJRI_MONTH) - 1 + month_offset;
    let hijri_month = (months_from_muharram.rem_euclid(12) + 1) as u8;
    let hijri_year = REFERENCE_HIJRI_YEAR + months_from_muharram.div_euclid(12) as i32;

    // Days from Jan 1 of the target year to the anchor, then on to the
    // estimated first of the current month.
    let anchor_from_jan1 = i64::from(gregorian_date.ordinal0()) - days_since_epoch;
    let first_of_month_from_jan1 = month_offset as f64 * LUNAR_MONTH_DAYS + anchor_from_jan1 as f64;
    let whole_days = first_of_month_from_jan1.floor();

    let params = AlignmentParams {
        current_month_index: usize::from(hijri_month - 1),
        days_elapsed: whole_days + 0.5,
        rotation_offset: -(whole_days as i64),
        gregorian_date,
        hijri_month,
        hijri_year,
    };
    debug!(
        date = %params.gregorian_date,
        hijri_month = params.hijri_month,
        hijri_year = params.hijri_year,
        days_elapsed = params.days_elapsed,
        "computed hijri alignment"
    );
    params
}

/// Rotate `months` so `start_index` comes first, renumbering 1..=n in the new
/// order. The number drives label orientation downstream, so renumbering
/// matters as much as reordering.
pub fn rotate_months(months: &[Month], start_index: usize) -> Vec<Month> {
    let n = months.len();
    (0..n)
        .map(|i| Month {
            number: (i + 1) as u8,
            ..months[(start_index + i) % n]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ISLAMIC_YEAR;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_date_is_first_of_shaban() {
        let p = AlignmentParams::for_date(reference_date());
        assert_eq!(p.hijri_month, 8);
        assert_eq!(p.hijri_year, 1447);
        assert_eq!(p.days_elapsed, 19.5);
        assert_eq!(p.rotation_offset, -19);
    }

    #[test]
    fn early_february_is_shaban() {
        let p = AlignmentParams::for_date(date(2026, 2, 5));
        assert_eq!(p.current_month_index, 7);
        assert_eq!(p.hijri_month, 8);
        assert_eq!(p.month_name(), "Sha'baan");
    }

    #[test]
    fn late_february_is_ramadan() {
        let p = AlignmentParams::for_date(date(2026, 2, 25));
        assert_eq!(p.current_month_index, 8);
        assert_eq!(p.hijri_month, 9);
    }

    #[test]
    fn day_before_anchor_is_rajab() {
        let p = AlignmentParams::for_date(date(2026, 1, 19));
        assert_eq!(p.hijri_month, 7);
        assert_eq!(p.hijri_year, 1447);
    }

    #[test]
    fn year_wraps_backwards_through_muharram() {
        // ~8 lunar months before the anchor lands in Dhu al-Hijja 1446
        let p = AlignmentParams::for_date(date(2025, 6, 10));
        assert_eq!(p.hijri_month, 12);
        assert_eq!(p.hijri_year, 1446);
    }

    #[test]
    fn rotation_offset_drops_the_centering_bias() {
        for d in [date(2026, 2, 5), date(2026, 7, 1), date(2025, 11, 11)] {
            let p = AlignmentParams::for_date(d);
            assert_eq!(p.rotation_offset, -((p.days_elapsed - 0.5).round() as i64));
        }
    }

    #[test]
    fn hijri_input_selects_that_month() {
        let p = AlignmentParams::for_hijri(HijriDate::new(1447, 8, 17)).unwrap();
        assert_eq!(p.current_month_index, 7);
        assert_eq!(p.hijri_month, 8);
        assert_eq!(p.hijri_year, 1447);
        assert_eq!(p.gregorian_date, date(2026, 2, 5));
    }

    #[test]
    fn hijri_wins_over_gregorian() {
        let p = alignment_params(Some(date(2030, 1, 1)), Some(HijriDate::new(1447, 9, 10))).unwrap();
        assert_eq!(p.hijri_month, 9);
        assert_eq!(p.hijri_year, 1447);
    }

    #[test]
    fn index_in_range_two_years_either_side() {
        let start = reference_date() - Duration::days(800);
        for n in 0..1600 {
            let p = AlignmentParams::for_date(start + Duration::days(n));
            assert!(p.current_month_index <= 11);
            assert_eq!(p.current_month_index + 1, usize::from(p.hijri_month));
        }
    }

    #[test]
    fn hijri_round_trip_keeps_month_and_year() {
        // Day 1 sits on the floor boundary and may resolve to the previous
        // month; every other day is stable.
        for year in [1445, 1446, 1447, 1448, 1449] {
            for month in 1..=12u8 {
                for day in 2..=30u8 {
                    let h = HijriDate::new(year, month, day);
                    let p = AlignmentParams::for_date(h.to_gregorian().unwrap());
                    assert_eq!((p.hijri_year, p.hijri_month), (year, month), "{h:?}");
                }
            }
        }
    }

    #[test]
    fn to_gregorian_of_anchor() {
        assert_eq!(HijriDate::new(1447, 8, 1).to_gregorian(), Some(reference_date()));
    }

    #[test]
    fn hijri_past_chrono_range_has_no_alignment() {
        for year in [300_000, -300_000, i32::MAX] {
            let h = HijriDate::new(year, 1, 1);
            assert_eq!(h.to_gregorian(), None, "{h:?}");
            assert_eq!(alignment_for_hijri(h), None, "{h:?}");
            assert_eq!(alignment_params(Some(date(2026, 2, 5)), Some(h)), None, "{h:?}");
        }
    }

    #[test]
    fn far_but_representable_hijri_still_resolves() {
        // multi-millennium drift is accepted
        let p = alignment_for_hijri(HijriDate::new(9000, 5, 10)).unwrap();
        assert_eq!((p.hijri_year, p.hijri_month), (9000, 5));
        assert!(p.current_month_index <= 11);
    }

    #[test]
    fn display_report() {
        let p = AlignmentParams::for_date(date(2026, 2, 5));
        let report = p.to_string();
        assert!(report.contains("Gregorian date: 2026-02-05"));
        assert!(report.contains("Hijri date: Sha'baan 1447 AH"));
        assert!(report.contains("Days elapsed from Jan 1: 19.5"));
        assert!(report.contains("Rotation offset: -19"));
    }

    #[test]
    fn rotate_to_shaban() {
        let rotated = rotate_months(&ISLAMIC_YEAR.months, 7);
        assert_eq!(rotated.len(), 12);
        assert_eq!(rotated[0].name, "Sha'baan");
        assert_eq!(rotated[0].number, 1);
        assert_eq!(rotated[1].name, "Ramadan");
        assert_eq!(rotated[1].number, 2);
        assert_eq!(rotated[11].name, "Rajab");
        assert_eq!(rotated[11].number, 12);
    }

    #[test]
    fn rotate_by_zero_keeps_order() {
        let rotated = rotate_months(&ISLAMIC_YEAR.months, 0);
        assert_eq!(rotated, ISLAMIC_YEAR.months.to_vec());
    }

    #[test]
    fn rotate_keeps_colors_with_names() {
        let rotated = rotate_months(&ISLAMIC_YEAR.months, 5);
        for m in &rotated {
            let canonical = ISLAMIC_YEAR.months.iter().find(|c| c.name == m.name).unwrap();
            assert_eq!(m.color, canonical.color);
            assert_eq!(m.num_days, canonical.num_days);
        }
    }

    #[test]
    fn rotate_empty_is_empty() {
        assert!(rotate_months(&[], 3).is_empty());
    }

    #[test]
    fn month_names() {
        assert_eq!(islamic_month_name(0), Some("Muharram"));
        assert_eq!(islamic_month_name(8), Some("Ramadan"));
        assert_eq!(islamic_month_name(11), Some("Dhu al-Hijja"));
        assert_eq!(islamic_month_name(12), None);
    }
}
