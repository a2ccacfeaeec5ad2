//! Canonical month tables and per-render month instances.

use crate::types::{Angle, Length};

/// Named 12-colour palettes used for month backgrounds.
pub mod palette {
    pub const CLASSIC: [&str; 12] = [
        "#aebbff", // jan
        "#9ce3ff", // feb
        "#a1fec5", // mar
        "#caff8b", // apr
        "#fdff92", // may
        "#fef087", // jun
        "#ffdb8d", // jul
        "#ffc08d", // aug
        "#ffa290", // sep
        "#ff90c0", // oct
        "#feabf1", // nov
        "#caa8fe", // dec
    ];

    pub const CLASSIC_MOD: [&str; 12] = [
        "#87cdff", "#9ce3ff", "#a1fec5", "#caff8b", "#fdff87", "#fef097",
        "#ffcb8d", "#ffb09d", "#ff92a0", "#ff7080", "#feabf1", "#caa8fe",
    ];

    pub const CLASSIC_MOD_2: [&str; 12] = [
        "#9ce3ff", "#9ce3ff", "#a1fec5", "#caff8b", "#fdff92", "#fef087",
        "#ffdb8d", "#ffc08d", "#ffa290", "#FF4A4C", "#feabf1", "#caa8fe",
    ];

    /// Starts at June; used for the Islamic ring
    pub const HARMONY: [&str; 12] = [
        "#FF9CB1", "#FFB99C", "#FFEA9C", "#E3FF9C", "#B1FF9C", "#9CFFB8",
        "#9CFFEA", "#9CE3FF", "#9CB2FF", "#B89CFF", "#EA9CFF", "#FF9CE3",
    ];

    /// Harmony variant, stored already reversed (December first)
    pub const HARMONY_MOD: [&str; 12] = [
        "#9CFFEA", "#9CFFB8", "#B1FF9C", "#E3FF9C", "#FFEA9C", "#FFB99C",
        "#FF9CB1", "#FF9CE3", "#ff9577", "#B89CFF", "#9CB2FF", "#9CE3FF",
    ];

    pub const RING_2: [&str; 12] = [
        "#70c3ed", "#8ed0b5", "#8ec975", "#aed361", "#f6ed60", "#fdb64e",
        "#f15b40", "#f15f90", "#d671ad", "#9a6db0", "#756bb0", "#6783c2",
    ];

    pub const RING_3: [&str; 12] = [
        "#f68567", "#f489a7", "#df92be", "#ac8bc0", "#9087c0", "#879bce",
        "#96d1f3", "#abdac6", "#abd595", "#c1dd89", "#f9f18c", "#fec679",
    ];

    pub const CLASSIC_ISLAM: [&str; 12] = [
        "#FF5959", "#F1948A", "#caa8fe", "#aebbff", "#9ce3ff", "#a1fec5",
        "#caff8b", "#fdff92", "#fef087", "#ffdb8d", "#ffc08d", "#ffa290",
    ];

    pub const PALLET_1: [&str; 12] = [
        "#db64d3", "#db6498", "#db6c64", "#dba864", "#d3db64", "#98db64",
        "#64db6b", "#64dba7", "#64d4db", "#6498db", "#6b64db", "#a864db",
    ];
}

/// Fill used behind every day numeral
pub const DATE_FILL_COLOR: &str = "#fbebb3";

/// A month in canonical order.
///
/// `num_days` is a list so one table entry can describe variants (e.g. a 29
/// or 30 day Hijri month); the first entry is what gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    /// 1-based position in the (possibly rotated) sequence
    pub number: u8,
    pub name: &'static str,
    pub num_days: &'static [u32],
    pub color: &'static str,
}

impl Month {
    pub const fn new(number: u8, name: &'static str, num_days: &'static [u32], color: &'static str) -> Self {
        Self { number, name, num_days, color }
    }

    /// The day count that gets drawn (first variant, or 0 if none)
    pub fn days(&self) -> u32 {
        self.num_days.first().copied().unwrap_or(0)
    }

    /// Resolve this month into a drawable instance
    pub fn instance(&self, settings: MonthSettings) -> MonthInstance {
        MonthInstance {
            name: self.name.to_string(),
            num_days: self.days(),
            color: self.color.to_string(),
            name_upside_down: settings.name_upside_down,
            date_on_top: settings.date_on_top,
            date_box_height: settings.date_box_height,
            inner_radius: settings.inner_radius,
            outer_radius: settings.outer_radius,
            date_angle_offset: settings.date_angle_offset,
        }
    }
}

/// Twelve months in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year {
    pub months: [Month; 12],
}

impl Year {
    /// Sum of drawn day counts
    pub fn total_days(&self) -> u32 {
        self.months.iter().map(Month::days).sum()
    }
}

/// Gregorian months, January first. February carries 29 days so one sheet
/// covers leap years.
pub const SOLAR_YEAR: Year = Year {
    months: [
        Month::new(1, "January", &[31], palette::CLASSIC[0]),
        Month::new(2, "February", &[29], palette::CLASSIC[1]),
        Month::new(3, "March", &[31], palette::CLASSIC[2]),
        Month::new(4, "April", &[30], palette::CLASSIC[3]),
        Month::new(5, "May", &[31], palette::CLASSIC[4]),
        Month::new(6, "June", &[30], palette::CLASSIC[5]),
        Month::new(7, "July", &[31], palette::CLASSIC[6]),
        Month::new(8, "August", &[31], palette::CLASSIC[7]),
        Month::new(9, "September", &[30], palette::CLASSIC[8]),
        Month::new(10, "October", &[31], palette::CLASSIC[9]),
        Month::new(11, "November", &[30], palette::CLASSIC[10]),
        Month::new(12, "December", &[31], palette::CLASSIC[11]),
    ],
};

/// Hijri months, Muharram first. Every month is drawn with 30 day boxes;
/// numbers are reassigned when the ring is rotated to the current month.
pub const ISLAMIC_YEAR: Year = Year {
    months: [
        Month::new(1, "Muharram", &[30], palette::HARMONY[0]),
        Month::new(2, "Safar", &[30], palette::HARMONY[1]),
        Month::new(3, "Rabi al-Awwal", &[30], palette::HARMONY[2]),
        Month::new(4, "Rabi ath-Thani", &[30], palette::HARMONY[3]),
        Month::new(5, "Jumada al-Awwal", &[30], palette::HARMONY[4]),
        Month::new(6, "Jumada ath-Thani", &[30], palette::HARMONY[5]),
        Month::new(7, "Rajab", &[30], palette::HARMONY[6]),
        Month::new(8, "Sha'baan", &[30], palette::HARMONY[7]),
        Month::new(9, "Ramadan", &[30], palette::HARMONY[8]),
        Month::new(10, "Shawwal", &[30], palette::HARMONY[9]),
        Month::new(11, "Dhu al-Qa'dah", &[30], palette::HARMONY[10]),
        Month::new(12, "Dhu al-Hijja", &[30], palette::HARMONY[11]),
    ],
};

/// Rendering settings applied on top of a canonical [`Month`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthSettings {
    pub name_upside_down: bool,
    pub date_on_top: bool,
    pub date_box_height: Length,
    pub inner_radius: Length,
    pub outer_radius: Length,
    pub date_angle_offset: Angle,
}

/// Everything needed to draw one month once.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthInstance {
    pub name: String,
    pub num_days: u32,
    /// Background fill
    pub color: String,
    /// Flip the curved label so it reads from the bottom of the circle
    pub name_upside_down: bool,
    /// Day boxes sit on the outer edge of the ring instead of the inner one
    pub date_on_top: bool,
    pub date_box_height: Length,
    pub inner_radius: Length,
    pub outer_radius: Length,
    /// Rotation applied to every numeral of this month
    pub date_angle_offset: Angle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solar_year_is_a_leap_year() {
        assert_eq!(SOLAR_YEAR.total_days(), 366);
    }

    #[test]
    fn islamic_placeholder_year_is_360_days() {
        assert_eq!(ISLAMIC_YEAR.total_days(), 360);
    }

    #[test]
    fn canonical_numbers_are_sequential() {
        for year in [SOLAR_YEAR, ISLAMIC_YEAR] {
            for (i, m) in year.months.iter().enumerate() {
                assert_eq!(m.number as usize, i + 1, "{}", m.name);
            }
        }
    }

    #[test]
    fn solar_months_use_classic_palette() {
        for (m, c) in SOLAR_YEAR.months.iter().zip(palette::CLASSIC) {
            assert_eq!(m.color, c);
        }
    }

    #[test]
    fn harmony_mod_is_reversed_order() {
        assert_eq!(palette::HARMONY_MOD[0], "#9CFFEA");
        assert_eq!(palette::HARMONY_MOD[11], "#9CE3FF");
    }

    #[test]
    fn empty_day_list_draws_nothing() {
        let m = Month::new(1, "Void", &[], "#000");
        assert_eq!(m.days(), 0);
    }

    #[test]
    fn instance_copies_settings() {
        let settings = MonthSettings {
            name_upside_down: true,
            date_on_top: false,
            date_box_height: Length(3.0),
            inner_radius: Length(90.0),
            outer_radius: Length(100.0),
            date_angle_offset: Angle(-30.0),
        };
        let inst = SOLAR_YEAR.months[1].instance(settings);
        assert_eq!(inst.name, "February");
        assert_eq!(inst.num_days, 29);
        assert_eq!(inst.color, "#9ce3ff");
        assert!(inst.name_upside_down);
        assert!(!inst.date_on_top);
        assert_eq!(inst.outer_radius, Length(100.0));
        assert_eq!(inst.date_angle_offset, Angle(-30.0));
    }
}
