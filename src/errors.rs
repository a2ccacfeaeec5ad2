//! Error types with rich diagnostics using miette
//!
//! Date arguments are the only user input the core parses. Their errors carry
//! the argument text as source so the offending field is underlined.

use std::fmt;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Which calendar a date argument is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    Gregorian,
    Hijri,
}

impl DateKind {
    /// Flag the argument came from, used as the diagnostic source name
    pub fn flag(self) -> &'static str {
        match self {
            DateKind::Gregorian => "--date",
            DateKind::Hijri => "--hijri",
        }
    }

    /// Largest day number accepted before calendar validation
    pub fn max_day(self) -> u32 {
        match self {
            DateKind::Gregorian => 31,
            DateKind::Hijri => 30,
        }
    }

    /// Added to one- and two-digit years
    pub fn century(self) -> i32 {
        match self {
            DateKind::Gregorian => 2000,
            DateKind::Hijri => 1400,
        }
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateKind::Gregorian => f.write_str("Gregorian"),
            DateKind::Hijri => f.write_str("Hijri"),
        }
    }
}

/// Errors from parsing a `YYYY-MM-DD` / `YY-MM-DD` date argument
#[derive(Error, Diagnostic, Debug)]
pub enum DateArgError {
    #[error("{kind} date must be in YYYY-MM-DD or YY-MM-DD format")]
    #[diagnostic(
        code(ringcal::args::format),
        help("write the date as three numbers separated by '-', e.g. 2026-02-05")
    )]
    Format {
        kind: DateKind,
        #[source_code]
        src: NamedSource<String>,
        #[label("found {parts} part(s)")]
        span: SourceSpan,
        parts: usize,
    },

    #[error("invalid {kind} year: {value}")]
    #[diagnostic(code(ringcal::args::year))]
    Year {
        kind: DateKind,
        value: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: &'static str,
    },

    #[error("invalid {kind} month: {value}. Must be 1-12.")]
    #[diagnostic(code(ringcal::args::month))]
    Month {
        kind: DateKind,
        value: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("month out of range")]
        span: SourceSpan,
    },

    #[error("invalid {kind} day: {value}. Must be 1-{max}.")]
    #[diagnostic(code(ringcal::args::day))]
    Day {
        kind: DateKind,
        value: String,
        max: u32,
        #[source_code]
        src: NamedSource<String>,
        #[label("day out of range")]
        span: SourceSpan,
    },

    #[error("invalid date: {input}. Day {day} is not valid for month {month}.")]
    #[diagnostic(code(ringcal::args::no_such_date), help("check the number of days in that month"))]
    NoSuchDate {
        input: String,
        month: u32,
        day: u32,
        #[source_code]
        src: NamedSource<String>,
        #[label("no such day")]
        span: SourceSpan,
    },
}

impl DateArgError {
    /// Stable diagnostic code, e.g. `ringcal::args::month`
    pub fn code_str(&self) -> &'static str {
        match self {
            DateArgError::Format { .. } => "ringcal::args::format",
            DateArgError::Year { .. } => "ringcal::args::year",
            DateArgError::Month { .. } => "ringcal::args::month",
            DateArgError::Day { .. } => "ringcal::args::day",
            DateArgError::NoSuchDate { .. } => "ringcal::args::no_such_date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_properties() {
        assert_eq!(DateKind::Gregorian.flag(), "--date");
        assert_eq!(DateKind::Hijri.flag(), "--hijri");
        assert_eq!(DateKind::Gregorian.max_day(), 31);
        assert_eq!(DateKind::Hijri.max_day(), 30);
        assert_eq!(DateKind::Hijri.to_string(), "Hijri");
    }

    #[test]
    fn diagnostic_code_matches_helper() {
        let err = DateArgError::Month {
            kind: DateKind::Gregorian,
            value: "13".into(),
            src: NamedSource::new("--date", "2026-13-01".to_string()),
            span: (5, 2).into(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some(err.code_str()));
        assert_eq!(err.to_string(), "invalid Gregorian month: 13. Must be 1-12.");
    }
}
