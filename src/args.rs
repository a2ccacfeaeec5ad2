//! Strict parsing of date arguments into alignment inputs.
//!
//! Both calendars accept `YYYY-MM-DD` or `YY-MM-DD`. Short years are taken
//! relative to the current century of each calendar (2000 / 1400).

use chrono::NaiveDate;
use miette::{NamedSource, SourceSpan};

use crate::alignment::{AlignmentParams, HijriDate, alignment_for_hijri};
use crate::errors::{DateArgError, DateKind};

/// One `-`-separated field and its byte offset in the argument
#[derive(Debug, Clone, Copy)]
struct Field<'a> {
    offset: usize,
    text: &'a str,
}

impl Field<'_> {
    fn span(&self) -> SourceSpan {
        (self.offset, self.text.len()).into()
    }
}

/// The numeric parts of a date argument, range-checked but not yet checked
/// against a real calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateParts {
    year: i32,
    month: u32,
    day: u32,
}

fn source(kind: DateKind, input: &str) -> NamedSource<String> {
    NamedSource::new(kind.flag(), input.to_string())
}

fn split_fields(input: &str) -> Vec<Field<'_>> {
    let mut offset = 0;
    input
        .split('-')
        .map(|text| {
            let field = Field { offset, text };
            offset += text.len() + 1;
            field
        })
        .collect()
}

/// Label for a year field that is not a number
const NOT_A_YEAR: &str = "not a year";

/// Label for a year chrono cannot place on the Gregorian calendar
const YEAR_OUT_OF_RANGE: &str = "year outside the supported range";

fn year_error(kind: DateKind, input: &str, reason: &'static str) -> DateArgError {
    let fields = split_fields(input);
    let (value, span): (&str, SourceSpan) = fields
        .first()
        .map_or((input, (0, input.len()).into()), |f| (f.text, f.span()));
    DateArgError::Year {
        kind,
        value: value.to_string(),
        src: source(kind, input),
        span,
        reason,
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn parse_parts(kind: DateKind, input: &str) -> Result<DateParts, DateArgError> {
    let fields = split_fields(input);
    let [year, month, day] = fields.as_slice() else {
        return Err(DateArgError::Format {
            kind,
            src: source(kind, input),
            span: (0, input.len()).into(),
            parts: fields.len(),
        });
    };

    let year_value = is_digits(year.text)
        .then(|| year.text.parse::<i32>().ok())
        .flatten()
        .ok_or_else(|| year_error(kind, input, NOT_A_YEAR))?;
    let year_value = if year.text.len() <= 2 {
        kind.century() + year_value
    } else {
        year_value
    };

    let month_value = is_digits(month.text)
        .then(|| month.text.parse::<u32>().ok())
        .flatten()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| DateArgError::Month {
            kind,
            value: month.text.to_string(),
            src: source(kind, input),
            span: month.span(),
        })?;

    let max_day = kind.max_day();
    let day_value = is_digits(day.text)
        .then(|| day.text.parse::<u32>().ok())
        .flatten()
        .filter(|d| (1..=max_day).contains(d))
        .ok_or_else(|| DateArgError::Day {
            kind,
            value: day.text.to_string(),
            max: max_day,
            src: source(kind, input),
            span: day.span(),
        })?;

    Ok(DateParts {
        year: year_value,
        month: month_value,
        day: day_value,
    })
}

/// Parse a Gregorian `YYYY-MM-DD` / `YY-MM-DD` argument.
///
/// Rejects dates that do not exist, such as February 30.
pub fn parse_gregorian(input: &str) -> Result<NaiveDate, DateArgError> {
    let kind = DateKind::Gregorian;
    let parts = parse_parts(kind, input)?;
    if NaiveDate::from_yo_opt(parts.year, 1).is_none() {
        return Err(year_error(kind, input, YEAR_OUT_OF_RANGE));
    }
    NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day).ok_or_else(|| DateArgError::NoSuchDate {
        input: input.to_string(),
        month: parts.month,
        day: parts.day,
        src: source(kind, input),
        span: (0, input.len()).into(),
    })
}

/// Parse a Hijri `YYYY-MM-DD` / `YY-MM-DD` argument. Every month accepts
/// days 1-30.
///
/// The year must project onto a Gregorian date chrono can represent.
pub fn parse_hijri(input: &str) -> Result<HijriDate, DateArgError> {
    let kind = DateKind::Hijri;
    let parts = parse_parts(kind, input)?;
    // month and day are range-checked to 1..=12 and 1..=30
    let date = HijriDate::new(parts.year, parts.month as u8, parts.day as u8);
    match date.to_gregorian() {
        Some(_) => Ok(date),
        None => Err(year_error(kind, input, YEAR_OUT_OF_RANGE)),
    }
}

/// Alignment from optional `--date` / `--hijri` arguments.
///
/// A Hijri date wins over a Gregorian one; with neither, today is used.
pub fn alignment_from_args(date: Option<&str>, hijri: Option<&str>) -> Result<AlignmentParams, DateArgError> {
    if let Some(h) = hijri {
        let hijri_date = parse_hijri(h)?;
        return alignment_for_hijri(hijri_date).ok_or_else(|| year_error(DateKind::Hijri, h, YEAR_OUT_OF_RANGE));
    }
    Ok(match date.map(parse_gregorian).transpose()? {
        Some(d) => AlignmentParams::for_date(d),
        None => AlignmentParams::today(),
    })
}
