//! Concert date parsing
//!
//! Raw dates look like `23-08-2019` and may carry a `*` marker anywhere
//! (`*23-08-2019`). Only the year is extracted. Day and month are not
//! validated, and a two-digit year is kept as-is.

use crate::model::Year;
use std::collections::BTreeSet;
use thiserror::Error;

/// Marker character the catalog sprinkles into some dates
pub const DATE_MARKER: char = '*';

/// Separator between day, month and year
pub const DATE_SEPARATOR: char = '-';

/// Why a raw date yielded no year
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected 3 components, got {0}")]
    ComponentCount(usize),

    #[error("year component {0:?} is not an integer")]
    NonNumericYear(String),
}

/// Extract the year of a raw concert date
///
/// # Errors
///
/// `ComponentCount` unless the cleaned date splits into exactly three parts,
/// `NonNumericYear` if the third part does not parse as an integer.
pub fn parse_year(raw: &str) -> Result<Year, DateParseError> {
    let cleaned: String = raw.chars().filter(|c| *c != DATE_MARKER).collect();
    let parts: Vec<&str> = cleaned.split(DATE_SEPARATOR).collect();

    match parts.as_slice() {
        [_day, _month, year] => year
            .trim()
            .parse::<Year>()
            .map_err(|_| DateParseError::NonNumericYear(year.to_string())),
        _ => Err(DateParseError::ComponentCount(parts.len())),
    }
}

/// Per-artist date statistics
///
/// `concert_count` counts every raw date while `years` only holds the years
/// that parsed; the two are tracked independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSummary {
    pub concert_count: usize,
    pub years: BTreeSet<Year>,
    pub malformed: Vec<(String, DateParseError)>,
}

/// Summarize the raw dates of one artist
pub fn summarize_dates(raw_dates: &[String]) -> DateSummary {
    let mut summary = DateSummary {
        concert_count: raw_dates.len(),
        ..DateSummary::default()
    };

    for raw in raw_dates {
        match parse_year(raw) {
            Ok(year) => {
                summary.years.insert(year);
            }
            Err(err) => summary.malformed.push((raw.clone(), err)),
        }
    }

    summary
}
