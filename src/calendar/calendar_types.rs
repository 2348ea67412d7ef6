//! Core types for the domain expiration calendar.

use chrono::NaiveDate;
use std::fmt;

/// Textual layouts accepted in the `Domain expiration date` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `Jan 05 2025`
    MonthNameDayYear,
    /// `05/01/2025`
    DayMonthYear,
    /// `01/05/2025`
    MonthDayYear,
}

impl DateFormat {
    /// Detection order. The first layout that parses wins.
    pub const DETECTION_ORDER: [DateFormat; 3] =
        [DateFormat::MonthNameDayYear, DateFormat::DayMonthYear, DateFormat::MonthDayYear];

    /// chrono format string for this layout
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::MonthNameDayYear => "%b %d %Y",
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::MonthDayYear => "%m/%d/%Y",
        }
    }

    /// Parse `value` as a calendar date under this layout.
    ///
    /// The year must be exactly four digits. Leading whitespace and signed
    /// numbers are rejected even where chrono would accept them.
    pub fn parse(&self, value: &str) -> Option<NaiveDate> {
        if !self.has_strict_shape(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, self.pattern()).ok()
    }

    fn has_strict_shape(&self, value: &str) -> bool {
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        match self {
            DateFormat::MonthNameDayYear => {
                let year = value.rsplit(' ').next().unwrap_or("");
                value.starts_with(|c: char| c.is_ascii_alphabetic())
                    && year.len() == 4
                    && is_digits(year)
            }
            DateFormat::DayMonthYear | DateFormat::MonthDayYear => {
                let parts: Vec<&str> = value.split('/').collect();
                match parts.as_slice() {
                    [first, second, year] => {
                        is_digits(first) && is_digits(second) && year.len() == 4 && is_digits(year)
                    }
                    _ => false,
                }
            }
        }
    }

    /// Render `date` in this layout.
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateFormat::MonthNameDayYear => "month-name day year",
            DateFormat::DayMonthYear => "day/month/year",
            DateFormat::MonthDayYear => "month/day/year",
        };
        f.write_str(name)
    }
}

/// One domain's expiration, ready to be written as a calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    domain: String,
    date: NaiveDate,
}

impl EventRecord {
    pub fn new(domain: impl Into<String>, date: NaiveDate) -> Self {
        Self { domain: domain.into(), date }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The expiration date as an 8-digit `YYYYMMDD` value.
    pub fn date_value(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub events: usize,
    /// `None` when the input had no data rows.
    pub format: Option<DateFormat>,
}
