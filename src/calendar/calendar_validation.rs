//! Date layout detection for the expiration column.
//
// Detection is a first-match-wins classifier: candidates are tried in order and
// the first layout that yields a real calendar date is returned.

use super::calendar_types::DateFormat;
use super::ConversionError;

/// Return the first layout in `candidates` under which `value` parses.
pub fn detect_with(candidates: &[DateFormat], value: &str) -> Option<DateFormat> {
    if value.is_empty() {
        return None;
    }
    candidates.iter().copied().find(|format| format.parse(value).is_some())
}

/// Detect the layout of `value` using [`DateFormat::DETECTION_ORDER`].
pub fn detect_date_format(value: &str) -> Result<DateFormat, ConversionError> {
    detect_with(&DateFormat::DETECTION_ORDER, value).ok_or_else(|| {
        ConversionError::UnrecognizedDateFormat { value: value.to_string(), line: None }
    })
}

/// True when `value` reads as two different dates under day/month/year and
/// month/day/year. Detection still resolves it by order; this only reports it.
pub fn is_ambiguous(value: &str) -> bool {
    match (DateFormat::DayMonthYear.parse(value), DateFormat::MonthDayYear.parse(value)) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    }
}
