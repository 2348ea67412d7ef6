//! CSV import for the domain expiration calendar.
//
// Every row is checked against the layout detected on the first row. Records
// are only handed back once the whole input has been read and validated.

use super::calendar_types::{DateFormat, EventRecord};
use super::calendar_validation::{detect_with, is_ambiguous};
use super::ConversionError;
use csv::StringRecord;
use log::{debug, warn};
use std::io::Read;

pub const DOMAIN_COLUMN: &str = "Domain Name";
pub const EXPIRATION_COLUMN: &str = "Domain expiration date";

/// Events read from a CSV source together with the layout they used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportedEvents {
    pub events: Vec<EventRecord>,
    /// `None` when there were no data rows.
    pub format: Option<DateFormat>,
}

/// Read all rows of a CSV source into event records.
pub fn read_events<R: Read>(source: R) -> Result<ImportedEvents, ConversionError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);

    let headers = reader.headers()?.clone();
    let domain_idx = column_index(&headers, DOMAIN_COLUMN)?;
    let expiration_idx = column_index(&headers, EXPIRATION_COLUMN)?;

    let mut imported = ImportedEvents::default();
    let mut ambiguous_rows = 0usize;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let value = field(&record, expiration_idx, EXPIRATION_COLUMN, line)?;
        let detected = detect_with(&DateFormat::DETECTION_ORDER, value).ok_or_else(|| {
            ConversionError::UnrecognizedDateFormat { value: value.to_string(), line: Some(line) }
        })?;
        let active = *imported.format.get_or_insert(detected);
        if detected != active {
            return Err(ConversionError::InconsistentDateFormats {
                line,
                expected: active,
                found: detected,
            });
        }
        if is_ambiguous(value) {
            ambiguous_rows += 1;
        }

        let domain = field(&record, domain_idx, DOMAIN_COLUMN, line)?;
        let date = active.parse(value).ok_or_else(|| ConversionError::UnrecognizedDateFormat {
            value: value.to_string(),
            line: Some(line),
        })?;
        debug!("Line {}: {} expires {}", line, domain, date);
        imported.events.push(EventRecord::new(domain, date));
    }

    if ambiguous_rows > 0 {
        if let Some(format) = imported.format {
            warn!(
                "{} expiration date(s) are valid as both day/month/year and month/day/year; read as {}",
                ambiguous_rows, format
            );
        }
    }

    Ok(imported)
}

// Duplicate header names resolve to the last column, as a name-keyed row would.
fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize, ConversionError> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| *header == name)
        .map(|(idx, _)| idx)
        .last()
        .ok_or(ConversionError::MissingField { field: name, line: 1 })
}

fn field<'r>(
    record: &'r StringRecord,
    idx: usize,
    name: &'static str,
    line: u64,
) -> Result<&'r str, ConversionError> {
    record.get(idx).ok_or(ConversionError::MissingField { field: name, line })
}
