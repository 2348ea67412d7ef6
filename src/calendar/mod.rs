use anyhow::{Context, Result};
use log::info;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

mod calendar_export;
mod calendar_import;
mod calendar_types;
mod calendar_validation;

pub use calendar_export::*;
pub use calendar_import::*;
pub use calendar_types::*;
pub use calendar_validation::*;

/// Custom error type for conversion failures
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Date format not recognized: '{value}'{}", at_line(.line))]
    UnrecognizedDateFormat { value: String, line: Option<u64> },
    #[error("Inconsistent date formats detected on line {line}: expected {expected}, found {found}")]
    InconsistentDateFormats { line: u64, expected: DateFormat, found: DateFormat },
    #[error("Missing required field '{field}' on line {line}")]
    MissingField { field: &'static str, line: u64 },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn at_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {})", l)).unwrap_or_default()
}

/// Convert the CSV at `input` into an ICS calendar at `output`.
///
/// Nothing is written unless every row converts. An existing `output` is
/// overwritten.
pub fn convert(input: &Path, output: &Path) -> Result<ConversionSummary> {
    info!("Converting {} to {}", input.display(), output.display());

    let file = File::open(input)
        .map_err(ConversionError::from)
        .with_context(|| format!("Failed to open input file {}", input.display()))?;
    let imported = read_events(BufReader::new(file))
        .with_context(|| format!("Failed to read domains from {}", input.display()))?;

    let document = render_calendar(&imported.events);
    fs::write(output, document)
        .map_err(ConversionError::from)
        .with_context(|| format!("Failed to write calendar to {}", output.display()))?;

    let summary = ConversionSummary { events: imported.events.len(), format: imported.format };
    match summary.format {
        Some(format) => info!("Wrote {} events ({} dates)", summary.events, format),
        None => info!("No domains found; wrote an empty calendar"),
    }
    Ok(summary)
}
