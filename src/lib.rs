pub mod calendar;
pub mod cli;
pub mod config;

// Re-export commonly used types
pub use calendar::{convert, ConversionError, ConversionSummary, DateFormat, EventRecord};
pub use config::Config;
