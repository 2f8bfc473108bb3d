mod domain;
mod export;
mod generator;

pub use domain::{ApplicationRecord, ApplicationStatus, ApplicationTable, DateRange};
pub use export::{write_csv, write_if_absent, ExportOutcome};
pub use generator::FakeApplicationGenerator;

use chrono::NaiveDateTime;
use std::path::Path;

/// Record count used when nothing else is configured.
pub const DEFAULT_RECORD_COUNT: usize = 100;

/// Destination used when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "applications.csv";

#[derive(Debug, thiserror::Error)]
pub enum ApplicationDataError {
    #[error("date range starting {start} must end after it, not at {end}")]
    EmptyDateRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("failed to write application data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Generates `count` records and exports them to `path` unless it already
/// exists. The table is generated either way and dropped on skip.
pub fn produce_fake_data<P: AsRef<Path>>(
    path: P,
    count: usize,
    generator: &mut FakeApplicationGenerator,
) -> Result<ExportOutcome, ApplicationDataError> {
    let table = generator.generate(count);
    write_if_absent(path, &table)
}
