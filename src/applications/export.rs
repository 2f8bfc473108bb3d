use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::domain::{ApplicationRecord, ApplicationTable};
use super::ApplicationDataError;

/// Result of a guarded export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    Skipped { path: PathBuf },
}

impl ExportOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ExportOutcome::Written { path, .. } | ExportOutcome::Skipped { path } => path,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, ExportOutcome::Written { .. })
    }

    /// Human-readable line reported to whoever ran the export.
    pub fn message(&self) -> String {
        match self {
            ExportOutcome::Written { path, .. } => {
                format!("Writing fake data to {}", path.display())
            }
            ExportOutcome::Skipped { path } => {
                format!("{} already exists. Doing nothing.", path.display())
            }
        }
    }
}

/// Serializes `table` as CSV. The header row is always emitted, even for an
/// empty table.
pub fn write_csv<W: Write>(writer: W, table: &ApplicationTable) -> Result<(), ApplicationDataError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(ApplicationRecord::HEADERS)?;
    for record in table {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes `table` to `path` unless something already exists there.
///
/// An existing file is never opened for writing, so its contents stay
/// byte-for-byte intact.
pub fn write_if_absent<P: AsRef<Path>>(
    path: P,
    table: &ApplicationTable,
) -> Result<ExportOutcome, ApplicationDataError> {
    let path = path.as_ref();

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "destination exists; skipping export");
            return Ok(ExportOutcome::Skipped {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    write_csv(BufWriter::new(file), table)?;
    info!(path = %path.display(), rows = table.len(), "fake application data written");

    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        rows: table.len(),
    })
}
