use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::data::columns::COLUMNS;
use crate::data::employee_view::EmployeeView;

/// File name used when the configuration doesn't override it
pub const DEFAULT_EXPORT_FILE: &str = "employee-data.csv";

/// Outcome of writing an export file
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

impl ExportSummary {
    pub fn status_message(&self) -> String {
        format!(
            "✓ Exported {} rows to CSV file: {}",
            self.rows,
            self.path.display()
        )
    }
}

/// Serializes the currently visible rows of an `EmployeeView` to CSV
pub struct DataExporter;

impl DataExporter {
    /// Write header plus one line per visible row; returns the row count
    pub fn write_csv<W: Write>(view: &EmployeeView, writer: W) -> Result<usize> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(COLUMNS.iter().map(|c| c.display_name))?;

        let mut rows = 0;
        for record in view.records() {
            wtr.write_record(COLUMNS.iter().map(|c| c.export_value(record)))?;
            rows += 1;
        }

        wtr.flush()?;
        Ok(rows)
    }

    pub fn to_csv_string(view: &EmployeeView) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write_csv(view, &mut buffer)?;
        String::from_utf8(buffer).context("CSV output was not valid UTF-8")
    }

    /// Export to `dir/file_name`, replacing any previous export
    pub fn export_csv(view: &EmployeeView, dir: &Path, file_name: &str) -> Result<ExportSummary> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create export directory {}", dir.display()))?;

        let path = dir.join(file_name);
        let file = std::fs::File::create(&path)
            .with_context(|| format!("Cannot create export file {}", path.display()))?;

        let rows = Self::write_csv(view, std::io::BufWriter::new(file))
            .with_context(|| format!("Failed writing {}", path.display()))?;

        tracing::info!(target: "export", "Exported {} rows to {}", rows, path.display());

        Ok(ExportSummary { path, rows })
    }
}
