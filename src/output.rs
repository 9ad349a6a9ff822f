//! Output formatting and persistence for the class report.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::analyzers::report::ClassReport;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Logs the report using Rust's debug pretty-print format.
pub fn print_pretty(report: &ClassReport) {
    debug!("{:#?}", report);
}

/// Serializes the report as pretty-printed JSON.
pub fn to_json(report: &ClassReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes the report as pretty-printed JSON to `path`, replacing any
/// existing file.
pub fn write_json(path: &Path, report: &ClassReport) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(to_json(report)?.as_bytes())?;
    file.write_all(b"\n")?;
    info!(path = %path.display(), "JSON report written");
    Ok(())
}

/// Writes the report as CSV to `writer`, one header row then one row per
/// student and per assignment.
pub fn write_csv_to<W: Write>(writer: W, report: &ClassReport) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    for record in report.records() {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the report as CSV to `path`, replacing any existing file.
pub fn write_csv(path: &Path, report: &ClassReport) -> Result<()> {
    debug!(path = %path.display(), "Writing CSV report");
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_csv_to(file, report)?;
    info!(path = %path.display(), "CSV report written");
    Ok(())
}
