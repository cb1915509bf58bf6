//! CSV parser for the launch dataset.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::records::LaunchRecord;

/// Decodes launch records from CSV bytes.
///
/// Columns are matched by header name (`Launch Site`, `class`,
/// `Payload Mass (kg)`, `Booster Version Category`); any other column is
/// ignored.
///
/// # Errors
///
/// Returns an error naming the 1-based data row if a required column is
/// missing, a payload is not numeric, or `class` is not 0 or 1.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<LaunchRecord>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(bytes);

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<LaunchRecord>().enumerate() {
        let record = result.with_context(|| format!("invalid launch record on data row {}", idx + 1))?;
        records.push(record);
    }

    debug!(records = records.len(), "Launch records parsed");
    Ok(records)
}
