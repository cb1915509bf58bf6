//! Output formatting for aggregator results.
//!
//! Results go to a writer (stdout in the binary) as pretty-printed Rust
//! debug output or JSON. Nothing is written to disk.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Debug;
use std::io::Write;

/// Writes `value` using Rust's debug pretty-print format.
pub fn print_pretty<W: Write>(out: &mut W, value: &impl Debug) -> Result<()> {
    writeln!(out, "{value:#?}")?;
    Ok(())
}

/// Writes `value` as pretty-printed JSON.
pub fn print_json<W: Write>(out: &mut W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
