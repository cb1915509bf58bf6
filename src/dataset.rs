//! Loads the launch dataset once at startup.
//!
//! The source is either an `http(s)://` URL or a local path. Sources whose
//! name ends in `.gz` are gunzipped before parsing.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::io::Read;
use tracing::info;

use crate::fetch::{BasicClient, HttpClient, fetch_bytes};
use crate::parser::parse_records;
use crate::records::LaunchRecord;

/// Location of the public SpaceX launch dataset.
pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Reads and parses the dataset at `source`.
///
/// An HTTP client is only built for remote sources.
pub async fn load_dataset(source: &str) -> Result<Vec<LaunchRecord>> {
    let client = if is_remote(source) {
        Some(BasicClient::new()?)
    } else {
        None
    };
    load_from(client.as_ref(), source).await
}

/// Like [`load_dataset`], but remote sources go through `client`.
pub async fn load_dataset_with<C: HttpClient>(client: &C, source: &str) -> Result<Vec<LaunchRecord>> {
    load_from(Some(client), source).await
}

#[tracing::instrument(skip_all, fields(source = %source))]
async fn load_from<C: HttpClient>(client: Option<&C>, source: &str) -> Result<Vec<LaunchRecord>> {
    let bytes = match client {
        Some(client) if is_remote(source) => fetch_bytes(client, source).await?,
        _ => std::fs::read(source).with_context(|| format!("failed to read dataset '{source}'"))?,
    };

    let bytes = if source.ends_with(".gz") {
        gunzip(&bytes).with_context(|| format!("failed to decompress dataset '{source}'"))?
    } else {
        bytes
    };

    let records =
        parse_records(&bytes).with_context(|| format!("failed to parse dataset '{source}'"))?;
    info!(records = records.len(), "Dataset loaded");
    Ok(records)
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn gunzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
