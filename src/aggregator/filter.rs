//! Filter selection: launch site and payload mass range.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::records::LaunchRecord;

/// Sentinel value selecting every launch site.
pub const ALL_SITES: &str = "ALL";

/// Launch sites offered by the site dropdown.
pub const KNOWN_SITES: &[&str] = &["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

/// Site part of a filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Returns `true` if `record` passes the site restriction.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.site == *site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteFilter::All)
    }
}

impl FromStr for SiteFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for SiteFilter {
    fn from(s: &str) -> Self {
        if s == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(s.to_string())
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => f.write_str(ALL_SITES),
            SiteFilter::Site(site) => f.write_str(site),
        }
    }
}

impl Serialize for SiteFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Inclusive payload mass range in kilograms.
///
/// A range with `min > max` is accepted and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.min <= payload_mass_kg && payload_mass_kg <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl FromStr for PayloadRange {
    type Err = anyhow::Error;

    /// Parses `"min,max"` or `"min..max"`.
    fn from_str(s: &str) -> Result<Self> {
        let (min, max) = s
            .split_once("..")
            .or_else(|| s.split_once(','))
            .with_context(|| format!("payload range '{s}' must look like MIN,MAX"))?;

        let min: f64 = min
            .trim()
            .parse()
            .with_context(|| format!("invalid payload minimum '{}'", min.trim()))?;
        let max: f64 = max
            .trim()
            .parse()
            .with_context(|| format!("invalid payload maximum '{}'", max.trim()))?;

        if min.is_nan() || max.is_nan() {
            bail!("payload range '{s}' contains NaN");
        }

        Ok(Self::new(min, max))
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

/// The (site, payload range) pair held by the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSelection {
    pub site: SiteFilter,
    pub payload_range: PayloadRange,
}

impl FilterSelection {
    pub fn new(site: impl Into<SiteFilter>, payload_range: PayloadRange) -> Self {
        Self {
            site: site.into(),
            payload_range,
        }
    }
}

/// Which records the summary counts are computed over.
///
/// The dashboard has always shown dataset-wide counts no matter which site
/// is selected; `Site` restricts the counts to the selected site instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SummaryScope {
    #[default]
    Dataset,
    Site,
}
