//! Values produced by the aggregator and handed to a renderer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregator::filter::{FilterSelection, PayloadRange};
use crate::records::Outcome;

/// Launch totals shown on the summary cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub total_launches: usize,
    pub total_success: usize,
    pub total_failures: usize,
}

impl SummaryCounts {
    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    pub fn success_rate(&self) -> f64 {
        Self::pct(self.total_success, self.total_launches)
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        self.total_launches += 1;
        match outcome {
            Outcome::Success => self.total_success += 1,
            Outcome::Failure => self.total_failures += 1,
        }
    }
}

/// Summary counts plus the payload bounds used to reset the range slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub counts: SummaryCounts,
    /// `None` when there are no records to take bounds from.
    pub payload_bounds: Option<PayloadRange>,
}

/// One slice of a pie or one bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    /// Charted value.
    pub count: usize,
    /// Site-restricted records falling in this category.
    pub total: usize,
}

/// Ordered category counts; order is first appearance in the record set
/// unless a breakdown fixes its own order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryBreakdown {
    pub entries: Vec<CategoryCount>,
}

impl CategoryBreakdown {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `(category, count)` pairs in breakdown order.
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|e| (e.category.as_str(), e.count))
            .collect()
    }

    pub fn total_records(&self) -> usize {
        self.entries.iter().map(|e| e.total).sum()
    }

    pub fn get(&self, category: &str) -> Option<&CategoryCount> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Bumps `category`, inserting it at the end on first sight.
    pub(crate) fn tally(&mut self, category: &str, counted: bool) {
        let entry = match self.entries.iter().position(|e| e.category == category) {
            Some(idx) => &mut self.entries[idx],
            None => {
                self.entries.push(CategoryCount {
                    category: category.to_string(),
                    count: 0,
                    total: 0,
                });
                let last = self.entries.len() - 1;
                &mut self.entries[last]
            }
        };

        entry.total += 1;
        if counted {
            entry.count += 1;
        }
    }
}

/// A point on the payload vs. outcome scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

/// Everything the dashboard shows for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub selection: FilterSelection,
    pub summary: Summary,
    pub site_breakdown: CategoryBreakdown,
    pub scatter: Vec<ScatterPoint>,
    pub booster_breakdown: CategoryBreakdown,
}
