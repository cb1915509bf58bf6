//! Filtering and aggregation over the launch record set.
//!
//! [`Aggregator`] owns a shared, read-only view of the records and answers
//! one-shot queries for a site and payload range. Every query is a pure
//! function of the records and its arguments; nothing is cached between
//! calls, so a clone of the aggregator can be queried from any thread.
//!
//! A site that matches no records is not an error: the site-restricted
//! outputs come back empty.

pub mod filter;
pub mod types;

use std::sync::Arc;
use tracing::debug;

use crate::records::{LaunchRecord, Outcome};
use filter::{FilterSelection, PayloadRange, SiteFilter, SummaryScope};
use types::{CategoryBreakdown, CategoryCount, Dashboard, ScatterPoint, Summary, SummaryCounts};

#[derive(Debug, Clone)]
pub struct Aggregator {
    records: Arc<[LaunchRecord]>,
}

impl Aggregator {
    pub fn new(records: impl Into<Arc<[LaunchRecord]>>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in self.records.iter() {
            if !sites.contains(&record.site.as_str()) {
                sites.push(&record.site);
            }
        }
        sites
    }

    fn restricted<'a>(&'a self, site: &'a SiteFilter) -> impl Iterator<Item = &'a LaunchRecord> {
        self.records.iter().filter(move |r| site.matches(r))
    }

    /// Summary cards and slider bounds.
    ///
    /// Always computed over the whole dataset, whatever `site` is.
    pub fn summary(&self, site: &SiteFilter) -> Summary {
        self.summary_scoped(site, SummaryScope::Dataset)
    }

    pub fn summary_scoped(&self, site: &SiteFilter, scope: SummaryScope) -> Summary {
        let all = SiteFilter::All;
        let scoped = match scope {
            SummaryScope::Dataset => {
                if !site.is_all() {
                    debug!(%site, "Summary ignores site selection");
                }
                &all
            }
            SummaryScope::Site => site,
        };

        let mut counts = SummaryCounts::default();
        let mut payload_bounds: Option<PayloadRange> = None;

        for record in self.restricted(scoped) {
            counts.record(record.outcome);

            let mass = record.payload_mass_kg;
            payload_bounds = Some(match payload_bounds {
                None => PayloadRange::new(mass, mass),
                Some(b) => PayloadRange::new(b.min.min(mass), b.max.max(mass)),
            });
        }

        Summary {
            counts,
            payload_bounds,
        }
    }

    /// Pie data. `ALL` counts successes per site; a single site is split
    /// into `Success` and `Failure` record counts.
    pub fn site_breakdown(&self, site: &SiteFilter) -> CategoryBreakdown {
        let mut breakdown = CategoryBreakdown::default();

        match site {
            SiteFilter::All => {
                for record in self.records.iter() {
                    breakdown.tally(&record.site, record.outcome.is_success());
                }
            }
            SiteFilter::Site(_) => {
                let mut counts = SummaryCounts::default();
                for record in self.restricted(site) {
                    counts.record(record.outcome);
                }

                if counts.total_launches > 0 {
                    for (outcome, n) in [
                        (Outcome::Success, counts.total_success),
                        (Outcome::Failure, counts.total_failures),
                    ] {
                        breakdown.entries.push(CategoryCount {
                            category: outcome.label().to_string(),
                            count: n,
                            total: n,
                        });
                    }
                }
            }
        }

        breakdown
    }

    /// Scatter points for the site whose payload lies inside
    /// `payload_range` (both ends inclusive), in record set order.
    pub fn scatter(&self, site: &SiteFilter, payload_range: PayloadRange) -> Vec<ScatterPoint> {
        self.restricted(site)
            .filter(|r| payload_range.contains(r.payload_mass_kg))
            .map(|r| ScatterPoint {
                payload_mass_kg: r.payload_mass_kg,
                outcome: r.outcome,
                booster_category: r.booster_category.clone(),
            })
            .collect()
    }

    /// Bar data: successful launches per booster version category.
    pub fn booster_breakdown(&self, site: &SiteFilter) -> CategoryBreakdown {
        let mut breakdown = CategoryBreakdown::default();
        for record in self.restricted(site) {
            breakdown.tally(&record.booster_category, record.outcome.is_success());
        }
        breakdown
    }

    /// Recomputes every view for a filter selection.
    pub fn dashboard(&self, selection: &FilterSelection) -> Dashboard {
        self.dashboard_scoped(selection, SummaryScope::default())
    }

    pub fn dashboard_scoped(&self, selection: &FilterSelection, scope: SummaryScope) -> Dashboard {
        let site = &selection.site;

        let dashboard = Dashboard {
            generated_at: chrono::Utc::now(),
            selection: selection.clone(),
            summary: self.summary_scoped(site, scope),
            site_breakdown: self.site_breakdown(site),
            scatter: self.scatter(site, selection.payload_range),
            booster_breakdown: self.booster_breakdown(site),
        };

        debug!(
            %site,
            payload_range = %selection.payload_range,
            scatter_points = dashboard.scatter.len(),
            "Dashboard recomputed"
        );

        dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_launches() -> Aggregator {
        Aggregator::new(vec![
            LaunchRecord::new("KSC LC-39A", Outcome::Success, 5000.0, "B5"),
            LaunchRecord::new("CCAFS LC-40", Outcome::Failure, 3000.0, "B4"),
        ])
    }

    fn mixed_launches() -> Aggregator {
        Aggregator::new(vec![
            LaunchRecord::new("CCAFS LC-40", Outcome::Failure, 0.0, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", Outcome::Success, 525.0, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", Outcome::Failure, 500.0, "v1.1"),
            LaunchRecord::new("KSC LC-39A", Outcome::Success, 2490.0, "FT"),
            LaunchRecord::new("KSC LC-39A", Outcome::Success, 5300.0, "FT"),
            LaunchRecord::new("CCAFS SLC-40", Outcome::Success, 2490.0, "B4"),
            LaunchRecord::new("KSC LC-39A", Outcome::Failure, 9600.0, "B5"),
            LaunchRecord::new("VAFB SLC-4E", Outcome::Success, 9600.0, "FT"),
        ])
    }

    fn all_selections(agg: &Aggregator) -> Vec<SiteFilter> {
        let mut sites: Vec<SiteFilter> = agg.sites().into_iter().map(SiteFilter::from).collect();
        sites.push(SiteFilter::All);
        sites.push(SiteFilter::from("Boca Chica"));
        sites
    }

    #[test]
    fn test_summary_counts_all_sites() {
        let summary = two_launches().summary(&SiteFilter::All);

        assert_eq!(
            summary.counts,
            SummaryCounts {
                total_launches: 2,
                total_success: 1,
                total_failures: 1,
            }
        );
        assert_eq!(summary.payload_bounds, Some(PayloadRange::new(3000.0, 5000.0)));
    }

    #[test]
    fn test_summary_ignores_site_by_default() {
        let agg = two_launches();
        let all = agg.summary(&SiteFilter::All);

        assert_eq!(agg.summary(&SiteFilter::from("KSC LC-39A")), all);
        assert_eq!(agg.summary(&SiteFilter::from("VAFB SLC-4E")), all);
    }

    #[test]
    fn test_summary_site_scope() {
        let agg = two_launches();

        let ksc = agg.summary_scoped(&SiteFilter::from("KSC LC-39A"), SummaryScope::Site);
        assert_eq!(ksc.counts.total_launches, 1);
        assert_eq!(ksc.counts.total_success, 1);
        assert_eq!(ksc.payload_bounds, Some(PayloadRange::new(5000.0, 5000.0)));

        let none = agg.summary_scoped(&SiteFilter::from("VAFB SLC-4E"), SummaryScope::Site);
        assert_eq!(none.counts, SummaryCounts::default());
        assert_eq!(none.payload_bounds, None);
    }

    #[test]
    fn test_summary_invariant_holds_for_every_site() {
        let agg = mixed_launches();
        for site in all_selections(&agg) {
            for scope in [SummaryScope::Dataset, SummaryScope::Site] {
                let c = agg.summary_scoped(&site, scope).counts;
                assert_eq!(c.total_success + c.total_failures, c.total_launches);
            }
        }
    }

    #[test]
    fn test_summary_empty_dataset() {
        let agg = Aggregator::new(Vec::new());
        let summary = agg.summary(&SiteFilter::All);
        assert_eq!(summary.counts, SummaryCounts::default());
        assert_eq!(summary.payload_bounds, None);
    }

    #[test]
    fn test_site_breakdown_single_site() {
        let breakdown = two_launches().site_breakdown(&SiteFilter::from("KSC LC-39A"));
        assert_eq!(breakdown.pairs(), vec![("Success", 1), ("Failure", 0)]);
    }

    #[test]
    fn test_site_breakdown_all_counts_successes_per_site() {
        let breakdown = mixed_launches().site_breakdown(&SiteFilter::All);

        assert_eq!(
            breakdown.pairs(),
            vec![
                ("CCAFS LC-40", 1),
                ("VAFB SLC-4E", 1),
                ("KSC LC-39A", 2),
                ("CCAFS SLC-40", 1),
            ]
        );
        assert_eq!(breakdown.get("KSC LC-39A").map(|e| e.total), Some(3));
    }

    #[test]
    fn test_breakdown_totals_match_restricted_records() {
        let agg = mixed_launches();
        for site in all_selections(&agg) {
            let restricted = agg.records().iter().filter(|r| site.matches(r)).count();
            assert_eq!(agg.site_breakdown(&site).total_records(), restricted, "{site}");
            assert_eq!(agg.booster_breakdown(&site).total_records(), restricted, "{site}");
        }
    }

    #[test]
    fn test_scatter_site_and_range() {
        let agg = two_launches();

        let ksc = agg.scatter(&SiteFilter::from("KSC LC-39A"), PayloadRange::new(0.0, 10000.0));
        assert_eq!(
            ksc,
            vec![ScatterPoint {
                payload_mass_kg: 5000.0,
                outcome: Outcome::Success,
                booster_category: "B5".to_string(),
            }]
        );

        let heavy = agg.scatter(&SiteFilter::All, PayloadRange::new(4000.0, 10000.0));
        assert_eq!(heavy.len(), 1);
        assert_eq!(heavy[0].payload_mass_kg, 5000.0);
    }

    #[test]
    fn test_scatter_preserves_record_order() {
        let points = mixed_launches().scatter(&SiteFilter::All, PayloadRange::new(0.0, 10000.0));
        let masses: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(
            masses,
            vec![0.0, 525.0, 500.0, 2490.0, 5300.0, 2490.0, 9600.0, 9600.0]
        );
    }

    #[test]
    fn test_scatter_single_value_range() {
        let agg = mixed_launches();

        let points = agg.scatter(&SiteFilter::All, PayloadRange::new(2490.0, 2490.0));
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.payload_mass_kg == 2490.0));

        assert!(agg
            .scatter(&SiteFilter::All, PayloadRange::new(2491.0, 2491.0))
            .is_empty());
    }

    #[test]
    fn test_scatter_inverted_range_is_empty() {
        let points = mixed_launches().scatter(&SiteFilter::All, PayloadRange::new(9000.0, 100.0));
        assert!(points.is_empty());
    }

    #[test]
    fn test_booster_breakdown_counts_successes() {
        let agg = two_launches();
        assert_eq!(
            agg.booster_breakdown(&SiteFilter::All).pairs(),
            vec![("B5", 1), ("B4", 0)]
        );

        let ksc = mixed_launches().booster_breakdown(&SiteFilter::from("KSC LC-39A"));
        assert_eq!(ksc.pairs(), vec![("FT", 2), ("B5", 0)]);
    }

    #[test]
    fn test_unknown_site_yields_empty_results() {
        let agg = two_launches();
        let site = SiteFilter::from("VAFB SLC-4E");

        assert!(agg.site_breakdown(&site).is_empty());
        assert!(agg.booster_breakdown(&site).is_empty());
        assert!(agg.scatter(&site, PayloadRange::new(0.0, 10000.0)).is_empty());
    }

    #[test]
    fn test_dashboard_is_idempotent() {
        let agg = mixed_launches();
        let selection = FilterSelection::new("KSC LC-39A", PayloadRange::new(1000.0, 6000.0));

        let first = agg.dashboard(&selection);
        let second = agg.dashboard(&selection);

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.site_breakdown, second.site_breakdown);
        assert_eq!(first.scatter, second.scatter);
        assert_eq!(first.booster_breakdown, second.booster_breakdown);
        assert_eq!(first.scatter.len(), 2);
    }

    #[test]
    fn test_sites_in_first_appearance_order() {
        assert_eq!(
            mixed_launches().sites(),
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
    }

    #[test]
    fn test_aggregator_is_shareable_across_threads() {
        let agg = mixed_launches();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let agg = agg.clone();
                std::thread::spawn(move || agg.summary(&SiteFilter::All).counts)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().total_launches, 8);
        }
    }
}
