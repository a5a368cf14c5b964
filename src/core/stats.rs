//! Aggregate statistics derived from the donation records.

use crate::core::donation::DonationRecord;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Summary figures shown on the fund page. Holds no state of its own:
/// it is always the output of [`compute_stats`] over the current records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    /// Sum of every donation amount
    pub total_raised: f64,
    /// Sum of donations logged in the current calendar month
    pub monthly_raised: f64,
    /// Distinct tools sponsored, not counting "General"
    pub tools_supported: usize,
    /// Distinct contributor names; every anonymous donation counts as one contributor
    pub contributors: usize,
}

/// Recomputes the aggregates from scratch.
///
/// This is a full pass over the records; the ledger calls it after every mutation.
///
/// # Arguments
/// * `records` - Every logged donation
/// * `now` - Decides which calendar month counts as "this month"
///
/// # Returns
/// Totals, this month's total, distinct non-"General" tools, and distinct contributors
#[must_use]
pub fn compute_stats(records: &[DonationRecord], now: DateTime<Utc>) -> AggregateStats {
    let (year, month) = (now.year(), now.month());

    let total_raised = records.iter().map(|r| r.amount).sum();
    let monthly_raised = records
        .iter()
        .filter(|r| r.year == year && r.month == month)
        .map(|r| r.amount)
        .sum();
    let tools_supported = records
        .iter()
        .filter(|r| r.is_tool_specific())
        .map(|r| r.tool.as_str())
        .collect::<HashSet<_>>()
        .len();
    let contributors = records
        .iter()
        .map(|r| r.contributor.as_str())
        .collect::<HashSet<_>>()
        .len();

    AggregateStats {
        total_raised,
        monthly_raised,
        tools_supported,
        contributors,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::donation::DonationRequest;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn record(id: i64, request: DonationRequest, created_at: DateTime<Utc>) -> DonationRecord {
        DonationRecord::from_request(id, request, created_at)
    }

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[], at(2026, 10, 17));
        assert_eq!(stats, AggregateStats::default());
    }

    #[test]
    fn test_compute_stats_scenario() {
        let now = at(2026, 10, 17);
        let records = vec![
            record(
                1,
                DonationRequest::new(25.0)
                    .with_tool("Alpha")
                    .with_contributor("Sam"),
                now,
            ),
            record(2, DonationRequest::new(10.0).with_contributor("Sam"), now),
        ];

        let stats = compute_stats(&records, now);

        assert_eq!(stats.total_raised, 35.0);
        assert_eq!(stats.monthly_raised, 35.0);
        assert_eq!(stats.tools_supported, 1);
        assert_eq!(stats.contributors, 1);
    }

    #[test]
    fn test_general_tool_not_counted() {
        let now = at(2026, 10, 17);
        let records = vec![
            record(1, DonationRequest::new(1.0).with_tool("Alpha"), now),
            record(2, DonationRequest::new(1.0).with_tool("Alpha"), now),
            record(3, DonationRequest::new(1.0).with_tool("General"), now),
        ];

        assert_eq!(compute_stats(&records, now).tools_supported, 1);
    }

    #[test]
    fn test_anonymous_collapses_to_one_contributor() {
        let now = at(2026, 10, 17);
        let records: Vec<_> = (1..=3)
            .map(|id| record(id, DonationRequest::new(5.0), now))
            .collect();

        assert_eq!(compute_stats(&records, now).contributors, 1);
    }

    #[test]
    fn test_monthly_excludes_prior_months() {
        let now = at(2026, 10, 17);
        let records = vec![
            record(1, DonationRequest::new(40.0), at(2026, 9, 30)),
            record(2, DonationRequest::new(15.0), now),
            // Same month number, previous year
            record(3, DonationRequest::new(5.0), at(2025, 10, 17)),
        ];

        let stats = compute_stats(&records, now);

        assert_eq!(stats.total_raised, 60.0);
        assert_eq!(stats.monthly_raised, 15.0);
    }

    #[test]
    fn test_negative_amounts_are_summed_as_given() {
        let now = at(2026, 10, 17);
        let records = vec![
            record(1, DonationRequest::new(20.0), now),
            record(2, DonationRequest::new(-5.0), now),
        ];

        assert_eq!(compute_stats(&records, now).total_raised, 15.0);
    }

    #[test]
    fn test_stats_serialize_with_camel_case_keys() -> crate::errors::Result<()> {
        let json = serde_json::to_value(AggregateStats::default())?;

        assert_eq!(json["totalRaised"], 0.0);
        assert_eq!(json["monthlyRaised"], 0.0);
        assert_eq!(json["toolsSupported"], 0);
        assert_eq!(json["contributors"], 0);
        Ok(())
    }
}
