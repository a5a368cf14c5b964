//! Report formatting for the ledger.
//!
//! These functions turn ledger data into display strings. They are framework-agnostic;
//! the bot layer only decides where the text goes.

use crate::core::{donation::DonationRecord, stats::AggregateStats};

/// Longest message Discord accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

const HISTORY_HEADER: &str = "**Recent Donations**";

/// Formats an amount with a dollar sign and two decimals, like `$35.00` or `-$5.00`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${amount:.2}")
    }
}

/// Formats the four headline figures.
#[must_use]
pub fn format_stats_summary(stats: &AggregateStats) -> String {
    format!(
        "**Fund Stats**\n\
        • Total raised: {}\n\
        • Raised this month: {}\n\
        • Tools supported: {}\n\
        • Contributors: {}",
        format_amount(stats.total_raised),
        format_amount(stats.monthly_raised),
        stats.tools_supported,
        stats.contributors,
    )
}

/// One line per donation: `2026-10-17 | $25.00 | Alpha | Ko-fi | Sam`.
#[must_use]
pub fn format_history_line(record: &DonationRecord) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        record.created_at.format("%Y-%m-%d"),
        format_amount(record.amount),
        record.tool,
        record.method,
        record.contributor,
    )
}

/// Formats a list of donations, or a placeholder when there are none.
///
/// The result never exceeds [`MAX_MESSAGE_CHARS`]. Lines that would not fit are
/// dropped from the end and summarized as `…and N more`.
///
/// # Arguments
/// * `records` - Donations in display order, usually from `Ledger::history`
///
/// # Returns
/// A message ready to send as a single Discord reply
#[must_use]
pub fn format_history(records: &[&DonationRecord]) -> String {
    if records.is_empty() {
        return "No donations logged yet.".to_string();
    }

    let mut text = HISTORY_HEADER.to_string();
    let mut used = text.chars().count();

    for (shown, record) in records.iter().enumerate() {
        let line = format!("\n• {}", format_history_line(record));
        let remaining = records.len() - shown - 1;
        // Leave room for the overflow note unless this is the last line
        let reserve = if remaining == 0 {
            0
        } else {
            overflow_note(remaining).chars().count()
        };
        let line_len = line.chars().count();

        if used + line_len + reserve > MAX_MESSAGE_CHARS {
            let note = overflow_note(records.len() - shown);
            if used + note.chars().count() <= MAX_MESSAGE_CHARS {
                text.push_str(&note);
            }
            return text;
        }

        text.push_str(&line);
        used += line_len;
    }
    text
}

fn overflow_note(hidden: usize) -> String {
    format!("\n…and {hidden} more")
}

/// The notice shown after a donation is logged.
#[must_use]
pub fn format_thank_you(record: &DonationRecord) -> String {
    if record.is_tool_specific() {
        format!(
            "💚 Thank you, {}! {} toward {} has been logged.",
            record.contributor,
            format_amount(record.amount),
            record.tool
        )
    } else {
        format!(
            "💚 Thank you, {}! {} to the general fund has been logged.",
            record.contributor,
            format_amount(record.amount)
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::donation::DonationRequest;
    use chrono::{TimeZone, Utc};

    fn record(request: DonationRequest) -> DonationRecord {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 18, 30, 0).unwrap();
        DonationRecord::from_request(1, request, at)
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(35.0), "$35.00");
        assert_eq!(format_amount(12.346), "$12.35");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(-5.0), "-$5.00");
    }

    #[test]
    fn test_format_stats_summary() {
        let stats = AggregateStats {
            total_raised: 35.0,
            monthly_raised: 10.0,
            tools_supported: 1,
            contributors: 2,
        };

        let summary = format_stats_summary(&stats);

        assert!(summary.contains("Total raised: $35.00"));
        assert!(summary.contains("Raised this month: $10.00"));
        assert!(summary.contains("Tools supported: 1"));
        assert!(summary.contains("Contributors: 2"));
    }

    #[test]
    fn test_format_history_line() {
        let line = format_history_line(&record(
            DonationRequest::new(25.0)
                .with_tool("Alpha")
                .with_method("Ko-fi")
                .with_contributor("Sam"),
        ));

        assert_eq!(line, "2026-10-17 | $25.00 | Alpha | Ko-fi | Sam");
    }

    #[test]
    fn test_format_history_empty() {
        assert_eq!(format_history(&[]), "No donations logged yet.");
    }

    #[test]
    fn test_format_history_lists_each_record() {
        let a = record(DonationRequest::new(1.0));
        let b = record(DonationRequest::new(2.0).with_contributor("Sam"));

        let text = format_history(&[&b, &a]);

        assert!(text.starts_with("**Recent Donations**"));
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("$2.00 | General | Unknown | Sam"));
    }

    #[test]
    fn test_format_history_fits_one_message() {
        let records: Vec<DonationRecord> = (0..40)
            .map(|_| {
                record(
                    DonationRequest::new(25.0)
                        .with_tool("PortProbe")
                        .with_method("GitHub Sponsors")
                        .with_contributor("Sam"),
                )
            })
            .collect();
        let refs: Vec<&DonationRecord> = records.iter().collect();

        let text = format_history(&refs);

        assert!(text.chars().count() <= MAX_MESSAGE_CHARS);
        assert!(text.lines().count() < 41);
        assert!(text.ends_with(" more"));
    }

    #[test]
    fn test_format_history_overflow_note_counts_hidden_rows() {
        let long_name = "x".repeat(1000);
        let records: Vec<DonationRecord> = (0..3)
            .map(|_| record(DonationRequest::new(1.0).with_contributor(long_name.as_str())))
            .collect();
        let refs: Vec<&DonationRecord> = records.iter().collect();

        let text = format_history(&refs);

        // Two 1000-character rows would exceed the limit, so only one fits
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("…and 2 more"));
        assert!(text.chars().count() <= MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_format_history_short_list_has_no_overflow_note() {
        let records: Vec<DonationRecord> =
            (0..10).map(|_| record(DonationRequest::new(5.0))).collect();
        let refs: Vec<&DonationRecord> = records.iter().collect();

        let text = format_history(&refs);

        assert_eq!(text.lines().count(), 11);
        assert!(!text.contains("more"));
    }

    #[test]
    fn test_format_thank_you_for_tool() {
        let text = format_thank_you(&record(
            DonationRequest::new(25.0)
                .with_tool("Alpha")
                .with_contributor("Sam"),
        ));
        assert_eq!(text, "💚 Thank you, Sam! $25.00 toward Alpha has been logged.");
    }

    #[test]
    fn test_format_thank_you_general_fund() {
        let text = format_thank_you(&record(DonationRequest::new(10.0)));
        assert_eq!(
            text,
            "💚 Thank you, Anonymous! $10.00 to the general fund has been logged."
        );
    }
}
