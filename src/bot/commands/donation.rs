//! Donation Discord commands - `donate`, `stats`, `history`, and `reset`.
//!
//! These commands drive the ledger through the core modules and render the results
//! with the report formatters.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, handlers::autocomplete},
        core::{
            donation::{DonationRequest, coerce_amount},
            report,
        },
        errors::Result,
    };

    /// Logs a donation to the fund.
    ///
    /// The amount is taken as typed and coerced to a number; it is not validated.
    /// Actual payment happens on the platforms listed by `/support`.
    #[poise::command(slash_command, prefix_command)]
    pub async fn donate(
        ctx: Context<'_>,
        #[description = "Amount donated"] amount: String,
        #[description = "Tool the donation is for (default: General)"]
        #[autocomplete = "autocomplete::autocomplete_tool_name"]
        tool: Option<String>,
        #[description = "How the donation was sent (Ko-fi, GitHub Sponsors, ...)"]
        method: Option<String>,
        #[description = "Name to credit (default: Anonymous)"] contributor: Option<String>,
    ) -> Result<()> {
        let request = DonationRequest {
            amount: coerce_amount(&amount),
            tool,
            method,
            contributor,
        };

        let (record, stats) = {
            let mut ledger = ctx.data().ledger.lock().await;
            let record = ledger.append(request).await;
            (record, *ledger.stats())
        };

        ctx.say(format!(
            "{}\n\n{}",
            report::format_thank_you(&record),
            report::format_stats_summary(&stats)
        ))
        .await?;
        Ok(())
    }

    /// Shows the fund's headline numbers.
    #[poise::command(slash_command, prefix_command)]
    pub async fn stats(ctx: Context<'_>) -> Result<()> {
        let (stats, degraded) = {
            let ledger = ctx.data().ledger.lock().await;
            (*ledger.stats(), ledger.is_degraded())
        };

        let mut text = report::format_stats_summary(&stats);
        if degraded {
            text.push_str("\n_Storage is unavailable; figures are kept in memory only._");
        }
        ctx.say(text).await?;
        Ok(())
    }

    /// Lists recent donations, newest first.
    #[poise::command(slash_command, prefix_command)]
    pub async fn history(
        ctx: Context<'_>,
        #[description = "How many donations to show (default 10)"]
        #[min = 1]
        #[max = 25]
        limit: Option<u32>,
    ) -> Result<()> {
        let text = {
            let ledger = ctx.data().ledger.lock().await;
            report::format_history(&ledger.history(Some(super::history_limit(limit))))
        };

        ctx.say(text).await?;
        Ok(())
    }

    /// Clears every logged donation. Bot owners only.
    #[poise::command(slash_command, prefix_command, owners_only)]
    pub async fn reset(ctx: Context<'_>) -> Result<()> {
        let stats = {
            let mut ledger = ctx.data().ledger.lock().await;
            ledger.reset().await;
            *ledger.stats()
        };

        ctx.say(format!(
            "🧹 Ledger reset.\n\n{}",
            report::format_stats_summary(&stats)
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

/// Rows shown by `/history` when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Largest limit `/history` accepts.
pub const MAX_HISTORY_LIMIT: usize = 25;

/// Resolves the `/history` limit option.
///
/// Prefix commands bypass the slash-command bounds, so the value is clamped here too.
/// A missing or zero limit falls back to [`DEFAULT_HISTORY_LIMIT`].
///
/// # Arguments
/// * `limit` - The raw option as received from Discord
///
/// # Returns
/// A row count between 1 and [`MAX_HISTORY_LIMIT`]
#[must_use]
pub fn history_limit(limit: Option<u32>) -> usize {
    match limit {
        None | Some(0) => DEFAULT_HISTORY_LIMIT,
        Some(l) => usize::try_from(l).map_or(MAX_HISTORY_LIMIT, |l| l.min(MAX_HISTORY_LIMIT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_limit_defaults() {
        assert_eq!(history_limit(None), DEFAULT_HISTORY_LIMIT);
        assert_eq!(history_limit(Some(0)), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_history_limit_passes_valid_values() {
        assert_eq!(history_limit(Some(1)), 1);
        assert_eq!(history_limit(Some(25)), 25);
    }

    #[test]
    fn test_history_limit_clamps_large_values() {
        assert_eq!(history_limit(Some(40)), MAX_HISTORY_LIMIT);
        assert_eq!(history_limit(Some(u32::MAX)), MAX_HISTORY_LIMIT);
    }
}
