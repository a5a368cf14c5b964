//! Donation records and the typed request they are built from.
//!
//! Callers describe a donation with a [`DonationRequest`]; the ledger turns it into an
//! immutable [`DonationRecord`] by substituting defaults for anything left out. Amounts
//! are never validated: negative, zero, and absurd values are stored exactly as given.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Tool label meaning "not tool-specific". Never counted as a supported tool.
pub const GENERAL_TOOL: &str = "General";

/// Method label used when the caller does not say how the money arrived.
pub const UNKNOWN_METHOD: &str = "Unknown";

/// Contributor name used when the caller does not give one.
pub const ANONYMOUS_CONTRIBUTOR: &str = "Anonymous";

/// Caller-supplied description of a donation.
///
/// Optional fields that are `None`, empty, or whitespace-only fall back to
/// [`GENERAL_TOOL`], [`UNKNOWN_METHOD`], and [`ANONYMOUS_CONTRIBUTOR`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonationRequest {
    /// Donated amount, already coerced to a decimal
    pub amount: f64,
    /// Sponsored tool, if the donation is earmarked
    pub tool: Option<String>,
    /// How the contribution arrived (Ko-fi, GitHub Sponsors, ...)
    pub method: Option<String>,
    /// Display name of the donor
    pub contributor: Option<String>,
}

impl DonationRequest {
    /// Starts a request for `amount` with every optional field left to its default.
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    /// Earmarks the donation for a tool.
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Records how the contribution arrived.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Names the donor.
    #[must_use]
    pub fn with_contributor(mut self, contributor: impl Into<String>) -> Self {
        self.contributor = Some(contributor.into());
        self
    }
}

/// One logged donation event. Built once by the ledger and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    /// Creation-time token, unique within a session
    pub id: i64,
    /// Donated amount
    pub amount: f64,
    /// Sponsored tool, or [`GENERAL_TOOL`]
    pub tool: String,
    /// How the contribution arrived, or [`UNKNOWN_METHOD`]
    pub method: String,
    /// Donor display name, or [`ANONYMOUS_CONTRIBUTOR`]
    pub contributor: String,
    /// When the donation was logged
    pub created_at: DateTime<Utc>,
    /// Calendar month of `created_at` (1-12)
    pub month: u32,
    /// Calendar year of `created_at`
    pub year: i32,
}

impl DonationRecord {
    /// Builds a record from a request, substituting defaults and deriving `month`/`year`.
    #[must_use]
    pub fn from_request(id: i64, request: DonationRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            amount: request.amount,
            tool: label_or(request.tool, GENERAL_TOOL),
            method: label_or(request.method, UNKNOWN_METHOD),
            contributor: label_or(request.contributor, ANONYMOUS_CONTRIBUTOR),
            created_at,
            month: created_at.month(),
            year: created_at.year(),
        }
    }

    /// Whether the donation is earmarked for a specific tool.
    #[must_use]
    pub fn is_tool_specific(&self) -> bool {
        self.tool != GENERAL_TOOL
    }
}

fn label_or(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Coerces free-form input into a decimal amount.
///
/// The longest leading numeric prefix of the trimmed input is parsed, so `"10 bucks"`
/// becomes `10.0`. Nothing is rejected.
///
/// # Arguments
/// * `raw` - The amount exactly as the user typed it
///
/// # Returns
/// The parsed amount, or `0.0` if there is no numeric prefix or it overflows to infinity
#[must_use]
pub fn coerce_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let prefix_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    (1..=prefix_len)
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}
