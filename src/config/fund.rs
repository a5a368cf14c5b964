//! Fund catalog loading from config.toml
//!
//! The catalog lists the tools people can sponsor and where they can actually send
//! money. It is display data only: donations may name tools outside the catalog, and
//! nothing here is used to verify a payment.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_VAR: &str = "FUND_CONFIG_PATH";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FundConfig {
    /// General information about the fund
    #[serde(default)]
    pub fund: FundInfo,
    /// Sponsorable tools
    #[serde(default)]
    pub tools: Vec<ToolConfig>,
    /// Outbound donation platforms
    #[serde(default)]
    pub links: Vec<SupportLink>,
    /// Crypto wallet addresses
    #[serde(default)]
    pub wallets: Vec<WalletAddress>,
}

/// Name and tagline shown in help and support messages
#[derive(Debug, Clone, Deserialize)]
pub struct FundInfo {
    /// Display name of the fund
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub tagline: String,
}

impl Default for FundInfo {
    fn default() -> Self {
        Self {
            name: "Tools Fund".to_string(),
            tagline: String::new(),
        }
    }
}

/// A tool donors can earmark money for
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// Tool name, used as the donation's tool label
    pub name: String,
    /// What the tool does
    #[serde(default)]
    pub description: String,
}

/// A third-party platform that accepts donations
#[derive(Debug, Clone, Deserialize)]
pub struct SupportLink {
    /// Platform name (e.g. "Ko-fi", "GitHub Sponsors")
    pub platform: String,
    /// Where to send donors
    pub url: String,
}

/// A wallet accepting crypto donations
#[derive(Debug, Clone, Deserialize)]
pub struct WalletAddress {
    /// Currency ticker (e.g. "BTC")
    pub currency: String,
    /// Receiving address
    pub address: String,
}

impl FundConfig {
    /// Tool names containing `partial`, case-insensitively, sorted, at most 25.
    #[must_use]
    pub fn matching_tools(&self, partial: &str) -> Vec<String> {
        let partial_lower = partial.to_lowercase();
        let mut matching: Vec<String> = self
            .tools
            .iter()
            .filter(|tool| tool.name.to_lowercase().contains(&partial_lower))
            .map(|tool| tool.name.clone())
            .take(25) // Discord autocomplete limit
            .collect();
        matching.sort();
        matching
    }

    /// Formats the tool catalog.
    #[must_use]
    pub fn format_tools(&self) -> String {
        if self.tools.is_empty() {
            return "No tools listed yet.".to_string();
        }

        let lines: Vec<String> = self
            .tools
            .iter()
            .map(|tool| {
                if tool.description.is_empty() {
                    format!("• **{}**", tool.name)
                } else {
                    format!("• **{}** - {}", tool.name, tool.description)
                }
            })
            .collect();
        format!("**{} Tools**\n{}", self.fund.name, lines.join("\n"))
    }

    /// Formats the donation platforms and wallet addresses.
    #[must_use]
    pub fn format_support(&self) -> String {
        let mut text = format!("**Support {}**", self.fund.name);
        if !self.fund.tagline.is_empty() {
            text.push('\n');
            text.push_str(&self.fund.tagline);
        }

        if self.links.is_empty() && self.wallets.is_empty() {
            text.push_str("\nNo donation channels configured.");
            return text;
        }

        for link in &self.links {
            text.push_str(&format!("\n• {}: <{}>", link.platform, link.url));
        }
        for wallet in &self.wallets {
            text.push_str(&format!("\n• {}: `{}`", wallet.currency, wallet.address));
        }
        text
    }
}

/// Loads the fund catalog from a TOML file
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FundConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading fund configuration from {:?}", path_ref);

    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the fund catalog from `FUND_CONFIG_PATH`, or ./config.toml
pub fn load_default_config() -> Result<FundConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());
    load_config(path)
}
