//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Donation ledger commands
pub mod donation;

/// General utility and fund catalog commands
pub mod general;

// Export commands
pub use donation::*;
pub use general::*;
