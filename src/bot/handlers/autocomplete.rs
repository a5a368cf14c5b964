//! Autocomplete handlers for Discord slash command parameters.

use crate::bot::Context;

/// Suggests catalog tool names matching what the user has typed so far.
///
/// Donations are not limited to these names; the catalog only saves typing.
pub async fn autocomplete_tool_name(ctx: Context<'_>, partial: &str) -> Vec<String> {
    ctx.data().fund.matching_tools(partial)
}
