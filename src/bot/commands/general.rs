//! General Discord commands - ping, help, and the fund catalog.
//! None of these touch the ledger.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Lists the tools donations can be earmarked for.
    #[poise::command(slash_command, prefix_command)]
    pub async fn tools(ctx: Context<'_>) -> Result<()> {
        ctx.say(ctx.data().fund.format_tools()).await?;
        Ok(())
    }

    /// Shows where to actually send a donation.
    #[poise::command(slash_command, prefix_command)]
    pub async fn support(ctx: Context<'_>) -> Result<()> {
        ctx.say(ctx.data().fund.format_support()).await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let help_text = format!(
            "**{} Help**\n\n\
            **Donations**\n\
            • `/donate <amount> [tool] [method] [contributor]` - Logs a donation.\n\
            • `/stats` - Shows totals, this month's total, tools supported, and contributors.\n\
            • `/history [limit]` - Lists recent donations, newest first.\n\
            • `/reset` - Clears the ledger (bot owners only).\n\n\
            **Fund**\n\
            • `/tools` - Lists sponsorable tools.\n\
            • `/support` - Shows donation platforms and wallet addresses.\n\n\
            **Utility**\n\
            • `/ping` - Checks if the bot is responsive.\n\
            • `/help` - Shows this help message.\n\n\
            Logging a donation here does not move any money.",
            ctx.data().fund.fund.name
        );

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
