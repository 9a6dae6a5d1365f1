//! Recipe browsing command handlers.

use anyhow::Result;
use ladle_client::{AppContext, api};

use super::print_envelope;
use crate::cli::RecipeCommands;

pub async fn run(ctx: &AppContext, command: RecipeCommands) -> Result<()> {
    match command {
        RecipeCommands::List => {
            let envelope = api::recipes::list(&ctx.api, &[]).await?;
            print_envelope(envelope, "failed to list recipes")
        }
        RecipeCommands::Search { query } => {
            let envelope = api::recipes::search(&ctx.api, &query, &[]).await?;
            print_envelope(envelope, "search failed")
        }
        RecipeCommands::Show { id } => {
            let envelope = api::recipes::get(&ctx.api, &id).await?;
            print_envelope(envelope, "recipe not found")
        }
        RecipeCommands::Cuisines => {
            let envelope = api::recipes::cuisines(&ctx.api).await?;
            print_envelope(envelope, "failed to list cuisines")
        }
    }
}
