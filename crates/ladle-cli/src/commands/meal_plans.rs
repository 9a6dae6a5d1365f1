//! Meal plan command handlers.

use anyhow::Result;
use ladle_client::{AppContext, api};

use super::print_envelope;
use crate::cli::MealPlanCommands;

pub async fn run(ctx: &AppContext, command: MealPlanCommands) -> Result<()> {
    match command {
        MealPlanCommands::List => {
            let envelope = api::meal_plans::list(&ctx.api, &[]).await?;
            print_envelope(envelope, "failed to list meal plans")
        }
        MealPlanCommands::Show { id } => {
            let envelope = api::meal_plans::get(&ctx.api, &id).await?;
            print_envelope(envelope, "meal plan not found")
        }
    }
}
