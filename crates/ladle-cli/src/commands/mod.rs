//! Command handlers. Each one builds the application context, runs one
//! library operation, and prints the result.

mod auth;
mod favorites;
mod meal_plans;
mod recipes;

use anyhow::{Context as _, Result};
use ladle_client::AppContext;

use crate::cli::Commands;

pub async fn dispatch(command: Commands) -> Result<()> {
    let ctx = AppContext::from_env().context("failed to initialize")?;

    match command {
        Commands::Login { email, password } => auth::login(&ctx, &email, &password).await,
        Commands::Register {
            name,
            email,
            password,
        } => auth::register(&ctx, &name, &email, &password).await,
        Commands::Logout => auth::logout(&ctx),
        Commands::Whoami => auth::whoami(&ctx),
        Commands::Recipes { command } => recipes::run(&ctx, command).await,
        Commands::Favorites { command } => favorites::run(&ctx, command).await,
        Commands::MealPlans { command } => meal_plans::run(&ctx, command).await,
    }
}

/// Prints envelope data as pretty JSON, or the failure message.
fn print_envelope(envelope: ladle_types::Envelope, fallback: &str) -> Result<()> {
    match envelope.into_data(fallback) {
        Ok(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        Err(message) => anyhow::bail!(message),
    }
}
