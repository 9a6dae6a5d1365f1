//! Session command handlers.

use anyhow::Result;
use ladle_client::{AppContext, AuthOutcome};
use serde_json::json;

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    match ctx.session.login(email, password).await {
        AuthOutcome::Success => {
            println!("Logged in as {}", display_name(ctx, email));
            Ok(())
        }
        AuthOutcome::Failure { message } => anyhow::bail!("Login failed: {message}"),
    }
}

pub async fn register(ctx: &AppContext, name: &str, email: &str, password: &str) -> Result<()> {
    let user_data = json!({ "name": name, "email": email, "password": password });
    match ctx.session.register(&user_data).await {
        AuthOutcome::Success => {
            println!("Account created, logged in as {}", display_name(ctx, email));
            Ok(())
        }
        AuthOutcome::Failure { message } => anyhow::bail!("Registration failed: {message}"),
    }
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    if ctx.session.token().is_none() {
        println!("Not logged in.");
        return Ok(());
    }
    ctx.logout();
    println!("Logged out.");
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> Result<()> {
    match ctx.session.user() {
        Some(user) => {
            println!("{}", serde_json::to_string_pretty(user.as_value())?);
            Ok(())
        }
        None => {
            println!("Not logged in.");
            Ok(())
        }
    }
}

fn display_name(ctx: &AppContext, fallback: &str) -> String {
    ctx.session
        .user()
        .and_then(|u| u.str_field("name").map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}
