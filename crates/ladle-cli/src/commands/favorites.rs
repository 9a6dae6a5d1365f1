//! Favorites command handlers.

use anyhow::Result;
use ladle_client::AppContext;

use crate::cli::FavoriteCommands;

pub async fn run(ctx: &AppContext, command: FavoriteCommands) -> Result<()> {
    match command {
        FavoriteCommands::List => list(ctx).await,
        FavoriteCommands::Toggle { id } => toggle(ctx, &id).await,
        FavoriteCommands::Clear => clear(ctx).await,
    }
}

async fn list(ctx: &AppContext) -> Result<()> {
    ctx.favorites.fetch().await?;
    let recipes = ctx.favorites.recipes();
    if recipes.is_empty() {
        println!("No favorites.");
        return Ok(());
    }
    for recipe in recipes {
        let id = recipe.id().unwrap_or("<no id>");
        let name = recipe.str_field("name").unwrap_or("<unnamed>");
        println!("{id}  {name}");
    }
    Ok(())
}

async fn toggle(ctx: &AppContext, id: &str) -> Result<()> {
    ctx.favorites.fetch().await?;
    let favorited = ctx.favorites.toggle(id).await?;
    if favorited {
        println!("Added {id} to favorites.");
    } else {
        println!("Removed {id} from favorites.");
    }
    Ok(())
}

async fn clear(ctx: &AppContext) -> Result<()> {
    ctx.favorites.fetch().await?;
    let summary = ctx.favorites.clear_all().await;
    if summary.failed > 0 {
        println!(
            "Cleared {} favorites locally; {} removal(s) failed on the server.",
            summary.attempted, summary.failed
        );
    } else {
        println!("Cleared {} favorites.", summary.attempted);
    }
    Ok(())
}
