use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ladle")]
#[command(version)]
#[command(about = "Terminal client for the ladle recipe service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Browse recipes
    Recipes {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Manage favorite recipes
    Favorites {
        #[command(subcommand)]
        command: FavoriteCommands,
    },
    /// Browse meal plans
    MealPlans {
        #[command(subcommand)]
        command: MealPlanCommands,
    },
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Lists recipes
    List,
    /// Searches recipes by text
    Search {
        /// The search query
        query: String,
    },
    /// Shows a single recipe
    Show {
        /// The recipe ID
        #[arg(value_name = "RECIPE_ID")]
        id: String,
    },
    /// Lists the available cuisines
    Cuisines,
}

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Lists the current user's favorites
    List,
    /// Toggles a recipe's favorite state
    Toggle {
        /// The recipe ID
        #[arg(value_name = "RECIPE_ID")]
        id: String,
    },
    /// Removes all favorites
    Clear,
}

#[derive(Subcommand)]
pub enum MealPlanCommands {
    /// Lists meal plans
    List,
    /// Shows a single meal plan
    Show {
        /// The meal plan ID
        #[arg(value_name = "PLAN_ID")]
        id: String,
    },
}
