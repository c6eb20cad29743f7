use std::time::Duration;

use clap::{Parser, Subcommand};
use log::info;

use recipe_browser::{
    App, AppConfig, ClientError, NewRecipe, RecipeClient, SortColumn, SortDirection, TableState,
};

#[derive(Parser)]
#[command(
    name = "recipe-browser",
    about = "Browse, filter, and add recipes from a recipe API",
    version
)]
struct Cli {
    /// Base URL of the recipe API (overrides config and environment)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every recipe as a card
    List,
    /// Show the filterable, sortable recipe table
    Table {
        /// Keep only recipes whose title contains this text
        #[arg(long, default_value = "")]
        filter: String,
        /// Sort column; repeat the flag to toggle like clicking headers
        #[arg(long = "sort-by")]
        sort_by: Vec<SortColumn>,
        /// Leave the final sort direction descending
        #[arg(long)]
        desc: bool,
    },
    /// Show one recipe in full
    Show {
        /// Recipe id
        id: String,
    },
    /// Add a recipe, then refresh the collection
    Add {
        #[arg(long)]
        title: String,
        /// Comma-separated ingredient list
        #[arg(long)]
        ingredients: String,
        /// Period-separated steps
        #[arg(long)]
        instructions: String,
        /// Minutes
        #[arg(long = "cooking-time")]
        cooking_time: u32,
        #[arg(long)]
        servings: u32,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = AppConfig::load()?;
    let base_url = cli.api_url.unwrap_or(config.api_base_url);

    let client = RecipeClient::builder()
        .base_url(base_url)
        .timeout(Duration::from_secs(config.timeout))
        .build()?;
    let mut app = App::new(client);

    match cli.command {
        Command::List => {
            info!("Loading recipes...");
            app.load().await?;
            print!("{}", app.list_view());
        }
        Command::Table {
            filter,
            sort_by,
            desc,
        } => {
            info!("Loading recipes...");
            app.load().await?;

            let mut state = TableState::default();
            state.set_filter(filter);
            for column in sort_by {
                state.toggle_sort(column);
            }
            if desc && state.sort_direction() != SortDirection::Descending {
                state.toggle_sort(state.sort_column());
            }

            print!("{}", app.table_view(&state));
        }
        Command::Show { id } => {
            info!("Loading recipe...");
            print!("{}", app.detail_view(&id).await?);
        }
        Command::Add {
            title,
            ingredients,
            instructions,
            cooking_time,
            servings,
        } => {
            let created = app
                .add(&NewRecipe {
                    title,
                    ingredients,
                    instructions,
                    cooking_time,
                    servings,
                })
                .await?;
            println!("Added \"{}\" ({})", created.title, created.id);
            println!("{} recipes in collection.", app.recipes().len());
        }
    }

    Ok(())
}
