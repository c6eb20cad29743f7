pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod table;
pub mod views;

pub use app::App;
pub use client::{RecipeClient, RecipeClientBuilder, RecipeSource};
pub use config::AppConfig;
pub use error::ClientError;
pub use model::{NewRecipe, Recipe};
pub use table::{SortColumn, SortDirection, TableState};

/// Fetch the full recipe collection from the API at `base_url`.
pub async fn fetch_recipes(base_url: &str) -> Result<Vec<Recipe>, ClientError> {
    RecipeClient::new(base_url)?.fetch_all().await
}

/// Fetch a single recipe by id from the API at `base_url`.
pub async fn fetch_recipe(base_url: &str, id: &str) -> Result<Recipe, ClientError> {
    RecipeClient::new(base_url)?.fetch_one(id).await
}
