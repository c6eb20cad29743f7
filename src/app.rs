use log::debug;

use crate::client::RecipeSource;
use crate::error::ClientError;
use crate::model::{NewRecipe, Recipe};
use crate::table::TableState;
use crate::views;

/// Owns the recipe collection and routes between the views.
///
/// The collection is fetched once up front and held in memory. The only
/// write path, [`App::add`], re-fetches the whole collection on success
/// instead of merging the created record in.
pub struct App<S: RecipeSource> {
    source: S,
    recipes: Vec<Recipe>,
}

impl<S: RecipeSource> App<S> {
    pub fn new(source: S) -> Self {
        App {
            source,
            recipes: Vec::new(),
        }
    }

    /// Initial fetch of the full collection.
    ///
    /// A failure here blocks every collection-backed view; there is no
    /// partial rendering and no retry.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.recipes = self.source.fetch_all().await?;
        debug!("loaded {} recipes", self.recipes.len());
        Ok(())
    }

    /// Re-fetches the collection. Invoked after a successful creation.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.load().await
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Home view: one card per recipe, in collection order.
    pub fn list_view(&self) -> String {
        views::render_card_grid(&self.recipes)
    }

    /// Table view over the in-memory collection.
    pub fn table_view(&self, state: &TableState) -> String {
        views::render_table(state, &self.recipes)
    }

    /// Detail view. Fetches the single record by id on navigation,
    /// independently of the collection.
    pub async fn detail_view(&self, id: &str) -> Result<String, ClientError> {
        let recipe = self.source.fetch_one(id).await?;
        Ok(views::render_detail(&recipe))
    }

    /// Creates a recipe, then refreshes the collection.
    pub async fn add(&mut self, recipe: &NewRecipe) -> Result<Recipe, ClientError> {
        let created = self.source.create(recipe).await?;
        self.refresh().await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory source backing the shell in tests.
    struct StubSource {
        recipes: Mutex<Vec<Recipe>>,
    }

    impl StubSource {
        fn with(recipes: Vec<Recipe>) -> Self {
            StubSource {
                recipes: Mutex::new(recipes),
            }
        }
    }

    #[async_trait]
    impl RecipeSource for StubSource {
        async fn fetch_all(&self) -> Result<Vec<Recipe>, ClientError> {
            Ok(self.recipes.lock().unwrap().clone())
        }

        async fn fetch_one(&self, id: &str) -> Result<Recipe, ClientError> {
            self.recipes
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| ClientError::NotFound { id: id.to_string() })
        }

        async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, ClientError> {
            let mut recipes = self.recipes.lock().unwrap();
            let created = Recipe {
                id: format!("{}", recipes.len() + 1),
                title: recipe.title.clone(),
                ingredients: recipe.ingredients.clone(),
                instructions: recipe.instructions.clone(),
                cooking_time: recipe.cooking_time,
                servings: recipe.servings,
                created_at: "2024-01-01T00:00:00Z".to_string(),
                image_url: None,
            };
            recipes.push(created.clone());
            Ok(created)
        }
    }

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            ingredients: "a,b".to_string(),
            instructions: "Cook.".to_string(),
            cooking_time: 15,
            servings: 2,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_load_fills_the_collection() {
        let source = StubSource::with(vec![recipe("1", "Toast"), recipe("2", "Soup")]);
        let mut app = App::new(source);
        app.load().await.unwrap();
        assert_eq!(app.recipes().len(), 2);
    }

    #[tokio::test]
    async fn test_list_view_before_load_is_empty() {
        let source = StubSource::with(vec![recipe("1", "Toast")]);
        let app = App::new(source);
        assert_eq!(app.list_view(), "No recipes yet.\n");
    }

    #[tokio::test]
    async fn test_detail_view_fetches_by_id() {
        let source = StubSource::with(vec![recipe("1", "Toast")]);
        let app = App::new(source);
        let output = app.detail_view("1").await.unwrap();
        assert!(output.contains("Toast"));
    }

    #[tokio::test]
    async fn test_detail_view_unknown_id_is_not_found() {
        let source = StubSource::with(vec![]);
        let app = App::new(source);
        let err = app.detail_view("nope").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound { ref id } if id == "nope"));
    }

    #[tokio::test]
    async fn test_add_refreshes_the_collection() {
        let source = StubSource::with(vec![recipe("1", "Toast")]);
        let mut app = App::new(source);
        app.load().await.unwrap();
        assert_eq!(app.recipes().len(), 1);

        let created = app
            .add(&NewRecipe {
                title: "Soup".to_string(),
                ingredients: "water,vegetables".to_string(),
                instructions: "Simmer.".to_string(),
                cooking_time: 30,
                servings: 4,
            })
            .await
            .unwrap();

        assert_eq!(created.title, "Soup");
        // The collection was re-fetched, not merged.
        assert_eq!(app.recipes().len(), 2);
        assert!(app.list_view().contains("Soup"));
    }

    #[tokio::test]
    async fn test_table_view_uses_loaded_collection() {
        let source = StubSource::with(vec![recipe("1", "Banana Bread"), recipe("2", "Apple Pie")]);
        let mut app = App::new(source);
        app.load().await.unwrap();

        let mut state = TableState::default();
        state.set_filter("pie");
        let output = app.table_view(&state);
        assert!(output.contains("Apple Pie"));
        assert!(!output.contains("Banana Bread"));
    }
}
