use serde::{Deserialize, Serialize};

/// A recipe record as served by the API.
///
/// Every field is authoritative from the server; the client performs no
/// validation or normalization. `ingredients` holds a comma-separated list
/// and `instructions` holds period-separated steps; both are split only
/// for display, the stored strings are never altered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    /// Minutes
    pub cooking_time: u32,
    pub servings: u32,
    pub created_at: String,
    /// Optional explicit image; when set it wins over the title heuristic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Splits the comma-separated ingredient list for display.
    ///
    /// Empty segments are kept verbatim, so `"a,,b"` yields three entries.
    pub fn ingredient_list(&self) -> Vec<&str> {
        self.ingredients.split(',').collect()
    }

    /// Splits the period-separated instructions into ordered steps.
    ///
    /// A trailing period yields an empty trailing step.
    pub fn instruction_steps(&self) -> Vec<&str> {
        self.instructions.split('.').collect()
    }
}

/// Payload for creating a recipe.
///
/// `id` and `createdAt` are assigned by the server and therefore absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub cooking_time: u32,
    pub servings: u32,
}
