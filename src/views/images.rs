//! Representative images for recipes.
//!
//! The API does not store an image for most records, so the card and
//! detail views fall back to picking one from the title. The rules are
//! ordered, case-insensitive substring matches; the first match wins.

use crate::model::Recipe;

pub const CARBONARA_IMAGE: &str = "https://images.unsplash.com/photo-1528658948776-cf610b846f80?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8Mnx8Y2FyYm9uYXJhfGVufDB8fDB8fHww";
pub const CHICKEN_STIR_FRY_IMAGE: &str = "https://plus.unsplash.com/premium_photo-1683657860186-6afce5df3c0a?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTN8fGNoaWNrZW4lMjBzdHlyJTIwZnJ5fGVufDB8fDB8fHww";
pub const VEGETABLE_SOUP_IMAGE: &str = "https://images.unsplash.com/photo-1547592166-23ac45744acd?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTZ8fHNvdXB8ZW58MHx8MHx8fDA%3D";
pub const FALLBACK_IMAGE: &str = "https://plus.unsplash.com/premium_photo-1673108852141-e8c3c22a4a22?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MXx8Zm9vZHxlbnwwfHwwfHx8MA%3D%3D";

/// Picks an image for a recipe title.
pub fn image_for_title(title: &str) -> &'static str {
    let lower_case_title = title.to_lowercase();
    if lower_case_title.contains("carbonara") {
        CARBONARA_IMAGE
    } else if lower_case_title.contains("chicken stir-fry") {
        CHICKEN_STIR_FRY_IMAGE
    } else if lower_case_title.contains("vegetable soup") {
        VEGETABLE_SOUP_IMAGE
    } else {
        FALLBACK_IMAGE
    }
}

/// An explicit image on the record wins over the title heuristic.
pub fn image_for_recipe(recipe: &Recipe) -> &str {
    recipe
        .image_url
        .as_deref()
        .unwrap_or_else(|| image_for_title(&recipe.title))
}
