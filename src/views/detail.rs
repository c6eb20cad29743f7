use crate::model::Recipe;
use crate::views::images;

/// Renders the full detail view of one recipe.
///
/// The ingredient and instruction strings are shown as stored; only the
/// table view splits them into lists.
pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", images::image_for_recipe(recipe)));
    out.push_str(&format!("{}\n\n", recipe.title));
    out.push_str(&format!(
        "Cooking Time: {} minutes    Servings: {}\n",
        recipe.cooking_time, recipe.servings
    ));
    out.push_str("\nIngredients\n");
    out.push_str(&format!("{}\n", recipe.ingredients));
    out.push_str("\nInstructions\n");
    out.push_str(&format!("{}\n", recipe.instructions));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_shows_raw_strings() {
        let recipe = Recipe {
            id: "1".to_string(),
            title: "Vegetable Soup".to_string(),
            ingredients: "carrots,celery,onion".to_string(),
            instructions: "Chop.Simmer for 30 minutes.".to_string(),
            cooking_time: 40,
            servings: 6,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            image_url: None,
        };

        let output = render_detail(&recipe);
        assert!(output.contains("Vegetable Soup"));
        assert!(output.contains("Cooking Time: 40 minutes"));
        assert!(output.contains("Servings: 6"));
        // Raw strings, not split lists.
        assert!(output.contains("carrots,celery,onion"));
        assert!(output.contains("Chop.Simmer for 30 minutes."));
        assert!(output.contains(images::VEGETABLE_SOUP_IMAGE));
    }
}
