use crate::model::Recipe;
use crate::views::images;

/// Renders one recipe as a list card: title, timing, servings, image.
pub fn render_card(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", recipe.title));
    out.push_str(&format!(
        "  {} mins · {} servings\n",
        recipe.cooking_time, recipe.servings
    ));
    out.push_str(&format!("  {}\n", images::image_for_recipe(recipe)));
    out
}

/// Renders the whole collection as cards, one per recipe, in collection
/// order.
pub fn render_card_grid(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes yet.\n".to_string();
    }
    recipes
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            id: "1".to_string(),
            title: title.to_string(),
            ingredients: "a,b".to_string(),
            instructions: "Do.".to_string(),
            cooking_time: 25,
            servings: 4,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_card_shows_title_timing_and_servings() {
        let output = render_card(&recipe("Spaghetti Carbonara"));
        assert!(output.contains("Spaghetti Carbonara"));
        assert!(output.contains("25 mins"));
        assert!(output.contains("4 servings"));
        assert!(output.contains(images::CARBONARA_IMAGE));
    }

    #[test]
    fn test_empty_collection_renders_placeholder() {
        let output = render_card_grid(&[]);
        assert_eq!(output, "No recipes yet.\n");
    }

    #[test]
    fn test_grid_keeps_collection_order() {
        let recipes = vec![recipe("Zebra Cake"), recipe("Apple Pie")];
        let output = render_card_grid(&recipes);
        let zebra = output.find("Zebra Cake").unwrap();
        let apple = output.find("Apple Pie").unwrap();
        assert!(zebra < apple);
    }
}
