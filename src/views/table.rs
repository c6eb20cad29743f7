//! Text rendering of the recipe table.
//!
//! Layout math (width, truncation) stays Unicode-aware; the row shape is
//! a block per recipe because ingredient and instruction cells are
//! multi-line lists.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::Recipe;
use crate::table::{SortColumn, TableState};

/// Maximum display width of a row's title line.
pub const TITLE_WIDTH: usize = 48;

/// Renders the table for the given state over the collection: a header
/// line with sort indicators, then one block per visible row.
pub fn render_table(state: &TableState, recipes: &[Recipe]) -> String {
    let rows = state.view(recipes);

    let mut out = String::new();
    let header = header_line(state);
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.width()));
    out.push('\n');

    if rows.is_empty() {
        out.push_str("No matching recipes.\n");
        return out;
    }

    for recipe in rows {
        out.push_str(&render_row(recipe));
        out.push('\n');
    }
    out
}

fn header_line(state: &TableState) -> String {
    SortColumn::ALL
        .iter()
        .map(|column| match state.indicator(*column) {
            Some(marker) => format!("{} {}", column.label(), marker),
            None => column.label().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// One table row: title, bulleted ingredients, numbered steps, timing.
fn render_row(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        truncate_to_width(&recipe.title, TITLE_WIDTH)
    ));
    for ingredient in recipe.ingredient_list() {
        out.push_str(&format!("  • {}\n", ingredient));
    }
    for (index, step) in recipe.instruction_steps().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, step));
    }
    out.push_str(&format!(
        "  {} minutes · {} servings\n",
        recipe.cooking_time, recipe.servings
    ));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
