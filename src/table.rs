use std::cmp::Ordering;
use std::str::FromStr;

use crate::model::Recipe;

/// Columns the recipe table can be sorted by.
///
/// `id` and `createdAt` are deliberately absent; they are not sortable
/// through the table controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Ingredients,
    Instructions,
    CookingTime,
    Servings,
}

impl SortColumn {
    /// Every column, in header order.
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Title,
        SortColumn::Ingredients,
        SortColumn::Instructions,
        SortColumn::CookingTime,
        SortColumn::Servings,
    ];

    /// Header label shown above the column.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Title => "Title",
            SortColumn::Ingredients => "Ingredients",
            SortColumn::Instructions => "Instructions",
            SortColumn::CookingTime => "Cooking Time",
            SortColumn::Servings => "Servings",
        }
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(SortColumn::Title),
            "ingredients" => Ok(SortColumn::Ingredients),
            "instructions" => Ok(SortColumn::Instructions),
            "cooking-time" | "cooking_time" | "cookingtime" => Ok(SortColumn::CookingTime),
            "servings" => Ok(SortColumn::Servings),
            other => Err(format!("unknown sort column: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Client-side filter and sort state for the recipe table.
///
/// The visible rows are a pure function of this state and the input
/// collection, recomputed on every change and never cached. State lives
/// only as long as the table view itself.
#[derive(Debug, Clone)]
pub struct TableState {
    sort_column: SortColumn,
    sort_direction: SortDirection,
    filter_text: String,
}

impl Default for TableState {
    fn default() -> Self {
        TableState {
            sort_column: SortColumn::Title,
            sort_direction: SortDirection::Ascending,
            filter_text: String::new(),
        }
    }
}

impl TableState {
    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Replaces the filter text verbatim; no trimming, no debouncing.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// Selecting the active column flips the direction; selecting any
    /// other column makes it active, ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if column == self.sort_column {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Marker for a column header: `▲` when the column is actively
    /// ascending, `▼` when actively descending, nothing when inactive.
    pub fn indicator(&self, column: SortColumn) -> Option<&'static str> {
        if column != self.sort_column {
            return None;
        }
        Some(match self.sort_direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        })
    }

    /// Derives the visible rows: a case-insensitive title filter, then a
    /// stable sort keyed by the active column. Equal keys keep their
    /// input order.
    pub fn view<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        let needle = self.filter_text.to_lowercase();
        let mut rows: Vec<&Recipe> = recipes
            .iter()
            .filter(|recipe| recipe.title.to_lowercase().contains(&needle))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = compare_by(self.sort_column, a, b);
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        rows
    }
}

fn compare_by(column: SortColumn, a: &Recipe, b: &Recipe) -> Ordering {
    match column {
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::Ingredients => a.ingredients.cmp(&b.ingredients),
        SortColumn::Instructions => a.instructions.cmp(&b.instructions),
        SortColumn::CookingTime => a.cooking_time.cmp(&b.cooking_time),
        SortColumn::Servings => a.servings.cmp(&b.servings),
    }
}
