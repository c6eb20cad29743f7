pub mod card;
pub mod detail;
pub mod images;
pub mod table;

pub use card::{render_card, render_card_grid};
pub use detail::render_detail;
pub use images::{image_for_recipe, image_for_title};
pub use table::render_table;
