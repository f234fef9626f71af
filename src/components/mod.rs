//! UI Components
//!
//! Leptos components for the storefront page.

mod cart_panel;
mod category_list;
mod plant_card;
mod plant_detail_modal;
mod plant_grid;
mod status_message;

pub use cart_panel::CartPanel;
pub use category_list::CategoryList;
pub use plant_card::PlantCard;
pub use plant_detail_modal::PlantDetailModal;
pub use plant_grid::PlantGrid;
pub use status_message::StatusMessage;
