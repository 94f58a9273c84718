//! Reusable view components.

pub mod result_panel;
pub mod search_bar;

pub use result_panel::{ResultPanel, ResultView};
pub use search_bar::SearchBar;
