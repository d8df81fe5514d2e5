// UI module - paints the view buffer using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (search, content, pagination, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - search: Renders the title filter with its normalized term and counts
// - table: Renders the product table (or its "no results" row)
// - notice: Renders the loading indicator and the error banner
// - pagination: Renders previous/next controls and page info
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (counts, sort mode, page size)

pub mod layout;
pub mod legend;
pub mod notice;
pub mod pagination;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod table;

// Re-export main render function for convenience
pub use render::render;
