use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Search input area (top)
    pub search_area: Rect,
    /// Table, loading indicator or error banner
    pub content_area: Rect,
    /// Previous / page info / next
    pub pagination_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Search input
            Constraint::Min(3),                // Table / notices
            Constraint::Length(3),             // Pagination controls
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        search_area: chunks[0],
        content_area: chunks[1],
        pagination_area: chunks[2],
        legend_area: chunks[3],
        status_area: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_vertically() {
        let info = calculate_layout(Rect::new(0, 0, 100, 40), 3);
        assert_eq!(info.search_area.y, 0);
        assert_eq!(info.search_area.height, 3);
        assert_eq!(info.content_area.y, 3);
        assert_eq!(info.content_area.height, 40 - 3 - 3 - 3 - 3);
        assert_eq!(info.status_area.y + info.status_area.height, 40);
    }
}
