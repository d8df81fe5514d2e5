use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use prodtable::view::PaginationStatus;

/// Style for a navigation control; disabled controls are dimmed
fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Build the `◀ Prev  Page X / Y  Next ▶` line
pub fn build_pagination_line(status: &PaginationStatus) -> Line<'static> {
    Line::from(vec![
        Span::styled("◀ Prev", control_style(status.prev_enabled)),
        Span::raw("   "),
        Span::styled(status.text(), Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled("Next ▶", control_style(status.next_enabled)),
    ])
}

/// Render pagination controls
pub fn render_pagination(f: &mut Frame, area: Rect, status: &PaginationStatus) {
    let paragraph = Paragraph::new(build_pagination_line(status))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_pagination_line_text() {
        let line = build_pagination_line(&PaginationStatus::new(2, 3));
        assert_eq!(line_text(&line), "◀ Prev   Page 2 / 3   Next ▶");
    }

    #[test]
    fn test_disabled_controls_are_dimmed() {
        let line = build_pagination_line(&PaginationStatus::new(1, 1));
        assert_eq!(line.spans[0].style.fg, Some(Color::DarkGray));
        assert_eq!(line.spans[4].style.fg, Some(Color::DarkGray));

        let line = build_pagination_line(&PaginationStatus::new(1, 2));
        assert_eq!(line.spans[0].style.fg, Some(Color::DarkGray));
        assert_eq!(line.spans[4].style.fg, Some(Color::Yellow));
    }
}
