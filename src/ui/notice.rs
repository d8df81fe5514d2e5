use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the loading indicator shown while the product fetch is outstanding
pub fn render_loading(f: &mut Frame, area: Rect, endpoint: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Loading products…",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(endpoint, Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, notice_area(area, 4));
}

/// Render the error banner (fetch failed; there is no retry)
pub fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(
            "✗ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(message),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Error ")
        .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(vec![line, Line::from(""), Line::from("Press q to quit")])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    let notice = notice_area(area, 6);
    f.render_widget(Clear, notice);
    f.render_widget(paragraph, notice);
}

/// Horizontally centered box near the top of `area`, at most 80 cells wide
fn notice_area(area: Rect, height: u16) -> Rect {
    let width = area.width.min(80);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(height).min(2),
        width,
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_area_centered_and_capped() {
        let area = notice_area(Rect::new(0, 0, 120, 30), 4);
        assert_eq!(area.width, 80);
        assert_eq!(area.x, 20);
        assert_eq!(area.height, 4);
    }

    #[test]
    fn test_notice_area_small_terminal() {
        let area = notice_area(Rect::new(0, 0, 40, 3), 6);
        assert_eq!(area.width, 40);
        assert_eq!(area.height, 3);
        assert_eq!(area.y, 0);
    }
}
