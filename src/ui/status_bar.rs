use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the status line: counts, sort mode and page size
pub fn build_status_line(
    filtered_count: usize,
    total_count: usize,
    sort_label: &str,
    page_size: usize,
    page_size_options: &[usize],
) -> String {
    let options = page_size_options
        .iter()
        .map(|size| {
            if *size == page_size {
                format!("[{}]", size)
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    [
        format!("Products: {}/{}", filtered_count, total_count),
        format!("Sort: {}", sort_label),
        format!("Page size: {}", options),
    ]
    .join(" | ")
}

/// Render the bottom status bar, coloring labels before the first colon
pub fn render_status_bar(f: &mut Frame, area: Rect, status_line: &str) {
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }

        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value));
        } else {
            spans.push(Span::raw(part));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_marks_selected_page_size() {
        let line = build_status_line(4, 50, "Price ↑", 10, &[5, 10, 20, 50]);
        assert_eq!(
            line,
            "Products: 4/50 | Sort: Price ↑ | Page size: 5 [10] 20 50"
        );
    }
}
