use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    ready: bool,
    search_mode: bool,
    has_search_term: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Table controls only exist once products are loaded
    if ready {
        if search_mode {
            hotkey_spans.extend(vec![
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(":Keep Search  "),
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(":Cancel Search  "),
            ]);
        } else {
            let (prev_key, next_key) = if vim_mode { ("h", "l") } else { ("←", "→") };
            hotkey_spans.extend(vec![
                Span::styled(prev_key, Style::default().fg(Color::Yellow)),
                Span::raw(":Prev  "),
                Span::styled(next_key, Style::default().fg(Color::Yellow)),
                Span::raw(":Next  "),
            ]);

            if has_search_term {
                hotkey_spans.extend(vec![
                    Span::styled("Esc", Style::default().fg(Color::Yellow)),
                    Span::raw(":Clear Search  "),
                ]);
            } else {
                let search_key = if vim_mode { "/" } else { "^F" };
                hotkey_spans.extend(vec![
                    Span::styled(search_key, Style::default().fg(Color::Yellow)),
                    Span::raw(":Search  "),
                ]);
            }

            hotkey_spans.extend(vec![
                Span::styled("s/S", Style::default().fg(Color::Yellow)),
                Span::raw(":Sort  "),
                Span::styled("z/Z", Style::default().fg(Color::Yellow)),
                Span::raw(":Page Size  "),
            ]);
        }
    }

    // Quit - always available (typing 'q' into the search box is text)
    if !search_mode {
        hotkey_spans.extend(vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(":Quit"),
        ]);
    }

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    ready: bool,
    search_mode: bool,
    has_search_term: bool,
) {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, ready, search_mode, has_search_term));

    let legend = Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    ready: bool,
    search_mode: bool,
    has_search_term: bool,
) -> u16 {
    // Build paragraph WITHOUT block borders for accurate line counting
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, ready, search_mode, has_search_term));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Subtract left + right borders
    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
