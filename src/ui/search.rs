//! Search bar
//!
//! One line above the table: the title filter as typed, the normalized term
//! that is actually matched when it differs, and how many products pass.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use prodtable::logic::search::normalize_term;

/// Everything the search bar shows
#[derive(Debug, Clone, Copy)]
pub struct SearchBar<'a> {
    /// Term as typed
    pub raw_term: &'a str,
    /// Input has focus
    pub editing: bool,
    /// `(filtered, total)` once products are loaded
    pub counts: Option<(usize, usize)>,
    /// Key that focuses the input
    pub focus_key: &'static str,
}

impl SearchBar<'_> {
    fn border_title(&self) -> String {
        if self.editing {
            " Filter by title (Enter: keep, Esc: clear) ".to_string()
        } else {
            format!(" Filter by title [{}] ", self.focus_key)
        }
    }

    fn count_label(&self) -> Option<String> {
        self.counts.map(|(filtered, total)| {
            if filtered == total {
                format!(" all {} products ", total)
            } else {
                format!(" {} of {} products ", filtered, total)
            }
        })
    }

    fn content_line(&self) -> Line<'static> {
        let term = normalize_term(self.raw_term);
        let mut spans = Vec::new();

        if self.raw_term.is_empty() && !self.editing {
            spans.push(Span::styled(
                "no filter",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
            return Line::from(spans);
        }

        spans.push(Span::styled(
            self.raw_term.to_string(),
            Style::default().fg(Color::White),
        ));
        if self.editing {
            spans.push(Span::styled(
                "▏",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        // Surrounding whitespace and case don't take part in matching
        if !term.is_empty() && term != self.raw_term {
            spans.push(Span::styled(
                format!("  matching \"{}\"", term),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Line::from(spans)
    }
}

/// Render the search bar
pub fn render_search_bar(f: &mut Frame, area: Rect, bar: &SearchBar) {
    let border_color = if bar.editing { Color::Cyan } else { Color::Gray };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(bar.border_title());
    if let Some(label) = bar.count_label() {
        block = block.title(Line::from(label).right_aligned());
    }

    f.render_widget(Paragraph::new(bar.content_line()).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(raw_term: &str, editing: bool, counts: Option<(usize, usize)>) -> SearchBar<'_> {
        SearchBar {
            raw_term,
            editing,
            counts,
            focus_key: "^F",
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_idle_without_term() {
        let idle = bar("", false, Some((50, 50)));
        assert_eq!(text(&idle.content_line()), "no filter");
        assert_eq!(idle.border_title(), " Filter by title [^F] ");
        assert_eq!(idle.count_label().as_deref(), Some(" all 50 products "));
    }

    #[test]
    fn test_shows_normalized_term_when_it_differs() {
        let editing = bar("  Chair ", true, Some((3, 50)));
        assert_eq!(text(&editing.content_line()), "  Chair ▏  matching \"chair\"");
        assert_eq!(editing.count_label().as_deref(), Some(" 3 of 50 products "));

        let plain = bar("chair", false, Some((3, 50)));
        assert_eq!(text(&plain.content_line()), "chair");
    }

    #[test]
    fn test_no_counts_while_loading() {
        assert_eq!(bar("lamp", false, None).count_label(), None);
    }
}
