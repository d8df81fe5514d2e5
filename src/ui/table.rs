use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use prodtable::logic::formatting;
use prodtable::logic::layout::calculate_column_widths;
use prodtable::view::{RowSet, ViewBuffer, COLUMN_COUNT};

const HEADERS: [&str; COLUMN_COUNT] = ["ID", "Image", "Title", "Price", "Category", "Description"];

/// Render the product table from the view buffer
pub fn render_product_table(f: &mut Frame, area: Rect, view: &ViewBuffer, sort_label: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Products (sorted: {}) ", sort_label));

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let product_rows = view.rows.product_rows();

    // Cell text per row (thumbnail after error substitution)
    let cells: Vec<(&str, &str, &str, &str, &str)> = product_rows
        .iter()
        .map(|row| {
            (
                row.id.as_str(),
                view.thumbnail_for(row),
                row.title.as_str(),
                row.price.as_str(),
                row.category.as_str(),
            )
        })
        .collect();

    let widths = calculate_column_widths(area.width.saturating_sub(2), &cells);
    let constraints = [
        Constraint::Length(widths.id),
        Constraint::Length(widths.image),
        Constraint::Length(widths.title),
        Constraint::Length(widths.price),
        Constraint::Length(widths.category),
        Constraint::Min(widths.description),
    ];

    let rows: Vec<Row> = match &view.rows {
        RowSet::Placeholder(text) => {
            let table = Table::new(Vec::<Row>::new(), constraints)
                .header(header)
                .block(block)
                .column_spacing(1);
            f.render_widget(table, area);

            // Full-width row below the header, spanning every column
            if area.height > 3 {
                let row_area = Rect {
                    x: area.x + 1,
                    y: area.y + 2,
                    width: area.width.saturating_sub(2),
                    height: 1,
                };
                let placeholder = Paragraph::new(Line::from(text.as_str()))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray));
                f.render_widget(placeholder, row_area);
            }
            return;
        }
        RowSet::Rows(rows) => rows
            .iter()
            .zip(cells.iter())
            .map(|(row, (id, thumbnail, title, price, category))| {
                let thumbnail_style = if *thumbnail == formatting::IMAGE_ERROR_URL {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Blue)
                };

                Row::new(vec![
                    Cell::from(*id),
                    Cell::from(*thumbnail).style(thumbnail_style),
                    Cell::from(*title),
                    Cell::from(*price).style(Style::default().fg(Color::Green)),
                    Cell::from(*category),
                    Cell::from(row.description.as_str()),
                ])
            })
            .collect(),
    };

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}
