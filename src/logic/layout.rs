//! Layout calculation logic
//!
//! Pure functions for sizing the product table columns.

use unicode_width::UnicodeWidthStr;

/// Column widths (in terminal cells) for the six table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub id: u16,
    pub image: u16,
    pub title: u16,
    pub price: u16,
    pub category: u16,
    pub description: u16,
}

const MIN_ID: usize = 2;
const MIN_PRICE: usize = 5;
const MIN_TITLE: usize = 5;
const MIN_CATEGORY: usize = 8;
const MAX_IMAGE: usize = 32;
const MAX_TITLE: usize = 36;
const MAX_CATEGORY: usize = 16;
const MIN_DESCRIPTION: usize = 20;

/// Widest cell in a column, clamped to `[min, max]`
fn fit_column<'a>(cells: impl Iterator<Item = &'a str>, min: usize, max: usize) -> usize {
    cells
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
        .clamp(min, max)
}

/// Calculate column widths for the visible page
///
/// ID, Price and Category fit their content; Image and Title are capped;
/// Description takes the remaining width (at least `MIN_DESCRIPTION`).
///
/// # Arguments
/// * `total_width` - Inner table width in cells
/// * `rows` - `(id, image, title, price, category)` cell text per row
pub fn calculate_column_widths(
    total_width: u16,
    rows: &[(&str, &str, &str, &str, &str)],
) -> ColumnWidths {
    let id = fit_column(rows.iter().map(|r| r.0), MIN_ID, 8);
    let image = fit_column(rows.iter().map(|r| r.1), 5, MAX_IMAGE);
    let title = fit_column(rows.iter().map(|r| r.2), MIN_TITLE, MAX_TITLE);
    let price = fit_column(rows.iter().map(|r| r.3), MIN_PRICE, 12);
    let category = fit_column(rows.iter().map(|r| r.4), MIN_CATEGORY, MAX_CATEGORY);

    // One cell of spacing between each of the six columns
    let used = id + image + title + price + category + 5;
    let description = (total_width as usize)
        .saturating_sub(used)
        .max(MIN_DESCRIPTION);

    ColumnWidths {
        id: id as u16,
        image: image as u16,
        title: title as u16,
        price: price as u16,
        category: category as u16,
        description: description.min(u16::MAX as usize) as u16,
    }
}
