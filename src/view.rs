//! Render Target
//!
//! The pipeline never touches the terminal directly. It projects products into
//! display rows and pushes them, together with pagination status and surface
//! visibility, into a [`RenderTarget`]. [`ViewBuffer`] is the in-memory target
//! the terminal UI paints from (and the one tests inspect).

use std::collections::HashSet;

use crate::api::Product;
use crate::logic::{formatting, pagination};

/// Text of the single row shown when a page has no products
pub const NO_RESULTS: &str = "No products found.";

/// Number of table columns (the placeholder row spans all of them)
pub const COLUMN_COUNT: usize = 6;

/// Host surfaces whose visibility the pipeline controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Loading,
    Error,
    Table,
    Pagination,
}

/// One rendered table row, every cell already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    /// Thumbnail source URL (first image or the "no image" placeholder)
    pub thumbnail: String,
    pub title: String,
    pub price: String,
    pub category: String,
    pub description: String,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            thumbnail: formatting::thumbnail_src(product).to_string(),
            title: product.title.clone(),
            price: formatting::format_price(product.price),
            category: formatting::category_label(product).to_string(),
            description: formatting::truncate_description(&product.description),
        }
    }
}

/// Table body content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSet {
    /// Full-width "no results" row
    Placeholder(String),
    Rows(Vec<ProductRow>),
}

impl RowSet {
    /// Number of body rows, counting the placeholder as one
    pub fn len(&self) -> usize {
        match self {
            RowSet::Placeholder(_) => 1,
            RowSet::Rows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, RowSet::Placeholder(_))
    }

    /// Product rows (empty for the placeholder)
    pub fn product_rows(&self) -> &[ProductRow] {
        match self {
            RowSet::Placeholder(_) => &[],
            RowSet::Rows(rows) => rows.as_slice(),
        }
    }
}

/// Page indicator and navigation control state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationStatus {
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationStatus {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            prev_enabled: pagination::prev_enabled(current_page),
            next_enabled: pagination::next_enabled(current_page, total_pages),
        }
    }

    pub fn text(&self) -> String {
        format!("Page {} / {}", self.current_page, self.total_pages)
    }
}

impl Default for PaginationStatus {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Capability set the pipeline needs from a host UI
pub trait RenderTarget {
    /// Replace the table body
    fn set_rows(&mut self, rows: RowSet);

    fn set_pagination_status(&mut self, status: PaginationStatus);

    fn set_visibility(&mut self, surface: Surface, visible: bool);

    fn set_error_message(&mut self, message: &str);
}

/// Render one page of `sequence` into `target`
///
/// `sequence` must already be filtered and sorted. Produces at most
/// `page_size` rows, or the placeholder row when the page slice is empty.
pub fn render_page<T: RenderTarget + ?Sized>(
    sequence: &[Product],
    current_page: usize,
    page_size: usize,
    target: &mut T,
) {
    let page_items = pagination::page_slice(sequence, current_page, page_size);

    let rows = if page_items.is_empty() {
        RowSet::Placeholder(NO_RESULTS.to_string())
    } else {
        RowSet::Rows(page_items.iter().map(ProductRow::from_product).collect())
    };
    target.set_rows(rows);

    let total_pages = pagination::total_pages(sequence.len(), page_size);
    target.set_pagination_status(PaginationStatus::new(current_page, total_pages));
}

/// In-memory host surfaces
#[derive(Debug, Clone)]
pub struct ViewBuffer {
    pub loading_visible: bool,
    pub error_visible: bool,
    pub table_visible: bool,
    pub pagination_visible: bool,
    pub error_message: String,
    pub rows: RowSet,
    pub pagination: PaginationStatus,
    /// Thumbnail URLs that failed to load
    pub failed_thumbnails: HashSet<String>,
}

impl ViewBuffer {
    /// Initial page state: only the loading indicator is shown
    pub fn new() -> Self {
        Self {
            loading_visible: true,
            error_visible: false,
            table_visible: false,
            pagination_visible: false,
            error_message: String::new(),
            rows: RowSet::Rows(Vec::new()),
            pagination: PaginationStatus::default(),
            failed_thumbnails: HashSet::new(),
        }
    }

    pub fn is_visible(&self, surface: Surface) -> bool {
        match surface {
            Surface::Loading => self.loading_visible,
            Surface::Error => self.error_visible,
            Surface::Table => self.table_visible,
            Surface::Pagination => self.pagination_visible,
        }
    }

    /// Record an image load failure for `url`
    pub fn mark_thumbnail_failed(&mut self, url: &str) {
        self.failed_thumbnails.insert(url.to_string());
    }

    /// Thumbnail URL to display for a row, substituting the error placeholder
    pub fn thumbnail_for<'a>(&self, row: &'a ProductRow) -> &'a str {
        if self.failed_thumbnails.contains(&row.thumbnail) {
            formatting::IMAGE_ERROR_URL
        } else {
            row.thumbnail.as_str()
        }
    }
}

impl Default for ViewBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for ViewBuffer {
    fn set_rows(&mut self, rows: RowSet) {
        self.rows = rows;
    }

    fn set_pagination_status(&mut self, status: PaginationStatus) {
        self.pagination = status;
    }

    fn set_visibility(&mut self, surface: Surface, visible: bool) {
        match surface {
            Surface::Loading => self.loading_visible = visible,
            Surface::Error => self.error_visible = visible,
            Surface::Table => self.table_visible = visible,
            Surface::Pagination => self.pagination_visible = visible,
        }
    }

    fn set_error_message(&mut self, message: &str) {
        self.error_message = message.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Category;

    fn make_products(count: u64) -> Vec<Product> {
        (1..=count)
            .map(|id| Product {
                id,
                title: format!("Product {}", id),
                price: id as f64,
                category: Some(Category {
                    name: "Misc".to_string(),
                }),
                images: vec![format!("https://img.example/{}.png", id)],
                description: "desc".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_initial_buffer_shows_only_loading() {
        let buffer = ViewBuffer::new();
        assert!(buffer.is_visible(Surface::Loading));
        assert!(!buffer.is_visible(Surface::Error));
        assert!(!buffer.is_visible(Surface::Table));
        assert!(!buffer.is_visible(Surface::Pagination));
    }

    #[test]
    fn test_render_first_page() {
        let products = make_products(25);
        let mut buffer = ViewBuffer::new();
        render_page(&products, 1, 10, &mut buffer);

        let ids: Vec<&str> = buffer.rows.product_rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        assert_eq!(buffer.pagination.text(), "Page 1 / 3");
        assert!(!buffer.pagination.prev_enabled);
        assert!(buffer.pagination.next_enabled);
    }

    #[test]
    fn test_render_empty_sequence_shows_placeholder() {
        let mut buffer = ViewBuffer::new();
        render_page(&[], 1, 10, &mut buffer);

        assert_eq!(buffer.rows, RowSet::Placeholder(NO_RESULTS.to_string()));
        assert_eq!(buffer.rows.len(), 1);
        assert_eq!(buffer.pagination.total_pages, 1);
        assert!(!buffer.pagination.prev_enabled);
        assert!(!buffer.pagination.next_enabled);
    }

    #[test]
    fn test_row_projection() {
        let product = Product {
            id: 7,
            title: "Lamp".to_string(),
            price: 19.5,
            category: None,
            images: vec![],
            description: "x".repeat(130),
        };

        let row = ProductRow::from_product(&product);
        assert_eq!(row.id, "7");
        assert_eq!(row.thumbnail, formatting::NO_IMAGE_URL);
        assert_eq!(row.price, "19.5");
        assert_eq!(row.category, formatting::MISSING_CATEGORY);
        assert_eq!(row.description, format!("{}...", "x".repeat(120)));
    }

    #[test]
    fn test_failed_thumbnail_substitutes_error_placeholder() {
        let products = make_products(1);
        let mut buffer = ViewBuffer::new();
        render_page(&products, 1, 10, &mut buffer);

        let row = buffer.rows.product_rows()[0].clone();
        assert_eq!(buffer.thumbnail_for(&row), "https://img.example/1.png");

        buffer.mark_thumbnail_failed("https://img.example/1.png");
        assert_eq!(buffer.thumbnail_for(&row), formatting::IMAGE_ERROR_URL);
    }

    #[test]
    fn test_set_visibility_and_error_message() {
        let mut buffer = ViewBuffer::new();
        buffer.set_visibility(Surface::Loading, false);
        buffer.set_visibility(Surface::Error, true);
        buffer.set_error_message("Failed to load products: HTTP error: 500");

        assert!(!buffer.is_visible(Surface::Loading));
        assert!(buffer.is_visible(Surface::Error));
        assert!(buffer.error_message.contains("500"));
    }
}
