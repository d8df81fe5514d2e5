//! Pure Application Model
//!
//! This module defines the state owned by the table controller.
//! The Model is organized into focused sub-models:
//!
//! - **CatalogModel**: fetched products, filtered subset, load progress
//! - **TableModel**: page, page size, sort mode, search term
//! - **UiModel**: input focus and preferences
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the binary
//! - Mutated only through `controller::TableController`

pub mod catalog;
pub mod table;
pub mod ui;

pub use catalog::{CatalogModel, LoadState};
pub use table::TableModel;
pub use ui::UiModel;

use crate::logic;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub catalog: CatalogModel,
    pub table: TableModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(table: TableModel, vim_mode: bool) -> Self {
        Self {
            catalog: CatalogModel::new(),
            table,
            ui: UiModel::new(vim_mode),
        }
    }

    /// Page count for the current filtered set and page size
    pub fn total_pages(&self) -> usize {
        logic::pagination::total_pages(
            self.catalog.filtered_products.len(),
            self.table.page_size,
        )
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(TableModel::default(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::default();
        assert!(model.catalog.all_products.is_empty());
        assert_eq!(model.table.current_page, 1);
        assert!(!model.ui.vim_mode);
        assert!(!model.ui.should_quit);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::default();
        let _cloned = model.clone();
    }

    #[test]
    fn test_total_pages_empty_catalog() {
        let model = Model::default();
        assert_eq!(model.total_pages(), 1);
    }
}
