//! Table Model
//!
//! View parameters derived from user input: page, page size, sort mode
//! and search term.

use crate::SortMode;

/// Page sizes offered by the page-size selector
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Initial page size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination, sorting and search parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableModel {
    /// 1-based page index into the sorted, filtered sequence
    pub current_page: usize,

    /// Rows per page (always one of `page_size_options`)
    pub page_size: usize,

    /// Enumerated page-size choices
    pub page_size_options: Vec<usize>,

    pub sort_mode: SortMode,

    /// Raw search input as typed (normalized when filtering)
    pub search_term: String,
}

impl TableModel {
    pub fn new(page_size: usize, page_size_options: Vec<usize>, sort_mode: SortMode) -> Self {
        Self {
            current_page: 1,
            page_size,
            page_size_options,
            sort_mode,
            search_term: String::new(),
        }
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }
}

impl Default for TableModel {
    fn default() -> Self {
        Self::new(
            DEFAULT_PAGE_SIZE,
            DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            SortMode::None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_model() {
        let table = TableModel::default();
        assert_eq!(table.current_page, 1);
        assert_eq!(table.page_size, 10);
        assert!(table.page_size_options.contains(&table.page_size));
        assert_eq!(table.sort_mode, SortMode::None);
        assert!(table.search_term.is_empty());
    }

    #[test]
    fn test_reset_page() {
        let mut table = TableModel::default();
        table.current_page = 4;
        table.reset_page();
        assert_eq!(table.current_page, 1);
    }
}
