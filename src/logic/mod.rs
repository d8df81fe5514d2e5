//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Fetch error classification and banner messages
//! - formatting: Cell text for product rows (price, category, description, thumbnail)
//! - layout: Table column width calculation
//! - pagination: Page counts, slice bounds and control state
//! - search: Search term normalization and title filtering
//! - sorting: Product comparison across sort modes
//! - ui: Selector cycling (sort mode, page size)

pub mod errors;
pub mod formatting;
pub mod layout;
pub mod pagination;
pub mod search;
pub mod sorting;
pub mod ui;
