//! Table Controller
//!
//! Sole owner of the [`Model`]. Every user-facing operation runs the fixed
//! pipeline (filter → sort → paginate) and pushes the result into a
//! [`RenderTarget`]:
//!
//! - search change: re-filter from all products → sort → page 1 → render
//! - sort change: sort → page 1 → render
//! - page-size change: page 1 → sort current filtered set → render (no re-filter)
//! - prev/next: move within `[1, total_pages]` → sort → render
//!
//! Until the startup fetch succeeds, input is ignored and nothing renders.

use anyhow::Result;

use crate::api::Product;
use crate::logic;
use crate::model::{LoadState, Model, UiModel};
use crate::view::{self, RenderTarget, Surface};
use crate::SortMode;

pub struct TableController {
    model: Model,
}

impl TableController {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn ui_mut(&mut self) -> &mut UiModel {
        &mut self.model.ui
    }

    pub fn is_ready(&self) -> bool {
        self.model.catalog.is_ready()
    }

    // ============================================================================
    // STARTUP
    // ============================================================================

    /// Fetch succeeded: store products, reveal the table, render page 1
    pub fn load_succeeded<T: RenderTarget + ?Sized>(&mut self, products: Vec<Product>, target: &mut T) {
        self.model.catalog.set_products(products);

        target.set_visibility(Surface::Loading, false);
        target.set_visibility(Surface::Table, true);
        target.set_visibility(Surface::Pagination, true);

        self.apply_sort_and_render(target);
    }

    /// Fetch failed: show the error banner, keep the table hidden
    ///
    /// Terminal for the session; there is no retry.
    pub fn load_failed<T: RenderTarget + ?Sized>(&mut self, error: &anyhow::Error, target: &mut T) {
        let message = logic::errors::fetch_failure_message(error);

        target.set_visibility(Surface::Loading, false);
        target.set_error_message(&message);
        target.set_visibility(Surface::Error, true);

        self.model.catalog.set_failed(message);
    }

    // ============================================================================
    // USER INPUT
    // ============================================================================

    /// Search input changed
    pub fn search<T: RenderTarget + ?Sized>(&mut self, raw_term: &str, target: &mut T) {
        if !self.is_ready() {
            return;
        }

        self.model.table.search_term = raw_term.to_string();
        self.model.catalog.filtered_products =
            logic::search::filter_products(&self.model.catalog.all_products, raw_term);
        self.apply_sort_and_render(target);
    }

    /// Sort selector changed
    pub fn set_sort_mode<T: RenderTarget + ?Sized>(&mut self, sort_mode: SortMode, target: &mut T) {
        if !self.is_ready() {
            return;
        }

        self.model.table.sort_mode = sort_mode;
        self.apply_sort_and_render(target);
    }

    /// Page-size selector changed
    ///
    /// Reuses the current filtered set; the search is not re-applied.
    pub fn set_page_size<T: RenderTarget + ?Sized>(&mut self, page_size: usize, target: &mut T) -> Result<()> {
        anyhow::ensure!(
            self.model.table.page_size_options.contains(&page_size),
            "Page size {} is not one of {:?}",
            page_size,
            self.model.table.page_size_options
        );

        if !self.is_ready() {
            return Ok(());
        }

        self.model.table.page_size = page_size;
        self.model.table.reset_page();
        self.render(target);
        Ok(())
    }

    /// "Next" control; returns false when disabled
    pub fn next_page<T: RenderTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        let current = self.model.table.current_page;
        self.move_to_page(current + 1, target)
    }

    /// "Previous" control; returns false when disabled
    pub fn prev_page<T: RenderTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        let current = self.model.table.current_page;
        self.move_to_page(current.saturating_sub(1), target)
    }

    /// Move within `[1, total_pages]`; false when the page would not change
    fn move_to_page<T: RenderTarget + ?Sized>(&mut self, page: usize, target: &mut T) -> bool {
        if !self.is_ready() {
            return false;
        }

        let page = logic::pagination::clamp_page(page, self.model.total_pages());
        if page == self.model.table.current_page {
            return false;
        }

        self.model.table.current_page = page;
        self.render(target);
        true
    }

    /// Step the sort selector to its next (or previous) option
    pub fn cycle_sort_mode<T: RenderTarget + ?Sized>(&mut self, forward: bool, target: &mut T) -> SortMode {
        if !self.is_ready() {
            return self.model.table.sort_mode;
        }

        let next = logic::ui::cycle_sort_mode(self.model.table.sort_mode, forward);
        self.set_sort_mode(next, target);
        next
    }

    /// Step the page-size selector to its next (or previous) option
    pub fn cycle_page_size<T: RenderTarget + ?Sized>(&mut self, forward: bool, target: &mut T) -> Result<usize> {
        if !self.is_ready() {
            return Ok(self.model.table.page_size);
        }

        let next = logic::ui::cycle_page_size(
            self.model.table.page_size,
            &self.model.table.page_size_options,
            forward,
        );
        self.set_page_size(next, target)?;
        Ok(next)
    }

    // ============================================================================
    // PIPELINE
    // ============================================================================

    /// Current filtered set in the current sort order
    pub fn sorted_products(&self) -> Vec<Product> {
        logic::sorting::sort_products(
            &self.model.catalog.filtered_products,
            self.model.table.sort_mode,
        )
    }

    /// Render the current page without changing any state
    pub fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        if self.model.catalog.load_state != LoadState::Ready {
            return;
        }

        let sorted = self.sorted_products();
        view::render_page(
            &sorted,
            self.model.table.current_page,
            self.model.table.page_size,
            target,
        );
    }

    fn apply_sort_and_render<T: RenderTarget + ?Sized>(&mut self, target: &mut T) {
        self.model.table.reset_page();
        self.render(target);
    }
}
