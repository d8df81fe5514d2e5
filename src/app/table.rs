//! Table orchestration methods
//!
//! Thin wrappers that forward user input to the controller, render into the
//! view buffer, and log each step to the debug channel.

use crate::{log_debug, App};

impl App {
    /// Replace the search term (called on every keystroke in the search box)
    pub(crate) fn update_search(&mut self, term: String) {
        self.controller.search(&term, &mut self.view);
        log_debug(&format!(
            "DEBUG [search]: term={:?} matches={}",
            term,
            self.controller.model().catalog.filtered_products.len()
        ));
        self.queue_thumbnail_probes();
    }

    pub(crate) fn push_search_char(&mut self, c: char) {
        let mut term = self.controller.model().table.search_term.clone();
        term.push(c);
        self.update_search(term);
    }

    pub(crate) fn pop_search_char(&mut self) {
        let mut term = self.controller.model().table.search_term.clone();
        if term.pop().is_some() {
            self.update_search(term);
        }
    }

    pub(crate) fn clear_search(&mut self) {
        if !self.controller.model().table.search_term.is_empty() {
            self.update_search(String::new());
        }
    }

    pub(crate) fn cycle_sort_mode(&mut self, forward: bool) {
        let mode = self.controller.cycle_sort_mode(forward, &mut self.view);
        log_debug(&format!("DEBUG [sort]: mode={}", mode.value()));
        self.queue_thumbnail_probes();
    }

    pub(crate) fn cycle_page_size(&mut self, forward: bool) {
        match self.controller.cycle_page_size(forward, &mut self.view) {
            Ok(size) => log_debug(&format!("DEBUG [page size]: {}", size)),
            Err(e) => log_debug(&format!("DEBUG [page size]: rejected: {}", e)),
        }
        self.queue_thumbnail_probes();
    }

    pub(crate) fn next_page(&mut self) {
        if self.controller.next_page(&mut self.view) {
            log_debug(&format!(
                "DEBUG [next]: page={}",
                self.controller.model().table.current_page
            ));
            self.queue_thumbnail_probes();
        }
    }

    pub(crate) fn prev_page(&mut self) {
        if self.controller.prev_page(&mut self.view) {
            log_debug(&format!(
                "DEBUG [prev]: page={}",
                self.controller.model().table.current_page
            ));
            self.queue_thumbnail_probes();
        }
    }
}
