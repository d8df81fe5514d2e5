//! Thumbnail probing
//!
//! The terminal can't show images, so an image "loads" when a GET for its URL
//! succeeds. Every visible thumbnail is handed to the API service, which runs
//! each URL once; failures switch the row to the error placeholder.

use prodtable::logic::formatting;

use crate::{log_debug, services, App};

impl App {
    /// Queue a probe for every visible thumbnail
    pub(crate) fn queue_thumbnail_probes(&self) {
        let urls: Vec<String> = self
            .view
            .rows
            .product_rows()
            .iter()
            .map(|row| row.thumbnail.clone())
            .filter(|url| !formatting::is_placeholder(url))
            .collect();

        for url in urls {
            self.send_request(services::ApiRequest::ProbeThumbnail { url });
        }
    }

    pub(crate) fn thumbnail_checked(&mut self, url: String, result: anyhow::Result<()>) {
        if let Err(e) = result {
            log_debug(&format!("DEBUG [thumbnail]: {} failed: {:#}", url, e));
            self.view.mark_thumbnail_failed(&url);
        }
    }
}
