//! API Response Handler
//!
//! Handles responses from the background API service: the startup product
//! fetch and thumbnail probes.

use prodtable::logic::errors;

use crate::services::ApiResponse;
use crate::{log_debug, App};

/// Handle API response from background service
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ProductsLoaded(Ok(products)) => {
            log_debug(&format!("DEBUG [fetch]: loaded {} products", products.len()));
            app.controller.load_succeeded(products, &mut app.view);
            app.queue_thumbnail_probes();
        }

        ApiResponse::ProductsLoaded(Err(error)) => {
            log_debug(&format!(
                "ERROR [fetch]: {:?} {:#}",
                errors::classify_error(&error),
                error
            ));
            app.controller.load_failed(&error, &mut app.view);
        }

        ApiResponse::ThumbnailChecked { url, result } => {
            app.thumbnail_checked(url, result);
        }
    }
}
