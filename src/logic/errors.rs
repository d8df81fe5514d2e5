use anyhow::Error;

use crate::api::HttpStatusError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Decode,       // Body was not a product list
    Other,
}

/// Classify a fetch error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    if let Some(http) = error.downcast_ref::<HttpStatusError>() {
        return match http.status {
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        };
    }

    if error.chain().any(|cause| cause.is::<serde_json::Error>()) {
        return ErrorType::Decode;
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for display - show raw error details
///
/// Network failures read as the reqwest summary followed by the underlying
/// cause ("error sending request for url (...): Connection refused").
pub fn format_error_message(error: &Error) -> String {
    let root_cause = error.root_cause().to_string();

    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            let summary = reqwest_err.to_string();
            if summary.contains(&root_cause) {
                return summary;
            }
            return format!("{}: {}", summary, root_cause);
        }
        current = err.source();
    }

    // Otherwise the deepest (root cause) error
    root_cause
}

/// Banner text for a failed product fetch
pub fn fetch_failure_message(error: &Error) -> String {
    format!("Failed to load products: {}", format_error_message(error))
}
