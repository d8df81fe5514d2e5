use std::collections::HashSet;
use tokio::sync::mpsc;

use prodtable::api::{Product, ProductClient};

use crate::log_debug;

/// Unique identifier for deduplicating requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Products,
    Thumbnail { url: String },
}

/// API request types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Fetch the product collection (sent once at startup)
    FetchProducts,

    /// Check that a thumbnail URL loads
    ProbeThumbnail { url: String },
}

impl ApiRequest {
    /// Generate a unique key for deduplication
    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::FetchProducts => RequestKey::Products,
            ApiRequest::ProbeThumbnail { url } => RequestKey::Thumbnail { url: url.clone() },
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ProductsLoaded(anyhow::Result<Vec<Product>>),

    ThumbnailChecked {
        url: String,
        result: anyhow::Result<()>,
    },
}

/// Background request service
///
/// Every distinct request runs at most once per session; a repeated
/// request (same key) is dropped.
pub struct ApiService {
    client: ProductClient,
    request_rx: mpsc::UnboundedReceiver<ApiRequest>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    seen: HashSet<RequestKey>,
}

impl ApiService {
    pub fn new(
        client: ProductClient,
        request_rx: mpsc::UnboundedReceiver<ApiRequest>,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
    ) -> Self {
        Self {
            client,
            request_rx,
            response_tx,
            seen: HashSet::new(),
        }
    }

    /// Run until every request sender is dropped
    pub async fn run(mut self) {
        while let Some(request) = self.request_rx.recv().await {
            if !self.seen.insert(request.key()) {
                continue;
            }

            let client = self.client.clone();
            let response_tx = self.response_tx.clone();
            tokio::spawn(async move {
                let response = Self::execute_request(&client, request).await;
                let _ = response_tx.send(response);
            });
        }
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &ProductClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::FetchProducts => {
                log_debug(&format!(
                    "DEBUG [API Service]: GET {}",
                    client.endpoint()
                ));
                ApiResponse::ProductsLoaded(client.get_products().await)
            }

            ApiRequest::ProbeThumbnail { url } => {
                let result = client.probe_image(&url).await;
                ApiResponse::ThumbnailChecked { url, result }
            }
        }
    }
}

/// Spawn the API service, returning its request and response channels
pub fn spawn_api_service(
    client: ProductClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::unbounded_channel();

    tokio::spawn(ApiService::new(client, request_rx, response_tx).run());

    (request_tx, response_rx)
}
