use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Default product collection endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.escuelajs.co/api/v1/products";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Non-success HTTP status returned by the product API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusError {
    pub status: u16,
    pub reason: Option<&'static str>,
}

impl HttpStatusError {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason(),
        }
    }
}

impl fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            Some(reason) => write!(f, "HTTP error: {} {}", self.status, reason),
            None => write!(f, "HTTP error: {}", self.status),
        }
    }
}

impl std::error::Error for HttpStatusError {}

/// Decode a product list response body
pub fn parse_products(body: &str) -> Result<Vec<Product>> {
    serde_json::from_str(body).context("Failed to parse product list")
}

#[derive(Clone)]
pub struct ProductClient {
    endpoint: String,
    client: Client,
}

impl ProductClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    /// Use a preconfigured HTTP client (proxy, TLS or timeout settings)
    pub fn with_client(endpoint: String, client: Client) -> Self {
        Self { endpoint, client }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full product collection (single unauthenticated GET)
    pub async fn get_products(&self) -> Result<Vec<Product>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .context("Failed to fetch products")?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpStatusError::from_status(status).into());
        }

        let text = response.text().await.context("Failed to read response")?;
        parse_products(&text)
    }

    /// Check whether an image URL loads (network success and 2xx status)
    pub async fn probe_image(&self, url: &str) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to load image")?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpStatusError::from_status(status).into());
        }

        Ok(())
    }
}
