//! Catalog Model
//!
//! The fetched product collection and the current filtered subset.

use crate::api::Product;

/// Progress of the one startup fetch
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed { message: String },
}

/// Fetched data
#[derive(Clone, Debug)]
pub struct CatalogModel {
    /// Every product from the last successful fetch, in fetch order
    pub all_products: Vec<Product>,

    /// Products matching the current search term (subsequence of `all_products`)
    pub filtered_products: Vec<Product>,

    pub load_state: LoadState,
}

impl CatalogModel {
    pub fn new() -> Self {
        Self {
            all_products: Vec::new(),
            filtered_products: Vec::new(),
            load_state: LoadState::Loading,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }

    /// Install a freshly fetched collection; the filtered set starts as a full copy
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.filtered_products = products.clone();
        self.all_products = products;
        self.load_state = LoadState::Ready;
    }

    pub fn set_failed(&mut self, message: String) {
        self.load_state = LoadState::Failed { message };
    }
}

impl Default for CatalogModel {
    fn default() -> Self {
        Self::new()
    }
}
