//! Product Table Library
//!
//! Exposes the data pipeline, state model and render target for testing

pub mod api;
pub mod controller;
pub mod logic;
pub mod model;
pub mod view;

/// Sort mode for the product table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    None, // Keep fetch (or filtered) order
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl SortMode {
    /// All modes in selector order
    pub const ALL: [SortMode; 5] = [
        SortMode::None,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::TitleAsc,
        SortMode::TitleDesc,
    ];

    /// Human label shown in the status bar
    pub fn as_str(&self) -> &str {
        match self {
            SortMode::None => "Default",
            SortMode::PriceAsc => "Price ↑",
            SortMode::PriceDesc => "Price ↓",
            SortMode::TitleAsc => "Title A-Z",
            SortMode::TitleDesc => "Title Z-A",
        }
    }

    /// Selector option value
    pub fn value(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
        }
    }

    /// Parse a selector option value
    pub fn from_value(value: &str) -> Option<SortMode> {
        SortMode::ALL.into_iter().find(|mode| mode.value() == value)
    }
}
