//! Formatting and display logic
//!
//! Pure functions for turning product fields into table cell text.

use crate::api::Product;

/// Thumbnail shown when a product has no images
pub const NO_IMAGE_URL: &str = "https://via.placeholder.com/120?text=No+Image";

/// Thumbnail substituted when an image fails to load
pub const IMAGE_ERROR_URL: &str = "https://via.placeholder.com/120?text=Error";

/// Shown in the category column when a product has no category name
pub const MISSING_CATEGORY: &str = "—";

/// Description length (in chars) before truncation kicks in
pub const DESCRIPTION_LIMIT: usize = 120;

/// Truncate a description to `DESCRIPTION_LIMIT` chars, appending "..." when cut
///
/// # Examples
/// ```
/// use prodtable::logic::formatting::truncate_description;
///
/// assert_eq!(truncate_description("short"), "short");
/// assert_eq!(truncate_description(&"x".repeat(150)), format!("{}...", "x".repeat(120)));
/// ```
pub fn truncate_description(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_LIMIT).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Format a price the way it arrives from the API (`44`, `12.5`)
pub fn format_price(price: f64) -> String {
    price.to_string()
}

/// Category name, or the em-dash placeholder when absent or empty
pub fn category_label(product: &Product) -> &str {
    match &product.category {
        Some(category) if !category.name.is_empty() => category.name.as_str(),
        _ => MISSING_CATEGORY,
    }
}

/// First image URL, or the "no image" placeholder
pub fn thumbnail_src(product: &Product) -> &str {
    match product.images.first() {
        Some(url) if !url.is_empty() => url.as_str(),
        _ => NO_IMAGE_URL,
    }
}

/// Whether a URL is one of the built-in placeholders
pub fn is_placeholder(url: &str) -> bool {
    url == NO_IMAGE_URL || url == IMAGE_ERROR_URL
}
