//! Search Logic
//!
//! Pure functions for filtering products by a search term.
//! Matching is a case-insensitive substring test against the title.

use crate::api::Product;

/// Normalize a raw search input: lowercase, trimmed
///
/// # Examples
/// ```
/// use prodtable::logic::search::normalize_term;
///
/// assert_eq!(normalize_term("  Chair "), "chair");
/// assert_eq!(normalize_term("   "), "");
/// ```
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Match a normalized term against a product title
///
/// An empty term matches everything.
pub fn title_matches(term: &str, title: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    title.to_lowercase().contains(term)
}

/// Filter the full collection by a raw search input
///
/// Always recomputed from `all_products` so loosening the term restores
/// previously excluded products. Input order is preserved.
pub fn filter_products(all_products: &[Product], raw_term: &str) -> Vec<Product> {
    let term = normalize_term(raw_term);
    if term.is_empty() {
        return all_products.to_vec();
    }

    all_products
        .iter()
        .filter(|product| title_matches(&term, &product.title))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.0,
            category: None,
            images: vec![],
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_term_matches_all() {
        assert!(title_matches("", "anything"));
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(title_matches("chair", "Office CHAIR Deluxe"));
        assert!(title_matches("fresh", "Handmade Fresh Table"));
        assert!(!title_matches("chair", "Handmade Fresh Table"));
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_term("\tShoes\n"), "shoes");
        assert_eq!(normalize_term("MiXeD Case"), "mixed case");
    }

    #[test]
    fn test_filter_whitespace_term_returns_all() {
        let all = vec![make_product(1, "A"), make_product(2, "B")];
        let filtered = filter_products(&all, "   ");
        assert_eq!(filtered, all);
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let all = vec![
            make_product(1, "Red Shirt"),
            make_product(2, "Blue Jeans"),
            make_product(3, "Shirt Classic"),
        ];

        let filtered = filter_products(&all, " SHIRT ");
        let ids: Vec<u64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let all = vec![make_product(1, "Red Shirt")];
        assert!(filter_products(&all, "chair").is_empty());
    }

    #[test]
    fn test_filter_inner_whitespace_is_significant() {
        let all = vec![make_product(1, "Red Shirt"), make_product(2, "RedShirt")];
        let filtered = filter_products(&all, "red shirt");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }
}
