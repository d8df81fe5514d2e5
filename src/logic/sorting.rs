//! Sorting comparison logic
//!
//! Pure functions for comparing and ordering products across sort modes.

use crate::api::Product;
use crate::SortMode;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Character groups in collation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    /// Whitespace, punctuation and symbols
    Symbol,
    Digit,
    Letter,
}

fn char_class(c: char) -> CharClass {
    if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Symbol
    }
}

/// Three-level sort key: base characters, then accents, then case
#[derive(Debug, Default, PartialEq, Eq)]
struct CollationKey {
    base: Vec<(CharClass, char)>,
    accented: Vec<bool>,
    uppercase: Vec<bool>,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let mut key = Self::default();
        for c in text.nfd() {
            if is_combining_mark(c) {
                if let Some(last) = key.accented.last_mut() {
                    *last = true;
                }
                continue;
            }

            let class = char_class(c);
            key.base.extend(c.to_lowercase().map(|lower| (class, lower)));
            key.accented.push(false);
            key.uppercase.push(c.is_uppercase());
        }
        key
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base
            .cmp(&other.base)
            .then_with(|| self.accented.cmp(&other.accented))
            .then_with(|| self.uppercase.cmp(&other.uppercase))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two titles the way a locale collator does for plain text
///
/// - Diacritics are ignored at first ("Éclair" sorts with "eclair").
/// - Punctuation and symbols order before digits, digits before letters.
/// - Letters compare case-insensitively.
///
/// Remaining ties are broken by accents (unaccented first), then by case
/// (lowercase first: "apple" < "Apple").
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Compare two products according to the given sort mode
///
/// # Returns
/// Ordering indicating relative position. `SortMode::None` treats every
/// pair as equal, so a stable sort keeps input order.
pub fn compare_products(a: &Product, b: &Product, sort_mode: SortMode) -> Ordering {
    match sort_mode {
        SortMode::None => Ordering::Equal,
        SortMode::PriceAsc => a.price.total_cmp(&b.price),
        SortMode::PriceDesc => b.price.total_cmp(&a.price),
        SortMode::TitleAsc => compare_titles(&a.title, &b.title),
        SortMode::TitleDesc => compare_titles(&b.title, &a.title),
    }
}

/// Return a sorted copy of `products`; the input is left untouched
///
/// `sort_by` is stable, so equal keys keep their relative input order.
pub fn sort_products(products: &[Product], sort_mode: SortMode) -> Vec<Product> {
    let mut sorted = products.to_vec();
    if sort_mode != SortMode::None {
        sorted.sort_by(|a, b| compare_products(a, b, sort_mode));
    }
    sorted
}
