//! UI state transition logic
//!
//! Pure functions for cycling the enumerated selectors.

use crate::SortMode;

/// Step the sort selector: None → PriceAsc → PriceDesc → TitleAsc → TitleDesc → None
///
/// # Examples
/// ```
/// use prodtable::SortMode;
/// use prodtable::logic::ui::cycle_sort_mode;
///
/// assert_eq!(cycle_sort_mode(SortMode::None, true), SortMode::PriceAsc);
/// assert_eq!(cycle_sort_mode(SortMode::TitleDesc, true), SortMode::None);
/// assert_eq!(cycle_sort_mode(SortMode::None, false), SortMode::TitleDesc);
/// ```
pub fn cycle_sort_mode(current: SortMode, forward: bool) -> SortMode {
    let modes = SortMode::ALL;
    let idx = modes.iter().position(|m| *m == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % modes.len()
    } else {
        (idx + modes.len() - 1) % modes.len()
    };
    modes[next]
}

/// Step the page-size selector through `options`, wrapping at either end
///
/// A `current` value not among the options restarts at the first option.
/// Returns `current` unchanged when there are no options.
pub fn cycle_page_size(current: usize, options: &[usize], forward: bool) -> usize {
    if options.is_empty() {
        return current;
    }

    match options.iter().position(|&size| size == current) {
        Some(idx) if forward => options[(idx + 1) % options.len()],
        Some(idx) => options[(idx + options.len() - 1) % options.len()],
        None => options[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_sort_mode_full_loop() {
        let mut mode = SortMode::None;
        for _ in 0..SortMode::ALL.len() {
            mode = cycle_sort_mode(mode, true);
        }
        assert_eq!(mode, SortMode::None);
    }

    #[test]
    fn test_cycle_sort_mode_backward() {
        assert_eq!(cycle_sort_mode(SortMode::PriceAsc, false), SortMode::None);
        assert_eq!(cycle_sort_mode(SortMode::TitleAsc, false), SortMode::PriceDesc);
    }

    #[test]
    fn test_cycle_page_size_forward_wraps() {
        let options = [5, 10, 20, 50];
        assert_eq!(cycle_page_size(10, &options, true), 20);
        assert_eq!(cycle_page_size(50, &options, true), 5);
    }

    #[test]
    fn test_cycle_page_size_backward_wraps() {
        let options = [5, 10, 20, 50];
        assert_eq!(cycle_page_size(10, &options, false), 5);
        assert_eq!(cycle_page_size(5, &options, false), 50);
    }

    #[test]
    fn test_cycle_page_size_unknown_current() {
        assert_eq!(cycle_page_size(7, &[5, 10], true), 5);
        assert_eq!(cycle_page_size(7, &[], true), 7);
    }
}
