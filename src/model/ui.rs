//! UI Model
//!
//! Terminal-side state: input focus, preferences and the quit flag.

/// UI preferences and input state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiModel {
    /// Whether the search input is receiving keystrokes
    pub search_mode: bool,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            search_mode: false,
            vim_mode,
            should_quit: false,
        }
    }
}
