//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule orchestrates between:
//! - The table controller (state + pipeline, in the library)
//! - The view buffer (render target painted by src/ui/)
//! - Services (background API requests)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod table;
pub(crate) mod thumbnails;
