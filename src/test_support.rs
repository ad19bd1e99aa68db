//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;

/// Creates a test App with a small canned rules text.
pub fn test_app() -> App {
    App::new("1. Roll dice.\n2. Argue about the result.".to_string())
}
