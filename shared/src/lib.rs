//! Shared types for the menu catalog tooling
//!
//! Catalog models read from and written to the menu data document.

pub mod models;
pub mod util;

// Re-exports
pub use models::{ItemModifier, MenuItem, ModifierOption};
pub use util::DEFAULT_TIMESTAMP_MS;
