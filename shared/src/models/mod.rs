//! Data models
//!
//! Catalog records as stored in the menu data document (camelCase JSON).

pub mod item_modifier;
pub mod menu_item;

// Re-exports
pub use item_modifier::*;
pub use menu_item::*;
