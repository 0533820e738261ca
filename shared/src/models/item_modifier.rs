//! Item Modifier Model

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Modifier option (embedded in ItemModifier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierOption {
    pub option_name: String,
    /// Extra charge in currency unit (e.g., 3.00 = $3.00)
    pub additional_price: f64,
    pub is_available: bool,
}

impl ModifierOption {
    pub fn new(option_name: impl Into<String>, additional_price: f64) -> Self {
        Self {
            option_name: option_name.into(),
            additional_price,
            is_available: true,
        }
    }
}

/// Modifier group attached to one or more menu items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModifier {
    pub modifier_id: String,
    /// Group label, e.g. "Beverages", "Sides"
    pub modifier_group: String,
    pub menu_item_ids: Vec<String>,
    pub options: Vec<ModifierOption>,
    pub is_required: bool,
    pub min_selections: i32,
    /// -1 = unlimited
    pub max_selections: i32,
    /// Copied from the owning item as written (integer or float ms)
    pub created_at: Number,
    pub updated_at: Number,
}

impl ItemModifier {
    /// Optional group, any number of selections
    pub fn optional(
        modifier_id: impl Into<String>,
        modifier_group: impl Into<String>,
        menu_item_id: impl Into<String>,
        options: Vec<ModifierOption>,
        created_at: Number,
        updated_at: Number,
    ) -> Self {
        Self {
            modifier_id: modifier_id.into(),
            modifier_group: modifier_group.into(),
            menu_item_ids: vec![menu_item_id.into()],
            options,
            is_required: false,
            min_selections: 0,
            max_selections: -1,
            created_at,
            updated_at,
        }
    }
}
