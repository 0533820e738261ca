//! Item name parsing
//!
//! Variation rows encode their add-ons in the display name:
//! `"Pineapple Bun with Butter + Red Bean Fizzy"`. There is no escaping, so a
//! literal `" + "` inside a real dish name is read as a separator too.

/// Separator between the base name and each add-on
pub const ADDON_SEPARATOR: &str = " + ";

/// Display name split into base name and add-ons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub base_name: String,
    /// Add-ons in the order they appear in the name
    pub addons: Vec<String>,
}

impl ParsedName {
    /// No add-ons: the row is a candidate base item
    pub fn is_base(&self) -> bool {
        self.addons.is_empty()
    }
}

/// Split a display name on every `" + "`.
///
/// Segments are trimmed only when the separator is present; a name without
/// it is returned as-is with no add-ons.
pub fn parse_item_name(name: &str) -> ParsedName {
    if !name.contains(ADDON_SEPARATOR) {
        return ParsedName {
            base_name: name.to_string(),
            addons: Vec::new(),
        };
    }

    let mut parts = name.split(ADDON_SEPARATOR).map(str::trim);
    let base_name = parts.next().unwrap_or_default().to_string();
    let addons = parts.map(str::to_string).collect();

    ParsedName { base_name, addons }
}
