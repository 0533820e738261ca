//! Menu document rewriting
//!
//! Runs the full pass over a menu data document: match, consolidate,
//! synthesize, then replace `menuItems` and extend `itemModifiers`. Every
//! other top-level key is left exactly where and as it was.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use shared::MenuItem;

use crate::error::{RestructureError, Result};
use crate::matcher::{match_items, partition_groups};
use crate::synthesizer::{ModifierIdGenerator, synthesize_group};

const MENU_ITEMS_KEY: &str = "menuItems";
const ITEM_MODIFIERS_KEY: &str = "itemModifiers";

/// Counts and summaries produced by one restructuring pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestructureReport {
    pub original_items: usize,
    /// Groups selected for consolidation
    pub groups_to_consolidate: usize,
    /// Base items actually written with modifiers
    pub consolidated_items: usize,
    pub kept_items: usize,
    pub new_modifiers: usize,
    pub final_items: usize,
    /// Variations without a base row (not written back)
    pub orphan_variations: usize,
    /// Duplicate base rows dropped in favour of a cheaper one
    pub shadowed_bases: usize,
    /// `(base name, variation count)` per consolidated group, in discovery order
    pub summaries: Vec<(String, usize)>,
}

impl RestructureReport {
    /// Log the completion summary and the first `limit` consolidations
    pub fn log_summary(&self, limit: usize) {
        tracing::info!("Restructuring complete!");
        tracing::info!("- Consolidated items: {}", self.consolidated_items);
        tracing::info!("- Items kept as-is: {}", self.kept_items);
        tracing::info!("- New modifier groups: {}", self.new_modifiers);
        tracing::info!(
            "- Total menu items: {} (was {})",
            self.final_items,
            self.original_items
        );
        if self.orphan_variations > 0 || self.shadowed_bases > 0 {
            tracing::warn!(
                orphans = self.orphan_variations,
                duplicates = self.shadowed_bases,
                "Rows dropped without a consolidation target"
            );
        }

        tracing::info!("Consolidation Summary:");
        for (base_name, variations) in self.summaries.iter().take(limit) {
            tracing::info!("  - {}: {} variations → 1 base item", base_name, variations);
        }
    }
}

/// Restructure a menu data document in place.
pub fn restructure(document: &mut Map<String, Value>) -> Result<RestructureReport> {
    let menu_items = match document.get(MENU_ITEMS_KEY) {
        Some(value) => Vec::<MenuItem>::deserialize(value)
            .map_err(|e| RestructureError::InvalidDocument(format!("{MENU_ITEMS_KEY}: {e}")))?,
        None => Vec::new(),
    };
    let existing_modifiers = match document.get(ITEM_MODIFIERS_KEY) {
        Some(Value::Array(modifiers)) => modifiers.clone(),
        Some(_) => {
            return Err(RestructureError::InvalidDocument(format!(
                "{ITEM_MODIFIERS_KEY} must be an array"
            )));
        }
        None => Vec::new(),
    };

    let mut report = RestructureReport {
        original_items: menu_items.len(),
        ..Default::default()
    };
    tracing::info!("Found {} menu items", report.original_items);

    let outcome = match_items(menu_items);
    report.orphan_variations = outcome.orphans.len();
    report.shadowed_bases = outcome.shadowed.len();

    let (to_consolidate, kept) = partition_groups(outcome.groups);
    report.groups_to_consolidate = to_consolidate.len();
    report.kept_items = kept.len();
    tracing::info!("Found {} items to consolidate", report.groups_to_consolidate);
    tracing::info!("Keeping {} items as-is", report.kept_items);

    let mut ids = ModifierIdGenerator::new();
    let mut consolidated = Vec::with_capacity(to_consolidate.len());
    let mut new_modifiers = Vec::new();

    for group in to_consolidate {
        report
            .summaries
            .push((group.base_name.clone(), group.variations.len()));
        if let Some(result) = synthesize_group(group, &mut ids) {
            consolidated.push(result.base_item);
            new_modifiers.extend(result.modifiers);
        }
    }

    report.consolidated_items = consolidated.len();
    report.new_modifiers = new_modifiers.len();

    let final_items: Vec<MenuItem> = consolidated.into_iter().chain(kept).collect();
    report.final_items = final_items.len();

    let mut all_modifiers = existing_modifiers;
    for modifier in &new_modifiers {
        all_modifiers.push(serde_json::to_value(modifier)?);
    }

    document.insert(MENU_ITEMS_KEY.to_string(), serde_json::to_value(&final_items)?);
    document.insert(ITEM_MODIFIERS_KEY.to_string(), Value::Array(all_modifiers));

    Ok(report)
}

/// Read `input`, restructure it, and write the result to `output`.
///
/// `input` and `output` may be the same file. The document is read fully
/// before anything is written; the write itself is not atomic.
pub fn restructure_file(input: &Path, output: &Path) -> Result<RestructureReport> {
    tracing::info!("Reading menu data from {}...", input.display());
    let raw = fs::read_to_string(input).map_err(|source| RestructureError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let mut document: Value = serde_json::from_str(&raw).map_err(|source| RestructureError::Json {
        path: input.to_path_buf(),
        source,
    })?;
    let Some(object) = document.as_object_mut() else {
        return Err(RestructureError::InvalidDocument(
            "top level must be a JSON object".to_string(),
        ));
    };

    let report = restructure(object)?;

    tracing::info!("Writing restructured data to {}...", output.display());
    let rendered = serde_json::to_string_pretty(&document)?;
    fs::write(output, rendered).map_err(|source| RestructureError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_consolidated_bases_come_before_kept_items() {
        let mut doc = as_object(json!({
            "menuItems": [
                { "itemId": "k1", "name": "Congee", "price": 9 },
                { "itemId": "b1", "name": "Toast", "price": 10 },
                { "itemId": "v1", "name": "Toast + Milk Tea", "price": 13 },
                { "itemId": "k2", "name": "Macaroni", "price": 11 }
            ]
        }));

        let report = restructure(&mut doc).unwrap();
        let ids: Vec<_> = doc["menuItems"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["itemId"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["b1", "k1", "k2"]);
        assert_eq!(report.consolidated_items, 1);
        assert_eq!(report.kept_items, 2);
        assert_eq!(report.final_items, 3);
        assert_eq!(report.summaries, vec![("Toast".to_string(), 1)]);
    }

    #[test]
    fn test_existing_modifiers_are_preserved_first() {
        let legacy = json!({ "modifierId": "legacy", "anything": [1, 2, 3] });
        let mut doc = as_object(json!({
            "menuItems": [
                { "itemId": "b1", "name": "Toast", "price": 10 },
                { "itemId": "v1", "name": "Toast + Egg", "price": 12 }
            ],
            "itemModifiers": [legacy.clone()]
        }));

        restructure(&mut doc).unwrap();
        let modifiers = doc["itemModifiers"].as_array().unwrap();
        assert_eq!(modifiers.len(), 2);
        assert_eq!(modifiers[0], legacy);
        assert_eq!(modifiers[1]["modifierId"], "mod_001");
        assert_eq!(modifiers[1]["modifierGroup"], "Proteins");
    }

    #[test]
    fn test_other_keys_keep_their_position() {
        let mut doc = as_object(json!({
            "restaurants": [{ "id": "r1" }],
            "menuItems": [],
            "tables": 4
        }));

        restructure(&mut doc).unwrap();
        let keys: Vec<_> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["restaurants", "menuItems", "tables", "itemModifiers"]);
        assert_eq!(doc["tables"], 4);
        assert_eq!(doc["itemModifiers"], json!([]));
    }

    #[test]
    fn test_missing_menu_items_yields_empty_list() {
        let mut doc = as_object(json!({ "config": true }));
        let report = restructure(&mut doc).unwrap();
        assert_eq!(report, RestructureReport::default());
        assert_eq!(doc["menuItems"], json!([]));
    }

    #[test]
    fn test_invalid_menu_items_is_rejected() {
        let mut doc = as_object(json!({ "menuItems": { "not": "a list" } }));
        assert!(matches!(
            restructure(&mut doc),
            Err(RestructureError::InvalidDocument(_))
        ));

        let mut doc = as_object(json!({ "menuItems": [], "itemModifiers": "nope" }));
        assert!(matches!(
            restructure(&mut doc),
            Err(RestructureError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_orphans_and_duplicates_are_counted() {
        let mut doc = as_object(json!({
            "menuItems": [
                { "itemId": "b1", "name": "Toast", "price": 10 },
                { "itemId": "b2", "name": "Toast", "price": 12 },
                { "itemId": "o1", "name": "Curry Fish Ball + Milk Tea", "price": 20 }
            ]
        }));

        let report = restructure(&mut doc).unwrap();
        assert_eq!(report.orphan_variations, 1);
        assert_eq!(report.shadowed_bases, 1);
        assert_eq!(report.final_items, 1);
        assert_eq!(doc["menuItems"][0]["itemId"], "b1");
    }
}
