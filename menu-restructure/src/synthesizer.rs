//! Modifier group synthesis
//!
//! Turns one consolidation group into a base item plus one `ItemModifier`
//! per add-on category.

use indexmap::IndexMap;
use shared::{ItemModifier, MenuItem, ModifierOption};

use crate::categorizer::{AddonCategory, categorize_addon};
use crate::matcher::{BaseGroup, Variation};
use crate::pricing::estimate_addon_prices;

/// Sequential modifier ids: `mod_001`, `mod_002`, ...
#[derive(Debug, Clone)]
pub struct ModifierIdGenerator {
    next: u32,
}

impl ModifierIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("mod_{:03}", self.next);
        self.next += 1;
        id
    }
}

impl Default for ModifierIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A consolidated base item and the modifier groups created for it
#[derive(Debug, Clone)]
pub struct Consolidation {
    pub base_item: MenuItem,
    pub modifiers: Vec<ItemModifier>,
}

/// Consolidate one group.
///
/// Without a base row the cheapest variation is promoted (a missing price
/// counts as the most expensive) and every variation sharing its `itemId` is
/// removed. Returns `None` if no base can be resolved.
pub fn synthesize_group(group: BaseGroup, ids: &mut ModifierIdGenerator) -> Option<Consolidation> {
    let BaseGroup {
        base_name,
        base_item,
        mut variations,
    } = group;

    let mut base_item = match base_item {
        Some(item) => item,
        None => {
            let Some(idx) = cheapest_variation(&variations) else {
                tracing::warn!(base_name = %base_name, "Skipping group without a base item");
                return None;
            };
            let promoted = variations[idx].item.clone();
            variations.retain(|v| v.item.item_id() != promoted.item_id());
            tracing::debug!(base_name = %base_name, item_id = %promoted.item_id(), "Promoted cheapest variation to base");
            promoted
        }
    };

    let addon_prices = estimate_addon_prices(base_item.price(), &variations);

    let mut buckets: IndexMap<AddonCategory, Vec<ModifierOption>> = IndexMap::new();
    for (addon, price) in addon_prices {
        let category = categorize_addon(&addon);
        buckets
            .entry(category)
            .or_default()
            .push(ModifierOption::new(addon, price));
    }

    let created_at = base_item.created_at_or_default();
    let updated_at = base_item.updated_at_or_default();

    let modifiers: Vec<ItemModifier> = buckets
        .into_iter()
        .map(|(category, options)| {
            ItemModifier::optional(
                ids.next_id(),
                category.as_str(),
                base_item.item_id(),
                options,
                created_at.clone(),
                updated_at.clone(),
            )
        })
        .collect();

    base_item.set_modifier_ids(modifiers.iter().map(|m| m.modifier_id.clone()).collect());
    base_item.ensure_price();

    tracing::debug!(
        base_name = %base_name,
        variations = variations.len(),
        modifiers = modifiers.len(),
        "Consolidated group"
    );

    Some(Consolidation {
        base_item,
        modifiers,
    })
}

fn cheapest_variation(variations: &[Variation]) -> Option<usize> {
    let mut best: Option<(usize, Option<f64>)> = None;
    for (idx, variation) in variations.iter().enumerate() {
        let price = variation.item.price_if_set();
        let cheaper = match (&best, price) {
            (None, _) => true,
            (Some((_, Some(current))), Some(candidate)) => candidate < *current,
            (Some((_, None)), Some(_)) => true,
            (Some(_), None) => false,
        };
        if cheaper {
            best = Some((idx, price));
        }
    }
    best.map(|(idx, _)| idx)
}
