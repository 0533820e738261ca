//! Base / variation matching
//!
//! Partitions the catalog into base rows (no add-ons) and variation rows,
//! then groups each variation under the base row sharing its base name.

use std::collections::HashMap;

use shared::MenuItem;

use crate::parser::parse_item_name;

/// A variation row with its parsed add-ons
#[derive(Debug, Clone)]
pub struct Variation {
    pub item: MenuItem,
    pub addons: Vec<String>,
}

/// All rows sharing one base name
#[derive(Debug, Clone)]
pub struct BaseGroup {
    pub base_name: String,
    pub base_item: Option<MenuItem>,
    pub variations: Vec<Variation>,
}

impl BaseGroup {
    fn new(base_name: String) -> Self {
        Self {
            base_name,
            base_item: None,
            variations: Vec::new(),
        }
    }

    /// 2+ variations, or a base row with at least one variation
    pub fn should_consolidate(&self) -> bool {
        self.variations.len() >= 2 || (self.base_item.is_some() && !self.variations.is_empty())
    }

    /// Rows of a group that is not consolidated, in their original form
    pub fn into_items(self) -> Vec<MenuItem> {
        self.base_item
            .into_iter()
            .chain(self.variations.into_iter().map(|v| v.item))
            .collect()
    }
}

/// Result of matching the whole catalog
#[derive(Debug, Default)]
pub struct MatchOutcome {
    /// Groups in discovery order
    pub groups: Vec<BaseGroup>,
    /// Variations whose base name has no base row; not carried further
    pub orphans: Vec<MenuItem>,
    /// Duplicate base rows that lost to a cheaper row of the same name
    pub shadowed: Vec<MenuItem>,
}

/// Group every item under its base name.
///
/// When several base rows share a name, the cheapest one is the base (ties
/// keep the first seen). Group order is the order in which each base name is
/// first met by a base row or an attachable variation.
pub fn match_items(items: Vec<MenuItem>) -> MatchOutcome {
    let parsed: Vec<_> = items.iter().map(|item| parse_item_name(item.name())).collect();

    // First pass: cheapest base row per name
    let mut best_base: HashMap<&str, usize> = HashMap::new();
    for (idx, name) in parsed.iter().enumerate() {
        if !name.is_base() {
            continue;
        }
        match best_base.get(name.base_name.as_str()) {
            Some(&current) if items[idx].price() >= items[current].price() => {}
            _ => {
                best_base.insert(name.base_name.as_str(), idx);
            }
        }
    }

    // Second pass: build groups in discovery order
    let mut outcome = MatchOutcome::default();
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for (idx, (item, name)) in items.into_iter().zip(parsed.iter()).enumerate() {
        let Some(&base_idx) = best_base.get(name.base_name.as_str()) else {
            tracing::debug!(item_id = %item.item_id(), name = %item.name(), "No base item for variation");
            outcome.orphans.push(item);
            continue;
        };

        let slot = *group_index
            .entry(name.base_name.clone())
            .or_insert_with(|| {
                outcome.groups.push(BaseGroup::new(name.base_name.clone()));
                outcome.groups.len() - 1
            });
        let group = &mut outcome.groups[slot];

        if !name.is_base() {
            group.variations.push(Variation {
                item,
                addons: name.addons.clone(),
            });
        } else if idx == base_idx {
            group.base_item = Some(item);
        } else {
            tracing::debug!(item_id = %item.item_id(), name = %item.name(), "Dropping duplicate base item");
            outcome.shadowed.push(item);
        }
    }

    outcome
}

/// Split groups into those to consolidate and the rows kept untouched
pub fn partition_groups(groups: Vec<BaseGroup>) -> (Vec<BaseGroup>, Vec<MenuItem>) {
    let mut to_consolidate = Vec::new();
    let mut kept = Vec::new();

    for group in groups {
        if group.should_consolidate() {
            to_consolidate.push(group);
        } else {
            kept.extend(group.into_items());
        }
    }

    (to_consolidate, kept)
}
