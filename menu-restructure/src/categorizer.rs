//! Add-on categorization
//!
//! Maps a free-text add-on name to the modifier group it belongs in.
//! Keyword sets are checked in order and the first hit wins, so an add-on
//! such as "Egg Bun" lands in Proteins (checked before Snacks).

use std::fmt;

/// Modifier group category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddonCategory {
    Beverages,
    Sides,
    Proteins,
    Snacks,
    Desserts,
    /// Fallback when no keyword matches
    AddOns,
}

impl AddonCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddonCategory::Beverages => "Beverages",
            AddonCategory::Sides => "Sides",
            AddonCategory::Proteins => "Proteins",
            AddonCategory::Snacks => "Snacks",
            AddonCategory::Desserts => "Desserts",
            AddonCategory::AddOns => "Add-ons",
        }
    }
}

impl fmt::Display for AddonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Keywords are lowercase; matching is substring on the lowercased name.
const BEVERAGE_KEYWORDS: &[&str] = &[
    "tea",
    "coffee",
    "fizzy",
    "milk tea",
    "lemon",
    "horlick",
    "ovaltine",
    "coca-cola",
    "green tea",
    "red bean milk tea",
];
const SIDE_KEYWORDS: &[&str] = &[
    "soup",
    "vermicelli",
    "noodles",
    "macaroni",
    "spaghetti",
    "congee",
];
const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken", "pork", "beef", "fish", "sausage", "ham", "egg", "wings", "leg",
];
const SNACK_KEYWORDS: &[&str] = &["spring rolls", "toast", "bun", "sandwich", "hot dog"];
const DESSERT_KEYWORDS: &[&str] = &["pudding", "dessert", "cake"];

/// Ordered rule table: earlier rows take precedence
const CATEGORY_RULES: &[(AddonCategory, &[&str])] = &[
    (AddonCategory::Beverages, BEVERAGE_KEYWORDS),
    (AddonCategory::Sides, SIDE_KEYWORDS),
    (AddonCategory::Proteins, PROTEIN_KEYWORDS),
    (AddonCategory::Snacks, SNACK_KEYWORDS),
    (AddonCategory::Desserts, DESSERT_KEYWORDS),
];

/// Categorize an add-on by name (case-insensitive substring match)
pub fn categorize_addon(addon: &str) -> AddonCategory {
    let normalized = addon.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(AddonCategory::AddOns)
}
