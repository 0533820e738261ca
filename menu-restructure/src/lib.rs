//! Menu Restructure - 将按变体逐行存储的菜单合并为"基础菜品 + 加料组"
//!
//! Rows such as `"Pineapple Bun with Butter + Red Bean Fizzy"` are folded
//! into their base item `"Pineapple Bun with Butter"`, and the add-ons become
//! priced options of category modifier groups (Beverages, Sides, ...).
//!
//! # 模块结构
//!
//! ```text
//! menu-restructure/src/
//! ├── parser.rs       # "Base + Add-on" name parsing
//! ├── matcher.rs      # base / variation grouping
//! ├── categorizer.rs  # add-on -> modifier category
//! ├── pricing.rs      # add-on price estimation
//! ├── synthesizer.rs  # ItemModifier creation
//! ├── rewriter.rs     # document pass + file read/write
//! ├── config.rs       # environment configuration
//! ├── logger.rs       # tracing setup
//! └── error.rs
//! ```
//!
//! The pass is heuristic: variations without a base row, and duplicate base
//! rows beaten by a cheaper one, are dropped rather than recovered.

pub mod categorizer;
pub mod config;
pub mod error;
pub mod logger;
pub mod matcher;
pub mod parser;
pub mod pricing;
pub mod rewriter;
pub mod synthesizer;

// Re-export 公共类型
pub use categorizer::{AddonCategory, categorize_addon};
pub use config::Config;
pub use error::{RestructureError, Result};
pub use logger::init_logger_with_file;
pub use matcher::{BaseGroup, MatchOutcome, Variation, match_items, partition_groups};
pub use parser::{ParsedName, parse_item_name};
pub use pricing::estimate_addon_prices;
pub use rewriter::{RestructureReport, restructure, restructure_file};
pub use synthesizer::{Consolidation, ModifierIdGenerator, synthesize_group};
