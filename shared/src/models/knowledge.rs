//! Knowledge Entry Model
//!
//! Static reference metadata for curated drinks, keyed by canonical
//! Thai name. Loaded once, never mutated at runtime.

use serde::{Deserialize, Serialize};

/// Base category of a drink in the knowledge base
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BaseCategory {
    Coffee,
    Tea,
    Milk,
    Fruit,
    Soda,
    Chocolate,
    Dessert,
}

/// Flavor/profile metadata for one canonical drink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Main flavor note ("ชาไทยเข้มข้น", "เอสเพรสโซคั่วเข้ม", ...)
    pub flavor: &'static str,
    /// Descriptive profile tags ("sweet", "creamy", "dessert", ...)
    pub profile: &'static [&'static str],
    pub base: BaseCategory,
}

impl KnowledgeEntry {
    /// Dessert-like drinks get the maximum-sweetness recommendation
    pub fn is_dessert_drink(&self) -> bool {
        self.base == BaseCategory::Dessert || self.profile.contains(&"dessert")
    }
}
