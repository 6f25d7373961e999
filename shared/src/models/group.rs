//! Product Group Model
//!
//! Display-level aggregation of variants presumed to be "the same
//! drink". Built by the normalizer; this module only carries the data
//! and the language-dispatch name resolver.

use serde::{Deserialize, Serialize};

use super::product::ProductRecord;
use crate::types::{DrinkType, Language};

/// Aggregated display group
///
/// Invariants maintained by the normalizer:
/// - `variants` sorted ascending by regular price
/// - `min_price <= original_min_price` whenever the latter is Some
/// - `original_min_price` is None when no active promotion beats the
///   regular minimum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductGroup {
    pub brand: String,
    /// Conceptual name (canonical Thai, falling back to English)
    pub name: String,
    pub category: String,
    pub variants: Vec<ProductRecord>,
    /// Promotion-aware minimum across variants
    pub min_price: f64,
    /// Regular-price minimum, present only when a promotion lowers it
    pub original_min_price: Option<f64>,
    pub tags: Vec<String>,
    pub image: String,
    pub description: String,
}

impl ProductGroup {
    /// Resolve the display name for a language via the first variant
    pub fn display_name(&self, lang: Language) -> &str {
        self.variants
            .first()
            .map(|v| v.display_name(lang))
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name)
    }

    /// Distinct drink types in first-encountered variant order
    pub fn offered_types(&self) -> Vec<DrinkType> {
        let mut types = Vec::new();
        for variant in &self.variants {
            if let Some(t) = variant.drink_type()
                && !types.contains(&t)
            {
                types.push(t);
            }
        }
        types
    }

    /// Distinct sizes across variants of one type (or all variants)
    pub fn offered_sizes(&self, drink_type: Option<DrinkType>) -> Vec<String> {
        let mut sizes = Vec::new();
        for variant in &self.variants {
            if let Some(t) = drink_type
                && variant.drink_type() != Some(t)
            {
                continue;
            }
            for size in &variant.sizes {
                if !sizes.iter().any(|s: &String| s.eq_ignore_ascii_case(size)) {
                    sizes.push(size.clone());
                }
            }
        }
        sizes
    }

    /// First variant of the given type, else the group's first variant
    pub fn representative_variant(&self, drink_type: Option<DrinkType>) -> Option<&ProductRecord> {
        if let Some(t) = drink_type
            && let Some(v) = self.variants.iter().find(|v| v.drink_type() == Some(t))
        {
            return Some(v);
        }
        self.variants.first()
    }

    /// Whether the tag set carries the highlight marker
    pub fn is_highlighted(&self) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case("highlight"))
    }
}
