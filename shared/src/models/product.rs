//! Product Model
//!
//! The sheet-backed feed is loosely typed: prices arrive as numbers or
//! strings, lists as comma-delimited text, and one column keeps a
//! legacy misspelling. [`RawProductRow`] absorbs that shape and
//! [`ProductRecord::from_raw`] is the single coercion boundary; nothing
//! past it deals with feed ambiguity.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::{DrinkType, Language};

/// Deserialization helpers tolerating string/number/bool feed cells
mod coerce {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accept a JSON string, number, or bool; anything else becomes ""
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        })
    }
}

/// Raw catalog row exactly as the sheet API serves it
///
/// Every field defaults to empty so partially filled rows still parse;
/// validity is decided later by the normalizer, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProductRow {
    #[serde(alias = "productCode", deserialize_with = "coerce::text")]
    pub code: String,
    #[serde(alias = "productName", deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(alias = "productNameTH", deserialize_with = "coerce::text")]
    pub name_th: String,
    #[serde(alias = "productNameEN", deserialize_with = "coerce::text")]
    pub name_en: String,
    #[serde(alias = "productNameZH", deserialize_with = "coerce::text")]
    pub name_zh: String,
    #[serde(alias = "productNameJA", deserialize_with = "coerce::text")]
    pub name_ja: String,
    #[serde(alias = "productNameKO", deserialize_with = "coerce::text")]
    pub name_ko: String,
    #[serde(alias = "productNameFR", deserialize_with = "coerce::text")]
    pub name_fr: String,
    #[serde(alias = "productNameDE", deserialize_with = "coerce::text")]
    pub name_de: String,
    #[serde(alias = "productNameES", deserialize_with = "coerce::text")]
    pub name_es: String,
    #[serde(alias = "productNameRU", deserialize_with = "coerce::text")]
    pub name_ru: String,
    #[serde(alias = "productNameMS", deserialize_with = "coerce::text")]
    pub name_ms: String,
    #[serde(deserialize_with = "coerce::text")]
    pub category: String,
    #[serde(alias = "productType", deserialize_with = "coerce::text")]
    pub drink_type: String,
    #[serde(alias = "productPrice", deserialize_with = "coerce::text")]
    pub price: String,
    #[serde(alias = "cupSize", deserialize_with = "coerce::text")]
    pub sizes: String,
    #[serde(alias = "sweetLevel", deserialize_with = "coerce::text")]
    pub sweetness: String,
    #[serde(alias = "promotionPrice", deserialize_with = "coerce::text")]
    pub promo_price: String,
    #[serde(alias = "promotionFrom", deserialize_with = "coerce::text")]
    pub promo_start: String,
    #[serde(alias = "promotionTo", deserialize_with = "coerce::text")]
    pub promo_end: String,
    #[serde(alias = "promotionDay", deserialize_with = "coerce::text")]
    pub promo_days: String,
    #[serde(alias = "menuFrom", deserialize_with = "coerce::text")]
    pub menu_start: String,
    #[serde(alias = "menuTo", deserialize_with = "coerce::text")]
    pub menu_end: String,
    #[serde(alias = "noProductBranch", deserialize_with = "coerce::text")]
    pub branch_exclude: String,
    #[serde(deserialize_with = "coerce::text")]
    pub brand: String,
    #[serde(deserialize_with = "coerce::text")]
    pub description: String,
    /// Legacy feed column with the historical misspelling
    #[serde(alias = "desciption", deserialize_with = "coerce::text")]
    pub description_legacy: String,
    #[serde(alias = "productImage", deserialize_with = "coerce::text")]
    pub image: String,
    #[serde(alias = "tag", deserialize_with = "coerce::text")]
    pub tags: String,
}

/// Strictly-typed catalog row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    pub name: String,
    pub name_th: String,
    pub name_en: String,
    pub name_zh: String,
    pub name_ja: String,
    pub name_ko: String,
    pub name_fr: String,
    pub name_de: String,
    pub name_es: String,
    pub name_ru: String,
    pub name_ms: String,
    pub category: String,
    pub drink_type: String,
    /// Regular price; `None` when the feed cell is unparseable
    pub price: Option<f64>,
    pub sizes: Vec<String>,
    /// Comma-delimited sweetness options, numeric feeds coerced to text
    pub sweetness: String,
    /// Discounted price cell; `None` when blank
    pub promo_price: Option<String>,
    pub promo_start: String,
    pub promo_end: String,
    /// Comma-delimited weekday abbreviations; empty means no restriction
    pub promo_days: String,
    pub menu_start: String,
    pub menu_end: String,
    pub branch_exclude: Vec<String>,
    pub brand: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
}

/// Parse a feed price cell through Decimal for exactness
pub fn parse_price(value: &str) -> Option<f64> {
    let trimmed = value.trim().replace(',', "");
    if trimmed.is_empty() {
        return None;
    }
    match Decimal::from_str(&trimmed) {
        Ok(price) => price.to_f64(),
        Err(_) => {
            tracing::trace!(value, "Unparseable price cell");
            None
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ProductRecord {
    /// Coerce a raw feed row into the strict record shape
    pub fn from_raw(raw: RawProductRow) -> Self {
        let description = if raw.description.trim().is_empty() {
            raw.description_legacy.trim().to_string()
        } else {
            raw.description.trim().to_string()
        };

        Self {
            code: raw.code.trim().to_string(),
            name: raw.name.trim().to_string(),
            name_th: raw.name_th.trim().to_string(),
            name_en: raw.name_en.trim().to_string(),
            name_zh: raw.name_zh.trim().to_string(),
            name_ja: raw.name_ja.trim().to_string(),
            name_ko: raw.name_ko.trim().to_string(),
            name_fr: raw.name_fr.trim().to_string(),
            name_de: raw.name_de.trim().to_string(),
            name_es: raw.name_es.trim().to_string(),
            name_ru: raw.name_ru.trim().to_string(),
            name_ms: raw.name_ms.trim().to_string(),
            category: raw.category.trim().to_string(),
            drink_type: raw.drink_type.trim().to_string(),
            price: parse_price(&raw.price),
            sizes: split_list(&raw.sizes),
            sweetness: raw.sweetness.trim().to_string(),
            promo_price: non_blank(&raw.promo_price),
            promo_start: raw.promo_start.trim().to_string(),
            promo_end: raw.promo_end.trim().to_string(),
            promo_days: raw.promo_days.trim().to_string(),
            menu_start: raw.menu_start.trim().to_string(),
            menu_end: raw.menu_end.trim().to_string(),
            branch_exclude: split_list(&raw.branch_exclude),
            brand: raw.brand.trim().to_string(),
            description,
            image: raw.image.trim().to_string(),
            tags: split_list(&raw.tags),
        }
    }

    /// Grouping name: canonical Thai name, falling back to generic English
    pub fn conceptual_name(&self) -> &str {
        if self.name_th.is_empty() {
            &self.name_en
        } else {
            &self.name_th
        }
    }

    /// Display name for a language, falling back per the feed contract
    pub fn display_name(&self, lang: Language) -> &str {
        let preferred = match lang {
            Language::Th => {
                // Base language walks two extra fallbacks
                if !self.name_th.is_empty() {
                    return &self.name_th;
                }
                &self.name
            }
            Language::En => &self.name_en,
            Language::Zh => &self.name_zh,
            Language::Ja => &self.name_ja,
            Language::Ko => &self.name_ko,
            Language::Fr => &self.name_fr,
            Language::De => &self.name_de,
            Language::Es => &self.name_es,
            Language::Ru => &self.name_ru,
            Language::Ms => &self.name_ms,
        };
        if preferred.is_empty() {
            &self.name_en
        } else {
            preferred
        }
    }

    /// Typed drink type, if the feed string is recognized
    pub fn drink_type(&self) -> Option<DrinkType> {
        DrinkType::from_feed(&self.drink_type)
    }

    /// Parsed discounted price, if the promo cell holds a number
    pub fn promo_price_value(&self) -> Option<f64> {
        self.promo_price.as_deref().and_then(parse_price)
    }
}
