//! Catalog Normalizer (Grouping Engine)
//!
//! Collapses raw catalog rows into display groups: filters rows that
//! are off-menu, unpriced, imageless, or suppressed for the branch;
//! aggregates by (brand, conceptual name, category); resolves the
//! promotion-aware minimum price per group.

use rust_decimal::prelude::*;
use std::collections::HashMap;

use shared::models::{ProductGroup, ProductRecord};

use crate::promotion::is_promotion_active;
use crate::temporal::{RangePolicy, is_date_in_range};

/// Monetary rounding (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round a price to money precision through Decimal
fn round_money(value: f64) -> f64 {
    Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Normalizer output
#[derive(Debug, Clone)]
pub struct NormalizedCatalog {
    /// Groups in feed insertion order
    pub groups: Vec<ProductGroup>,
    /// Index of the first highlighted group, at most one
    pub highlight: Option<usize>,
}

fn passes_filters(record: &ProductRecord, branch: Option<&str>, at_millis: i64) -> bool {
    if !is_date_in_range(
        &record.menu_start,
        &record.menu_end,
        at_millis,
        RangePolicy::FailOpen,
    ) {
        return false;
    }
    // Never surface a record without a parseable price or an image
    if record.price.is_none() || record.image.is_empty() {
        return false;
    }
    if let Some(branch) = branch
        && record.branch_exclude.iter().any(|b| b == branch)
    {
        return false;
    }
    true
}

/// Effective price of a variant at an instant: active parsed promotion
/// price, else the regular price
fn effective_price(record: &ProductRecord, at_millis: i64) -> Option<f64> {
    if is_promotion_active(record, at_millis)
        && let Some(promo) = record.promo_price_value()
    {
        return Some(promo);
    }
    record.price
}

/// Collapse qualifying records into display groups
pub fn normalize(
    records: Vec<ProductRecord>,
    branch: Option<&str>,
    at_millis: i64,
) -> NormalizedCatalog {
    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut dropped = 0usize;

    for record in records {
        if !passes_filters(&record, branch, at_millis) {
            dropped += 1;
            continue;
        }

        let key = format!(
            "{}|{}|{}",
            record.brand,
            record.conceptual_name(),
            record.category
        );
        let idx = *index.entry(key).or_insert_with(|| {
            groups.push(ProductGroup {
                brand: record.brand.clone(),
                name: record.conceptual_name().to_string(),
                category: record.category.clone(),
                variants: Vec::new(),
                min_price: 0.0,
                original_min_price: None,
                tags: Vec::new(),
                image: String::new(),
                description: String::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[idx];
        for tag in &record.tags {
            if !group.tags.contains(tag) {
                group.tags.push(tag.clone());
            }
        }
        group.variants.push(record);
    }

    for group in &mut groups {
        // Ascending by regular price; filtered variants always have one
        group
            .variants
            .sort_by(|a, b| match (a.price, b.price) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
                _ => std::cmp::Ordering::Equal,
            });

        if group.image.is_empty()
            && let Some(v) = group.variants.iter().find(|v| !v.image.is_empty())
        {
            group.image = v.image.clone();
        }
        if group.description.is_empty()
            && let Some(v) = group.variants.iter().find(|v| !v.description.is_empty())
        {
            group.description = v.description.clone();
        }

        resolve_prices(group, at_millis);
    }

    let highlight = groups.iter().position(ProductGroup::is_highlighted);

    tracing::debug!(
        groups = groups.len(),
        dropped,
        highlight = ?highlight,
        "Catalog normalized"
    );

    NormalizedCatalog { groups, highlight }
}

/// Resolve `min_price` / `original_min_price` for one group
fn resolve_prices(group: &mut ProductGroup, at_millis: i64) {
    let regular_min = group
        .variants
        .iter()
        .filter_map(|v| v.price)
        .fold(f64::INFINITY, f64::min);
    let effective_min = group
        .variants
        .iter()
        .filter_map(|v| effective_price(v, at_millis))
        .fold(f64::INFINITY, f64::min);

    if !effective_min.is_finite() {
        return;
    }

    group.min_price = round_money(effective_min);
    // Advertise the struck-through price only when a promotion wins
    group.original_min_price = if effective_min < regular_min {
        Some(round_money(regular_min))
    } else {
        None
    };
}
