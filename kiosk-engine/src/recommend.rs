//! Recommendation Scorer
//!
//! Pure, deterministic heuristic over a product group and the ambient
//! context: pick a drink type, then a size, then a sweetness level.
//! An axis with no real choice yields `None`, not a recommendation.

use shared::models::{OmniContext, ProductGroup, RecommendationResult, TimeBucket};
use shared::types::{DrinkType, Language, size_rank};

use crate::knowledge;

/// Temperature at or above which cold drinks are pushed
const HOT_WEATHER_C: f64 = 29.0;
/// Temperature at or below which hot drinks are pushed
const COOL_WEATHER_C: f64 = 23.0;

/// Recommend type, size, and sweetness for one group
pub fn recommend(
    group: &ProductGroup,
    context: &OmniContext,
    language: Language,
) -> RecommendationResult {
    let drink_type = recommend_type(group, context);
    RecommendationResult {
        drink_type,
        size: recommend_size(group, context, drink_type),
        sweetness: recommend_sweetness(group, context, language, drink_type),
    }
}

/// Additive score for one candidate type; lower is more preferred
fn type_score(candidate: DrinkType, context: &OmniContext) -> i32 {
    let mut score = 0;

    match context.bucket {
        TimeBucket::EarlyMorning | TimeBucket::Morning => {
            if candidate == DrinkType::Hot {
                score -= 2;
            }
        }
        TimeBucket::Midday => {
            if candidate == DrinkType::Iced {
                score -= 1;
            }
        }
        TimeBucket::Afternoon => {
            if matches!(candidate, DrinkType::Iced | DrinkType::Frappe) {
                score -= 1;
            }
        }
        TimeBucket::Evening => match candidate {
            DrinkType::Iced => score -= 2,
            DrinkType::Frappe => score -= 1,
            DrinkType::Hot => {}
        },
        TimeBucket::LateNight => match candidate {
            DrinkType::Frappe => score -= 2,
            DrinkType::Iced => score -= 1,
            DrinkType::Hot => {}
        },
    }

    if let Some(celsius) = context.temperature {
        if celsius >= HOT_WEATHER_C {
            match candidate {
                DrinkType::Iced | DrinkType::Frappe => score -= 2,
                DrinkType::Hot => score += 1,
            }
        } else if celsius <= COOL_WEATHER_C && candidate == DrinkType::Hot {
            score -= 2;
        }
    }

    score
}

fn recommend_type(group: &ProductGroup, context: &OmniContext) -> Option<DrinkType> {
    let offered = group.offered_types();
    match offered.len() {
        0 => None,
        // A lone type is still worth surfacing on the detail screen
        1 => Some(offered[0]),
        _ => {
            let mut best: Option<(DrinkType, i32)> = None;
            for candidate in offered {
                let score = type_score(candidate, context);
                // Strict comparison keeps first-encountered order on ties
                if best.is_none_or(|(_, s)| score < s) {
                    best = Some((candidate, score));
                }
            }
            best.map(|(t, _)| t)
        }
    }
}

fn recommend_size(
    group: &ProductGroup,
    context: &OmniContext,
    drink_type: Option<DrinkType>,
) -> Option<String> {
    let mut sizes = group.offered_sizes(drink_type);
    if sizes.len() <= 1 {
        return None;
    }
    sizes.sort_by_key(|s| size_rank(s));

    let pick = if context.bucket.is_morning() || context.bucket.is_evening_or_night() {
        sizes.first()
    } else {
        sizes.last()
    };
    pick.cloned()
}

/// Numeric sweetness level of an option ("75%", "75", " 75 % ")
fn parse_level(option: &str) -> Option<i64> {
    option.trim().trim_end_matches('%').trim().parse().ok()
}

fn find_level(options: &[String], level: i64) -> Option<String> {
    options
        .iter()
        .find(|o| parse_level(o) == Some(level))
        .cloned()
}

fn recommend_sweetness(
    group: &ProductGroup,
    context: &OmniContext,
    language: Language,
    drink_type: Option<DrinkType>,
) -> Option<String> {
    let representative = group.representative_variant(drink_type)?;
    let options: Vec<String> = representative
        .sweetness
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if options.len() <= 1 {
        return None;
    }

    let is_dessert = knowledge::lookup(&group.name)
        .map(|entry| entry.is_dessert_drink())
        .unwrap_or(false);

    let preferred = if is_dessert {
        options
            .iter()
            .max_by_key(|o| parse_level(o).unwrap_or(i64::MIN))
            .cloned()
    } else if language.is_western() {
        find_level(&options, 75).or_else(|| find_level(&options, 50))
    } else if context.bucket.is_morning() {
        find_level(&options, 75)
    } else {
        find_level(&options, 100)
    };

    preferred
        .or_else(|| find_level(&options, 100))
        .or_else(|| options.first().cloned())
}
