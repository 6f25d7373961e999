//! Knowledge Lookup
//!
//! Fuzzy-matches a product's display name against the curated table:
//! exact, exact-after-cleaning, case-insensitive, then prefix in either
//! direction. A miss means "no contextual metadata", never an error.

mod table;

use shared::models::KnowledgeEntry;

pub use table::ENTRIES;

/// Known size-suffix spellings appended by the feed, longest first
const SIZE_SUFFIXES: &[&str] = &[
    "22 ออนซ์",
    "22ออนซ์",
    "22 oz.",
    "22oz.",
    "22 oz",
    "22oz",
];

/// Remove every case-insensitive occurrence of `needle`
fn strip_ci(haystack: &str, needle: &str) -> String {
    let mut result = haystack.to_string();
    loop {
        let lower_result = result.to_lowercase();
        let lower_needle = needle.to_lowercase();
        // Byte offsets only transfer when folding keeps lengths stable
        if lower_result.len() != result.len() {
            return result.replace(needle, "");
        }
        match lower_result.find(&lower_needle) {
            Some(pos) => {
                result = format!("{}{}", &result[..pos], &result[pos + lower_needle.len()..]);
            }
            None => return result,
        }
    }
}

/// Remove `open`..`close` delimited annotations pair by pair; an opener
/// with no closer after it is left alone
fn strip_delimited(value: &str, open: char, close: char) -> String {
    let mut result = value.to_string();
    while let Some(start) = result.find(open) {
        let after = start + open.len_utf8();
        let Some(offset) = result[after..].find(close) else {
            break;
        };
        let end = after + offset;
        result = format!(
            "{}{}",
            &result[..start],
            &result[end + close.len_utf8()..]
        );
    }
    result
}

/// Normalize a display name before table matching
pub fn clean_name(raw: &str) -> String {
    let mut name = strip_delimited(raw, '(', ')');
    // Asterisk-wrapped markers ("*new*") are annotations, not names
    if name.matches('*').count() >= 2 {
        name = strip_delimited(&name, '*', '*');
    }
    name = name.replace('-', " ");
    for suffix in SIZE_SUFFIXES {
        name = strip_ci(&name, suffix);
    }
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Look up a display name in the knowledge table
///
/// Match order, first hit wins: exact raw, exact cleaned,
/// case-insensitive exact against trimmed keys, cleaned-is-prefix-of-key,
/// key-is-prefix-of-cleaned. Short canonical keys can greedily match
/// unrelated longer names; that ambiguity is preserved from the source
/// behavior.
pub fn lookup(raw_name: &str) -> Option<&'static KnowledgeEntry> {
    if let Some(entry) = table::INDEX.get(raw_name).copied() {
        return Some(entry);
    }

    let cleaned = clean_name(raw_name);
    if cleaned.is_empty() {
        return None;
    }
    if let Some(entry) = table::INDEX.get(cleaned.as_str()).copied() {
        return Some(entry);
    }

    let cleaned_lower = cleaned.to_lowercase();
    for (key, entry) in table::ENTRIES {
        if key.trim().to_lowercase() == cleaned_lower {
            return Some(entry);
        }
    }
    for (key, entry) in table::ENTRIES {
        if key.to_lowercase().starts_with(&cleaned_lower) {
            return Some(entry);
        }
    }
    for (key, entry) in table::ENTRIES {
        if cleaned_lower.starts_with(&key.trim().to_lowercase()) {
            return Some(entry);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::BaseCategory;

    #[test]
    fn exact_match_wins() {
        let entry = lookup("ชาไทย").unwrap();
        assert_eq!(entry.base, BaseCategory::Tea);
        assert!(entry.profile.contains(&"creamy"));
    }

    #[test]
    fn size_suffix_resolves_to_base_entry() {
        let with_suffix = lookup("ชานมเย็น22ออนซ์").unwrap();
        let base = lookup("ชานมเย็น").unwrap();
        assert_eq!(with_suffix, base);
    }

    #[test]
    fn latin_size_suffixes_stripped_case_insensitively() {
        assert_eq!(clean_name("ลาเต้ 22OZ."), "ลาเต้");
        assert_eq!(clean_name("ลาเต้22oz"), "ลาเต้");
        assert!(lookup("ลาเต้ 22 oz").is_some());
    }

    #[test]
    fn parenthetical_and_marker_annotations_ignored() {
        assert!(lookup("โกโก้ (สูตรใหม่)").is_some());
        assert!(lookup("*แนะนำ*มอคค่า").is_some());
    }

    #[test]
    fn hyphens_become_spaces() {
        assert_eq!(clean_name("ชา-มะนาว"), "ชา มะนาว");
    }

    #[test]
    fn each_annotation_pair_stripped_separately() {
        // Text between two annotations must survive
        assert_eq!(clean_name("ชา (ร้อน) เข้ม (ใหม่)"), "ชา เข้ม");
        assert_eq!(clean_name("*ใหม่*ลาเต้*แนะนำ*"), "ลาเต้");
        // An unmatched opener is not an annotation
        assert_eq!(clean_name("ชาไทย (พิเศษ"), "ชาไทย (พิเศษ");
    }

    #[test]
    fn cleaned_name_prefix_of_key_matches() {
        // "สตรอว์เบอร์รี่สมูท" is a prefix of the smoothie key
        assert!(lookup("สตรอว์เบอร์รี่สมูท").is_some());
    }

    #[test]
    fn prefix_match_is_greedy_for_short_keys() {
        // Documented ambiguity: a short key matches any longer name it
        // prefixes, with no tie-break
        let entry = lookup("ชานมสูตรไม่หวาน").unwrap();
        assert_eq!(entry, lookup("ชานม").unwrap());
    }

    #[test]
    fn miss_is_none_not_error() {
        assert!(lookup("น้ำเปล่า").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("   ").is_none());
    }
}
