use tracing::trace;

use crate::domain::{
    classification::{
        entities::{ClassifiedIngredient, MatchKind},
        helpers::edit_distance,
    },
    ingredient::{ParsedToken, title_case},
    taxonomy::{IngredientEntry, Role, Taxonomy, UNKNOWN_ENTRY},
};

pub const FUZZY_MAX_DISTANCE: usize = 2;

/// Tokens shorter than this never fuzzy-match.
pub const FUZZY_MIN_LENGTH: usize = 3;

/// Binds one normalized token to a taxonomy entry.
///
/// Role buckets are scanned anchor, flow, pop, special; the first entry with
/// a hit wins. Substring hits across every bucket are tried before any fuzzy
/// hit, so a correctly spelled "pita" never loses to a typo-distance "feta".
/// No hit at all yields the unknown filler entry.
pub fn classify(token: &str, taxonomy: &Taxonomy) -> ClassifiedIngredient {
    if let Some(entry) = find_entry(taxonomy, |synonym| token.contains(synonym)) {
        trace!(token, entry = entry.name, "substring match");
        return ClassifiedIngredient::from_entry(token, entry, MatchKind::Substring);
    }

    if token.chars().count() >= FUZZY_MIN_LENGTH {
        if let Some(entry) = find_entry(taxonomy, |synonym| {
            edit_distance(token, synonym) <= FUZZY_MAX_DISTANCE
        }) {
            trace!(token, entry = entry.name, "fuzzy match");
            return ClassifiedIngredient::from_entry(token, entry, MatchKind::Fuzzy);
        }
    }

    ClassifiedIngredient {
        display_name: title_case(token),
        ..ClassifiedIngredient::from_entry(token, &UNKNOWN_ENTRY, MatchKind::Unknown)
    }
}

pub fn classify_all(tokens: &[ParsedToken], taxonomy: &Taxonomy) -> Vec<ClassifiedIngredient> {
    tokens
        .iter()
        .map(|token| classify(token.as_str(), taxonomy))
        .collect()
}

fn find_entry<'t, F>(taxonomy: &'t Taxonomy, hits: F) -> Option<&'t IngredientEntry>
where
    F: Fn(&str) -> bool,
{
    Role::SCAN_ORDER.iter().find_map(|role| {
        taxonomy
            .entries_for(*role)
            .find(|entry| entry.synonyms.iter().any(|synonym| hits(synonym)))
    })
}
