use tracing::debug;

use crate::domain::{
    classification::classify_all,
    common::ports::{RandomSource, choose},
    dinner::entities::{DinnerMatch, MatchSource},
    ingredient::{ParsedIngredients, ParsedToken, parse_ingredients},
    summary::summarize,
    taxonomy::{CuratedDinner, Taxonomy, data},
    template::{TemplateId, detect_special_cases, select_template},
};

/// Subset search is exponential in the item count; it never runs on more
/// items than this, whatever the parse cap.
pub const SUBSET_SEARCH_LIMIT: usize = 12;

/// Sorted, deduplicated, comma-joined form of a token list.
pub fn canonical_key(tokens: &[ParsedToken]) -> String {
    sorted_items(tokens).join(",")
}

pub fn match_dinner<R>(raw: &str, max_items: usize, taxonomy: &Taxonomy, random: &R) -> DinnerMatch
where
    R: RandomSource + ?Sized,
{
    let parsed = parse_ingredients(raw, max_items);
    match_parsed_dinner(&parsed, taxonomy, random)
}

/// Looks the items up in the curated table: exact key, then the largest
/// subsets, then any key containing a single item, then the generic default.
pub fn match_parsed_dinner<R>(
    parsed: &ParsedIngredients,
    taxonomy: &Taxonomy,
    random: &R,
) -> DinnerMatch
where
    R: RandomSource + ?Sized,
{
    let items = sorted_items(&parsed.tokens);
    let validation = choose(random, taxonomy.affirmations())
        .unwrap_or_default()
        .to_string();

    let found = find_exact(&items, taxonomy)
        .map(|dinner| (dinner, MatchSource::Exact))
        .or_else(|| find_subset(&items, taxonomy).map(|dinner| (dinner, MatchSource::Subset)))
        .or_else(|| find_partial(&items, taxonomy).map(|dinner| (dinner, MatchSource::Partial)));

    if let Some((dinner, source)) = found {
        debug!(key = dinner.key, source = ?source, "curated dinner matched");
        return DinnerMatch {
            name: dinner.name.to_string(),
            tip: dinner.tip.to_string(),
            template: dinner.template,
            validation,
            source,
            matched_key: Some(dinner.key.to_string()),
        };
    }

    let classified = classify_all(&parsed.tokens, taxonomy);
    let special = detect_special_cases(&classified, taxonomy);
    let template = select_template(
        &classified,
        &summarize(&classified),
        &special,
        parsed.original_count,
    )
    .map(|selection| selection.template)
    .unwrap_or(TemplateId::Casual);

    debug!(template = %template, "no curated dinner, using default");

    DinnerMatch {
        name: data::DEFAULT_DINNER_NAME.to_string(),
        tip: data::DEFAULT_DINNER_TIP.to_string(),
        template,
        validation,
        source: MatchSource::Default,
        matched_key: None,
    }
}

fn sorted_items(tokens: &[ParsedToken]) -> Vec<&str> {
    let mut items = tokens.iter().map(ParsedToken::as_str).collect::<Vec<_>>();
    items.sort_unstable();
    items.dedup();
    items
}

fn find_exact(items: &[&str], taxonomy: &Taxonomy) -> Option<&'static CuratedDinner> {
    if items.is_empty() {
        return None;
    }
    taxonomy.curated_dinner(&items.join(","))
}

fn find_subset(items: &[&str], taxonomy: &Taxonomy) -> Option<&'static CuratedDinner> {
    // Only items named in some curated key can be part of a hit.
    let items = items
        .iter()
        .copied()
        .filter(|item| is_curated_item(item, taxonomy))
        .take(SUBSET_SEARCH_LIMIT)
        .collect::<Vec<_>>();

    let n = items.len();
    for size in (1..=n).rev() {
        let mut indices = (0..size).collect::<Vec<_>>();
        loop {
            let key = indices
                .iter()
                .map(|index| items[*index])
                .collect::<Vec<_>>()
                .join(",");
            if let Some(dinner) = taxonomy.curated_dinner(&key) {
                return Some(dinner);
            }
            if !next_combination(&mut indices, n) {
                break;
            }
        }
    }

    None
}

fn is_curated_item(item: &str, taxonomy: &Taxonomy) -> bool {
    taxonomy
        .curated_dinners()
        .iter()
        .any(|dinner| dinner.key.split(',').any(|part| part == item))
}

fn find_partial(items: &[&str], taxonomy: &Taxonomy) -> Option<&'static CuratedDinner> {
    items.iter().find_map(|item| {
        taxonomy
            .curated_dinners()
            .iter()
            .find(|dinner| dinner.key.contains(item))
    })
}

/// Advances `indices` to the next k-combination of `0..n` in lexicographic
/// order. Returns false once the last combination has been passed.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let Some(pivot) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
        return false;
    };

    indices[pivot] += 1;
    for i in pivot + 1..k {
        indices[i] = indices[i - 1] + 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{DEFAULT_MAX_ITEMS, ports::MockRandomSource};

    fn random(index: usize) -> MockRandomSource {
        let mut random = MockRandomSource::new();
        random.expect_pick().returning(move |_| index);
        random
    }

    fn lookup(raw: &str) -> DinnerMatch {
        let taxonomy = Taxonomy::load().unwrap();
        match_dinner(raw, DEFAULT_MAX_ITEMS, &taxonomy, &random(0))
    }

    #[test]
    fn test_canonical_key_sorts_and_dedupes() {
        let parsed = parse_ingredients("Crackers, brie, crackers", DEFAULT_MAX_ITEMS);

        assert_eq!(canonical_key(&parsed.tokens), "brie,crackers");
    }

    #[test]
    fn test_match_exact_is_order_insensitive() {
        let first = lookup("crackers, brie");
        let second = lookup("brie, crackers");

        assert_eq!(first, second);
        assert_eq!(first.name, "The Classic Duo");
        assert_eq!(first.source, MatchSource::Exact);
    }

    #[test]
    fn test_match_prefers_largest_subset() {
        let dinner = lookup("honey, grapes, crackers, brie");

        assert_eq!(dinner.name, "The French Picnic");
        assert_eq!(dinner.source, MatchSource::Subset);
        assert_eq!(dinner.matched_key.as_deref(), Some("brie,crackers,grapes"));
    }

    #[test]
    fn test_match_subset_ties_break_lexicographically() {
        let dinner = lookup("salami, crackers, brie");

        assert_eq!(dinner.matched_key.as_deref(), Some("brie,crackers"));
    }

    #[test]
    fn test_match_subset_survives_a_raised_item_cap() {
        let taxonomy = Taxonomy::load().unwrap();
        let raw = "brie, crackers, grapes, aaa1, aaa2, aaa3, aaa4, aaa5, aaa6, aaa7, aaa8, \
                   aaa9, aaa10";

        for max_items in [DEFAULT_MAX_ITEMS, 13, 40] {
            let dinner = match_dinner(raw, max_items, &taxonomy, &random(0));

            assert_eq!(dinner.name, "The French Picnic", "cap {max_items}");
            assert_eq!(dinner.source, MatchSource::Subset, "cap {max_items}");
        }
    }

    #[test]
    fn test_match_single_item_partial() {
        let dinner = lookup("bacon, brie");

        assert_eq!(dinner.source, MatchSource::Partial);
        assert_eq!(dinner.name, "The Classic Duo");
    }

    #[test]
    fn test_match_default_uses_template_selector() {
        let dinner = lookup("xyzzy, quuxberry");

        assert_eq!(dinner.name, "The Spread");
        assert_eq!(dinner.source, MatchSource::Default);
        assert_eq!(dinner.template, TemplateId::Minimalist);
        assert!(dinner.matched_key.is_none());
    }

    #[test]
    fn test_match_default_for_empty_input_is_casual() {
        let dinner = lookup("");

        assert_eq!(dinner.source, MatchSource::Default);
        assert_eq!(dinner.template, TemplateId::Casual);
    }

    #[test]
    fn test_match_affirmation_comes_from_random_source() {
        let taxonomy = Taxonomy::load().unwrap();
        let dinner = match_dinner("pizza", DEFAULT_MAX_ITEMS, &taxonomy, &random(3));

        assert_eq!(dinner.validation, taxonomy.affirmations()[3]);
        assert_eq!(dinner.template, TemplateId::PizzaNight);
    }

    #[test]
    fn test_next_combination_walks_lexicographically() {
        let mut indices = vec![0, 1];
        let mut seen = vec![indices.clone()];
        while next_combination(&mut indices, 4) {
            seen.push(indices.clone());
        }

        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }
}
