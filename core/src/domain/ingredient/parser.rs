use std::collections::HashSet;

use tracing::debug;

use crate::domain::ingredient::value_objects::{ParsedIngredients, ParsedToken};

pub const MIN_TOKEN_LENGTH: usize = 3;

const SEPARATORS: &[char] = &[',', '\n', '\r', ';'];

/// Leading words that carry no ingredient meaning.
const FILLER_WORDS: &[&str] = &["a", "an", "some", "fresh", "organic", "homemade", "my", "the"];

/// Punctuation kept inside a token but trimmed from its edges.
const EDGE_PUNCTUATION: &[char] = &['\'', '-', '&', '.', ' '];

fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '\'' | '-' | '&' | '.' | '(' | ')')
}

/// Splits raw text into unique normalized tokens, capped at `max_items`.
pub fn parse_ingredients(raw: &str, max_items: usize) -> ParsedIngredients {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for token in raw.split(SEPARATORS).filter_map(normalize_piece) {
        if seen.insert(token.clone()) {
            tokens.push(ParsedToken::new(token));
        }
    }

    let original_count = tokens.len();
    tokens.truncate(max_items);

    debug!(
        original_count,
        kept = tokens.len(),
        "parsed ingredient text"
    );

    ParsedIngredients {
        tokens,
        original_count,
    }
}

/// Same as [`parse_ingredients`] for input that arrives already split.
pub fn parse_ingredient_list<S: AsRef<str>>(items: &[S], max_items: usize) -> ParsedIngredients {
    let joined = items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    parse_ingredients(&joined, max_items)
}

fn normalize_piece(piece: &str) -> Option<String> {
    let cleaned: String = piece
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .flat_map(char::to_lowercase)
        .filter(|c| is_allowed(*c))
        .collect();

    let mut token = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    // Trimming can expose another filler word and vice versa; repeat until stable.
    loop {
        let trimmed = token.trim_matches(EDGE_PUNCTUATION);
        let stripped = match trimmed.split_once(' ') {
            Some((first, rest)) if FILLER_WORDS.contains(&first) => rest,
            _ => trimmed,
        };

        if stripped.len() == token.len() {
            break;
        }
        token = stripped.to_string();
    }

    if token.chars().count() < MIN_TOKEN_LENGTH
        || FILLER_WORDS.contains(&token.as_str())
        || !token.chars().any(char::is_alphanumeric)
    {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::DEFAULT_MAX_ITEMS;

    fn parse(raw: &str) -> Vec<String> {
        parse_ingredients(raw, DEFAULT_MAX_ITEMS).as_strings()
    }

    #[test]
    fn test_parse_splits_on_commas_and_newlines() {
        assert_eq!(
            parse("Brie, crackers\nGrapes\n\n,  salami "),
            vec!["brie", "crackers", "grapes", "salami"]
        );
    }

    #[test]
    fn test_parse_strips_filler_prefixes() {
        assert_eq!(
            parse("some fresh figs, the organic honey, a brie, my homemade jam"),
            vec!["figs", "honey", "brie", "jam"]
        );
    }

    #[test]
    fn test_parse_collapses_whitespace_and_drops_short_pieces() {
        assert_eq!(
            parse("goat    cheese, a, xy, ok, fig"),
            vec!["goat cheese", "fig"]
        );
    }

    #[test]
    fn test_parse_strips_markup_characters() {
        assert_eq!(
            parse("<script>brie</script>, salami{}"),
            vec!["scriptbriescript", "salami"]
        );
    }

    #[test]
    fn test_parse_drops_punctuation_only_pieces() {
        assert_eq!(parse("(((, ()(), brie, ..., (feta)"), vec!["brie", "(feta)"]);
        assert!(parse_ingredients("&&&, ''' , -.-", DEFAULT_MAX_ITEMS).is_empty());
    }

    #[test]
    fn test_parse_deduplicates_preserving_order() {
        assert_eq!(
            parse("Grapes, brie, GRAPES, fresh brie, crackers"),
            vec!["grapes", "brie", "crackers"]
        );
    }

    #[test]
    fn test_parse_caps_item_count() {
        let raw = (0..20)
            .map(|i| format!("item{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        let parsed = parse_ingredients(&raw, DEFAULT_MAX_ITEMS);

        assert_eq!(parsed.len(), DEFAULT_MAX_ITEMS);
        assert_eq!(parsed.original_count, 20);
        assert_eq!(parsed.dropped(), 8);
        assert_eq!(parsed.tokens[0].as_str(), "item0");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_ingredients("", DEFAULT_MAX_ITEMS).is_empty());
        assert!(parse_ingredients(" ,\n , ", DEFAULT_MAX_ITEMS).is_empty());
        assert!(parse_ingredients("the, a, some", DEFAULT_MAX_ITEMS).is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let inputs = [
            "Brie, crackers, GRAPES, some fresh figs",
            "- the - fresh brie., 'honey', a   jam&toast",
            "the the brie, my a salami, olives (kalamata)",
        ];

        for input in inputs {
            let first = parse(input);
            let second = parse(&first.join(", "));
            assert_eq!(first, second, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_parse_tokens_are_never_empty_or_duplicated() {
        let parsed = parse_ingredients("a, ,brie,brie, BRIE ,   ,crackers,,", DEFAULT_MAX_ITEMS);
        let mut seen = HashSet::new();

        for token in &parsed.tokens {
            assert!(!token.as_str().is_empty());
            assert!(seen.insert(token.as_str().to_string()));
        }
    }

    #[test]
    fn test_parse_ingredient_list() {
        let parsed = parse_ingredient_list(&["Brie", "crackers, grapes"], DEFAULT_MAX_ITEMS);

        assert_eq!(parsed.as_strings(), vec!["brie", "crackers", "grapes"]);
    }
}
