use crate::domain::{
    classification::ClassifiedIngredient,
    ingredient::join_names,
    taxonomy::Role,
    template::TemplateSelection,
    visual_rules::AppliedRule,
};

const PHOTO_STYLE: &str = "Shot from directly above in soft natural light on a neutral linen tablecloth, shallow depth of field, photorealistic, high detail.";

/// Appended in turn until the prompt reaches the minimum length.
const PADDING: &[&str] = &[
    "Every ingredient looks fresh and vibrant.",
    "Textures are crisp and clearly visible.",
    "The composition feels generous and inviting.",
    "Colors are rich and true to life.",
];

const ROLE_ORDER: [Role; 5] = [Role::Anchor, Role::Special, Role::Flow, Role::Pop, Role::Filler];

/// Assembles the image generation prompt for one plating selection.
///
/// The result names every primary and overflow item at least once and is
/// never shorter than `min_length` characters.
pub fn build_prompt(selection: &TemplateSelection, rules: &[AppliedRule], min_length: usize) -> String {
    let mut sentences = vec![format!(
        "Overhead food photograph of {}.",
        selection.template.layout()
    )];

    let clauses = ROLE_ORDER
        .iter()
        .filter_map(|role| role_clause(*role, &selection.primary))
        .collect::<Vec<_>>();
    if !clauses.is_empty() {
        sentences.push(format!("The board features {}.", clauses.join("; ")));
    }

    if !selection.overflow.is_empty() {
        sentences.push(format!(
            "Small side bowls hold {}.",
            join_names(&unique_names(selection.overflow.iter()))
        ));
    }

    sentences.extend(rules.iter().map(|rule| rule.directive.clone()));
    sentences.push(PHOTO_STYLE.to_string());

    let mut prompt = sentences.join(" ");
    for sentence in PADDING.iter().cycle() {
        if prompt.chars().count() >= min_length {
            break;
        }
        prompt.push(' ');
        prompt.push_str(sentence);
    }

    prompt
}

fn role_clause(role: Role, items: &[ClassifiedIngredient]) -> Option<String> {
    let names = unique_names(items.iter().filter(|item| item.role == role));
    if names.is_empty() {
        return None;
    }

    let subject = join_names(&names);
    let plural = names.len() > 1;
    let clause = match role {
        Role::Anchor if plural => format!("{subject} as focal pieces"),
        Role::Anchor => format!("{subject} as the focal piece"),
        Role::Special => format!("{subject} at the center of the spread"),
        Role::Flow => format!("{subject} flowing in lines between them"),
        Role::Pop => format!("{subject} adding pops of color and texture"),
        Role::Filler => format!("{subject} filling the remaining space"),
    };

    Some(clause)
}

fn unique_names<'a>(items: impl Iterator<Item = &'a ClassifiedIngredient>) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    for item in items {
        if !names.contains(&item.display_name.as_str()) {
            names.push(&item.display_name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        classification::classify_all,
        common::{DEFAULT_MAX_ITEMS, DEFAULT_MIN_PROMPT_LENGTH},
        ingredient::parse_ingredients,
        summary::summarize,
        taxonomy::Taxonomy,
        template::{detect_special_cases, select_template},
        visual_rules::applicable_rules,
    };

    fn prompt_for(raw: &str, min_length: usize) -> (String, TemplateSelection) {
        let taxonomy = Taxonomy::load().unwrap();
        let parsed = parse_ingredients(raw, DEFAULT_MAX_ITEMS);
        let items = classify_all(&parsed.tokens, &taxonomy);
        let summary = summarize(&items);
        let special = detect_special_cases(&items, &taxonomy);
        let selection = select_template(&items, &summary, &special, parsed.original_count).unwrap();
        let rules = applicable_rules(&summary);

        (build_prompt(&selection, &rules, min_length), selection)
    }

    #[test]
    fn test_prompt_names_every_item() {
        let (prompt, selection) = prompt_for("brie, crackers, grapes, xyzzynotfood", DEFAULT_MIN_PROMPT_LENGTH);

        for item in &selection.primary {
            assert!(prompt.contains(&item.display_name), "missing {}", item.display_name);
        }
        assert!(prompt.contains("Xyzzynotfood"));
    }

    #[test]
    fn test_prompt_includes_layout_and_directives() {
        let (prompt, selection) = prompt_for("hummus, pita, olives", DEFAULT_MIN_PROMPT_LENGTH);

        assert!(prompt.starts_with("Overhead food photograph of"));
        assert!(prompt.contains(selection.template.layout()));
        assert!(prompt.contains("small ceramic bowls"));
    }

    #[test]
    fn test_prompt_meets_minimum_length() {
        let (short, _) = prompt_for("brie", DEFAULT_MIN_PROMPT_LENGTH);
        let (long, _) = prompt_for("brie", 900);

        assert!(short.chars().count() >= DEFAULT_MIN_PROMPT_LENGTH);
        assert!(long.chars().count() >= 900);
    }

    #[test]
    fn test_prompt_mentions_overflow() {
        let (prompt, selection) = prompt_for(
            "brie, cheddar, gouda, crackers, salami, prosciutto, baguette, \
             grapes, figs, honey, almonds, apples",
            DEFAULT_MIN_PROMPT_LENGTH,
        );

        assert!(!selection.overflow.is_empty());
        assert!(prompt.contains("Small side bowls hold Gouda."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let raw = "brie, crackers, grapes, honey";

        assert_eq!(
            prompt_for(raw, DEFAULT_MIN_PROMPT_LENGTH).0,
            prompt_for(raw, DEFAULT_MIN_PROMPT_LENGTH).0
        );
    }
}
