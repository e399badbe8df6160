use tracing::{debug, info};

use crate::domain::{
    classification::ClassifiedIngredient,
    common::{PlatingConfig, generate_timestamp, generate_uuid_v7, ports::RandomSource},
    ingredient::{ParsedIngredients, parse_ingredient_list, parse_ingredients},
    plating::entities::{Clarification, PlatingOutcome, PlatingResult, RejectedItem},
    prompt::build_prompt,
    summary::summarize,
    taxonomy::Taxonomy,
    template::{detect_special_cases, select_template},
    validation::{ValidationReport, validate_tokens},
    visual_rules::applicable_rules,
};

pub const EMPTY_INPUT_MESSAGE: &str =
    "Give me something to work with! List a few ingredients, separated by commas or new lines.";

pub fn plate_ingredients<R>(
    raw: &str,
    taxonomy: &Taxonomy,
    config: &PlatingConfig,
    random: &R,
) -> PlatingOutcome
where
    R: RandomSource + ?Sized,
{
    let parsed = parse_ingredients(raw, config.max_items);
    plate_parsed(raw, &parsed, taxonomy, config, random)
}

pub fn plate_ingredient_list<S, R>(
    items: &[S],
    taxonomy: &Taxonomy,
    config: &PlatingConfig,
    random: &R,
) -> PlatingOutcome
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let parsed = parse_ingredient_list(items, config.max_items);
    let input = items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(", ");

    plate_parsed(&input, &parsed, taxonomy, config, random)
}

/// Validator, rejection handling, classification, template and rule
/// selection, prompt assembly. `input` is echoed back in the result.
pub fn plate_parsed<R>(
    input: &str,
    parsed: &ParsedIngredients,
    taxonomy: &Taxonomy,
    config: &PlatingConfig,
    random: &R,
) -> PlatingOutcome
where
    R: RandomSource + ?Sized,
{
    if parsed.is_empty() {
        info!("plating rejected: empty input");
        return PlatingOutcome::Empty {
            message: EMPTY_INPUT_MESSAGE.to_string(),
        };
    }

    let report = validate_tokens(&parsed.tokens, taxonomy, random);
    if !report.has_usable() {
        return reject_all(&report);
    }

    let items = report.classified();
    let summary = summarize(&items);
    let special = detect_special_cases(&items, taxonomy);
    let original_count = items.len() + parsed.dropped();

    let Some(selection) = select_template(&items, &summary, &special, original_count) else {
        return PlatingOutcome::Empty {
            message: EMPTY_INPUT_MESSAGE.to_string(),
        };
    };

    let directives = applicable_rules(&summary);
    let prompt = build_prompt(&selection, &directives, config.min_prompt_length);
    debug!(prompt_length = prompt.len(), "prompt built");

    let (created_at, _) = generate_timestamp();
    let rejections = rejections(&report);
    let result = PlatingResult {
        id: generate_uuid_v7(),
        input: input.to_string(),
        summary,
        template: selection.template,
        template_name: selection.template.display_name().to_string(),
        selection_rule: selection.rule,
        rationale: selection.rationale,
        rules_applied: directives.iter().map(|rule| rule.name.clone()).collect(),
        directives,
        prompt,
        primary_items: display_names(&selection.primary),
        overflow: display_names(&selection.overflow),
        usable_items: report.usable_items(),
        rejected_items: rejections.iter().map(|rejected| rejected.item.clone()).collect(),
        rejections,
        clarifications: report.ambiguous.iter().map(Clarification::from).collect(),
        warnings: report.warnings.clone(),
        dropped_count: parsed.dropped(),
        created_at,
        items,
    };

    info!(
        template = %result.template,
        usable = result.usable_items.len(),
        rejected = result.rejected_items.len(),
        "plating complete"
    );

    if report.is_mixed() {
        PlatingOutcome::Mixed(result)
    } else {
        PlatingOutcome::Plated(result)
    }
}

fn reject_all(report: &ValidationReport) -> PlatingOutcome {
    let rejections = rejections(report);
    let rejected_items = rejections
        .iter()
        .map(|rejected| rejected.item.clone())
        .collect::<Vec<_>>();
    let clarifications = report
        .ambiguous
        .iter()
        .map(Clarification::from)
        .collect::<Vec<_>>();

    // Hard rejections win: the caller sees the first snark, not a question.
    match rejections.first() {
        None if !clarifications.is_empty() => {
            info!(ambiguous = clarifications.len(), "plating needs clarification");

            PlatingOutcome::NeedsClarification {
                message: clarifications[0].question.clone(),
                clarifications,
                rejected_items,
                rejections,
            }
        }
        first => {
            info!(rejected = rejections.len(), "plating rejected: nothing edible");

            PlatingOutcome::AllGarbage {
                message: first
                    .map(|rejected| rejected.message.clone())
                    .unwrap_or_default(),
                rejected_items,
                rejections,
                clarifications,
            }
        }
    }
}

fn rejections(report: &ValidationReport) -> Vec<RejectedItem> {
    report.invalid.iter().map(RejectedItem::from).collect()
}

fn display_names(items: &[ClassifiedIngredient]) -> Vec<String> {
    items.iter().map(|item| item.display_name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::ports::MockRandomSource,
        taxonomy::Role,
        template::TemplateId,
        validation::{Severity, VerdictCategory},
    };

    fn plate(raw: &str) -> PlatingOutcome {
        let taxonomy = Taxonomy::load().unwrap();
        let mut random = MockRandomSource::new();
        random.expect_pick().returning(|_| 0);

        plate_ingredients(raw, &taxonomy, &PlatingConfig::default(), &random)
    }

    #[test]
    fn test_plate_empty_input() {
        let outcome = plate(" , ,\n");

        assert!(!outcome.is_success());
        assert_eq!(outcome.kind(), "empty");
        assert_eq!(outcome.message(), Some(EMPTY_INPUT_MESSAGE));
    }

    #[test]
    fn test_plate_all_garbage() {
        let outcome = plate("phone, keys, bleach");

        let PlatingOutcome::AllGarbage {
            message,
            rejected_items,
            rejections,
            clarifications,
        } = outcome
        else {
            panic!("expected all garbage");
        };
        assert_eq!(message, "Your phone is not a cracker, no matter how flat it is.");
        assert_eq!(rejected_items, vec!["phone", "keys", "bleach"]);
        assert_eq!(rejections[2].severity, Severity::High);
        assert!(clarifications.is_empty());
    }

    #[test]
    fn test_plate_hard_rejections_outrank_ambiguous_items() {
        let outcome = plate("phone, keys, ice");

        let PlatingOutcome::AllGarbage {
            message,
            rejected_items,
            clarifications,
            ..
        } = outcome
        else {
            panic!("expected all garbage");
        };
        assert_eq!(message, "Your phone is not a cracker, no matter how flat it is.");
        assert_eq!(rejected_items, vec!["phone", "keys"]);
        assert_eq!(clarifications.len(), 1);
        assert_eq!(clarifications[0].item, "ice");
    }

    #[test]
    fn test_plate_ignores_punctuation_only_pieces() {
        let outcome = plate("(((, ()(), brie");

        assert_eq!(outcome.kind(), "plated");
        let result = outcome.result().unwrap();
        assert_eq!(result.usable_items, vec!["brie"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_plate_mixed_input_keeps_usable_subset() {
        let outcome = plate("brie, phone");

        assert_eq!(outcome.kind(), "mixed");
        let result = outcome.result().unwrap();
        assert_eq!(result.usable_items, vec!["brie"]);
        assert_eq!(result.rejected_items, vec!["phone"]);
        assert_eq!(result.template, TemplateId::Minimalist);
    }

    #[test]
    fn test_plate_only_ambiguous_needs_clarification() {
        let outcome = plate("ice, leaves");

        let PlatingOutcome::NeedsClarification {
            clarifications,
            rejected_items,
            ..
        } = outcome
        else {
            panic!("expected clarification");
        };
        assert_eq!(clarifications[0].item, "ice");
        assert!(clarifications[0].valid_forms.contains(&"ice cream".to_string()));
        assert_eq!(clarifications.len(), 2);
        assert!(rejected_items.is_empty());
    }

    #[test]
    fn test_plate_ambiguous_alongside_food_is_mixed() {
        let outcome = plate("brie, crackers, leaves");

        let result = outcome.result().unwrap();
        assert_eq!(outcome.kind(), "mixed");
        assert_eq!(result.usable_items, vec!["brie", "crackers"]);
        assert_eq!(result.clarifications.len(), 1);
        assert!(result.rejected_items.is_empty());
    }

    #[test]
    fn test_plate_full_result() {
        let outcome = plate("hummus, pita, olives, xyzzynotfood");

        assert_eq!(outcome.kind(), "plated");
        let result = outcome.result().unwrap();
        assert_eq!(result.template, TemplateId::Mediterranean);
        assert_eq!(result.items.len(), 4);
        assert_eq!(result.items[3].role, Role::Filler);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.rules_applied.contains(&"Contain the Drips".to_string()));
        assert!(result.prompt.len() >= PlatingConfig::default().min_prompt_length);
        for name in ["Hummus", "Pita", "Olives", "Xyzzynotfood"] {
            assert!(result.prompt.contains(name), "prompt is missing {name}");
        }
    }

    #[test]
    fn test_plate_caps_and_downsamples_large_input() {
        let raw = "brie, cheddar, gouda, crackers, salami, prosciutto, baguette, pretzels, \
                   grapes, figs, honey, almonds, apples, pears, olives, walnuts";
        let outcome = plate(raw);

        let result = outcome.result().unwrap();
        assert_eq!(result.template, TemplateId::Bento);
        assert_eq!(result.dropped_count, 4);
        assert_eq!(result.items.len(), 12);
        assert!(!result.overflow.is_empty());
        assert_eq!(result.primary_items.len() + result.overflow.len(), 12);
    }

    #[test]
    fn test_plate_dangerous_is_reported_with_food() {
        let outcome = plate("brie, bleach");

        let result = outcome.result().unwrap();
        assert_eq!(result.rejections[0].category, VerdictCategory::Dangerous);
        assert_eq!(result.rejections[0].severity, Severity::High);
    }

    #[test]
    fn test_plate_ingredient_list() {
        let taxonomy = Taxonomy::load().unwrap();
        let random = MockRandomSource::new();

        let outcome = plate_ingredient_list(
            &["pizza"],
            &taxonomy,
            &PlatingConfig::default(),
            &random,
        );

        assert_eq!(outcome.result().unwrap().template, TemplateId::PizzaNight);
    }
}
