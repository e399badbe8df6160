use tracing::debug;

use crate::domain::{
    classification::classify,
    common::ports::{RandomSource, choose},
    ingredient::ParsedToken,
    taxonomy::{NonFoodFamily, Taxonomy},
    validation::entities::{
        Severity, ValidatedToken, ValidationReport, ValidationVerdict, VerdictCategory,
    },
};

/// Runs the rejection checks in priority order, first hit wins:
/// dangerous, curated snark noun, ambiguous word, non-food family, then
/// classification. Unknown tokens are accepted with a warning.
pub fn validate_token<R>(token: &str, taxonomy: &Taxonomy, random: &R) -> ValidatedToken
where
    R: RandomSource + ?Sized,
{
    let verdict = if taxonomy.is_dangerous(token) {
        Some(ValidationVerdict::rejected(
            Severity::High,
            VerdictCategory::Dangerous,
            taxonomy.dangerous_message(),
        ))
    } else if let Some(snark) = taxonomy.snark_for(token) {
        Some(ValidationVerdict::rejected(
            Severity::Low,
            VerdictCategory::NonFood,
            snark.line,
        ))
    } else if let Some(item) = taxonomy.ambiguity_for(token) {
        Some(ValidationVerdict::ambiguous(item.question, item.valid_forms))
    } else if let Some(patterns) = taxonomy.non_food_for(token) {
        let severity = match patterns.family {
            NonFoodFamily::DangerousMaterial => Severity::High,
            _ => Severity::Low,
        };
        let response = choose(random, patterns.responses).unwrap_or_default();
        Some(ValidationVerdict::rejected(
            severity,
            VerdictCategory::NonFood,
            response,
        ))
    } else {
        None
    };

    if let Some(verdict) = verdict {
        debug!(token, category = ?verdict.category, "token rejected");
        return ValidatedToken {
            token: token.to_string(),
            verdict,
            classified: None,
        };
    }

    let classified = classify(token, taxonomy);
    let verdict = if classified.is_known() {
        ValidationVerdict::food()
    } else {
        ValidationVerdict::unknown(format!(
            "I don't recognize \"{token}\", but I'll plate it anyway."
        ))
    };

    ValidatedToken {
        token: token.to_string(),
        verdict,
        classified: Some(classified),
    }
}

pub fn validate_tokens<R>(tokens: &[ParsedToken], taxonomy: &Taxonomy, random: &R) -> ValidationReport
where
    R: RandomSource + ?Sized,
{
    let mut report = ValidationReport::default();

    for token in tokens {
        let validated = validate_token(token.as_str(), taxonomy, random);

        if validated.verdict.valid {
            if validated.verdict.category == VerdictCategory::Unknown {
                report.warnings.push(validated.verdict.message().to_string());
            }
            report.valid.push(validated);
        } else if validated.verdict.category == VerdictCategory::Ambiguous {
            report.ambiguous.push(validated);
        } else {
            report.invalid.push(validated);
        }
    }

    debug!(
        valid = report.valid.len(),
        invalid = report.invalid.len(),
        ambiguous = report.ambiguous.len(),
        "validated tokens"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{DEFAULT_MAX_ITEMS, ports::MockRandomSource},
        ingredient::parse_ingredients,
        taxonomy::{Role, data},
    };

    fn taxonomy() -> Taxonomy {
        Taxonomy::load().unwrap()
    }

    fn first_pick() -> MockRandomSource {
        let mut random = MockRandomSource::new();
        random.expect_pick().returning(|_| 0);
        random
    }

    fn report(raw: &str) -> ValidationReport {
        let parsed = parse_ingredients(raw, DEFAULT_MAX_ITEMS);
        validate_tokens(&parsed.tokens, &taxonomy(), &first_pick())
    }

    #[test]
    fn test_validate_dangerous_is_high_severity() {
        let validated = validate_token("bleach", &taxonomy(), &first_pick());

        assert!(!validated.verdict.valid);
        assert_eq!(validated.verdict.severity, Severity::High);
        assert_eq!(validated.verdict.category, VerdictCategory::Dangerous);
        assert_eq!(validated.verdict.message(), data::DANGEROUS_MESSAGE);
    }

    #[test]
    fn test_validate_dangerous_rejects_regardless_of_food_neighbours() {
        let report = report("brie, bleach, crackers");

        assert_eq!(report.usable_items(), vec!["brie", "crackers"]);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].verdict.severity, Severity::High);
    }

    #[test]
    fn test_validate_dangerous_wins_over_food_substring() {
        // "poison" outranks the cheese in the same token.
        let validated = validate_token("poison brie", &taxonomy(), &first_pick());

        assert_eq!(validated.verdict.category, VerdictCategory::Dangerous);
    }

    #[test]
    fn test_validate_snark_uses_fixed_line() {
        let validated = validate_token("my old phone", &taxonomy(), &MockRandomSource::new());

        assert_eq!(validated.verdict.severity, Severity::Low);
        assert_eq!(validated.verdict.category, VerdictCategory::NonFood);
        assert_eq!(
            validated.verdict.message(),
            "Your phone is not a cracker, no matter how flat it is."
        );
    }

    #[test]
    fn test_validate_snark_requires_whole_word() {
        let validated = validate_token("smoked turkeys", &taxonomy(), &first_pick());

        assert!(validated.verdict.valid);
    }

    #[test]
    fn test_validate_ambiguous_asks_for_clarification() {
        let validated = validate_token("leaves", &taxonomy(), &first_pick());

        assert!(!validated.verdict.valid);
        assert_eq!(validated.verdict.severity, Severity::Clarification);
        assert_eq!(validated.verdict.category, VerdictCategory::Ambiguous);
        assert!(validated.verdict.valid_forms.contains(&"grape leaves".to_string()));
    }

    #[test]
    fn test_validate_ambiguous_specific_form_passes() {
        let taxonomy = taxonomy();
        let random = first_pick();

        let leaves = validate_token("grape leaves", &taxonomy, &random);
        assert!(leaves.verdict.valid);
        assert_eq!(leaves.classified.unwrap().role, Role::Pop);

        assert!(validate_token("ice cream", &taxonomy, &random).verdict.valid);
        assert!(validate_token("wild rice", &taxonomy, &random).verdict.valid);
    }

    #[test]
    fn test_validate_non_food_family_uses_random_source() {
        let mut random = MockRandomSource::new();
        random.expect_pick().times(1).returning(|len| {
            assert_eq!(len, 3);
            2
        });

        let validated = validate_token("love", &taxonomy(), &random);

        assert_eq!(validated.verdict.category, VerdictCategory::NonFood);
        assert_eq!(validated.verdict.severity, Severity::Low);
        assert_eq!(
            validated.verdict.message(),
            "I can plate feelings metaphorically, but not literally."
        );
    }

    #[test]
    fn test_validate_dangerous_material_family_is_high() {
        let validated = validate_token("gravel", &taxonomy(), &first_pick());

        assert_eq!(validated.verdict.severity, Severity::High);
        assert_eq!(validated.verdict.category, VerdictCategory::NonFood);
    }

    #[test]
    fn test_validate_unknown_is_accepted_with_warning() {
        let report = report("xyzzynotfood");

        assert_eq!(report.usable_items(), vec!["xyzzynotfood"]);
        assert_eq!(report.valid[0].verdict.category, VerdictCategory::Unknown);
        assert_eq!(report.valid[0].verdict.severity, Severity::Low);
        assert_eq!(
            report.warnings,
            vec!["I don't recognize \"xyzzynotfood\", but I'll plate it anyway."]
        );
    }

    #[test]
    fn test_validate_known_food_has_no_message() {
        let validated = validate_token("brie", &taxonomy(), &first_pick());

        assert_eq!(validated.verdict, ValidationVerdict::food());
        assert_eq!(validated.classified.unwrap().display_name, "Brie");
    }

    #[test]
    fn test_validate_report_partitions_mixed_input() {
        let report = report("brie, phone, ice");

        assert!(report.is_mixed());
        assert_eq!(report.usable_items(), vec!["brie"]);
        assert_eq!(report.invalid[0].token, "phone");
        assert_eq!(report.ambiguous[0].token, "ice");
        assert_eq!(report.classified().len(), 1);
    }

    #[test]
    fn test_validate_report_all_invalid() {
        let report = report("phone, keys, bleach");

        assert!(!report.has_usable());
        assert_eq!(report.invalid.len(), 3);
        assert_eq!(report.first_rejection().unwrap().token, "phone");
    }
}
