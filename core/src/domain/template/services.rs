use tracing::debug;

use crate::domain::{
    classification::ClassifiedIngredient,
    summary::IngredientSummary,
    taxonomy::{Category, Role, Taxonomy},
    template::entities::{SelectionRule, SpecialCases, TemplateId, TemplateSelection},
};

/// Usable item count at which chaos handling takes over.
pub const CHAOS_THRESHOLD: usize = 12;

/// Original item count at which chaos handling switches to compartments.
pub const BENTO_THRESHOLD: usize = 15;

const MINIMALIST_MAX: usize = 2;
const SMALL_SET_MAX: usize = 3;
const LARGE_SET_MIN: usize = 8;
const FLOW_HEAVY_MIN: usize = 3;

/// Primary set caps for chaos handling, in pick order.
const CHAOS_CAPS: [(Role, usize); 3] = [(Role::Anchor, 2), (Role::Flow, 4), (Role::Pop, 5)];

pub fn detect_special_cases(items: &[ClassifiedIngredient], taxonomy: &Taxonomy) -> SpecialCases {
    let mentions = |indicators: &[&str]| {
        items.iter().any(|item| {
            indicators
                .iter()
                .any(|indicator| item.original.contains(indicator))
        })
    };

    SpecialCases {
        pizza: items
            .iter()
            .any(|item| item.role == Role::Special && item.category == Category::Pizza)
            || mentions(taxonomy.pizza_indicators()),
        mediterranean: mentions(taxonomy.mediterranean_indicators()),
        snack: mentions(taxonomy.snack_indicators()),
    }
}

/// Picks the layout for the usable items. `original_count` is the number of
/// distinct items the user supplied before the item cap was applied.
///
/// Returns `None` for an empty list; callers report that as an input error.
pub fn select_template(
    items: &[ClassifiedIngredient],
    summary: &IngredientSummary,
    special: &SpecialCases,
    original_count: usize,
) -> Option<TemplateSelection> {
    let count = summary.total;
    if count == 0 {
        return None;
    }

    if count >= CHAOS_THRESHOLD {
        return Some(select_chaos(items, original_count.max(count)));
    }

    // Two items with one of them a pizza still reads as pizza night.
    let (template, rule, rationale) = if count <= MINIMALIST_MAX && !special.pizza {
        (
            TemplateId::Minimalist,
            SelectionRule::TooFewItems,
            format!(
                "Only {count} {}, too few to need organization, so the layout emphasizes negative space.",
                plural(count, "item", "items")
            ),
        )
    } else if special.pizza {
        (
            TemplateId::PizzaNight,
            SelectionRule::PizzaFamily,
            "Pizza is on the table, so everything else becomes a topping bar around it.".to_string(),
        )
    } else if special.mediterranean {
        (
            TemplateId::Mediterranean,
            SelectionRule::MediterraneanVocabulary,
            "Mezze staples point to a Mediterranean platter with dips at the center.".to_string(),
        )
    } else if special.snack {
        (
            TemplateId::SnackAttack,
            SelectionRule::SnackVocabulary,
            "Chips and dips call for a snack attack layout built around the bowls.".to_string(),
        )
    } else if count <= SMALL_SET_MAX {
        (
            TemplateId::Minimalist,
            SelectionRule::SmallSet,
            format!("With {count} items, a minimalist layout keeps every piece in view."),
        )
    } else if count >= LARGE_SET_MIN {
        (
            TemplateId::WildGraze,
            SelectionRule::LargeSet,
            format!("{count} items are enough to cover the board edge to edge as a wild graze."),
        )
    } else if summary.flow >= FLOW_HEAVY_MIN {
        (
            TemplateId::WildGraze,
            SelectionRule::FlowHeavy,
            format!(
                "{} flow items create natural movement, so they wind across the board as a wild graze.",
                summary.flow
            ),
        )
    } else {
        (
            TemplateId::Casual,
            SelectionRule::Default,
            "A balanced mix that suits a relaxed, casual arrangement.".to_string(),
        )
    };

    debug!(template = %template, rule = ?rule, count, "template selected");

    Some(TemplateSelection {
        template,
        rule,
        rationale,
        primary: items.to_vec(),
        overflow: Vec::new(),
    })
}

fn select_chaos(items: &[ClassifiedIngredient], original_count: usize) -> TemplateSelection {
    let mut picked = vec![false; items.len()];
    let mut primary = Vec::new();

    for (role, cap) in CHAOS_CAPS {
        let indices = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.role == role)
            .map(|(index, _)| index)
            .take(cap)
            .collect::<Vec<_>>();

        for index in indices {
            picked[index] = true;
            primary.push(items[index].clone());
        }
    }

    let overflow = items
        .iter()
        .zip(&picked)
        .filter(|(_, picked)| !**picked)
        .map(|(item, _)| item.clone())
        .collect::<Vec<_>>();

    let template = if original_count >= BENTO_THRESHOLD {
        TemplateId::Bento
    } else {
        TemplateId::WildGraze
    };

    let rationale = match template {
        TemplateId::Bento => format!(
            "{original_count} items is more than one board can show, so the best {} get their own compartments and the rest go on the side.",
            primary.len()
        ),
        _ => format!(
            "{original_count} items make for a wild graze: {} lead the board and the rest fill in around them.",
            primary.len()
        ),
    };

    debug!(
        template = %template,
        original_count,
        primary = primary.len(),
        overflow = overflow.len(),
        "chaos handling applied"
    );

    TemplateSelection {
        template,
        rule: SelectionRule::Chaos,
        rationale,
        primary,
        overflow,
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
