use crate::domain::{
    classification::ClassifiedIngredient,
    summary::entities::IngredientSummary,
    taxonomy::{Role, Tone},
};

pub fn summarize(items: &[ClassifiedIngredient]) -> IngredientSummary {
    items
        .iter()
        .fold(IngredientSummary::default(), |mut summary, item| {
            summary.total += 1;
            match item.role {
                Role::Anchor => summary.anchors += 1,
                Role::Flow => summary.flow += 1,
                Role::Pop => summary.pop += 1,
                Role::Filler => summary.filler += 1,
                Role::Special => summary.special += 1,
            }

            if item.flags.small_round {
                summary.small_round_count += 1;
                summary.has_small_round = true;
            }
            summary.has_large |= item.flags.large;
            summary.needs_container |= item.flags.needs_container;
            summary.has_spreadable |= item.flags.spreadable;
            summary.has_long_items |= item.flags.long;
            summary.has_warm |= item.tone == Some(Tone::Warm);
            summary.has_cool |= item.tone == Some(Tone::Cool);

            summary
        })
}
