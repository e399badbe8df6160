use crate::domain::{
    summary::IngredientSummary,
    visual_rules::entities::{AppliedRule, VisualRule},
};

const ODD_CLUSTER_MIN: usize = 3;
const RIVER_FLOW_MIN: usize = 2;
const FILL_GAPS_POP_MIN: usize = 2;
const NEGATIVE_SPACE_MAX: usize = 3;

/// Rule table in firing order.
pub const VISUAL_RULES: &[VisualRule] = &[
    VisualRule {
        id: "anchor_first",
        name: "Anchor First",
        description: "Place the largest pieces first and build the board around them.",
        directive: "The largest pieces are placed first, slightly off center, as focal points.",
        applies: |summary| summary.anchors > 0 || summary.has_large,
    },
    VisualRule {
        id: "odd_number_cluster",
        name: "Odd Number Cluster",
        description: "Group small round items in odd-numbered clusters for visual asymmetry.",
        directive: "Small round items are gathered in clusters of three and five for natural asymmetry.",
        applies: |summary| summary.small_round_count >= ODD_CLUSTER_MIN,
    },
    VisualRule {
        id: "contain_the_drips",
        name: "Contain the Drips",
        description: "Put dips and runny items in small bowls before arranging around them.",
        directive: "Dips and drizzles sit in small ceramic bowls so nothing runs across the board.",
        applies: |summary| summary.needs_container,
    },
    VisualRule {
        id: "spread_meets_vehicle",
        name: "Spread Meets Vehicle",
        description: "Keep every spread within reach of something to spread it on.",
        directive: "Each spread sits right beside the crackers or bread meant to carry it.",
        applies: |summary| summary.has_spreadable && summary.flow > 0,
    },
    VisualRule {
        id: "river_flow",
        name: "River Flow",
        description: "Run crackers and cured meats in S-shaped rivers between the anchors.",
        directive: "Crackers and folded meats wind between the larger pieces in gentle S-shaped rivers.",
        applies: |summary| summary.flow >= RIVER_FLOW_MIN,
    },
    VisualRule {
        id: "height_variation",
        name: "Height Variation",
        description: "Stand long items upright in a glass or jar to add height.",
        directive: "Long items stand upright in a short glass to add height and depth.",
        applies: |summary| summary.has_long_items,
    },
    VisualRule {
        id: "color_balance",
        name: "Color Balance",
        description: "Alternate warm and cool colored items so no color clumps together.",
        directive: "Warm and cool colors alternate around the board so no single color clumps together.",
        applies: |summary| summary.has_warm && summary.has_cool,
    },
    VisualRule {
        id: "fill_the_gaps",
        name: "Fill the Gaps",
        description: "Tuck small accents into every empty pocket for an abundant look.",
        directive: "Small accents are tucked into every remaining gap for an abundant, finished look.",
        applies: |summary| summary.pop >= FILL_GAPS_POP_MIN || summary.filler > 0,
    },
    VisualRule {
        id: "negative_space",
        name: "Negative Space",
        description: "With only a few items, leave the board open and let each piece breathe.",
        directive: "Plenty of empty board is left visible so each piece has room to breathe.",
        applies: |summary| summary.total > 0 && summary.total <= NEGATIVE_SPACE_MAX,
    },
];

/// Every rule whose predicate holds, in table order.
pub fn applicable_rules(summary: &IngredientSummary) -> Vec<AppliedRule> {
    VISUAL_RULES
        .iter()
        .filter(|rule| (rule.applies)(summary))
        .map(VisualRule::to_applied)
        .collect()
}
