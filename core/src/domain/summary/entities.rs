use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate counts and flags over one classified ingredient list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct IngredientSummary {
    pub total: usize,
    pub anchors: usize,
    pub flow: usize,
    pub pop: usize,
    pub filler: usize,
    pub special: usize,
    pub small_round_count: usize,
    pub has_large: bool,
    pub has_small_round: bool,
    pub needs_container: bool,
    pub has_spreadable: bool,
    pub has_long_items: bool,
    pub has_warm: bool,
    pub has_cool: bool,
}
