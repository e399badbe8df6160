use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::summary::IngredientSummary;

/// A styling directive that fires whenever its predicate holds.
#[derive(Debug, Clone, Copy)]
pub struct VisualRule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Sentence handed to the prompt builder.
    pub directive: &'static str,
    pub applies: fn(&IngredientSummary) -> bool,
}

impl VisualRule {
    pub fn to_applied(&self) -> AppliedRule {
        AppliedRule {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            directive: self.directive.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppliedRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub directive: String,
}
