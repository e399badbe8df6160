use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    classification::ClassifiedIngredient,
    collaborators::Illustration,
    summary::IngredientSummary,
    template::{SelectionRule, TemplateId},
    validation::{Severity, ValidatedToken, VerdictCategory},
    visual_rules::AppliedRule,
};

/// A token the validator turned away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RejectedItem {
    pub item: String,
    pub severity: Severity,
    pub category: VerdictCategory,
    pub message: String,
}

impl From<&ValidatedToken> for RejectedItem {
    fn from(validated: &ValidatedToken) -> Self {
        Self {
            item: validated.token.clone(),
            severity: validated.verdict.severity,
            category: validated.verdict.category,
            message: validated.verdict.message().to_string(),
        }
    }
}

/// An ambiguous token held back until the caller picks a specific form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Clarification {
    pub item: String,
    pub question: String,
    pub valid_forms: Vec<String>,
}

impl From<&ValidatedToken> for Clarification {
    fn from(validated: &ValidatedToken) -> Self {
        Self {
            item: validated.token.clone(),
            question: validated.verdict.message().to_string(),
            valid_forms: validated.verdict.valid_forms.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlatingResult {
    pub id: Uuid,
    pub input: String,
    pub items: Vec<ClassifiedIngredient>,
    pub summary: IngredientSummary,
    pub template: TemplateId,
    pub template_name: String,
    pub selection_rule: SelectionRule,
    pub rationale: String,
    pub rules_applied: Vec<String>,
    pub directives: Vec<AppliedRule>,
    pub prompt: String,
    /// Display names shown on the board.
    pub primary_items: Vec<String>,
    /// Display names served on the side when the board is over capacity.
    pub overflow: Vec<String>,
    pub usable_items: Vec<String>,
    pub rejected_items: Vec<String>,
    pub rejections: Vec<RejectedItem>,
    pub clarifications: Vec<Clarification>,
    pub warnings: Vec<String>,
    /// Items beyond the item cap, never looked at.
    pub dropped_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Result of one plating request. Every variant is a normal answer; none of
/// them is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlatingOutcome {
    Plated(PlatingResult),
    /// Plated from the usable subset; the rest is reported alongside.
    Mixed(PlatingResult),
    Empty {
        message: String,
    },
    AllGarbage {
        message: String,
        rejected_items: Vec<String>,
        rejections: Vec<RejectedItem>,
        /// Ambiguous items seen next to the hard rejections.
        clarifications: Vec<Clarification>,
    },
    NeedsClarification {
        message: String,
        clarifications: Vec<Clarification>,
        rejected_items: Vec<String>,
        rejections: Vec<RejectedItem>,
    },
}

impl PlatingOutcome {
    pub fn is_success(&self) -> bool {
        self.result().is_some()
    }

    pub fn result(&self) -> Option<&PlatingResult> {
        match self {
            PlatingOutcome::Plated(result) | PlatingOutcome::Mixed(result) => Some(result),
            _ => None,
        }
    }

    /// User-facing message for the outcomes that did not plate anything.
    pub fn message(&self) -> Option<&str> {
        match self {
            PlatingOutcome::Empty { message }
            | PlatingOutcome::AllGarbage { message, .. }
            | PlatingOutcome::NeedsClarification { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PlatingOutcome::Plated(_) => "plated",
            PlatingOutcome::Mixed(_) => "mixed",
            PlatingOutcome::Empty { .. } => "empty",
            PlatingOutcome::AllGarbage { .. } => "all_garbage",
            PlatingOutcome::NeedsClarification { .. } => "needs_clarification",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlateIllustration {
    pub template: TemplateId,
    pub prompt: String,
    pub primary_items: Vec<String>,
    pub illustration: Illustration,
}
