use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::classification::ClassifiedIngredient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Low,
    High,
    /// Rejected until the caller says which form was meant.
    Clarification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerdictCategory {
    Dangerous,
    NonFood,
    Ambiguous,
    Unknown,
    Food,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub severity: Severity,
    pub category: VerdictCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub valid_forms: Vec<String>,
}

impl ValidationVerdict {
    pub fn food() -> Self {
        Self {
            valid: true,
            severity: Severity::None,
            category: VerdictCategory::Food,
            message: None,
            valid_forms: Vec::new(),
        }
    }

    pub fn unknown(message: String) -> Self {
        Self {
            valid: true,
            severity: Severity::Low,
            category: VerdictCategory::Unknown,
            message: Some(message),
            valid_forms: Vec::new(),
        }
    }

    pub fn rejected(severity: Severity, category: VerdictCategory, message: &str) -> Self {
        Self {
            valid: false,
            severity,
            category,
            message: Some(message.to_string()),
            valid_forms: Vec::new(),
        }
    }

    pub fn ambiguous(question: &str, valid_forms: &[&str]) -> Self {
        Self {
            valid: false,
            severity: Severity::Clarification,
            category: VerdictCategory::Ambiguous,
            message: Some(question.to_string()),
            valid_forms: valid_forms.iter().map(|form| form.to_string()).collect(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// One token with its verdict. Valid tokens carry the classification the
/// validator already computed so the pipeline does not classify twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedToken {
    pub token: String,
    pub verdict: ValidationVerdict,
    pub classified: Option<ClassifiedIngredient>,
}

/// Tokens partitioned by verdict, each bucket in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: Vec<ValidatedToken>,
    pub invalid: Vec<ValidatedToken>,
    pub ambiguous: Vec<ValidatedToken>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn has_usable(&self) -> bool {
        !self.valid.is_empty()
    }

    pub fn is_mixed(&self) -> bool {
        self.has_usable() && (!self.invalid.is_empty() || !self.ambiguous.is_empty())
    }

    pub fn usable_items(&self) -> Vec<String> {
        self.valid.iter().map(|item| item.token.clone()).collect()
    }

    pub fn classified(&self) -> Vec<ClassifiedIngredient> {
        self.valid
            .iter()
            .filter_map(|item| item.classified.clone())
            .collect()
    }

    pub fn first_rejection(&self) -> Option<&ValidatedToken> {
        self.invalid.first()
    }
}
