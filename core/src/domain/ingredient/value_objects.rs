use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A normalized ingredient: lowercase, trimmed, filler-stripped, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ParsedToken(String);

impl ParsedToken {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParsedToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParsedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedIngredients {
    /// Unique tokens in first-occurrence order, at most the configured cap.
    pub tokens: Vec<ParsedToken>,
    /// Distinct tokens seen before the cap was applied.
    pub original_count: usize,
}

impl ParsedIngredients {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// How many distinct tokens the cap dropped.
    pub fn dropped(&self) -> usize {
        self.original_count.saturating_sub(self.tokens.len())
    }

    pub fn as_strings(&self) -> Vec<String> {
        self.tokens.iter().map(|token| token.as_str().to_string()).collect()
    }
}
