use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::taxonomy::{Category, IngredientEntry, IngredientFlags, Role, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The token contains one of the entry's synonyms.
    Substring,
    /// Within the bounded edit distance of a synonym.
    Fuzzy,
    Unknown,
}

/// A token bound to exactly one taxonomy entry, or to the unknown filler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassifiedIngredient {
    pub original: String,
    pub display_name: String,
    pub role: Role,
    pub category: Category,
    pub flags: IngredientFlags,
    pub tone: Option<Tone>,
    pub match_kind: MatchKind,
}

impl ClassifiedIngredient {
    pub fn from_entry(original: &str, entry: &IngredientEntry, match_kind: MatchKind) -> Self {
        Self {
            original: original.to_string(),
            display_name: entry.name.to_string(),
            role: entry.role,
            category: entry.category,
            flags: entry.flags,
            tone: entry.tone,
            match_kind,
        }
    }

    pub fn is_known(&self) -> bool {
        self.match_kind != MatchKind::Unknown
    }
}
