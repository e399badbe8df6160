use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::template::entities::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Large focal piece the rest of the board is composed around.
    Anchor,
    /// Movement or base items: crackers, bread, cured meat, crudités.
    Flow,
    /// Small accents for colour and texture.
    Pop,
    /// Default for anything the taxonomy does not know.
    Filler,
    Special,
}

impl Role {
    /// Bucket order used by the classifier. Earlier roles win overlaps.
    pub const SCAN_ORDER: [Role; 4] = [Role::Anchor, Role::Flow, Role::Pop, Role::Special];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SoftCheese,
    HardCheese,
    BlueCheese,
    Dip,
    CuredMeat,
    Cracker,
    Bread,
    Chip,
    Vegetable,
    Fruit,
    Berry,
    Nut,
    Olive,
    Pickle,
    Herb,
    Condiment,
    Sweet,
    Pizza,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Warm,
    Cool,
}

/// Shape and serving flags carried by a taxonomy entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct IngredientFlags {
    pub large: bool,
    pub small_round: bool,
    pub spreadable: bool,
    pub long: bool,
    pub needs_container: bool,
}

impl IngredientFlags {
    pub const NONE: Self = Self {
        large: false,
        small_round: false,
        spreadable: false,
        long: false,
        needs_container: false,
    };

    pub const fn with_large(mut self) -> Self {
        self.large = true;
        self
    }

    pub const fn with_small_round(mut self) -> Self {
        self.small_round = true;
        self
    }

    pub const fn with_spreadable(mut self) -> Self {
        self.spreadable = true;
        self
    }

    pub const fn with_long(mut self) -> Self {
        self.long = true;
        self
    }

    pub const fn with_container(mut self) -> Self {
        self.needs_container = true;
        self
    }
}

/// A taxonomy record. Synonyms are lowercase and matched against tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientEntry {
    pub name: &'static str,
    pub synonyms: &'static [&'static str],
    pub role: Role,
    pub category: Category,
    pub flags: IngredientFlags,
    pub tone: Option<Tone>,
}

/// Returned by the classifier when nothing in the taxonomy matches.
pub const UNKNOWN_ENTRY: IngredientEntry = IngredientEntry {
    name: "Unknown",
    synonyms: &[],
    role: Role::Filler,
    category: Category::Unknown,
    flags: IngredientFlags::NONE,
    tone: None,
};

/// A curated non-food noun with its one fixed comeback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnarkNoun {
    pub noun: &'static str,
    pub line: &'static str,
}

/// A word that is food only in some specific forms ("ice" vs "ice cream").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AmbiguousItem {
    pub word: &'static str,
    pub question: &'static str,
    pub valid_forms: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NonFoodFamily {
    Object,
    BodyPart,
    AbstractConcept,
    DangerousMaterial,
}

impl NonFoodFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            NonFoodFamily::Object => "object",
            NonFoodFamily::BodyPart => "body_part",
            NonFoodFamily::AbstractConcept => "abstract_concept",
            NonFoodFamily::DangerousMaterial => "dangerous_material",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonFoodPatterns {
    pub family: NonFoodFamily,
    pub words: &'static [&'static str],
    pub responses: &'static [&'static str],
}

/// Pre-written creative content for a known ingredient combination.
/// `key` is the canonical form: sorted, deduplicated, comma-joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuratedDinner {
    pub key: &'static str,
    pub name: &'static str,
    pub tip: &'static str,
    pub template: TemplateId,
}
