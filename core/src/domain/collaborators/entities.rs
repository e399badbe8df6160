use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name, affirmation and tip written by the text collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DinnerCopy {
    pub name: String,
    pub validation: String,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// What the image collaborator produced, or the local stand-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Illustration {
    Generated {
        mime_type: String,
        /// Base64 encoded image bytes.
        data: String,
    },
    Placeholder {
        svg: String,
    },
}

/// Context handed to the vision collaborator alongside the photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeContext {
    pub dinner_name: String,
    pub ingredients: String,
    pub rules_applied: Vec<String>,
}

/// Verdict as the vision collaborator returns it, before clamping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPlateVerdict {
    pub score: f64,
    pub rank: String,
    pub compliment: String,
    pub sticker: String,
    #[serde(default)]
    pub improvement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlateVerdict {
    /// Always within `[score_floor, 100]`.
    pub score: u8,
    pub rank: String,
    pub compliment: String,
    pub sticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement: Option<String>,
}
