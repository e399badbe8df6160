use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::template::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// The full canonical key is curated.
    Exact,
    /// The largest curated subset of the items.
    Subset,
    /// A curated key containing one of the items.
    Partial,
    Default,
    /// Written by the text collaborator.
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DinnerMatch {
    pub name: String,
    pub tip: String,
    pub template: TemplateId,
    pub validation: String,
    pub source: MatchSource,
    /// Curated key that matched, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<String>,
}
