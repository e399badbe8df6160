use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod ports;
pub mod services;

pub const DEFAULT_MAX_ITEMS: usize = 12;
pub const DEFAULT_MIN_PROMPT_LENGTH: usize = 200;
pub const DEFAULT_SCORE_FLOOR: u8 = 65;

#[derive(Clone, Debug)]
pub struct BoardsmithConfig {
    pub llm: LLMConfig,
    pub plating: PlatingConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// No key means every collaborator call falls back to the local engine.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_image_model: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatingConfig {
    /// Upper bound on parsed items; also bounds the dinner subset search.
    pub max_items: usize,
    pub min_prompt_length: usize,
    pub score_floor: u8,
}

impl Default for PlatingConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            min_prompt_length: DEFAULT_MIN_PROMPT_LENGTH,
            score_floor: DEFAULT_SCORE_FLOOR,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
