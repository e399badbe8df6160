use boardsmith_core::domain::{
    common::{
        BoardsmithConfig, DEFAULT_MAX_ITEMS, DEFAULT_MIN_PROMPT_LENGTH, DEFAULT_SCORE_FLOOR,
        LLMConfig, PlatingConfig,
    },
    dinner::SUBSET_SEARCH_LIMIT,
};
use clap::{Parser, builder::RangedU64ValueParser};

#[derive(Debug, Clone, Parser)]
#[command(name = "boardsmith-api", version, about)]
pub struct Args {
    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub plating: PlatingArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

impl From<Args> for BoardsmithConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.api_key.filter(|key| !key.trim().is_empty()),
                gemini_model: args.llm.model,
                gemini_image_model: args.llm.image_model,
            },
            plating: PlatingConfig {
                max_items: args.plating.max_items,
                min_prompt_length: args.plating.min_prompt_length,
                score_floor: args.plating.score_floor,
            },
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        name = "GEMINI_API_KEY",
        long_help = "Gemini API key. Without it the dinner writer, illustrator and judge fall back to local answers"
    )]
    pub api_key: Option<String>,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        name = "GEMINI_MODEL",
        default_value = "gemini-2.5-flash"
    )]
    pub model: String,

    #[arg(
        long = "gemini-image-model",
        env = "GEMINI_IMAGE_MODEL",
        name = "GEMINI_IMAGE_MODEL",
        default_value = "gemini-2.0-flash-preview-image-generation"
    )]
    pub image_model: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        name = "LOG_FILTER",
        default_value = "info",
        long_help = "The log filter to use\nhttps://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives"
    )]
    pub filter: String,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        name = "LOG_JSON",
        default_value_t = false,
        long_help = "Whether to log in JSON format"
    )]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PlatingArgs {
    #[arg(
        long = "plating-max-items",
        env = "PLATING_MAX_ITEMS",
        name = "PLATING_MAX_ITEMS",
        default_value_t = DEFAULT_MAX_ITEMS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=SUBSET_SEARCH_LIMIT as u64),
        long_help = "Maximum number of ingredients read from one request"
    )]
    pub max_items: usize,

    #[arg(
        long = "plating-min-prompt-length",
        env = "PLATING_MIN_PROMPT_LENGTH",
        name = "PLATING_MIN_PROMPT_LENGTH",
        default_value_t = DEFAULT_MIN_PROMPT_LENGTH
    )]
    pub min_prompt_length: usize,

    #[arg(
        long = "plating-score-floor",
        env = "PLATING_SCORE_FLOOR",
        name = "PLATING_SCORE_FLOOR",
        default_value_t = DEFAULT_SCORE_FLOOR,
        value_parser = clap::value_parser!(u8).range(0..=100),
        long_help = "Lowest score the plate judge may hand out"
    )]
    pub score_floor: u8,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        name = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "server-host",
        env = "SERVER_HOST",
        name = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        long = "server-port",
        env = "SERVER_PORT",
        name = "SERVER_PORT",
        default_value_t = 3333
    )]
    pub port: u16,

    #[arg(
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        name = "SERVER_ROOT_PATH",
        default_value = ""
    )]
    pub root_path: String,
}
