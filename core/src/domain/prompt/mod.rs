pub mod services;

pub use services::build_prompt;
