pub mod entities;
pub mod services;

pub use entities::*;
pub use services::{validate_token, validate_tokens};
