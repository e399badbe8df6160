pub mod entities;
pub mod services;

pub use entities::*;
pub use services::{CHAOS_THRESHOLD, detect_special_cases, select_template};
