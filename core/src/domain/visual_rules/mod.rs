pub mod entities;
pub mod services;

pub use entities::{AppliedRule, VisualRule};
pub use services::{VISUAL_RULES, applicable_rules};
