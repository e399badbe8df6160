pub mod classification;
pub mod collaborators;
pub mod common;
pub mod dinner;
pub mod ingredient;
pub mod plating;
pub mod prompt;
pub mod summary;
pub mod taxonomy;
pub mod template;
pub mod validation;
pub mod visual_rules;
