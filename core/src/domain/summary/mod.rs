pub mod entities;
pub mod services;

pub use entities::IngredientSummary;
pub use services::summarize;
