pub mod helpers;
pub mod parser;
pub mod value_objects;

pub use helpers::{contains_phrase, join_names, title_case};
pub use parser::{parse_ingredient_list, parse_ingredients};
pub use value_objects::{ParsedIngredients, ParsedToken};
