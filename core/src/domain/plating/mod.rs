pub mod entities;
pub mod pipeline;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use pipeline::{EMPTY_INPUT_MESSAGE, plate_ingredient_list, plate_ingredients, plate_parsed};
pub use ports::*;
pub use value_objects::*;
