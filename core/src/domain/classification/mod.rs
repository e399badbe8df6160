pub mod entities;
pub mod helpers;
pub mod services;

pub use entities::*;
pub use helpers::edit_distance;
pub use services::{classify, classify_all};
