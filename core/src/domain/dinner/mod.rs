pub mod entities;
pub mod services;

pub use entities::{DinnerMatch, MatchSource};
pub use services::{SUBSET_SEARCH_LIMIT, canonical_key, match_dinner, match_parsed_dinner};
