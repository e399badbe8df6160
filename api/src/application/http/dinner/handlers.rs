pub mod suggest_dinner;
