pub mod llm;
pub mod random;
