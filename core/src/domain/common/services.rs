use std::sync::Arc;

use crate::domain::{common::PlatingConfig, taxonomy::Taxonomy};

/// Application service: the shared taxonomy, plating settings, the LLM
/// collaborator and the random source used for line selection.
#[derive(Clone)]
pub struct Service<LLM, RS> {
    pub(crate) taxonomy: Arc<Taxonomy>,
    pub(crate) config: PlatingConfig,
    pub(crate) llm_client: LLM,
    pub(crate) random: RS,
}

impl<LLM, RS> Service<LLM, RS> {
    pub fn new(taxonomy: Arc<Taxonomy>, config: PlatingConfig, llm_client: LLM, random: RS) -> Self {
        Self {
            taxonomy,
            config,
            llm_client,
            random,
        }
    }
}
