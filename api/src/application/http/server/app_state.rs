use std::sync::Arc;

use boardsmith_core::application::BoardsmithService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BoardsmithService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BoardsmithService) -> Self {
        Self { args, service }
    }
}
