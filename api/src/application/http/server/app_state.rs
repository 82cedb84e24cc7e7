use std::sync::Arc;

use burmafoodie_core::application::RecipeChatService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<RecipeChatService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeChatService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
