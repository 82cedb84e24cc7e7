use std::future::Future;

use crate::domain::{
    chat::entities::ChatMessage,
    common::entities::app_errors::CoreError,
    recipe::{entities::ModelResponse, value_objects::Language},
};

/// The single request/response call between the chat client and the recipe
/// endpoint. The image travels as the raw data URI the UI captured.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeGateway: Send + Sync {
    fn fetch_recipe(
        &self,
        prompt: String,
        image: Option<String>,
        language: Language,
    ) -> impl Future<Output = Result<ModelResponse, CoreError>> + Send;
}

/// Durable local record of the sanitized chat log. Best-effort: failures are
/// reported but must never corrupt the in-memory history.
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Result<Vec<ChatMessage>, CoreError>;

    fn save(&self, history: &[ChatMessage]) -> Result<(), CoreError>;

    fn clear(&self) -> Result<(), CoreError>;
}
