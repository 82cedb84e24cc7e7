use crate::{
    domain::common::{RecipeChatConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type RecipeChatService = Service<GeminiLLMClient>;

/// Wires configuration into the concrete service the API runs on.
pub fn create_service(config: RecipeChatConfig) -> RecipeChatService {
    Service::new(GeminiLLMClient::new(config.llm))
}
