use crate::domain::recipe::ports::LLMClient;

/// Aggregate service holding the injected adapters the domain impls run on.
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
