use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::ModelResponse,
        normalize::clean_model_reply,
        ports::{LLMClient, RecipeService},
        prompt::system_instruction,
        value_objects::RecipeQuery,
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn fetch_recipe(&self, query: RecipeQuery) -> Result<ModelResponse, CoreError> {
        // 1. Reject empty submissions
        if query.prompt.trim().is_empty() && query.image.is_none() {
            return Err(CoreError::EmptyQuery);
        }

        // 2. Fixed persona + output contract for the requested language
        let instruction = system_instruction(query.language);

        // 3. Call the model, exactly once per request
        let raw = match query.image {
            Some(image) => {
                self.llm_client
                    .generate_with_image(instruction, query.prompt, image)
                    .await?
            }
            None => {
                self.llm_client
                    .generate_with_text(instruction, query.prompt)
                    .await?
            }
        };

        // 4. An empty reply is a failure, not a parse attempt
        if raw.trim().is_empty() {
            return Err(CoreError::EmptyModelReply);
        }

        // 5. Repair near-miss JSON, then parse into the tagged union
        let cleaned = clean_model_reply(&raw);
        let response: ModelResponse = serde_json::from_str(&cleaned).map_err(|e| {
            tracing::error!(error = %e, reply = %cleaned, "model reply did not match the response contract");
            CoreError::MalformedModelReply(e.to_string())
        })?;

        Ok(response)
    }
}
