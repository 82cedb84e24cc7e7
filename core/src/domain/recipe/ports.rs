use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::ModelResponse,
        value_objects::{ImagePayload, RecipeQuery},
    },
};

/// Client port for the hosted model capability. Implementations return the
/// model's raw text reply; interpretation happens in the service layer.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        system_instruction: String,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        system_instruction: String,
        prompt: String,
        image: ImagePayload,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait turning one user query into a typed model response.
pub trait RecipeService: Send + Sync {
    fn fetch_recipe(
        &self,
        query: RecipeQuery,
    ) -> impl Future<Output = Result<ModelResponse, CoreError>> + Send;
}
