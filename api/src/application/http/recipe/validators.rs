use burmafoodie_core::domain::recipe::value_objects::Language;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[validate(length(max = 5000, message = "prompt must be at most 5000 characters"))]
    pub prompt: String,

    /// `data:<mime>;base64,<payload>` attachment.
    #[serde(default)]
    pub image_base64: Option<String>,

    #[serde(default)]
    pub language: Language,
}
