use reqwest::Client;
use serde::Serialize;

use crate::domain::{
    chat::ports::RecipeGateway,
    common::entities::app_errors::CoreError,
    recipe::{entities::ModelResponse, value_objects::Language},
};

/// Posts chat turns to the recipe endpoint and decodes the discriminated
/// reply. Error bodies carry the same `responseType` shape as success
/// bodies, so every status decodes through `ModelResponse`.
#[derive(Debug, Clone)]
pub struct HttpRecipeGateway {
    endpoint: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRequestBody {
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_base64: Option<String>,
    language: Language,
}

impl HttpRecipeGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

impl RecipeGateway for HttpRecipeGateway {
    async fn fetch_recipe(
        &self,
        prompt: String,
        image: Option<String>,
        language: Language,
    ) -> Result<ModelResponse, CoreError> {
        let body = RecipeRequestBody {
            prompt,
            image_base64: image,
            language,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("recipe request failed: {}", e);
                CoreError::ExternalServiceError(format!("recipe request failed: {}", e))
            })?;

        response.json::<ModelResponse>().await.map_err(|e| {
            tracing::error!("failed to decode recipe response: {}", e);
            CoreError::ExternalServiceError(format!("failed to decode recipe response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_wire_contract() {
        let body = RecipeRequestBody {
            prompt: "Provide the recipe for: Mohinga".to_string(),
            image_base64: Some("data:image/jpeg;base64,AAAA".to_string()),
            language: Language::My,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["prompt"], "Provide the recipe for: Mohinga");
        assert_eq!(json["imageBase64"], "data:image/jpeg;base64,AAAA");
        assert_eq!(json["language"], "my");
    }

    #[test]
    fn image_field_is_omitted_when_absent() {
        let body = RecipeRequestBody {
            prompt: "Mohinga".to_string(),
            image_base64: None,
            language: Language::En,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("imageBase64").is_none());
    }
}
