use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::{ports::LLMClient, value_objects::ImagePayload},
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            client: Client::new(),
        }
    }

    fn request(&self, system_instruction: String, parts: Vec<Part>) -> GeminiRequest {
        GeminiRequest {
            system_instruction: Content {
                parts: vec![Part::Text {
                    text: system_instruction,
                }],
            },
            contents: vec![Content { parts }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        // Missing credential is a server misconfiguration; callers only ever
        // see a generic message for it.
        if self.api_key.is_empty() {
            tracing::error!("no Gemini API key configured");
            return Err(CoreError::MissingApiKey);
        }

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(CoreError::EmptyModelReply)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        system_instruction: String,
        prompt: String,
    ) -> Result<String, CoreError> {
        let request = self.request(system_instruction, vec![Part::Text { text: prompt }]);
        self.call_gemini_api(request).await
    }

    async fn generate_with_image(
        &self,
        system_instruction: String,
        prompt: String,
        image: ImagePayload,
    ) -> Result<String, CoreError> {
        // The inline image part precedes the text part.
        let parts = vec![
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type,
                    data: general_purpose::STANDARD.encode(&image.data),
                },
            },
            Part::Text { text: prompt },
        ];

        let request = self.request(system_instruction, parts);
        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::ports::LLMClient as _;

    fn client_without_key() -> GeminiLLMClient {
        GeminiLLMClient::new(LLMConfig {
            gemini_api_key: String::new(),
            gemini_model: "gemini-1.5-flash".to_string(),
        })
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_network_call() {
        let err = client_without_key()
            .generate_with_text("instruction".to_string(), "Mohinga".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::MissingApiKey));
    }

    #[test]
    fn request_body_puts_the_image_part_before_the_text_part() {
        let client = client_without_key();
        let parts = vec![
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: "image/jpeg".to_string(),
                    data: general_purpose::STANDARD.encode(b"bytes"),
                },
            },
            Part::Text {
                text: "prompt".to_string(),
            },
        ];

        let body = serde_json::to_value(client.request("instruction".to_string(), parts)).unwrap();
        assert_eq!(
            body["system_instruction"]["parts"][0]["text"],
            "instruction"
        );
        assert_eq!(
            body["contents"][0]["parts"][0]["inline_data"]["mime_type"],
            "image/jpeg"
        );
        assert_eq!(body["contents"][0]["parts"][1]["text"], "prompt");
        assert_eq!(
            body["generation_config"]["response_mime_type"],
            "application/json"
        );
    }
}
