use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use validator::Validate;

use burmafoodie_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidImageData(_) => ApiError::BadRequest(
                "The attached image could not be read. Please send it as a base64 data URI."
                    .to_string(),
            ),
            CoreError::EmptyQuery => {
                ApiError::BadRequest("Please provide a dish name or a photo.".to_string())
            }
            CoreError::MissingApiKey => ApiError::InternalServerError(
                "The server is not configured correctly. Please try again later.".to_string(),
            ),
            CoreError::EmptyModelReply => ApiError::InternalServerError(
                "Sorry, I received an empty response from the AI. Please try again.".to_string(),
            ),
            CoreError::MalformedModelReply(_) => ApiError::InternalServerError(
                "Sorry, I could not read the AI's response. Please try again.".to_string(),
            ),
            CoreError::ExternalServiceError(_) | CoreError::StorageError(_) => {
                ApiError::InternalServerError(
                    "Sorry, the server encountered an error. Please try again.".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Error bodies use the same discriminated shape as the model's own
        // error variant, so clients switch on responseType uniformly.
        let body = Json(json!({ "responseType": "error", "error": message }));
        (status, body).into_response()
    }
}

/// Json extractor that also runs the payload's `validator` checks.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
