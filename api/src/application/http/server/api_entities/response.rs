use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Typed success responses. Bodies serialize without an envelope so clients
/// can discriminate on the payload itself.
pub enum Response<T: Serialize> {
    OK(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
        }
    }
}
