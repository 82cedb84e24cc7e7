use std::sync::Arc;

use axum::{
    Json, Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION},
    },
    routing::get,
};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};

use burmafoodie_core::{application::create_service, domain::common::RecipeChatConfig};

use crate::application::http::{
    health::health_routes, recipe::router::recipe_routes, server::app_state::AppState,
};
use crate::args::Args;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = RecipeChatConfig::from(args.as_ref().clone());
    let service = create_service(config);
    Ok(AppState::new(args, service))
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION])
        .allow_credentials(true);

    let root_path = state.args.server.root_path.clone();
    let openapi = crate::application::http::server::openapi::openapi();

    let router = Router::new()
        .route(
            &format!("{root_path}/api-docs/openapi.json"),
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .merge(recipe_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::args::{LlmArgs, ServerArgs};

    fn test_args(api_key: &str) -> Arc<Args> {
        Arc::new(Args {
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 0,
                root_path: String::new(),
                allowed_origins: vec!["http://localhost:5173".to_string()],
            },
            llm: LlmArgs {
                gemini_api_key: api_key.to_string(),
                gemini_model: "gemini-1.5-flash".to_string(),
            },
        })
    }

    fn server(api_key: &str) -> TestServer {
        let state = state(test_args(api_key)).expect("state");
        TestServer::new(router(state).expect("router")).expect("server")
    }

    #[tokio::test]
    async fn non_post_requests_are_rejected() {
        let server = server("test-key");
        let response = server.get("/api/recipe").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn malformed_data_uri_is_a_bad_request() {
        let server = server("test-key");
        let response = server
            .post("/api/recipe")
            .json(&json!({ "prompt": "Mohinga", "imageBase64": "not-a-data-url" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["responseType"], "error");
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_credential_yields_a_generic_server_error() {
        let server = server("");
        let response = server
            .post("/api/recipe")
            .json(&json!({ "prompt": "Mohinga" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["responseType"], "error");
        let message = body["error"].as_str().unwrap();
        assert!(!message.is_empty());
        assert!(!message.to_lowercase().contains("key"));
    }

    #[tokio::test]
    async fn empty_submission_is_a_bad_request() {
        let server = server("test-key");
        let response = server
            .post("/api/recipe")
            .json(&json!({ "prompt": "   " }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["responseType"], "error");
    }

    #[tokio::test]
    async fn oversized_prompt_fails_validation() {
        let server = server("test-key");
        let response = server
            .post("/api/recipe")
            .json(&json!({ "prompt": "x".repeat(5001) }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["responseType"], "error");
    }

    #[tokio::test]
    async fn health_route_responds() {
        let server = server("test-key");
        let response = server.get("/health").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let server = server("test-key");
        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["paths"].get("/api/recipe").is_some());
    }
}
