use axum::extract::State;

use burmafoodie_core::domain::recipe::{
    entities::ModelResponse,
    ports::RecipeService,
    value_objects::{ImagePayload, RecipeQuery},
};

use crate::application::http::{
    recipe::validators::RecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/api/recipe",
    tag = "recipe",
    summary = "Resolve one recipe-chat turn",
    description = "Sends the prompt (and optional photo) to the model and returns one discriminated ModelResponse variant",
    responses(
        (status = 200, body = ModelResponse)
    ),
    request_body = RecipeRequest
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecipeRequest>,
) -> Result<Response<ModelResponse>, ApiError> {
    // Malformed image data is rejected before the model is ever called.
    let image = payload
        .image_base64
        .as_deref()
        .map(ImagePayload::from_data_uri)
        .transpose()?;

    let response = state
        .service
        .fetch_recipe(RecipeQuery {
            prompt: payload.prompt,
            image,
            language: payload.language,
        })
        .await?;

    Ok(Response::OK(response))
}
