use utoipa::OpenApi;

use crate::application::http::recipe::router::RecipeApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BurmaFoodie API"
    )
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    // The derive macro rejects an empty nest path, so nest at runtime to
    // merge the recipe paths at the document root.
    ApiDoc::openapi().nest("", RecipeApiDoc::openapi())
}
