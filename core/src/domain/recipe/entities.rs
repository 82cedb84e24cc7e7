use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Discriminated model reply. Every consumer switches on the `responseType`
/// tag; exactly one variant is populated per round trip. Field names and tag
/// values are fixed English identifiers regardless of the response language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "responseType", rename_all = "camelCase")]
pub enum ModelResponse {
    #[serde(rename_all = "camelCase")]
    Recipe {
        dish_name: String,
        ingredients: Vec<Ingredient>,
        instructions: Vec<String>,
        calories: String,
    },
    /// Dish ideas for an ingredient list, at most three entries.
    Suggestions {
        heading: String,
        suggestions: Vec<SuggestedDish>,
    },
    Greeting {
        text: String,
    },
    Clarification {
        text: String,
    },
    /// The model's own refusal (unrecognized dish, non-food input). This is
    /// a normal, successful round trip, not a system failure.
    Error {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedDish {
    pub dish_name: String,
    pub description: String,
}
