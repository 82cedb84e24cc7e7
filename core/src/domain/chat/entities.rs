use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::generate_uuid_v7, recipe::entities::ModelResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One entry in the conversation log.
///
/// Ids are creation-time ordered (uuid v7). A loading placeholder is always
/// eventually replaced in place by a terminal entry reusing its id; persisted
/// entries never carry `isLoading` or an `image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Data-URI attachment, present only transiently on user entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ModelResponse>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_loading: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: &str, image: Option<String>) -> Self {
        Self {
            id: generate_uuid_v7(),
            role: Role::User,
            text: (!text.is_empty()).then(|| text.to_string()),
            image,
            content: None,
            is_loading: false,
            created_at: Utc::now(),
        }
    }

    pub fn loading() -> Self {
        Self {
            id: generate_uuid_v7(),
            role: Role::Model,
            text: None,
            image: None,
            content: None,
            is_loading: true,
            created_at: Utc::now(),
        }
    }

    pub fn model(content: ModelResponse) -> Self {
        Self {
            id: generate_uuid_v7(),
            role: Role::Model,
            text: None,
            image: None,
            content: Some(content),
            is_loading: false,
            created_at: Utc::now(),
        }
    }
}

/// Copy of the history fit for durable storage: loading placeholders are
/// dropped and image payloads stripped.
pub fn sanitize_history(history: &[ChatMessage]) -> Vec<ChatMessage> {
    history
        .iter()
        .filter(|message| !message.is_loading)
        .map(|message| ChatMessage {
            image: None,
            ..message.clone()
        })
        .collect()
}
