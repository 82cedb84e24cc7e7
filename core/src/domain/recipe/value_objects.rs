use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Response language requested by the client. Carried explicitly on every
/// request rather than inferred by the model from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
    My,
    Zh,
}

impl Language {
    /// Name used inside the system instruction.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Th => "Thai (ภาษาไทย)",
            Language::My => "Burmese (မြန်မာဘာသာ)",
            Language::Zh => "Chinese (中文)",
        }
    }
}

/// Decoded inline image attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImagePayload {
    /// Parses a `data:<mime>;base64,<payload>` URI. Anything else is a
    /// client error, raised before the model is ever involved.
    pub fn from_data_uri(uri: &str) -> Result<Self, CoreError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::InvalidImageData("missing data: prefix".to_string()))?;

        let (mime_type, encoded) = rest
            .split_once(";base64,")
            .ok_or_else(|| CoreError::InvalidImageData("missing ;base64, marker".to_string()))?;

        if mime_type.is_empty() {
            return Err(CoreError::InvalidImageData("empty mime type".to_string()));
        }

        let data = general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| CoreError::InvalidImageData(format!("invalid base64 payload: {e}")))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data,
        })
    }
}

/// One recipe-chat turn as seen by the request handler.
#[derive(Debug, Clone)]
pub struct RecipeQuery {
    pub prompt: String,
    pub image: Option<ImagePayload>,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_data_uri() {
        let encoded = general_purpose::STANDARD.encode(b"fake-jpeg-bytes");
        let uri = format!("data:image/jpeg;base64,{encoded}");

        let image = ImagePayload::from_data_uri(&uri).unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, b"fake-jpeg-bytes");
    }

    #[test]
    fn rejects_input_without_data_prefix() {
        let err = ImagePayload::from_data_uri("not-a-data-url").unwrap_err();
        assert!(matches!(err, CoreError::InvalidImageData(_)));
    }

    #[test]
    fn rejects_uri_without_base64_marker() {
        let err = ImagePayload::from_data_uri("data:image/png,rawbytes").unwrap_err();
        assert!(matches!(err, CoreError::InvalidImageData(_)));
    }

    #[test]
    fn rejects_invalid_base64_payload() {
        let err = ImagePayload::from_data_uri("data:image/png;base64,@@@@").unwrap_err();
        assert!(matches!(err, CoreError::InvalidImageData(_)));
    }

    #[test]
    fn language_codes_match_the_client_locale_identifiers() {
        assert_eq!(serde_json::to_value(Language::My).unwrap(), "my");
        let parsed: Language = serde_json::from_str(r#""zh""#).unwrap();
        assert_eq!(parsed, Language::Zh);
        assert_eq!(Language::default(), Language::En);
    }
}
