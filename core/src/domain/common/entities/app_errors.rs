use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("model credential is not configured")]
    MissingApiKey,

    #[error("invalid image data: {0}")]
    InvalidImageData(String),

    #[error("empty request")]
    EmptyQuery,

    #[error("model returned an empty reply")]
    EmptyModelReply,

    #[error("malformed model reply: {0}")]
    MalformedModelReply(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("storage error: {0}")]
    StorageError(String),
}
