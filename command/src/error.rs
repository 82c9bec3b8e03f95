use splice::EditError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unsupported content type `{content_type}`")]
    UnsupportedContentType { content_type: String },

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("invalid command config: {0}")]
    InvalidConfig(String),
}
