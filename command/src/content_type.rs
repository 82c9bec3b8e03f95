use tracing::warn;

use crate::{CommandConfig, CommandError};

/// Fails unless `content_type` is one the command may edit.
///
/// Runs once per invocation, before any selection is looked at.
pub fn ensure_supported(content_type: &str, config: &CommandConfig) -> Result<(), CommandError> {
    if config.supports(content_type) {
        return Ok(());
    }

    warn!(content_type, "refusing to convert unsupported content type");
    Err(CommandError::UnsupportedContentType {
        content_type: content_type.to_string(),
    })
}
