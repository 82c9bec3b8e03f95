use serde::{Deserialize, Serialize};

use crate::CommandError;

/// Uniform type identifier of Swift source files.
pub const SWIFT_SOURCE: &str = "public.swift-source";
/// Uniform type identifier of playground documents.
pub const PLAYGROUND: &str = "com.apple.dt.playground";

/// Configuration knobs for [`crate::ConvertCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Content types the command agrees to edit.
    pub supported_content_types: Vec<String>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            supported_content_types: vec![SWIFT_SOURCE.to_string(), PLAYGROUND.to_string()],
        }
    }
}

impl CommandConfig {
    /// Reads a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CommandError> {
        serde_json::from_str(json).map_err(|e| CommandError::InvalidConfig(e.to_string()))
    }

    pub fn supports(&self, content_type: &str) -> bool {
        self.supported_content_types
            .iter()
            .any(|supported| supported == content_type)
    }
}
