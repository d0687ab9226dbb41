//! Compiler Configuration
//!
//! Settings shared by the generator, the joiner and the JSON serializer.

use crate::error::{CompilerError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The default size to initialize the render buffer with
pub const DEFAULT_BUFFER_SIZE: usize = 256;

/// The text emitted for an absent top-level structured value
pub const DEFAULT_NULL_PLACEHOLDER: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CompilerConfig {
    /// Initial capacity of the render buffer
    pub initial_capacity: usize,
    /// Emitted by the serializer in place of an absent value
    pub null_placeholder: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            initial_capacity: DEFAULT_BUFFER_SIZE,
            null_placeholder: DEFAULT_NULL_PLACEHOLDER.to_string(),
        }
    }
}

impl CompilerConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: CompilerConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.null_placeholder.is_empty() {
            return Err(CompilerError::Config(
                "nullPlaceholder must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
