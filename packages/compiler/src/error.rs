//! Compiler Errors
//!
//! Construction, render and configuration failures of the script compiler.

use thiserror::Error;

/// An error raised while building a script tree, rendering it, or loading
/// the compiler configuration.
#[derive(Debug, Error)]
pub enum CompilerError {
    /// An identifier, parameter or callee was given an empty name.
    #[error("identifier name must not be empty")]
    EmptyIdentifier,

    /// A host value could not be represented as a structured literal.
    #[error("could not encode value: {message}")]
    Encoding { message: String },

    /// A template placeholder has no bound variable.
    #[error("unresolved template variable `{name}`")]
    UnresolvedVariable { name: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CompilerError {
    pub fn encoding(message: impl Into<String>) -> Self {
        CompilerError::Encoding {
            message: message.into(),
        }
    }

    pub fn unresolved_variable(name: impl Into<String>) -> Self {
        CompilerError::UnresolvedVariable { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, CompilerError>;
