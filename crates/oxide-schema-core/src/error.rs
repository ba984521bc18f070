//! Error types for blueprint compilation.

use crate::command::CommandKind;

/// Errors that can occur while compiling a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The grammar has no compile routine registered for a command.
    #[error("No compile routine registered for command '{0}'")]
    UnknownCommand(CommandKind),

    /// A column or command is missing an attribute its kind requires.
    #[error("'{owner}' is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Column name, or command name for command attributes.
        owner: String,
        /// The attribute that is missing.
        attribute: &'static str,
    },

    /// A column type keyword outside the supported set.
    #[error("Unknown column type: {0}")]
    UnknownColumnType(String),
}

impl SchemaError {
    pub(crate) fn missing(owner: impl Into<String>, attribute: &'static str) -> Self {
        Self::MissingAttribute {
            owner: owner.into(),
            attribute,
        }
    }
}

/// Result type for blueprint compilation.
pub type Result<T> = std::result::Result<T, SchemaError>;
