//! Error types for running blueprints.

use oxide_schema_core::SchemaError;

/// Errors that can occur while compiling or executing a blueprint.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The blueprint could not be compiled.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Database error while executing a statement.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A table-existence check was requested without a database name.
    #[error("No database configured for table lookups")]
    DatabaseNotConfigured,

    /// No connection URL was configured.
    #[error("No connection URL configured")]
    MissingConnection,
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, Error>;
