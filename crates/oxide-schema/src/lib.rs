//! Run table blueprints against MySQL.
//!
//! `oxide-schema` wraps the compiler from `oxide-schema-core` in a
//! [`Schema`] facade. Each facade operation builds a blueprint, compiles it
//! and hands the statements, in order, to a [`StatementExecutor`].
//!
//! # Example
//!
//! ```rust,ignore
//! use oxide_schema::prelude::*;
//!
//! let config = SchemaConfig::default()
//!     .with_url("mysql://root@localhost/app")
//!     .with_database("app");
//! let schema = Schema::connect(config).await?;
//!
//! schema
//!     .create("users", |t| {
//!         t.id();
//!         t.string("email", None).unique();
//!         t.timestamps();
//!     })
//!     .await?;
//!
//! assert!(schema.has_table("users").await?);
//! ```

pub mod error;
pub mod executor;
pub mod schema;

pub use error::{Error, Result};
pub use executor::{MySqlExecutor, StatementExecutor};
pub use schema::Schema;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::executor::{MySqlExecutor, StatementExecutor};
    pub use crate::schema::Schema;
    pub use oxide_schema_core::prelude::*;
}
