//! Fluent table blueprints compiled to MySQL DDL.
//!
//! `oxide-schema-core` turns a description of a table into the exact
//! statements needed to create or alter it:
//!
//! - **Blueprint** - collects columns and commands for one table
//! - **Column** - a typed column definition with chainable modifiers
//! - **Command** - one structural operation (create, add, rename, index, ...)
//! - **Grammar** - renders each command as one MySQL statement
//!
//! The crate performs no I/O. Running the statements is left to the caller
//! (see the `oxide-schema` crate).
//!
//! # Example
//!
//! ```rust
//! use oxide_schema_core::prelude::*;
//!
//! let mut table = Blueprint::new("users", SchemaConfig::default());
//! table.drop_column(["age", "account"]);
//! table.string("name", Some(30)).default("a").comment("姓名").change();
//!
//! let sql = table.to_sql(&Grammar::new()).unwrap();
//! assert_eq!(
//!     sql,
//!     vec![
//!         "alter table `users` drop `age`, drop `account`",
//!         "alter table `users` modify `name` varchar(30) not null default 'a' comment '姓名'",
//!     ]
//! );
//! ```

pub mod blueprint;
pub mod column;
pub mod command;
pub mod config;
pub mod error;
pub mod grammar;

pub use blueprint::{unique_statements, Blueprint};
pub use column::{Column, ColumnAttributes, ColumnType, DefaultValue};
pub use command::{Command, CommandAttributes, CommandKind};
pub use config::SchemaConfig;
pub use error::{Result, SchemaError};
pub use grammar::{CompileFn, Grammar};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::blueprint::Blueprint;
    pub use crate::column::{Column, ColumnType, DefaultValue};
    pub use crate::command::{Command, CommandKind};
    pub use crate::config::SchemaConfig;
    pub use crate::error::{Result, SchemaError};
    pub use crate::grammar::Grammar;
}
