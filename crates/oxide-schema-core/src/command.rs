//! Structural commands accumulated by a blueprint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a structural command.
///
/// Each kind compiles to exactly one statement, provided the grammar has a
/// routine registered for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandKind {
    Create,
    Add,
    Change,
    Drop,
    DropColumn,
    Rename,
    RenameColumn,
    DropIfExists,
    Primary,
    Unique,
    Index,
    TableComment,
    DropPrimary,
    DropUnique,
    DropIndex,
}

impl CommandKind {
    /// Returns the command name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Add => "add",
            Self::Change => "change",
            Self::Drop => "drop",
            Self::DropColumn => "dropColumn",
            Self::Rename => "rename",
            Self::RenameColumn => "renameColumn",
            Self::DropIfExists => "dropIfExists",
            Self::Primary => "primary",
            Self::Unique => "unique",
            Self::Index => "index",
            Self::TableComment => "tableComment",
            Self::DropPrimary => "dropPrimary",
            Self::DropUnique => "dropUnique",
            Self::DropIndex => "dropIndex",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of a command. Each kind reads only the fields it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandAttributes {
    /// Derived index name for key commands.
    pub index: Option<String>,
    /// Index algorithm (e.g. `btree`, `hash`).
    pub algorithm: Option<String>,
    /// Columns covered by key and drop-column commands.
    pub columns: Vec<String>,
    /// Table comment.
    pub comment: Option<String>,
    /// Rename target, without prefix.
    pub to: Option<String>,
}

/// A structural operation on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub kind: CommandKind,
    pub attributes: CommandAttributes,
}

impl Command {
    /// Creates a command without parameters.
    #[must_use]
    pub fn new(kind: CommandKind) -> Self {
        Self::with_attributes(kind, CommandAttributes::default())
    }

    /// Creates a command with the given parameters.
    #[must_use]
    pub const fn with_attributes(kind: CommandKind, attributes: CommandAttributes) -> Self {
        Self { kind, attributes }
    }
}
