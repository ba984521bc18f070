//! MySQL grammar.
//!
//! The grammar turns one blueprint command into one SQL statement. It holds
//! no state besides its dispatch table, which is filled once in
//! [`Grammar::new`], so a single instance can be shared across threads and
//! reused for any number of blueprints.
//!
//! Column definitions are rendered as the quoted name, the type fragment and
//! then the modifiers, always in this order:
//!
//! 1. `unsigned`
//! 2. `character set <charset>`
//! 3. `collate '<collation>'`
//! 4. `null` / `not null`
//! 5. `default '<value>'`
//! 6. `auto_increment primary key` (integer types only)
//! 7. `comment '<comment>'`

mod compile;

use std::collections::HashMap;
use std::fmt;

use crate::blueprint::Blueprint;
use crate::column::{Column, ColumnType};
use crate::command::{Command, CommandKind};
use crate::error::{Result, SchemaError};

const TABLE_EXISTS: &str = "select * from information_schema.tables \
    where table_schema = ? and table_name = ? and table_type = 'BASE TABLE'";

/// A compile routine for one command kind.
pub type CompileFn = fn(&Grammar, &Blueprint, &Command) -> Result<String>;

/// Stateless MySQL DDL compiler.
#[derive(Clone)]
pub struct Grammar {
    routines: HashMap<CommandKind, CompileFn>,
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.routines.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("Grammar").field("routines", &kinds).finish()
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar {
    /// Creates a grammar with a routine registered for every supported command.
    ///
    /// `renameColumn` has no routine; compiling it fails with
    /// [`SchemaError::UnknownCommand`].
    #[must_use]
    pub fn new() -> Self {
        let mut routines: HashMap<CommandKind, CompileFn> = HashMap::new();
        routines.insert(CommandKind::Create, Self::compile_create);
        routines.insert(CommandKind::Add, Self::compile_add);
        routines.insert(CommandKind::Change, Self::compile_change);
        routines.insert(CommandKind::Rename, Self::compile_rename);
        routines.insert(CommandKind::Primary, Self::compile_primary);
        routines.insert(CommandKind::Unique, Self::compile_unique);
        routines.insert(CommandKind::Index, Self::compile_index);
        routines.insert(CommandKind::Drop, Self::compile_drop);
        routines.insert(CommandKind::DropIfExists, Self::compile_drop_if_exists);
        routines.insert(CommandKind::DropColumn, Self::compile_drop_column);
        routines.insert(CommandKind::TableComment, Self::compile_table_comment);
        routines.insert(CommandKind::DropPrimary, Self::compile_drop_primary);
        routines.insert(CommandKind::DropUnique, Self::compile_drop_unique);
        routines.insert(CommandKind::DropIndex, Self::compile_drop_index);

        Self { routines }
    }

    /// Whether a routine is registered for `kind`.
    #[must_use]
    pub fn supports(&self, kind: CommandKind) -> bool {
        self.routines.contains_key(&kind)
    }

    /// Compiles a single command of `blueprint` into one statement.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownCommand`] when no routine is registered
    /// for the command kind, or the routine's own error.
    pub fn compile(&self, blueprint: &Blueprint, command: &Command) -> Result<String> {
        let routine = self
            .routines
            .get(&command.kind)
            .ok_or(SchemaError::UnknownCommand(command.kind))?;
        routine(self, blueprint, command)
    }

    /// Query checking whether a base table exists. Binds the database name,
    /// then the prefixed table name.
    #[must_use]
    pub const fn compile_table_exists(&self) -> &'static str {
        TABLE_EXISTS
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Renders the type fragment of a column.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingAttribute`] when the type needs a length,
    /// precision or value list the column does not carry.
    pub fn column_type(&self, column: &Column) -> Result<String> {
        let attrs = &column.attributes;
        let sql = match column.column_type {
            ColumnType::Char | ColumnType::Varchar => {
                let length = attrs
                    .length
                    .ok_or_else(|| SchemaError::missing(&column.name, "length"))?;
                format!("{}({})", column.column_type, length)
            }

            ColumnType::Float | ColumnType::Double | ColumnType::Decimal => {
                let total = attrs
                    .total
                    .ok_or_else(|| SchemaError::missing(&column.name, "total"))?;
                let places = attrs
                    .places
                    .ok_or_else(|| SchemaError::missing(&column.name, "places"))?;
                let keyword = if column.column_type == ColumnType::Decimal {
                    ColumnType::Decimal
                } else {
                    ColumnType::Double
                };
                format!("{keyword}({total}, {places})")
            }

            ColumnType::Enum | ColumnType::Set => {
                let allowed = attrs
                    .allowed
                    .as_ref()
                    .ok_or_else(|| SchemaError::missing(&column.name, "allowed"))?;
                format!("{}({})", column.column_type, quote_strings(allowed))
            }

            ColumnType::Uuid => format!("{}(36)", ColumnType::Char),
            ColumnType::Boolean => format!("{}(1)", ColumnType::TinyInt),

            ColumnType::TinyText
            | ColumnType::Text
            | ColumnType::MediumText
            | ColumnType::LongText
            | ColumnType::Int
            | ColumnType::TinyInt
            | ColumnType::SmallInt
            | ColumnType::MediumInt
            | ColumnType::BigInt
            | ColumnType::Json
            | ColumnType::Date
            | ColumnType::DateTime
            | ColumnType::Time
            | ColumnType::Timestamp
            | ColumnType::Year
            | ColumnType::Binary
            | ColumnType::Blob => column.column_type.keyword().to_string(),
        };
        Ok(sql)
    }

    /// Appends the column modifiers to `sql`, in their fixed order.
    #[must_use]
    pub fn add_modifiers(&self, mut sql: String, column: &Column) -> String {
        let attrs = &column.attributes;

        if attrs.unsigned {
            sql.push_str(" unsigned");
        }

        if let Some(charset) = &attrs.charset {
            sql.push_str(" character set ");
            sql.push_str(charset);
        }

        if let Some(collation) = &attrs.collation {
            sql.push_str(" collate '");
            sql.push_str(collation);
            sql.push('\'');
        }

        if attrs.nullable == Some(true) {
            sql.push_str(" null");
        } else {
            sql.push_str(" not null");
        }

        if let Some(default) = &attrs.default {
            sql.push_str(" default '");
            sql.push_str(&escape(&default.to_literal()));
            sql.push('\'');
        }

        if column.column_type.is_integer() && attrs.auto_increment {
            sql.push_str(" auto_increment primary key");
        }

        if let Some(comment) = attrs.comment.as_deref().filter(|c| !c.is_empty()) {
            sql.push_str(" comment '");
            sql.push_str(&escape(comment));
            sql.push('\'');
        }

        sql
    }

    /// Renders a full column definition: name, type and modifiers.
    ///
    /// # Errors
    ///
    /// Fails as [`Grammar::column_type`] does.
    pub fn column_definition(&self, column: &Column) -> Result<String> {
        let sql = format!("{} {}", self.wrap(&column.name), self.column_type(column)?);
        Ok(self.add_modifiers(sql, column))
    }

    fn column_definitions<'a>(
        &self,
        columns: impl Iterator<Item = &'a Column>,
    ) -> Result<Vec<String>> {
        columns.map(|c| self.column_definition(c)).collect()
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// Back-tick quotes an identifier.
    #[must_use]
    pub fn wrap(&self, value: &str) -> String {
        format!("`{value}`")
    }

    /// Quotes the prefixed table name of `blueprint`.
    #[must_use]
    pub fn wrap_table(&self, blueprint: &Blueprint) -> String {
        self.wrap(&blueprint.prefixed_table())
    }

    fn columnize(&self, columns: &[String]) -> String {
        columns
            .iter()
            .map(|c| self.wrap(c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Doubles single quotes for use inside a quoted string literal.
fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

fn quote_strings(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", escape(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnAttributes;
    use crate::config::SchemaConfig;

    fn grammar() -> Grammar {
        Grammar::new()
    }

    fn column(column_type: ColumnType, attributes: ColumnAttributes) -> Column {
        Column::new(column_type, "c", attributes)
    }

    fn plain(column_type: ColumnType) -> Column {
        column(column_type, ColumnAttributes::default())
    }

    #[test]
    fn test_type_names() {
        let g = grammar();
        let sized = ColumnAttributes {
            length: Some(20),
            ..ColumnAttributes::default()
        };
        let numeric = ColumnAttributes {
            total: Some(10),
            places: Some(2),
            ..ColumnAttributes::default()
        };
        let listed = ColumnAttributes {
            allowed: Some(vec!["a".into(), "b".into()]),
            ..ColumnAttributes::default()
        };

        let cases = [
            (column(ColumnType::Char, sized.clone()), "char(20)"),
            (column(ColumnType::Varchar, sized), "varchar(20)"),
            (column(ColumnType::Float, numeric.clone()), "double(10, 2)"),
            (column(ColumnType::Double, numeric.clone()), "double(10, 2)"),
            (column(ColumnType::Decimal, numeric), "decimal(10, 2)"),
            (column(ColumnType::Enum, listed.clone()), "enum('a', 'b')"),
            (column(ColumnType::Set, listed), "set('a', 'b')"),
            (plain(ColumnType::Uuid), "char(36)"),
            (plain(ColumnType::Boolean), "tinyint(1)"),
            (plain(ColumnType::MediumText), "mediumtext"),
            (plain(ColumnType::DateTime), "datetime"),
            (plain(ColumnType::Blob), "blob"),
        ];

        for (column, expected) in cases {
            assert_eq!(g.column_type(&column).unwrap(), expected);
        }
    }

    #[test]
    fn test_missing_length() {
        let err = grammar()
            .column_type(&column(ColumnType::Varchar, ColumnAttributes::default()))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingAttribute {
                owner: "c".to_string(),
                attribute: "length",
            }
        );
    }

    #[test]
    fn test_missing_places() {
        let attrs = ColumnAttributes {
            total: Some(8),
            ..ColumnAttributes::default()
        };
        let err = grammar()
            .column_type(&column(ColumnType::Decimal, attrs))
            .unwrap_err();
        assert!(err.to_string().contains("places"));
    }

    #[test]
    fn test_modifier_order() {
        let mut col = Column::new(ColumnType::BigInt, "id", ColumnAttributes::default());
        col.unsigned()
            .charset("utf8")
            .collation("utf8_bin")
            .nullable()
            .default(0)
            .auto_increment()
            .comment("key");

        assert_eq!(
            grammar().column_definition(&col).unwrap(),
            "`id` bigint unsigned character set utf8 collate 'utf8_bin' null default '0' \
             auto_increment primary key comment 'key'"
        );
    }

    #[test]
    fn test_auto_increment_only_on_integers() {
        let mut col = Column::new(
            ColumnType::Decimal,
            "amount",
            ColumnAttributes {
                total: Some(8),
                places: Some(2),
                ..ColumnAttributes::default()
            },
        );
        col.auto_increment();
        assert_eq!(
            grammar().column_definition(&col).unwrap(),
            "`amount` decimal(8, 2) not null"
        );
    }

    #[test]
    fn test_empty_default_and_comment() {
        let mut col = Column::new(ColumnType::Text, "bio", ColumnAttributes::default());
        col.default("").comment("");
        assert_eq!(
            grammar().column_definition(&col).unwrap(),
            "`bio` text not null default ''"
        );
    }

    #[test]
    fn test_quotes_in_literals_are_doubled() {
        let mut col = Column::new(ColumnType::Text, "motto", ColumnAttributes::default());
        col.default("it's").comment("owner's motto");
        assert_eq!(
            grammar().column_definition(&col).unwrap(),
            "`motto` text not null default 'it''s' comment 'owner''s motto'"
        );

        let listed = ColumnAttributes {
            allowed: Some(vec!["o'clock".into(), "noon".into()]),
            ..ColumnAttributes::default()
        };
        let col = column(ColumnType::Enum, listed);
        assert_eq!(
            grammar().column_type(&col).unwrap(),
            "enum('o''clock', 'noon')"
        );
    }

    #[test]
    fn test_boolean_default() {
        let mut col = Column::new(ColumnType::Boolean, "active", ColumnAttributes::default());
        col.default(true);
        assert_eq!(
            grammar().column_definition(&col).unwrap(),
            "`active` tinyint(1) not null default 'true'"
        );
    }

    #[test]
    fn test_unknown_command() {
        let table = Blueprint::new("users", SchemaConfig::default());
        let command = Command::new(CommandKind::RenameColumn);
        let g = grammar();
        assert!(!g.supports(CommandKind::RenameColumn));
        assert_eq!(
            g.compile(&table, &command).unwrap_err(),
            SchemaError::UnknownCommand(CommandKind::RenameColumn)
        );
    }

    #[test]
    fn test_table_exists_query() {
        assert!(grammar()
            .compile_table_exists()
            .starts_with("select * from information_schema.tables"));
    }
}
