//! Table blueprints.
//!
//! A [`Blueprint`] collects the columns and commands describing one table
//! operation. Compiling it first derives the commands implied by its state
//! (adding or modifying columns on an existing table, fluent index markers)
//! and then renders every command, in order, through a [`Grammar`].
//!
//! # Example
//!
//! ```rust
//! use oxide_schema_core::{Blueprint, Grammar, SchemaConfig};
//!
//! let mut table = Blueprint::new("users", SchemaConfig::default());
//! table.create();
//! table.id();
//! table.string("email", None).unique();
//!
//! let sql = table.to_sql(&Grammar::new()).unwrap();
//! assert_eq!(sql.len(), 2);
//! assert_eq!(sql[1], "alter table `users` add unique users_email_unique(`email`)");
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::column::{Column, ColumnAttributes, ColumnType};
use crate::command::{Command, CommandAttributes, CommandKind};
use crate::config::{
    or_default, SchemaConfig, DEFAULT_CHARSET, DEFAULT_COLLATION, DEFAULT_ENGINE,
};
use crate::error::Result;
use crate::grammar::Grammar;

/// Columns and commands describing one table operation.
#[derive(Debug, Clone)]
pub struct Blueprint {
    /// Prefix prepended to the table name.
    pub prefix: String,
    /// Storage engine used by `create table`.
    pub engine: String,
    /// Default character set used by `create table`.
    pub charset: String,
    /// Default collation used by `create table`.
    pub collation: String,

    table: String,
    columns: Vec<Column>,
    commands: Vec<Command>,
    config: SchemaConfig,
}

impl Blueprint {
    /// Creates an empty blueprint for `table`.
    #[must_use]
    pub fn new(table: impl Into<String>, config: SchemaConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            engine: config.resolved_engine().to_string(),
            charset: config.resolved_charset().to_string(),
            collation: config.resolved_collation().to_string(),
            table: table.into(),
            columns: Vec::new(),
            commands: Vec::new(),
            config,
        }
    }

    /// Returns the table name, without prefix.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the table name with the prefix applied.
    #[must_use]
    pub fn prefixed_table(&self) -> String {
        format!("{}{}", self.prefix, self.table)
    }

    #[must_use]
    pub const fn config(&self) -> &SchemaConfig {
        &self.config
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub(crate) fn resolved_engine(&self) -> &str {
        or_default(&self.engine, DEFAULT_ENGINE)
    }

    pub(crate) fn resolved_charset(&self) -> &str {
        or_default(&self.charset, DEFAULT_CHARSET)
    }

    pub(crate) fn resolved_collation(&self) -> &str {
        or_default(&self.collation, DEFAULT_COLLATION)
    }

    /// Whether this blueprint creates its table.
    #[must_use]
    pub fn creating(&self) -> bool {
        self.has_command(CommandKind::Create)
    }

    fn has_command(&self, kind: CommandKind) -> bool {
        self.commands.iter().any(|c| c.kind == kind)
    }

    /// Columns to be added (everything not marked for change).
    pub fn added_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.attributes.change)
    }

    /// Columns marked for change.
    pub fn changed_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.attributes.change)
    }

    /// Compiles the blueprint into SQL statements.
    ///
    /// Implied commands are derived first. Statements come out in command
    /// order with exact duplicates removed. Any compile error discards the
    /// whole batch.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while compiling a command, such as an
    /// unregistered command kind or a missing required attribute.
    pub fn to_sql(&mut self, grammar: &Grammar) -> Result<Vec<String>> {
        self.add_implied_commands();

        let blueprint: &Self = self;
        let mut statements = Vec::with_capacity(blueprint.commands.len());
        for command in &blueprint.commands {
            let sql = grammar.compile(blueprint, command)?;
            debug!(
                table = %blueprint.table,
                command = %command.kind,
                sql = %sql,
                "Compiled command"
            );
            statements.push(sql);
        }

        Ok(unique_statements(statements))
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Appends a command as is.
    pub fn add_command(&mut self, command: Command) -> &mut Command {
        self.commands.push(command);
        let last = self.commands.len() - 1;
        &mut self.commands[last]
    }

    fn push_command(&mut self, kind: CommandKind, attributes: CommandAttributes) {
        self.add_command(Command::with_attributes(kind, attributes));
    }

    /// Indicates that the table needs to be created.
    pub fn create(&mut self) {
        self.push_command(CommandKind::Create, CommandAttributes::default());
    }

    /// Indicates that the table should be dropped.
    pub fn drop_table(&mut self) {
        self.push_command(CommandKind::Drop, CommandAttributes::default());
    }

    /// Indicates that the table should be dropped if it exists.
    pub fn drop_table_if_exists(&mut self) {
        self.push_command(CommandKind::DropIfExists, CommandAttributes::default());
    }

    /// Renames the table. The prefix is applied to `to` as well.
    pub fn rename(&mut self, to: impl Into<String>) {
        self.push_command(
            CommandKind::Rename,
            CommandAttributes {
                to: Some(to.into()),
                ..CommandAttributes::default()
            },
        );
    }

    /// Sets the table comment.
    pub fn comment(&mut self, comment: impl Into<String>) {
        self.push_command(
            CommandKind::TableComment,
            CommandAttributes {
                comment: Some(comment.into()),
                ..CommandAttributes::default()
            },
        );
    }

    /// Drops the given columns in one statement. Does nothing when empty.
    pub fn drop_column<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return;
        }
        self.push_command(
            CommandKind::DropColumn,
            CommandAttributes {
                columns,
                ..CommandAttributes::default()
            },
        );
    }

    /// Adds a primary key over `columns`.
    pub fn primary<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_command(CommandKind::Primary, collect(columns), None);
    }

    /// Adds a unique index over `columns`.
    pub fn unique<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_command(CommandKind::Unique, collect(columns), None);
    }

    /// Adds a plain index over `columns`.
    pub fn index<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_command(CommandKind::Index, collect(columns), None);
    }

    /// Adds a primary key over `columns` with an explicit algorithm.
    pub fn primary_using<I, S>(&mut self, columns: I, algorithm: impl Into<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_command(CommandKind::Primary, collect(columns), Some(algorithm.into()));
    }

    /// Adds a plain index over `columns` with an explicit algorithm.
    pub fn index_using<I, S>(&mut self, columns: I, algorithm: impl Into<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_command(CommandKind::Index, collect(columns), Some(algorithm.into()));
    }

    /// Adds a unique index over `columns` with an explicit algorithm.
    pub fn unique_using<I, S>(&mut self, columns: I, algorithm: impl Into<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_command(CommandKind::Unique, collect(columns), Some(algorithm.into()));
    }

    /// Drops the primary key.
    pub fn drop_primary(&mut self) {
        self.push_command(CommandKind::DropPrimary, CommandAttributes::default());
    }

    /// Drops the unique index previously derived for `columns`.
    pub fn drop_unique<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop_index_command(CommandKind::DropUnique, CommandKind::Unique, collect(columns));
    }

    /// Drops the plain index previously derived for `columns`.
    pub fn drop_index<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop_index_command(CommandKind::DropIndex, CommandKind::Index, collect(columns));
    }

    fn index_command(
        &mut self,
        kind: CommandKind,
        columns: Vec<String>,
        algorithm: Option<String>,
    ) {
        let index = self.index_name(kind, &columns);
        self.push_command(
            kind,
            CommandAttributes {
                index: Some(index),
                algorithm,
                columns,
                ..CommandAttributes::default()
            },
        );
    }

    fn drop_index_command(
        &mut self,
        kind: CommandKind,
        created_as: CommandKind,
        columns: Vec<String>,
    ) {
        let index = self.index_name(created_as, &columns);
        self.push_command(
            kind,
            CommandAttributes {
                index: Some(index),
                columns,
                ..CommandAttributes::default()
            },
        );
    }

    /// Derives the canonical index name for `kind` over `columns`.
    ///
    /// `lower(prefix + table + "_" + columns + "_" + kind)` with `-` and `.`
    /// replaced by `_`.
    #[must_use]
    pub fn index_name(&self, kind: CommandKind, columns: &[String]) -> String {
        format!(
            "{}{}_{}_{}",
            self.prefix,
            self.table,
            columns.join("_"),
            kind.name()
        )
        .to_lowercase()
        .replace(['-', '.'], "_")
    }

    // =========================================================================
    // Implied commands
    // =========================================================================

    fn add_implied_commands(&mut self) {
        if !self.creating() {
            if self.added_columns().next().is_some() && !self.has_command(CommandKind::Add) {
                self.push_command(CommandKind::Add, CommandAttributes::default());
            }
            if self.changed_columns().next().is_some() && !self.has_command(CommandKind::Change) {
                self.push_command(CommandKind::Change, CommandAttributes::default());
            }
        }

        self.add_fluent_indexes();
    }

    /// Turns column-level index markers into single-column index commands.
    ///
    /// Only the first marker set on a column fires, checked in the order
    /// primary, unique, index. Once one fires, all markers of that column
    /// are cleared so a second derivation adds nothing.
    fn add_fluent_indexes(&mut self) {
        let mut implied = Vec::new();

        for column in &mut self.columns {
            let attrs = &mut column.attributes;
            let kind = if attrs.primary {
                CommandKind::Primary
            } else if attrs.unique {
                CommandKind::Unique
            } else if attrs.index {
                CommandKind::Index
            } else {
                continue;
            };
            attrs.primary = false;
            attrs.unique = false;
            attrs.index = false;
            implied.push((kind, column.name.clone()));
        }

        for (kind, name) in implied {
            self.index_command(kind, vec![name], None);
        }
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Adds a column with explicit attributes.
    pub fn add_column(
        &mut self,
        column_type: ColumnType,
        name: impl Into<String>,
        attributes: ColumnAttributes,
    ) -> &mut Column {
        self.columns.push(Column::new(column_type, name, attributes));
        let last = self.columns.len() - 1;
        &mut self.columns[last]
    }

    fn sized(&mut self, column_type: ColumnType, name: &str, length: Option<u32>) -> &mut Column {
        let length = length.unwrap_or(self.config.string_length);
        self.add_column(
            column_type,
            name,
            ColumnAttributes {
                length: Some(length),
                ..ColumnAttributes::default()
            },
        )
    }

    fn integer(
        &mut self,
        column_type: ColumnType,
        name: &str,
        auto_increment: bool,
        unsigned: bool,
    ) -> &mut Column {
        self.add_column(
            column_type,
            name,
            ColumnAttributes {
                unsigned,
                auto_increment,
                ..ColumnAttributes::default()
            },
        )
    }

    fn floating(
        &mut self,
        column_type: ColumnType,
        name: &str,
        total: u32,
        places: u32,
        unsigned: bool,
    ) -> &mut Column {
        self.add_column(
            column_type,
            name,
            ColumnAttributes {
                total: Some(total),
                places: Some(places),
                unsigned,
                ..ColumnAttributes::default()
            },
        )
    }

    fn listed<I, S>(&mut self, column_type: ColumnType, name: &str, allowed: I) -> &mut Column
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_column(
            column_type,
            name,
            ColumnAttributes {
                allowed: Some(collect(allowed)),
                ..ColumnAttributes::default()
            },
        )
    }

    fn bare(&mut self, column_type: ColumnType, name: &str) -> &mut Column {
        self.add_column(column_type, name, ColumnAttributes::default())
    }

    /// Auto-incrementing unsigned `bigint` primary key named `id`.
    pub fn id(&mut self) -> &mut Column {
        self.big_increments("id")
    }

    /// Auto-incrementing unsigned `int` primary key.
    pub fn increments(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::Int, name, true, true)
    }

    /// Auto-incrementing unsigned `bigint` primary key.
    pub fn big_increments(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::BigInt, name, true, true)
    }

    /// `char` column; `None` uses the configured string length.
    pub fn char(&mut self, name: &str, length: Option<u32>) -> &mut Column {
        self.sized(ColumnType::Char, name, length)
    }

    /// `varchar` column; `None` uses the configured string length.
    pub fn varchar(&mut self, name: &str, length: Option<u32>) -> &mut Column {
        self.sized(ColumnType::Varchar, name, length)
    }

    /// Alias for [`Blueprint::varchar`].
    pub fn string(&mut self, name: &str, length: Option<u32>) -> &mut Column {
        self.varchar(name, length)
    }

    pub fn tiny_text(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::TinyText, name)
    }

    pub fn text(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Text, name)
    }

    pub fn medium_text(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::MediumText, name)
    }

    pub fn long_text(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::LongText, name)
    }

    pub fn int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::Int, name, false, false)
    }

    pub fn tiny_int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::TinyInt, name, false, false)
    }

    pub fn small_int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::SmallInt, name, false, false)
    }

    pub fn medium_int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::MediumInt, name, false, false)
    }

    pub fn big_int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::BigInt, name, false, false)
    }

    pub fn unsigned_int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::Int, name, false, true)
    }

    pub fn unsigned_tiny_int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::TinyInt, name, false, true)
    }

    pub fn unsigned_small_int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::SmallInt, name, false, true)
    }

    pub fn unsigned_medium_int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::MediumInt, name, false, true)
    }

    pub fn unsigned_big_int(&mut self, name: &str) -> &mut Column {
        self.integer(ColumnType::BigInt, name, false, true)
    }

    /// `tinyint(1)` column.
    pub fn boolean(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Boolean, name)
    }

    /// Rendered as `double(total, places)`.
    pub fn float(&mut self, name: &str, total: u32, places: u32) -> &mut Column {
        self.floating(ColumnType::Float, name, total, places, false)
    }

    pub fn double(&mut self, name: &str, total: u32, places: u32) -> &mut Column {
        self.floating(ColumnType::Double, name, total, places, false)
    }

    pub fn decimal(&mut self, name: &str, total: u32, places: u32) -> &mut Column {
        self.floating(ColumnType::Decimal, name, total, places, false)
    }

    pub fn unsigned_float(&mut self, name: &str, total: u32, places: u32) -> &mut Column {
        self.floating(ColumnType::Float, name, total, places, true)
    }

    pub fn unsigned_double(&mut self, name: &str, total: u32, places: u32) -> &mut Column {
        self.floating(ColumnType::Double, name, total, places, true)
    }

    pub fn unsigned_decimal(&mut self, name: &str, total: u32, places: u32) -> &mut Column {
        self.floating(ColumnType::Decimal, name, total, places, true)
    }

    /// `enum` column restricted to `allowed`.
    pub fn enumeration<I, S>(&mut self, name: &str, allowed: I) -> &mut Column
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listed(ColumnType::Enum, name, allowed)
    }

    /// `set` column restricted to `allowed`.
    pub fn set<I, S>(&mut self, name: &str, allowed: I) -> &mut Column
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listed(ColumnType::Set, name, allowed)
    }

    pub fn json(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Json, name)
    }

    pub fn date(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Date, name)
    }

    pub fn date_time(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::DateTime, name)
    }

    pub fn time(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Time, name)
    }

    pub fn timestamp(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Timestamp, name)
    }

    /// Nullable `created_at` and `updated_at` timestamps.
    pub fn timestamps(&mut self) {
        self.timestamp("created_at").nullable();
        self.timestamp("updated_at").nullable();
    }

    /// Nullable `deleted_at` timestamp.
    pub fn soft_deletes(&mut self) -> &mut Column {
        self.timestamp("deleted_at").nullable()
    }

    pub fn year(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Year, name)
    }

    pub fn binary(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Binary, name)
    }

    /// Stored as a `binary` column.
    pub fn blob(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Binary, name)
    }

    /// `char(36)` column.
    pub fn uuid(&mut self, name: &str) -> &mut Column {
        self.bare(ColumnType::Uuid, name)
    }
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

/// Removes exact duplicate statements, keeping the first occurrence.
#[must_use]
pub fn unique_statements(statements: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    statements
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blueprint(table: &str) -> Blueprint {
        Blueprint::new(table, SchemaConfig::default())
    }

    fn kinds(table: &Blueprint) -> Vec<CommandKind> {
        table.commands().iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_new_copies_config() {
        let config = SchemaConfig::default()
            .with_prefix("app_")
            .with_engine("")
            .with_charset("utf8");
        let table = Blueprint::new("users", config);
        assert_eq!(table.prefix, "app_");
        assert_eq!(table.engine, "InnoDB");
        assert_eq!(table.charset, "utf8");
        assert_eq!(table.prefixed_table(), "app_users");
    }

    #[test]
    fn test_index_name() {
        let table = blueprint("users");
        let columns = ["account".to_string(), "name".to_string()];
        let name = table.index_name(CommandKind::Unique, &columns);
        assert_eq!(name, "users_account_name_unique");
    }

    #[test]
    fn test_index_name_normalizes() {
        let config = SchemaConfig::default().with_prefix("App-");
        let table = Blueprint::new("Log.Entries", config);
        let columns = ["Created-At".to_string()];
        let name = table.index_name(CommandKind::Index, &columns);
        assert_eq!(name, "app_log_entries_created_at_index");
        assert_eq!(name, table.index_name(CommandKind::Index, &columns));
    }

    #[test]
    fn test_creating_state() {
        let mut table = blueprint("users");
        assert!(!table.creating());
        table.create();
        assert!(table.creating());
    }

    #[test]
    fn test_drop_column_empty_is_noop() {
        let mut table = blueprint("users");
        table.drop_column(Vec::<String>::new());
        assert!(table.commands().is_empty());
    }

    #[test]
    fn test_string_uses_configured_length() {
        let mut table = Blueprint::new("users", SchemaConfig::default().with_string_length(191));
        table.string("email", None);
        table.char("code", Some(4));
        assert_eq!(table.columns()[0].attributes.length, Some(191));
        assert_eq!(table.columns()[1].attributes.length, Some(4));
    }

    #[test]
    fn test_implied_add_and_change_on_existing_table() {
        let mut table = blueprint("users");
        table.drop_column(["age"]);
        table.string("nickname", None);
        table.string("name", Some(30)).change();
        table.add_implied_commands();

        assert_eq!(
            kinds(&table),
            vec![CommandKind::DropColumn, CommandKind::Add, CommandKind::Change]
        );
    }

    #[test]
    fn test_no_implied_add_when_creating() {
        let mut table = blueprint("users");
        table.create();
        table.string("name", None);
        table.add_implied_commands();
        assert_eq!(kinds(&table), vec![CommandKind::Create]);
    }

    #[test]
    fn test_fluent_markers_priority_and_clearing() {
        let mut table = blueprint("users");
        table.create();
        table.int("a").index().unique().primary();
        table.int("b").index().unique();
        table.int("c").index();

        table.add_implied_commands();
        assert_eq!(
            kinds(&table),
            vec![
                CommandKind::Create,
                CommandKind::Primary,
                CommandKind::Unique,
                CommandKind::Index
            ]
        );

        let a = &table.columns()[0].attributes;
        assert!(!a.primary && !a.unique && !a.index);

        table.add_implied_commands();
        assert_eq!(table.commands().len(), 4);
    }

    #[test]
    fn test_implied_derivation_is_idempotent() {
        let mut table = blueprint("users");
        table.string("name", None).unique();
        table.add_implied_commands();
        let first = kinds(&table);
        table.add_implied_commands();
        // The unique marker re-fires nothing; the remaining add is not repeated.
        assert_eq!(first, vec![CommandKind::Add, CommandKind::Unique]);
        assert_eq!(kinds(&table), first);
    }

    #[test]
    fn test_fluent_and_explicit_index_share_shape() {
        for kind in [CommandKind::Primary, CommandKind::Unique, CommandKind::Index] {
            let mut fluent = blueprint("users");
            let column = fluent.string("email", None);
            match kind {
                CommandKind::Primary => column.primary(),
                CommandKind::Unique => column.unique(),
                _ => column.index(),
            };
            fluent.add_implied_commands();

            let mut explicit = blueprint("users");
            match kind {
                CommandKind::Primary => explicit.primary(["email"]),
                CommandKind::Unique => explicit.unique(["email"]),
                _ => explicit.index(["email"]),
            }

            let fluent_cmd = fluent
                .commands()
                .iter()
                .find(|c| c.kind == kind)
                .unwrap();
            assert_eq!(fluent_cmd, &explicit.commands()[0], "{kind}");
        }
    }

    #[test]
    fn test_drop_unique_uses_created_name() {
        let mut table = blueprint("users");
        table.drop_unique(["email"]);
        let attrs = &table.commands()[0].attributes;
        assert_eq!(attrs.index.as_deref(), Some("users_email_unique"));
    }

    #[test]
    fn test_unique_statements_keeps_first_occurrence() {
        let statements = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        assert_eq!(unique_statements(statements), vec!["b", "a", "c"]);
    }
}
