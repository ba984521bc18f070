//! Per-command compile routines.

use super::{escape, Grammar};
use crate::blueprint::Blueprint;
use crate::command::Command;
use crate::error::{Result, SchemaError};

impl Grammar {
    pub(crate) fn compile_create(
        &self,
        blueprint: &Blueprint,
        _command: &Command,
    ) -> Result<String> {
        let columns = self.column_definitions(blueprint.added_columns())?;
        Ok(format!(
            "create table {} ({}) default character set {} collate '{}' engine = {}",
            self.wrap_table(blueprint),
            columns.join(", "),
            blueprint.resolved_charset(),
            blueprint.resolved_collation(),
            blueprint.resolved_engine()
        ))
    }

    pub(crate) fn compile_add(&self, blueprint: &Blueprint, _command: &Command) -> Result<String> {
        let columns = self.column_definitions(blueprint.added_columns())?;
        Ok(self.alter_each(blueprint, "add", &columns))
    }

    pub(crate) fn compile_change(
        &self,
        blueprint: &Blueprint,
        _command: &Command,
    ) -> Result<String> {
        let columns = self.column_definitions(blueprint.changed_columns())?;
        Ok(self.alter_each(blueprint, "modify", &columns))
    }

    pub(crate) fn compile_rename(
        &self,
        blueprint: &Blueprint,
        command: &Command,
    ) -> Result<String> {
        let to = command
            .attributes
            .to
            .as_deref()
            .ok_or_else(|| SchemaError::missing(command.kind.name(), "to"))?;
        Ok(format!(
            "rename table {} to {}",
            self.wrap_table(blueprint),
            self.wrap(&format!("{}{}", blueprint.prefix, to))
        ))
    }

    pub(crate) fn compile_primary(
        &self,
        blueprint: &Blueprint,
        command: &Command,
    ) -> Result<String> {
        self.compile_key(blueprint, command, "primary key")
    }

    pub(crate) fn compile_unique(
        &self,
        blueprint: &Blueprint,
        command: &Command,
    ) -> Result<String> {
        self.compile_key(blueprint, command, "unique")
    }

    pub(crate) fn compile_index(&self, blueprint: &Blueprint, command: &Command) -> Result<String> {
        self.compile_key(blueprint, command, "index")
    }

    // Routines share the `CompileFn` signature, even those that cannot fail.
    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn compile_drop(&self, blueprint: &Blueprint, _command: &Command) -> Result<String> {
        Ok(format!("drop table {}", self.wrap_table(blueprint)))
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn compile_drop_if_exists(
        &self,
        blueprint: &Blueprint,
        _command: &Command,
    ) -> Result<String> {
        Ok(format!("drop table if exists {}", self.wrap_table(blueprint)))
    }

    pub(crate) fn compile_drop_column(
        &self,
        blueprint: &Blueprint,
        command: &Command,
    ) -> Result<String> {
        let columns = &command.attributes.columns;
        if columns.is_empty() {
            return Err(SchemaError::missing(command.kind.name(), "columns"));
        }
        let drops: Vec<String> = columns.iter().map(|c| self.wrap(c)).collect();
        Ok(self.alter_each(blueprint, "drop", &drops))
    }

    pub(crate) fn compile_table_comment(
        &self,
        blueprint: &Blueprint,
        command: &Command,
    ) -> Result<String> {
        let comment = command
            .attributes
            .comment
            .as_deref()
            .ok_or_else(|| SchemaError::missing(command.kind.name(), "comment"))?;
        Ok(format!(
            "alter table {} comment = '{}'",
            self.wrap_table(blueprint),
            escape(comment)
        ))
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(crate) fn compile_drop_primary(
        &self,
        blueprint: &Blueprint,
        _command: &Command,
    ) -> Result<String> {
        Ok(format!(
            "alter table {} drop primary key",
            self.wrap_table(blueprint)
        ))
    }

    pub(crate) fn compile_drop_unique(
        &self,
        blueprint: &Blueprint,
        command: &Command,
    ) -> Result<String> {
        self.compile_drop_key(blueprint, command)
    }

    pub(crate) fn compile_drop_index(
        &self,
        blueprint: &Blueprint,
        command: &Command,
    ) -> Result<String> {
        self.compile_drop_key(blueprint, command)
    }

    /// `alter table <t> add <keyword> <name>(<cols>)[ using <algorithm>]`
    fn compile_key(
        &self,
        blueprint: &Blueprint,
        command: &Command,
        keyword: &str,
    ) -> Result<String> {
        let attrs = &command.attributes;
        let index = attrs
            .index
            .as_deref()
            .ok_or_else(|| SchemaError::missing(command.kind.name(), "index"))?;

        let mut sql = format!(
            "alter table {} add {} {}({})",
            self.wrap_table(blueprint),
            keyword,
            index,
            self.columnize(&attrs.columns)
        );
        if let Some(algorithm) = attrs.algorithm.as_deref().filter(|a| !a.is_empty()) {
            sql.push_str(" using ");
            sql.push_str(algorithm);
        }
        Ok(sql)
    }

    fn compile_drop_key(&self, blueprint: &Blueprint, command: &Command) -> Result<String> {
        let index = command
            .attributes
            .index
            .as_deref()
            .ok_or_else(|| SchemaError::missing(command.kind.name(), "index"))?;
        Ok(format!(
            "alter table {} drop index {}",
            self.wrap_table(blueprint),
            index
        ))
    }

    fn alter_each(&self, blueprint: &Blueprint, verb: &str, items: &[String]) -> String {
        let clauses: Vec<String> = items.iter().map(|item| format!("{verb} {item}")).collect();
        format!(
            "alter table {} {}",
            self.wrap_table(blueprint),
            clauses.join(", ")
        )
    }
}
