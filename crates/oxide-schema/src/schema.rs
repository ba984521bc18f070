//! Schema facade.
//!
//! A [`Schema`] builds one blueprint per call, compiles it with its grammar
//! and runs the resulting statements in order through its executor. The
//! first failing statement stops the batch.

use oxide_schema_core::{Blueprint, Grammar, SchemaConfig};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::executor::{MySqlExecutor, StatementExecutor};

/// Applies table blueprints through a [`StatementExecutor`].
pub struct Schema<E: StatementExecutor> {
    config: SchemaConfig,
    executor: E,
    grammar: Grammar,
    dry_run: bool,
}

impl Schema<MySqlExecutor> {
    /// Connects to the database at `config.url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConnection`] when no URL is configured, or the
    /// connection error.
    pub async fn connect(config: SchemaConfig) -> Result<Self> {
        let url = config.url.as_deref().ok_or(Error::MissingConnection)?;
        let executor = MySqlExecutor::connect(url).await?;
        Ok(Self::new(config, executor))
    }
}

impl<E: StatementExecutor> Schema<E> {
    /// Creates a schema running statements through `executor`.
    #[must_use]
    pub fn new(config: SchemaConfig, executor: E) -> Self {
        Self {
            config,
            executor,
            grammar: Grammar::new(),
            dry_run: false,
        }
    }

    /// Enables dry-run mode (statements are compiled and logged but not executed).
    #[must_use]
    pub const fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SchemaConfig {
        &self.config
    }

    #[must_use]
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    #[must_use]
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Starts an empty blueprint for `table` using this schema's configuration.
    #[must_use]
    pub fn blueprint(&self, table: &str) -> Blueprint {
        Blueprint::new(table, self.config.clone())
    }

    /// Creates `table` with the columns and keys declared by `build`.
    ///
    /// # Errors
    ///
    /// Fails as [`Schema::build`] does.
    pub async fn create(
        &self,
        table: &str,
        build: impl FnOnce(&mut Blueprint) + Send,
    ) -> Result<Vec<String>> {
        let mut blueprint = self.blueprint(table);
        blueprint.create();
        build(&mut blueprint);
        self.build(blueprint).await
    }

    /// Alters an existing `table` as declared by `build`.
    ///
    /// # Errors
    ///
    /// Fails as [`Schema::build`] does.
    pub async fn table(
        &self,
        table: &str,
        build: impl FnOnce(&mut Blueprint) + Send,
    ) -> Result<Vec<String>> {
        let mut blueprint = self.blueprint(table);
        build(&mut blueprint);
        self.build(blueprint).await
    }

    /// Drops `table`.
    ///
    /// # Errors
    ///
    /// Fails as [`Schema::build`] does.
    pub async fn drop(&self, table: &str) -> Result<Vec<String>> {
        let mut blueprint = self.blueprint(table);
        blueprint.drop_table();
        self.build(blueprint).await
    }

    /// Drops `table` if it exists.
    ///
    /// # Errors
    ///
    /// Fails as [`Schema::build`] does.
    pub async fn drop_if_exists(&self, table: &str) -> Result<Vec<String>> {
        let mut blueprint = self.blueprint(table);
        blueprint.drop_table_if_exists();
        self.build(blueprint).await
    }

    /// Drops `columns` from `table` in a single statement.
    ///
    /// # Errors
    ///
    /// Fails as [`Schema::build`] does.
    pub async fn drop_columns<I, S>(&self, table: &str, columns: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S> + Send,
        S: Into<String>,
    {
        let mut blueprint = self.blueprint(table);
        blueprint.drop_column(columns);
        self.build(blueprint).await
    }

    /// Renames `from` to `to`. The prefix applies to both names.
    ///
    /// # Errors
    ///
    /// Fails as [`Schema::build`] does.
    pub async fn rename(&self, from: &str, to: &str) -> Result<Vec<String>> {
        let mut blueprint = self.blueprint(from);
        blueprint.rename(to);
        self.build(blueprint).await
    }

    /// Checks whether `table` (prefix applied) exists in the configured database.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseNotConfigured`] without a configured database,
    /// or the executor's error.
    pub async fn has_table(&self, table: &str) -> Result<bool> {
        let database = self
            .config
            .database
            .as_deref()
            .ok_or(Error::DatabaseNotConfigured)?;
        let table = format!("{}{}", self.config.prefix, table);
        self.executor
            .table_exists(self.grammar.compile_table_exists(), database, &table)
            .await
    }

    /// Compiles `blueprint` and executes its statements in order.
    ///
    /// Returns the statements, whether or not they were executed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] if compilation fails, in which case nothing
    /// runs, or the error of the first failing statement.
    pub async fn build(&self, mut blueprint: Blueprint) -> Result<Vec<String>> {
        let statements = blueprint.to_sql(&self.grammar)?;
        info!(
            table = %blueprint.table(),
            statements = statements.len(),
            "Applying blueprint"
        );

        if self.dry_run {
            warn!(table = %blueprint.table(), "Dry run, statements not executed");
            return Ok(statements);
        }

        for sql in &statements {
            debug!(sql = %sql, "Executing SQL");
            self.executor.execute(sql).await?;
        }

        Ok(statements)
    }
}
