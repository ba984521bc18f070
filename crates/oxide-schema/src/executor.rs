//! Statement executors.
//!
//! The [`Schema`](crate::Schema) facade hands every compiled statement to a
//! [`StatementExecutor`]. [`MySqlExecutor`] runs them over a sqlx pool; tests
//! substitute their own recording implementation.

use std::future::Future;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{debug, info};

use crate::error::Result;

/// Runs compiled statements against a database.
pub trait StatementExecutor: Send + Sync {
    /// Executes one DDL statement.
    ///
    /// # Errors
    ///
    /// Returns the database error reported for the statement.
    fn execute(&self, sql: &str) -> impl Future<Output = Result<()>> + Send;

    /// Runs the table-existence `query`, binding `database` then `table`, and
    /// reports whether it returned any row.
    ///
    /// # Errors
    ///
    /// Returns the database error reported for the query.
    fn table_exists(
        &self,
        query: &str,
        database: &str,
        table: &str,
    ) -> impl Future<Output = Result<bool>> + Send;
}

/// Executor backed by a MySQL connection pool.
#[derive(Debug, Clone)]
pub struct MySqlExecutor {
    pool: MySqlPool,
}

impl MySqlExecutor {
    /// Wraps an existing pool.
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is invalid or the first connection fails.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        info!("Connected to MySQL");
        Ok(Self::new(pool))
    }

    /// Creates a pool for `url` without opening a connection until first use.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` cannot be parsed.
    pub fn connect_lazy(url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_lazy(url)?;
        Ok(Self::new(pool))
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

impl StatementExecutor for MySqlExecutor {
    async fn execute(&self, sql: &str) -> Result<()> {
        sqlx::query(sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn table_exists(&self, query: &str, database: &str, table: &str) -> Result<bool> {
        let rows = sqlx::query(query)
            .bind(database)
            .bind(table)
            .fetch_all(&self.pool)
            .await?;
        debug!(database = %database, table = %table, found = !rows.is_empty(), "Checked table");
        Ok(!rows.is_empty())
    }
}
