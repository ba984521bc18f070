#![allow(dead_code)]

use oxide_schema_core::{Blueprint, Grammar, SchemaConfig};

pub const TABLE_OPTIONS: &str =
    "default character set utf8mb4 collate 'utf8mb4_unicode_ci' engine = InnoDB";

pub fn compile(table: &str, build: impl FnOnce(&mut Blueprint)) -> Vec<String> {
    compile_with(SchemaConfig::default(), table, build)
}

pub fn compile_with(
    config: SchemaConfig,
    table: &str,
    build: impl FnOnce(&mut Blueprint),
) -> Vec<String> {
    let mut blueprint = Blueprint::new(table, config);
    build(&mut blueprint);
    blueprint
        .to_sql(&Grammar::new())
        .unwrap_or_else(|e| panic!("Failed to compile `{table}`: {e}"))
}

/// Wraps column definitions in the `create table` statement for `users`.
pub fn create_users(columns: &str) -> String {
    format!("create table `users` ({columns}) {TABLE_OPTIONS}")
}
