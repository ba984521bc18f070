//! Column definitions.
//!
//! A [`Column`] is created by one of the [`Blueprint`](crate::Blueprint)
//! column constructors and refined in place through its chainable mutators:
//!
//! ```rust
//! use oxide_schema_core::{Blueprint, SchemaConfig};
//!
//! let mut table = Blueprint::new("users", SchemaConfig::default());
//! table.string("name", Some(30)).default("a").comment("display name").change();
//! assert!(table.columns()[0].attributes.change);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Column types understood by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Char,
    Varchar,
    TinyText,
    Text,
    MediumText,
    LongText,
    Int,
    TinyInt,
    /// Rendered as `tinyint(1)`.
    Boolean,
    SmallInt,
    MediumInt,
    BigInt,
    /// Rendered as `double(total, places)`.
    Float,
    Double,
    Decimal,
    Enum,
    Set,
    Json,
    Date,
    DateTime,
    Time,
    Timestamp,
    Year,
    Binary,
    Blob,
    /// Rendered as `char(36)`.
    Uuid,
}

impl ColumnType {
    /// All supported column types.
    pub const ALL: [Self; 26] = [
        Self::Char,
        Self::Varchar,
        Self::TinyText,
        Self::Text,
        Self::MediumText,
        Self::LongText,
        Self::Int,
        Self::TinyInt,
        Self::Boolean,
        Self::SmallInt,
        Self::MediumInt,
        Self::BigInt,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::Enum,
        Self::Set,
        Self::Json,
        Self::Date,
        Self::DateTime,
        Self::Time,
        Self::Timestamp,
        Self::Year,
        Self::Binary,
        Self::Blob,
        Self::Uuid,
    ];

    /// Returns the lower-case keyword for this type.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Varchar => "varchar",
            Self::TinyText => "tinytext",
            Self::Text => "text",
            Self::MediumText => "mediumtext",
            Self::LongText => "longtext",
            Self::Int => "int",
            Self::TinyInt => "tinyint",
            Self::Boolean => "boolean",
            Self::SmallInt => "smallint",
            Self::MediumInt => "mediumint",
            Self::BigInt => "bigint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Enum => "enum",
            Self::Set => "set",
            Self::Json => "json",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Year => "year",
            Self::Binary => "binary",
            Self::Blob => "blob",
            Self::Uuid => "uuid",
        }
    }

    /// Whether this type can carry `auto_increment`.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::BigInt | Self::Int | Self::MediumInt | Self::SmallInt | Self::TinyInt
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ColumnType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.keyword() == s)
            .ok_or_else(|| SchemaError::UnknownColumnType(s.to_string()))
    }
}

/// Default value for a column.
///
/// Every variant renders quoted, as `default '<literal>'`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    /// Rendered as `true` / `false`.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Unsigned integer.
    Unsigned(u64),
    /// Floating point, in plain decimal notation.
    Float(f64),
    /// Text, rendered verbatim.
    String(String),
    /// Structured value, rendered as JSON (strings are rendered raw).
    Json(serde_json::Value),
}

impl DefaultValue {
    /// Returns the text placed between the quotes of the `default` clause.
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Unsigned(u) => u.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) | Self::Json(serde_json::Value::String(s)) => s.clone(),
            Self::Json(value) => value.to_string(),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i8> for DefaultValue {
    fn from(value: i8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i16> for DefaultValue {
    fn from(value: i16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<isize> for DefaultValue {
    fn from(value: isize) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<u8> for DefaultValue {
    fn from(value: u8) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<u16> for DefaultValue {
    fn from(value: u16) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<u32> for DefaultValue {
    fn from(value: u32) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<u64> for DefaultValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<usize> for DefaultValue {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

impl From<f32> for DefaultValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<serde_json::Value> for DefaultValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// Optional properties of a column.
///
/// Which fields are meaningful depends on the column type; fields that do
/// not apply are ignored by the grammar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ColumnAttributes {
    /// Length of `char` / `varchar` columns.
    pub length: Option<u32>,
    /// Total digits of `float` / `double` / `decimal` columns.
    pub total: Option<u32>,
    /// Decimal places of `float` / `double` / `decimal` columns.
    pub places: Option<u32>,
    /// Allowed values of `enum` / `set` columns.
    pub allowed: Option<Vec<String>>,
    pub unsigned: bool,
    pub auto_increment: bool,
    /// `None` renders as `not null`.
    pub nullable: Option<bool>,
    pub default: Option<DefaultValue>,
    pub comment: Option<String>,
    pub charset: Option<String>,
    pub collation: Option<String>,
    /// The column already exists and should be modified.
    pub change: bool,
    /// Fluent index markers, consumed when implied commands are derived.
    pub primary: bool,
    pub unique: bool,
    pub index: bool,
}

/// A column definition within a blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub column_type: ColumnType,
    pub name: String,
    pub attributes: ColumnAttributes,
}

impl Column {
    /// Creates a new column.
    #[must_use]
    pub fn new(
        column_type: ColumnType,
        name: impl Into<String>,
        attributes: ColumnAttributes,
    ) -> Self {
        Self {
            column_type,
            name: name.into(),
            attributes,
        }
    }

    /// Sets the column comment.
    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.attributes.comment = Some(comment.into());
        self
    }

    /// Sets the default value.
    pub fn default(&mut self, value: impl Into<DefaultValue>) -> &mut Self {
        self.attributes.default = Some(value.into());
        self
    }

    /// Allows NULL values.
    pub const fn nullable(&mut self) -> &mut Self {
        self.nullable_if(true)
    }

    /// Sets whether NULL values are allowed.
    pub const fn nullable_if(&mut self, nullable: bool) -> &mut Self {
        self.attributes.nullable = Some(nullable);
        self
    }

    /// Adds a primary key on this column.
    pub const fn primary(&mut self) -> &mut Self {
        self.attributes.primary = true;
        self
    }

    /// Adds a unique index on this column.
    pub const fn unique(&mut self) -> &mut Self {
        self.attributes.unique = true;
        self
    }

    /// Adds a plain index on this column.
    pub const fn index(&mut self) -> &mut Self {
        self.attributes.index = true;
        self
    }

    /// Marks the column as an existing column to modify.
    pub const fn change(&mut self) -> &mut Self {
        self.attributes.change = true;
        self
    }

    pub fn charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.attributes.charset = Some(charset.into());
        self
    }

    pub fn collation(&mut self, collation: impl Into<String>) -> &mut Self {
        self.attributes.collation = Some(collation.into());
        self
    }

    pub const fn unsigned(&mut self) -> &mut Self {
        self.attributes.unsigned = true;
        self
    }

    /// Only integer types render `auto_increment primary key`.
    pub const fn auto_increment(&mut self) -> &mut Self {
        self.attributes.auto_increment = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_round_trips_through_keyword() {
        for t in ColumnType::ALL {
            assert_eq!(t.keyword().parse::<ColumnType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_column_type() {
        let err = "geometry".parse::<ColumnType>().unwrap_err();
        assert_eq!(err, SchemaError::UnknownColumnType("geometry".to_string()));
    }

    #[test]
    fn test_integer_family() {
        assert!(ColumnType::BigInt.is_integer());
        assert!(ColumnType::TinyInt.is_integer());
        assert!(!ColumnType::Boolean.is_integer());
        assert!(!ColumnType::Decimal.is_integer());
    }

    #[test]
    fn test_default_value_literals() {
        assert_eq!(DefaultValue::from("").to_literal(), "");
        assert_eq!(DefaultValue::from(true).to_literal(), "true");
        assert_eq!(DefaultValue::from(false).to_literal(), "false");
        assert_eq!(DefaultValue::from(-3).to_literal(), "-3");
        assert_eq!(DefaultValue::from(7_u64).to_literal(), "7");
        assert_eq!(DefaultValue::from(1.5).to_literal(), "1.5");
        assert_eq!(DefaultValue::from(0.25_f32).to_literal(), "0.25");
        assert_eq!(DefaultValue::from(-8_i8).to_literal(), "-8");
        assert_eq!(DefaultValue::from(300_i16).to_literal(), "300");
        assert_eq!(DefaultValue::from(-2_isize).to_literal(), "-2");
        assert_eq!(DefaultValue::from(255_u8).to_literal(), "255");
        assert_eq!(DefaultValue::from(65_535_u16).to_literal(), "65535");
        assert_eq!(DefaultValue::from(vec![1, 2].len()).to_literal(), "2");
        assert_eq!(DefaultValue::from(2.0).to_literal(), "2");
        let nested = DefaultValue::from(serde_json::json!({"a": [1, 2]}));
        assert_eq!(nested.to_literal(), r#"{"a":[1,2]}"#);
        assert_eq!(
            DefaultValue::from(serde_json::json!("raw")).to_literal(),
            "raw"
        );
    }

    #[test]
    fn test_mutators_chain() {
        let mut column = Column::new(ColumnType::Varchar, "name", ColumnAttributes::default());
        column
            .nullable()
            .default("x")
            .comment("c")
            .charset("utf8")
            .collation("utf8_bin")
            .unique()
            .change();

        let attrs = &column.attributes;
        assert_eq!(attrs.nullable, Some(true));
        assert_eq!(attrs.default, Some(DefaultValue::String("x".to_string())));
        assert_eq!(attrs.comment.as_deref(), Some("c"));
        assert_eq!(attrs.charset.as_deref(), Some("utf8"));
        assert_eq!(attrs.collation.as_deref(), Some("utf8_bin"));
        assert!(attrs.unique);
        assert!(attrs.change);
        assert!(!attrs.primary);
    }

    #[test]
    fn test_nullable_if_false() {
        let mut column = Column::new(ColumnType::Text, "body", ColumnAttributes::default());
        column.nullable_if(false);
        assert_eq!(column.attributes.nullable, Some(false));
    }
}
