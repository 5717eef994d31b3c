use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::integer::Integer;
use crate::path::Path;
use crate::validator::Validator;
use crate::value::Value;

#[inline]
fn int_is_zero(v: &Integer) -> bool {
    *v == Integer::from(0u8)
}

/// A complete, immutable description of the shape one parser's output must
/// take.
///
/// A schema is built once through a [`SchemaBuilder`] — typically at
/// startup, alongside the parser it describes — and is read-only
/// afterwards, so it can be shared freely across threads. Validation walks
/// the schema and a parsed [`Value`] together, depth-first, and stops at the
/// first violation, reporting it with the full path from the root down to
/// the offending node.
///
/// Schemas serialize, so a definition can be stored or shipped as JSON and
/// loaded back.
///
/// # Examples
///
/// ```
/// # use outshape::validator::*;
/// # use outshape::{SchemaBuilder, Value};
/// let schema = SchemaBuilder::new(
///     MapValidator::new()
///         .req_add("version", IntValidator::new().min(1u8).build())
///         .opt_add("uptime", StrValidator::new().build())
///         .build(),
/// )
/// .name("show_version")
/// .build();
///
/// let value: Value = serde_json::from_str(r#"{"version": 17}"#).unwrap();
/// assert!(schema.validate(&value).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// A short name, usually the command the schema describes.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    name: String,
    /// A longer description of what the schema covers.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    description: String,
    /// A version number for the schema definition.
    #[serde(skip_serializing_if = "int_is_zero", default)]
    version: Integer,
    /// The validator run against parsed output.
    doc: Validator,
}

impl Schema {
    /// The schema's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The schema's version.
    pub fn version(&self) -> Integer {
        self.version
    }

    /// The root validator.
    pub fn doc(&self) -> &Validator {
        &self.doc
    }

    /// Check a parsed value against this schema.
    ///
    /// Walks depth-first and returns the first violation found. The value
    /// is only borrowed: validation never mutates, coerces, or defaults
    /// anything, so a value that has passed once will pass again.
    pub fn validate(&self, value: &Value) -> Result<()> {
        let mut path = Path::new();
        self.doc.validate(&mut path, value)
    }
}

/// Builder for a [`Schema`].
#[derive(Clone, Debug)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Start a new schema with the given root validator.
    pub fn new(doc: Validator) -> Self {
        Self {
            schema: Schema {
                name: String::new(),
                description: String::new(),
                version: Integer::default(),
                doc,
            },
        }
    }

    /// Set the schema's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.schema.name = name.into();
        self
    }

    /// Set the schema's description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.schema.description = description.into();
        self
    }

    /// Set the schema's version.
    pub fn version(mut self, version: impl Into<Integer>) -> Self {
        self.schema.version = version.into();
        self
    }

    /// Finish, producing the read-only [`Schema`].
    pub fn build(self) -> Schema {
        self.schema
    }
}
