//! One-shot parse invocations: extract, screen out empty output, validate.
//!
//! The engine never talks to a device itself. A transport layer captures the
//! raw command output and hands it over as a [`Source`]; a command-specific
//! [`Extract`] implementation turns that into a structured
//! [`Value`]; and a [`ParseRun`] ties the two together with the
//! schema, rejecting empty output and validating everything else.

use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::value::Value;

/// Raw output handed to an extraction routine.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    /// Captured command output, as printed by the device.
    Text(String),
    /// Output that arrived already structured, like the decoded body of an
    /// HTTP API response.
    Structured(Value),
}

impl Source {
    /// The captured text, if this source is textual.
    pub fn as_text(&self) -> Option<&str> {
        if let Source::Text(ref text) = *self {
            Some(text.as_str())
        } else {
            None
        }
    }

    /// The pre-parsed value, if this source is structured.
    pub fn as_structured(&self) -> Option<&Value> {
        if let Source::Structured(ref value) = *self {
            Some(value)
        } else {
            None
        }
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_owned())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Source::Structured(value)
    }
}

/// A command-specific extraction routine.
///
/// Implementations turn one command's raw output into a structured
/// [`Value`], typically by matching line-oriented regular expressions
/// against a [`Source::Text`] and filling in a nested map. The engine stays
/// out of that business entirely: it hands the source over, then screens
/// and validates whatever comes back.
///
/// Any `FnMut(&Source) -> Result<Value>` closure is an extractor.
pub trait Extract {
    /// Produce a structured value from the raw source.
    fn extract(&mut self, source: &Source) -> Result<Value>;
}

impl<F> Extract for F
where
    F: FnMut(&Source) -> Result<Value>,
{
    fn extract(&mut self, source: &Source) -> Result<Value> {
        self(source)
    }
}

/// A single parse invocation against one schema.
///
/// A run starts out unvalidated and ends in exactly one of two terminal
/// states: validated, returning the extracted value untouched, or rejected,
/// returning a typed [`Error`]. [`parse`][ParseRun::parse] consumes the run,
/// so neither outcome can be revisited or retried through the same run; a
/// new invocation always starts from a fresh `ParseRun`.
#[derive(Clone, Debug)]
pub struct ParseRun<'a> {
    schema: &'a Schema,
}

impl<'a> ParseRun<'a> {
    /// Set up a fresh run against `schema`.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Run `extractor` over `source`, screen out empty output, and
    /// validate.
    ///
    /// An empty map or empty array from the extractor means the device
    /// returned no matching data. That surfaces as [`Error::EmptyParse`],
    /// distinct from every shape error, and is checked before validation so
    /// it wins even when the schema would accept an empty map. On success
    /// the value is returned exactly as the extractor produced it: no
    /// coercion, no defaulting of optional fields.
    pub fn parse<E: Extract>(self, extractor: &mut E, source: &Source) -> Result<Value> {
        let value = extractor.extract(source)?;
        match value {
            Value::Map(ref map) if map.is_empty() => return Err(Error::EmptyParse),
            Value::Array(ref array) if array.is_empty() => return Err(Error::EmptyParse),
            _ => (),
        }
        self.schema.validate(&value)?;
        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::SchemaBuilder;
    use crate::validator::*;
    use indexmap::IndexMap;

    fn uptime_schema() -> Schema {
        SchemaBuilder::new(
            MapValidator::new()
                .values(
                    MapValidator::new()
                        .req_add("status", StrValidator::new().build())
                        .req_add("uptime", StrValidator::new().build())
                        .build(),
                )
                .build(),
        )
        .name("show_peers")
        .build()
    }

    /// Extraction routine for lines like `peer1 Established 10:23:01`.
    fn extract_peers(source: &Source) -> Result<Value> {
        let text = source
            .as_text()
            .ok_or_else(|| Error::FailExtract("expected captured text".into()))?;
        let mut out = IndexMap::new();
        for line in text.lines() {
            let mut fields = line.split_whitespace();
            let (Some(peer), Some(status), Some(uptime)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            let mut record = IndexMap::new();
            record.insert("status".to_owned(), Value::from(status));
            record.insert("uptime".to_owned(), Value::from(uptime));
            out.insert(peer.to_owned(), Value::from(record));
        }
        Ok(Value::from(out))
    }

    #[test]
    fn text_source_end_to_end() {
        let schema = uptime_schema();
        let source = Source::from("peer1 Established 10:23:01\npeer2 Idle 00:00:07\n");
        let value = ParseRun::new(&schema)
            .parse(&mut extract_peers, &source)
            .unwrap();
        assert_eq!(value["peer1"]["status"], Value::from("Established"));
        assert_eq!(value["peer2"]["uptime"], Value::from("00:00:07"));
    }

    #[test]
    fn empty_output_is_its_own_error() {
        let schema = uptime_schema();
        // No line matches, so extraction produces {} even though it ran fine.
        let err = ParseRun::new(&schema)
            .parse(&mut extract_peers, &Source::from("\n\n"))
            .unwrap_err();
        assert_eq!(err, Error::EmptyParse);

        // An empty array counts the same way.
        let mut empty_array = |_: &Source| Ok(Value::Array(Vec::new()));
        let err = ParseRun::new(&schema)
            .parse(&mut empty_array, &Source::from(""))
            .unwrap_err();
        assert_eq!(err, Error::EmptyParse);
    }

    #[test]
    fn empty_wins_over_an_accepting_schema() {
        // The schema would happily validate {}, but the run screens it out
        // first.
        let schema = SchemaBuilder::new(
            MapValidator::new()
                .opt_add("a", IntValidator::new().build())
                .build(),
        )
        .build();
        let mut empty = |_: &Source| Ok(Value::Map(IndexMap::new()));
        let err = ParseRun::new(&schema)
            .parse(&mut empty, &Source::from(""))
            .unwrap_err();
        assert_eq!(err, Error::EmptyParse);
    }

    #[test]
    fn shape_errors_propagate() {
        let schema = uptime_schema();
        let mut wrong_shape = |_: &Source| {
            let mut record = IndexMap::new();
            record.insert("status".to_owned(), Value::from("Established"));
            let mut out = IndexMap::new();
            out.insert("peer1".to_owned(), Value::from(record));
            Ok(Value::from(out))
        };
        let err = ParseRun::new(&schema)
            .parse(&mut wrong_shape, &Source::from(""))
            .unwrap_err();
        assert!(matches!(err, Error::MissingKey { ref key, .. } if key == "uptime"));
    }

    #[test]
    fn extraction_failure_propagates() {
        let schema = uptime_schema();
        let err = ParseRun::new(&schema)
            .parse(
                &mut extract_peers,
                &Source::from(Value::from("already structured")),
            )
            .unwrap_err();
        assert_eq!(err, Error::FailExtract("expected captured text".into()));
    }

    #[test]
    fn structured_source_end_to_end() {
        let schema = uptime_schema();
        let body: Value = serde_json::from_str(
            r#"{"peer1": {"status": "Established", "uptime": "10:23:01"}}"#,
        )
        .unwrap();
        // A passthrough extractor for output that arrived structured.
        let mut passthrough = |source: &Source| {
            source
                .as_structured()
                .cloned()
                .ok_or_else(|| Error::FailExtract("expected structured data".into()))
        };
        let value = ParseRun::new(&schema)
            .parse(&mut passthrough, &Source::from(body.clone()))
            .unwrap();
        // Returned unchanged.
        assert_eq!(value, body);
    }
}
