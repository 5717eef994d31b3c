use std::fmt;

use regex::Regex;
use serde::{de, Deserializer, Serializer};

pub(super) fn serialize<S: Serializer>(
    value: &Option<Box<Regex>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value.as_deref() {
        // An absent pattern is skipped at the field level, so this arm is
        // only reachable through a hand-built serializer call.
        None => serializer.serialize_none(),
        Some(regex) => serializer.serialize_str(regex.as_str()),
    }
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Box<Regex>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PatternVisitor;

    impl de::Visitor<'_> for PatternVisitor {
        type Value = Box<Regex>;

        fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
            fmt.write_str("a regular expression pattern")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Regex::new(v).map(Box::new).map_err(de::Error::custom)
        }
    }

    // A null is rejected on purpose: the field holds either a pattern
    // string or is absent entirely.
    deserializer.deserialize_str(PatternVisitor).map(Some)
}
