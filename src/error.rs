use std::fmt;

use crate::path::Path;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that end a parse or validation pass.
///
/// Every variant is terminal for the invocation that produced it: nothing is
/// retried or downgraded internally, and no partial result is ever returned.
/// Callers match on the variant to tell "the device returned no matching
/// data" ([`EmptyParse`][Error::EmptyParse]) apart from a parser or schema
/// incompatibility (the shape variants).
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A required key was absent from a map.
    MissingKey { path: Path, key: String },
    /// A map held a key with no matching schema entry and no wildcard
    /// coverage.
    ExtraKey { path: Path, key: String },
    /// A value's runtime type differed from the type its schema node
    /// declares.
    TypeMismatch {
        path: Path,
        expected: &'static str,
        actual: &'static str,
    },
    /// A value had the declared type but failed a constraint on it, such as
    /// a range bound, a regular expression, or an `in`/`nin` list.
    FailValidate { path: Path, reason: String },
    /// The extraction stage ran but produced no data at all. Distinct from
    /// any shape failure, even when the schema itself would accept an empty
    /// map.
    EmptyParse,
    /// The extraction routine itself failed before producing a value.
    FailExtract(String),
}

impl Error {
    pub(crate) fn fail(path: &Path, reason: impl Into<String>) -> Self {
        Error::FailValidate {
            path: path.clone(),
            reason: reason.into(),
        }
    }

    pub(crate) fn type_mismatch(path: &Path, expected: &'static str, actual: &'static str) -> Self {
        Error::TypeMismatch {
            path: path.clone(),
            expected,
            actual,
        }
    }

    /// The location the error points at, if it carries one.
    pub fn path(&self) -> Option<&Path> {
        match *self {
            Error::MissingKey { ref path, .. }
            | Error::ExtraKey { ref path, .. }
            | Error::TypeMismatch { ref path, .. }
            | Error::FailValidate { ref path, .. } => Some(path),
            Error::EmptyParse | Error::FailExtract(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingKey { ref path, ref key } => {
                write!(f, "missing required key {:?} in map at {}", key, path)
            }
            Error::ExtraKey { ref path, ref key } => {
                write!(f, "unexpected key {:?} in map at {}", key, path)
            }
            Error::TypeMismatch {
                ref path,
                expected,
                actual,
            } => write!(f, "expected {} at {}, got {}", expected, path, actual),
            Error::FailValidate {
                ref path,
                ref reason,
            } => write!(f, "failed validation at {}: {}", path, reason),
            Error::EmptyParse => f.write_str("parser produced no data"),
            Error::FailExtract(ref msg) => write!(f, "extraction failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
