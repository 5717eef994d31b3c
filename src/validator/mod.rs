//! Validators, for building [`Schema`][crate::schema::Schema]s.
//!
//! This submodule contains the various validators, which can be transformed
//! into the [`Validator`] enum type for use in a Schema. Each struct acts as
//! a constructor that can be built into a `Validator`.
//!
//! There is a validator for each runtime value type:
//! - [`Validator::Null`][Validator::new_null] - for the null type.
//! - [`BoolValidator`] - for booleans.
//! - [`IntValidator`] - for [`Integer`][crate::integer::Integer] values.
//! - [`F64Validator`] - for `f64` values.
//! - [`StrValidator`] - for UTF-8 strings.
//! - [`ArrayValidator`] - for sequences.
//! - [`MapValidator`] - for string-keyed maps.
//!
//! In addition, there are 2 special validators:
//! - [`MultiValidator`] - Will attempt a sequence of validators, passing if
//!     any one of them pass.
//! - [`Validator::Any`][Validator::new_any] - accepts any value without
//!     examining it.
//!
//! # Examples
//!
//! Say we want to validate the parsed output of a security-context listing:
//! a map from context name to a record holding the context's class, mode,
//! and configuration URL, plus a map of its interfaces. Context names are
//! arbitrary, so they go through the map's wildcard `values` validator:
//!
//! ```
//! # use outshape::validator::*;
//! let contexts = MapValidator::new()
//!     .values(
//!         MapValidator::new()
//!             .req_add("candidate_default", BoolValidator::new().build())
//!             .req_add("class", StrValidator::new().build())
//!             .req_add("mode", StrValidator::new().build())
//!             .req_add("url", StrValidator::new().build())
//!             .req_add(
//!                 "interfaces",
//!                 MapValidator::new()
//!                     .values(
//!                         MapValidator::new()
//!                             .req_add("interface", StrValidator::new().build())
//!                             .build(),
//!                     )
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .build();
//! ```

mod array;
mod bool;
mod float64;
mod integer;
mod map;
mod multi;
mod serde_regex;
mod str;

pub use self::array::*;
pub use self::bool::*;
pub use self::float64::*;
pub use self::integer::*;
pub use self::map::*;
pub use self::multi::*;
pub use self::str::*;

use crate::error::{Error, Result};
use crate::path::Path;
use crate::value::Value;

use serde::{Deserialize, Serialize};

/// [Unicode Normalization](http://www.unicode.org/reports/tr15/) settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Normalize {
    /// No normalization applied.
    None,
    /// NFC normalization applied.
    NFC,
    /// NFKC normalization applied.
    NFKC,
}

/// A validator, deciding whether a runtime [`Value`] conforms to a declared
/// shape.
///
/// Validators are not used directly; they are built into a
/// [`Schema`][crate::schema::Schema], which runs them against parsed values.
/// This enum contains all possible validators. See the
/// [module-level documentation][crate::validator] for details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Validator {
    /// [`Validator::Null`][Validator::new_null] - for the null type.
    Null,
    /// [`BoolValidator`] - for booleans.
    Bool(Box<BoolValidator>),
    /// [`IntValidator`] - for [`Integer`][crate::integer::Integer] values.
    Int(Box<IntValidator>),
    /// [`F64Validator`] - for `f64` values.
    F64(Box<F64Validator>),
    /// [`StrValidator`] - for UTF-8 strings.
    Str(Box<StrValidator>),
    /// [`ArrayValidator`] - for sequences.
    Array(Box<ArrayValidator>),
    /// [`MapValidator`] - for string-keyed maps.
    Map(Box<MapValidator>),
    /// [`MultiValidator`] - Will attempt a sequence of validators, passing
    /// if any one of them pass.
    Multi(MultiValidator),
    /// [`Validator::Any`][Validator::new_any] - accepts any value without
    /// examining it.
    Any,
}

impl Validator {
    /// Create a new validator for the Null value.
    pub fn new_null() -> Self {
        Self::Null
    }

    /// Create a new validator that passes any value.
    pub fn new_any() -> Self {
        Self::Any
    }

    pub(crate) fn validate(&self, path: &mut Path, value: &Value) -> Result<()> {
        match self {
            Validator::Null => {
                if value.is_null() {
                    Ok(())
                } else {
                    Err(Error::type_mismatch(path, "null", value.type_name()))
                }
            }
            Validator::Bool(validator) => validator.validate(path, value),
            Validator::Int(validator) => validator.validate(path, value),
            Validator::F64(validator) => validator.validate(path, value),
            Validator::Str(validator) => validator.validate(path, value),
            Validator::Array(validator) => validator.validate(path, value),
            Validator::Map(validator) => validator.validate(path, value),
            Validator::Multi(validator) => validator.validate(path, value),
            Validator::Any => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn null() {
        let mut path = Path::new();
        assert!(Validator::new_null()
            .validate(&mut path, &Value::Null)
            .is_ok());
        let err = Validator::new_null()
            .validate(&mut path, &Value::from(0u8))
            .unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                path: Path::new(),
                expected: "null",
                actual: "int"
            }
        );
    }

    #[test]
    fn any() {
        let mut path = Path::new();
        for value in [
            Value::Null,
            Value::from(true),
            Value::from("anything"),
            Value::Array(vec![Value::from(1u8)]),
        ] {
            assert!(Validator::new_any().validate(&mut path, &value).is_ok());
        }
    }

    #[test]
    fn ser_variant_names() {
        // Validator serialization is externally tagged; the leaf validators
        // with all-default fields serialize as empty maps.
        let val = serde_json::to_value(StrValidator::new().build()).unwrap();
        assert_eq!(val, serde_json::json!({ "Str": {} }));
        let val = serde_json::to_value(Validator::new_any()).unwrap();
        assert_eq!(val, serde_json::json!("Any"));
    }
}
