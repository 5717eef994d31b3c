use super::*;
use crate::integer::Integer;

#[inline]
fn int_is_max(v: &Integer) -> bool {
    *v == Integer::max_value()
}

#[inline]
fn int_is_min(v: &Integer) -> bool {
    *v == Integer::min_value()
}

/// Validator for integer values.
///
/// This validator type will only pass integers. Validation passes if:
///
/// - If the `in` list is not empty, the integer must be among the values in
///     the list.
/// - The integer must not be among the values in the `nin` list.
/// - The integer is less than or equal to the value in `max`.
/// - The integer is greater than or equal to the value in `min`.
///
/// # Defaults
///
/// Fields that aren't specified for the validator use their defaults
/// instead. The defaults for each field are:
///
/// - comment: ""
/// - in_list: empty
/// - nin_list: empty
/// - max: `u64::MAX`
/// - min: `i64::MIN`
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct IntValidator {
    /// An optional comment explaining the validator.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// A vector of specific allowed values, stored under the `in` field. If empty, this vector is not checked against.
    #[serde(rename = "in", skip_serializing_if = "Vec::is_empty")]
    pub in_list: Vec<Integer>,
    /// A vector of specific unallowed values, stored under the `nin` field.
    #[serde(rename = "nin", skip_serializing_if = "Vec::is_empty")]
    pub nin_list: Vec<Integer>,
    /// The maximum allowed value.
    #[serde(skip_serializing_if = "int_is_max")]
    pub max: Integer,
    /// The minimum allowed value.
    #[serde(skip_serializing_if = "int_is_min")]
    pub min: Integer,
}

impl Default for IntValidator {
    fn default() -> Self {
        Self {
            comment: String::new(),
            in_list: Vec::new(),
            nin_list: Vec::new(),
            max: Integer::max_value(),
            min: Integer::min_value(),
        }
    }
}

impl IntValidator {
    /// Make a new validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a comment for the validator.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Add a value to the `in` list.
    pub fn in_add(mut self, add: impl Into<Integer>) -> Self {
        self.in_list.push(add.into());
        self
    }

    /// Add a value to the `nin` list.
    pub fn nin_add(mut self, add: impl Into<Integer>) -> Self {
        self.nin_list.push(add.into());
        self
    }

    /// Set the maximum allowed value.
    pub fn max(mut self, max: impl Into<Integer>) -> Self {
        self.max = max.into();
        self
    }

    /// Set the minimum allowed value.
    pub fn min(mut self, min: impl Into<Integer>) -> Self {
        self.min = min.into();
        self
    }

    /// Build this into a [`Validator`] enum.
    pub fn build(self) -> Validator {
        Validator::Int(Box::new(self))
    }

    pub(crate) fn validate(&self, path: &mut Path, value: &Value) -> Result<()> {
        let val = value
            .as_int()
            .ok_or_else(|| Error::type_mismatch(path, "int", value.type_name()))?;
        if val > self.max {
            return Err(Error::fail(
                path,
                format!("integer {} is greater than maximum allowed of {}", val, self.max),
            ));
        }
        if val < self.min {
            return Err(Error::fail(
                path,
                format!("integer {} is less than minimum allowed of {}", val, self.min),
            ));
        }
        if !self.in_list.is_empty() && !self.in_list.iter().any(|v| *v == val) {
            return Err(Error::fail(path, "integer is not on `in` list"));
        }
        if self.nin_list.iter().any(|v| *v == val) {
            return Err(Error::fail(path, "integer is on `nin` list"));
        }
        Ok(())
    }
}
