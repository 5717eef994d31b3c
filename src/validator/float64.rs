use super::*;

#[inline]
fn f64_is_max(v: &f64) -> bool {
    *v == f64::INFINITY
}

#[inline]
fn f64_is_min(v: &f64) -> bool {
    *v == f64::NEG_INFINITY
}

/// Validator for `f64` values.
///
/// This validator type will only pass 64-bit floating-point values.
/// Validation passes if:
///
/// - If the `in` list is not empty, the value must be among the values in
///     the list.
/// - The value must not be among the values in the `nin` list.
/// - The value is less than or equal to the value in `max`.
/// - The value is greater than or equal to the value in `min`.
///
/// NaN never satisfies the `max`/`min` comparisons, so a bounded validator
/// rejects NaN.
///
/// # Defaults
///
/// Fields that aren't specified for the validator use their defaults
/// instead. The defaults for each field are:
///
/// - comment: ""
/// - in_list: empty
/// - nin_list: empty
/// - max: `f64::INFINITY`
/// - min: `f64::NEG_INFINITY`
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct F64Validator {
    /// An optional comment explaining the validator.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// A vector of specific allowed values, stored under the `in` field. If empty, this vector is not checked against.
    #[serde(rename = "in", skip_serializing_if = "Vec::is_empty")]
    pub in_list: Vec<f64>,
    /// A vector of specific unallowed values, stored under the `nin` field.
    #[serde(rename = "nin", skip_serializing_if = "Vec::is_empty")]
    pub nin_list: Vec<f64>,
    /// The maximum allowed value.
    #[serde(skip_serializing_if = "f64_is_max")]
    pub max: f64,
    /// The minimum allowed value.
    #[serde(skip_serializing_if = "f64_is_min")]
    pub min: f64,
}

impl Default for F64Validator {
    fn default() -> Self {
        Self {
            comment: String::new(),
            in_list: Vec::new(),
            nin_list: Vec::new(),
            max: f64::INFINITY,
            min: f64::NEG_INFINITY,
        }
    }
}

impl F64Validator {
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
    pub fn in_add(mut self, add: f64) -> Self {
        self.in_list.push(add);
        self
    }

    /// Add a value to the `nin` list.
    pub fn nin_add(mut self, add: f64) -> Self {
        self.nin_list.push(add);
        self
    }

    /// Set the maximum allowed value.
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set the minimum allowed value.
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Build this into a [`Validator`] enum.
    pub fn build(self) -> Validator {
        Validator::F64(Box::new(self))
    }

    pub(crate) fn validate(&self, path: &mut Path, value: &Value) -> Result<()> {
        let val = value
            .as_f64()
            .ok_or_else(|| Error::type_mismatch(path, "f64", value.type_name()))?;
        // The negated comparisons make a bounded validator reject NaN.
        if !f64_is_max(&self.max) && !(val <= self.max) {
            return Err(Error::fail(
                path,
                format!("value {} is greater than maximum allowed of {}", val, self.max),
            ));
        }
        if !f64_is_min(&self.min) && !(val >= self.min) {
            return Err(Error::fail(
                path,
                format!("value {} is less than minimum allowed of {}", val, self.min),
            ));
        }
        if !self.in_list.is_empty() && !self.in_list.iter().any(|v| *v == val) {
            return Err(Error::fail(path, "value is not on `in` list"));
        }
        if self.nin_list.iter().any(|v| *v == val) {
            return Err(Error::fail(path, "value is on `nin` list"));
        }
        Ok(())
    }
}
