use super::*;

#[inline]
fn is_false(v: &bool) -> bool {
    !v
}

#[inline]
fn validator_is_any(v: &Validator) -> bool {
    *v == Validator::Any
}

#[inline]
fn usize_is_zero(v: &usize) -> bool {
    *v == 0
}

#[inline]
fn usize_is_max(v: &usize) -> bool {
    *v == usize::MAX
}

/// Validator for arrays.
///
/// This validator type will only pass array values. Validation passes if:
///
/// - The array's length is less than or equal to the value in `max_len`.
/// - The array's length is greater than or equal to the value in `min_len`.
/// - Each item in the array passes the validator in `items`.
/// - If `unique` is true, the array items are all unique.
///
/// # Defaults
///
/// Fields that aren't specified for the validator use their defaults
/// instead. The defaults for each field are:
///
/// - comment: ""
/// - items: Validator::Any
/// - max_len: `usize::MAX`
/// - min_len: 0
/// - unique: false
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ArrayValidator {
    /// An optional comment explaining the validator.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// A validator that each item in the array must pass.
    #[serde(skip_serializing_if = "validator_is_any")]
    pub items: Box<Validator>,
    /// The maximum allowed number of items in the array.
    #[serde(skip_serializing_if = "usize_is_max")]
    pub max_len: usize,
    /// The minimum allowed number of items in the array.
    #[serde(skip_serializing_if = "usize_is_zero")]
    pub min_len: usize,
    /// If set, all items in the array must be unique.
    #[serde(skip_serializing_if = "is_false")]
    pub unique: bool,
}

impl Default for ArrayValidator {
    fn default() -> Self {
        Self {
            comment: String::new(),
            items: Box::new(Validator::Any),
            max_len: usize::MAX,
            min_len: usize::MIN,
            unique: false,
        }
    }
}

impl ArrayValidator {
    /// Make a new validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a comment for the validator.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the `items` validator.
    pub fn items(mut self, items: Validator) -> Self {
        self.items = Box::new(items);
        self
    }

    /// Set the maximum number of allowed items.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the minimum number of allowed items.
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Set whether the items in the array must be unique.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Build this into a [`Validator`] enum.
    pub fn build(self) -> Validator {
        Validator::Array(Box::new(self))
    }

    pub(crate) fn validate(&self, path: &mut Path, value: &Value) -> Result<()> {
        let array = value
            .as_array()
            .ok_or_else(|| Error::type_mismatch(path, "array", value.type_name()))?;

        if array.len() > self.max_len {
            return Err(Error::fail(
                path,
                format!(
                    "array is {} elements, longer than maximum allowed of {}",
                    array.len(),
                    self.max_len
                ),
            ));
        }
        if array.len() < self.min_len {
            return Err(Error::fail(
                path,
                format!(
                    "array is {} elements, shorter than minimum allowed of {}",
                    array.len(),
                    self.min_len
                ),
            ));
        }

        if self.unique
            && array
                .iter()
                .enumerate()
                .any(|(index, lhs)| array.iter().skip(index + 1).any(|rhs| lhs == rhs))
        {
            return Err(Error::fail(path, "array does not contain unique elements"));
        }

        for (index, item) in array.iter().enumerate() {
            path.push_index(index);
            self.items.validate(path, item)?;
            path.pop();
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::path::Segment;

    fn validate(validator: &ArrayValidator, value: &Value) -> Result<()> {
        validator.validate(&mut Path::new(), value)
    }

    fn strings(items: &[&str]) -> Value {
        Value::Array(items.iter().map(|s| Value::from(*s)).collect())
    }

    #[test]
    fn passes_any_array_by_default() {
        let validator = ArrayValidator::new();
        assert!(validate(&validator, &Value::Array(Vec::new())).is_ok());
        assert!(validate(&validator, &strings(&["Vlan100", "Vlan200"])).is_ok());
    }

    #[test]
    fn rejects_non_array() {
        let validator = ArrayValidator::new();
        let err = validate(&validator, &Value::from("Vlan100,Vlan200")).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { expected: "array", actual: "str", .. }));
    }

    #[test]
    fn every_element_checked() {
        let validator = ArrayValidator::new().items(StrValidator::new().build());
        assert!(validate(&validator, &strings(&["Vlan100", "Vlan200"])).is_ok());

        let mixed = Value::Array(vec![Value::from("Vlan100"), Value::from(200u16)]);
        let err = validate(&validator, &mixed).unwrap_err();
        let expected: Path = [Segment::Index(1)].into_iter().collect();
        assert_eq!(err.path(), Some(&expected));
    }

    #[test]
    fn length_bounds() {
        let validator = ArrayValidator::new().min_len(1).max_len(2);
        assert!(validate(&validator, &strings(&["a"])).is_ok());
        assert!(validate(&validator, &strings(&[])).is_err());
        assert!(validate(&validator, &strings(&["a", "b", "c"])).is_err());
    }

    #[test]
    fn unique() {
        let validator = ArrayValidator::new().unique(true);
        assert!(validate(&validator, &strings(&["Vlan100", "Vlan200"])).is_ok());
        assert!(validate(&validator, &strings(&["Vlan100", "Vlan100"])).is_err());
        // A single element is trivially unique.
        assert!(validate(&validator, &strings(&["Vlan100"])).is_ok());
    }
}
