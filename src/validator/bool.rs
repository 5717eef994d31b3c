use super::*;

/// Validator for boolean values.
///
/// This validator type will only pass booleans. Validation passes if:
///
/// - If `constant` is set, the boolean must equal it.
///
/// # Defaults
///
/// Fields that aren't specified for the validator use their defaults
/// instead. The defaults for each field are:
///
/// - comment: ""
/// - constant: None
///
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BoolValidator {
    /// An optional comment explaining the validator.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// If set, the boolean must equal this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
}

impl BoolValidator {
    /// Make a new validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a comment for the validator.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Require the boolean to equal `constant`.
    pub fn constant(mut self, constant: bool) -> Self {
        self.constant = Some(constant);
        self
    }

    /// Build this into a [`Validator`] enum.
    pub fn build(self) -> Validator {
        Validator::Bool(Box::new(self))
    }

    pub(crate) fn validate(&self, path: &mut Path, value: &Value) -> Result<()> {
        let val = value
            .as_bool()
            .ok_or_else(|| Error::type_mismatch(path, "bool", value.type_name()))?;
        match self.constant {
            Some(constant) if constant != val => Err(Error::fail(
                path,
                format!("boolean isn't set to required value {}", constant),
            )),
            _ => Ok(()),
        }
    }
}
