use super::*;

/// Container for multiple accepted validators.
///
/// This validator tries each validator in `any_of`, in order, and passes if
/// any one of them passes. Useful for fields a device reports in more than
/// one form, like a peering state that is either a string description or a
/// prefix count.
///
/// # Defaults
///
/// - comment: ""
/// - any_of: empty. An empty `any_of` list passes nothing.
///
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MultiValidator {
    /// An optional comment explaining the validator.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// The list of validators to try.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<Validator>,
}

impl MultiValidator {
    /// Make a new validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a comment for the validator.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Add a validator to the `any_of` list.
    pub fn any_of_add(mut self, validator: Validator) -> Self {
        self.any_of.push(validator);
        self
    }

    /// Build this into a [`Validator`] enum.
    pub fn build(self) -> Validator {
        Validator::Multi(self)
    }

    pub(crate) fn validate(&self, path: &mut Path, value: &Value) -> Result<()> {
        // Each attempt gets its own path copy; a failed branch must not
        // leave segments behind for the next one.
        if self
            .any_of
            .iter()
            .any(|validator| validator.validate(&mut path.clone(), value).is_ok())
        {
            Ok(())
        } else {
            Err(Error::fail(
                path,
                "failed against all of the `any_of` validators",
            ))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn validate(validator: &MultiValidator, value: &Value) -> Result<()> {
        validator.validate(&mut Path::new(), value)
    }

    #[test]
    fn empty_passes_nothing() {
        let validator = MultiValidator::new();
        assert!(validate(&validator, &Value::Null).is_err());
    }

    #[test]
    fn any_branch_passes() {
        // state_pfxrcd: either a prefix count or a state name.
        let validator = MultiValidator::new()
            .any_of_add(IntValidator::new().min(0u8).build())
            .any_of_add(
                StrValidator::new()
                    .in_add("Idle")
                    .in_add("Active")
                    .in_add("Idle (Admin)")
                    .build(),
            );
        assert!(validate(&validator, &Value::from(100u8)).is_ok());
        assert!(validate(&validator, &Value::from("Idle")).is_ok());
        assert!(validate(&validator, &Value::from("Connected")).is_err());
        assert!(validate(&validator, &Value::from(true)).is_err());
    }

    #[test]
    fn reports_at_failing_path() {
        let validator = MapValidator::new().req_add(
            "state",
            MultiValidator::new()
                .any_of_add(IntValidator::new().build())
                .build(),
        );
        let mut value = indexmap::IndexMap::new();
        value.insert("state".to_owned(), Value::from(false));
        let err = validator
            .validate(&mut Path::new(), &Value::from(value))
            .unwrap_err();
        let expected: Path = [crate::path::Segment::Key("state".into())]
            .into_iter()
            .collect();
        assert_eq!(err.path(), Some(&expected));
    }
}
