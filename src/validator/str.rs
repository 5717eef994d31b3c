use std::borrow::Cow;

use regex::Regex;

use super::*;

#[inline]
fn usize_is_zero(v: &usize) -> bool {
    *v == 0
}

#[inline]
fn usize_is_max(v: &usize) -> bool {
    *v == usize::MAX
}

#[inline]
fn normalize_is_none(v: &Normalize) -> bool {
    matches!(v, Normalize::None)
}

/// Validator for UTF-8 strings.
///
/// This validator type will only pass UTF-8 strings. Validation passes if:
///
/// - The number of bytes in the string is less than or equal to `max_len`.
/// - The number of bytes in the string is greater than or equal to `min_len`.
/// - If the `in` list is not empty, the possibly-normalized string must be
///     among the strings in the list.
/// - The possibly-normalized string must not be among the strings in the
///     `nin` list.
/// - If a regular expression is present in `matches`, the
///     possibly-normalized string must match against the expression.
///
/// The `normalize` field sets any Unicode normalization that should be
/// applied to the string before the `in`, `nin`, and `matches` checks. The
/// byte-length checks always run against the string as it appears in the
/// parsed value.
///
/// # Defaults
///
/// Fields that aren't specified for the validator use their defaults
/// instead. The defaults for each field are:
///
/// - comment: ""
/// - in_list: empty
/// - nin_list: empty
/// - matches: None
/// - normalize: Normalize::None
/// - max_len: `usize::MAX`
/// - min_len: 0
///
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct StrValidator {
    /// An optional comment explaining the validator.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// A vector of specific allowed values, stored under the `in` field. If empty, this vector is not checked against.
    #[serde(rename = "in", skip_serializing_if = "Vec::is_empty")]
    pub in_list: Vec<String>,
    /// A vector of specific unallowed values, stored under the `nin` field.
    #[serde(rename = "nin", skip_serializing_if = "Vec::is_empty")]
    pub nin_list: Vec<String>,
    /// A regular expression that the value must match against.
    #[serde(skip_serializing_if = "Option::is_none", with = "serde_regex")]
    pub matches: Option<Box<Regex>>,
    /// The Unicode normalization setting.
    #[serde(skip_serializing_if = "normalize_is_none")]
    pub normalize: Normalize,
    /// The maximum allowed number of bytes in the string value.
    #[serde(skip_serializing_if = "usize_is_max")]
    pub max_len: usize,
    /// The minimum allowed number of bytes in the string value.
    #[serde(skip_serializing_if = "usize_is_zero")]
    pub min_len: usize,
}

impl Default for StrValidator {
    fn default() -> Self {
        Self {
            comment: String::new(),
            in_list: Vec::new(),
            nin_list: Vec::new(),
            matches: None,
            normalize: Normalize::None,
            max_len: usize::MAX,
            min_len: usize::MIN,
        }
    }
}

impl StrValidator {
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
    pub fn in_add(mut self, add: impl Into<String>) -> Self {
        self.in_list.push(add.into());
        self
    }

    /// Add a value to the `nin` list.
    pub fn nin_add(mut self, add: impl Into<String>) -> Self {
        self.nin_list.push(add.into());
        self
    }

    /// Set the regular expression to check against.
    pub fn matches(mut self, matches: Regex) -> Self {
        self.matches = Some(Box::new(matches));
        self
    }

    /// Set the unicode normalization form to use for the `in`, `nin`, and
    /// `matches` checks.
    pub fn normalize(mut self, normalize: Normalize) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the maximum number of allowed bytes.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the minimum number of allowed bytes.
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Build this into a [`Validator`] enum.
    pub fn build(self) -> Validator {
        Validator::Str(Box::new(self))
    }

    pub(crate) fn validate(&self, path: &mut Path, value: &Value) -> Result<()> {
        let val = value
            .as_str()
            .ok_or_else(|| Error::type_mismatch(path, "str", value.type_name()))?;

        // Length checks
        if val.len() > self.max_len {
            return Err(Error::fail(path, "string is longer than max_len"));
        }
        if val.len() < self.min_len {
            return Err(Error::fail(path, "string is shorter than min_len"));
        }

        // Content checks, with both sides normalized.
        let val = normalized(&self.normalize, val);
        if !self.in_list.is_empty()
            && !self
                .in_list
                .iter()
                .any(|v| normalized(&self.normalize, v) == val)
        {
            return Err(Error::fail(path, "string is not on `in` list"));
        }
        if self
            .nin_list
            .iter()
            .any(|v| normalized(&self.normalize, v) == val)
        {
            return Err(Error::fail(path, "string is on `nin` list"));
        }
        if let Some(ref regex) = self.matches {
            if !regex.is_match(&val) {
                return Err(Error::fail(path, "string doesn't match regular expression"));
            }
        }
        Ok(())
    }
}

impl PartialEq for StrValidator {
    fn eq(&self, rhs: &Self) -> bool {
        (self.in_list == rhs.in_list)
            && (self.nin_list == rhs.nin_list)
            && (self.normalize == rhs.normalize)
            && (self.max_len == rhs.max_len)
            && (self.min_len == rhs.min_len)
            && match (&self.matches, &rhs.matches) {
                (None, None) => true,
                (Some(_), None) => false,
                (None, Some(_)) => false,
                (Some(lhs), Some(rhs)) => lhs.as_str() == rhs.as_str(),
            }
    }
}

/// Apply a normalization form, borrowing when the input is already
/// normalized.
pub(super) fn normalized<'a>(normalize: &Normalize, val: &'a str) -> Cow<'a, str> {
    use unicode_normalization::{is_nfc_quick, is_nfkc_quick, IsNormalized, UnicodeNormalization};
    match *normalize {
        Normalize::None => Cow::Borrowed(val),
        Normalize::NFC => match is_nfc_quick(val.chars()) {
            IsNormalized::Yes => Cow::Borrowed(val),
            _ => Cow::Owned(val.nfc().collect()),
        },
        Normalize::NFKC => match is_nfkc_quick(val.chars()) {
            IsNormalized::Yes => Cow::Borrowed(val),
            _ => Cow::Owned(val.nfkc().collect()),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn validate(validator: &StrValidator, value: &Value) -> Result<()> {
        validator.validate(&mut Path::new(), value)
    }

    #[test]
    fn passes_any_str_by_default() {
        let validator = StrValidator::new();
        assert!(validate(&validator, &Value::from("")).is_ok());
        assert!(validate(&validator, &Value::from("Idle (Admin)")).is_ok());
    }

    #[test]
    fn rejects_non_str() {
        let validator = StrValidator::new();
        let err = validate(&validator, &Value::from(true)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { expected: "str", actual: "bool", .. }));
    }

    #[test]
    fn byte_length() {
        let validator = StrValidator::new().min_len(1).max_len(255);
        assert!(validate(&validator, &Value::from("Vlan100")).is_ok());
        assert!(validate(&validator, &Value::from("")).is_err());
        assert!(validate(&validator, &Value::from("x".repeat(256).as_str())).is_err());
    }

    #[test]
    fn matches() {
        // Interface names like Vlan100 or GigabitEthernet0/0/1.
        let validator = StrValidator::new().matches(Regex::new(r"^[A-Za-z]+[\d/.]+$").unwrap());
        assert!(validate(&validator, &Value::from("Vlan100")).is_ok());
        assert!(validate(&validator, &Value::from("GigabitEthernet0/0/1")).is_ok());
        assert!(validate(&validator, &Value::from("not an interface")).is_err());
    }

    #[test]
    fn in_nin() {
        let validator = StrValidator::new()
            .in_add("Routed")
            .in_add("Transparent");
        assert!(validate(&validator, &Value::from("Routed")).is_ok());
        assert!(validate(&validator, &Value::from("Bridged")).is_err());

        let validator = StrValidator::new().nin_add(".").nin_add("..");
        assert!(validate(&validator, &Value::from("admin.cfg")).is_ok());
        assert!(validate(&validator, &Value::from(".")).is_err());
    }

    #[test]
    fn normalization() {
        // "é" composed vs decomposed. NFC folds them together.
        let composed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        let validator = StrValidator::new()
            .normalize(Normalize::NFC)
            .in_add(composed);
        assert!(validate(&validator, &Value::from(composed)).is_ok());
        assert!(validate(&validator, &Value::from(decomposed)).is_ok());

        let strict = StrValidator::new().in_add(composed);
        assert!(validate(&strict, &Value::from(decomposed)).is_err());
    }

    #[test]
    fn ser_round_trip() {
        let validator = StrValidator::new()
            .matches(Regex::new(r"^\d+:\d+$").unwrap())
            .max_len(64);
        let json = serde_json::to_value(&validator).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "matches": r"^\d+:\d+$", "max_len": 64 })
        );
        let back: StrValidator = serde_json::from_value(json).unwrap();
        assert_eq!(back, validator);
    }
}
