use indexmap::IndexMap;
use regex::Regex;
use serde::Deserializer;

use super::str::normalized;
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

#[inline]
fn key_validator_is_default(v: &KeyValidator) -> bool {
    v.matches.is_none()
        && normalize_is_none(&v.normalize)
        && usize_is_max(&v.max_len)
        && usize_is_zero(&v.min_len)
}

/// Special validator for the keys in a map. Used by [`MapValidator`].
///
/// This validator is run against every key string in the map, whether the
/// key is declared literally or covered by the wildcard. Validation passes
/// if:
///
/// - The number of bytes in the key is less than or equal to `max_len`.
/// - The number of bytes in the key is greater than or equal to `min_len`.
/// - If a regular expression is present in `matches`, the
///     possibly-normalized key must match against the expression.
///
/// The `normalize` field sets any Unicode normalization that should be
/// applied to the key before the `matches` check. See [`StrValidator`]'s
/// documentation for details.
///
/// # Defaults
///
/// Fields that aren't specified for the validator use their defaults
/// instead. The defaults for each field are:
///
/// - matches: None
/// - normalize: Normalize::None
/// - max_len: `usize::MAX`
/// - min_len: 0
///
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct KeyValidator {
    /// A regular expression that the key must match against.
    #[serde(skip_serializing_if = "Option::is_none", with = "serde_regex")]
    pub matches: Option<Box<Regex>>,
    /// The Unicode normalization setting.
    #[serde(skip_serializing_if = "normalize_is_none")]
    pub normalize: Normalize,
    /// The maximum allowed number of bytes in the key.
    #[serde(skip_serializing_if = "usize_is_max")]
    pub max_len: usize,
    /// The minimum allowed number of bytes in the key.
    #[serde(skip_serializing_if = "usize_is_zero")]
    pub min_len: usize,
}

impl KeyValidator {
    /// Make a new validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the regular expression to check against.
    pub fn matches(mut self, matches: Regex) -> Self {
        self.matches = Some(Box::new(matches));
        self
    }

    /// Set the unicode normalization form to use for the `matches` check.
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

    fn validate(&self, path: &mut Path, key: &str) -> Result<()> {
        if key.len() > self.max_len {
            return Err(Error::fail(
                path,
                format!("map key {:?} is longer than max_len", key),
            ));
        }
        if key.len() < self.min_len {
            return Err(Error::fail(
                path,
                format!("map key {:?} is shorter than min_len", key),
            ));
        }
        if let Some(ref regex) = self.matches {
            let key = normalized(&self.normalize, key);
            if !regex.is_match(&key) {
                return Err(Error::fail(
                    path,
                    format!("map key {:?} doesn't match regular expression", key),
                ));
            }
        }
        Ok(())
    }
}

impl PartialEq for KeyValidator {
    fn eq(&self, rhs: &Self) -> bool {
        (self.normalize == rhs.normalize)
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

impl Default for KeyValidator {
    fn default() -> Self {
        Self {
            matches: None,
            max_len: usize::MAX,
            min_len: usize::MIN,
            normalize: Normalize::None,
        }
    }
}

fn get_validator<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Box<Validator>>, D::Error> {
    // Decode the validator. If this function is called, there should be an actual validator
    // present. Otherwise we fail. In other words, no `null` allowed.
    Ok(Some(Box::new(Validator::deserialize(deserializer)?)))
}

/// Validator for maps.
///
/// This validator will only pass maps, whose keys are strings and values are
/// any runtime value. Validation passes if:
///
/// - The number of key-value pairs in the map is less than or equal to the
///     value in `max_len`.
/// - The number of key-value pairs in the map is greater than or equal to
///     the value in `min_len`.
/// - Each key passes the [`KeyValidator`] in `keys`.
/// - Each key is not among the strings in the `ban` list.
/// - There must be a matching key-value pair in the map for each
///     key-validator pair in `req`.
/// - For each key-value pair in the map:
///     1. If the key is in `req`, the corresponding validator is used to
///        validate the value.
///     2. If the key is not in `req` but is in `opt`, the corresponding
///        validator is used to validate the value.
///     3. If the key is not in `req` or `opt`, the validator for `values`
///        is used to validate the value.
///     4. If there is no validator for `values`, validation does not pass.
///
/// Literal keys therefore always take precedence over the `values`
/// wildcard, and the wildcard covers the remainder. A map holding none of
/// the wildcard-covered keys still passes; the wildcard is inherently
/// optional.
///
/// The `req` and `opt` pairs are checked in declaration order, and the
/// remaining runtime keys in the map's insertion order, so the first failure
/// reported for a given map is deterministic.
///
/// # Defaults
///
/// Fields that aren't specified for the validator use their defaults
/// instead. The defaults for each field are:
///
/// - comment: ""
/// - max_len: `usize::MAX`
/// - min_len: 0
/// - keys: KeyValidator::default()
/// - values: None
/// - req: empty
/// - opt: empty
/// - ban: empty
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MapValidator {
    /// An optional comment explaining the validator.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// The maximum allowed number of key-value pairs in the map.
    #[serde(skip_serializing_if = "usize_is_max")]
    pub max_len: usize,
    /// The minimum allowed number of key-value pairs in the map.
    #[serde(skip_serializing_if = "usize_is_zero")]
    pub min_len: usize,
    /// The sub-validator for keys in the map.
    #[serde(skip_serializing_if = "key_validator_is_default")]
    pub keys: KeyValidator,
    /// An optional validator that each value in the map must pass, unless it
    /// is instead checked by a validator in `req` or `opt`. Unchecked values
    /// cause the map to fail validation.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "get_validator"
    )]
    pub values: Option<Box<Validator>>,
    /// A map whose keys must all be present in a passing map, and whose
    /// validators are used to check the value held by a matching key in the
    /// map. Kept in declaration order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub req: IndexMap<String, Validator>,
    /// A map whose keys may be present in a map, and whose validators are
    /// used to check the value held by a matching key in the map, unless it
    /// is first checked by a validator in `req`. Kept in declaration order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub opt: IndexMap<String, Validator>,
    /// A list of keys that may not be present in the map.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ban: Vec<String>,
}

impl Default for MapValidator {
    fn default() -> Self {
        Self {
            comment: String::new(),
            max_len: usize::MAX,
            min_len: usize::MIN,
            keys: KeyValidator::default(),
            values: None,
            req: IndexMap::new(),
            opt: IndexMap::new(),
            ban: Vec::new(),
        }
    }
}

impl MapValidator {
    /// Make a new validator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a comment for the validator.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the wildcard `values` validator.
    pub fn values(mut self, values: Validator) -> Self {
        self.values = Some(Box::new(values));
        self
    }

    /// Add a new validator to the `req` map.
    pub fn req_add(mut self, key: impl Into<String>, req: Validator) -> Self {
        self.req.insert(key.into(), req);
        self
    }

    /// Add a new validator to the `opt` map.
    pub fn opt_add(mut self, key: impl Into<String>, opt: Validator) -> Self {
        self.opt.insert(key.into(), opt);
        self
    }

    /// Add a new key to the `ban` list.
    pub fn ban_add(mut self, ban: impl Into<String>) -> Self {
        self.ban.push(ban.into());
        self
    }

    /// Set the Key Validator.
    pub fn keys(mut self, keys: KeyValidator) -> Self {
        self.keys = keys;
        self
    }

    /// Set the maximum number of allowed key-value pairs.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the minimum number of allowed key-value pairs.
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Build this into a [`Validator`] enum.
    pub fn build(self) -> Validator {
        Validator::Map(Box::new(self))
    }

    pub(crate) fn validate(&self, path: &mut Path, value: &Value) -> Result<()> {
        let map = value
            .as_map()
            .ok_or_else(|| Error::type_mismatch(path, "map", value.type_name()))?;

        if map.len() > self.max_len {
            return Err(Error::fail(
                path,
                format!(
                    "map is {} pairs, longer than maximum allowed of {}",
                    map.len(),
                    self.max_len
                ),
            ));
        }
        if map.len() < self.min_len {
            return Err(Error::fail(
                path,
                format!(
                    "map is {} pairs, shorter than minimum allowed of {}",
                    map.len(),
                    self.min_len
                ),
            ));
        }

        // Key checks cover every runtime key, declared or not.
        for key in map.keys() {
            self.keys.validate(path, key)?;
            if self.ban.iter().any(|k| k == key) {
                return Err(Error::fail(
                    path,
                    format!("map key {:?} is on the ban list", key),
                ));
            }
        }

        // Literal keys, in declaration order.
        for (key, validator) in &self.req {
            match map.get(key) {
                Some(item) => {
                    path.push_key(key.as_str());
                    validator.validate(path, item)?;
                    path.pop();
                }
                None => {
                    return Err(Error::MissingKey {
                        path: path.clone(),
                        key: key.clone(),
                    })
                }
            }
        }
        for (key, validator) in &self.opt {
            if let Some(item) = map.get(key) {
                path.push_key(key.as_str());
                validator.validate(path, item)?;
                path.pop();
            }
        }

        // Whatever the literal keys didn't claim goes through the wildcard,
        // in the map's insertion order.
        for (key, item) in map {
            if self.req.contains_key(key) || self.opt.contains_key(key) {
                continue;
            }
            match self.values {
                Some(ref validator) => {
                    path.push_key(key.as_str());
                    validator.validate(path, item)?;
                    path.pop();
                }
                None => {
                    return Err(Error::ExtraKey {
                        path: path.clone(),
                        key: key.clone(),
                    })
                }
            }
        }
        Ok(())
    }
}
