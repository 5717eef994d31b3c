use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;

use crate::integer::Integer;

/// A parsed runtime value: the structured form of one command's output.
///
/// Extraction routines build these incrementally, then hand the finished
/// value to a [`Schema`][crate::schema::Schema] for validation. Maps keep
/// their insertion order, which the validator relies on for deterministic
/// wildcard iteration.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(Integer),
    F64(f64),
    Str(String),
    Array(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Stable lowercase name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match *self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::F64(_) => "f64",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_i64(&self) -> bool {
        if let Value::Int(ref v) = *self {
            v.is_i64()
        } else {
            false
        }
    }

    pub fn is_u64(&self) -> bool {
        if let Value::Int(ref v) = *self {
            v.is_u64()
        } else {
            false
        }
    }

    pub fn is_f64(&self) -> bool {
        matches!(self, Value::F64(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(val) = *self {
            Some(val)
        } else {
            None
        }
    }

    pub fn as_int(&self) -> Option<Integer> {
        if let Value::Int(val) = *self {
            Some(val)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(ref n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Int(ref n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F64(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(ref val) = *self {
            Some(val.as_str())
        } else {
            None
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(ref array) = *self {
            Some(&*array)
        } else {
            None
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match *self {
            Value::Array(ref mut array) => Some(array),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Map(ref map) = *self {
            Some(map)
        } else {
            None
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        match *self {
            Value::Map(ref mut map) => Some(map),
            _ => None,
        }
    }
}

static NULL: Value = Value::Null;

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        self.as_array().and_then(|v| v.get(index)).unwrap_or(&NULL)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, index: &str) -> &Self::Output {
        self.as_map().and_then(|v| v.get(index)).unwrap_or(&NULL)
    }
}

macro_rules! impl_value_from_integer {
    ($t: ty) => {
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(Integer::from(v))
            }
        }
    };
}

macro_rules! impl_value_from {
    ($t: ty, $variant: ident) => {
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::$variant(v)
            }
        }
    };
}

impl_value_from!(bool, Bool);
impl_value_from!(Integer, Int);
impl_value_from!(f64, F64);
impl_value_from!(String, Str);
impl_value_from!(Vec<Value>, Array);
impl_value_from!(IndexMap<String, Value>, Map);
impl_value_from_integer!(u8);
impl_value_from_integer!(u16);
impl_value_from_integer!(u32);
impl_value_from_integer!(u64);
impl_value_from_integer!(usize);
impl_value_from_integer!(i8);
impl_value_from_integer!(i16);
impl_value_from_integer!(i32);
impl_value_from_integer!(i64);
impl_value_from_integer!(isize);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F64(v.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

use serde::{
    de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor},
    ser::{Serialize, SerializeMap, SerializeSeq, Serializer},
};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(v),
            Value::Int(ref v) => v.serialize(serializer),
            Value::F64(v) => serializer.serialize_f64(v),
            Value::Str(ref v) => serializer.serialize_str(v),
            Value::Array(ref v) => {
                let mut seq = serializer.serialize_seq(Some(v.len()))?;
                for item in v {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(ref v) => {
                let mut map = serializer.serialize_map(Some(v.len()))?;
                for (key, item) in v {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;
        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
                write!(fmt, "any valid parsed value")
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Value::Int(Integer::from(v)))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Value::Int(Integer::from(v)))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Value::F64(v))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Value::Str(v.to_owned()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Value::Str(v))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                Deserialize::deserialize(d)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut array = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    array.push(item);
                }
                Ok(Value::Array(array))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, item)) = access.next_entry::<String, Value>()? {
                    map.insert(key, item);
                }
                Ok(Value::Map(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors() {
        let val = Value::from("GigabitEthernet0/0/0");
        assert!(val.is_str());
        assert_eq!(val.as_str(), Some("GigabitEthernet0/0/0"));
        assert_eq!(val.as_i64(), None);
        assert_eq!(val.type_name(), "str");

        let val = Value::from(4u64);
        assert!(val.is_int());
        assert!(val.is_u64());
        assert_eq!(val.as_u64(), Some(4));
        assert_eq!(val.type_name(), "int");

        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn index() {
        let mut map = IndexMap::new();
        map.insert("version".to_owned(), Value::from(4u8));
        map.insert(
            "up_down".to_owned(),
            Value::Array(vec![Value::from("01:07:38")]),
        );
        let val = Value::from(map);
        assert_eq!(val["version"], Value::from(4u8));
        assert_eq!(val["up_down"][0], Value::from("01:07:38"));
        assert_eq!(val["up_down"][9], Value::Null);
        assert_eq!(val["missing"], Value::Null);
    }

    #[test]
    fn map_keeps_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("zebra".to_owned(), Value::from(1u8));
        map.insert("aardvark".to_owned(), Value::from(2u8));
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["zebra", "aardvark"]);
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::json!({
            "neighbor": "10.1.1.1",
            "as": 65000,
            "up": true,
            "msg_rcvd": [1, 2, 3],
            "description": null,
        });
        let val: Value = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(val["neighbor"], Value::from("10.1.1.1"));
        assert_eq!(val["as"], Value::from(65000u32));
        assert_eq!(val["up"], Value::from(true));
        assert_eq!(val["msg_rcvd"][2], Value::from(3u8));
        assert_eq!(val["description"], Value::Null);

        let back = serde_json::to_value(&val).unwrap();
        assert_eq!(back, json);
    }
}
