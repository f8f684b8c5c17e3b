//! Structured message model.
//!
//! A [`Message`] is whatever a client sent, parsed into a schema-less tree.
//! Parsing lives in the codec; `Serialize` is written by hand so the map keeps
//! its sorted key order on the wire.

use std::collections::BTreeMap;

use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

/// Numeric scalar, keeping the integer/float distinction of the input.
///
/// Integers that fit in `i64` are always stored as [`Number::Int`].
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Int(a), Self::UInt(b)) | (Self::UInt(b), Self::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            (Self::Float(a), Self::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A decoded client message.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Message {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Message>),
    /// Object; keys are kept sorted, so re-encoding normalizes key order
    Map(BTreeMap<String, Message>),
}

impl Message {
    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
        }
    }
}

impl From<bool> for Message {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Message {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Message {
    fn from(value: f64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Message {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Message {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<K: Into<String>, V: Into<Message>> FromIterator<(K, V)> for Message {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Int(v) => serializer.serialize_i64(v),
            Self::UInt(v) => serializer.serialize_u64(v),
            Self::Float(v) => serializer.serialize_f64(v),
        }
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_equality_across_integer_kinds() {
        // テスト項目: 同じ値の Int と UInt は等しいとみなされる
        assert_eq!(Number::Int(5), Number::UInt(5));
        assert_ne!(Number::Int(-1), Number::UInt(u64::MAX));
        assert_ne!(Number::Int(1), Number::Float(1.0));
    }

    #[test]
    fn test_number_from_u64_prefers_int() {
        assert!(matches!(Number::from(7u64), Number::Int(7)));
        assert!(matches!(Number::from(u64::MAX), Number::UInt(u64::MAX)));
    }

    #[test]
    fn test_serialize_sorts_keys_and_nan_becomes_null() {
        // テスト項目: キーはソートされ、非有限の浮動小数点数は null になる
        // given (前提条件):
        let message: Message = [("b", Message::from(f64::NAN)), ("a", Message::from(1i64))]
            .into_iter()
            .collect();

        // when (操作):
        let json = serde_json::to_string(&message).unwrap();

        // then (期待する結果):
        assert_eq!(json, r#"{"a":1,"b":null}"#);
    }
}
