//! JSON implementation of the domain `MessageCodec`.
//!
//! serde_json is built with `arbitrary_precision`, so number literals reach
//! [`number_to_message`] as their original text and never fail range checks.

use serde_json::Value;

use crate::domain::{DecodeError, EncodeError, Message, MessageCodec, Number};

/// Decodes frames holding exactly one JSON value and encodes compact JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl MessageCodec for JsonCodec {
    fn decode(&self, raw: &[u8]) -> Result<Message, DecodeError> {
        let text =
            std::str::from_utf8(raw).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))?;

        let mut values = serde_json::Deserializer::from_str(text).into_iter::<Value>();
        let value = match values.next() {
            None => return Err(DecodeError::Empty),
            Some(Err(e)) => return Err(DecodeError::Syntax(e.to_string())),
            Some(Ok(value)) => value,
        };

        match values.next() {
            None => Ok(value_to_message(value)),
            Some(Ok(_)) => Err(DecodeError::MultipleValues),
            Some(Err(e)) => Err(DecodeError::Syntax(e.to_string())),
        }
    }

    fn encode(&self, message: &Message) -> Result<String, EncodeError> {
        serde_json::to_string(message).map_err(|e| EncodeError(e.to_string()))
    }
}

fn value_to_message(value: Value) -> Message {
    match value {
        Value::Null => Message::Null,
        Value::Bool(b) => b.into(),
        Value::Number(n) => number_to_message(&n),
        Value::String(s) => s.into(),
        Value::Array(items) => Message::Array(items.into_iter().map(value_to_message).collect()),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, value)| (key, value_to_message(value)))
            .collect(),
    }
}

fn number_to_message(n: &serde_json::Number) -> Message {
    if let Some(v) = n.as_i64() {
        return v.into();
    }
    if let Some(v) = n.as_u64() {
        return Message::Number(Number::from(v));
    }
    // Literals beyond f64 range parse to ±inf and encode as null
    let v = n.to_string().parse::<f64>().unwrap_or(f64::NAN);
    v.into()
}
