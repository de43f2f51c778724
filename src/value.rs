// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dynamic host value model.
//!
//! Schemas are built at runtime, so the values they encode and decode are
//! dynamic too. `Value` is the single currency every codec trades in: a
//! combinator validates that the variant it receives matches its wire shape
//! and fails with a typed error otherwise.
//!
//! Enum values are an explicit tagged union (`Variant`) rather than a
//! single-key map, so a value can never name zero or two variants at once.
//! Numeric codecs additionally accept `Text` holding a decimal string, the
//! compatibility surface for callers that keep big integers as strings.

use crate::u256::U256;

/// A dynamically-typed value, the input and output of every [`crate::BcsType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The `option` None sentinel.
    Null,
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    U256(U256),
    /// UTF-8 text, or a decimal literal when fed to a numeric codec.
    Text(String),
    Bytes(Vec<u8>),
    /// Elements of a vector, tuple, or fixed array.
    List(Vec<Value>),
    /// Struct fields. Input order is irrelevant; the schema dictates wire order.
    Struct(Vec<(String, Value)>),
    /// One named enum case with an optional payload. Unit variants carry `None`.
    Variant(String, Option<Box<Value>>),
    /// Ordered key/value pairs; insertion order is wire order.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Human-readable kind name, used in validation errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::U128(_) => "u128",
            Value::U256(_) => "u256",
            Value::Text(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Struct(_) => "struct",
            Value::Variant(..) => "variant",
            Value::Map(_) => "map",
        }
    }

    /// Widen any numeric variant to [`U256`]. `Text` is parsed as decimal.
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            Value::U8(n) => Some(U256::from(*n)),
            Value::U16(n) => Some(U256::from(*n)),
            Value::U32(n) => Some(U256::from(*n)),
            Value::U64(n) => Some(U256::from(*n)),
            Value::U128(n) => Some(U256::from(*n)),
            Value::U256(n) => Some(*n),
            Value::Text(s) => U256::from_dec_str(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a struct field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Struct(entries) => entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Convenience constructor for an enum case.
    pub fn variant(name: impl Into<String>, payload: Option<Value>) -> Value {
        Value::Variant(name.into(), payload.map(Box::new))
    }

    /// Convenience constructor for a struct value.
    pub fn record(fields: Vec<(&str, Value)>) -> Value {
        Value::Struct(
            fields
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::U8(value)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::U16(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::U32(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::U64(value)
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        Value::U128(value)
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Value::U256(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
