// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The combinator factory.
//!
//! Every function here returns a ready-to-use [`BcsType`]. Primitives map
//! one-to-one onto `Reader`/`Writer` operations; containers compose other
//! types. Wire rules that every combinator obeys:
//!
//! - fixed-width integers are little-endian, exactly their declared width
//! - vectors, byte vectors, and strings are a ULEB128 length then payload,
//!   no padding, no terminator
//! - structs and tuples concatenate members in declaration order
//! - enums are a ULEB128 index into the declaration-order variant list,
//!   then the payload (nothing for unit variants)
//! - `option` and `map` are not wire shapes of their own: they are sugar
//!   over `enum { None, Some(T) }` and `vector<(K, V)>`
//!
//! Struct field order and enum variant order are captured once, at schema
//! construction, and never depend on how callers order the values they pass.

use std::sync::Arc;

use crate::convert;
use crate::error::{BcsError, Result};
use crate::schema::BcsType;
use crate::u256::U256;
use crate::value::Value;

// ============================================================================
// VALUE EXPECTATIONS
// ============================================================================

fn uint_arg(value: &Value, type_name: &str) -> Result<U256> {
    match value {
        Value::Text(text) => U256::from_dec_str(text).ok_or_else(|| {
            BcsError::validation(type_name, format!("malformed decimal string {:?}", text))
        }),
        other => other.as_uint().ok_or_else(|| {
            BcsError::validation(
                type_name,
                format!("expected an unsigned integer, got {}", other.kind()),
            )
        }),
    }
}

fn uint_arg_u64(value: &Value, type_name: &str, max: u64) -> Result<u64> {
    let wide = uint_arg(value, type_name)?;
    match wide.as_u64() {
        Some(narrow) if narrow <= max => Ok(narrow),
        _ => Err(BcsError::validation(
            type_name,
            format!("value {} out of range for {}", wide, type_name),
        )),
    }
}

fn uint_arg_u128(value: &Value, type_name: &str) -> Result<u128> {
    let wide = uint_arg(value, type_name)?;
    wide.as_u128().ok_or_else(|| {
        BcsError::validation(
            type_name,
            format!("value {} out of range for {}", wide, type_name),
        )
    })
}

fn bool_arg(value: &Value, type_name: &str) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        BcsError::validation(
            type_name,
            format!("expected a boolean, got {}", value.kind()),
        )
    })
}

fn bytes_arg<'a>(value: &'a Value, type_name: &str) -> Result<&'a [u8]> {
    value.as_bytes().ok_or_else(|| {
        BcsError::validation(
            type_name,
            format!("expected a byte value, got {}", value.kind()),
        )
    })
}

fn list_arg<'a>(value: &'a Value, type_name: &str) -> Result<&'a [Value]> {
    value.as_list().ok_or_else(|| {
        BcsError::validation(type_name, format!("expected a list, got {}", value.kind()))
    })
}

fn struct_arg<'a>(value: &'a Value, type_name: &str) -> Result<&'a [(String, Value)]> {
    match value {
        Value::Struct(entries) => Ok(entries),
        other => Err(BcsError::validation(
            type_name,
            format!("expected a struct value, got {}", other.kind()),
        )),
    }
}

fn variant_arg<'a>(
    value: &'a Value,
    type_name: &str,
) -> Result<(&'a str, Option<&'a Value>)> {
    match value {
        Value::Variant(tag, payload) => Ok((tag.as_str(), payload.as_deref())),
        other => Err(BcsError::validation(
            type_name,
            format!("expected an enum variant, got {}", other.kind()),
        )),
    }
}

// ============================================================================
// PRIMITIVES
// ============================================================================

pub fn u8() -> BcsType {
    BcsType::fixed_size(
        "u8",
        1,
        |reader| Ok(Value::U8(reader.read_u8()?)),
        |value, writer| writer.write_u8(uint_arg_u64(value, "u8", u64::from(u8::MAX))? as u8),
        |value| uint_arg_u64(value, "u8", u64::from(u8::MAX)).map(|_| ()),
    )
}

pub fn u16() -> BcsType {
    BcsType::fixed_size(
        "u16",
        2,
        |reader| Ok(Value::U16(reader.read_u16()?)),
        |value, writer| writer.write_u16(uint_arg_u64(value, "u16", u64::from(u16::MAX))? as u16),
        |value| uint_arg_u64(value, "u16", u64::from(u16::MAX)).map(|_| ()),
    )
}

pub fn u32() -> BcsType {
    BcsType::fixed_size(
        "u32",
        4,
        |reader| Ok(Value::U32(reader.read_u32()?)),
        |value, writer| writer.write_u32(uint_arg_u64(value, "u32", u64::from(u32::MAX))? as u32),
        |value| uint_arg_u64(value, "u32", u64::from(u32::MAX)).map(|_| ()),
    )
}

pub fn u64() -> BcsType {
    BcsType::fixed_size(
        "u64",
        8,
        |reader| Ok(Value::U64(reader.read_u64()?)),
        |value, writer| writer.write_u64(uint_arg_u64(value, "u64", u64::MAX)?),
        |value| uint_arg_u64(value, "u64", u64::MAX).map(|_| ()),
    )
}

pub fn u128() -> BcsType {
    BcsType::fixed_size(
        "u128",
        16,
        |reader| Ok(Value::U128(reader.read_u128()?)),
        |value, writer| writer.write_u128(uint_arg_u128(value, "u128")?),
        |value| uint_arg_u128(value, "u128").map(|_| ()),
    )
}

pub fn u256() -> BcsType {
    BcsType::fixed_size(
        "u256",
        32,
        |reader| Ok(Value::U256(reader.read_u256()?)),
        |value, writer| writer.write_u256(uint_arg(value, "u256")?),
        |value| uint_arg(value, "u256").map(|_| ()),
    )
}

pub fn boolean() -> BcsType {
    BcsType::fixed_size(
        "bool",
        1,
        |reader| match reader.read_u8()? {
            0 => Ok(Value::Bool(false)),
            1 => Ok(Value::Bool(true)),
            other => Err(BcsError::validation(
                "bool",
                format!("invalid boolean byte 0x{:02x}", other),
            )),
        },
        |value, writer| writer.write_bool(bool_arg(value, "bool")?),
        |value| bool_arg(value, "bool").map(|_| ()),
    )
}

/// A bare ULEB128-encoded u64 (no fixed width).
pub fn uleb128() -> BcsType {
    BcsType::dynamic_size(
        "uleb128",
        |reader| Ok(Value::U64(reader.read_uleb128()?)),
        |value, writer| writer.write_uleb128(uint_arg_u64(value, "uleb128", u64::MAX)?),
        |value| uint_arg_u64(value, "uleb128", u64::MAX).map(|_| ()),
    )
}

// ============================================================================
// BYTE CONTAINERS
// ============================================================================

/// Exactly `len` raw bytes, no length prefix.
pub fn bytes(len: usize) -> BcsType {
    let name = format!("bytes[{}]", len);
    let write_name = name.clone();
    let validate_name = name.clone();
    BcsType::fixed_size(
        &name,
        len,
        move |reader| Ok(Value::Bytes(reader.read_bytes(len)?)),
        move |value, writer| writer.write_bytes(bytes_arg(value, &write_name)?),
        move |value| {
            let raw = bytes_arg(value, &validate_name)?;
            if raw.len() == len {
                Ok(())
            } else {
                Err(BcsError::validation(
                    &validate_name,
                    format!("expected exactly {} bytes, got {}", len, raw.len()),
                ))
            }
        },
    )
}

/// ULEB128 length prefix followed by raw bytes.
pub fn byte_vector() -> BcsType {
    BcsType::dynamic_size(
        "byte_vector",
        |reader| {
            let len = reader.read_uleb128()? as usize;
            Ok(Value::Bytes(reader.read_bytes(len)?))
        },
        |value, writer| {
            let raw = bytes_arg(value, "byte_vector")?;
            writer.write_uleb128(raw.len() as u64)?;
            writer.write_bytes(raw)
        },
        |value| bytes_arg(value, "byte_vector").map(|_| ()),
    )
}

/// UTF-8 string as a ULEB128 length-prefixed byte vector.
pub fn string() -> BcsType {
    BcsType::string_like(
        "string",
        |value| match value {
            Value::Text(text) => Ok(text.clone().into_bytes()),
            other => Err(BcsError::validation(
                "string",
                format!("expected a string, got {}", other.kind()),
            )),
        },
        |raw| {
            String::from_utf8(raw)
                .map(Value::Text)
                .map_err(|_| BcsError::validation("string", "payload is not valid UTF-8"))
        },
    )
}

// ============================================================================
// COMPOSITE COMBINATORS
// ============================================================================

/// Exactly `len` elements of `element`, concatenated. Fixed-size iff the
/// element is.
pub fn fixed_array(len: usize, element: BcsType) -> BcsType {
    let name = format!("{}[{}]", element.name(), len);
    let size_element = element.clone();
    let read_element = element.clone();
    let write_element = element;
    let write_name = name.clone();
    let validate_name = name.clone();
    BcsType::raw(
        name,
        move || size_element.serialized_size().map(|size| size * len),
        move |reader| {
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(read_element.read(reader)?);
            }
            Ok(Value::List(items))
        },
        move |value, writer| {
            for item in list_arg(value, &write_name)? {
                write_element.write(item, writer)?;
            }
            Ok(())
        },
        move |value| {
            let items = list_arg(value, &validate_name)?;
            if items.len() == len {
                Ok(())
            } else {
                Err(BcsError::validation(
                    &validate_name,
                    format!("expected exactly {} elements, got {}", len, items.len()),
                ))
            }
        },
    )
}

/// ULEB128 length prefix followed by each element. The codec enforces no
/// upper bound on the element count.
pub fn vector(element: BcsType) -> BcsType {
    let name = format!("vector<{}>", element.name());
    let read_element = element.clone();
    let write_element = element;
    let write_name = name.clone();
    let validate_name = name.clone();
    BcsType::dynamic_size(
        &name,
        move |reader| {
            let len = reader.read_uleb128()? as usize;
            // Cap the pre-allocation, not the length: a lying prefix runs out
            // of input long before it runs us out of memory.
            let mut items = Vec::with_capacity(len.min(reader.remaining()));
            for _ in 0..len {
                items.push(read_element.read(reader)?);
            }
            Ok(Value::List(items))
        },
        move |value, writer| {
            let items = list_arg(value, &write_name)?;
            writer.write_vec(items, |writer, item| write_element.write(item, writer))
        },
        move |value| list_arg(value, &validate_name).map(|_| ()),
    )
}

/// Positional heterogeneous sequence, concatenated in declared order.
pub fn tuple(elements: Vec<BcsType>) -> BcsType {
    let name = format!(
        "({})",
        elements
            .iter()
            .map(BcsType::name)
            .collect::<Vec<_>>()
            .join(", ")
    );
    let elements = Arc::new(elements);
    let size_elements = Arc::clone(&elements);
    let read_elements = Arc::clone(&elements);
    let write_elements = Arc::clone(&elements);
    let validate_elements = elements;
    let write_name = name.clone();
    let validate_name = name.clone();
    BcsType::raw(
        name,
        move || {
            size_elements
                .iter()
                .try_fold(0usize, |acc, element| {
                    element.serialized_size().map(|size| acc + size)
                })
        },
        move |reader| {
            let mut items = Vec::with_capacity(read_elements.len());
            for element in read_elements.iter() {
                items.push(element.read(reader)?);
            }
            Ok(Value::List(items))
        },
        move |value, writer| {
            let items = list_arg(value, &write_name)?;
            for (element, item) in write_elements.iter().zip(items) {
                element.write(item, writer)?;
            }
            Ok(())
        },
        move |value| {
            let items = list_arg(value, &validate_name)?;
            if items.len() == validate_elements.len() {
                Ok(())
            } else {
                Err(BcsError::validation(
                    &validate_name,
                    format!(
                        "expected exactly {} elements, got {}",
                        validate_elements.len(),
                        items.len()
                    ),
                ))
            }
        },
    )
}

/// Named fields concatenated in declaration order. The order is captured
/// here, once; the order of entries in the values passed later is irrelevant.
pub fn struct_(name: &str, fields: Vec<(&str, BcsType)>) -> BcsType {
    let name = name.to_string();
    let fields: Arc<Vec<(String, BcsType)>> = Arc::new(
        fields
            .into_iter()
            .map(|(key, field)| (key.to_string(), field))
            .collect(),
    );
    let size_fields = Arc::clone(&fields);
    let read_fields = Arc::clone(&fields);
    let write_fields = Arc::clone(&fields);
    let validate_fields = fields;
    let write_name = name.clone();
    let validate_name = name.clone();
    BcsType::raw(
        name,
        move || {
            size_fields.iter().try_fold(0usize, |acc, (_, field)| {
                field.serialized_size().map(|size| acc + size)
            })
        },
        move |reader| {
            let mut entries = Vec::with_capacity(read_fields.len());
            for (key, field) in read_fields.iter() {
                entries.push((key.clone(), field.read(reader)?));
            }
            Ok(Value::Struct(entries))
        },
        move |value, writer| {
            let entries = struct_arg(value, &write_name)?;
            for (key, field) in write_fields.iter() {
                let (_, supplied) = entries
                    .iter()
                    .find(|(entry_key, _)| entry_key == key)
                    .ok_or_else(|| {
                        BcsError::validation(&write_name, format!("missing field {:?}", key))
                    })?;
                field.write(supplied, writer)?;
            }
            Ok(())
        },
        move |value| {
            let entries = struct_arg(value, &validate_name)?;
            for (key, _) in entries {
                if !validate_fields.iter().any(|(field_key, _)| field_key == key) {
                    return Err(BcsError::validation(
                        &validate_name,
                        format!("unknown field {:?}", key),
                    ));
                }
            }
            for (key, _) in validate_fields.iter() {
                if !entries.iter().any(|(entry_key, _)| entry_key == key) {
                    return Err(BcsError::validation(
                        &validate_name,
                        format!("missing field {:?}", key),
                    ));
                }
            }
            if entries.len() != validate_fields.len() {
                return Err(BcsError::validation(
                    &validate_name,
                    format!(
                        "expected exactly {} fields, got {}",
                        validate_fields.len(),
                        entries.len()
                    ),
                ));
            }
            Ok(())
        },
    )
}

/// ULEB128 variant index (declaration order) followed by the payload.
/// Unit variants (`None` payload type) write nothing after the index.
pub fn enum_(name: &str, variants: Vec<(&str, Option<BcsType>)>) -> BcsType {
    let name = name.to_string();
    let variants: Arc<Vec<(String, Option<BcsType>)>> = Arc::new(
        variants
            .into_iter()
            .map(|(key, payload)| (key.to_string(), payload))
            .collect(),
    );
    let read_variants = Arc::clone(&variants);
    let write_variants = Arc::clone(&variants);
    let validate_variants = variants;
    let read_name = name.clone();
    let write_name = name.clone();
    let validate_name = name.clone();

    fn check_shape(
        enum_name: &str,
        variant_name: &str,
        payload_type: Option<&BcsType>,
        payload: Option<&Value>,
    ) -> Result<()> {
        match (payload_type, payload) {
            (Some(_), Some(_)) | (None, None) => Ok(()),
            (None, Some(_)) => Err(BcsError::validation(
                enum_name,
                format!("unit variant {:?} does not take a payload", variant_name),
            )),
            (Some(_), None) => Err(BcsError::validation(
                enum_name,
                format!("variant {:?} requires a payload", variant_name),
            )),
        }
    }

    BcsType::dynamic_size(
        &name,
        move |reader| {
            let index = reader.read_uleb128()?;
            let (variant_name, payload_type) = read_variants
                .get(index as usize)
                .ok_or_else(|| BcsError::UnknownVariantIndex {
                    enum_name: read_name.clone(),
                    index,
                })?;
            match payload_type {
                None => Ok(Value::Variant(variant_name.clone(), None)),
                Some(payload) => Ok(Value::Variant(
                    variant_name.clone(),
                    Some(Box::new(payload.read(reader)?)),
                )),
            }
        },
        move |value, writer| {
            let (variant_name, payload) = variant_arg(value, &write_name)?;
            let index = write_variants
                .iter()
                .position(|(key, _)| key == variant_name)
                .ok_or_else(|| {
                    BcsError::validation(
                        &write_name,
                        format!("unknown variant {:?}", variant_name),
                    )
                })?;
            let payload_type = write_variants[index].1.as_ref();
            check_shape(&write_name, variant_name, payload_type, payload)?;
            writer.write_uleb128(index as u64)?;
            match (payload_type, payload) {
                (Some(field), Some(supplied)) => field.write(supplied, writer),
                _ => Ok(()),
            }
        },
        move |value| {
            let (variant_name, payload) = variant_arg(value, &validate_name)?;
            let payload_type = validate_variants
                .iter()
                .find(|(key, _)| key == variant_name)
                .map(|(_, payload_type)| payload_type.as_ref())
                .ok_or_else(|| {
                    BcsError::validation(
                        &validate_name,
                        format!("unknown variant {:?}", variant_name),
                    )
                })?;
            check_shape(&validate_name, variant_name, payload_type, payload)
        },
    )
}

/// Sugar over `enum { None, Some(T) }`: `Value::Null` maps to `None`,
/// anything else to `Some`.
pub fn option(inner: BcsType) -> BcsType {
    let name = format!("option<{}>", inner.name());
    let output_name = name.clone();
    enum_("Option", vec![("None", None), ("Some", Some(inner))]).transform(
        name,
        |value| {
            Ok(match value {
                Value::Null => Value::variant("None", None),
                other => Value::variant("Some", Some(other.clone())),
            })
        },
        move |value| match value {
            Value::Variant(tag, payload) => match (tag.as_str(), payload) {
                ("None", _) => Ok(Value::Null),
                ("Some", Some(payload)) => Ok(*payload),
                _ => Err(BcsError::validation(
                    &output_name,
                    "decoded Some variant without a payload",
                )),
            },
            other => Err(BcsError::validation(
                &output_name,
                format!("expected an option variant, got {}", other.kind()),
            )),
        },
    )
}

/// Sugar over `vector<(K, V)>`. Insertion order of the pairs is wire order;
/// the codec neither sorts nor deduplicates keys.
pub fn map(key: BcsType, value: BcsType) -> BcsType {
    let name = format!("map<{}, {}>", key.name(), value.name());
    let input_name = name.clone();
    let output_name = name.clone();
    vector(tuple(vec![key, value])).transform(
        name,
        move |supplied| match supplied {
            Value::Map(pairs) => Ok(Value::List(
                pairs
                    .iter()
                    .map(|(k, v)| Value::List(vec![k.clone(), v.clone()]))
                    .collect(),
            )),
            other => Err(BcsError::validation(
                &input_name,
                format!("expected a map, got {}", other.kind()),
            )),
        },
        move |decoded| match decoded {
            Value::List(items) => {
                let mut pairs = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::List(mut pair) if pair.len() == 2 => {
                            let value = pair.pop().unwrap_or(Value::Null);
                            let key = pair.pop().unwrap_or(Value::Null);
                            pairs.push((key, value));
                        }
                        other => {
                            return Err(BcsError::validation(
                                &output_name,
                                format!("expected a key/value pair, got {}", other.kind()),
                            ))
                        }
                    }
                }
                Ok(Value::Map(pairs))
            }
            other => Err(BcsError::validation(
                &output_name,
                format!("expected a list of pairs, got {}", other.kind()),
            )),
        },
    )
}

/// Defer construction until first use; see [`BcsType::lazy`].
pub fn lazy(init: impl Fn() -> BcsType + Send + Sync + 'static) -> BcsType {
    BcsType::lazy(init)
}

/// A 32-byte account address with a hex-string application representation.
/// Input accepts a `0x`-prefixed (or bare) hex string, left-padded to 32
/// bytes, or a raw 32-byte value; output is always the full `0x` + 64-digit
/// form.
pub fn address() -> BcsType {
    bytes(32).transform(
        "address",
        |value| match value {
            Value::Text(text) => {
                let raw = convert::from_hex(text)?;
                if raw.len() > 32 {
                    return Err(BcsError::validation(
                        "address",
                        format!("expected at most 32 bytes, got {}", raw.len()),
                    ));
                }
                let mut padded = vec![0u8; 32 - raw.len()];
                padded.extend(raw);
                Ok(Value::Bytes(padded))
            }
            Value::Bytes(raw) if raw.len() == 32 => Ok(Value::Bytes(raw.clone())),
            other => Err(BcsError::validation(
                "address",
                format!("expected a hex string or 32 bytes, got {}", other.kind()),
            )),
        },
        |decoded| match decoded {
            Value::Bytes(raw) => Ok(Value::Text(format!("0x{}", convert::to_hex(&raw)))),
            other => Err(BcsError::validation(
                "address",
                format!("expected decoded bytes, got {}", other.kind()),
            )),
        },
    )
}
