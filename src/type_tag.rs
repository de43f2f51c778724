// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Move type-tag strings and their structured form.
//!
//! `TypeTag::parse` turns `vector<u8>` or `0x2::coin::Coin<T>` into a tag
//! tree; `Display` is its exact inverse for everything `parse` accepts —
//! round-trip is the defining property of this module. `pure_schema` maps
//! the BCS-only subset of those names ("pure" types: no object semantics)
//! to ready-made codecs.
//!
//! The parser is a small recursive descent: primitives match directly,
//! `vector<...>` peels one layer, and everything else must be a three-part
//! `address::module::Name` with optional angle-bracketed generics split on
//! top-level commas only.

use std::fmt;

use crate::bcs;
use crate::error::{BcsError, Result};
use crate::schema::BcsType;

/// A parsed Move type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
}

/// A fully-qualified struct tag with optional type parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructTag {
    pub address: String,
    pub module: String,
    pub name: String,
    pub type_params: Vec<TypeTag>,
}

impl TypeTag {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let tag = match trimmed {
            "bool" => TypeTag::Bool,
            "u8" => TypeTag::U8,
            "u16" => TypeTag::U16,
            "u32" => TypeTag::U32,
            "u64" => TypeTag::U64,
            "u128" => TypeTag::U128,
            "u256" => TypeTag::U256,
            "address" => TypeTag::Address,
            "signer" => TypeTag::Signer,
            _ => {
                if let Some(inner) = generic_inner(trimmed, "vector") {
                    TypeTag::Vector(Box::new(TypeTag::parse(inner)?))
                } else {
                    TypeTag::Struct(Box::new(StructTag::parse(trimmed)?))
                }
            }
        };
        Ok(tag)
    }
}

impl StructTag {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let unknown = || BcsError::UnknownTypeTag {
            input: input.to_string(),
        };

        let (head, type_params) = match trimmed.find('<') {
            Some(open) => {
                if !trimmed.ends_with('>') {
                    return Err(unknown());
                }
                let raw_params = split_generic_params(&trimmed[open + 1..trimmed.len() - 1])
                    .ok_or_else(unknown)?;
                let parsed = raw_params
                    .into_iter()
                    .map(TypeTag::parse)
                    .collect::<Result<Vec<_>>>()?;
                (&trimmed[..open], parsed)
            }
            None => (trimmed, Vec::new()),
        };

        let mut parts = head.split("::");
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(address), Some(module), Some(name), None)
                if !address.is_empty() && !module.is_empty() && !name.is_empty() =>
            {
                Ok(StructTag {
                    address: address.to_string(),
                    module: module.to_string(),
                    name: name.to_string(),
                    type_params,
                })
            }
            _ => Err(unknown()),
        }
    }
}

/// Strip `head<` ... `>` and return the inner text, if `input` has that shape.
fn generic_inner<'a>(input: &'a str, head: &str) -> Option<&'a str> {
    input
        .strip_prefix(head)?
        .strip_prefix('<')?
        .strip_suffix('>')
}

/// Split `A, B<C, D>, E` on top-level commas only. Returns `None` for
/// unbalanced brackets or empty parameters.
fn split_generic_params(input: &str) -> Option<Vec<&str>> {
    let mut depth = 0usize;
    let mut start = 0;
    let mut parts = Vec::new();
    for (index, ch) in input.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(input[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    parts.push(input[start..].trim());
    if parts.iter().any(|part| part.is_empty()) {
        return None;
    }
    Some(parts)
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::U8 => f.write_str("u8"),
            TypeTag::U16 => f.write_str("u16"),
            TypeTag::U32 => f.write_str("u32"),
            TypeTag::U64 => f.write_str("u64"),
            TypeTag::U128 => f.write_str("u128"),
            TypeTag::U256 => f.write_str("u256"),
            TypeTag::Address => f.write_str("address"),
            TypeTag::Signer => f.write_str("signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
            TypeTag::Struct(tag) => write!(f, "{}", tag),
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if !self.type_params.is_empty() {
            let params = self
                .type_params
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "<{}>", params)?;
        }
        Ok(())
    }
}

/// Map a pure (BCS-only) type name to a ready-made codec.
///
/// Recognizes the primitives, `address`/`id`, `string` (plain or
/// `0x1::string::String`), and `vector<...>` / `option<...>` (plain or
/// `0x1::option::Option<...>`) over other pure types. Anything else —
/// `signer`, arbitrary struct tags — is not pure and fails with a schema
/// error.
pub fn pure_schema(name: &str) -> Result<BcsType> {
    let trimmed = name.trim();
    match trimmed {
        "bool" => return Ok(bcs::boolean()),
        "u8" => return Ok(bcs::u8()),
        "u16" => return Ok(bcs::u16()),
        "u32" => return Ok(bcs::u32()),
        "u64" => return Ok(bcs::u64()),
        "u128" => return Ok(bcs::u128()),
        "u256" => return Ok(bcs::u256()),
        "address" | "id" => return Ok(bcs::address()),
        "string" | "0x1::string::String" => return Ok(bcs::string()),
        _ => {}
    }
    if let Some(inner) = generic_inner(trimmed, "vector") {
        return Ok(bcs::vector(pure_schema(inner)?));
    }
    if let Some(inner) =
        generic_inner(trimmed, "option").or_else(|| generic_inner(trimmed, "0x1::option::Option"))
    {
        return Ok(bcs::option(pure_schema(inner)?));
    }
    Err(BcsError::UnknownTypeTag {
        input: name.to_string(),
    })
}
