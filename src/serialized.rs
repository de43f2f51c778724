// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The result of a serialize call: a schema paired with its bytes.
//!
//! `Serialized` is inert data. The string projections are pure views of the
//! stored bytes, and `parse` re-decodes through a fresh reader every call —
//! there is no cached value, so a round-trip test exercises the codec, not
//! a cache.

use crate::convert;
use crate::error::Result;
use crate::schema::BcsType;
use crate::value::Value;

/// An immutable `(schema, bytes)` pair.
#[derive(Debug, Clone)]
pub struct Serialized {
    schema: BcsType,
    bytes: Vec<u8>,
}

impl Serialized {
    pub(crate) fn new(schema: BcsType, bytes: Vec<u8>) -> Self {
        Self { schema, bytes }
    }

    /// The schema that produced these bytes.
    pub fn schema(&self) -> &BcsType {
        &self.schema
    }

    pub fn to_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        convert::to_hex(&self.bytes)
    }

    /// Standard base64 with padding.
    pub fn to_base64(&self) -> String {
        convert::to_base64(&self.bytes)
    }

    /// Base58, Bitcoin alphabet.
    pub fn to_base58(&self) -> String {
        convert::to_base58(&self.bytes)
    }

    /// Decode the stored bytes through the owning schema.
    pub fn parse(&self) -> Result<Value> {
        self.schema.parse(&self.bytes)
    }
}
