// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the codec.
//!
//! Three classes cover everything that can go wrong: the host value does not
//! match the schema (validation), a read or write ran out of buffer (bounds),
//! or the wire/schema description itself is unusable (schema). Every variant
//! carries enough context to name the offending type and position; nothing is
//! retried internally and nothing is silently coerced.

use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BcsError>;

/// Coarse classification of a [`BcsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Host value does not match the declared schema.
    Validation,
    /// Decode past the end of input, or encode past the writer's `max_size`.
    Bounds,
    /// Unknown enum variant index or unrecognized type-tag string.
    Schema,
}

/// Every failure the codec can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BcsError {
    /// A value failed schema validation before or during encoding.
    Validation { type_name: String, reason: String },
    /// A hex / base64 / base58 string could not be decoded.
    Conversion { encoding: &'static str, reason: String },
    /// A read would overrun the input buffer.
    UnexpectedEof {
        offset: usize,
        wanted: usize,
        available: usize,
    },
    /// A write would exceed the writer's `max_size` even after growth.
    CapacityExceeded { required: usize, max_size: usize },
    /// A ULEB128 value ran past its maximum encoded length.
    VarintTooLong { max_bytes: usize },
    /// Decoded enum variant index has no corresponding variant.
    UnknownVariantIndex { enum_name: String, index: u64 },
    /// A type-tag string (or pure-type name) was not recognized.
    UnknownTypeTag { input: String },
}

impl BcsError {
    /// Shorthand for a [`BcsError::Validation`] carrying the failing type's name.
    pub fn validation(type_name: &str, reason: impl Into<String>) -> Self {
        BcsError::Validation {
            type_name: type_name.to_string(),
            reason: reason.into(),
        }
    }

    /// Which of the three error classes this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BcsError::Validation { .. } | BcsError::Conversion { .. } => ErrorKind::Validation,
            BcsError::UnexpectedEof { .. }
            | BcsError::CapacityExceeded { .. }
            | BcsError::VarintTooLong { .. } => ErrorKind::Bounds,
            BcsError::UnknownVariantIndex { .. } | BcsError::UnknownTypeTag { .. } => {
                ErrorKind::Schema
            }
        }
    }
}

impl fmt::Display for BcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BcsError::Validation { type_name, reason } => {
                write!(f, "validation failed for {}: {}", type_name, reason)
            }
            BcsError::Conversion { encoding, reason } => {
                write!(f, "invalid {} input: {}", encoding, reason)
            }
            BcsError::UnexpectedEof {
                offset,
                wanted,
                available,
            } => write!(
                f,
                "read of {} bytes at offset {} overruns input ({} bytes available)",
                wanted, offset, available
            ),
            BcsError::CapacityExceeded { required, max_size } => write!(
                f,
                "write requires {} bytes but the writer is capped at {}",
                required, max_size
            ),
            BcsError::VarintTooLong { max_bytes } => {
                write!(f, "ULEB128 encoding exceeds {} bytes", max_bytes)
            }
            BcsError::UnknownVariantIndex { enum_name, index } => {
                write!(f, "unknown variant index {} for enum {}", index, enum_name)
            }
            BcsError::UnknownTypeTag { input } => {
                write!(f, "unrecognized type tag: {}", input)
            }
        }
    }
}

impl std::error::Error for BcsError {}
