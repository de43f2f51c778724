// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte-string conversions: hex, base64, base58.
//!
//! Hex accepts an optional `0x` prefix and pads odd-length input with a
//! leading zero. Base64 is the standard alphabet with padding. Base58 is the
//! Bitcoin alphabet with leading-zero-byte preservation; no crate in our
//! stack covers it, so the classic divmod loop lives here.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::{BcsError, Result};

const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode bytes as lowercase hex, no prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex. Accepts a `0x` prefix and odd-length input.
pub fn from_hex(input: &str) -> Result<Vec<u8>> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    let padded;
    let normalized = if stripped.len() % 2 == 1 {
        padded = format!("0{}", stripped);
        &padded
    } else {
        stripped
    };
    hex::decode(normalized).map_err(|err| BcsError::Conversion {
        encoding: "hex",
        reason: err.to_string(),
    })
}

pub fn to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

pub fn from_base64(input: &str) -> Result<Vec<u8>> {
    BASE64.decode(input).map_err(|err| BcsError::Conversion {
        encoding: "base64",
        reason: err.to_string(),
    })
}

/// Encode bytes in base58 (Bitcoin alphabet). Leading zero bytes map to '1'.
pub fn to_base58(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // digits holds base-58 digits, least significant first
    let mut digits: Vec<u8> = Vec::new();
    for &byte in &bytes[zeros..] {
        let mut carry = u32::from(byte);
        for digit in &mut digits {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        out.push('1');
    }
    for &digit in digits.iter().rev() {
        out.push(char::from(BASE58_ALPHABET[usize::from(digit)]));
    }
    out
}

/// Decode base58 (Bitcoin alphabet).
pub fn from_base58(input: &str) -> Result<Vec<u8>> {
    let zeros = input.bytes().take_while(|&b| b == b'1').count();

    // bytes holds the decoded value, least significant first
    let mut bytes: Vec<u8> = Vec::new();
    for ch in input.bytes().skip(zeros) {
        let index = BASE58_ALPHABET
            .iter()
            .position(|&c| c == ch)
            .ok_or_else(|| BcsError::Conversion {
                encoding: "base58",
                reason: format!("invalid character {:?}", char::from(ch)),
            })?;
        let mut carry = index as u32;
        for byte in &mut bytes {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}
