// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width 256-bit unsigned integer.
//!
//! BCS carries unsigned integers up to 32 bytes wide, which is more than any
//! native Rust type offers. `U256` is four little-endian `u64` limbs with just
//! the operations the codec needs: decimal parse/print for the string API
//! boundary, little-endian byte conversion for the wire, and a total order
//! for range validation. No general arithmetic, on purpose.

use std::cmp::Ordering;
use std::fmt;

/// Unsigned 256-bit integer, little-endian `u64` limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256([u64; 4]);

impl U256 {
    pub const ZERO: U256 = U256([0; 4]);
    pub const MAX: U256 = U256([u64::MAX; 4]);

    pub fn is_zero(self) -> bool {
        self.0 == [0; 4]
    }

    /// Parse a decimal string. Returns `None` for empty input, non-digit
    /// characters (including a leading sign), or values past 2^256 - 1.
    pub fn from_dec_str(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let mut acc = Self::ZERO;
        for byte in input.bytes() {
            if !byte.is_ascii_digit() {
                return None;
            }
            acc = acc
                .checked_mul_u64(10)?
                .checked_add_u64(u64::from(byte - b'0'))?;
        }
        Some(acc)
    }

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(raw);
        }
        Self(limbs)
    }

    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Narrow to `u64` if the value fits.
    pub fn as_u64(self) -> Option<u64> {
        if self.0[1] | self.0[2] | self.0[3] == 0 {
            Some(self.0[0])
        } else {
            None
        }
    }

    /// Narrow to `u128` if the value fits.
    pub fn as_u128(self) -> Option<u128> {
        if self.0[2] | self.0[3] == 0 {
            Some(u128::from(self.0[1]) << 64 | u128::from(self.0[0]))
        } else {
            None
        }
    }

    fn checked_mul_u64(self, rhs: u64) -> Option<Self> {
        let mut out = [0u64; 4];
        let mut carry: u128 = 0;
        for (slot, limb) in out.iter_mut().zip(self.0.iter()) {
            let product = u128::from(*limb) * u128::from(rhs) + carry;
            *slot = product as u64;
            carry = product >> 64;
        }
        if carry != 0 {
            None
        } else {
            Some(Self(out))
        }
    }

    fn checked_add_u64(self, rhs: u64) -> Option<Self> {
        let mut limbs = self.0;
        let mut carry = rhs;
        for limb in &mut limbs {
            if carry == 0 {
                break;
            }
            let (sum, overflow) = limb.overflowing_add(carry);
            *limb = sum;
            carry = u64::from(overflow);
        }
        if carry != 0 {
            None
        } else {
            Some(Self(limbs))
        }
    }

    fn divmod_u64(self, divisor: u64) -> (Self, u64) {
        let mut out = [0u64; 4];
        let mut rem: u128 = 0;
        for i in (0..4).rev() {
            let cur = (rem << 64) | u128::from(self.0[i]);
            out[i] = (cur / u128::from(divisor)) as u64;
            rem = cur % u128::from(divisor);
        }
        (Self(out), rem as u64)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Most-significant limb decides first.
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut digits = Vec::new();
        let mut cur = *self;
        while !cur.is_zero() {
            let (quotient, rem) = cur.divmod_u64(10);
            digits.push(b'0' + rem as u8);
            cur = quotient;
        }
        let rendered: String = digits.iter().rev().map(|&d| char::from(d)).collect();
        f.write_str(&rendered)
    }
}

impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        Self([u64::from(value), 0, 0, 0])
    }
}

impl From<u16> for U256 {
    fn from(value: u16) -> Self {
        Self([u64::from(value), 0, 0, 0])
    }
}

impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        Self([u64::from(value), 0, 0, 0])
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }
}
