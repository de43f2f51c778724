// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cursor-based decoder over an immutable byte buffer.
//!
//! A `Reader` is created fresh for every decode call and never shared. The
//! buffer is fixed at construction; the only mutable state is the cursor.
//! Every read is bounds-checked and fails with a typed error instead of
//! returning zeroes past the end — decoding untrusted bytes is the normal
//! case, not the exception.

use crate::convert;
use crate::error::{BcsError, Result};
use crate::u256::U256;

/// Maximum encoded length of a ULEB128 value (u64 needs at most 10 bytes).
pub const MAX_ULEB_BYTES: usize = 10;

/// Decoding cursor over an owned byte buffer.
#[derive(Debug)]
pub struct Reader {
    bytes: Vec<u8>,
    pos: usize,
}

impl Reader {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
        }
    }

    /// Construct from a hex string (`0x` prefix optional).
    pub fn from_hex(input: &str) -> Result<Self> {
        Ok(Self::new(convert::from_hex(input)?))
    }

    /// Current cursor position in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&[u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(BcsError::UnexpectedEof {
                offset: self.pos,
                wanted: n,
                available: self.bytes.len() - self.pos,
            })?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Advance the cursor by `n` bytes without interpreting them.
    pub fn shift(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let mut raw = [0u8; 2];
        raw.copy_from_slice(self.take(2)?);
        Ok(u16::from_le_bytes(raw))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(raw))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(raw))
    }

    pub fn read_u128(&mut self) -> Result<u128> {
        let mut raw = [0u8; 16];
        raw.copy_from_slice(self.take(16)?);
        Ok(u128::from_le_bytes(raw))
    }

    pub fn read_u256(&mut self) -> Result<U256> {
        let mut raw = [0u8; 32];
        raw.copy_from_slice(self.take(32)?);
        Ok(U256::from_le_bytes(raw))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        self.take(n).map(<[u8]>::to_vec)
    }

    /// Read a ULEB128-encoded u64.
    ///
    /// Rejects encodings longer than [`MAX_ULEB_BYTES`] and tenth bytes that
    /// would spill past 64 bits, so a malicious input cannot loop forever or
    /// silently truncate.
    pub fn read_uleb128(&mut self) -> Result<u64> {
        let mut value: u64 = 0;
        let mut shift: u32 = 0;
        for _ in 0..MAX_ULEB_BYTES {
            let byte = self.read_u8()?;
            if shift == 63 && byte > 1 {
                return Err(BcsError::VarintTooLong {
                    max_bytes: MAX_ULEB_BYTES,
                });
            }
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
        Err(BcsError::VarintTooLong {
            max_bytes: MAX_ULEB_BYTES,
        })
    }
}
