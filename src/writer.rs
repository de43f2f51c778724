// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cursor-based encoder into a growable, bounded byte buffer.
//!
//! The buffer starts at `initial_size` and grows in `allocate_size` steps,
//! never past `max_size`. `max_size` is the codec's only admission-control
//! knob: a write that cannot fit even after growth fails with a bounds error
//! instead of truncating. `into_bytes` returns exactly the written prefix.

use crate::error::{BcsError, Result};
use crate::u256::U256;

/// Capacity parameters for a [`Writer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Starting capacity in bytes.
    pub initial_size: usize,
    /// Hard capacity ceiling. `usize::MAX` means unbounded.
    pub max_size: usize,
    /// Growth increment when a write outruns the current capacity.
    pub allocate_size: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            initial_size: 1024,
            max_size: usize::MAX,
            allocate_size: 1024,
        }
    }
}

/// Encoding cursor over a growable buffer.
#[derive(Debug)]
pub struct Writer {
    bytes: Vec<u8>,
    pos: usize,
    size: usize,
    max_size: usize,
    allocate_size: usize,
}

impl Writer {
    pub fn new(options: WriterOptions) -> Self {
        let size = options.initial_size.min(options.max_size);
        Self {
            bytes: vec![0; size],
            pos: 0,
            size,
            max_size: options.max_size,
            allocate_size: options.allocate_size,
        }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn ensure_size_or_grow(&mut self, needed: usize) -> Result<()> {
        let required =
            self.pos
                .checked_add(needed)
                .ok_or(BcsError::CapacityExceeded {
                    required: usize::MAX,
                    max_size: self.max_size,
                })?;
        if required <= self.size {
            return Ok(());
        }
        let step = self.allocate_size.max(1);
        let mut size = self.size;
        while required > size && size < self.max_size {
            size = size.saturating_add(step).min(self.max_size);
        }
        if required > size {
            return Err(BcsError::CapacityExceeded {
                required,
                max_size: self.max_size,
            });
        }
        self.size = size;
        self.bytes.resize(size, 0);
        Ok(())
    }

    fn put(&mut self, src: &[u8]) -> Result<()> {
        self.ensure_size_or_grow(src.len())?;
        self.bytes[self.pos..self.pos + src.len()].copy_from_slice(src);
        self.pos += src.len();
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.put(&[value])
    }

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(u8::from(value))
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.put(&value.to_le_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.put(&value.to_le_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.put(&value.to_le_bytes())
    }

    pub fn write_u128(&mut self, value: u128) -> Result<()> {
        self.put(&value.to_le_bytes())
    }

    pub fn write_u256(&mut self, value: U256) -> Result<()> {
        self.put(&value.to_le_bytes())
    }

    /// Raw bytes, no length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.put(bytes)
    }

    /// ULEB128-encode `value`: 7 payload bits per byte, continuation bit on
    /// all but the last. Zero is a single `0x00` byte.
    pub fn write_uleb128(&mut self, mut value: u64) -> Result<()> {
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                return self.write_u8(byte);
            }
            self.write_u8(byte | 0x80)?;
        }
    }

    /// ULEB128 length prefix followed by `emit` once per element.
    pub fn write_vec<T>(
        &mut self,
        items: &[T],
        mut emit: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        self.write_uleb128(items.len() as u64)?;
        for item in items {
            emit(self, item)?;
        }
        Ok(())
    }

    /// Exactly the written prefix, never the unused tail.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bytes.truncate(self.pos);
        self.bytes
    }
}
