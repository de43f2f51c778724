// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ULEB128 encoding/decoding.
//!
//! Every length prefix and enum index in the wire format is a ULEB128.
//! If decode panics on malformed input, every composite codec breaks.

#![no_main]

use libfuzzer_sys::fuzz_target;

use bcs_schema::{Reader, Writer, WriterOptions, MAX_ULEB_BYTES};

/// The decoder must return Err on garbage, never panic. Any value it does
/// accept must re-encode to a decoding of the same value in at most
/// MAX_ULEB_BYTES bytes.
fuzz_target!(|data: &[u8]| {
    let mut reader = Reader::new(data.to_vec());
    if let Ok(value) = reader.read_uleb128() {
        let consumed = reader.position();
        assert!(
            consumed <= MAX_ULEB_BYTES,
            "decoder consumed {} bytes, max is {}",
            consumed,
            MAX_ULEB_BYTES
        );

        let mut writer = Writer::new(WriterOptions::default());
        writer
            .write_uleb128(value)
            .expect("unbounded writer cannot run out of space");
        let reencoded = writer.into_bytes();

        // The encoder is minimal, so the re-encoding can only be shorter
        // or equal, never longer.
        assert!(reencoded.len() <= consumed);

        let mut reread = Reader::new(reencoded);
        assert_eq!(
            reread.read_uleb128().expect("canonical encoding must decode"),
            value
        );
    }
});
