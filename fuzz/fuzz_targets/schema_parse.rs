// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Schema decoding under adversarial input.
//!
//! Wire bytes come from untrusted peers. The worst case for a crafted
//! payload should be an error, not a panic or an out-of-memory abort —
//! length prefixes claiming billions of elements included.

#![no_main]

use libfuzzer_sys::fuzz_target;

use bcs_schema::{bcs, BcsType, Value};

fn schemas() -> Vec<BcsType> {
    vec![
        bcs::u64(),
        bcs::boolean(),
        bcs::string(),
        bcs::byte_vector(),
        bcs::vector(bcs::u64()),
        bcs::option(bcs::string()),
        bcs::map(bcs::string(), bcs::u64()),
        bcs::struct_(
            "Coin",
            vec![
                ("value", bcs::u64()),
                ("owner", bcs::string()),
                ("is_locked", bcs::boolean()),
            ],
        ),
        bcs::enum_(
            "Shape",
            vec![("Point", None), ("Circle", Some(bcs::u64()))],
        ),
    ]
}

/// Every decode path must terminate safely. Anything a schema does accept
/// must re-serialize cleanly, and the re-encoding must decode back to the
/// same value — once canonical, always canonical.
fuzz_target!(|data: &[u8]| {
    for schema in schemas() {
        if let Ok(value) = schema.parse(data) {
            let reencoded = schema
                .serialize(&value)
                .expect("a decoded value must re-serialize");
            // Decoding tolerates trailing input, so the re-encoding can be
            // shorter than the fuzz payload but never longer.
            assert!(reencoded.to_bytes().len() <= data.len());
            let reparsed: Value = reencoded.parse().expect("re-encoding must decode");
            assert_eq!(reparsed, value);
        }
    }
});
