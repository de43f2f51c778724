// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-tag parsing from arbitrary strings.
//!
//! Tag strings arrive straight from user input (RPC arguments, config
//! files). Deeply nested generics, unbalanced brackets, and empty segments
//! must all come back as Err — and whatever the parser does accept must
//! survive a print/parse round trip unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;

use bcs_schema::{pure_schema, TypeTag};

fuzz_target!(|input: &str| {
    if let Ok(tag) = TypeTag::parse(input) {
        let printed = tag.to_string();
        let reparsed = TypeTag::parse(&printed).expect("printed tag must reparse");
        assert_eq!(reparsed, tag, "round trip diverged for {:?}", input);
        assert_eq!(reparsed.to_string(), printed);
    }

    // pure_schema shares the tag grammar; it must be equally panic-free.
    let _ = pure_schema(input);
});
