//! Primitive codec behavior: widths, endianness, range validation.

use bcs_schema::{bcs, BcsError, ErrorKind, U256, Value};

#[test]
fn u8_boundaries() {
    let schema = bcs::u8();
    assert_eq!(schema.serialize(&Value::U8(0)).unwrap().to_bytes(), &[0]);
    assert_eq!(schema.serialize(&Value::U8(255)).unwrap().to_bytes(), &[255]);

    // Decimal strings are accepted at the API boundary.
    assert_eq!(
        schema.serialize(&Value::from("255")).unwrap().to_bytes(),
        &[255]
    );

    for rejected in [Value::from("256"), Value::from("-1"), Value::U16(256)] {
        let err = schema.serialize(&rejected).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "accepted {:?}", rejected);
    }
}

#[test]
fn fixed_widths_and_little_endian() {
    assert_eq!(
        bcs::u16().serialize(&Value::U16(0x1234)).unwrap().to_bytes(),
        &[0x34, 0x12]
    );
    assert_eq!(
        bcs::u32()
            .serialize(&Value::U32(0x1234_5678))
            .unwrap()
            .to_bytes(),
        &[0x78, 0x56, 0x34, 0x12]
    );
    assert_eq!(bcs::u64().serialized_size(), Some(8));
    assert_eq!(bcs::u128().serialized_size(), Some(16));
    assert_eq!(bcs::u256().serialized_size(), Some(32));
}

#[test]
fn u64_decimal_string_boundary() {
    let schema = bcs::u64();
    let serialized = schema
        .serialize(&Value::from("18446744073709551615"))
        .unwrap();
    assert_eq!(serialized.to_bytes(), &[0xff; 8]);
    assert_eq!(serialized.parse().unwrap(), Value::U64(u64::MAX));

    let err = schema
        .serialize(&Value::from("18446744073709551616"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn u128_round_trip() {
    let schema = bcs::u128();
    let serialized = schema.serialize(&Value::U128(u128::MAX)).unwrap();
    assert_eq!(serialized.to_bytes(), &[0xff; 16]);
    assert_eq!(serialized.parse().unwrap(), Value::U128(u128::MAX));
}

#[test]
fn u256_round_trip_via_decimal_string() {
    let schema = bcs::u256();
    let literal = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
    let serialized = schema.serialize(&Value::from(literal)).unwrap();
    assert_eq!(serialized.to_bytes(), &[0xff; 32]);
    assert_eq!(
        serialized.parse().unwrap(),
        Value::U256(U256::from_dec_str(literal).unwrap())
    );
}

#[test]
fn boolean_wire_bytes() {
    let schema = bcs::boolean();
    assert_eq!(
        schema.serialize(&Value::Bool(false)).unwrap().to_bytes(),
        &[0x00]
    );
    assert_eq!(
        schema.serialize(&Value::Bool(true)).unwrap().to_bytes(),
        &[0x01]
    );
    assert!(schema.parse(&[0x02]).is_err());
    assert!(schema.serialize(&Value::U8(1)).is_err());
}

#[test]
fn uleb128_standalone_codec() {
    let schema = bcs::uleb128();
    assert_eq!(
        schema.serialize(&Value::U64(300)).unwrap().to_bytes(),
        &[0xac, 0x02]
    );
    assert_eq!(schema.parse(&[0xac, 0x02]).unwrap(), Value::U64(300));
    assert_eq!(schema.serialized_size(), None);
}

#[test]
fn fixed_bytes_enforce_length() {
    let schema = bcs::bytes(4);
    assert_eq!(
        schema
            .serialize(&Value::Bytes(vec![1, 2, 3, 4]))
            .unwrap()
            .to_bytes(),
        &[1, 2, 3, 4]
    );
    assert_eq!(schema.serialized_size(), Some(4));
    assert!(schema.serialize(&Value::Bytes(vec![1, 2, 3])).is_err());
}

#[test]
fn byte_vector_is_length_prefixed() {
    let schema = bcs::byte_vector();
    assert_eq!(
        schema
            .serialize(&Value::Bytes(vec![9, 8, 7]))
            .unwrap()
            .to_bytes(),
        &[3, 9, 8, 7]
    );
    assert_eq!(
        schema.serialize(&Value::Bytes(vec![])).unwrap().to_bytes(),
        &[0x00]
    );
}

#[test]
fn string_is_utf8_byte_vector() {
    let schema = bcs::string();
    let serialized = schema.serialize(&Value::from("hello")).unwrap();
    assert_eq!(serialized.to_bytes(), b"\x05hello");
    assert_eq!(serialized.parse().unwrap(), Value::from("hello"));

    // Multi-byte UTF-8 counts bytes, not characters.
    let serialized = schema.serialize(&Value::from("héllo")).unwrap();
    assert_eq!(serialized.to_bytes()[0], 6);

    // Invalid UTF-8 payloads fail to decode.
    let err = schema.parse(&[2, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, BcsError::Validation { .. }));
}

#[test]
fn empty_vector_is_one_zero_byte() {
    let schema = bcs::vector(bcs::u64());
    assert_eq!(
        schema.serialize(&Value::List(vec![])).unwrap().to_bytes(),
        &[0x00]
    );
}
