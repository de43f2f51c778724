//! Composite combinator behavior: canonical ordering, enum tagging, sugar
//! combinators, writer capacity options, lazy recursion.

use bcs_schema::{bcs, BcsError, BcsType, ErrorKind, Value, WriterOptions};

fn coin_schema() -> BcsType {
    bcs::struct_(
        "Coin",
        vec![
            ("value", bcs::u64()),
            ("owner", bcs::string()),
            ("is_locked", bcs::boolean()),
        ],
    )
}

fn coin_value() -> Value {
    Value::record(vec![
        ("owner", Value::from("Big Wallet Guy")),
        ("value", Value::from("412412400000")),
        ("is_locked", Value::Bool(false)),
    ])
}

#[test]
fn struct_matches_known_wire_vector() {
    let serialized = coin_schema().serialize(&coin_value()).unwrap();
    assert_eq!(serialized.to_base64(), "gNGxBWAAAAAOQmlnIFdhbGxldCBHdXkA");

    let parsed = coin_schema()
        .parse_base64("gNGxBWAAAAAOQmlnIFdhbGxldCBHdXkA")
        .unwrap();
    assert_eq!(
        parsed,
        Value::record(vec![
            ("value", Value::U64(412_412_400_000)),
            ("owner", Value::from("Big Wallet Guy")),
            ("is_locked", Value::Bool(false)),
        ])
    );
}

#[test]
fn struct_field_order_is_schema_defined() {
    let schema = coin_schema();
    let forward = schema
        .serialize(&Value::record(vec![
            ("value", Value::U64(77)),
            ("owner", Value::from("a")),
            ("is_locked", Value::Bool(true)),
        ]))
        .unwrap();
    let shuffled = schema
        .serialize(&Value::record(vec![
            ("is_locked", Value::Bool(true)),
            ("owner", Value::from("a")),
            ("value", Value::U64(77)),
        ]))
        .unwrap();
    assert_eq!(forward.to_bytes(), shuffled.to_bytes());
}

#[test]
fn struct_rejects_missing_and_unknown_fields() {
    let schema = coin_schema();
    let missing = schema.serialize(&Value::record(vec![("value", Value::U64(1))]));
    assert_eq!(missing.unwrap_err().kind(), ErrorKind::Validation);

    let unknown = schema.serialize(&Value::record(vec![
        ("value", Value::U64(1)),
        ("owner", Value::from("a")),
        ("is_locked", Value::Bool(false)),
        ("extra", Value::U8(9)),
    ]));
    assert_eq!(unknown.unwrap_err().kind(), ErrorKind::Validation);
}

#[test]
fn serialized_size_propagates_through_composites() {
    assert_eq!(coin_schema().serialized_size(), None);
    let fixed = bcs::struct_(
        "Pair",
        vec![("a", bcs::u32()), ("b", bcs::fixed_array(3, bcs::u8()))],
    );
    assert_eq!(fixed.serialized_size(), Some(7));
    assert_eq!(bcs::tuple(vec![bcs::u8(), bcs::u64()]).serialized_size(), Some(9));
    assert_eq!(bcs::vector(bcs::u8()).serialized_size(), None);
    assert_eq!(
        bcs::tuple(vec![bcs::u8(), bcs::string()]).serialized_size(),
        None
    );
}

#[test]
fn tuple_is_positional() {
    let schema = bcs::tuple(vec![bcs::u8(), bcs::boolean()]);
    let serialized = schema
        .serialize(&Value::List(vec![Value::U8(7), Value::Bool(true)]))
        .unwrap();
    assert_eq!(serialized.to_bytes(), &[7, 1]);
    assert_eq!(
        serialized.parse().unwrap(),
        Value::List(vec![Value::U8(7), Value::Bool(true)])
    );
    assert!(schema.serialize(&Value::List(vec![Value::U8(7)])).is_err());
}

#[test]
fn fixed_array_enforces_arity() {
    let schema = bcs::fixed_array(2, bcs::u16());
    let serialized = schema
        .serialize(&Value::List(vec![Value::U16(1), Value::U16(2)]))
        .unwrap();
    // No length prefix.
    assert_eq!(serialized.to_bytes(), &[1, 0, 2, 0]);
    assert!(schema
        .serialize(&Value::List(vec![Value::U16(1)]))
        .is_err());
}

#[test]
fn enum_writes_declaration_order_index() {
    let schema = bcs::enum_(
        "Shape",
        vec![
            ("Point", None),
            ("Circle", Some(bcs::u64())),
            ("Label", Some(bcs::string())),
        ],
    );

    let point = schema.serialize(&Value::variant("Point", None)).unwrap();
    assert_eq!(point.to_bytes(), &[0]);
    assert_eq!(point.parse().unwrap(), Value::variant("Point", None));

    let circle = schema
        .serialize(&Value::variant("Circle", Some(Value::U64(5))))
        .unwrap();
    assert_eq!(circle.to_bytes(), &[1, 5, 0, 0, 0, 0, 0, 0, 0]);

    let label = schema
        .serialize(&Value::variant("Label", Some(Value::from("hi"))))
        .unwrap();
    assert_eq!(label.to_bytes(), &[2, 2, b'h', b'i']);
}

#[test]
fn enum_rejects_malformed_variants() {
    let schema = bcs::enum_("Shape", vec![("Point", None), ("Circle", Some(bcs::u64()))]);

    let unknown_name = schema.serialize(&Value::variant("Square", None));
    assert_eq!(unknown_name.unwrap_err().kind(), ErrorKind::Validation);

    let unit_with_payload = schema.serialize(&Value::variant("Point", Some(Value::U64(1))));
    assert_eq!(unit_with_payload.unwrap_err().kind(), ErrorKind::Validation);

    let missing_payload = schema.serialize(&Value::variant("Circle", None));
    assert_eq!(missing_payload.unwrap_err().kind(), ErrorKind::Validation);

    let not_a_variant = schema.serialize(&Value::U8(0));
    assert_eq!(not_a_variant.unwrap_err().kind(), ErrorKind::Validation);
}

#[test]
fn enum_decode_rejects_unknown_index() {
    let schema = bcs::enum_("Shape", vec![("Point", None)]);
    let err = schema.parse(&[9]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(matches!(
        err,
        BcsError::UnknownVariantIndex { index: 9, .. }
    ));
}

#[test]
fn option_is_enum_sugar() {
    let schema = bcs::option(bcs::u8());
    assert_eq!(schema.serialize(&Value::Null).unwrap().to_bytes(), &[0]);
    assert_eq!(
        schema.serialize(&Value::U8(7)).unwrap().to_bytes(),
        &[1, 7]
    );
    assert_eq!(schema.parse(&[0]).unwrap(), Value::Null);
    assert_eq!(schema.parse(&[1, 7]).unwrap(), Value::U8(7));
}

#[test]
fn map_preserves_insertion_order() {
    let schema = bcs::map(bcs::string(), bcs::u64());
    let pairs = Value::Map(vec![
        (Value::from("b"), Value::U64(2)),
        (Value::from("a"), Value::U64(1)),
    ]);
    let serialized = schema.serialize(&pairs).unwrap();
    // vector<(string, u64)>: count, then pairs in insertion order.
    assert_eq!(serialized.to_bytes()[0], 2);
    assert_eq!(serialized.to_bytes()[1..3], [1, b'b']);
    assert_eq!(serialized.parse().unwrap(), pairs);
}

#[test]
fn transforms_stack() {
    let schema = bcs::option(bcs::map(bcs::string(), bcs::u8()));
    let value = Value::Map(vec![(Value::from("k"), Value::U8(3))]);
    let serialized = schema.serialize(&value).unwrap();
    assert_eq!(serialized.to_bytes(), &[1, 1, 1, b'k', 3]);
    assert_eq!(serialized.parse().unwrap(), value);
    assert_eq!(schema.parse(&[0]).unwrap(), Value::Null);
}

fn tree_schema() -> BcsType {
    bcs::lazy(|| {
        bcs::enum_(
            "Tree",
            vec![
                ("Leaf", Some(bcs::u8())),
                ("Node", Some(bcs::vector(tree_schema()))),
            ],
        )
    })
}

#[test]
fn lazy_allows_recursive_schemas() {
    let schema = tree_schema();
    let value = Value::variant(
        "Node",
        Some(Value::List(vec![
            Value::variant("Leaf", Some(Value::U8(1))),
            Value::variant(
                "Node",
                Some(Value::List(vec![Value::variant(
                    "Leaf",
                    Some(Value::U8(2)),
                )])),
            ),
        ])),
    );
    let serialized = schema.serialize(&value).unwrap();
    assert_eq!(serialized.to_bytes(), &[1, 2, 0, 1, 1, 1, 0, 2]);
    assert_eq!(serialized.parse().unwrap(), value);
}

#[test]
fn writer_options_thread_through_serialize() {
    let tight_but_growable = WriterOptions {
        initial_size: 1,
        max_size: 1024,
        allocate_size: 1,
    };
    let serialized = coin_schema()
        .serialize_with(&coin_value(), tight_but_growable)
        .unwrap();
    assert_eq!(serialized.to_base64(), "gNGxBWAAAAAOQmlnIFdhbGxldCBHdXkA");

    let too_small = WriterOptions {
        initial_size: 1,
        max_size: 1,
        allocate_size: 1,
    };
    let err = coin_schema()
        .serialize_with(&coin_value(), too_small)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bounds);
}

#[test]
fn address_pads_and_round_trips() {
    let schema = bcs::address();
    let serialized = schema.serialize(&Value::from("0x2")).unwrap();
    assert_eq!(serialized.to_bytes().len(), 32);
    assert_eq!(serialized.to_bytes()[31], 2);
    assert_eq!(
        serialized.parse().unwrap(),
        Value::from("0x0000000000000000000000000000000000000000000000000000000000000002")
    );
    assert!(schema.serialize(&Value::from(&format!("0x{}", "ff".repeat(33))[..])).is_err());
}

#[test]
fn serialized_projections_agree() {
    let schema = bcs::byte_vector();
    let serialized = schema.serialize(&Value::Bytes(vec![1, 2, 3])).unwrap();
    assert_eq!(serialized.to_hex(), "03010203");
    assert_eq!(serialized.to_base64(), "AwECAw==");
    assert_eq!(serialized.to_base58(), "5TJUr");
    assert_eq!(
        schema.parse_hex("0x03010203").unwrap(),
        Value::Bytes(vec![1, 2, 3])
    );
    assert_eq!(
        schema.parse_base58("5TJUr").unwrap(),
        Value::Bytes(vec![1, 2, 3])
    );
}
