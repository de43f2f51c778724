//! Type-tag parsing/printing and the pure-schema mapping.

use bcs_schema::{pure_schema, ErrorKind, TypeTag, Value};

#[test]
fn nested_generic_round_trip() {
    let input = "0x2::balance::Supply<0x72de5feb63c0ab6ed1cda7e5b367f3d0a999add7::amm::LP<0x2::sui::SUI, 0xfee024a3c0c03ada5cdbda7d0e8b68802e6dec80::example_coin::EXAMPLE_COIN>>";
    let tag = TypeTag::parse(input).unwrap();
    assert_eq!(tag.to_string(), input);

    let supply = match &tag {
        TypeTag::Struct(tag) => tag,
        other => panic!("expected struct tag, got {:?}", other),
    };
    assert_eq!(supply.module, "balance");
    assert_eq!(supply.name, "Supply");
    assert_eq!(supply.type_params.len(), 1);

    let lp = match &supply.type_params[0] {
        TypeTag::Struct(tag) => tag,
        other => panic!("expected struct tag, got {:?}", other),
    };
    assert_eq!(lp.name, "LP");
    assert_eq!(lp.type_params.len(), 2);
}

#[test]
fn whitespace_in_generics_is_not_significant() {
    let tag = TypeTag::parse("0x2::coin::Coin< 0x2::sui::SUI >").unwrap();
    assert_eq!(tag.to_string(), "0x2::coin::Coin<0x2::sui::SUI>");
}

#[test]
fn pure_schema_primitives_encode() {
    let schema = pure_schema("u64").unwrap();
    assert_eq!(
        schema.serialize(&Value::U64(1)).unwrap().to_bytes(),
        &[1, 0, 0, 0, 0, 0, 0, 0]
    );

    let schema = pure_schema("bool").unwrap();
    assert_eq!(schema.serialize(&Value::Bool(true)).unwrap().to_bytes(), &[1]);
}

#[test]
fn pure_schema_vector_of_u8_is_element_wise() {
    let schema = pure_schema("vector<u8>").unwrap();
    let serialized = schema
        .serialize(&Value::List(vec![Value::U8(1), Value::U8(2)]))
        .unwrap();
    assert_eq!(serialized.to_bytes(), &[2, 1, 2]);
    assert_eq!(
        serialized.parse().unwrap(),
        Value::List(vec![Value::U8(1), Value::U8(2)])
    );
}

#[test]
fn pure_schema_option_aliases() {
    for name in ["option<u64>", "0x1::option::Option<u64>"] {
        let schema = pure_schema(name).unwrap();
        assert_eq!(schema.serialize(&Value::Null).unwrap().to_bytes(), &[0]);
        assert_eq!(
            schema.serialize(&Value::U64(3)).unwrap().to_bytes(),
            &[1, 3, 0, 0, 0, 0, 0, 0, 0]
        );
    }
}

#[test]
fn pure_schema_string_aliases() {
    for name in ["string", "0x1::string::String"] {
        let schema = pure_schema(name).unwrap();
        assert_eq!(
            schema.serialize(&Value::from("ok")).unwrap().to_bytes(),
            &[2, b'o', b'k']
        );
    }
}

#[test]
fn pure_schema_address_pads_short_input() {
    let schema = pure_schema("address").unwrap();
    let serialized = schema.serialize(&Value::from("0x2")).unwrap();
    assert_eq!(serialized.to_bytes().len(), 32);
}

#[test]
fn pure_schema_rejects_non_pure_tags() {
    for name in ["signer", "0x2::coin::Coin<0x2::sui::SUI>", "vector<signer>"] {
        let err = pure_schema(name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema, "accepted {:?}", name);
    }
}
