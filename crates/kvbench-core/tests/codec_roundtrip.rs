// Integration tests for kvbench-core serializers
//
// Every codec must reproduce the input entity field-for-field.

use std::collections::HashMap;

use chrono::DateTime;
use kvbench_core::{CodecError, Entity, EntityGenerator, NestedData, Serializer};

/// Entity exercising the awkward corners: empty collections, negative and
/// extreme numbers, sub-second timestamps and non-ASCII text.
fn edge_case_entity() -> Entity {
    Entity {
        id: i32::MIN,
        name: String::new(),
        email: "ünïcødé+tag@例え.jp".to_string(),
        created_at: DateTime::from_timestamp(-86_400, 999_999_999).unwrap(),
        data: NestedData {
            field1: "line\nbreak \"quoted\"".to_string(),
            field2: String::new(),
            field3: -1,
            field4: f64::MIN_POSITIVE,
            numbers: vec![],
        },
        tags: vec![],
        metadata: HashMap::new(),
    }
}

#[test]
fn test_generated_entities_round_trip_every_codec() {
    let entities = EntityGenerator::default().generate(200);

    for serializer in Serializer::ALL {
        for entity in &entities {
            let bytes = serializer.serialize(entity).unwrap();
            let decoded: Entity = serializer.deserialize(&bytes).unwrap();
            assert_eq!(&decoded, entity, "{} round trip", serializer.name());
        }
    }
}

#[test]
fn test_edge_case_entity_round_trips_every_codec() {
    let entity = edge_case_entity();

    for serializer in Serializer::ALL {
        let bytes = serializer.serialize(&entity).unwrap();
        let decoded: Entity = serializer.deserialize(&bytes).unwrap();
        assert_eq!(decoded, entity, "{} round trip", serializer.name());
    }
}

#[test]
fn test_float_precision_survives_text_codec() {
    let mut entity = EntityGenerator::default().generate(1).remove(0);
    for value in [0.1 + 0.2, 1.0 / 3.0, 123_456.789_012_345_6, f64::MAX] {
        entity.data.field4 = value;
        let bytes = Serializer::Json.serialize(&entity).unwrap();
        let decoded: Entity = Serializer::Json.deserialize(&bytes).unwrap();
        assert_eq!(decoded.data.field4.to_bits(), value.to_bits());
    }
}

#[test]
fn test_binary_codecs_are_smaller_than_text() {
    let entity = &EntityGenerator::default().generate(1)[0];

    let json = Serializer::Json.serialize(entity).unwrap().len();
    let msgpack = Serializer::MessagePack.serialize(entity).unwrap().len();
    let protobuf = Serializer::Protobuf.serialize(entity).unwrap().len();

    assert_ne!(json, protobuf);
    assert!(protobuf <= json, "protobuf={protobuf} json={json}");
    assert!(msgpack < json, "msgpack={msgpack} json={json}");
}

#[test]
fn test_truncated_input_is_deserialization_error() {
    let entity = &EntityGenerator::default().generate(1)[0];

    for serializer in Serializer::ALL {
        let bytes = serializer.serialize(entity).unwrap();
        let truncated = &bytes[..bytes.len() - 1];

        match serializer.deserialize::<Entity>(truncated) {
            Err(CodecError::Deserialization { codec, len, .. }) => {
                assert_eq!(codec, serializer.name());
                assert_eq!(len, truncated.len());
            }
            other => panic!("{}: expected deserialization error, got {other:?}", serializer.name()),
        }
    }
}

#[test]
fn test_cross_codec_bytes_are_rejected() {
    let entity = &EntityGenerator::default().generate(1)[0];
    let json = Serializer::Json.serialize(entity).unwrap();

    assert!(Serializer::MessagePack.deserialize::<Entity>(&json).is_err());
}

#[test]
fn test_corrupt_protobuf_is_deserialization_error() {
    // unterminated varint key
    let err = Serializer::Protobuf
        .deserialize::<Entity>(&[0xff, 0xff, 0xff, 0xff])
        .unwrap_err();
    assert_eq!(err.codec(), "prost");
}
