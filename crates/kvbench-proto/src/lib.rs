// kvbench-proto - Protocol Buffers schema for benchmark entities
//
// The messages are declared with prost derives instead of a build script so
// the field numbers live next to the Rust definitions. Equivalent schema:
//
//   message Entity {
//     int32 id = 1;
//     string name = 2;
//     string email = 3;
//     google.protobuf.Timestamp created_at = 4;
//     NestedData data = 5;
//     repeated string tags = 6;
//     map<string, int32> metadata = 7;
//   }
//
//   message NestedData {
//     string field1 = 1;
//     string field2 = 2;
//     int32 field3 = 3;
//     double field4 = 4;
//     repeated int32 numbers = 5;
//   }
//
// Field numbers are part of the wire contract. Never reuse a number with a
// different type; retire it instead.

use std::collections::HashMap;

pub use prost_types::Timestamp;

/// Wire form of `kvbench_core::Entity`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EntityMessage {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub email: String,
    #[prost(message, optional, tag = "4")]
    pub created_at: Option<Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub data: Option<NestedDataMessage>,
    #[prost(string, repeated, tag = "6")]
    pub tags: Vec<String>,
    #[prost(map = "string, int32", tag = "7")]
    pub metadata: HashMap<String, i32>,
}

/// Wire form of `kvbench_core::NestedData`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NestedDataMessage {
    #[prost(string, tag = "1")]
    pub field1: String,
    #[prost(string, tag = "2")]
    pub field2: String,
    #[prost(int32, tag = "3")]
    pub field3: i32,
    #[prost(double, tag = "4")]
    pub field4: f64,
    #[prost(int32, repeated, tag = "5")]
    pub numbers: Vec<i32>,
}
