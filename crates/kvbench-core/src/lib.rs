// kvbench-core - Entity model and serializer abstraction
//
// Everything here is pure: no async, no I/O. The store and writer crates
// build on these types.
//
// - entity: the benchmark payload and its storage key
// - codec: the closed set of serializers (JSON, MessagePack, Protobuf)
// - generator: seeded synthetic workloads

pub mod codec;
pub mod entity;
pub mod error;
pub mod generator;

pub use codec::{ParseSerializerError, Record, Serializer};
pub use entity::{storage_key, Entity, NestedData, KEY_PREFIX};
pub use error::{CodecError, MessageError};
pub use generator::{default_anchor, EntityGenerator, DEFAULT_SEED};
