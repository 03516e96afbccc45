//! Serializer abstraction
//!
//! Three interchangeable encodings of the same logical schema:
//! - `Json`: serde_json, self-describing text
//! - `MessagePack`: rmp-serde compact form, structs written as positional arrays
//! - `Protobuf`: prost, field-numbered binary
//!
//! None of them validate input beyond what the codec does.

use std::fmt;
use std::str::FromStr;

use prost::Message;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{CodecError, MessageError};

/// A type every serializer can encode.
///
/// serde covers the text and MessagePack codecs; the protobuf codec goes
/// through a dedicated message type carrying the field numbers.
pub trait Record: Serialize + DeserializeOwned + Sized {
    type Message: Message + Default;

    fn to_message(&self) -> Self::Message;

    fn from_message(message: Self::Message) -> Result<Self, MessageError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Serializer {
    Json,
    #[serde(rename = "msgpack", alias = "messagepack")]
    MessagePack,
    #[serde(alias = "proto")]
    Protobuf,
}

impl Serializer {
    /// Every serializer, in reporting order.
    pub const ALL: [Serializer; 3] = [Self::Json, Self::MessagePack, Self::Protobuf];

    /// Human-readable name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "serde_json",
            Self::MessagePack => "rmp-serde",
            Self::Protobuf => "prost",
        }
    }

    pub fn serialize<T: Record>(self, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Json => {
                serde_json::to_vec(value).map_err(|e| CodecError::serialization(self.name(), e))
            }
            Self::MessagePack => {
                rmp_serde::to_vec(value).map_err(|e| CodecError::serialization(self.name(), e))
            }
            Self::Protobuf => Ok(value.to_message().encode_to_vec()),
        }
    }

    pub fn deserialize<T: Record>(self, bytes: &[u8]) -> Result<T, CodecError> {
        let codec = self.name();
        let len = bytes.len();

        match self {
            Self::Json => {
                serde_json::from_slice(bytes).map_err(|e| CodecError::deserialization(codec, len, e))
            }
            Self::MessagePack => {
                rmp_serde::from_slice(bytes).map_err(|e| CodecError::deserialization(codec, len, e))
            }
            Self::Protobuf => {
                let message = T::Message::decode(bytes)
                    .map_err(|e| CodecError::deserialization(codec, len, e))?;
                T::from_message(message).map_err(|e| CodecError::deserialization(codec, len, e))
            }
        }
    }
}

impl fmt::Display for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::MessagePack => write!(f, "msgpack"),
            Self::Protobuf => write!(f, "protobuf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported serializer: {0}. Supported: json, msgpack, protobuf")]
pub struct ParseSerializerError(String);

impl FromStr for Serializer {
    type Err = ParseSerializerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "msgpack" | "messagepack" => Ok(Self::MessagePack),
            "protobuf" | "proto" => Ok(Self::Protobuf),
            _ => Err(ParseSerializerError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::EntityGenerator;
    use crate::Entity;

    #[test]
    fn test_serializer_from_str() {
        assert_eq!("json".parse::<Serializer>().unwrap(), Serializer::Json);
        assert_eq!(
            "msgpack".parse::<Serializer>().unwrap(),
            Serializer::MessagePack
        );
        assert_eq!(
            "MessagePack".parse::<Serializer>().unwrap(),
            Serializer::MessagePack
        );
        assert_eq!("proto".parse::<Serializer>().unwrap(), Serializer::Protobuf);
        assert!("bincode".parse::<Serializer>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for serializer in Serializer::ALL {
            assert_eq!(
                serializer.to_string().parse::<Serializer>().unwrap(),
                serializer
            );
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let names: Vec<_> = Serializer::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["serde_json", "rmp-serde", "prost"]);
    }

    #[test]
    fn test_msgpack_uses_positional_arrays() {
        let entity = &EntityGenerator::new(1).generate(1)[0];
        let bytes = Serializer::MessagePack.serialize(entity).unwrap();

        // fixarray with 7 elements, one per Entity field
        assert_eq!(bytes[0], 0x90 | 7);
    }

    #[test]
    fn test_protobuf_rejects_empty_payload() {
        // an empty buffer decodes to a default message with no timestamp
        let err = Serializer::Protobuf.deserialize::<Entity>(&[]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Deserialization {
                codec: "prost",
                len: 0,
                ..
            }
        ));
    }
}
