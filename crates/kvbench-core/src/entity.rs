//! Benchmark payload
//!
//! `Entity` carries both schema annotations the binary codecs need:
//! field declaration order is the MessagePack position (append new fields at
//! the end, never reorder), and the protobuf field numbers live on the
//! message types in `kvbench-proto`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kvbench_proto::{EntityMessage, NestedDataMessage, Timestamp};
use serde::{Deserialize, Serialize};

use crate::codec::Record;
use crate::error::MessageError;

/// Prefix shared by every entity key in the store.
pub const KEY_PREFIX: &str = "entity:";

/// Storage key for an entity id. Depends on the id alone.
pub fn storage_key(id: i32) -> String {
    format!("{KEY_PREFIX}{id}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub data: NestedData,
    pub tags: Vec<String>,
    pub metadata: HashMap<String, i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedData {
    pub field1: String,
    pub field2: String,
    pub field3: i32,
    pub field4: f64,
    pub numbers: Vec<i32>,
}

impl Entity {
    pub fn storage_key(&self) -> String {
        storage_key(self.id)
    }
}

impl Record for Entity {
    type Message = EntityMessage;

    fn to_message(&self) -> EntityMessage {
        EntityMessage {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: Some(to_timestamp(&self.created_at)),
            data: Some(self.data.to_message()),
            tags: self.tags.clone(),
            metadata: self.metadata.clone(),
        }
    }

    fn from_message(message: EntityMessage) -> Result<Self, MessageError> {
        let created_at = message
            .created_at
            .ok_or(MessageError::MissingField("created_at"))?;
        let data = message.data.ok_or(MessageError::MissingField("data"))?;

        Ok(Self {
            id: message.id,
            name: message.name,
            email: message.email,
            created_at: from_timestamp(&created_at)?,
            data: NestedData::from_message(data),
            tags: message.tags,
            metadata: message.metadata,
        })
    }
}

impl NestedData {
    fn to_message(&self) -> NestedDataMessage {
        NestedDataMessage {
            field1: self.field1.clone(),
            field2: self.field2.clone(),
            field3: self.field3,
            field4: self.field4,
            numbers: self.numbers.clone(),
        }
    }

    fn from_message(message: NestedDataMessage) -> Self {
        Self {
            field1: message.field1,
            field2: message.field2,
            field3: message.field3,
            field4: message.field4,
            numbers: message.numbers,
        }
    }
}

fn to_timestamp(at: &DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: at.timestamp(),
        // < 2_000_000_000 even during a leap second
        nanos: at.timestamp_subsec_nanos() as i32,
    }
}

fn from_timestamp(ts: &Timestamp) -> Result<DateTime<Utc>, MessageError> {
    u32::try_from(ts.nanos)
        .ok()
        .and_then(|nanos| DateTime::from_timestamp(ts.seconds, nanos))
        .ok_or(MessageError::InvalidTimestamp {
            seconds: ts.seconds,
            nanos: ts.nanos,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entity {
        Entity {
            id: 3,
            name: "Entity_3".to_string(),
            email: "entity3@example.com".to_string(),
            created_at: DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap(),
            data: NestedData {
                field1: "Field1_Value_3".to_string(),
                field2: "Field2_Value_3".to_string(),
                field3: 17,
                field4: 42.5,
                numbers: vec![1, 2, 3],
            },
            tags: vec!["tag1".to_string(), "tag_3".to_string()],
            metadata: HashMap::from([("views".to_string(), 10), ("likes".to_string(), 2)]),
        }
    }

    #[test]
    fn test_storage_key_depends_on_id_only() {
        let mut entity = sample();
        assert_eq!(entity.storage_key(), "entity:3");

        entity.name = "renamed".to_string();
        entity.data.numbers.clear();
        assert_eq!(entity.storage_key(), storage_key(3));
        assert_eq!(storage_key(-1), "entity:-1");
    }

    #[test]
    fn test_message_mapping_round_trip() {
        let entity = sample();
        let message = entity.to_message();

        assert_eq!(message.created_at.unwrap().nanos, 123_456_789);
        assert_eq!(Entity::from_message(message).unwrap(), entity);
    }

    #[test]
    fn test_message_missing_nested_data() {
        let mut message = sample().to_message();
        message.data = None;

        assert_eq!(
            Entity::from_message(message),
            Err(MessageError::MissingField("data"))
        );
    }

    #[test]
    fn test_message_invalid_timestamp() {
        let mut message = sample().to_message();
        message.created_at = Some(Timestamp {
            seconds: 0,
            nanos: -5,
        });

        assert!(matches!(
            Entity::from_message(message),
            Err(MessageError::InvalidTimestamp { nanos: -5, .. })
        ));
    }
}
