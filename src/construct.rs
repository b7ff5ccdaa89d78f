use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::properties::{self, Properties};

// ------------- StringRecord -------------
/// One analyzed string. Records are immutable once created: every derived
/// property is computed in [`StringRecord::new`] and never touched again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRecord {
    value: String,
    properties: Properties,
    created_at: DateTime<Utc>,
}

impl StringRecord {
    pub fn new(value: String) -> Self {
        let properties = properties::compute(&value);
        Self {
            value,
            properties,
            created_at: Utc::now(),
        }
    }
    /// Reassembles a record that was previously created, e.g. when read back
    /// from the persistence layer.
    pub fn restore(value: String, properties: Properties, created_at: DateTime<Utc>) -> Self {
        Self {
            value,
            properties,
            created_at,
        }
    }
    pub fn value(&self) -> &str {
        &self.value
    }
    pub fn digest(&self) -> &str {
        &self.properties.sha256_hash
    }
    pub fn properties(&self) -> &Properties {
        &self.properties
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// The wire form exposes the digest as `id` next to the value.
impl Serialize for StringRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("StringRecord", 4)?;
        record.serialize_field("id", self.digest())?;
        record.serialize_field("value", &self.value)?;
        record.serialize_field("properties", &self.properties)?;
        record.serialize_field("created_at", &self.created_at)?;
        record.end()
    }
}
