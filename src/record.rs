//! Record definitions
//!
//! The single entity held by the store, plus the form in which clients
//! submit it.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Server time with the local UTC offset, nanosecond precision.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// A stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub brand: String,
    pub revenue: i64,
    pub soda_formula: String,

    /// Instant of the last write; always assigned by the server
    pub timestamp: DateTime<FixedOffset>,
}

/// A record as submitted by a client
///
/// Decoding rules:
/// - missing fields keep zero values, so a missing `id` lands on key 0
/// - field names match ignoring ASCII case (`"ID"` sets `id`)
/// - a repeated field takes its last value
/// - `null` leaves a field as it was; a `null` body is the zero record
/// - unknown fields are skipped
///
/// A client `timestamp` must still be well formed but is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub id: u64,
    pub brand: String,
    pub revenue: i64,
    pub soda_formula: String,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl NewRecord {
    /// Decode the first JSON value in `body`; trailing bytes are ignored
    pub fn from_json(body: &[u8]) -> crate::Result<Self> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<NewRecord>();
        match values.next() {
            Some(record) => Ok(record?),
            None => Err(crate::SodaError::Decode(de::Error::custom(
                "EOF while parsing a value",
            ))),
        }
    }

    /// Build the stored record, replacing any client timestamp
    pub fn stamp(self, timestamp: DateTime<FixedOffset>) -> Record {
        Record {
            id: self.id,
            brand: self.brand,
            revenue: self.revenue,
            soda_formula: self.soda_formula,
            timestamp,
        }
    }
}

impl<'de> Deserialize<'de> for NewRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NewRecordVisitor)
    }
}

struct NewRecordVisitor;

impl<'de> Visitor<'de> for NewRecordVisitor {
    type Value = NewRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a record object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<NewRecord, E> {
        Ok(NewRecord::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<NewRecord, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = NewRecord::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "id" => {
                    if let Some(id) = map.next_value::<Option<u64>>()? {
                        record.id = id;
                    }
                }
                "brand" => {
                    if let Some(brand) = map.next_value::<Option<String>>()? {
                        record.brand = brand;
                    }
                }
                "revenue" => {
                    if let Some(revenue) = map.next_value::<Option<i64>>()? {
                        record.revenue = revenue;
                    }
                }
                "soda_formula" => {
                    if let Some(formula) = map.next_value::<Option<String>>()? {
                        record.soda_formula = formula;
                    }
                }
                "timestamp" => {
                    let timestamp = map.next_value::<Option<DateTime<FixedOffset>>>()?;
                    if timestamp.is_some() {
                        record.timestamp = timestamp;
                    }
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(record)
    }
}
