//! Structured (serde) form of [`ExifTime`].
//!
//! ```text
//! {
//!   "_ctor": "ExifTime",
//!   "hour": 14, "minute": 5, "second": 9,
//!   "millisecond": 0,          // omitted when absent
//!   "rawValue": "14:05:09Z"    // omitted when absent
//! }
//! ```
//!
//! Field names and the `_ctor` tag are shared with previously stored data
//! and must not change. Deserialization does not re-validate fields.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::time::ExifTime;

/// Tagged wrapper producing the `_ctor` discriminator.
#[derive(Serialize, Deserialize)]
#[serde(tag = "_ctor")]
enum Tagged<'a> {
    ExifTime(Record<'a>),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Record<'a> {
    hour: u32,
    minute: u32,
    second: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    millisecond: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    raw_value: Option<Cow<'a, str>>,
}

impl Serialize for ExifTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Tagged::ExifTime(Record {
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
            millisecond: self.millisecond(),
            raw_value: self.raw_value().map(Into::into),
        })
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExifTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Tagged::ExifTime(record) = Tagged::deserialize(deserializer)?;
        Ok(ExifTime::new(
            record.hour,
            record.minute,
            record.second,
            record.millisecond,
            record.raw_value.map(Cow::into_owned),
        ))
    }
}
