use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single ndjson record.
///
/// Decoding is schema-on-read permissive: fields absent from the source
/// object take their zero values (`0`, Unix epoch, empty list) and unknown
/// fields are ignored. Serialization is deterministic: declaration field
/// order, `time` as RFC3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "unix_epoch")]
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub words: Vec<String>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}
