use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two daily collection runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Midnight,
    Noon,
}

impl Slot {
    pub fn label(self) -> &'static str {
        match self {
            Slot::Midnight => "00:00 取得",
            Slot::Noon => "12:00 取得",
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            Slot::Midnight => 0,
            Slot::Noon => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSlot(pub i32);

impl fmt::Display for InvalidSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot must be 0 or 1, got {}", self.0)
    }
}

impl std::error::Error for InvalidSlot {}

impl TryFrom<i32> for Slot {
    type Error = InvalidSlot;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Slot::Midnight),
            1 => Ok(Slot::Noon),
            other => Err(InvalidSlot(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub date: String,
    pub slot: Slot,
    /// Markdown body as produced by the ingestion job.
    pub raw_response: String,
    pub fetched_at: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Built from raw query pairs so a repeated `date` key cannot reject the
/// request. The first occurrence wins.
impl From<Vec<(String, String)>> for DateQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let date = pairs
            .into_iter()
            .find(|(key, _)| key == "date")
            .map(|(_, value)| value);
        Self { date }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub min_date: String,
    pub max_date: String,
    pub default_date: String,
}
