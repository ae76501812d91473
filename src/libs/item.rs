//! Schedule items and their classification.
//!
//! The worker sends a flat list of entries. Each entry is classified exactly
//! once, when the snapshot is ingested: an entry that carries both a party
//! size and a non-empty inbound channel is a reservation, everything else
//! is occupancy. Downstream code matches on [`ItemKind`] instead of
//! re-checking the raw fields.
//!
//! ## Usage
//!
//! ```rust
//! use schedboard::libs::item::{is_reservation, RawItem};
//!
//! let raw: RawItem = serde_json::from_str(
//!     r#"{"id": 7, "title": "Lane 3", "startMs": 0, "endMs": 60000, "type": "lane", "people": 2, "channel": "Naver"}"#,
//! ).unwrap();
//! assert!(is_reservation(&raw));
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One entry of the worker's `items` array, exactly as received.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Option<String>,
    pub start_ms: i64,
    pub end_ms: i64,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub games: Option<u32>,
    #[serde(default)]
    pub people: Option<u32>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// Structural reservation test: party size present and channel non-empty.
pub fn is_reservation(raw: &RawItem) -> bool {
    raw.people.is_some() && raw.channel.as_deref().is_some_and(|channel| !channel.is_empty())
}

/// Classification of a schedule item, fixed at ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Something happening (or done) on site right now.
    Occupancy {
        people: Option<u32>,
        channel: Option<String>,
    },
    /// An expected visit booked through an inbound channel.
    Reservation { people: u32, channel: String },
}

/// An immutable, classified schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub item_type: String,
    pub product: Option<String>,
    pub games: Option<u32>,
    pub kind: ItemKind,
}

impl ScheduleItem {
    /// Classifies and converts a raw entry.
    ///
    /// Returns `None` when the timestamps are out of range or the entry does
    /// not satisfy `start < end`.
    pub fn from_raw(raw: RawItem) -> Option<Self> {
        let start = Utc.timestamp_millis_opt(raw.start_ms).single()?;
        let end = Utc.timestamp_millis_opt(raw.end_ms).single()?;
        if start >= end {
            return None;
        }

        let reservation = is_reservation(&raw);
        let kind = match (raw.people, raw.channel) {
            (Some(people), Some(channel)) if reservation => ItemKind::Reservation { people, channel },
            (people, channel) => ItemKind::Occupancy { people, channel },
        };

        let id = match raw.id {
            Value::String(id) => id,
            Value::Null => String::new(),
            other => other.to_string(),
        };

        Some(Self {
            id,
            title: raw.title.unwrap_or_default(),
            start,
            end,
            item_type: raw.item_type.unwrap_or_default(),
            product: raw.product.filter(|product| !product.is_empty()),
            games: raw.games,
            kind,
        })
    }

    pub fn is_reservation(&self) -> bool {
        matches!(self.kind, ItemKind::Reservation { .. })
    }

    /// Party size, whatever the classification.
    pub fn people(&self) -> Option<u32> {
        match &self.kind {
            ItemKind::Reservation { people, .. } => Some(*people),
            ItemKind::Occupancy { people, .. } => *people,
        }
    }

    /// Inbound channel, if one was sent and is non-empty.
    pub fn channel(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Reservation { channel, .. } => Some(channel.as_str()),
            ItemKind::Occupancy { channel, .. } => channel.as_deref().filter(|channel| !channel.is_empty()),
        }
    }
}
