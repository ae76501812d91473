//! Worker payloads and the normalized snapshot built from them.
//!
//! A [`RawPayload`] mirrors the worker's JSON body with every field optional.
//! [`Snapshot::from_raw`] fills in defaults (no items, zero TTL, not
//! refreshed), classifies every item and drops entries that do not match
//! the item shape or break the `start < end` invariant, so nothing
//! downstream has to revalidate.

use super::item::{RawItem, ScheduleItem};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

/// The worker's JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPayload {
    #[serde(default)]
    pub v: Option<Value>,
    #[serde(default)]
    pub tz: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub range: Option<Value>,
    #[serde(default)]
    pub fetched_at: Option<i64>,
    #[serde(default)]
    pub ttl_ms: Option<i64>,
    /// Kept untyped so one malformed entry is dropped on its own instead of
    /// failing the whole payload.
    #[serde(default)]
    pub items: Option<Vec<Value>>,
    #[serde(default)]
    pub refreshed: Option<bool>,
    #[serde(default)]
    pub summary: Option<Value>,
}

/// One immutable fetched batch of items plus fetch metadata.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub items: Vec<ScheduleItem>,
    pub tz: String,
    pub day: String,
    pub range: Option<Value>,
    pub version: Option<Value>,
    pub summary: Option<Value>,
    /// When the worker fetched the data upstream.
    pub fetched_at: Option<DateTime<Utc>>,
    pub ttl: Duration,
    /// `true` when the worker bypassed its cache for this response.
    pub refreshed: bool,
    /// When this client received the payload.
    pub received_at: DateTime<Utc>,
    /// Number of raw items rejected during normalization.
    pub dropped: usize,
}

impl Snapshot {
    pub fn from_raw(raw: RawPayload, received_at: DateTime<Utc>) -> Self {
        let raw_items = raw.items.unwrap_or_default();
        let total = raw_items.len();
        let items: Vec<ScheduleItem> = raw_items
            .into_iter()
            .filter_map(|value| serde_json::from_value::<RawItem>(value).ok())
            .filter_map(ScheduleItem::from_raw)
            .collect();
        let dropped = total - items.len();

        Self {
            items,
            tz: raw.tz.unwrap_or_default(),
            day: raw.day.unwrap_or_default(),
            range: raw.range,
            version: raw.v,
            summary: raw.summary,
            fetched_at: raw.fetched_at.filter(|ms| *ms != 0).and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            ttl: raw.ttl_ms.and_then(Duration::try_milliseconds).unwrap_or_else(Duration::zero),
            refreshed: raw.refreshed.unwrap_or(false),
            received_at,
            dropped,
        }
    }

    /// Age of the upstream data at `now`, if the worker reported a fetch time.
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.fetched_at.map(|fetched_at| now - fetched_at)
    }
}
