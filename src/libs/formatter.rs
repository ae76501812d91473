//! Presentation formatting for the dashboard.
//!
//! Turns a [`DerivedView`] and snapshot metadata into the strings shown on
//! screen. Nothing here decides what is active or next; it only formats what
//! the selector already chose. Clock strings are rendered in the configured
//! civil time zone, which is the only place instants leave UTC.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use schedboard::libs::formatter::{fmt_time, freshness_secs, ttl_secs};
//!
//! let instant = Utc.with_ymd_and_hms(2025, 3, 1, 4, 5, 0).unwrap();
//! assert_eq!(fmt_time(instant, chrono_tz::Asia::Seoul), "13:05");
//! assert_eq!(freshness_secs(instant, instant + Duration::milliseconds(2_999)), 2);
//! assert_eq!(ttl_secs(Duration::milliseconds(30_500)), 30);
//! ```

use super::color::{color_for_instant, Rgb};
use super::item::ScheduleItem;
use super::messages::Message;
use super::selector::{badge, derive_view, minutes_left, Badge, DerivedView};
use super::session::{ErrorEntry, SnapshotSession};
use super::snapshot::Snapshot;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// `HH:MM`, 24-hour clock, in `tz`.
pub fn fmt_time(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

/// `HH:MM:SS`, 24-hour clock, in `tz`.
pub fn fmt_clock(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M:%S").to_string()
}

/// Whole seconds since `fetched_at`, floored and never negative.
pub fn freshness_secs(fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - fetched_at).num_milliseconds().div_euclid(1000).max(0)
}

/// TTL in whole seconds, floored.
pub fn ttl_secs(ttl: Duration) -> i64 {
    ttl.num_milliseconds().div_euclid(1000)
}

/// Header strings: subtitle, state pill and data freshness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub subtitle: String,
    pub state: String,
    pub meta: String,
}

/// The four KPI values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpis {
    pub active_count: String,
    pub next_visit_people: String,
    pub next_visit_time: String,
    pub next_end: String,
}

/// A formatted row of the in-progress list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveRow {
    pub title: String,
    pub meta: String,
    pub badge: String,
}

/// A formatted row of the reservation timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineRow {
    pub time: String,
    pub title: String,
    pub meta: String,
    pub badge: String,
    pub color: String,
}

pub fn header(session: &SnapshotSession, now: DateTime<Utc>) -> Header {
    let state = session.state().label().to_string();
    match session.current() {
        Some(snapshot) => Header {
            subtitle: Message::Subtitle(snapshot.day.clone(), snapshot.tz.clone()).to_string(),
            state,
            meta: meta_line(snapshot, now),
        },
        None => Header {
            subtitle: Message::Placeholder.to_string(),
            state,
            meta: Message::Placeholder.to_string(),
        },
    }
}

/// `Data: updated Ns ago · TTL Ms`, or a placeholder without a fetch time.
pub fn meta_line(snapshot: &Snapshot, now: DateTime<Utc>) -> String {
    match snapshot.fetched_at {
        Some(fetched_at) => Message::MetaLine(freshness_secs(fetched_at, now), ttl_secs(snapshot.ttl)).to_string(),
        None => Message::Placeholder.to_string(),
    }
}

pub fn kpis(view: &DerivedView<'_>, tz: Tz) -> Kpis {
    let placeholder = || Message::Placeholder.to_string();
    Kpis {
        active_count: Message::ActiveCount(view.active.items.len()).to_string(),
        next_visit_people: view
            .next_visit
            .and_then(ScheduleItem::people)
            .map(|people| Message::PeopleCount(people).to_string())
            .unwrap_or_else(placeholder),
        next_visit_time: view.next_visit.map(|item| fmt_time(item.start, tz)).unwrap_or_else(placeholder),
        next_end: view.active.earliest_end.map(|end| fmt_time(end, tz)).unwrap_or_else(placeholder),
    }
}

/// Hint above the active list.
pub fn active_hint(view: &DerivedView<'_>, tz: Tz) -> String {
    match view.active.earliest_end {
        Some(end) => Message::ActiveHint(fmt_time(end, tz)).to_string(),
        None => Message::ActiveHintNone.to_string(),
    }
}

/// `09:00 ~ 10:00 · type/product · N games`
pub fn item_meta(item: &ScheduleItem, tz: Tz) -> String {
    let mut meta = format!("{} ~ {} · {}", fmt_time(item.start, tz), fmt_time(item.end, tz), item.item_type);
    if let Some(product) = &item.product {
        meta.push('/');
        meta.push_str(product);
    }
    if let Some(games) = item.games.filter(|games| *games > 0) {
        meta.push_str(&format!(" · {}", Message::GamesCount(games)));
    }
    meta
}

pub fn item_title(item: &ScheduleItem) -> String {
    if item.title.is_empty() {
        Message::NoTitle.to_string()
    } else {
        item.title.clone()
    }
}

pub fn active_rows(view: &DerivedView<'_>, tz: Tz) -> Vec<ActiveRow> {
    view.active
        .items
        .iter()
        .map(|item| ActiveRow {
            title: item_title(item),
            meta: item_meta(item, tz),
            badge: Message::BadgeMinutesLeft(minutes_left(item.end, view.now)).to_string(),
        })
        .collect()
}

pub fn timeline_rows(view: &DerivedView<'_>, tz: Tz) -> Vec<TimelineRow> {
    view.timeline
        .iter()
        .map(|item| {
            let title = match item.people() {
                Some(people) => Message::ReservationTitle(people).to_string(),
                None => item_title(item),
            };
            let meta = item
                .channel()
                .map(|channel| Message::ReservationChannel(channel.to_string()).to_string())
                .unwrap_or_default();
            TimelineRow {
                time: format!("{} ~ {}", fmt_time(item.start, tz), fmt_time(item.end, tz)),
                title,
                meta,
                badge: badge_text(&badge(item, view.now)),
                color: row_color(item, tz).to_string(),
            }
        })
        .collect()
}

pub fn badge_text(badge: &Badge) -> String {
    badge.label().to_string()
}

/// Row color keyed by the reservation's start time of day.
pub fn row_color(item: &ScheduleItem, tz: Tz) -> Rgb {
    color_for_instant(item.start, tz)
}

/// `[HH:MM:SS] message`
pub fn error_line(entry: &ErrorEntry, tz: Tz) -> String {
    format!("[{}] {}", fmt_clock(entry.at, tz), entry.message)
}

/// Everything one render tick prints, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub header: Header,
    /// `None` until the first snapshot arrives.
    pub kpis: Option<Kpis>,
    pub active_hint: String,
    pub active: Vec<ActiveRow>,
    pub timeline: Vec<TimelineRow>,
    pub errors: Vec<String>,
}

/// Derives and formats the whole dashboard for `now`.
pub fn dashboard(session: &SnapshotSession, now: DateTime<Utc>, tz: Tz) -> Dashboard {
    let errors = session.errors().iter().map(|entry| error_line(entry, tz)).collect();
    let header = header(session, now);

    match session.current() {
        Some(snapshot) => {
            let view = derive_view(snapshot, now);
            Dashboard {
                header,
                kpis: Some(kpis(&view, tz)),
                active_hint: active_hint(&view, tz),
                active: active_rows(&view, tz),
                timeline: timeline_rows(&view, tz),
                errors,
            }
        }
        None => Dashboard {
            header,
            kpis: None,
            active_hint: Message::ActiveHintNone.to_string(),
            active: Vec::new(),
            timeline: Vec::new(),
            errors,
        },
    }
}
