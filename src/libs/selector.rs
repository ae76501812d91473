//! Temporal selection over a snapshot.
//!
//! Every function here is a pure function of its inputs and a reference
//! instant `now`. Item windows are half-open: an item is in progress when
//! `start <= now < end`, so it is already active at its start instant and
//! no longer active at its end instant.

use super::item::ScheduleItem;
use super::messages::Message;
use super::snapshot::Snapshot;
use chrono::{DateTime, Utc};

const MINUTE_MS: i64 = 60_000;

/// Occupancy items in progress at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSet<'a> {
    /// Sorted by end instant, earliest first.
    pub items: Vec<&'a ScheduleItem>,
    pub earliest_end: Option<DateTime<Utc>>,
}

/// Everything the dashboard shows, derived from `(snapshot, now)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    pub now: DateTime<Utc>,
    pub active: ActiveSet<'a>,
    pub next_visit: Option<&'a ScheduleItem>,
    /// Reservations that have not ended yet, by start instant.
    pub timeline: Vec<&'a ScheduleItem>,
}

pub fn active_occupancy(items: &[ScheduleItem], now: DateTime<Utc>) -> ActiveSet<'_> {
    let mut active: Vec<&ScheduleItem> = items
        .iter()
        .filter(|item| !item.is_reservation())
        .filter(|item| item.start <= now && now < item.end)
        .collect();
    active.sort_by_key(|item| item.end);

    let earliest_end = active.first().map(|item| item.end);
    ActiveSet { items: active, earliest_end }
}

pub fn reservations(items: &[ScheduleItem]) -> Vec<&ScheduleItem> {
    items.iter().filter(|item| item.is_reservation()).collect()
}

/// Picks the reservation to announce as the next visit.
///
/// Prefers the earliest one that has not started yet and falls back to the
/// earliest one still running.
pub fn next_visit<'a>(reservations: &[&'a ScheduleItem], now: DateTime<Utc>) -> Option<&'a ScheduleItem> {
    let mut sorted = reservations.to_vec();
    sorted.sort_by_key(|item| item.start);

    sorted
        .iter()
        .find(|item| item.start > now)
        .or_else(|| sorted.iter().find(|item| item.end > now))
        .copied()
}

/// Reservations to list in the timeline: sorted by start, past ones hidden.
pub fn timeline<'a>(reservations: &[&'a ScheduleItem], now: DateTime<Utc>) -> Vec<&'a ScheduleItem> {
    let mut rows: Vec<&ScheduleItem> = reservations.iter().copied().filter(|item| item.end > now).collect();
    rows.sort_by_key(|item| item.start);
    rows
}

/// Whole minutes until `end`, rounded up. Zero or negative once `end` has passed.
pub fn minutes_left(end: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (end - now).num_milliseconds();
    -(-ms).div_euclid(MINUTE_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    Ended,
    Upcoming,
    InProgress { minutes_left: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    None,
    Warn,
    Good,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub state: BadgeState,
}

impl Badge {
    pub fn label(&self) -> Message {
        match self.state {
            BadgeState::Ended => Message::BadgeEnded,
            BadgeState::Upcoming => Message::BadgeUpcoming,
            BadgeState::InProgress { minutes_left } => Message::BadgeMinutesLeft(minutes_left),
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self.state {
            BadgeState::Ended => Urgency::None,
            BadgeState::Upcoming => Urgency::Warn,
            BadgeState::InProgress { .. } => Urgency::Good,
        }
    }
}

pub fn badge(item: &ScheduleItem, now: DateTime<Utc>) -> Badge {
    let state = if item.end <= now {
        BadgeState::Ended
    } else if item.start > now {
        BadgeState::Upcoming
    } else {
        BadgeState::InProgress {
            minutes_left: minutes_left(item.end, now),
        }
    };
    Badge { state }
}

pub fn derive_view(snapshot: &Snapshot, now: DateTime<Utc>) -> DerivedView<'_> {
    let reservations = reservations(&snapshot.items);
    DerivedView {
        now,
        active: active_occupancy(&snapshot.items, now),
        next_visit: next_visit(&reservations, now),
        timeline: timeline(&reservations, now),
    }
}
