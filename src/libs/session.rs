//! Snapshot session: the single owner of dashboard state.
//!
//! The session holds the last successfully ingested [`Snapshot`], the state
//! pill shown in the header and a bounded log of recent fetch errors. It is
//! created once per command, handed by reference to the render and trigger
//! handlers, and torn down when the command exits.
//!
//! ## Refresh Semantics
//!
//! - Every trigger calls [`SnapshotSession::begin_refresh`] and receives a
//!   sequence number; the state becomes `Loading` while the previous
//!   snapshot stays readable.
//! - Completions are applied in the order they finish. The last completed
//!   write wins, even when it answers an older request.
//! - A failed fetch never touches the held snapshot, so the dashboard keeps
//!   showing the last known data with its growing age.

use super::snapshot::{RawPayload, Snapshot};
use crate::libs::messages::Message;
use crate::msg_warning;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt::Display;
use tracing::{debug, info};

/// Maximum number of entries kept in the error log.
pub const ERROR_LOG_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

/// Rolling log of the most recent errors, newest first.
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    entries: VecDeque<ErrorEntry>,
}

impl ErrorLog {
    pub fn push(&mut self, at: DateTime<Utc>, message: impl Into<String>) {
        self.entries.push_front(ErrorEntry { at, message: message.into() });
        self.entries.truncate(ERROR_LOG_CAPACITY);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Header state pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing requested yet.
    Idle,
    Loading,
    /// Last completion was a response the worker served fresh.
    Refreshed,
    /// Last completion was a response served from the worker's cache.
    Cached,
    /// Last completion failed.
    Error,
}

impl SessionState {
    pub fn label(&self) -> Message {
        match self {
            SessionState::Idle => Message::StateIdle,
            SessionState::Loading => Message::StateLoading,
            SessionState::Refreshed => Message::StateRefreshed,
            SessionState::Cached => Message::StateCached,
            SessionState::Error => Message::StateError,
        }
    }
}

#[derive(Debug)]
pub struct SnapshotSession {
    current: Option<Snapshot>,
    state: SessionState,
    errors: ErrorLog,
    next_seq: u64,
    in_flight: usize,
    last_applied: Option<u64>,
}

impl Default for SnapshotSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSession {
    pub fn new() -> Self {
        Self {
            current: None,
            state: SessionState::Idle,
            errors: ErrorLog::default(),
            next_seq: 1,
            in_flight: 0,
            last_applied: None,
        }
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Sequence number of the completion that produced the current state.
    pub fn last_applied(&self) -> Option<u64> {
        self.last_applied
    }

    /// Marks a new fetch as outstanding and returns its sequence number.
    pub fn begin_refresh(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;
        self.state = SessionState::Loading;
        debug!(seq, in_flight = self.in_flight, "refresh started");
        seq
    }

    /// Applies the outcome of fetch `seq`.
    pub fn complete<E: Display>(&mut self, seq: u64, outcome: Result<RawPayload, E>, at: DateTime<Utc>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let Some(previous) = self.last_applied {
            if previous > seq {
                debug!(seq, previous, "older response completed last, applying anyway");
            }
        }
        self.last_applied = Some(seq);

        match outcome {
            Ok(raw) => {
                self.ingest(raw, at);
            }
            Err(error) => self.fail(error, at),
        }
    }

    /// Normalizes `raw` and replaces the held snapshot wholesale.
    pub fn ingest(&mut self, raw: RawPayload, received_at: DateTime<Utc>) -> &Snapshot {
        let snapshot = Snapshot::from_raw(raw, received_at);
        if snapshot.dropped > 0 {
            msg_warning!(Message::ItemsDropped(snapshot.dropped));
        }
        info!(
            items = snapshot.items.len(),
            dropped = snapshot.dropped,
            refreshed = snapshot.refreshed,
            day = %snapshot.day,
            "snapshot ingested"
        );

        self.state = if snapshot.refreshed {
            SessionState::Refreshed
        } else {
            SessionState::Cached
        };
        self.current.insert(snapshot)
    }

    /// Records a failed fetch, keeping the held snapshot.
    pub fn fail(&mut self, error: impl Display, at: DateTime<Utc>) {
        self.errors.push(at, error.to_string());
        self.state = SessionState::Error;
    }

    /// Records a fetch that ended without an outcome (its task aborted).
    pub fn abandon(&mut self, reason: impl Display, at: DateTime<Utc>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.fail(reason, at);
    }

    /// Drops the snapshot and the error log.
    pub fn teardown(&mut self) {
        self.current = None;
        self.errors.clear();
        self.state = SessionState::Idle;
        self.in_flight = 0;
        self.last_applied = None;
    }
}
