//! Core library modules for schedboard.
//!
//! ## Layout
//!
//! - **Core**: `item` (classification), `snapshot` (normalization),
//!   `selector` (temporal selection), `color` (time-of-day palette)
//! - **State**: `session` (current snapshot, state pill, error log)
//! - **Presentation**: `formatter`, `messages`, `view`
//! - **Infrastructure**: `config`, `data_storage`, `poller`
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use schedboard::libs::selector::derive_view;
//! use schedboard::libs::session::SnapshotSession;
//! use schedboard::libs::snapshot::RawPayload;
//!
//! let mut session = SnapshotSession::new();
//! let snapshot = session.ingest(RawPayload::default(), Utc::now());
//! let view = derive_view(snapshot, Utc::now());
//! assert!(view.active.items.is_empty());
//! ```

pub mod color;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod item;
pub mod messages;
pub mod poller;
pub mod selector;
pub mod session;
pub mod snapshot;
pub mod view;
