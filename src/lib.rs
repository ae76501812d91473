//! # Schedboard - live schedule dashboard
//!
//! A command-line client that polls a schedule worker and shows, for the
//! current moment, what is in progress, when the next activity ends and
//! who is expected to arrive next.
//!
//! ## Features
//!
//! - **Classification**: every item is either occupancy or a reservation,
//!   decided once when a snapshot is ingested
//! - **Temporal Selection**: active set, earliest end and next visit,
//!   recomputed from `(snapshot, now)` on every tick
//! - **Time-of-Day Colors**: reservation rows colored from a 24-hour palette
//! - **Polling**: recurring refresh plus manual and forced refresh triggers
//! - **Stale but Present**: failed fetches keep the last snapshot on screen
//!
//! ## Usage
//!
//! ```rust,no_run
//! use schedboard::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
