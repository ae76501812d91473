//! Clients for the services schedboard talks to.
//!
//! There is a single upstream: the schedule worker, which serves the day's
//! items as one JSON snapshot.

pub mod worker;

pub use worker::{SourceError, Worker};
