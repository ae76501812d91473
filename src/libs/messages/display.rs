//! Display implementation for schedboard messages.
//!
//! Every user-facing string of the dashboard is produced here, so that
//! changing wording or language never touches the selection logic.
//!
//! ## Message Categories
//!
//! - **Configuration**: wizard prompts and save confirmations
//! - **Watch**: poll loop lifecycle and manual trigger help
//! - **Dashboard**: subtitle, state pill, meta line and KPI labels
//! - **Lists**: active list, reservation timeline and badges
//!
//! ## Usage Integration
//!
//! ```rust
//! use schedboard::libs::messages::Message;
//!
//! assert_eq!(Message::BadgeMinutesLeft(3).to_string(), "3 min left");
//! assert_eq!(Message::PeopleCount(2).to_string(), "2 people");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into its terminal text.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleSource => "Source settings".to_string(),
            Message::ConfigModulePoll => "Polling settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::ConfigEnvOverride(url) => format!("Using source URL from SCHEDBOARD_URL: {}", url),
            Message::InvalidTimezone(tz) => format!("Unknown time zone '{}', expected an IANA name like Asia/Seoul", tz),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptSourceUrl => "Worker URL".to_string(),
            Message::PromptTimeoutSecs => "Request timeout (seconds)".to_string(),
            Message::PromptPollInterval => "Poll interval (milliseconds)".to_string(),
            Message::PromptTimezone => "Time zone for clock strings and colors".to_string(),

            // === WATCH MESSAGES ===
            Message::WatchStarted(url, secs) => format!("Watching {} every {}s", url, secs),
            Message::WatchControls => "Commands: [r] refresh, [f] force refresh, [q] quit".to_string(),
            Message::WatchStopped => "Watch stopped".to_string(),
            Message::WatchUnknownCommand(cmd) => format!("Unknown command '{}'", cmd),

            // === FETCH MESSAGES ===
            Message::FetchFailed(error) => format!("Fetch failed: {}", error),
            Message::FetchAborted(error) => format!("Fetch did not finish: {}", error),
            Message::ItemsDropped(count) => format!("Dropped {} item(s) whose start is not before their end", count),

            // === DASHBOARD HEADER ===
            Message::Subtitle(day, tz) => format!("Today {} · {}", day, tz),
            Message::StateIdle => "idle".to_string(),
            Message::StateLoading => "loading".to_string(),
            Message::StateRefreshed => "refreshed".to_string(),
            Message::StateCached => "cached".to_string(),
            Message::StateError => "error".to_string(),
            Message::MetaLine(age, ttl) => format!("Data: updated {}s ago · TTL {}s", age, ttl),
            Message::Placeholder => "-".to_string(),

            // === KPI LABELS ===
            Message::KpiActive => "In progress".to_string(),
            Message::KpiNextVisit => "Next visit".to_string(),
            Message::KpiNextVisitTime => "Arrives at".to_string(),
            Message::KpiNextEnd => "Next end".to_string(),
            Message::PeopleCount(count) => format!("{} people", count),
            Message::ActiveCount(count) => format!("{} people", count),

            // === ACTIVE LIST ===
            Message::ActiveHeader => "In progress".to_string(),
            Message::ActiveHint(clock) => format!("Earliest end: {}", clock),
            Message::ActiveHintNone => "Nothing in progress".to_string(),
            Message::ActiveEmpty => "No events in progress.".to_string(),

            // === RESERVATION TIMELINE ===
            Message::TimelineHeader => "Today's reservations".to_string(),
            Message::TimelineEmpty => "No reservations to show.".to_string(),
            Message::ReservationTitle(people) => format!("{} visitors expected", people),
            Message::ReservationChannel(channel) => format!("via {}", channel),
            Message::GamesCount(games) => format!("{} games", games),
            Message::NoTitle => "(no title)".to_string(),

            // === BADGES ===
            Message::BadgeEnded => "ended".to_string(),
            Message::BadgeUpcoming => "upcoming".to_string(),
            Message::BadgeMinutesLeft(minutes) => format!("{} min left", minutes),

            // === ERROR LOG ===
            Message::ErrorLogHeader => "Recent errors".to_string(),
        };

        write!(f, "{}", text)
    }
}
