//! Convenient macros for dashboard messaging and logging.
//!
//! The macros route output according to debug mode: with debug mode on,
//! every message becomes a `tracing` event so it lands in the same stream
//! as the structured fetch and ingest logs; otherwise messages go straight
//! to stdout/stderr.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either environment variable is set:
//! - **`SCHEDBOARD_DEBUG`**: application-specific switch
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! The answer is cached for the lifetime of the process.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: plain message
//! - **`msg_info!`**: informational message with ℹ️ prefix
//! - **`msg_warning!`**: warning with ⚠️ prefix
//! - **`msg_error!`**: error with ❌ prefix, stderr in normal mode
//! - **`msg_debug!`**: only emitted in debug mode
//! - **`msg_error_anyhow!`**: builds an `anyhow::Error` from a message
//!
//! ## Usage Examples
//!
//! ```rust
//! use schedboard::{msg_info, msg_error};
//! use schedboard::libs::messages::Message;
//!
//! msg_info!(Message::WatchControls);
//! msg_error!(Message::FetchFailed("HTTP 502".to_string()));
//! ```

use std::sync::OnceLock;

/// Cached result of the debug mode check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `SCHEDBOARD_DEBUG` or `RUST_LOG` is set.
///
/// `main` uses the same check to decide whether to install the
/// `tracing-subscriber` formatter, so the two never disagree.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("SCHEDBOARD_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message with automatic debug mode routing.
///
/// ```rust
/// use schedboard::msg_print;
/// use schedboard::libs::messages::Message;
///
/// msg_print!(Message::WatchStopped);
/// msg_print!(Message::TimelineHeader, true);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// In normal mode the message goes to stderr so that piping the dashboard
/// output keeps errors separate.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix; silent in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// ```rust
/// use anyhow::Result;
/// use schedboard::{msg_error_anyhow, libs::messages::Message};
///
/// fn check(tz: &str) -> Result<()> {
///     Err(msg_error_anyhow!(Message::InvalidTimezone(tz.to_string())))
/// }
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
