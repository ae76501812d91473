//! Configuration management for schedboard.
//!
//! Settings live in a JSON file in the platform data directory and are
//! grouped by concern:
//!
//! - **Source**: worker URL and request timeout
//! - **Poll**: interval of the recurring refresh in `watch`
//! - **Display**: civil time zone used for clock strings and row colors
//!
//! A missing file is not an error: every section has defaults. The worker
//! URL can also be supplied through `SCHEDBOARD_URL` (a `.env` file in the
//! working directory is honored), which takes precedence over the file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use schedboard::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("polling {} every {}ms", config.source.url, config.poll.interval_ms);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono_tz::Tz;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::time::Duration;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding [`SourceConfig::url`].
pub const URL_ENV_VAR: &str = "SCHEDBOARD_URL";

/// Worker connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// Endpoint answering GET with the schedule JSON body.
    pub url: String,
    /// Whole-request timeout in seconds.
    ///
    /// This is the only timeout in the fetch path; the refresh cycle itself
    /// imposes none.
    pub timeout_secs: u64,
}

/// Recurring refresh settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PollConfig {
    /// Period of the `watch` timer in milliseconds.
    pub interval_ms: u64,
}

/// Presentation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// IANA zone name, e.g. `Asia/Seoul`.
    pub timezone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub poll: PollConfig,
    pub display: DisplayConfig,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            url: "http://127.0.0.1:8787".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig { interval_ms: 15_000 }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            timezone: "Asia/Seoul".to_string(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl DisplayConfig {
    /// Resolves the configured zone name.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| msg_error_anyhow!(Message::InvalidTimezone(self.timezone.clone())))
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when absent,
    /// then applies environment overrides.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let mut config = if config_file_path.exists() {
            let config_str = fs::read_to_string(config_file_path)?;
            serde_json::from_str(&config_str)?
        } else {
            Config::default()
        };

        config.apply_env();
        Ok(config)
    }

    /// Applies `SCHEDBOARD_URL`, loading `.env` first if present.
    pub fn apply_env(&mut self) {
        let _ = dotenv::dotenv();
        if let Ok(url) = env::var(URL_ENV_VAR) {
            if !url.trim().is_empty() {
                msg_debug!(Message::ConfigEnvOverride(url.clone()));
                self.source.url = url;
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleSource, Message::ConfigModulePoll, Message::ConfigModuleDisplay];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| module.to_string()).collect::<Vec<_>>())
            .interact()?;

        for index in selected {
            match index {
                0 => {
                    msg_print!(Message::ConfigModuleSource);
                    config.source = SourceConfig {
                        url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSourceUrl.to_string())
                            .default(config.source.url.clone())
                            .interact_text()?,
                        timeout_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTimeoutSecs.to_string())
                            .default(config.source.timeout_secs)
                            .interact_text()?,
                    };
                }
                1 => {
                    msg_print!(Message::ConfigModulePoll);
                    config.poll = PollConfig {
                        interval_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(config.poll.interval_ms)
                            .interact_text()?,
                    };
                }
                2 => {
                    msg_print!(Message::ConfigModuleDisplay);
                    let display = DisplayConfig {
                        timezone: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTimezone.to_string())
                            .default(config.display.timezone.clone())
                            .interact_text()?,
                    };
                    display.tz()?;
                    config.display = display;
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
