use super::formatter::dashboard;
use super::messages::Message;
use super::session::SnapshotSession;
use super::snapshot::RawPayload;
use super::view::View;
use crate::api::worker::{SourceError, Worker};
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use std::io::BufRead;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::{self, Duration, MissedTickBehavior};

/// A user command typed into the running `watch` loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Refresh,
    ForceRefresh,
    Quit,
}

impl Trigger {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "r" | "refresh" => Some(Trigger::Refresh),
            "f" | "force" => Some(Trigger::ForceRefresh),
            "q" | "quit" | "exit" => Some(Trigger::Quit),
            _ => None,
        }
    }
}

type FetchOutcome = (u64, Result<RawPayload, SourceError>);

/// Drives the dashboard: a recurring timer, stdin triggers and fetch completions.
///
/// Every trigger spawns its own fetch. Nothing is coalesced or cancelled and
/// completions are applied in the order they finish.
pub struct Poller {
    worker: Worker,
    tz: Tz,
    session: SnapshotSession,
    fetches: JoinSet<FetchOutcome>,
}

impl Poller {
    pub fn new(worker: Worker, tz: Tz) -> Self {
        Self {
            worker,
            tz,
            session: SnapshotSession::new(),
            fetches: JoinSet::new(),
        }
    }

    pub fn session(&self) -> &SnapshotSession {
        &self.session
    }

    /// Starts a fetch in the background.
    pub fn trigger(&mut self, force: bool) -> u64 {
        let seq = self.session.begin_refresh();
        let worker = self.worker.clone();
        msg_debug!(format!("fetch #{} started (force: {})", seq, force));
        self.fetches.spawn(async move { (seq, worker.fetch(force).await) });
        seq
    }

    /// Waits for the next outstanding fetch and applies it. Returns `false`
    /// when nothing was outstanding.
    pub async fn settle_next(&mut self) -> bool {
        match self.fetches.join_next().await {
            Some(joined) => {
                self.apply(joined);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, joined: Result<FetchOutcome, tokio::task::JoinError>) {
        let now = Utc::now();
        match joined {
            Ok((seq, outcome)) => {
                if let Err(error) = &outcome {
                    msg_error!(Message::FetchFailed(error.to_string()));
                }
                msg_debug!(format!("fetch #{} finished", seq));
                self.session.complete(seq, outcome, now);
            }
            Err(error) => {
                msg_error!(Message::FetchAborted(error.to_string()));
                self.session.abandon(error, now);
            }
        }
    }

    pub fn render(&self) -> Result<()> {
        View::dashboard(&dashboard(&self.session, Utc::now(), self.tz))
    }

    /// Acts on one line typed by the user. Manual refreshes render right
    /// away so the loading state shows before the fetch completes. Returns
    /// `false` when the user asked to quit.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        match Trigger::parse(line) {
            Some(Trigger::Refresh) => {
                self.trigger(false);
                self.render()?;
            }
            Some(Trigger::ForceRefresh) => {
                self.trigger(true);
                self.render()?;
            }
            Some(Trigger::Quit) => return Ok(false),
            None => msg_warning!(Message::WatchUnknownCommand(line.trim().to_string())),
        }
        Ok(true)
    }

    /// Runs until `q` is entered or Ctrl-C is pressed.
    pub async fn run(&mut self, interval: Duration) -> Result<()> {
        msg_print!(Message::WatchStarted(self.worker.url().to_string(), interval.as_secs()));
        msg_info!(Message::WatchControls);

        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut lines = spawn_stdin_reader();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.trigger(false);
                    self.render()?;
                }
                Some(line) = lines.recv() => {
                    if !self.handle_line(&line)? {
                        break;
                    }
                }
                Some(joined) = self.fetches.join_next() => {
                    self.apply(joined);
                    self.render()?;
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        self.teardown();
        msg_print!(Message::WatchStopped);
        Ok(())
    }

    pub fn teardown(&mut self) {
        self.fetches.abort_all();
        self.session.teardown();
    }
}

// Reads stdin on a plain thread so a pending read never holds up shutdown.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
