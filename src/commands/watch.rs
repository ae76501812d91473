use crate::{
    api::worker::Worker,
    libs::{config::Config, poller::Poller},
};
use anyhow::Result;
use clap::Args;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct WatchArgs {
    #[arg(short, long, help = "Poll interval in milliseconds (overrides the config)")]
    interval: Option<u64>,
}

/// Runs the poll loop until the user quits.
pub async fn cmd(watch_args: WatchArgs) -> Result<()> {
    let config = Config::read()?;
    let tz = config.display.tz()?;
    let interval = watch_args
        .interval
        .map(|ms| Duration::from_millis(ms.max(1)))
        .unwrap_or_else(|| config.poll.interval());

    let mut poller = Poller::new(Worker::new(&config.source)?, tz);
    poller.run(interval).await
}
