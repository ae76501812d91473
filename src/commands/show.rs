use crate::{
    api::worker::Worker,
    libs::{config::Config, formatter::dashboard, poller::Poller, session::SessionState, view::View},
};
use anyhow::{bail, Result};
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(short, long, help = "Bypass the worker cache")]
    force: bool,
    #[arg(long, help = "Print the dashboard as JSON")]
    json: bool,
}

pub async fn cmd(show_args: ShowArgs) -> Result<()> {
    let config = Config::read()?;
    let tz = config.display.tz()?;
    let mut poller = Poller::new(Worker::new(&config.source)?, tz);

    poller.trigger(show_args.force);
    poller.settle_next().await;

    let session = poller.session();
    if show_args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard(session, Utc::now(), tz))?);
    } else {
        View::dashboard(&dashboard(session, Utc::now(), tz))?;
    }

    if session.state() == SessionState::Error {
        bail!("no snapshot received from {}", config.source.url);
    }
    Ok(())
}
