pub mod init;
pub mod show;
pub mod watch;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the worker URL, polling and time zone")]
    Init(init::InitArgs),
    #[command(about = "Fetch once and print the dashboard")]
    Show(show::ShowArgs),
    #[command(about = "Poll the worker and keep the dashboard up to date")]
    Watch(watch::WatchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Show(args) => show::cmd(args).await,
            Commands::Watch(args) => watch::cmd(args).await,
        }
    }
}
