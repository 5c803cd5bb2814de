//! CVT CLI - Command line tool for COVID-19 statistics.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cvt-cli",
    version,
    about = "COVID-19 tracker: worldwide and per-country statistics"
)]
struct Cli {
    #[command(flatten)]
    api: cvt_cmd::ApiArgs,

    #[command(subcommand)]
    command: cvt_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using {} with a {}-day history window", cli.api.base_url, cli.api.history_days);
    cvt_cmd::run(cli.command, &cli.api).await
}
