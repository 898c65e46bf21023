use std::io;
use std::time::Duration;

use clap::Parser;
use okta_client::{OktaClient, RequestContext};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::system::client_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = client_config(&cli)?;
    let http = reqwest::Client::builder()
        .user_agent(concat!("okta-cli/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let client = OktaClient::from_config(&config, Some(http));
    debug!(root_url = %client.root_url(), "okta client ready");

    let ctx = RequestContext::with_timeout(Duration::from_secs(cli.timeout));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    handle_command(cli.command, &client, &ctx, &mut out).await
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
