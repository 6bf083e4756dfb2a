// ABOUTME: Entry point for the dockip CLI application.
// ABOUTME: Parses arguments, reads settings, sets up tracing and dispatches.

mod cli;
mod commands;

use cli::Cli;
use dockip::config::{LogConfig, Settings};
use dockip::error::Result;
use dockip::{output, version};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::from_env_args();

    if cli.version {
        println!("{}", version::version_line());
        return;
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    };

    init_tracing(settings.log);

    if let Err(e) = run(cli, &settings).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing(log: LogConfig) {
    // Tables go to stdout; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log.filter_directive()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, settings: &Settings) -> Result<()> {
    if cli.ports {
        tracing::debug!("running in ports mode");
        commands::ports(settings).await
    } else {
        tracing::debug!("running in status mode");
        commands::status(settings).await
    }
}
