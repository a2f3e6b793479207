//! Centum CLI
//!
//! Exact money arithmetic from the shell. Money operands use the compact
//! form, e.g. `centum add "10.00 USD" "5.25 USD"`.

mod commands;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use centum_core::MoneyContext;
use centum_shared::CentumConfig;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so results on stdout stay pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "centum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CentumConfig::load().context("Failed to load configuration")?;
    let context = MoneyContext::from_config(&config);
    debug!(command = ?cli.command, "Running command");

    let output = commands::run(&cli.command, &context)?;
    println!("{}", output.render(cli.json)?);

    Ok(())
}
