mod domain;
mod clients;

mod app_system;
mod cli;
mod config;

mod actor_framework;
mod customers_view;
mod orders_view;
mod pages;
mod render;
mod view_model;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

use clap::Parser;
use tracing::info;

use crate::app_system::setup_tracing;
use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();
    info!(command = ?cli.command, "Starting order desk");

    cli::run(cli).await
}
