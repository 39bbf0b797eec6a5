use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::app_system::Dashboard;
use crate::clients::GraphqlClient;
use crate::config::{load_settings, Settings};
use crate::domain::OrderStatus;
use crate::pages::RenderedPage;
use crate::render::render_page;
use crate::view_model::{customer_columns, order_columns, Column};

#[derive(Parser, Debug)]
#[command(name = "order_desk", about = "Customers and orders admin tables")]
pub struct Cli {
    /// Settings file. Defaults to ./order-desk.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    #[arg(long, global = true)]
    pub page_size: Option<usize>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Print the page rows as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one page of the customers table.
    Customers(ListArgs),
    /// Show one page of the orders table, newest first.
    Orders(ListArgs),
    /// Pick a new status for an order, then show its page.
    SetStatus {
        order_id: String,
        /// One of Processing, Shipped, Delivered.
        status: OrderStatus,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(endpoint) = &cli.endpoint {
        settings.endpoint = endpoint.clone();
    }
    if let Some(page_size) = cli.page_size {
        settings.page_size = page_size;
    }
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn print_page<R: Serialize>(title: &str, page: &RenderedPage<R>, columns: &[Column<R>], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page.rows())?);
    } else {
        print!("{}", render_page(title, page, columns));
    }
    Ok(())
}

pub async fn run(cli: Cli) -> Result<()> {
    let settings = resolve_settings(&cli)?;
    let client = Arc::new(GraphqlClient::new(&settings).context("failed to build GraphQL client")?);
    info!(endpoint = %client.endpoint(), "Connecting");
    let dashboard = Dashboard::new(&settings, client.clone(), client);

    let outcome = run_command(&dashboard, cli.command).await;
    dashboard.shutdown().await.map_err(anyhow::Error::msg)?;
    outcome
}

async fn run_command(dashboard: &Dashboard, command: Command) -> Result<()> {
    match command {
        Command::Customers(args) => {
            dashboard.customers.load().await?;
            dashboard.customers.set_page(args.page).await?;
            let page = dashboard.customers.render().await?;
            print_page("Customers", &page, &customer_columns(), args.json)
        }
        Command::Orders(args) => {
            dashboard.orders.load().await?;
            dashboard.orders.set_page(args.page).await?;
            let page = dashboard.orders.render().await?;
            print_page("Orders", &page, &order_columns(), args.json)
        }
        Command::SetStatus { order_id, status, page } => {
            dashboard.orders.load().await?;
            dashboard
                .orders
                .set_status(&order_id, status)
                .await
                .with_context(|| format!("cannot set status of order {order_id}"))?;
            let shown = dashboard.orders.displayed_status(&order_id).await?;
            info!(order_id = %order_id, %shown, "Status selected");
            dashboard.orders.set_page(page).await?;
            let rendered = dashboard.orders.render().await?;
            print_page("Orders", &rendered, &order_columns(), false)
        }
    }
}
