use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod adf;
mod api;
mod auth;
mod config;
mod errors;
mod models;
mod server;

use api::jira::JiraClient;
use config::settings::Settings;
use server::AppState;

#[derive(Parser)]
#[command(name = "jira-relay")]
#[command(version = "0.1.0")]
#[command(about = "Authenticated facade over the Jira issue API", long_about = None)]
struct Cli {
    /// Listen port; overrides the PORT environment variable
    #[arg(short, long)]
    port: Option<u16>,

    /// for debugging purposes
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::load().context("Incomplete configuration, refusing to start")?;

    let jira = JiraClient::new(
        settings.jira_base_url.clone(),
        settings.jira_email.clone(),
        settings.jira_api_token.clone(),
    )?;

    let state = Arc::new(AppState {
        jira,
        api_key: settings.chatgpt_api_key.clone(),
    });

    let port = cli.port.unwrap_or(settings.port);
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, "jira-relay listening");

    axum::serve(listener, server::router(state))
        .await
        .context("Server error")?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
