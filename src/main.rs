use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod pager;
mod services;
mod utils;
mod views;

use api::bank::BankClient;
use commands::screen::Screen;
use commands::App;
use config::Config;
use models::AccountId;
use pager::{Notifier, PagingMode};
use utils::TerminalNotifier;

#[derive(Parser, Debug)]
#[command(name = "bankview")]
#[command(version)]
#[command(about = "Browse bank accounts and transactions, loading more as you scroll", long_about = None)]
struct Args {
    /// Backend origin; overrides BANK_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// `hardened` (default) or `compatible`; overrides BANK_PAGING_MODE
    #[arg(long)]
    mode: Option<PagingMode>,

    #[command(subcommand)]
    view: View,
}

#[derive(Subcommand, Debug)]
enum View {
    /// List your accounts
    Accounts,
    /// List the transactions of one account
    Transactions {
        /// Account whose history is shown
        #[arg(long)]
        account_id: AccountId,
    },
}

/// `RUST_LOG` wins when set and valid; otherwise the crate logs at info
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("bankview=info"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout belongs to the table
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(mode) = args.mode {
        config.policy = mode.policy();
    }

    let mut client = BankClient::new(&config.base_url, config.request_timeout)?;
    info!("Starting bankview against {} ({:?})", client.base_url(), config.policy);
    if let Some(session_id) = &config.session_id {
        client = client.with_session(session_id.clone());
    }
    let client = Arc::new(client);
    let (notifier, alerts) = TerminalNotifier::channel();
    let notifier: Arc<dyn Notifier> = Arc::new(notifier);

    let first = match args.view {
        View::Accounts => Screen::accounts(Arc::clone(&client), Arc::clone(&notifier), config.policy),
        View::Transactions { account_id } => Screen::transactions(
            Arc::clone(&client),
            account_id,
            account_id.to_string(),
            Arc::clone(&notifier),
            config.policy,
        ),
    };

    if let Err(e) = App::new(client, notifier, alerts, config).run(first).await {
        error!("Terminal error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_replaces_default_filter() {
        assert_eq!(log_filter(Some("bankview=debug")).to_string(), "bankview=debug");
        assert_eq!(log_filter(Some("warn")).to_string(), "warn");
    }

    #[test]
    fn test_default_filter_without_rust_log() {
        assert_eq!(log_filter(None).to_string(), "bankview=info");
    }
}
