//! Berrima CLI - browse the catalog and drive the admin dashboard.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally filtered
//! berrima catalog --category Spices --search saffron
//!
//! # Generate a product description
//! berrima describe 1
//!
//! # Dashboard stats and marketing insight
//! berrima insight
//!
//! # Scripted shopping and admin session
//! berrima demo
//! ```
//!
//! AI copy needs `CLAUDE_API_KEY`; without it the fallback text is shown.
//! Set `RUST_LOG` to adjust logging (default `berrima=info`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use berrima_admin::AdminConfig;
use berrima_core::CATEGORY_ALL;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "berrima")]
#[command(author, version, about = "Berrima Store demo storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Only show this category (`All` for every category)
        #[arg(short, long, default_value = CATEGORY_ALL)]
        category: String,

        /// Case-insensitive product name search
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Generate an AI description for a product
    Describe {
        /// Product ID
        id: String,
    },
    /// Show dashboard stats and an AI marketing insight
    Insight,
    /// Run a scripted shopping and admin session
    Demo,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &AdminConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "berrima=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Config first so Sentry is live before the subscriber starts
    let config = AdminConfig::from_env();
    let _sentry_guard = config.as_ref().ok().and_then(init_sentry);
    init_tracing();

    let result = match config {
        Ok(config) => run(cli, &config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &AdminConfig) -> Result<(), CommandError> {
    match cli.command {
        Commands::Catalog { category, search } => commands::catalog::list(&category, &search),
        Commands::Describe { id } => commands::copy::describe(config, &id).await?,
        Commands::Insight => commands::copy::insight(config).await?,
        Commands::Demo => commands::demo::run(config).await?,
    }
    Ok(())
}
