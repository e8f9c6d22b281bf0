//! # Jubilee CLI
//!
//! Once-a-year birthday notification dispatcher. A cron job (or a human)
//! invokes `jubilee run` once per day; the shared sentinel store keeps
//! overlapping or retried runs from ever sending twice.
//!
//! Usage:
//!   jubilee run                        # Dispatch today's batch
//!   jubilee run --today 2026-02-29     # Anchor the run at another date
//!   jubilee run --dry-run              # Match + peek, no claims, no sends
//!   jubilee sentinel check u-42        # Inspect a user's sent-marker
//!   jubilee config show                # Show configuration
//!   jubilee info                       # Show system info

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jubilee_core::JubileeConfig;
use jubilee_core::sentinel;
use jubilee_core::types::{BIRTHDATE_FORMAT, UserId};
use jubilee_dispatch::{DispatchOptions, Dispatcher};

#[derive(Parser)]
#[command(
    name = "jubilee",
    version,
    about = "🎂 Jubilee — once-a-year birthday notifications, exactly once",
    long_about = "Birthday notification dispatcher.\nClaims a per-user-per-year sentinel in a shared store before every send,\nso retried or overlapping runs never notify anyone twice."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch one batch of birthday notifications
    Run {
        /// Anchor date (YYYY-MM-DD); defaults to the local calendar date
        #[arg(long)]
        today: Option<String>,

        /// Evaluate matching and dedup without claiming or sending
        #[arg(long)]
        dry_run: bool,

        /// Override the roster file path
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Override the sentinel store path
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Inspect the sentinel ledger
    Sentinel {
        #[command(subcommand)]
        action: SentinelAction,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show system info
    Info,
}

#[derive(Subcommand)]
enum SentinelAction {
    /// Check whether a user's notification already went out this year
    Check {
        /// User id as it appears in the roster
        user_id: String,

        /// Eligibility window to check (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Reset to defaults
    Reset,
}

fn parse_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(s) => NaiveDate::parse_from_str(s, BIRTHDATE_FORMAT)
            .map_err(|e| anyhow::anyhow!("Invalid --today {s:?}: {e}")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "jubilee=debug,jubilee_core=debug,jubilee_dispatch=debug"
    } else {
        "jubilee=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    // Load config
    let mut config = if let Some(path) = &cli.config {
        JubileeConfig::load_from(std::path::Path::new(path))?
    } else {
        JubileeConfig::load()?
    };

    match cli.command {
        Commands::Run { today, dry_run, roster, store } => {
            // Apply overrides
            if let Some(path) = roster {
                config.roster.path = Some(path);
            }
            if let Some(path) = store {
                config.store.path = Some(path);
            }
            let today = parse_today(today.as_deref())?;

            let store: Arc<_> = Arc::from(jubilee_store::create_store(&config)?);
            let notifier: Arc<_> = Arc::from(jubilee_channels::create_notifier(&config)?);
            let roster = jubilee_roster::create_roster(&config)?;
            let dispatcher = Dispatcher::new(store, notifier, config.namespace.clone());

            let mut opts = DispatchOptions::new(today);
            opts.dry_run = dry_run;
            opts.concurrency = config.dispatch.concurrency;

            // Ctrl-C stops pulling new users; claims already made stay valid.
            let cancel = opts.cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
            });
            if let Some(secs) = config.dispatch.deadline_secs {
                let cancel = opts.cancel.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
                    cancel.cancel();
                });
            }

            if dry_run {
                println!("🎂 Jubilee dry run for {today}");
            } else {
                println!("🎂 Jubilee batch for {today}");
            }

            let summary = dispatcher.run(roster.as_ref(), &opts).await?;
            println!("   {summary}");

            if summary.is_fatal() {
                anyhow::bail!("Sentinel store unreachable for every due user; retry once it is back");
            }
        }

        Commands::Sentinel { action } => match action {
            SentinelAction::Check { user_id, today } => {
                let today = parse_today(today.as_deref())?;
                let store = jubilee_store::create_store(&config)?;
                let key = sentinel::key_for(&config.namespace, &UserId::new(&user_id), today);

                if store.exists(&key).await? {
                    println!("✅ {user_id}: already notified in the window containing {today}");
                } else {
                    println!("⬜ {user_id}: no live sentinel for the window containing {today}");
                }
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)?;
                println!("{content}");
            }
            ConfigAction::Reset => {
                let config = JubileeConfig::default();
                config.save()?;
                println!("✅ Configuration reset to defaults.");
            }
        },

        Commands::Info => {
            println!("🎂 Jubilee v{}", env!("CARGO_PKG_VERSION"));
            println!("   Platform: {} / {}", std::env::consts::OS, std::env::consts::ARCH);
            println!("   Config: {}", JubileeConfig::default_path().display());
            println!("   Namespace: {}", config.namespace);
            println!("   Store: {} ({})", config.store.backend, config.store_path().display());
            println!("   Roster: {} ({})", config.roster.backend, config.roster_path().display());
            println!("   Channel: {}", config.channel.backend);
        }
    }

    Ok(())
}
