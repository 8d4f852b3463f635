//! `shebsh-monitor` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — load the view state and start the dashboard API.
//! - `refresh` — run one refresh cycle and print the persisted record.
//! - `history` — print every persisted record, oldest first.
//! - `extract` — run the text extractor over a saved bot response.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use monitor::WaterMonitor;
use provider::{ProTalkConfig, ProTalkProvider};
use store::SupabaseStore;

#[derive(Parser)]
#[command(
    name = "shebsh-monitor",
    about = "Shebsh river gauge monitor",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard view API.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Run one fetch → extract → persist cycle.
    Refresh,
    /// Print the persisted gauge history.
    History,
    /// Run the extractor over a text file (use to debug format drift).
    Extract {
        /// Path to a file holding a raw bot response.
        path: std::path::PathBuf,
    },
}

/// Wire the monitor from the environment: bot credentials are required,
/// store credentials are optional (reads degrade to empty).
fn build_monitor() -> Arc<WaterMonitor> {
    let config = ProTalkConfig::from_env()
        .unwrap_or_else(|e| panic!("text provider not configured: {e}"));
    let provider = Arc::new(ProTalkProvider::new(config));

    let store = SupabaseStore::from_env();
    if !store.is_configured() {
        warn!("store credentials missing — readings will not be persisted");
    }

    Arc::new(WaterMonitor::new(provider, store))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind } => {
            let monitor = build_monitor();
            if let Err(e) = monitor.load_initial().await {
                warn!("initial load failed, serving anyway: {e}");
            }
            api::serve(&bind, monitor).await.expect("server failed");
        }

        Command::Refresh => {
            let monitor = build_monitor();
            match monitor.refresh().await {
                Ok(monitor::RefreshOutcome::Completed(record)) => {
                    info!("refresh complete");
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&record).expect("record serializes")
                    );
                }
                Ok(monitor::RefreshOutcome::AlreadyRunning) => {
                    // Unreachable from a one-shot invocation.
                    println!("a refresh cycle is already in flight");
                }
                Err(e) => {
                    eprintln!("❌ Refresh failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Command::History => {
            let store = SupabaseStore::from_env();
            if !store.is_configured() {
                eprintln!("❌ Store not configured: set SUPABASE_URL and SUPABASE_KEY");
                std::process::exit(1);
            }
            let records = store.list_all().await.unwrap_or_else(|e| {
                panic!("cannot read history: {e}");
            });
            for record in &records {
                let when = record
                    .created_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{when}  level {:>8.2} cm  change {:>+7.2} cm  {}",
                    record.water_level, record.change_24h, record.trend
                );
            }
            println!("{} record(s)", records.len());
        }

        Command::Extract { path } => {
            let text = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read file {}: {e}", path.display()));

            match monitor::extract(&text) {
                Ok(reading) => {
                    println!(
                        "✅ water_level = {} cm, change_24h = {} cm",
                        reading.water_level, reading.change_24h
                    );
                }
                Err(e) => {
                    eprintln!("❌ Extraction failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
