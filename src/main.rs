//! container-logger
//!
//! Appends severity-tagged lines to `./log/<CONTAINER_NAME>.log`.
//!
//! ```text
//! container-logger error "payment declined"     # one line, then exit
//! tail -F app.out | container-logger            # pipe mode: "<level> <message>" per line
//! ```
//!
//! Panic and fatal lines exit with status 1 after being written.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;

use container_logger::config::{load_config, FileConfig};
use container_logger::lifecycle::shutdown_signal;
use container_logger::observability::{logging, metrics};
use container_logger::{pipe, LevelGatedFileLogger, Severity};

#[derive(Parser)]
#[command(name = "container-logger")]
#[command(about = "Leveled per-container file logger", long_about = None)]
struct Cli {
    /// TOML config file; LOG_LEVEL and CONTAINER_NAME override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Serve Prometheus counters on this address.
    #[arg(short, long)]
    metrics_address: Option<SocketAddr>,

    /// Severity of the message (panic, fatal, error, warning, info, debug, trace).
    level: Option<Severity>,

    /// Message to log. Without LEVEL, lines are read from stdin.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    message: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };

    logging::init_logging(&file_config.observability.diagnostic_filter);

    let metrics_address = match cli.metrics_address {
        Some(addr) => Some(addr),
        None if file_config.observability.metrics_enabled => {
            Some(file_config.observability.metrics_address.parse()?)
        }
        None => None,
    };
    if let Some(addr) = metrics_address {
        metrics::init_metrics(addr);
    }

    let config = file_config.resolve_env();
    tracing::debug!(
        container = %config.container_name,
        threshold = ?config.threshold,
        path = %config.log_file_path().display(),
        "Configuration loaded"
    );

    let logger = LevelGatedFileLogger::new(config, metrics::LevelCounters::register());

    match cli.level {
        Some(severity) => logger.log(severity, &cli.message.join(" ")),
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            pipe::run(stdin, logger, shutdown_signal()).await?;
        }
    }

    Ok(())
}
