//! sagectl - command-line adapters for the Amazon SageMaker control plane
//!
//! This is the main entry point for the sagectl CLI.

mod cli;

use anyhow::Result;
use cli::commands::{self, CommandContext};
use cli::Cli;
use sagectl::config::{Config, LoggingConfig};
use sagectl::error::Error;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application version information
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config = match Config::load(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    // Initialize logging based on verbosity and config
    init_logging(cli.verbosity(), &config.logging);

    // Create command context
    let ctx = CommandContext::new(&cli, config);

    if ctx.verbosity >= 2 {
        eprintln!("sagectl v{}", VERSION);
    }

    // Ctrl-C cancels the in-flight call
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    let exit_code = match commands::execute(&cli, &ctx, &cancel).await {
        Ok(code) => code,
        Err(err) => {
            ctx.output.error(&format!("{:#}", err));
            err.downcast_ref::<Error>().map(Error::exit_code).unwrap_or(1)
        }
    };

    std::process::exit(exit_code);
}

/// Initialize logging based on verbosity level
fn init_logging(verbosity: u8, logging: &LoggingConfig) {
    let filter = match verbosity {
        0 => logging.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    if logging.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(verbosity >= 3)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
