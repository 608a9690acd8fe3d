//! Pantry API server entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pantry_api::api::AppState;
use pantry_api::config::{Config, LogFormat};
use pantry_api::metrics;
use pantry_api::server;
use pantry_api::utils::shutdown_signal;

/// In-memory shopping list and recipe API.
#[derive(Parser, Debug)]
#[command(name = "pantry-api")]
#[command(about = "In-memory REST backend for shopping lists and recipes")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port.
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind.
        #[arg(long)]
        host: Option<String>,

        /// Pre-populate the stores with demo records.
        #[arg(long)]
        seed: bool,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    if args.verbose {
        config.verbose = true;
    }

    // Initialize logging
    init_logging(&config);

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Run { port, host, seed }) => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.bind_host = host;
            }
            config.seed_demo_data |= seed;
            cmd_run(config).await
        }
        None => {
            if let Some(port) = args.port {
                config.port = port;
            }
            cmd_run(config).await
        }
    }
}

fn init_logging(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("pantry_api=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PANTRY API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.bind_host, config.port);
    println!("  Seed Demo Data: {}", config.seed_demo_data);
    println!("  Log Level: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until ctrl-c or SIGTERM.
async fn cmd_run(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("{}", e);
        return Err(e.into());
    }
    let addr = config.bind_addr()?;

    let mut app_state = if config.seed_demo_data {
        info!("Seeding stores with demo data");
        AppState::seeded()
    } else {
        AppState::new()
    };

    if config.metrics_enabled {
        match metrics::init_metrics() {
            Ok(handle) => app_state = app_state.with_metrics(handle),
            Err(e) => warn!("Metrics disabled, recorder install failed: {}", e),
        }
    }

    server::run(addr, app_state, shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}
