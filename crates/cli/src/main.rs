use anyhow::Result;
use clap::{Parser, Subcommand};
use mfr_recon_core::DEFAULT_PORT;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mfr-recon")]
#[command(about = "Reconcile supplier manufacturer names against a canonical registry", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
        database_url: String,
        /// Create missing tables before serving
        #[arg(long)]
        migrate: bool,
    },
    /// Create the manufacturers and supplier_manufacturers tables if missing
    Migrate {
        #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, database_url, migrate } => {
            commands::serve::run(&database_url, &host, port, migrate).await
        },
        Commands::Migrate { database_url } => commands::migrate::run(&database_url).await,
    }
}
