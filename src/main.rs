mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use holonet::config::{self, Settings};
use holonet::error::ConfigError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = config::load_dotenv();
    let settings = Settings::from_env();

    // Logs go to stderr so answers on stdout stay clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| settings.log_filter()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No dotenv file loaded: {}", e),
    }

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Chat => commands::chat::run(&settings).await,
        cli::Commands::Ask { question } => commands::ask::run(&settings, &question).await,
        cli::Commands::Explain { question, json } => commands::explain::run(&question, json),
        cli::Commands::Demo => commands::demo::run(&settings).await,
        #[cfg(feature = "http")]
        cli::Commands::Serve { host, port } => commands::serve::run(&settings, &host, port).await,
        cli::Commands::Import {
            sqlite,
            keep_existing,
        } => commands::import::run(&settings, sqlite, keep_existing).await,
        cli::Commands::Inspect {
            sqlite,
            json,
            samples,
        } => commands::inspect::run(&settings, sqlite, json, samples),
    };

    if let Err(e) = &result {
        if e.downcast_ref::<ConfigError>().is_some() {
            eprintln!("Erro de configuração: {}", e);
            eprintln!("Verifique o arquivo .env ou as variáveis de ambiente.");
            std::process::exit(1);
        }
    }
    result
}
