use std::sync::Arc;

use clap::{Parser, Subcommand};
use sw_cache::MemoryCache;
use sw_core::{Config, Result};
use sw_extractors::{sites, HttpFetcher};
use sw_web::{create_app, AppState, ServiceMeta};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "sportswire", about = "Sports-news article extraction service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP extraction service
    Serve {
        /// Bind address (overrides HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Extract one article and print the result as JSON
    Extract {
        /// Site slug (see `list`)
        site: String,
        /// Article URL
        url: String,
    },
    /// List available site extractors
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let cli = Cli::parse();
    let mut config = Config::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await
        }
        Commands::Extract { site, url } => extract(config, &site, &url).await,
        Commands::List => {
            println!("Available sites:");
            for slug in sites::manager(
                Arc::new(HttpFetcher::from_config(&config)?),
                Arc::new(MemoryCache::new()),
                &config,
            )
            .slugs()
            {
                println!("  {}", slug);
            }
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    let fetcher = Arc::new(HttpFetcher::from_config(&config)?);
    let store = Arc::new(MemoryCache::new());
    let manager = sites::manager(fetcher, store, &config);

    let state = AppState {
        manager,
        meta: ServiceMeta::new(
            format!("{}@{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            env!("CARGO_PKG_DESCRIPTION"),
            config.environment.clone(),
        ),
        api_key: config.api_key.clone(),
    };

    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(
        "Server is running at http://{}:{} in {} mode",
        config.host, config.port, config.environment
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn extract(config: Config, site: &str, url: &str) -> Result<()> {
    let fetcher = Arc::new(HttpFetcher::from_config(&config)?);
    let store = Arc::new(MemoryCache::new());
    let manager = sites::manager(fetcher, store, &config);

    let Some(extractor) = manager.get(site) else {
        eprintln!("Unknown site \"{}\" (try `sportswire list`)", site);
        return Ok(());
    };

    let output = extractor.extract(url).await;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
