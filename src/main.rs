mod error;
mod logging;
mod server;

use crate::error::{ErrorKind, Result};
use crate::server::AppState;
use clap::{Parser, Subcommand};
use exn::ResultExt;
use refscan_config::{Config, RepositoryConfig};
use refscan_crawl::{Crawler, resolve_root};
use refscan_repository::{MemoryRepository, RepositoryHandle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Audit component usage and asset references in a content repository.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON); searched for when omitted.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the records of one subtree as newline-delimited JSON.
    Extract {
        /// Root of the subtree; defaults to the configured default path.
        #[arg(short, long)]
        path: Option<String>,
        /// Output file; defaults to stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Serve extraction over HTTP.
    Serve {
        /// Address to listen on, overriding the configuration.
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Print the effective configuration.
    Config,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let config = refscan_config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    match cli.command {
        Command::Extract { path, output } => extract(&config, path.as_deref(), output),
        Command::Serve { bind } => serve(config, bind),
        Command::Config => print_config(&config),
    }
}

fn open_repository(config: &RepositoryConfig) -> Result<RepositoryHandle> {
    let Some(source) = &config.source else {
        tracing::warn!("No repository source configured; serving an empty repository");
        return Ok(Arc::new(MemoryRepository::new()));
    };
    let repository = MemoryRepository::from_json_file(&config.mount, source).or_raise(|| ErrorKind::Repository)?;
    Ok(Arc::new(repository))
}

fn extract(config: &Config, path: Option<&str>, output: Option<PathBuf>) -> Result<()> {
    let repository = open_repository(&config.repository)?;
    let root = resolve_root(repository.as_ref(), path, &config.default_path).or_raise(|| ErrorKind::Crawl)?;
    let sink: Box<dyn Write> = match output {
        Some(output) => {
            let file = File::create(&output).or_raise(|| ErrorKind::Output(output.clone()))?;
            Box::new(BufWriter::new(file))
        },
        None => Box::new(io::stdout().lock()),
    };
    let stats = Crawler::new(repository.as_ref(), &config.extract, sink)
        .traverse(&root)
        .or_raise(|| ErrorKind::Crawl)?;
    tracing::info!(
        nodes = stats.nodes,
        assets = stats.assets,
        components = stats.components,
        "Extraction complete"
    );
    Ok(())
}

fn serve(mut config: Config, bind: Option<SocketAddr>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    let state = AppState {
        repository: open_repository(&config.repository)?,
        options: Arc::new(config.extract),
        default_path: Arc::from(config.default_path),
    };
    let app = server::router(state, &config.server.route);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .or_raise(|| ErrorKind::Server)?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(config.server.bind).await.or_raise(|| ErrorKind::Server)?;
        tracing::info!("Listening on http://{}{}", config.server.bind, config.server.route);
        axum::serve(listener, app).await.or_raise(|| ErrorKind::Server)
    })
}

fn print_config(config: &Config) -> Result<()> {
    let rendered = serde_json::to_string_pretty(config).or_raise(|| ErrorKind::Print)?;
    writeln!(io::stdout(), "{rendered}").or_raise(|| ErrorKind::Print)
}
