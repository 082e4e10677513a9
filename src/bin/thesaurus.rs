//! Thesaurus server binary.

use std::process;

use clap::Parser;

use thesaurus::config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use thesaurus::server;
use thesaurus::service::SynonymService;

/// Serve the in-memory synonym store over HTTP.
#[derive(Debug, Parser)]
#[command(name = "thesaurus", version, about)]
struct ThesaurusArgs {
    /// Hostname or address to bind
    #[arg(long, env = "THESAURUS_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// TCP port to bind
    #[arg(long, env = "THESAURUS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    // Parse command line arguments using clap
    let args = ThesaurusArgs::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    let config = ServerConfig::new(args.host, args.port);
    let service = SynonymService::new();

    if let Err(e) = server::serve(service, &config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
