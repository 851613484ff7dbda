//! mirror-registry - install a Quay mirror registry with a bundled Ansible
//! execution environment

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mirror_registry::app::default_log_filter;
use mirror_registry::cli::{Cli, error_code};
use mirror_registry::output::json::format_error;

/// Diagnostics go to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    if let Err(e) = cli.run().await {
        let message = format!("{e:#}");
        match json.then(|| format_error(&message, error_code(&e))) {
            Some(Ok(obj)) => println!("{obj}"),
            _ => eprintln!("Error: {message}"),
        }
        std::process::exit(1);
    }
}
