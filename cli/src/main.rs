//! site-manager - local nginx virtual hosts for the current project folder

use clap::Parser;
use tracing_subscriber::EnvFilter;

use site_manager::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Diagnostics go to stderr; user-facing output stays on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        println!("Error: {e:#}");
        std::process::exit(1);
    }
}
