//! giftstore demo binary.

use clap::Parser;
use giftstore_cli::{run_demo, Args, DemoConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Logs go to stderr; stdout carries the demo output only
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("giftstore=info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let args = Args::parse();
    let config = DemoConfig::from(&args);

    if let Err(e) = run_demo(&config, std::io::stdout().lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
