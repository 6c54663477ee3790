//! giftstore console demo.
//!
//! Builds the sample gift catalog, runs a script of catalog operations
//! against it and prints the catalog state in the configured format.

pub mod config;
pub mod executor;
pub mod formatter;
pub mod script;

pub use config::{Args, DemoConfig};
pub use executor::{Executor, RunSummary};
pub use formatter::{create_formatter, Formatter, OutputFormat};
pub use script::{ScriptError, Step};

use std::io::Write;

use giftstore_core::Catalog;
use tracing::info;

/// Build the starting catalog for a configuration.
pub fn build_catalog(config: &DemoConfig) -> Catalog {
    let mut catalog = Catalog::with_policy(config.policy);
    if config.seed_sample {
        catalog.extend(script::sample_gifts());
    }
    catalog
}

/// Run the configured demo, writing output to `out`.
pub fn run_demo<W: Write>(config: &DemoConfig, out: W) -> anyhow::Result<RunSummary> {
    let steps = match &config.script {
        Some(path) => script::load(path)?,
        None => script::builtin(),
    };

    let mut catalog = build_catalog(config);
    info!(
        gifts = catalog.len(),
        steps = steps.len(),
        policy = %config.policy,
        format = %config.format,
        "running demo"
    );

    let formatter = create_formatter(config.format);
    let summary = executor::run(&mut catalog, &steps, &*formatter, out)?;

    info!(
        steps = summary.steps,
        rejected = summary.rejected,
        total = catalog.total_units(),
        "demo finished"
    );
    Ok(summary)
}
