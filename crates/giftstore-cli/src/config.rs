//! Demo configuration.

use std::path::PathBuf;

use clap::Parser;
use giftstore_core::QuantityPolicy;

use crate::formatter::OutputFormat;

/// giftstore command line arguments.
#[derive(Debug, Parser)]
#[command(name = "giftstore")]
#[command(version, about = "Gift catalog demo")]
pub struct Args {
    /// Output format
    #[arg(long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// How quantity deltas below zero are handled (wrap, floor, reject)
    #[arg(long, default_value_t = QuantityPolicy::Wrap)]
    pub quantity_policy: QuantityPolicy,

    /// Run steps from a JSON file instead of the built-in script
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Start from an empty catalog instead of the sample gifts
    #[arg(long)]
    pub empty: bool,
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Quantity delta handling.
    pub policy: QuantityPolicy,
    /// Script file, if any.
    pub script: Option<PathBuf>,
    /// Whether to seed the catalog with the sample gifts.
    pub seed_sample: bool,
}

impl From<&Args> for DemoConfig {
    fn from(args: &Args) -> Self {
        Self {
            format: args.format,
            policy: args.quantity_policy,
            script: args.script.clone(),
            seed_sample: !args.empty,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            policy: QuantityPolicy::Wrap,
            script: None,
            seed_sample: true,
        }
    }
}
