//! CLI definitions for `pantry-lookup`.

use clap::{Parser, ValueEnum};

use crate::client::DEFAULT_BASE_URL;

/// Look up a product name by barcode.
#[derive(Debug, Parser)]
#[command(name = "pantry-lookup")]
#[command(version, about = "Look up a product name by barcode", long_about = None)]
pub struct Cli {
    /// Barcode database base URL.
    #[arg(long, env = "PANTRY_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Barcode to look up (EAN-13, UPC-A, ...).
    pub barcode: String,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}
