//! pantry-lookup CLI entry point.

use clap::Parser;
use pantry_lookup::cli::Cli;
use pantry_lookup::output::format_product;
use pantry_lookup::{BarcodeClient, ProductLookup};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = BarcodeClient::new(&cli.base_url);

    let product = client.lookup(&cli.barcode).await?;
    println!("{}", format_product(&product, cli.format));

    Ok(())
}
