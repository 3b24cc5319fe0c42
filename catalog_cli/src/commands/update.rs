use anyhow::{bail, Result};
use catalog_lib::render::build_product_rows;
use catalog_lib::types::ProductUpdate;
use catalog_lib::{Client, Config};
use clap::Args;

use crate::output::{print_json, print_products, OutputFormat};

#[derive(Args)]
pub struct UpdateArgs {
    /// ID of the product to change
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<f64>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the product to delete
    pub id: String,
}

pub async fn run(
    args: &UpdateArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let update = ProductUpdate {
        name: args.name.as_deref().map(str::trim).map(str::to_string),
        category: args.category.as_deref().map(str::trim).map(str::to_string),
        price: args.price,
    };
    if update.is_empty() {
        bail!("Nothing to update: pass --name, --category or --price");
    }

    let product = match client.update_product(args.id.trim(), &update).await {
        Ok(product) => product,
        Err(e) => bail!(e.message()),
    };
    match format {
        OutputFormat::Json => print_json(&product),
        _ => {
            let rows = build_product_rows(std::slice::from_ref(&product), &config.currency());
            print_products(&rows, &product, format)?;
        }
    }
    Ok(())
}

pub async fn run_delete(args: &DeleteArgs, client: &Client) -> Result<()> {
    if let Err(e) = client.delete_product(args.id.trim()).await {
        bail!(e.message());
    }
    eprintln!("Deleted product {}", args.id.trim());
    Ok(())
}
