use anyhow::{bail, Result};
use catalog_lib::creation::create_product;
use catalog_lib::{Client, CollectionView, Config, CreateOutcome, FilterCriteria, ProductForm};
use clap::Args;

use crate::output::{print_json, print_products, OutputFormat};

#[derive(Args)]
pub struct CreateArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Product category
    #[arg(long, default_value = "")]
    pub category: String,

    /// Price; anything that is not a number is sent as null
    #[arg(long, default_value = "")]
    pub price: String,
}

/// Creates the product, then shows the refreshed first page of products.
pub async fn run(
    args: &CreateArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let mut form = ProductForm {
        name: args.name.clone(),
        category: args.category.clone(),
        price: args.price.clone(),
    };
    let mut view = CollectionView::new(config.currency());

    let outcome = create_product(client, &mut form, &mut view, &FilterCriteria::default()).await;
    let product = match outcome {
        CreateOutcome::Created(ref product) => product,
        CreateOutcome::Failed(ref message) => bail!(message.clone()),
    };

    if *format == OutputFormat::Json {
        print_json(product);
        return Ok(());
    }

    eprintln!("{}", outcome.message());
    match view.error() {
        Some(message) => eprintln!("{}", message),
        None => print_products(view.rows(), &view.products(), format)?,
    }
    Ok(())
}
