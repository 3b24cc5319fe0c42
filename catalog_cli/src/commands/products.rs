use anyhow::{bail, Context, Result};
use catalog_lib::detail::{search_by_id, DetailOutcome};
use catalog_lib::render::build_product_rows;
use catalog_lib::types::Product;
use catalog_lib::{Client, CollectionView, Config, FilterCriteria};
use clap::Args;

use crate::output::{print_json, print_products, OutputFormat};

#[derive(Args)]
pub struct ProductsArgs {
    /// Get a single product by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Search by name
    #[arg(long, short = 'q', visible_alias = "search")]
    pub query: Option<String>,

    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<String>,

    /// Sort by price, cheapest first
    #[arg(long)]
    pub order_by_price: bool,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: String,

    /// Number of results to skip
    #[arg(long, default_value = "0")]
    pub offset: String,
}

impl ProductsArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            min_price: self.min_price.clone().unwrap_or_default(),
            max_price: self.max_price.clone().unwrap_or_default(),
            order_by_price: self.order_by_price,
            limit: self.limit.clone(),
            offset: self.offset.clone(),
        }
    }
}

pub async fn run(
    args: &ProductsArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    if let Some(id) = &args.id {
        match search_by_id(client, id).await {
            DetailOutcome::Found(record) => match format {
                OutputFormat::Json => print_json(&record),
                _ => {
                    let product: Product = serde_json::from_value(record)
                        .context("Server returned a product this client cannot display")?;
                    let rows = build_product_rows(std::slice::from_ref(&product), &config.currency());
                    print_products(&rows, &product, format)?;
                }
            },
            DetailOutcome::Prompt => bail!(catalog_lib::detail::ID_PROMPT),
            DetailOutcome::Failed(message) => bail!(message),
        }
        return Ok(());
    }

    let criteria = args.criteria();
    let query = criteria.to_query();
    let mut view = CollectionView::new(config.currency());
    if let Err(e) = view.load_list(client, &criteria).await {
        bail!(e.user_message());
    }

    eprintln!(
        "{} products (limit {}, offset {})",
        view.rows().len(),
        query.common.limit,
        query.common.offset
    );
    print_products(view.rows(), &view.products(), format)
}
