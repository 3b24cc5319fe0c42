//! The product list: query, fetch, and replace the rendered rows.

use catalog_api::types::Product;
use catalog_api::Client;

use crate::currency::CurrencyFormat;
use crate::error::CatalogError;
use crate::filter::FilterCriteria;
use crate::render::{build_product_rows, render_table, ProductRow, TableStyle};

/// Where a [`CollectionView`] is in its load cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing loaded yet.
    #[default]
    Idle,
    Loading,
    /// The last load succeeded with this many rows.
    Rendered(usize),
    /// The last load failed; the rows from before it are still shown.
    ErrorShown(String),
}

/// A filterable product table backed by `GET /products/`.
///
/// A load replaces the whole row set, so whichever load finishes last is
/// what is shown. A failed load leaves the previous rows in place.
#[derive(Debug, Default)]
pub struct CollectionView {
    products: Vec<Product>,
    rows: Vec<ProductRow>,
    state: ViewState,
    currency: CurrencyFormat,
}

impl CollectionView {
    pub fn new(currency: CurrencyFormat) -> Self {
        Self {
            products: Vec::new(),
            rows: Vec::new(),
            state: ViewState::Idle,
            currency,
        }
    }

    /// The records behind the current rows.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The message of the last failed load, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::ErrorShown(message) => Some(message),
            _ => None,
        }
    }

    /// Builds the query from `criteria`, fetches, and replaces the rows.
    pub async fn load_list(
        &mut self,
        client: &Client,
        criteria: &FilterCriteria,
    ) -> Result<&[ProductRow], CatalogError> {
        let query = criteria.to_query();
        self.state = ViewState::Loading;

        match client.list_products(&query).await {
            Ok(products) => {
                tracing::debug!("Loaded {} products", products.len());
                self.rows = build_product_rows(&products, &self.currency);
                self.products = products;
                self.state = ViewState::Rendered(self.rows.len());
                Ok(&self.rows)
            }
            Err(e) => {
                tracing::warn!("Failed to load products: {}", e);
                self.state = ViewState::ErrorShown(format!("Error: {}", e.message()));
                Err(e.into())
            }
        }
    }

    pub fn render(&self, style: TableStyle) -> String {
        render_table(&self.rows, style)
    }
}
