//! The new-product form and its submission.

use catalog_api::types::{NewProduct, Product};
use catalog_api::Client;

use crate::collection::CollectionView;
use crate::filter::FilterCriteria;

/// New-product form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
}

impl ProductForm {
    /// Trims name and category and coerces the price to a number.
    ///
    /// An empty price is `0`; anything unparsable is NaN, which goes out as
    /// `null` and is rejected by the server.
    pub fn to_payload(&self) -> NewProduct {
        NewProduct {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price: coerce_number(&self.price),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if trimmed.chars().all(|c| c.is_ascii_digit() || "+-.eE".contains(c)) => value,
        _ => f64::NAN,
    }
}

/// Result of [`create_product`].
#[derive(Clone, Debug, PartialEq)]
pub enum CreateOutcome {
    Created(Product),
    Failed(String),
}

impl CreateOutcome {
    pub fn message(&self) -> String {
        match self {
            CreateOutcome::Created(product) => format!(
                "Created: {}",
                serde_json::to_string_pretty(product).unwrap_or_else(|_| product.name.clone())
            ),
            CreateOutcome::Failed(message) => format!("Error: {}", message),
        }
    }
}

/// Submits `form`. On success the form is cleared and `view` reloads once
/// with `criteria`; a failed reload is left on the view's state. On failure
/// the form keeps its contents.
pub async fn create_product(
    client: &Client,
    form: &mut ProductForm,
    view: &mut CollectionView,
    criteria: &FilterCriteria,
) -> CreateOutcome {
    let payload = form.to_payload();
    match client.create_product(&payload).await {
        Ok(product) => {
            tracing::info!("Created product {} ({})", product.id, product.name);
            form.reset();
            if let Err(e) = view.load_list(client, criteria).await {
                tracing::debug!("Reload after create failed: {}", e);
            }
            CreateOutcome::Created(product)
        }
        Err(e) => {
            tracing::debug!("Create failed: {}", e);
            CreateOutcome::Failed(e.message())
        }
    }
}
