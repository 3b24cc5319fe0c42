//! Product records as served by the `/products` endpoints.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a product.
pub type ProductID = i64;

/// A product record returned by the API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: ProductID,

    pub name: String,

    /// Free-form category. The API may omit it or send an empty string.
    #[serde(default)]
    pub category: Option<String>,

    /// Missing and `null` both decode as `None`.
    #[serde(default)]
    pub price: Option<f64>,
}

/// Body of `POST /products/`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    /// Non-finite values serialize as `null` and are rejected by the server.
    pub price: f64,
}

/// Body of `PUT /products/{id}`. Unset fields are left untouched server-side.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ProductUpdate {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.price.is_none()
    }
}
