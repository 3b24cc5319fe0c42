//! Raw list filters as typed by the user, and their translation into a [`ProductQuery`].

use catalog_api::{ProductQuery, Query, DEFAULT_LIMIT, DEFAULT_OFFSET};

/// The list filters exactly as entered. Rebuilt from input on every load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub order_by_price: bool,
    pub limit: String,
    pub offset: String,
}

impl FilterCriteria {
    /// Translates the raw input into a query.
    ///
    /// Blank search and category are dropped, prices are passed through
    /// unless empty, and a limit or offset that is empty or not a valid
    /// count falls back to 20 and 0.
    pub fn to_query(&self) -> ProductQuery {
        ProductQuery::default()
            .with_search(&self.query)
            .with_category(&self.category)
            .with_min_price(&self.min_price)
            .with_max_price(&self.max_price)
            .with_order_by_price(self.order_by_price)
            .with_limit(parse_count(&self.limit).filter(|n| *n > 0).unwrap_or(DEFAULT_LIMIT))
            .with_offset(parse_count(&self.offset).unwrap_or(DEFAULT_OFFSET))
    }

    /// Sets one field by its query parameter name. Returns `false` for an unknown name.
    pub fn set(&mut self, field: &str, value: &str) -> bool {
        match field {
            "q" | "query" => self.query = value.to_string(),
            "category" => self.category = value.to_string(),
            "min_price" => self.min_price = value.to_string(),
            "max_price" => self.max_price = value.to_string(),
            "order_by_price" => {
                self.order_by_price = matches!(value.trim(), "true" | "1" | "yes" | "on")
            }
            "limit" => self.limit = value.to_string(),
            "offset" => self.offset = value.to_string(),
            _ => return false,
        }
        true
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}
