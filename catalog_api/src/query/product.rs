use super::{common::QueryCommon, Query};

/// Filters for `GET /products/`.
///
/// Optional filters are only sent when set. `order_by_price`, `limit` and
/// `offset` are always sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub category: Option<String>,
    /// Passed through verbatim; the server validates it.
    pub min_price: Option<String>,
    /// Passed through verbatim; the server validates it.
    pub max_price: Option<String>,
    pub order_by_price: bool,
}

impl Query for ProductQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(7);
        if let Some(search) = &self.search {
            pairs.push(("q", search.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(min_price) = &self.min_price {
            pairs.push(("min_price", min_price.clone()));
        }
        if let Some(max_price) = &self.max_price {
            pairs.push(("max_price", max_price.clone()));
        }
        pairs.push(("order_by_price", self.order_by_price.to_string()));
        pairs.extend(self.common.pairs());
        pairs
    }
}

impl ProductQuery {
    /// Searches product names. Blank input clears the filter.
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_blank(search);
        self
    }

    /// Restricts to one category. Blank input clears the filter.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = non_blank(category);
        self
    }

    /// Lower price bound. Only the empty string clears it.
    pub fn with_min_price(mut self, min_price: &str) -> Self {
        self.min_price = non_empty(min_price);
        self
    }

    /// Upper price bound. Only the empty string clears it.
    pub fn with_max_price(mut self, max_price: &str) -> Self {
        self.max_price = non_empty(max_price);
        self
    }

    pub fn with_order_by_price(mut self, order_by_price: bool) -> Self {
        self.order_by_price = order_by_price;
        self
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{ProductQuery, Query};

    #[test]
    fn test_product_query() {
        let url = Url::parse("https://example.com/products/").unwrap();

        insta::assert_snapshot!(
            ProductQuery::default()
                .with_search("  desk lamp ")
                .with_category("Home")
                .with_min_price("10")
                .with_max_price("99.90")
                .with_order_by_price(true)
                .with_limit(5)
                .with_offset(10)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/products/?q=desk+lamp&category=Home&min_price=10&max_price=99.90&order_by_price=true&limit=5&offset=10"
        );

        insta::assert_snapshot!(
            ProductQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/products/?order_by_price=false&limit=20&offset=0"
        );
    }

    #[test]
    fn test_blank_filters_are_dropped() {
        let query = ProductQuery::default()
            .with_search("   ")
            .with_category("")
            .with_min_price("")
            .with_max_price("");
        let keys: Vec<&str> = query.pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["order_by_price", "limit", "offset"]);
    }

    #[test]
    fn test_price_bounds_are_not_trimmed() {
        let query = ProductQuery::default().with_min_price(" 5 ");
        assert_eq!(query.min_price.as_deref(), Some(" 5 "));
    }
}
