use catalog_api::{ProductQuery, Query, DEFAULT_LIMIT, DEFAULT_OFFSET};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/products/").unwrap()
}

#[test]
fn product_query_defaults() {
    let url = ProductQuery::default().add_to_url(&base_url());
    assert_eq!(url.query().unwrap(), "order_by_price=false&limit=20&offset=0");
    assert_eq!(DEFAULT_LIMIT, 20);
    assert_eq!(DEFAULT_OFFSET, 0);
}

#[test]
fn product_query_trims_search_and_category() {
    let url = ProductQuery::default()
        .with_search("  lamp  ")
        .with_category(" Home ")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("q=lamp&"));
    assert!(query.contains("category=Home&"));
}

#[test]
fn product_query_passes_prices_through() {
    let url = ProductQuery::default()
        .with_min_price("abc")
        .with_max_price("0")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("min_price=abc"));
    assert!(query.contains("max_price=0"));
}

#[test]
fn product_query_pair_order_is_stable() {
    let pairs = ProductQuery::default()
        .with_max_price("5")
        .with_search("x")
        .with_order_by_price(true)
        .with_category("c")
        .with_min_price("1")
        .with_offset(40)
        .with_limit(10)
        .pairs();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec!["q", "category", "min_price", "max_price", "order_by_price", "limit", "offset"]
    );
    assert_eq!(pairs[4].1, "true");
    assert_eq!(pairs[5].1, "10");
    assert_eq!(pairs[6].1, "40");
}

#[test]
fn product_query_encodes_special_characters() {
    let url = ProductQuery::default()
        .with_search("café & chá")
        .add_to_url(&base_url());
    assert!(url.query().unwrap().starts_with("q=caf%C3%A9+%26+ch%C3%A1&"));
}
