use catalog_api::types::{NewProduct, Product, ProductUpdate, TokenResponse, User};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_products() {
    let products: Vec<Product> = serde_json::from_str(&load_fixture("products.json")).unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].name, "Widget");
    assert_eq!(products[0].category.as_deref(), Some("Tools"));
    assert_eq!(products[0].price, Some(9.5));
    assert_eq!(products[1].category.as_deref(), Some(""));
    assert_eq!(products[2].category, None);
    assert_eq!(products[2].price, Some(50.0));
}

#[test]
fn deserialize_product_without_optional_fields() {
    let product: Product = serde_json::from_str(r#"{"id": 9, "name": "Bare"}"#).unwrap();
    assert_eq!(product.category, None);
    assert_eq!(product.price, None);
}

#[test]
fn deserialize_product_with_null_price() {
    let products: Vec<Product> = serde_json::from_str(
        r#"[{"id": 1, "name": "Widget", "category": null, "price": null}, {"id": 2, "name": "Pen", "price": 2}]"#,
    )
    .unwrap();
    assert_eq!(products[0].price, None);
    assert_eq!(products[1].price, Some(2.0));
}

#[test]
fn deserialize_user_keeps_unknown_fields() {
    let user: User = serde_json::from_str(&load_fixture("user.json")).unwrap();
    assert_eq!(user.full_name, "Ana Maria Souza");
    assert_eq!(user.first_name(), Some("Ana"));
    assert_eq!(user.extra["email"], "ana@example.com");
    assert_eq!(user.extra["id"], 42);

    let round_trip = serde_json::to_value(&user).unwrap();
    assert_eq!(round_trip["email"], "ana@example.com");
}

#[test]
fn deserialize_user_without_name() {
    let user: User = serde_json::from_str(r#"{"id": 1}"#).unwrap();
    assert_eq!(user.full_name, "");
    assert_eq!(user.first_name(), None);
}

#[test]
fn deserialize_token_response() {
    let token: TokenResponse =
        serde_json::from_str(r#"{"access_token": "abc.def", "token_type": "bearer"}"#).unwrap();
    assert_eq!(token.access_token, "abc.def");

    let token: TokenResponse = serde_json::from_str(r#"{"access_token": "xyz"}"#).unwrap();
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn serialize_new_product_with_nan_price_as_null() {
    let payload = NewProduct {
        name: "Widget".to_string(),
        category: "Tools".to_string(),
        price: f64::NAN,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value["price"].is_null());
}

#[test]
fn serialize_partial_update_skips_unset_fields() {
    let update = ProductUpdate {
        price: Some(3.0),
        ..Default::default()
    };
    assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"price":3.0}"#);
    assert!(ProductUpdate::default().is_empty());
}
