//! HTTP client for the product catalog API.

use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::{
    query::{ProductQuery, Query},
    types::{NewProduct, NewUser, Product, ProductUpdate, TokenResponse, User},
    Error,
};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const PRODUCTS_PATH: &str = "/products/";

/// HTTP client for the product catalog API.
///
/// Every request carries `Accept: application/json` and, when a token is set,
/// `Authorization: Bearer <token>`. Requests are made exactly once: there is
/// no retry, cache or timeout.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to `http://127.0.0.1:8000`.
    base_api_url: String,
    token: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client pointing at a locally running API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Sets the bearer token. An empty token means no `Authorization` header.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        };
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url<Q: Query>(&self, path: &str, query: Option<&Q>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed(format!("invalid URL: {}", e))
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// URL of a single product, with `id` percent-encoded as one path segment.
    fn product_url(&self, id: &str) -> Result<Url, Error> {
        let mut url = self.get_url::<ProductQuery>(PRODUCTS_PATH, None)?;
        url.path_segments_mut()
            .map_err(|_| Error::RequestFailed("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> Result<RequestBuilder, Error> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed(e.to_string())
        })?;
        let mut req = client
            .request(method, url)
            .header("accept", "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        Ok(req)
    }

    fn with_json_body<B: Serialize>(req: RequestBuilder, payload: &B) -> Result<RequestBuilder, Error> {
        let body = serde_json::to_vec(payload).map_err(|e| {
            tracing::error!("Failed to serialize request body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;
        Ok(req.header("content-type", "application/json").body(body))
    }

    /// Sends the request and normalizes the response.
    ///
    /// The body is read as JSON, falling back to `{}` when it does not parse.
    /// Non-success statuses become [`Error::Api`].
    async fn send(&self, req: RequestBuilder) -> Result<Value, Error> {
        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;
        let body = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| Value::Object(Map::new()));

        if !status.is_success() {
            let message = error_message(&body, status.as_u16());
            tracing::debug!("Request failed with status {}: {}", status, message);
            return Err(Error::Api {
                message,
                status: status.as_u16(),
            });
        }

        Ok(body)
    }

    async fn send_as<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, Error> {
        let body = self.send(req).await?;
        serde_json::from_value::<T>(body).map_err(|e| {
            tracing::error!("Failed to parse resource: {}", e);
            Error::Decode(e.to_string())
        })
    }

    /// `GET path?query`, returning the parsed body.
    pub async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        self.send_as(self.request(Method::GET, url)?).await
    }

    /// `POST path` with a JSON body, returning the parsed body.
    pub async fn post_json<T, B>(&self, path: &str, payload: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.get_url::<ProductQuery>(path, None)?;
        tracing::debug!("POST {}", url);
        let req = Self::with_json_body(self.request(Method::POST, url)?, payload)?;
        self.send_as(req).await
    }

    /// Fetches products matching the given query.
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, Error> {
        self.get_json::<Vec<Product>, ProductQuery>(PRODUCTS_PATH, Some(query))
            .await
    }

    /// Fetches one product. `id` is sent as typed; the server validates it.
    ///
    /// Decode into [`Product`], or into `serde_json::Value` to keep the record
    /// exactly as the server sent it.
    pub async fn get_product<T: DeserializeOwned>(&self, id: &str) -> Result<T, Error> {
        let url = self.product_url(id)?;
        tracing::debug!("GET {}", url);
        self.send_as(self.request(Method::GET, url)?).await
    }

    /// Creates a product and returns the stored record.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, Error> {
        self.post_json::<Product, NewProduct>(PRODUCTS_PATH, product)
            .await
    }

    /// Applies a partial update and returns the stored record.
    pub async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<Product, Error> {
        let url = self.product_url(id)?;
        tracing::debug!("PUT {}", url);
        let req = Self::with_json_body(self.request(Method::PUT, url)?, update)?;
        self.send_as(req).await
    }

    /// Deletes a product. The server answers 204 with no body.
    pub async fn delete_product(&self, id: &str) -> Result<(), Error> {
        let url = self.product_url(id)?;
        tracing::debug!("DELETE {}", url);
        self.send(self.request(Method::DELETE, url)?).await?;
        Ok(())
    }

    /// Exchanges credentials for an access token (OAuth2 password form).
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, Error> {
        let url = self.get_url::<ProductQuery>("/auth/login", None)?;
        tracing::debug!("POST {}", url);
        let req = self
            .request(Method::POST, url)?
            .form(&[("username", email), ("password", password)]);
        self.send_as(req).await
    }

    /// Registers a new account.
    pub async fn register(&self, user: &NewUser) -> Result<User, Error> {
        self.post_json::<User, NewUser>("/auth/register", user).await
    }

    /// Resolves the profile that owns `token`.
    pub async fn me(&self, token: &str) -> Result<User, Error> {
        let mut url = self.get_url::<ProductQuery>("/auth/me", None)?;
        url.query_pairs_mut().append_pair("token", token);
        tracing::debug!("GET {}/auth/me", self.base_api_url);
        self.send_as(self.request(Method::GET, url)?).await
    }
}

/// Picks the user-facing message out of an error body.
///
/// FastAPI sends `detail` either as a string or, for validation failures, as
/// a list of objects carrying a `msg`.
fn error_message(body: &Value, status: u16) -> String {
    match body.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| match item.get("msg").and_then(Value::as_str) {
                Some(msg) => msg.to_string(),
                None => item.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        Some(detail @ (Value::Bool(_) | Value::Number(_) | Value::Object(_))) => detail.to_string(),
        _ => format!("Error {}", status),
    }
}
