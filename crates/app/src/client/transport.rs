//! HTTP transport for the storefront API.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Method, header::CONTENT_TYPE};
use serde_json::Value;

use crate::client::errors::TransportError;

/// A request against the storefront API, relative to its base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,

    /// Path below the base URL, with a leading slash
    pub path: &'static str,

    /// Single query parameter, such as the id of the product to delete
    pub query: Option<(&'static str, String)>,

    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,
}

impl ApiRequest {
    /// `GET` request without a body.
    pub fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST` request carrying `body` as JSON.
    pub fn post(path: &'static str, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    /// `PUT` request carrying `body` as JSON.
    pub fn put(path: &'static str, body: Value) -> Self {
        Self::new(Method::PUT, path).with_body(body)
    }

    /// `DELETE` request without a body.
    pub fn delete(path: &'static str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach the query parameter `key=value`.
    #[must_use]
    pub fn with_query(mut self, key: &'static str, value: String) -> Self {
        self.query = Some((key, value));
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: None,
            body: None,
        }
    }
}

/// A fully read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,

    /// Value of the `Content-Type` header, if any
    pub content_type: Option<String>,

    /// Body read as text
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the server labelled the body as JSON.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.contains("application/json"))
    }
}

/// Sends requests to the storefront API.
#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and read the whole response body.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    http: Client,
}

impl ReqwestTransport {
    /// Create a transport for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self.http.request(request.method, self.url(request.path));

        if let Some((key, value)) = &request.query {
            builder = builder.query(&[(key, value)]);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }
}
