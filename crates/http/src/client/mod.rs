//! Portfolio API client

pub mod api;
pub mod error;
pub mod interceptor;

use error::ClientError;
use interceptor::ResponseInterceptor;
use portfolio_core::ApiMessage;
use reqwest::{header, Client, ClientBuilder};
use std::cell::RefCell;
use std::rc::Rc;

/// Portfolio API client
///
/// Clones share the default authorization header, so clearing it on one
/// handle affects every request built afterwards.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    bearer_token: Rc<RefCell<Option<String>>>,
    interceptor: Option<Rc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the token sent as `Authorization: Bearer` on every request
    pub fn set_bearer_token(&self, token: impl Into<String>) {
        *self.bearer_token.borrow_mut() = Some(token.into());
    }

    /// Drop the default authorization header
    pub fn clear_bearer_token(&self) {
        self.bearer_token.borrow_mut().take();
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.bearer_token.borrow().clone()
    }

    /// Create a request builder carrying the default headers
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = self.bearer_token.borrow().as_deref() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Execute a request, running the response interceptor on failure
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let result = self.send(request).await;

        if let (Err(error), Some(interceptor)) = (&result, &self.interceptor) {
            interceptor.on_error(error, self);
        }

        result
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = ApiMessage::from_body(&body).unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.to_string()
                } else {
                    body
                }
            });
            tracing::debug!(status = status.as_u16(), %message, "API request failed");
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    bearer_token: Option<String>,
    interceptor: Option<Rc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the initial bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Install a response interceptor
    pub fn interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.interceptor = Some(Rc::new(interceptor));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = ClientBuilder::new()
            .user_agent(format!("portfolio-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(ApiClient {
            client,
            base_url,
            bearer_token: Rc::new(RefCell::new(self.bearer_token)),
            interceptor: self.interceptor,
        })
    }
}
