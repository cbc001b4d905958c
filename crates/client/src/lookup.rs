//! HTTP product lookup.

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use tilldesk_core::{LookupError, LookupResult, Product, ProductCode};

use crate::config::ClientConfig;
use crate::source::ProductSource;

/// Looks products up at `GET {base_url}/product/{code}`.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpProductSource {
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self { client, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn configured_base(&self) -> LookupResult<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .ok_or(LookupError::Config)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    fn ensure_ready(&self) -> LookupResult<()> {
        self.configured_base().map(|_| ())
    }

    async fn fetch(&self, code: &ProductCode) -> LookupResult<Product> {
        let url = product_url(self.configured_base()?, code)?;

        let resp = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::remote(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| LookupError::transport(e.to_string()))?;
        Product::from_json_slice(&body)
    }
}

/// Look up one product without a register.
///
/// Checks the base URL first, then the code; neither failure sends a request.
pub async fn lookup(code: &str, base_url: &str) -> LookupResult<Product> {
    let source = HttpProductSource::new(Some(base_url.to_string()));
    source.ensure_ready()?;
    let code = ProductCode::parse(code)?;
    source.fetch(&code).await
}

/// Build `{base_url}/product/{code}` with the code as a single path segment.
pub fn product_url(base_url: &str, code: &ProductCode) -> LookupResult<Url> {
    let mut url = Url::parse(base_url).map_err(|e| {
        tracing::error!(base_url, error = %e, "API base URL is not a valid URL");
        LookupError::Config
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            tracing::error!(base_url, "API base URL cannot carry a path");
            LookupError::Config
        })?
        .pop_if_empty()
        .push("product")
        .push(code.as_str());

    Ok(url)
}
