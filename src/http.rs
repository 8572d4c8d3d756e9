use crate::error::{Result, TradierError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Request, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Query string pairs in the order they are appended
pub type Query = Vec<(&'static str, String)>;

/// HTTP transport bound to one base URL and one bearer token.
///
/// Immutable after construction; endpoint groups share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TradierHttp {
    client: Client,
    base_url: Url
}

impl TradierHttp {
    pub fn new(base_url: &str, access_token: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", access_token))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a GET request for `path` without sending it.
    pub fn request(&self, path: &str, query: &Query) -> Result<Request> {
        let url = self.base_url.join(path.trim_start_matches('/')).map_err(|e| {
            TradierError::ConfigError(format!("invalid request path '{}': {}", path, e))
        })?;
        let mut builder = self.client.get(url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        Ok(builder.build()?)
    }

    /// Issue one GET and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T> {
        let request = self.request(path, &query)?;
        debug!(method = "GET", url = %request.url(), "tradier request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!("Tradier request to {} failed with status {}: {}", path, status, response_text);
            return Err(TradierError::StatusError {
                status: status.as_u16(),
                body: response_text
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse response from {}: {}", path, e);
            error!("Response text: {}", response_text);
            TradierError::from(e)
        })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };
    let url = Url::parse(&normalized).map_err(|e| {
        TradierError::ConfigError(format!("invalid base URL '{}': {}", base_url, e))
    })?;
    if url.cannot_be_a_base() {
        return Err(TradierError::ConfigError(format!(
            "base URL '{}' cannot be used as a base",
            base_url
        )));
    }
    Ok(url)
}
