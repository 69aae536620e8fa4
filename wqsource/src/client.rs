//! HTTP client for the remote queue document

use crate::error::{Error, Result};
use crate::models::QueueDocument;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default remote queue document URL
pub const DEFAULT_QUEUE_URL: &str = "https://gist.githubusercontent.com/vishnu-meera/be8676f942b4d59685a4ddb7e0ab10f9/raw/08779ebe39431cc3431547b7e8b503110e93814d/tabs_2025-08-14_youtube.json";

/// Default timeout for document requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "wqsource/0.1.0";

/// Client fetching the remote queue document
///
/// The document is a JSON object `{ "queue": ["<url>", ...] }` hosted at a
/// fixed URL. The client is stateless and idempotent; deciding when to
/// consult it (local cache first) is the engine's responsibility.
///
/// # Example
///
/// ```no_run
/// use wqsource::GistQueueClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GistQueueClient::new().await?;
///     let urls = client.fetch_queue().await?;
///     println!("{} raw URL(s) in the remote queue", urls.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GistQueueClient {
    client: Client,
    document_url: String,
    request_timeout: Duration,
}

impl GistQueueClient {
    /// Create a new client with default settings
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from the application configuration
    ///
    /// Reads the document URL and request timeout from `sources.gist.*`.
    #[cfg(feature = "wqconfig")]
    pub async fn from_config() -> Result<Self> {
        use crate::config_ext::GistConfigExt;

        let config = wqconfig::get_config();
        Self::builder()
            .document_url(config.get_gist_queue_url()?)
            .timeout(Duration::from_secs(config.get_gist_request_timeout_secs()?))
            .build()
            .await
    }

    /// Get the configured document URL
    pub fn document_url(&self) -> &str {
        &self.document_url
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Fetch the remote queue document and return its raw URL list
    ///
    /// A well-formed document missing the `queue` field yields an empty
    /// list. Transport failures, non-success statuses and malformed bodies
    /// are reported as errors, never swallowed.
    pub async fn fetch_queue(&self) -> Result<Vec<String>> {
        let url = Url::parse(&self.document_url)?;

        tracing::debug!("GistQueueClient: fetching queue document from {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::api_error(format!(
                "Queue document returned status: {}",
                response.status()
            )));
        }

        let document: QueueDocument = response.json().await?;

        tracing::debug!(
            "GistQueueClient: received {} raw URL(s)",
            document.queue.len()
        );

        Ok(document.queue)
    }
}

/// Builder for configuring a GistQueueClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    document_url: String,
    request_timeout: Duration,
    user_agent: String,
    proxy: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            document_url: DEFAULT_QUEUE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the queue document URL
    pub fn document_url(mut self, url: impl Into<String>) -> Self {
        self.document_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a proxy URL
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<GistQueueClient> {
        let client = if let Some(client) = self.client {
            client
        } else {
            let mut builder = Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.request_timeout);

            if let Some(proxy_url) = &self.proxy {
                let proxy = reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::other(format!("Invalid proxy: {}", e)))?;
                builder = builder.proxy(proxy);
            }

            builder.build()?
        };

        Ok(GistQueueClient {
            client,
            document_url: self.document_url,
            request_timeout: self.request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = ClientBuilder::default();
        assert_eq!(builder.document_url, DEFAULT_QUEUE_URL);
        assert_eq!(
            builder.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[tokio::test]
    #[ignore = "Integration test - calls the real gist document"]
    async fn test_fetch_real_document() {
        let client = GistQueueClient::new().await.unwrap();
        let queue = client.fetch_queue().await.unwrap();
        println!("Fetched {} raw URL(s)", queue.len());
    }
}
