//! Single-attempt JSON GET client.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::FetchError;

/// Thin wrapper over a configured reqwest Client.
///
/// Every call is one round trip; failures are reported as [`FetchError`]
/// and never retried.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET JSON from {}...", url);
        self.fetch(self.client.get(url)).await
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!("GET JSON from {} with query {:?}...", url, query);
        self.fetch(self.client.get(url).query(query)).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FetchError> {
        let response = request.send().await.map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json::<T>().await.map_err(FetchError::Decode)
    }
}
