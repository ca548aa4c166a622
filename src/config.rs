use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};

use crate::{
    http::HttpClient,
    provider::{GitHubProvider, RepoId},
    site::SiteFeed,
};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OWNER: &str = "DDEV-Manager";
pub const DEFAULT_REPO: &str = "ddev-manager";
pub const DEFAULT_USER_AGENT: &str = "DDEV-Manager-Website";

/// Media type pinning the v3 REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Where to fetch from and how to identify ourselves.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub api_url: String,
    pub repo: RepoId,
    pub user_agent: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            repo: RepoId::new(DEFAULT_OWNER, DEFAULT_REPO),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Builds the shared client. No Authorization header is ever attached.
    pub fn build_client(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(client)
    }

    pub fn provider(&self) -> Result<GitHubProvider> {
        debug!("Using {} at {}", self.repo, self.api_url);
        let http_client = HttpClient::new(self.build_client()?);
        Ok(GitHubProvider::from_http_client(
            http_client,
            &self.api_url,
            self.repo.clone(),
        ))
    }

    pub fn feed(&self) -> Result<SiteFeed<GitHubProvider>> {
        Ok(SiteFeed::new(self.provider()?))
    }
}
