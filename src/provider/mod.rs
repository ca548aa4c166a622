//! Provider abstraction for the code-hosting API.
//!
//! Domain types here are what the rest of the crate (and any rendering
//! layer) consumes; upstream wire shapes stay private to each provider.

mod github;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::http::FetchError;

pub use github::GitHubProvider;

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format. Expected 'owner/repo'.")
        } else {
            Ok(RepoId::new(parts[0], parts[1]))
        }
    }
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReleaseAsset {
    /// Platform/arch-bearing filename, e.g. `App_1.2.0_amd64.deb`
    pub name: String,
    pub download_url: String,
    /// Size in bytes
    pub size: u64,
}

/// A published, tagged release.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Release {
    /// Version tag (e.g., "v1.0.0")
    pub tag_name: String,
    /// Release title; upstream sends null when unset
    pub name: Option<String>,
    /// Publication date (ISO 8601)
    pub published_at: String,
    /// Release notes in markdown
    pub body: Option<String>,
    /// Release page on the hosting site
    pub html_url: String,
    pub assets: Vec<ReleaseAsset>,
}

/// An account credited with commits to the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub contributions: u64,
}

/// Source of release and contributor data for one repository.
///
/// Both fetches report failure explicitly; see [`crate::site::SiteFeed`]
/// for the variant that degrades to empty values instead.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// The repository this provider reads from.
    fn repo(&self) -> &RepoId;

    /// Fetch the most recent published release.
    async fn latest_release(&self) -> Result<Release, FetchError>;

    /// Fetch one page of at most `limit` contributors, in upstream order.
    async fn contributors(&self, limit: u32) -> Result<Vec<Contributor>, FetchError>;
}
