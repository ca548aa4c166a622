//! Page-render-facing facade over a [`Provider`].
//!
//! Fetch failures never reach the caller: they are logged and turned into
//! `None` (release) or an empty list (contributors). A failed contributor
//! fetch therefore looks the same as a repository with no contributors;
//! only the log tells them apart. Use the [`Provider`] directly when the
//! distinction matters.

use log::error;

use crate::provider::{Contributor, Provider, Release};

/// Page size requested when the caller has no preference.
pub const DEFAULT_CONTRIBUTOR_LIMIT: u32 = 20;

pub struct SiteFeed<P: Provider> {
    provider: P,
}

impl<P: Provider> SiteFeed<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The latest published release, or `None` if it could not be fetched.
    #[tracing::instrument(skip(self))]
    pub async fn latest_release(&self) -> Option<Release> {
        match self.provider.latest_release().await {
            Ok(release) => Some(release),
            Err(e) => {
                error!(
                    "Failed to fetch release for {}: {}",
                    self.provider.repo(),
                    e
                );
                None
            }
        }
    }

    /// Up to `limit` contributors in upstream order; empty on failure.
    #[tracing::instrument(skip(self))]
    pub async fn contributors(&self, limit: u32) -> Vec<Contributor> {
        match self.provider.contributors(limit).await {
            Ok(contributors) => contributors,
            Err(e) => {
                error!(
                    "Failed to fetch contributors for {}: {}",
                    self.provider.repo(),
                    e
                );
                Vec::new()
            }
        }
    }
}
