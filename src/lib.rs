//! Release and contributor data for a project website.
//!
//! The five operations a page needs are [`SiteFeed::latest_release`],
//! [`SiteFeed::contributors`], [`parse_downloads`], [`format_bytes`] and
//! [`format_date`].

pub mod commands;
pub mod config;
pub mod downloads;
pub mod format;
pub mod http;
pub mod provider;
pub mod site;

pub use config::SiteConfig;
pub use downloads::{PlatformDownload, PlatformDownloads, PlatformSlot, parse_downloads};
pub use format::{format_bytes, format_date};
pub use provider::{Contributor, Release, ReleaseAsset, RepoId};
pub use site::{DEFAULT_CONTRIBUTOR_LIMIT, SiteFeed};
