//! CLI command bodies. Each writes one JSON document to `out`.
//!
//! Upstream failures are already absorbed by [`SiteFeed`], so these only
//! fail when writing the output fails.

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::io::Write;

use crate::{downloads::parse_downloads, provider::Provider, site::SiteFeed};

mod view;

pub use view::{DownloadView, ReleaseView, downloads_view};

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize output")?;
    writeln!(out).context("Failed to write output")?;
    Ok(())
}

/// Latest release with formatted date and downloads, or `null`.
#[tracing::instrument(skip(feed, out))]
pub async fn release<P: Provider, W: Write>(feed: &SiteFeed<P>, out: &mut W) -> Result<()> {
    match feed.latest_release().await {
        Some(release) => {
            debug!("Latest release is {}", release.tag_name);
            let downloads = parse_downloads(&release.assets);
            write_json(out, &ReleaseView::new(&release, &downloads))
        }
        None => write_json(out, &serde_json::Value::Null),
    }
}

/// Only the platform downloads of the latest release; `{}` when there is none.
#[tracing::instrument(skip(feed, out))]
pub async fn downloads<P: Provider, W: Write>(feed: &SiteFeed<P>, out: &mut W) -> Result<()> {
    let downloads = feed
        .latest_release()
        .await
        .map(|release| parse_downloads(&release.assets))
        .unwrap_or_default();
    write_json(out, &downloads_view(&downloads))
}

#[tracing::instrument(skip(feed, out))]
pub async fn contributors<P: Provider, W: Write>(
    feed: &SiteFeed<P>,
    limit: u32,
    out: &mut W,
) -> Result<()> {
    let contributors = feed.contributors(limit).await;
    debug!("Got {} contributors", contributors.len());
    write_json(out, &contributors)
}

/// Release and contributors, fetched concurrently.
#[tracing::instrument(skip(feed, out))]
pub async fn summary<P: Provider, W: Write>(
    feed: &SiteFeed<P>,
    limit: u32,
    out: &mut W,
) -> Result<()> {
    let (release, contributors) = tokio::join!(feed.latest_release(), feed.contributors(limit));
    let downloads = release
        .as_ref()
        .map(|r| parse_downloads(&r.assets))
        .unwrap_or_default();

    #[derive(Serialize)]
    struct Summary<'a> {
        release: Option<ReleaseView<'a>>,
        contributors: &'a [crate::provider::Contributor],
    }

    let summary = Summary {
        release: release.as_ref().map(|r| ReleaseView::new(r, &downloads)),
        contributors: &contributors,
    };
    write_json(out, &summary)
}
