//! JSON shapes handed to the site templates.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    downloads::{PlatformDownload, PlatformDownloads},
    format::{format_bytes, format_date},
    provider::Release,
};

#[derive(Debug, Serialize)]
pub struct DownloadView<'a> {
    #[serde(flatten)]
    pub download: &'a PlatformDownload,
    /// e.g. `15.2 MB`
    pub size_display: String,
}

/// Occupied slots keyed by slot name, serialized in classification order.
#[derive(Debug, Default)]
pub struct DownloadsView<'a>(Vec<(&'static str, DownloadView<'a>)>);

impl Serialize for DownloadsView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, view) in &self.0 {
            map.serialize_entry(key, view)?;
        }
        map.end()
    }
}

pub fn downloads_view(downloads: &PlatformDownloads) -> DownloadsView<'_> {
    let entries = downloads
        .iter()
        .map(|(slot, download)| {
            let view = DownloadView {
                download,
                size_display: format_bytes(download.size),
            };
            (slot.key(), view)
        })
        .collect();
    DownloadsView(entries)
}

/// A release plus its formatted date and classified downloads.
#[derive(Debug, Serialize)]
pub struct ReleaseView<'a> {
    #[serde(flatten)]
    pub release: &'a Release,
    /// e.g. `March 4, 2024`
    pub published: String,
    pub downloads: DownloadsView<'a>,
}

impl<'a> ReleaseView<'a> {
    pub fn new(release: &'a Release, downloads: &'a PlatformDownloads) -> Self {
        Self {
            release,
            published: format_date(&release.published_at),
            downloads: downloads_view(downloads),
        }
    }
}
