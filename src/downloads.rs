//! Sorting release assets into per-platform download slots.

use serde::Serialize;

use crate::provider::ReleaseAsset;

/// One of the fixed download slots shown on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformSlot {
    MacOs,
    WindowsX64,
    WindowsArm64,
    LinuxX64Deb,
    LinuxX64AppImage,
    LinuxArm64Deb,
    LinuxArm64AppImage,
}

impl PlatformSlot {
    /// All slots, in the order assets are tested against them.
    pub const ALL: [PlatformSlot; 7] = [
        PlatformSlot::MacOs,
        PlatformSlot::WindowsX64,
        PlatformSlot::WindowsArm64,
        PlatformSlot::LinuxX64Deb,
        PlatformSlot::LinuxX64AppImage,
        PlatformSlot::LinuxArm64Deb,
        PlatformSlot::LinuxArm64AppImage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlatformSlot::MacOs => "macOS (Universal)",
            PlatformSlot::WindowsX64 => "Windows x64",
            PlatformSlot::WindowsArm64 => "Windows ARM64",
            PlatformSlot::LinuxX64Deb => "Linux x64 (deb)",
            PlatformSlot::LinuxX64AppImage => "Linux x64 (AppImage)",
            PlatformSlot::LinuxArm64Deb => "Linux ARM64 (deb)",
            PlatformSlot::LinuxArm64AppImage => "Linux ARM64 (AppImage)",
        }
    }

    /// Key used when the mapping is serialized.
    pub fn key(self) -> &'static str {
        match self {
            PlatformSlot::MacOs => "macOS",
            PlatformSlot::WindowsX64 => "windowsX64",
            PlatformSlot::WindowsArm64 => "windowsArm",
            PlatformSlot::LinuxX64Deb => "linuxX64Deb",
            PlatformSlot::LinuxX64AppImage => "linuxX64AppImage",
            PlatformSlot::LinuxArm64Deb => "linuxArmDeb",
            PlatformSlot::LinuxArm64AppImage => "linuxArmAppImage",
        }
    }

    /// Check a lower-cased filename against this slot's pattern.
    ///
    /// A single name can satisfy several patterns, so callers must test
    /// slots in [`PlatformSlot::ALL`] order and stop at the first hit.
    pub fn matches(self, name_lower: &str) -> bool {
        match self {
            PlatformSlot::MacOs => name_lower.ends_with("_universal.dmg"),
            PlatformSlot::WindowsX64 => {
                name_lower.contains("x64-setup.exe") || name_lower.contains("x64_en-us.msi")
            }
            PlatformSlot::WindowsArm64 => name_lower.contains("arm64-setup.exe"),
            PlatformSlot::LinuxX64Deb => name_lower.contains("amd64.deb"),
            PlatformSlot::LinuxX64AppImage => name_lower.contains("amd64.appimage"),
            PlatformSlot::LinuxArm64Deb => name_lower.contains("arm64.deb"),
            PlatformSlot::LinuxArm64AppImage => name_lower.contains("arm64.appimage"),
        }
    }

    /// The first slot whose pattern matches `filename`, case-insensitively.
    pub fn classify(filename: &str) -> Option<PlatformSlot> {
        let name_lower = filename.to_lowercase();
        Self::ALL.into_iter().find(|slot| slot.matches(&name_lower))
    }
}

/// A labeled download entry, ready for a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformDownload {
    pub label: String,
    pub url: String,
    pub filename: String,
    pub size: u64,
}

impl PlatformDownload {
    fn from_asset(slot: PlatformSlot, asset: &ReleaseAsset) -> Self {
        Self {
            label: slot.label().to_string(),
            url: asset.download_url.clone(),
            filename: asset.name.clone(),
            size: asset.size,
        }
    }
}

/// Fixed-shape mapping of the seven slots to an optional download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlatformDownloads {
    #[serde(rename = "macOS", skip_serializing_if = "Option::is_none")]
    pub mac_os: Option<PlatformDownload>,
    #[serde(rename = "windowsX64", skip_serializing_if = "Option::is_none")]
    pub windows_x64: Option<PlatformDownload>,
    #[serde(rename = "windowsArm", skip_serializing_if = "Option::is_none")]
    pub windows_arm64: Option<PlatformDownload>,
    #[serde(rename = "linuxX64Deb", skip_serializing_if = "Option::is_none")]
    pub linux_x64_deb: Option<PlatformDownload>,
    #[serde(rename = "linuxX64AppImage", skip_serializing_if = "Option::is_none")]
    pub linux_x64_appimage: Option<PlatformDownload>,
    #[serde(rename = "linuxArmDeb", skip_serializing_if = "Option::is_none")]
    pub linux_arm64_deb: Option<PlatformDownload>,
    #[serde(rename = "linuxArmAppImage", skip_serializing_if = "Option::is_none")]
    pub linux_arm64_appimage: Option<PlatformDownload>,
}

impl PlatformDownloads {
    pub fn get(&self, slot: PlatformSlot) -> Option<&PlatformDownload> {
        self.slot(slot).as_ref()
    }

    fn slot(&self, slot: PlatformSlot) -> &Option<PlatformDownload> {
        match slot {
            PlatformSlot::MacOs => &self.mac_os,
            PlatformSlot::WindowsX64 => &self.windows_x64,
            PlatformSlot::WindowsArm64 => &self.windows_arm64,
            PlatformSlot::LinuxX64Deb => &self.linux_x64_deb,
            PlatformSlot::LinuxX64AppImage => &self.linux_x64_appimage,
            PlatformSlot::LinuxArm64Deb => &self.linux_arm64_deb,
            PlatformSlot::LinuxArm64AppImage => &self.linux_arm64_appimage,
        }
    }

    fn slot_mut(&mut self, slot: PlatformSlot) -> &mut Option<PlatformDownload> {
        match slot {
            PlatformSlot::MacOs => &mut self.mac_os,
            PlatformSlot::WindowsX64 => &mut self.windows_x64,
            PlatformSlot::WindowsArm64 => &mut self.windows_arm64,
            PlatformSlot::LinuxX64Deb => &mut self.linux_x64_deb,
            PlatformSlot::LinuxX64AppImage => &mut self.linux_x64_appimage,
            PlatformSlot::LinuxArm64Deb => &mut self.linux_arm64_deb,
            PlatformSlot::LinuxArm64AppImage => &mut self.linux_arm64_appimage,
        }
    }

    /// Occupied slots in classification order.
    pub fn iter(&self) -> impl Iterator<Item = (PlatformSlot, &PlatformDownload)> + '_ {
        PlatformSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|d| (slot, d)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify `assets` into platform slots.
///
/// Each asset lands in the first slot it matches; assets matching nothing
/// are dropped. When two assets land in the same slot the later one wins.
pub fn parse_downloads(assets: &[ReleaseAsset]) -> PlatformDownloads {
    let mut downloads = PlatformDownloads::default();

    for asset in assets {
        if let Some(slot) = PlatformSlot::classify(&asset.name) {
            *downloads.slot_mut(slot) = Some(PlatformDownload::from_asset(slot, asset));
        }
    }

    downloads
}
