use crate::{DownloadId, DownloadStatus, Format, Quality, VideoInfo};

/// Advertised parallel-download limit shown in the settings panel.
pub const PARALLEL_DOWNLOADS_HINT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url_input: String,
    pub analyzing: bool,
    pub video: Option<VideoInfo>,
    pub quality: Quality,
    pub format: Format,
    pub downloads: Vec<DownloadRowView>,
    pub download_count: usize,
    pub active_count: usize,
    pub completed_count: usize,
    pub failed_count: usize,
    pub settings: SettingsView,
    pub dirty: bool,
}

impl AppViewModel {
    /// True when the Analyze button would be enabled.
    pub fn can_analyze(&self) -> bool {
        !self.analyzing && !self.url_input.trim().is_empty()
    }

    pub fn can_download(&self) -> bool {
        self.video.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRowView {
    pub id: DownloadId,
    pub title: String,
    pub quality: Quality,
    /// Upper-case format badge, e.g. `MP3`.
    pub format_badge: String,
    pub percent: u32,
    pub status: DownloadStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsView {
    pub parallel_downloads: usize,
    pub default_quality: Quality,
    pub default_format: Format,
    pub storage: &'static str,
}
