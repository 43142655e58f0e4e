use crate::view_model::{AppViewModel, DownloadRowView, SettingsView, PARALLEL_DOWNLOADS_HINT};
use crate::{
    AnalysisToken, CoreSettings, DownloadId, DownloadItem, DownloadStatus, Format, Progress,
    Quality, VideoInfo,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: CoreSettings,
    url_input: String,
    in_flight: Option<AnalysisToken>,
    last_token: u64,
    video: Option<VideoInfo>,
    quality: Quality,
    format: Format,
    /// Newest first.
    downloads: Vec<DownloadItem>,
    last_download_id: Option<DownloadId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(CoreSettings::default())
    }

    pub fn with_settings(settings: CoreSettings) -> Self {
        Self {
            quality: settings.default_quality,
            format: settings.default_format,
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &CoreSettings {
        &self.settings
    }

    pub fn video(&self) -> Option<&VideoInfo> {
        self.video.as_ref()
    }

    pub fn downloads(&self) -> &[DownloadItem] {
        &self.downloads
    }

    pub fn download(&self, id: DownloadId) -> Option<&DownloadItem> {
        self.downloads.iter().find(|item| item.id == id)
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_analysis(&self) -> Option<AnalysisToken> {
        self.in_flight
    }

    pub fn has_active_downloads(&self) -> bool {
        self.downloads.iter().any(|item| item.status.is_active())
    }

    pub fn view(&self) -> AppViewModel {
        let downloads: Vec<DownloadRowView> = self
            .downloads
            .iter()
            .map(|item| DownloadRowView {
                id: item.id,
                title: item.title.clone(),
                quality: item.quality,
                format_badge: item.format.as_str().to_ascii_uppercase(),
                percent: item.progress.rounded(),
                status: item.status,
            })
            .collect();
        let count_with = |status: DownloadStatus| {
            self.downloads
                .iter()
                .filter(|item| item.status == status)
                .count()
        };

        AppViewModel {
            url_input: self.url_input.clone(),
            analyzing: self.is_analyzing(),
            video: self.video.clone(),
            quality: self.quality,
            format: self.format,
            download_count: downloads.len(),
            active_count: count_with(DownloadStatus::Downloading),
            completed_count: count_with(DownloadStatus::Completed),
            failed_count: count_with(DownloadStatus::Error),
            downloads,
            settings: SettingsView {
                parallel_downloads: PARALLEL_DOWNLOADS_HINT,
                default_quality: self.settings.default_quality,
                default_format: self.settings.default_format,
                storage: "in-memory",
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn url_input(&self) -> &str {
        &self.url_input
    }

    pub(crate) fn set_url_input(&mut self, url: String) {
        if self.url_input != url {
            self.url_input = url;
            self.mark_dirty();
        }
    }

    /// Allocates a fresh token and marks it in flight, returning the token it
    /// replaces, if any.
    pub(crate) fn begin_analysis(&mut self) -> (AnalysisToken, Option<AnalysisToken>) {
        self.last_token += 1;
        let token = AnalysisToken(self.last_token);
        let replaced = self.in_flight.replace(token);
        self.mark_dirty();
        (token, replaced)
    }

    /// Accepts a result only for the request currently in flight.
    pub(crate) fn finish_analysis(&mut self, token: AnalysisToken, info: VideoInfo) -> bool {
        if self.in_flight != Some(token) {
            return false;
        }
        self.in_flight = None;
        self.video = Some(info);
        self.mark_dirty();
        true
    }

    pub(crate) fn fail_analysis(&mut self, token: AnalysisToken) -> bool {
        if self.in_flight != Some(token) {
            return false;
        }
        self.in_flight = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn select_quality(&mut self, quality: Quality) {
        if self.quality != quality {
            self.quality = quality;
            self.mark_dirty();
        }
    }

    pub(crate) fn select_format(&mut self, format: Format) {
        if self.format != format {
            self.format = format;
            self.mark_dirty();
        }
    }

    /// Prepends a new download for the current video, or returns `None` when
    /// no video has been analyzed yet.
    pub(crate) fn push_download(&mut self, requested_at_ms: u64) -> Option<&DownloadItem> {
        let title = self.video.as_ref()?.title.clone();
        let id = self.allocate_download_id(requested_at_ms);
        self.downloads.insert(
            0,
            DownloadItem {
                id,
                title,
                progress: Progress::ZERO,
                status: DownloadStatus::Downloading,
                format: self.format,
                quality: self.quality,
            },
        );
        self.mark_dirty();
        self.downloads.first()
    }

    fn allocate_download_id(&mut self, requested_at_ms: u64) -> DownloadId {
        let id = match self.last_download_id {
            Some(DownloadId(last)) if requested_at_ms <= last => DownloadId(last + 1),
            _ => DownloadId(requested_at_ms),
        };
        self.last_download_id = Some(id);
        id
    }

    /// Advances an active download, returning it when the step changed it.
    pub(crate) fn advance_download(&mut self, id: DownloadId, step: u32) -> Option<&DownloadItem> {
        let item = self.downloads.iter_mut().find(|item| item.id == id)?;
        if !item.status.is_active() {
            return None;
        }
        let next = item.progress.advanced_by(step);
        if next == item.progress {
            return None;
        }
        item.progress = next;
        if next.is_complete() {
            item.status = DownloadStatus::Completed;
        }
        self.dirty = true;
        Some(&*item)
    }

    pub(crate) fn fail_download(&mut self, id: DownloadId) -> Option<&DownloadItem> {
        let item = self.downloads.iter_mut().find(|item| item.id == id)?;
        if !item.status.is_active() {
            return None;
        }
        item.status = DownloadStatus::Error;
        self.dirty = true;
        Some(&*item)
    }

    pub(crate) fn remove_download(&mut self, id: DownloadId) -> Option<DownloadItem> {
        let index = self.downloads.iter().position(|item| item.id == id)?;
        self.mark_dirty();
        Some(self.downloads.remove(index))
    }

    /// Drops every download that is no longer active and returns how many went.
    pub(crate) fn clear_finished(&mut self) -> usize {
        let before = self.downloads.len();
        self.downloads.retain(|item| item.status.is_active());
        let removed = before - self.downloads.len();
        if removed > 0 {
            self.mark_dirty();
        }
        removed
    }
}
