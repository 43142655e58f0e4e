//! Downloader core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod notice;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use notice::{Notice, Severity};
pub use state::AppState;
pub use types::{
    AnalysisToken, CoreSettings, DeadlinePolicy, DownloadId, DownloadItem, DownloadStatus, Format,
    ParseFormatError, ParseQualityError, Progress, Quality, VideoInfo,
};
pub use update::{is_supported_video_url, update};
pub use view_model::{AppViewModel, DownloadRowView, SettingsView, PARALLEL_DOWNLOADS_HINT};
