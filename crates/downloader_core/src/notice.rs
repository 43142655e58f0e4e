use crate::{DownloadItem, Format, Quality};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A transient, non-blocking notification for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    fn new(severity: Severity, title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity,
        }
    }

    pub(crate) fn invalid_url() -> Self {
        Self::new(
            Severity::Error,
            "Invalid URL",
            "Please enter a valid YouTube URL",
        )
    }

    pub(crate) fn analysis_complete() -> Self {
        Self::new(
            Severity::Success,
            "Video analysis complete",
            "Video information has been retrieved",
        )
    }

    pub(crate) fn analysis_failed(reason: &str) -> Self {
        Self::new(Severity::Error, "Video analysis failed", reason)
    }

    pub(crate) fn download_started(quality: Quality, format: Format) -> Self {
        Self::new(
            Severity::Info,
            "Download started",
            format!(
                "Downloading in {} {}",
                quality,
                format.as_str().to_ascii_uppercase()
            ),
        )
    }

    pub(crate) fn download_completed(item: &DownloadItem) -> Self {
        Self::new(Severity::Success, "Download complete", item.title.clone())
    }

    pub(crate) fn download_stalled(item: &DownloadItem) -> Self {
        Self::new(
            Severity::Error,
            "Download failed",
            format!("{} stopped at {}", item.title, item.progress),
        )
    }
}
