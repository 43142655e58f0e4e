use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Time-based download identifier (milliseconds since the Unix epoch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DownloadId(pub u64);

impl fmt::Display for DownloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one analysis request so late results can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnalysisToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    P360,
    #[default]
    P720,
    P1080,
    Uhd4k,
}

impl Quality {
    pub const ALL: [Quality; 4] = [Quality::P360, Quality::P720, Quality::P1080, Quality::Uhd4k];

    pub fn as_str(self) -> &'static str {
        match self {
            Quality::P360 => "360p",
            Quality::P720 => "720p",
            Quality::P1080 => "1080p",
            Quality::Uhd4k => "4K",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quality::P360 => "SD",
            Quality::P720 => "HD",
            Quality::P1080 => "Full HD",
            Quality::Uhd4k => "Ultra HD",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quality {0:?} (expected 360p, 720p, 1080p or 4K)")]
pub struct ParseQualityError(pub String);

impl FromStr for Quality {
    type Err = ParseQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Quality::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseQualityError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Mp4,
    Mp3,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Mp4 => "mp4",
            Format::Mp3 => "mp3",
        }
    }

    /// Whether the format carries video or audio only.
    pub fn is_audio_only(self) -> bool {
        matches!(self, Format::Mp3)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format {0:?} (expected mp4 or mp3)")]
pub struct ParseFormatError(pub String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp4" => Ok(Format::Mp4),
            "mp3" => Ok(Format::Mp3),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// Download progress in hundredths of a percent, always within `0..=10_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Progress(u32);

impl Progress {
    pub const ZERO: Progress = Progress(0);
    pub const COMPLETE: Progress = Progress(10_000);

    pub fn from_hundredths(value: u32) -> Self {
        Self(value.min(Self::COMPLETE.0))
    }

    pub fn hundredths(self) -> u32 {
        self.0
    }

    pub fn percent(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Percentage rounded half-up, as shown next to a progress bar.
    pub fn rounded(self) -> u32 {
        (self.0 + 50) / 100
    }

    pub fn is_complete(self) -> bool {
        self.0 >= Self::COMPLETE.0
    }

    /// Adds `step` hundredths, saturating at 100%.
    pub fn advanced_by(self, step: u32) -> Self {
        Self::from_hundredths(self.0.saturating_add(step))
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.rounded())
    }
}

/// Metadata produced by a finished analysis. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub duration: String,
    pub channel: String,
    pub views: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DownloadStatus {
    Downloading,
    Completed,
    Error,
}

impl DownloadStatus {
    pub fn is_active(self) -> bool {
        self == DownloadStatus::Downloading
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DownloadStatus::Downloading => "downloading",
            DownloadStatus::Completed => "completed",
            DownloadStatus::Error => "error",
        }
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadItem {
    pub id: DownloadId,
    pub title: String,
    pub progress: Progress,
    pub status: DownloadStatus,
    pub format: Format,
    pub quality: Quality,
}

/// What happens to a download whose ticker ran out before reaching 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeadlinePolicy {
    /// Mark the item as failed.
    #[default]
    Fail,
    /// Leave the item downloading with frozen progress.
    Abandon,
}

/// Defaults the state machine starts from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoreSettings {
    pub default_quality: Quality,
    pub default_format: Format,
    pub deadline_policy: DeadlinePolicy,
}
