use crate::{AnalysisToken, DownloadId, Notice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a toast-style notification.
    Notify(Notice),
    StartAnalysis { token: AnalysisToken, url: String },
    CancelAnalysis { token: AnalysisToken },
    /// Begin ticking progress for one download.
    StartProgress { id: DownloadId },
    /// Drop the ticker for one download, whatever its state.
    StopProgress { id: DownloadId },
}
