#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlChanged(String),
    /// User asked for the current URL to be analyzed.
    AnalyzeClicked,
    /// Analyzer produced metadata for a request.
    AnalysisFinished {
        token: crate::AnalysisToken,
        info: crate::VideoInfo,
    },
    /// Analyzer gave up on a request.
    AnalysisFailed {
        token: crate::AnalysisToken,
        reason: String,
    },
    QualitySelected(crate::Quality),
    FormatSelected(crate::Format),
    /// User clicked Download; the front end stamps the wall clock.
    DownloadClicked { requested_at_ms: u64 },
    /// Scheduler advanced one download by `step` hundredths of a percent.
    ProgressTick {
        id: crate::DownloadId,
        step: u32,
    },
    /// Scheduler deadline for a download elapsed.
    ProgressDeadline { id: crate::DownloadId },
    /// User removed a download from the list.
    RemoveClicked { id: crate::DownloadId },
    /// User cleared every finished download from the list.
    ClearFinishedClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    NoOp,
}
