use std::time::Duration;

use sim_logging::sim_debug;
use tokio_util::sync::CancellationToken;

use crate::sink::EventSink;
use crate::{AnalysisError, AnalysisId, EngineEvent, VideoMetadata};

#[async_trait::async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, url: &str) -> Result<VideoMetadata, AnalysisError>;
}

/// Sleeps for a fixed delay and returns the same sample metadata for every url.
#[derive(Debug, Clone)]
pub struct SimulatedAnalyzer {
    delay: Duration,
}

impl SimulatedAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn sample_metadata() -> VideoMetadata {
        VideoMetadata {
            id: "1".to_string(),
            title: "Amazing YouTube Video - Sample Title".to_string(),
            thumbnail: "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
            duration: "3:45".to_string(),
            channel: "Sample Channel".to_string(),
            views: "1.2M views".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Analyzer for SimulatedAnalyzer {
    async fn analyze(&self, _url: &str) -> Result<VideoMetadata, AnalysisError> {
        tokio::time::sleep(self.delay).await;
        Ok(Self::sample_metadata())
    }
}

/// Runs one analysis request and reports its result unless it is cancelled first.
pub async fn run_analysis(
    analyzer: &dyn Analyzer,
    id: AnalysisId,
    url: &str,
    cancel: &CancellationToken,
    sink: &dyn EventSink,
) {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            sim_debug!("Analysis {} cancelled", id);
        }
        result = analyzer.analyze(url) => {
            sink.emit(EngineEvent::AnalysisCompleted { id, result });
        }
    }
}
