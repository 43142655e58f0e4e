use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

pub type AnalysisId = u64;
pub type DownloadKey = u64;

/// Metadata reported by an [`crate::Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub duration: String,
    pub channel: String,
    pub views: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("analysis failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisCompleted {
        id: AnalysisId,
        result: Result<VideoMetadata, AnalysisError>,
    },
    /// One ticker interval elapsed; `step` is in hundredths of a percent.
    ProgressTick { download: DownloadKey, step: u32 },
    DeadlineReached { download: DownloadKey },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSettings {
    pub analysis_delay: Duration,
    pub tick_interval: Duration,
    /// Exclusive upper bound of a tick's step, in hundredths of a percent.
    pub max_step: u32,
    /// Lifetime of a ticker, measured from its own start.
    pub deadline: Duration,
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_secs(2),
            tick_interval: Duration::from_millis(500),
            max_step: 1_500,
            deadline: Duration::from_secs(8),
            seed: None,
        }
    }
}

impl SimulationSettings {
    /// Random source for one ticker; reproducible per download when seeded.
    pub(crate) fn rng_for(&self, download: DownloadKey) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ download),
            None => StdRng::from_entropy(),
        }
    }
}
