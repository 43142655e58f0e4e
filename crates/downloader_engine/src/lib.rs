//! Downloader engine: simulated analysis and progress tickers on a tokio runtime.
mod analyze;
mod engine;
mod registry;
mod sink;
mod ticker;
mod types;

pub use analyze::{run_analysis, Analyzer, SimulatedAnalyzer};
pub use engine::EngineHandle;
pub use sink::{ChannelEventSink, EventSink};
pub use ticker::{run_ticker, TickerExit};
pub use types::{
    AnalysisError, AnalysisId, DownloadKey, EngineEvent, SimulationSettings, VideoMetadata,
};
