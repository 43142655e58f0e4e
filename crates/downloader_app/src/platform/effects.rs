use std::collections::HashSet;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use downloader_core::{AnalysisToken, DownloadId, Effect, Msg, Notice, VideoInfo};
use downloader_engine::{EngineEvent, EngineHandle, SimulationSettings, VideoMetadata};
use sim_logging::{sim_debug, sim_info, sim_warn};

use super::app::AppInput;

/// Executes core effects against the engine and feeds engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    live_tickers: HashSet<DownloadId>,
}

impl EffectRunner {
    pub fn new(settings: SimulationSettings, input_tx: mpsc::Sender<AppInput>) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self {
            engine,
            live_tickers: HashSet::new(),
        };
        runner.spawn_event_loop(input_tx);
        runner
    }

    /// Forwards engine-bound effects and hands notifications back to the caller
    /// for display.
    pub fn enqueue(&mut self, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::Notify(notice) => notices.push(notice),
                Effect::StartAnalysis { token, url } => {
                    sim_info!("StartAnalysis token={} url_len={}", token.0, url.len());
                    self.engine.start_analysis(token.0, url);
                }
                Effect::CancelAnalysis { token } => {
                    self.engine.cancel_analysis(token.0);
                }
                Effect::StartProgress { id } => {
                    self.live_tickers.insert(id);
                    self.engine.start_ticker(id.0);
                }
                Effect::StopProgress { id } => {
                    self.live_tickers.remove(&id);
                    self.engine.stop_ticker(id.0);
                }
            }
        }
        notices
    }

    /// Number of downloads whose ticker has not been stopped yet.
    pub fn live_tickers(&self) -> usize {
        self.live_tickers.len()
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }

    fn spawn_event_loop(&self, input_tx: mpsc::Sender<AppInput>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                if input_tx.send(AppInput::Core(map_event(event))).is_err() {
                    sim_debug!("Message loop gone; engine event forwarding stops");
                    break;
                }
            } else if engine.is_running() {
                thread::sleep(Duration::from_millis(20));
            } else {
                break;
            }
        });
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted { id, result } => match result {
            Ok(metadata) => Msg::AnalysisFinished {
                token: AnalysisToken(id),
                info: map_metadata(metadata),
            },
            Err(err) => {
                sim_warn!("Analysis {} failed: {}", id, err);
                Msg::AnalysisFailed {
                    token: AnalysisToken(id),
                    reason: err.to_string(),
                }
            }
        },
        EngineEvent::ProgressTick { download, step } => Msg::ProgressTick {
            id: DownloadId(download),
            step,
        },
        EngineEvent::DeadlineReached { download } => Msg::ProgressDeadline {
            id: DownloadId(download),
        },
    }
}

fn map_metadata(metadata: VideoMetadata) -> VideoInfo {
    VideoInfo {
        id: metadata.id,
        title: metadata.title,
        thumbnail: metadata.thumbnail,
        duration: metadata.duration,
        channel: metadata.channel,
        views: metadata.views,
    }
}
