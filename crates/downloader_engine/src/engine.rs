use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use sim_logging::{sim_debug, sim_info};
use tokio_util::sync::CancellationToken;

use crate::analyze::{run_analysis, Analyzer, SimulatedAnalyzer};
use crate::registry::TaskRegistry;
use crate::sink::ChannelEventSink;
use crate::ticker::run_ticker;
use crate::{AnalysisId, DownloadKey, EngineEvent, SimulationSettings};

enum EngineCommand {
    StartAnalysis { id: AnalysisId, url: String },
    CancelAnalysis { id: AnalysisId },
    StartTicker { download: DownloadKey },
    StopTicker { download: DownloadKey },
    Shutdown,
}

/// Handle to the engine thread. Clones share the same thread and event queue.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
    running: Arc<AtomicBool>,
}

impl EngineHandle {
    pub fn new(settings: SimulationSettings) -> Self {
        let analyzer = Arc::new(SimulatedAnalyzer::new(settings.analysis_delay));
        Self::with_analyzer(settings, analyzer)
    }

    pub fn with_analyzer(settings: SimulationSettings, analyzer: Arc<dyn Analyzer>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let running = Arc::new(AtomicBool::new(true));
        let thread_running = running.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let settings = Arc::new(settings);
            let root = CancellationToken::new();
            let mut analyses: TaskRegistry<AnalysisId> = TaskRegistry::new(root.clone());
            let mut tickers: TaskRegistry<DownloadKey> = TaskRegistry::new(root);

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::StartAnalysis { id, url } => {
                        let cancel = analyses.child_token();
                        let task_cancel = cancel.clone();
                        let analyzer = analyzer.clone();
                        let sink = ChannelEventSink::new(event_tx.clone());
                        let handle = runtime.spawn(async move {
                            run_analysis(analyzer.as_ref(), id, &url, &task_cancel, &sink).await;
                        });
                        analyses.insert(id, cancel, handle);
                    }
                    EngineCommand::CancelAnalysis { id } => {
                        if analyses.cancel(id) {
                            sim_debug!("Cancelled analysis {}", id);
                        }
                    }
                    EngineCommand::StartTicker { download } => {
                        let cancel = tickers.child_token();
                        let task_cancel = cancel.clone();
                        let settings = settings.clone();
                        let sink = ChannelEventSink::new(event_tx.clone());
                        let handle = runtime.spawn(async move {
                            let exit = run_ticker(download, &settings, &task_cancel, &sink).await;
                            sim_debug!("Ticker {} exited: {:?}", download, exit);
                        });
                        tickers.insert(download, cancel, handle);
                        sim_debug!("Active tickers: {}", tickers.active());
                    }
                    EngineCommand::StopTicker { download } => {
                        if tickers.cancel(download) {
                            sim_debug!("Stopped ticker {}", download);
                        }
                    }
                    EngineCommand::Shutdown => break,
                }
            }

            analyses.shutdown();
            tickers.shutdown();
            thread_running.store(false, Ordering::Release);
            sim_info!("Engine stopped");
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            running,
        }
    }

    pub fn start_analysis(&self, id: AnalysisId, url: impl Into<String>) {
        self.send(EngineCommand::StartAnalysis {
            id,
            url: url.into(),
        });
    }

    pub fn cancel_analysis(&self, id: AnalysisId) {
        self.send(EngineCommand::CancelAnalysis { id });
    }

    pub fn start_ticker(&self, download: DownloadKey) {
        self.send(EngineCommand::StartTicker { download });
    }

    pub fn stop_ticker(&self, download: DownloadKey) {
        self.send(EngineCommand::StopTicker { download });
    }

    /// Cancels every running task and stops the engine thread.
    pub fn shutdown(&self) {
        self.send(EngineCommand::Shutdown);
    }

    /// False once the engine thread has shut down; queued events may remain.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        // A closed channel means the engine already shut down.
        let _ = self.cmd_tx.send(command);
    }
}
