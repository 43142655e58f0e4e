use rand::Rng;
use sim_logging::sim_trace;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::sink::EventSink;
use crate::{DownloadKey, EngineEvent, SimulationSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerExit {
    Cancelled,
    Deadline,
}

/// Emits a random progress step every interval until cancelled or the
/// deadline passes. A tick due at the deadline itself is not emitted.
pub async fn run_ticker(
    download: DownloadKey,
    settings: &SimulationSettings,
    cancel: &CancellationToken,
    sink: &dyn EventSink,
) -> TickerExit {
    let mut rng = settings.rng_for(download);
    let start = Instant::now();
    let deadline = time::sleep_until(start + settings.deadline);
    tokio::pin!(deadline);

    let mut interval = time::interval_at(start + settings.tick_interval, settings.tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                sim_trace!("Ticker {} cancelled", download);
                return TickerExit::Cancelled;
            }
            _ = &mut deadline => {
                sink.emit(EngineEvent::DeadlineReached { download });
                return TickerExit::Deadline;
            }
            _ = interval.tick() => {
                let step = if settings.max_step == 0 {
                    0
                } else {
                    rng.gen_range(0..settings.max_step)
                };
                sink.emit(EngineEvent::ProgressTick { download, step });
            }
        }
    }
}
