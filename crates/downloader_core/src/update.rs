use sim_logging::{sim_debug, sim_info, sim_warn};

use crate::{AppState, DeadlinePolicy, DownloadStatus, Effect, Msg, Notice};

/// Substrings a URL must contain to be accepted for analysis.
const SUPPORTED_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(url) => {
            state.set_url_input(url);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            let url = state.url_input().trim().to_string();
            // Mirrors the disabled Analyze button.
            if url.is_empty() {
                return (state, Vec::new());
            }
            if !is_supported_video_url(&url) {
                sim_debug!("Rejected analysis for unsupported url_len={}", url.len());
                return (state, vec![Effect::Notify(Notice::invalid_url())]);
            }

            let (token, replaced) = state.begin_analysis();
            let mut effects = Vec::with_capacity(2);
            if let Some(previous) = replaced {
                sim_info!("Analysis {:?} replaced by {:?}", previous, token);
                effects.push(Effect::CancelAnalysis { token: previous });
            }
            effects.push(Effect::StartAnalysis { token, url });
            effects
        }
        Msg::AnalysisFinished { token, info } => {
            if state.finish_analysis(token, info) {
                vec![Effect::Notify(Notice::analysis_complete())]
            } else {
                sim_debug!("Ignoring stale analysis result {:?}", token);
                Vec::new()
            }
        }
        Msg::AnalysisFailed { token, reason } => {
            if state.fail_analysis(token) {
                sim_warn!("Analysis {:?} failed: {}", token, reason);
                vec![Effect::Notify(Notice::analysis_failed(&reason))]
            } else {
                Vec::new()
            }
        }
        Msg::QualitySelected(quality) => {
            state.select_quality(quality);
            Vec::new()
        }
        Msg::FormatSelected(format) => {
            state.select_format(format);
            Vec::new()
        }
        Msg::DownloadClicked { requested_at_ms } => match state.push_download(requested_at_ms) {
            Some(item) => {
                sim_info!(
                    "Download {} started quality={} format={}",
                    item.id,
                    item.quality,
                    item.format
                );
                vec![
                    Effect::Notify(Notice::download_started(item.quality, item.format)),
                    Effect::StartProgress { id: item.id },
                ]
            }
            None => Vec::new(),
        },
        Msg::ProgressTick { id, step } => match state.advance_download(id, step) {
            Some(item) if item.status == DownloadStatus::Completed => {
                sim_info!("Download {} completed", item.id);
                vec![
                    Effect::Notify(Notice::download_completed(item)),
                    Effect::StopProgress { id },
                ]
            }
            _ => Vec::new(),
        },
        Msg::ProgressDeadline { id } => {
            let policy = state.settings().deadline_policy;
            match policy {
                DeadlinePolicy::Fail => match state.fail_download(id) {
                    Some(item) => {
                        sim_warn!("Download {} stalled at {}", item.id, item.progress);
                        vec![
                            Effect::Notify(Notice::download_stalled(item)),
                            Effect::StopProgress { id },
                        ]
                    }
                    None => vec![Effect::StopProgress { id }],
                },
                DeadlinePolicy::Abandon => {
                    if state.download(id).is_some_and(|item| item.status.is_active()) {
                        sim_warn!("Download {} abandoned before completion", id);
                    }
                    vec![Effect::StopProgress { id }]
                }
            }
        }
        Msg::RemoveClicked { id } => match state.remove_download(id) {
            Some(item) if item.status.is_active() => vec![Effect::StopProgress { id }],
            _ => Vec::new(),
        },
        Msg::ClearFinishedClicked => {
            let removed = state.clear_finished();
            if removed > 0 {
                sim_debug!("Cleared {} finished downloads", removed);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Accepts any text naming a YouTube host; the URL is not otherwise parsed.
pub fn is_supported_video_url(url: &str) -> bool {
    SUPPORTED_HOSTS.iter().any(|host| url.contains(host))
}
