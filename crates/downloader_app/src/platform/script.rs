use std::collections::VecDeque;

use downloader_core::{AppState, Format, Msg, Quality};

/// Parameters for a non-interactive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPlan {
    pub url: String,
    pub quality: Quality,
    pub format: Format,
    pub downloads: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Send(Msg),
    AwaitAnalysis,
    Download,
}

/// Replays a fixed sequence of user actions, pausing while analysis runs.
#[derive(Debug, Clone)]
pub struct Script {
    steps: VecDeque<Step>,
}

impl Script {
    pub fn new(plan: &ScriptPlan) -> Self {
        let mut steps = VecDeque::from([
            Step::Send(Msg::UrlChanged(plan.url.clone())),
            Step::Send(Msg::QualitySelected(plan.quality)),
            Step::Send(Msg::FormatSelected(plan.format)),
            Step::Send(Msg::AnalyzeClicked),
            Step::AwaitAnalysis,
        ]);
        steps.extend(std::iter::repeat(Step::Download).take(plan.downloads));
        Self { steps }
    }

    /// Next message to dispatch, or `None` while waiting or once finished.
    pub fn next_ready(&mut self, state: &AppState, now_ms: u64) -> Option<Msg> {
        loop {
            match self.steps.front()? {
                Step::AwaitAnalysis if state.is_analyzing() => return None,
                Step::AwaitAnalysis => {
                    self.steps.pop_front();
                }
                Step::Download => {
                    self.steps.pop_front();
                    return Some(Msg::DownloadClicked {
                        requested_at_ms: now_ms,
                    });
                }
                Step::Send(_) => {
                    if let Some(Step::Send(msg)) = self.steps.pop_front() {
                        return Some(msg);
                    }
                }
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }
}
