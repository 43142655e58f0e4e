use downloader_app::platform::script::{Script, ScriptPlan};
use downloader_core::{update, AnalysisToken, AppState, Format, Msg, Quality, VideoInfo};

fn plan(downloads: usize) -> ScriptPlan {
    ScriptPlan {
        url: "https://www.youtube.com/watch?v=abc".to_string(),
        quality: Quality::P1080,
        format: Format::Mp3,
        downloads,
    }
}

fn sample_info() -> VideoInfo {
    VideoInfo {
        id: "1".to_string(),
        title: "Amazing YouTube Video - Sample Title".to_string(),
        thumbnail: "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
        duration: "3:45".to_string(),
        channel: "Sample Channel".to_string(),
        views: "1.2M views".to_string(),
    }
}

#[test]
fn script_waits_for_analysis_before_downloading() {
    let mut script = Script::new(&plan(2));
    let mut state = AppState::new();

    let mut sent = Vec::new();
    while let Some(msg) = script.next_ready(&state, 100) {
        let (next, _) = update(state, msg.clone());
        state = next;
        sent.push(msg);
    }
    assert_eq!(
        sent,
        vec![
            Msg::UrlChanged("https://www.youtube.com/watch?v=abc".to_string()),
            Msg::QualitySelected(Quality::P1080),
            Msg::FormatSelected(Format::Mp3),
            Msg::AnalyzeClicked,
        ]
    );
    assert!(state.is_analyzing());
    assert!(!script.is_finished());

    let (state, _) = update(
        state,
        Msg::AnalysisFinished {
            token: AnalysisToken(1),
            info: sample_info(),
        },
    );
    assert_eq!(
        script.next_ready(&state, 100),
        Some(Msg::DownloadClicked {
            requested_at_ms: 100
        })
    );
    assert_eq!(
        script.next_ready(&state, 101),
        Some(Msg::DownloadClicked {
            requested_at_ms: 101
        })
    );
    assert_eq!(script.next_ready(&state, 102), None);
    assert!(script.is_finished());
}

#[test]
fn zero_downloads_finishes_after_analysis() {
    let mut script = Script::new(&plan(0));
    let state = AppState::new();
    for _ in 0..4 {
        assert!(script.next_ready(&state, 0).is_some());
    }
    // Nothing is analyzing in this state, so the wait resolves at once.
    assert_eq!(script.next_ready(&state, 0), None);
    assert!(script.is_finished());
}
