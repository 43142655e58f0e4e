use downloader_core::{
    update, AppState, CoreSettings, DeadlinePolicy, DownloadId, DownloadStatus, Effect, Format,
    Msg, Progress, Quality, Severity, VideoInfo,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    sim_logging::initialize_for_tests();
}

fn analyzed(settings: CoreSettings) -> AppState {
    let state = AppState::with_settings(settings);
    let (state, _) = update(
        state,
        Msg::UrlChanged("https://www.youtube.com/watch?v=abc".to_string()),
    );
    let (state, effects) = update(state, Msg::AnalyzeClicked);
    let token = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartAnalysis { token, .. } => Some(*token),
            _ => None,
        })
        .expect("start analysis effect");
    let (state, _) = update(
        state,
        Msg::AnalysisFinished {
            token,
            info: VideoInfo {
                id: "1".to_string(),
                title: "Amazing YouTube Video - Sample Title".to_string(),
                thumbnail: "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
                duration: "3:45".to_string(),
                channel: "Sample Channel".to_string(),
                views: "1.2M views".to_string(),
            },
        },
    );
    state
}

fn start_download(state: AppState, at_ms: u64) -> (AppState, DownloadId, Vec<Effect>) {
    let (state, effects) = update(state, Msg::DownloadClicked { requested_at_ms: at_ms });
    let id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartProgress { id } => Some(*id),
            _ => None,
        })
        .expect("start progress effect");
    (state, id, effects)
}

fn tick(state: AppState, id: DownloadId, step: u32) -> (AppState, Vec<Effect>) {
    update(state, Msg::ProgressTick { id, step })
}

#[test]
fn download_without_video_is_noop() {
    init_logging();
    let state = AppState::new();
    let (mut next, effects) = update(
        state.clone(),
        Msg::DownloadClicked {
            requested_at_ms: 1_700_000_000_000,
        },
    );

    assert!(effects.is_empty());
    assert!(next.downloads().is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn end_to_end_1080p_mp3_download() {
    init_logging();
    let state = analyzed(CoreSettings::default());
    let (state, _) = update(state, Msg::QualitySelected(Quality::P1080));
    let (state, _) = update(state, Msg::FormatSelected(Format::Mp3));

    let (state, id, effects) = start_download(state, 1_700_000_000_000);
    assert_eq!(id, DownloadId(1_700_000_000_000));
    let started = match &effects[0] {
        Effect::Notify(notice) => notice,
        other => panic!("unexpected effect {other:?}"),
    };
    assert_eq!(started.description, "Downloading in 1080p MP3");

    let item = &state.downloads()[0];
    assert_eq!(item.quality, Quality::P1080);
    assert_eq!(item.format, Format::Mp3);
    assert_eq!(item.progress, Progress::ZERO);
    assert_eq!(item.status, DownloadStatus::Downloading);
    assert_eq!(item.title, "Amazing YouTube Video - Sample Title");

    let mut state = state;
    let mut last = Progress::ZERO;
    let mut stop_effects = Vec::new();
    for step in [1_499, 700, 1_200, 0, 1_499, 1_499, 1_499, 1_499, 1_499, 1_499] {
        let (next, effects) = tick(state, id, step);
        state = next;
        let progress = state.download(id).unwrap().progress;
        assert!(progress >= last);
        last = progress;
        stop_effects.extend(effects);
    }

    let item = state.download(id).unwrap();
    assert_eq!(item.progress, Progress::COMPLETE);
    assert_eq!(item.status, DownloadStatus::Completed);
    assert!(stop_effects.contains(&Effect::StopProgress { id }));
    assert_eq!(state.view().downloads[0].percent, 100);
    assert_eq!(state.view().downloads[0].format_badge, "MP3");
}

#[test]
fn new_downloads_go_to_the_head_with_unique_ids() {
    init_logging();
    let state = analyzed(CoreSettings::default());
    let (state, first, _) = start_download(state, 5_000);
    let (state, _) = update(state, Msg::QualitySelected(Quality::P360));
    // Same millisecond: the id is bumped rather than reused.
    let (state, second, _) = start_download(state, 5_000);
    // Clock went backwards.
    let (state, third, _) = start_download(state, 4_000);

    assert_eq!(first, DownloadId(5_000));
    assert_eq!(second, DownloadId(5_001));
    assert_eq!(third, DownloadId(5_002));

    let ids: Vec<_> = state.downloads().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![third, second, first]);
    assert_eq!(state.downloads()[2].quality, Quality::P720);
    assert_eq!(state.downloads()[1].quality, Quality::P360);
}

#[test]
fn progress_is_clamped_and_completed_items_are_frozen() {
    init_logging();
    let state = analyzed(CoreSettings::default());
    let (state, id, _) = start_download(state, 1);

    let (state, effects) = tick(state, id, 20_000);
    assert_eq!(state.download(id).unwrap().progress, Progress::COMPLETE);
    assert_eq!(effects.len(), 2);
    let completed = match &effects[0] {
        Effect::Notify(notice) => notice,
        other => panic!("unexpected effect {other:?}"),
    };
    assert_eq!(completed.severity, Severity::Success);

    let before = state.download(id).cloned();
    let (mut state, effects) = tick(state, id, 500);
    assert!(effects.is_empty());
    assert_eq!(state.download(id).cloned(), before);

    let _ = state.consume_dirty();
    let (mut state, effects) = update(state, Msg::ProgressDeadline { id });
    assert_eq!(effects, vec![Effect::StopProgress { id }]);
    assert_eq!(
        state.download(id).unwrap().status,
        DownloadStatus::Completed
    );
    assert!(!state.consume_dirty());
}

#[test]
fn ticks_only_move_the_addressed_item() {
    init_logging();
    let state = analyzed(CoreSettings::default());
    let (state, older, _) = start_download(state, 10);
    let (state, newer, _) = start_download(state, 20);

    let (state, _) = tick(state, older, 900);
    assert_eq!(state.download(older).unwrap().progress.hundredths(), 900);
    assert_eq!(state.download(newer).unwrap().progress, Progress::ZERO);
}

#[test]
fn tick_for_unknown_item_is_ignored() {
    init_logging();
    let state = analyzed(CoreSettings::default());
    let (mut state, _, _) = start_download(state, 10);
    let _ = state.consume_dirty();

    let (mut state, effects) = tick(state, DownloadId(999), 1_000);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn deadline_fails_active_item_by_default() {
    init_logging();
    let state = analyzed(CoreSettings::default());
    let (state, id, _) = start_download(state, 10);
    let (state, _) = tick(state, id, 4_321);

    let (state, effects) = update(state, Msg::ProgressDeadline { id });
    let item = state.download(id).unwrap();
    assert_eq!(item.status, DownloadStatus::Error);
    assert_eq!(item.progress.hundredths(), 4_321);
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[1], Effect::StopProgress { id });
    assert_eq!(state.view().failed_count, 1);

    // Errors are terminal too.
    let (state, effects) = tick(state, id, 1_000);
    assert!(effects.is_empty());
    assert_eq!(state.download(id).unwrap().progress.hundredths(), 4_321);
}

#[test]
fn deadline_abandons_item_when_configured() {
    init_logging();
    let settings = CoreSettings {
        deadline_policy: DeadlinePolicy::Abandon,
        ..CoreSettings::default()
    };
    let state = analyzed(settings);
    let (state, id, _) = start_download(state, 10);
    let (state, _) = tick(state, id, 2_500);

    let (state, effects) = update(state, Msg::ProgressDeadline { id });
    assert_eq!(effects, vec![Effect::StopProgress { id }]);
    let item = state.download(id).unwrap();
    assert_eq!(item.status, DownloadStatus::Downloading);
    assert_eq!(item.progress.hundredths(), 2_500);
}

#[test]
fn remove_deletes_exactly_one_item() {
    init_logging();
    let state = analyzed(CoreSettings::default());
    let (state, a, _) = start_download(state, 1);
    let (state, b, _) = start_download(state, 2);
    let (state, c, _) = start_download(state, 3);
    let (state, _) = tick(state, a, 300);
    let (state, _) = tick(state, c, 10_000);

    let survivors: Vec<_> = state
        .downloads()
        .iter()
        .filter(|item| item.id != b)
        .cloned()
        .collect();

    let (state, effects) = update(state, Msg::RemoveClicked { id: b });
    assert_eq!(effects, vec![Effect::StopProgress { id: b }]);
    assert_eq!(state.downloads(), survivors.as_slice());

    // Completed items have no ticker left to stop.
    let (state, effects) = update(state, Msg::RemoveClicked { id: c });
    assert!(effects.is_empty());
    assert_eq!(state.downloads().len(), 1);

    let (state, effects) = update(state, Msg::RemoveClicked { id: DownloadId(42) });
    assert!(effects.is_empty());
    assert_eq!(state.downloads().len(), 1);
}

#[test]
fn clear_finished_keeps_active_items() {
    init_logging();
    let state = analyzed(CoreSettings::default());
    let (state, done, _) = start_download(state, 1);
    let (state, failed, _) = start_download(state, 2);
    let (state, active, _) = start_download(state, 3);
    let (state, _) = tick(state, done, 10_000);
    let (state, _) = update(state, Msg::ProgressDeadline { id: failed });

    let (state, effects) = update(state, Msg::ClearFinishedClicked);
    assert!(effects.is_empty());
    let ids: Vec<_> = state.downloads().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![active]);
    assert!(state.has_active_downloads());
}

#[test]
fn configured_defaults_seed_the_selection() {
    init_logging();
    let settings = CoreSettings {
        default_quality: Quality::Uhd4k,
        default_format: Format::Mp3,
        ..CoreSettings::default()
    };
    let view = AppState::with_settings(settings).view();

    assert_eq!(view.quality, Quality::Uhd4k);
    assert_eq!(view.format, Format::Mp3);
    assert_eq!(view.settings.default_quality, Quality::Uhd4k);
    assert_eq!(view.settings.parallel_downloads, 3);
}

#[test]
fn quality_and_format_parse_from_display_strings() {
    assert_eq!("4k".parse::<Quality>(), Ok(Quality::Uhd4k));
    assert_eq!(" 1080P ".parse::<Quality>(), Ok(Quality::P1080));
    assert!("240p".parse::<Quality>().is_err());
    assert_eq!("MP3".parse::<Format>(), Ok(Format::Mp3));
    assert!("webm".parse::<Format>().is_err());
    assert_eq!(Quality::P720.to_string(), "720p");
    assert_eq!(Quality::P1080.label(), "Full HD");
    assert!(Format::Mp3.is_audio_only());
}

#[test]
fn progress_rounds_like_the_progress_label() {
    assert_eq!(Progress::from_hundredths(4_449).rounded(), 44);
    assert_eq!(Progress::from_hundredths(4_450).rounded(), 45);
    assert_eq!(Progress::from_hundredths(12_000), Progress::COMPLETE);
    assert_eq!(Progress::from_hundredths(9_990).advanced_by(50), Progress::COMPLETE);
    assert_eq!(Progress::from_hundredths(1_234).percent(), 12.34);
}
