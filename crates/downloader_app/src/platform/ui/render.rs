use downloader_core::{AppViewModel, DownloadRowView, DownloadStatus, Notice, Severity};
use serde::Serialize;

const BAR_WIDTH: usize = 20;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let analyze_state = if view.analyzing {
        "analyzing..."
    } else if view.can_analyze() {
        "ready"
    } else {
        "enter a URL"
    };
    lines.push(format!("URL: {} [{}]", display_or_dash(&view.url_input), analyze_state));

    if let Some(video) = &view.video {
        lines.push(format!("Video: {} ({})", video.title, video.channel));
        lines.push(format!("       {} • {}", video.duration, video.views));
        lines.push(format!(
            "Selected: {} ({}) {}",
            view.quality,
            view.quality.label(),
            format_label(view.format.as_str(), view.format.is_audio_only())
        ));
    }

    if !view.downloads.is_empty() {
        lines.push(format!(
            "Downloads ({}): {} active, {} completed, {} failed",
            view.download_count, view.active_count, view.completed_count, view.failed_count
        ));
        lines.extend(view.downloads.iter().map(render_row));
    }

    lines
}

pub fn render_row(row: &DownloadRowView) -> String {
    let tail = match row.status {
        DownloadStatus::Downloading => {
            format!("{} {}%", progress_bar(row.percent), row.percent)
        }
        DownloadStatus::Completed => "✓ complete".to_string(),
        DownloadStatus::Error => format!("✗ failed at {}%", row.percent),
    };
    format!(
        "  [{}] {} | {} {} | {}",
        row.id, row.title, row.quality, row.format_badge, tail
    )
}

pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.severity {
        Severity::Info => "i",
        Severity::Success => "+",
        Severity::Error => "!",
    };
    format!("({marker}) {}: {}", notice.title, notice.description)
}

pub fn render_settings(view: &AppViewModel) -> Vec<String> {
    let settings = &view.settings;
    vec![
        format!("Parallel downloads: {}", settings.parallel_downloads),
        format!("Default quality: {}", settings.default_quality),
        format!(
            "Default format: {}",
            settings.default_format.as_str().to_ascii_uppercase()
        ),
        format!("Storage: {}", settings.storage),
    ]
}

#[derive(Debug, Serialize)]
struct DownloadSummary<'a> {
    id: u64,
    title: &'a str,
    quality: &'a str,
    format: &'a str,
    progress: u32,
    status: &'a str,
}

/// Final download list as pretty-printed JSON.
pub fn summary_json(view: &AppViewModel) -> serde_json::Result<String> {
    let rows: Vec<DownloadSummary<'_>> = view
        .downloads
        .iter()
        .map(|row| DownloadSummary {
            id: row.id.0,
            title: &row.title,
            quality: row.quality.as_str(),
            format: &row.format_badge,
            progress: row.percent,
            status: row.status.as_str(),
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn format_label(format: &str, audio_only: bool) -> String {
    let kind = if audio_only { "audio" } else { "video" };
    format!("{} ({kind})", format.to_ascii_uppercase())
}

fn display_or_dash(text: &str) -> &str {
    if text.trim().is_empty() {
        "-"
    } else {
        text
    }
}
