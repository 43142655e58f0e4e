use downloader_core::{DownloadId, Format, Msg, Quality};

pub const HELP: &str = "\
Commands:
  url <text>       set the video URL
  analyze          analyze the current URL
  quality <q>      360p | 720p | 1080p | 4K
  format <f>       mp4 | mp3
  download         start a download of the analyzed video
  remove <id>      remove a download from the list
  clear            remove every finished download
  list             show the current state
  help             show this text
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Url(String),
    Analyze,
    Quality(Quality),
    Format(Format),
    Download,
    Remove(DownloadId),
    Clear,
    List,
    Help,
    Quit,
}

impl Command {
    /// The core message this command stands for; `None` for front-end-only commands.
    pub fn into_msg(self, now_ms: u64) -> Option<Msg> {
        match self {
            Command::Url(url) => Some(Msg::UrlChanged(url)),
            Command::Analyze => Some(Msg::AnalyzeClicked),
            Command::Quality(quality) => Some(Msg::QualitySelected(quality)),
            Command::Format(format) => Some(Msg::FormatSelected(format)),
            Command::Download => Some(Msg::DownloadClicked {
                requested_at_ms: now_ms,
            }),
            Command::Remove(id) => Some(Msg::RemoveClicked { id }),
            Command::Clear => Some(Msg::ClearFinishedClicked),
            Command::List | Command::Help | Command::Quit => None,
        }
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "url" => Command::Url(rest.to_string()),
        "analyze" | "a" => Command::Analyze,
        "quality" | "q" => Command::Quality(rest.parse().map_err(|err| format!("{err}"))?),
        "format" | "f" => Command::Format(rest.parse().map_err(|err| format!("{err}"))?),
        "download" | "d" => Command::Download,
        "remove" | "rm" => {
            let id = rest
                .parse::<u64>()
                .map_err(|_| format!("invalid download id {rest:?}"))?;
            Command::Remove(DownloadId(id))
        }
        "clear" => Command::Clear,
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}; type `help`")),
    };
    Ok(Some(command))
}
