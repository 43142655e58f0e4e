use downloader_app::platform::input::{parse_command, Command};
use downloader_core::{DownloadId, Format, Msg, Quality};
use pretty_assertions::assert_eq;

#[test]
fn parses_every_command() {
    assert_eq!(
        parse_command("url https://youtu.be/abc").unwrap(),
        Some(Command::Url("https://youtu.be/abc".to_string()))
    );
    assert_eq!(parse_command("  analyze ").unwrap(), Some(Command::Analyze));
    assert_eq!(
        parse_command("quality 4K").unwrap(),
        Some(Command::Quality(Quality::Uhd4k))
    );
    assert_eq!(
        parse_command("FORMAT mp3").unwrap(),
        Some(Command::Format(Format::Mp3))
    );
    assert_eq!(parse_command("d").unwrap(), Some(Command::Download));
    assert_eq!(
        parse_command("remove 1700000000000").unwrap(),
        Some(Command::Remove(DownloadId(1_700_000_000_000)))
    );
    assert_eq!(parse_command("clear").unwrap(), Some(Command::Clear));
    assert_eq!(parse_command("ls").unwrap(), Some(Command::List));
    assert_eq!(parse_command("?").unwrap(), Some(Command::Help));
    assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
    assert_eq!(parse_command("   ").unwrap(), None);
}

#[test]
fn rejects_bad_arguments() {
    assert!(parse_command("quality 240p").is_err());
    assert!(parse_command("format webm").is_err());
    assert!(parse_command("remove abc").is_err());
    assert!(parse_command("fly").is_err());
}

#[test]
fn url_keeps_inner_text_verbatim() {
    assert_eq!(
        parse_command("url   some text with spaces  ").unwrap(),
        Some(Command::Url("some text with spaces".to_string()))
    );
    assert_eq!(parse_command("url").unwrap(), Some(Command::Url(String::new())));
}

#[test]
fn commands_map_to_core_messages() {
    assert_eq!(
        Command::Download.into_msg(42),
        Some(Msg::DownloadClicked { requested_at_ms: 42 })
    );
    assert_eq!(
        Command::Remove(DownloadId(3)).into_msg(0),
        Some(Msg::RemoveClicked { id: DownloadId(3) })
    );
    assert_eq!(Command::Clear.into_msg(0), Some(Msg::ClearFinishedClicked));
    assert_eq!(Command::List.into_msg(0), None);
    assert_eq!(Command::Quit.into_msg(0), None);
}
