use std::path::PathBuf;

use clap::Parser;
use downloader_core::{Format, Quality};

use crate::platform::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulated video downloader", long_about = None)]
pub struct Cli {
    /// Video URL to analyze and download; omit for interactive mode
    #[arg(short, long)]
    pub url: Option<String>,

    /// Quality for scripted downloads (360p, 720p, 1080p, 4K)
    #[arg(short, long)]
    pub quality: Option<Quality>,

    /// Format for scripted downloads (mp4, mp3)
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Number of downloads to start once analysis finishes
    #[arg(short = 'n', long, default_value_t = 1)]
    pub downloads: usize,

    /// RON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where log output goes (overrides the config file)
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Print the final download list as JSON
    #[arg(long)]
    pub json: bool,
}
