use std::io::{self, Write};

use anyhow::{bail, Context};
use clap::Parser;
use downloader_app::cli::Cli;
use downloader_app::config::AppConfig;
use downloader_app::platform::script::ScriptPlan;
use downloader_app::platform::ui::render;
use downloader_app::platform::{logging, run_app, RunMode};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    logging::initialize(cli.log.unwrap_or(config.log), config.log_level()?);

    let settings = config.core_settings()?;
    let simulation = config.simulation_settings()?;

    let mode = match &cli.url {
        Some(url) => RunMode::Scripted(ScriptPlan {
            url: url.clone(),
            quality: cli.quality.unwrap_or(settings.default_quality),
            format: cli.format.unwrap_or(settings.default_format),
            downloads: cli.downloads,
        }),
        None => RunMode::stdin(),
    };
    let scripted = matches!(mode, RunMode::Scripted(_));

    let mut out = io::stdout();
    let view = run_app(settings, simulation, mode, &mut out)?;

    if cli.json {
        writeln!(out, "{}", render::summary_json(&view)?)?;
    } else {
        for line in render::render(&view) {
            writeln!(out, "{line}")?;
        }
    }

    if scripted && view.video.is_none() {
        bail!("analysis did not produce any video information");
    }
    Ok(())
}
