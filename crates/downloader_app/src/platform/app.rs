use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use downloader_core::{update, AppState, AppViewModel, CoreSettings, Msg};
use downloader_engine::SimulationSettings;
use sim_logging::{set_sim_tick, sim_debug, sim_info};

use super::effects::EffectRunner;
use super::input::{parse_command, Command, HELP};
use super::script::{Script, ScriptPlan};
use super::ui::render;

const RENDER_INTERVAL: Duration = Duration::from_millis(250);

/// Everything the message loop reacts to.
#[derive(Debug)]
pub enum AppInput {
    Core(Msg),
    Command(Command),
    InvalidCommand(String),
    InputClosed,
}

/// Source of commands for interactive mode, read line by line.
pub type CommandSource = Box<dyn BufRead + Send>;

pub enum RunMode {
    Scripted(ScriptPlan),
    Interactive(CommandSource),
}

impl RunMode {
    /// Interactive mode reading commands from the process stdin.
    pub fn stdin() -> Self {
        RunMode::Interactive(Box::new(io::BufReader::new(io::stdin())))
    }
}

/// Runs the message loop until the script finishes or the user quits, and
/// returns the final view.
///
/// Rendered output goes to `out`, one `writeln!` at a time. Passing a held
/// `StdoutLock` blocks every worker thread that logs to stdout.
pub fn run_app(
    settings: CoreSettings,
    simulation: SimulationSettings,
    mode: RunMode,
    out: &mut dyn Write,
) -> anyhow::Result<AppViewModel> {
    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let mut runner = EffectRunner::new(simulation, input_tx.clone());

    // Background tick to throttle rendering.
    let tick_tx = input_tx.clone();
    thread::spawn(move || {
        while tick_tx.send(AppInput::Core(Msg::Tick)).is_ok() {
            thread::sleep(RENDER_INTERVAL);
        }
    });

    let mut script = match mode {
        RunMode::Scripted(plan) => {
            sim_info!("Scripted run for {} download(s)", plan.downloads);
            Some(Script::new(&plan))
        }
        RunMode::Interactive(source) => {
            writeln!(out, "{HELP}")?;
            spawn_command_reader(source, input_tx);
            None
        }
    };

    let mut state = AppState::with_settings(settings);
    let mut loop_tick = 0u64;

    loop {
        if let Some(script) = script.as_mut() {
            while let Some(msg) = script.next_ready(&state, now_ms()) {
                state = dispatch(state, msg, &mut runner, out)?;
            }
            if script.is_finished() && !state.is_analyzing() && runner.live_tickers() == 0 {
                break;
            }
        }

        let Ok(input) = input_rx.recv() else {
            break;
        };
        loop_tick += 1;
        set_sim_tick(loop_tick);

        match input {
            AppInput::Core(msg) => {
                state = dispatch(state, msg, &mut runner, out)?;
            }
            AppInput::Command(Command::Quit) | AppInput::InputClosed => break,
            AppInput::Command(Command::Help) => writeln!(out, "{HELP}")?,
            AppInput::Command(Command::List) => {
                let view = state.view();
                for line in render::render(&view)
                    .into_iter()
                    .chain(render::render_settings(&view))
                {
                    writeln!(out, "{line}")?;
                }
            }
            AppInput::Command(command) => {
                if let Some(msg) = command.into_msg(now_ms()) {
                    state = dispatch(state, msg, &mut runner, out)?;
                }
            }
            AppInput::InvalidCommand(error) => writeln!(out, "{error}")?,
        }
    }

    runner.shutdown();
    sim_info!("Message loop finished after {} inputs", loop_tick);
    Ok(state.view())
}

fn dispatch(
    state: AppState,
    msg: Msg,
    runner: &mut EffectRunner,
    out: &mut dyn Write,
) -> io::Result<AppState> {
    let render_now = matches!(msg, Msg::Tick);
    let (mut state, effects) = update(state, msg);

    for notice in runner.enqueue(effects) {
        sim_info!("notice {:?}: {}", notice.severity, notice.title);
        writeln!(out, "{}", render::render_notice(&notice))?;
    }

    if render_now && state.consume_dirty() {
        for line in render::render(&state.view()) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(state)
}

fn spawn_command_reader(source: CommandSource, input_tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        for line in source.lines() {
            let Ok(line) = line else {
                break;
            };
            let input = match parse_command(&line) {
                Ok(Some(command)) => AppInput::Command(command),
                Ok(None) => continue,
                Err(error) => AppInput::InvalidCommand(error),
            };
            if input_tx.send(input).is_err() {
                return;
            }
        }
        sim_debug!("Command input closed");
        let _ = input_tx.send(AppInput::InputClosed);
    });
}

fn now_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}
