#![deny(missing_docs)]
//! Logging for the downloader workspace.
//!
//! The `sim_*` macros forward to the `log` facade and prefix each record with
//! the [`TickStamp`] of the calling thread. The app's message loop advances
//! the stamp once per dispatched input; engine and helper threads never set
//! it and log as `[-]`.

use std::cell::Cell;
use std::fmt;

#[doc(hidden)]
pub use log as __log;

thread_local! {
    static SIM_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Records the message-loop tick for the current thread.
pub fn set_sim_tick(tick: u64) {
    SIM_TICK.with(|v| v.set(tick));
}

/// Message-loop tick of the current thread; 0 when no loop runs on it.
pub fn get_sim_tick() -> u64 {
    SIM_TICK.with(|v| v.get())
}

/// Displays the current thread's loop tick as `[N]`, or `[-]` off the loop.
#[derive(Debug, Clone, Copy)]
pub struct TickStamp(pub u64);

impl TickStamp {
    /// Stamp for the calling thread.
    pub fn current() -> Self {
        TickStamp(get_sim_tick())
    }
}

impl fmt::Display for TickStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("[-]"),
            tick => write!(f, "[{tick}]"),
        }
    }
}

/// Logs at the given `log::Level`, stamped with the loop tick.
#[macro_export]
macro_rules! sim_log {
    ($level:expr, $($arg:tt)*) => {{
        $crate::__log::log!(
            $level,
            "{} {}",
            $crate::TickStamp::current(),
            format_args!($($arg)*)
        );
    }};
}

/// Trace-level [`sim_log!`].
#[macro_export]
macro_rules! sim_trace {
    ($($arg:tt)*) => { $crate::sim_log!($crate::__log::Level::Trace, $($arg)*) };
}

/// Debug-level [`sim_log!`].
#[macro_export]
macro_rules! sim_debug {
    ($($arg:tt)*) => { $crate::sim_log!($crate::__log::Level::Debug, $($arg)*) };
}

/// Info-level [`sim_log!`].
#[macro_export]
macro_rules! sim_info {
    ($($arg:tt)*) => { $crate::sim_log!($crate::__log::Level::Info, $($arg)*) };
}

/// Warn-level [`sim_log!`].
#[macro_export]
macro_rules! sim_warn {
    ($($arg:tt)*) => { $crate::sim_log!($crate::__log::Level::Warn, $($arg)*) };
}

/// Error-level [`sim_log!`].
#[macro_export]
macro_rules! sim_error {
    ($($arg:tt)*) => { $crate::sim_log!($crate::__log::Level::Error, $($arg)*) };
}

/// Installs a terminal logger for tests; later calls keep the first logger.
///
/// Info and below go to stdout, warnings and errors to stderr.
/// A level name (`trace`..`error`, `off`) in
/// `SIM_TEST_LOG` override the default of `debug`.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

    let level = std::env::var("SIM_TEST_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(log::LevelFilter::Debug);
    let config = ConfigBuilder::new()
        .set_time_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Never);
}
