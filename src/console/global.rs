//! Process-wide sinks, the shared console, and free functions that delegate to it.

use super::Console;
use super::arg::{Arg, format_args_line};
use super::level::{Level, Target};
use super::leveled::{LeveledConsole, emit};
use super::outputs::Outputs;
use crate::errors::ConsoleError;
use std::io::Write;
use std::sync::{Arc, OnceLock};

static SHARED_OUTPUTS: OnceLock<Arc<Outputs>> = OnceLock::new();

static SHARED_CONSOLE: SharedConsole = SharedConsole {
    flags: OnceLock::new(),
};

#[derive(Debug, Clone, Copy, Default)]
struct Flags {
    verbose: bool,
    debug: bool,
}

/// The process-wide sinks used by the shared console and by [`new`].
pub fn shared_outputs() -> &'static Arc<Outputs> {
    SHARED_OUTPUTS.get_or_init(|| Arc::new(Outputs::new()))
}

/// The process-wide console.
///
/// Its modes are fixed by the first call to [`init`]; until then both are off.
#[derive(Debug)]
pub struct SharedConsole {
    flags: OnceLock<Flags>,
}

impl SharedConsole {
    /// Whether [`init`] has configured this console.
    pub fn is_ready(&self) -> bool {
        self.flags.get().is_some()
    }

    fn flags(&self) -> Flags {
        self.flags.get().copied().unwrap_or_default()
    }

    fn write(&self, level: Level, args: &[Arg]) -> Result<(), ConsoleError> {
        let flags = self.flags();
        emit(shared_outputs(), level, flags.verbose, flags.debug, args)
    }
}

impl Console for SharedConsole {
    fn always(&self, args: &[Arg]) -> Result<(), ConsoleError> {
        self.write(Level::Always, args)
    }

    fn verbose(&self, args: &[Arg]) -> Result<(), ConsoleError> {
        self.write(Level::Verbose, args)
    }

    fn debug(&self, args: &[Arg]) -> Result<(), ConsoleError> {
        self.write(Level::Debug, args)
    }

    fn error(&self, args: &[Arg]) -> Result<(), ConsoleError> {
        self.write(Level::Error, args)
    }

    fn is_verbose(&self) -> bool {
        self.flags().verbose
    }

    fn is_debug(&self) -> bool {
        self.flags().debug
    }
}

/// Create an independent console. The shared console is left untouched.
#[must_use]
pub fn new(verbose: bool, debug: bool) -> LeveledConsole {
    LeveledConsole::new(verbose, debug)
}

/// Configure the shared console on first call; later calls return it unchanged.
pub fn init(verbose: bool, debug: bool) -> &'static SharedConsole {
    SHARED_CONSOLE.flags.get_or_init(|| Flags { verbose, debug });
    &SHARED_CONSOLE
}

/// The shared console, configured or not.
pub fn instance() -> &'static SharedConsole {
    &SHARED_CONSOLE
}

/// Send all later standard and error output to the given writers.
pub fn redirect_io<S, E>(std_sink: S, err_sink: E)
where
    S: Write + Send + 'static,
    E: Write + Send + 'static,
{
    shared_outputs().redirect(std_sink, err_sink);
}

/// Return both sinks to stdout and stderr after a [`redirect_io`].
pub fn reset_io() {
    shared_outputs().reset();
}

/// Return one sink to its inherited stream; the other keeps its redirect.
pub fn reset_sink(target: Target) {
    shared_outputs().reset_target(target);
}

/// Write one line to the standard sink regardless of modes.
///
/// # Errors
///
/// Returns an error if the sink fails to accept the line.
pub fn std_out(args: &[Arg]) -> Result<(), ConsoleError> {
    shared_outputs().write_line(Target::Std, &format_args_line(args))
}

/// Write one line to the error sink regardless of modes.
///
/// # Errors
///
/// Returns an error if the sink fails to accept the line.
pub fn std_err(args: &[Arg]) -> Result<(), ConsoleError> {
    shared_outputs().write_line(Target::Err, &format_args_line(args))
}

/// [`Console::always`] on the shared console.
///
/// # Errors
///
/// Returns an error if the sink fails to accept the line.
pub fn always(args: &[Arg]) -> Result<(), ConsoleError> {
    SHARED_CONSOLE.always(args)
}

/// [`Console::verbose`] on the shared console.
///
/// # Errors
///
/// Returns an error if the sink fails to accept the line.
pub fn verbose(args: &[Arg]) -> Result<(), ConsoleError> {
    SHARED_CONSOLE.verbose(args)
}

/// [`Console::debug`] on the shared console.
///
/// # Errors
///
/// Returns an error if the sink fails to accept the line.
pub fn debug(args: &[Arg]) -> Result<(), ConsoleError> {
    SHARED_CONSOLE.debug(args)
}

/// [`Console::error`] on the shared console.
///
/// # Errors
///
/// Returns an error if the sink fails to accept the line.
pub fn error(args: &[Arg]) -> Result<(), ConsoleError> {
    SHARED_CONSOLE.error(args)
}

pub fn is_verbose() -> bool {
    SHARED_CONSOLE.is_verbose()
}

pub fn is_debug() -> bool {
    SHARED_CONSOLE.is_debug()
}
