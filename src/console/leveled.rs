use super::Console;
use super::arg::{Arg, format_args_line};
use super::global::shared_outputs;
use super::level::Level;
use super::outputs::Outputs;
use crate::errors::ConsoleError;
use std::fmt;
use std::sync::Arc;

/// An independent console with its own verbose/debug modes.
#[derive(Clone)]
pub struct LeveledConsole {
    verbose: bool,
    debug: bool,
    outputs: Arc<Outputs>,
}

impl LeveledConsole {
    /// Console writing through the process-wide sinks.
    #[must_use]
    pub fn new(verbose: bool, debug: bool) -> Self {
        Self::with_outputs(verbose, debug, Arc::clone(shared_outputs()))
    }

    /// Console writing through its own pair of sinks.
    #[must_use]
    pub fn with_outputs(verbose: bool, debug: bool, outputs: Arc<Outputs>) -> Self {
        Self {
            verbose,
            debug,
            outputs,
        }
    }

    /// Write `args` as one line if `level` is enabled for this console.
    ///
    /// # Errors
    ///
    /// Returns an error if the target sink fails to accept the line.
    pub fn write(&self, level: Level, args: &[Arg]) -> Result<(), ConsoleError> {
        emit(&self.outputs, level, self.verbose, self.debug, args)
    }
}

pub(crate) fn emit(
    outputs: &Outputs,
    level: Level,
    verbose: bool,
    debug: bool,
    args: &[Arg],
) -> Result<(), ConsoleError> {
    if !level.is_enabled(verbose, debug) {
        return Ok(());
    }
    outputs.write_line(level.target(), &format_args_line(args))
}

impl fmt::Debug for LeveledConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledConsole")
            .field("verbose", &self.verbose)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl Console for LeveledConsole {
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
        self.verbose
    }

    fn is_debug(&self) -> bool {
        self.debug
    }
}

/// Stand-in used when no console was configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConsole;

impl Console for NullConsole {
    fn always(&self, _args: &[Arg]) -> Result<(), ConsoleError> {
        Ok(())
    }

    fn verbose(&self, _args: &[Arg]) -> Result<(), ConsoleError> {
        Ok(())
    }

    fn debug(&self, _args: &[Arg]) -> Result<(), ConsoleError> {
        Ok(())
    }

    fn error(&self, _args: &[Arg]) -> Result<(), ConsoleError> {
        Ok(())
    }

    fn is_verbose(&self) -> bool {
        false
    }

    fn is_debug(&self) -> bool {
        false
    }
}
