use clap::ValueEnum;
use std::fmt;

/// Visibility level of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Level {
    /// Always written to the standard sink
    #[default]
    Always,
    /// Always written to the error sink
    Error,
    /// Written to the standard sink when verbose or debug mode is on
    Verbose,
    /// Written to the standard sink when debug mode is on
    Debug,
}

/// Which of the two sinks a line goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Std,
    Err,
}

impl Level {
    /// Whether a message at this level produces output under the given modes.
    ///
    /// Debug mode is a superset of verbose mode.
    #[must_use]
    pub fn is_enabled(self, verbose: bool, debug: bool) -> bool {
        match self {
            Level::Always | Level::Error => true,
            Level::Verbose => verbose || debug,
            Level::Debug => debug,
        }
    }

    #[must_use]
    pub fn target(self) -> Target {
        match self {
            Level::Error => Target::Err,
            Level::Always | Level::Verbose | Level::Debug => Target::Std,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Always => "always",
            Level::Error => "error",
            Level::Verbose => "verbose",
            Level::Debug => "debug",
        };
        f.write_str(name)
    }
}
