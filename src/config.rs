use crate::args::Args;
use crate::console::{LeveledConsole, SharedConsole, global};
use crate::errors::ConsoleError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Console modes, loadable from JSON such as `{"verbose": true, "debug": false}`.
///
/// Missing keys read as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub verbose: bool,
    pub debug: bool,
}

impl ConsoleConfig {
    #[must_use]
    pub fn new(verbose: bool, debug: bool) -> Self {
        Self { verbose, debug }
    }

    /// Parse a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid config object.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid config object.
    pub fn from_file(path: &Path) -> Result<Self, ConsoleError> {
        let content = fs::read_to_string(path).map_err(|source| ConsoleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|source| ConsoleError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Turn on any mode that is on in `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            verbose: self.verbose || other.verbose,
            debug: self.debug || other.debug,
        }
    }

    /// Independent console with these modes.
    #[must_use]
    pub fn build(&self) -> LeveledConsole {
        global::new(self.verbose, self.debug)
    }

    /// Configure the shared console with these modes, if it is not configured yet.
    pub fn init(&self) -> &'static SharedConsole {
        global::init(self.verbose, self.debug)
    }
}

impl From<&Args> for ConsoleConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.verbose, args.debug)
    }
}
