//! cameo-console: a simple configurable output console.
//!
//! Initialize with verbose and/or debug modes, then use it throughout a
//! program to write simple information to stdout and stderr. Debug output
//! that users would not normally see and a verbose mode for command line
//! tools are the usual cases.
//!
//! ```
//! use cameo_console::{Console, LeveledConsole, Outputs, args, testing::CaptureWriter};
//! use std::sync::Arc;
//!
//! let out = CaptureWriter::new();
//! let outputs = Arc::new(Outputs::with_sinks(out.clone(), CaptureWriter::new()));
//! let con = LeveledConsole::with_outputs(true, false, outputs);
//!
//! con.verbose(&args!["checksum ", [0x0Au8, 0xFF]]).unwrap();
//! con.debug(&args!["hidden"]).unwrap();
//! assert_eq!(out.lines(), vec!["checksum 0x0AFF"]);
//! ```

pub mod app;
pub mod args;
pub mod config;
pub mod console;
pub mod errors;
mod macros;
pub mod testing;

pub use app::run_app;
pub use config::ConsoleConfig;
pub use console::{
    Arg, Console, Level, LeveledConsole, MockConsole, NullConsole, Outputs, SharedConsole,
    Target, format_args_line,
};
pub use errors::ConsoleError;
