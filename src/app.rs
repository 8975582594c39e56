use crate::args::Args;
use crate::config::ConsoleConfig;
use crate::console::{Arg, Console, Level, SharedConsole};
use crate::errors::ConsoleError;
use std::io::BufRead;

/// Configure the shared console from the config file (if any) and the command-line flags.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or parsed.
pub fn console_from_args(args: &Args) -> Result<&'static SharedConsole, ConsoleError> {
    let mut config = ConsoleConfig::from(args);
    if let Some(path) = &args.config {
        config = config.merge(ConsoleConfig::from_file(path)?);
    }
    Ok(config.init())
}

/// Write one message at `level` through `console`.
///
/// # Errors
///
/// Returns an error if the console's sink rejects the line.
pub fn write_at(console: &dyn Console, level: Level, args: &[Arg]) -> Result<(), ConsoleError> {
    match level {
        Level::Always => console.always(args),
        Level::Error => console.error(args),
        Level::Verbose => console.verbose(args),
        Level::Debug => console.debug(args),
    }
}

/// Write every message from the command line, or every line of `input` when none
/// were given, at the requested level. Returns the number of messages handled.
///
/// # Errors
///
/// Returns an error if reading `input` fails or a sink rejects a line.
pub fn run_app<R: BufRead>(
    args: &Args,
    console: &dyn Console,
    input: R,
) -> Result<usize, ConsoleError> {
    let to_arg = |message: String| {
        if args.hex {
            Arg::Bytes(message.into_bytes())
        } else {
            Arg::Text(message)
        }
    };

    let mut count = 0;
    if args.messages.is_empty() {
        for line in input.lines() {
            write_at(console, args.level, &[to_arg(line?)])?;
            count += 1;
        }
    } else {
        for message in &args.messages {
            write_at(console, args.level, &[to_arg(message.clone())])?;
            count += 1;
        }
    }

    if console.is_debug() {
        write_at(
            console,
            Level::Debug,
            &crate::args!["wrote ", count, " message(s) at level ", args.level.to_string()],
        )?;
    }
    Ok(count)
}
