//! Leveled console output.
//!
//! Message kinds:
//!
//! - Always: always written to the standard sink
//! - Error: always written to the error sink
//! - Verbose: written to the standard sink if `is_verbose()` or `is_debug()`
//! - Debug: written to the standard sink if `is_debug()`
//!
//! Sinks default to stdout and stderr. Use [`redirect_io`] to send output
//! elsewhere, e.g. a writer that forwards into a logging system.

pub mod arg;
pub mod global;
pub mod level;
pub mod leveled;
pub mod outputs;

pub use arg::{Arg, format_args_line};
pub use global::{
    SharedConsole, always, debug, error, init, instance, is_debug, is_verbose, new, redirect_io,
    reset_io, reset_sink, shared_outputs, std_err, std_out, verbose,
};
pub use level::{Level, Target};
pub use leveled::{LeveledConsole, NullConsole};
pub use outputs::Outputs;

use crate::errors::ConsoleError;
use mockall::automock;

/// Operations shared by every console, independent or shared.
///
/// Write operations on a disabled level return `Ok(())` without touching a sink.
#[automock]
pub trait Console {
    /// Write to the standard sink unconditionally.
    fn always(&self, args: &[Arg]) -> Result<(), ConsoleError>;

    /// Write to the standard sink if verbose or debug mode is on.
    fn verbose(&self, args: &[Arg]) -> Result<(), ConsoleError>;

    /// Write to the standard sink if debug mode is on.
    fn debug(&self, args: &[Arg]) -> Result<(), ConsoleError>;

    /// Write to the error sink unconditionally.
    fn error(&self, args: &[Arg]) -> Result<(), ConsoleError>;

    fn is_verbose(&self) -> bool;

    fn is_debug(&self) -> bool;
}

/// An absent console: writes do nothing and both modes read as off.
impl<C: Console> Console for Option<C> {
    fn always(&self, args: &[Arg]) -> Result<(), ConsoleError> {
        self.as_ref().map_or(Ok(()), |c| c.always(args))
    }

    fn verbose(&self, args: &[Arg]) -> Result<(), ConsoleError> {
        self.as_ref().map_or(Ok(()), |c| c.verbose(args))
    }

    fn debug(&self, args: &[Arg]) -> Result<(), ConsoleError> {
        self.as_ref().map_or(Ok(()), |c| c.debug(args))
    }

    fn error(&self, args: &[Arg]) -> Result<(), ConsoleError> {
        self.as_ref().map_or(Ok(()), |c| c.error(args))
    }

    fn is_verbose(&self) -> bool {
        self.as_ref().is_some_and(|c| c.is_verbose())
    }

    fn is_debug(&self) -> bool {
        self.as_ref().is_some_and(|c| c.is_debug())
    }
}

macro_rules! forward_console {
    ($($impl:tt)*) => {
        $($impl)* {
            fn always(&self, args: &[Arg]) -> Result<(), ConsoleError> {
                (**self).always(args)
            }

            fn verbose(&self, args: &[Arg]) -> Result<(), ConsoleError> {
                (**self).verbose(args)
            }

            fn debug(&self, args: &[Arg]) -> Result<(), ConsoleError> {
                (**self).debug(args)
            }

            fn error(&self, args: &[Arg]) -> Result<(), ConsoleError> {
                (**self).error(args)
            }

            fn is_verbose(&self) -> bool {
                (**self).is_verbose()
            }

            fn is_debug(&self) -> bool {
                (**self).is_debug()
            }
        }
    };
}

forward_console!(impl<C: Console + ?Sized> Console for &C);
forward_console!(impl<C: Console + ?Sized> Console for Box<C>);
