/// Build a `[Arg; N]` from heterogeneous values.
///
/// ```
/// use cameo_console::{args, format_args_line};
///
/// let line = format_args_line(&args!["frame ", 3u32, ": ", vec![0xCAu8, 0xFE]]);
/// assert_eq!(line, "frame 3: 0xCAFE");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Arg::from($arg)),*]
    };
}

/// Write to the shared console's standard sink, ignoring sink errors.
#[macro_export]
macro_rules! always {
    ($($arg:expr),* $(,)?) => {{
        let _ = $crate::console::always(&$crate::args![$($arg),*]);
    }};
}

/// Write to the shared console's standard sink in verbose or debug mode, ignoring sink errors.
#[macro_export]
macro_rules! verbose {
    ($($arg:expr),* $(,)?) => {{
        let _ = $crate::console::verbose(&$crate::args![$($arg),*]);
    }};
}

/// Write to the shared console's standard sink in debug mode, ignoring sink errors.
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {{
        let _ = $crate::console::debug(&$crate::args![$($arg),*]);
    }};
}

/// Write to the shared console's error sink, ignoring sink errors.
#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {{
        let _ = $crate::console::error(&$crate::args![$($arg),*]);
    }};
}
