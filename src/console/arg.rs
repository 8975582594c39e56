//! Message arguments and the rule that turns them into one line of text.
//!
//! Raw byte payloads are rendered as `0x` followed by uppercase hex so binary
//! data stays legible on a terminal. Everything else uses its `Display` form.

use std::fmt;

/// One argument of a console message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Plain text, written as is
    Text(String),
    /// A single byte, written as `0x` plus two hex digits
    Byte(u8),
    /// A byte sequence, written as `0x` plus the hex of every byte
    Bytes(Vec<u8>),
    /// Any other value, already rendered through `Display`
    Display(String),
}

impl Arg {
    /// Capture any `Display` value that has no dedicated conversion.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Arg::Display(value.to_string())
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(s) | Arg::Display(s) => f.write_str(s),
            Arg::Byte(b) => write!(f, "0x{b:02X}"),
            Arg::Bytes(bytes) => write!(f, "0x{}", hex::encode_upper(bytes)),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<u8> for Arg {
    fn from(value: u8) -> Self {
        Arg::Byte(value)
    }
}

impl From<&[u8]> for Arg {
    fn from(value: &[u8]) -> Self {
        Arg::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Arg {
    fn from(value: Vec<u8>) -> Self {
        Arg::Bytes(value)
    }
}

impl From<&Vec<u8>> for Arg {
    fn from(value: &Vec<u8>) -> Self {
        Arg::Bytes(value.clone())
    }
}

impl<const N: usize> From<[u8; N]> for Arg {
    fn from(value: [u8; N]) -> Self {
        Arg::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Arg {
    fn from(value: &[u8; N]) -> Self {
        Arg::Bytes(value.to_vec())
    }
}

macro_rules! display_args {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg::Display(value.to_string())
                }
            }
        )*
    };
}

display_args!(
    char, bool, i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64,
);

/// Concatenate the rendered arguments with no separator.
#[must_use]
pub fn format_args_line(args: &[Arg]) -> String {
    args.iter().map(ToString::to_string).collect()
}
