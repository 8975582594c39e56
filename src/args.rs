use crate::config::ConsoleConfig;
use crate::console::Level;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Parse command line arguments and exit with a message if they are invalid.
#[must_use]
pub fn args_checks() -> Args {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    args
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print verbose messages
    #[arg(short, long)]
    pub verbose: bool,
    /// Print debug messages, implies verbose
    #[arg(short, long)]
    pub debug: bool,
    /// Level to write each message at
    #[arg(short, long, value_enum, default_value_t = Level::Always)]
    pub level: Level,
    /// Write each message as a hex byte sequence
    #[arg(short = 'x', long)]
    pub hex: bool,
    /// JSON file with "verbose" and "debug" settings, OR-ed with the flags above
    #[arg(short, long, value_name = "FILE", value_parser = check_readable_file)]
    pub config: Option<PathBuf>,
    /// Messages to write, one line each; read from stdin when none are given
    pub messages: Vec<String>,
}

impl Args {
    /// Check arguments that clap cannot validate on its own
    ///
    /// # Errors
    ///
    /// Returns an error message if the config file is not a valid console config.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(config) = &self.config {
            ConsoleConfig::from_file(config).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if path.is_file() && fs::metadata(&path).is_ok() {
        Ok(path)
    } else {
        Err(format!("The file '{file}' is not readable."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_to_always_level() {
        let args = Args::parse_from(["cameo-console", "hello"]);
        assert_eq!(args.level, Level::Always);
        assert!(!args.verbose);
        assert!(!args.debug);
        assert_eq!(args.messages, vec!["hello"]);
    }

    #[test]
    fn parses_flags_and_level() {
        let args = Args::parse_from(["cameo-console", "-v", "-d", "-x", "--level", "debug", "a", "b"]);
        assert!(args.verbose);
        assert!(args.debug);
        assert!(args.hex);
        assert_eq!(args.level, Level::Debug);
        assert_eq!(args.messages, vec!["a", "b"]);
    }

    #[test]
    fn rejects_missing_config_file() {
        let result = Args::try_parse_from(["cameo-console", "--config", "/nonexistent/cfg.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_invalid_json_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Args::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn validate_rejects_json_that_is_not_a_config() {
        for content in ["[1, 2]", r#"{"verbose": "yes"}"#] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            write!(file, "{content}").unwrap();
            let args = Args {
                config: Some(file.path().to_path_buf()),
                ..Args::default()
            };
            let err = args.validate().unwrap_err();
            assert!(err.starts_with("Invalid JSON in config"), "{content}: {err}");
        }
    }

    #[test]
    fn validate_accepts_json_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"verbose": true}}"#).unwrap();
        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Args::default()
        };
        assert!(args.validate().is_ok());
    }
}
