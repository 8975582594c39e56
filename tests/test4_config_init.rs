use cameo_console::app::console_from_args;
use cameo_console::args::Args;
use cameo_console::{Console, ConsoleError};
use std::io::Write;

#[test]
fn test_bad_config_fails_before_init() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "[1, 2").expect("write config");

    let args = Args {
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };
    let err = console_from_args(&args).expect_err("invalid config");
    assert!(matches!(err, ConsoleError::Config { .. }));
    assert!(!cameo_console::console::instance().is_ready());

    // A valid file merged with -v configures the shared console once.
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"debug": true}}"#).expect("write config");

    let args = Args {
        verbose: true,
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };
    let con = console_from_args(&args).expect("valid config");
    assert!(con.is_ready());
    assert!(con.is_verbose());
    assert!(con.is_debug());
}
