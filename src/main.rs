use cameo_console::{app, args};
use std::io;

fn main() {
    let args = args::args_checks();

    let console = match app::console_from_args(&args) {
        Ok(console) => console,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = app::run_app(&args, console, io::stdin().lock()) {
        cameo_console::error!("Application error: ", e.to_string());
        std::process::exit(1);
    }
}
