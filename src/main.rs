// src/main.rs
use std::process::ExitCode;

use catter::{app, cli, logging};

fn main() -> ExitCode {
    let config = cli::load_config();
    logging::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match app::run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("catter: {e:#}");
            ExitCode::FAILURE
        }
    }
}
