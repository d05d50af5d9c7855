//! Main application entry point.

use inkboard_app::{AppError, AppResult, run_script_file};
use std::path::PathBuf;

const USAGE: &str = "usage: inkboard <script.json> [out.svg]";

fn run() -> AppResult<usize> {
    let mut args = std::env::args().skip(1);
    let script = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| AppError::Usage(USAGE.to_string()))?;
    let svg_output = args.next().map(PathBuf::from);

    let app = run_script_file(&script, svg_output)?;
    Ok(app.session().document().len())
}

fn main() {
    env_logger::init();
    log::info!("Starting Inkboard");

    match run() {
        Ok(count) => println!("{count} shapes"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("inkboard: {err}");
            let code = if matches!(err, AppError::Usage(_)) { 2 } else { 1 };
            std::process::exit(code);
        }
    }
}
