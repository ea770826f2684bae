use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::OpenOptions;
use std::process::ExitCode;

use thingform::core::config;
use thingform::tui;

const LOG_FILE: &str = "debug.log";

#[derive(Parser)]
#[command(name = "thingform", version, about = "Create a thing, one field at a time")]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - appends to debug.log in current directory
    let log_file = match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("could not open {LOG_FILE} for debugging: {e}");
            return ExitCode::FAILURE;
        }
    };
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);

    info!("thingform v{} starting up", env!("CARGO_PKG_VERSION"));

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("{}, using defaults", e);
            config::FormConfig::default()
        }
    };
    let resolved = config::resolve(&config);

    match tui::run(&resolved) {
        Ok(Some(record)) => {
            match record.to_pretty_json() {
                Ok(json) => {
                    info!("Final record: {}", json);
                    println!("{json}");
                }
                Err(e) => warn!("Could not serialize record: {}", e),
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!("Exited without completing the form");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Event loop failed: {}", e);
            eprintln!("Oh no: {e}");
            ExitCode::FAILURE
        }
    }
}
