//! Platform logging initialization for the auto-apply binary.
//!
//! The interactive form owns the terminal, so it logs to a file. Headless runs log
//! to the terminal.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
pub enum LogDestination {
    /// Write to the given file, truncating it.
    File(PathBuf),
    /// Write to the terminal.
    Terminal,
}

/// Initialize the global logger.
///
/// `verbose` logs at `Debug`. Otherwise files get `Info` and the terminal only
/// `Error`; failure detail is diagnostic and stays out of headless output.
pub fn initialize(destination: LogDestination, verbose: bool) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File(path) => {
            let level = pick_level(verbose, LevelFilter::Info);
            match create_file_logger(&path, level, config) {
                Some(file_logger) => vec![file_logger],
                None => return,
            }
        }
        LogDestination::Terminal => vec![TermLogger::new(
            pick_level(verbose, LevelFilter::Error),
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )],
    };

    let _ = CombinedLogger::init(loggers);
}

fn pick_level(verbose: bool, quiet: LevelFilter) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        quiet
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
