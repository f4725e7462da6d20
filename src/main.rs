//! rscan - Dump what a line-normalizing scanner sees in a text.
//!
//! This binary provides a CLI over the runescan scanner, reading input
//! from files or stdin.

mod cli;
mod dump;

use clap::Parser as ClapParser;
use cli::Cli;
use dump::{dump, DumpOptions};
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, Write};

use runescan_config::Config;
use runescan_core::Result;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("rscan v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let options = DumpOptions::resolve(cli, &config)?;
    debug!("Dump options: {:?}", options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let text = io::read_to_string(io::stdin())?;
        dump(&text, &options, &mut out)?;
    } else {
        let many = cli.files.len() > 1;
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let text = fs::read_to_string(path)?;
            debug!("Read {} bytes", text.len());
            if many {
                writeln!(out, "==> {} <==", path.display())?;
            }
            dump(&text, &options, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    if let Some(ref config_arg) = cli.config {
        config.merge(&Config::parse_override(config_arg)?);
        debug!("Merged config override: {}", config_arg);
    }

    Ok(config)
}
