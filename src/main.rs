use std::error::Error;

use clap::Parser;
use zentodo::cli::commands::Cli;
use zentodo::io::config_io::{default_data_dir, read_config};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    std::fs::create_dir_all(&data_dir)?;

    let _guard = zentodo::logging::init(&data_dir)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "zentodo starting");

    let config = read_config(&cli.config_path(&data_dir))?;
    let result = zentodo::tui::run(&data_dir, &config);
    if let Err(e) = &result {
        tracing::error!("exiting on error: {e}");
    }
    result
}
