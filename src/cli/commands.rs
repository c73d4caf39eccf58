use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "zentodo", about = concat!("zentodo v", env!("CARGO_PKG_VERSION"), " - prioritized todo lists in the terminal"), version)]
pub struct Cli {
    /// Directory holding the list files (default: the platform data dir)
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: config.toml in the data dir)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Config path: the explicit one, else `config.toml` in `data_dir`
    pub fn config_path(&self, data_dir: &std::path::Path) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| data_dir.join(crate::io::config_io::CONFIG_FILE))
    }
}
