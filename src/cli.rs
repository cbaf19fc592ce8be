use clap::Parser;
use std::path::PathBuf;

/// Random Value Mock API - generates test data over a simple REST endpoint
#[derive(Parser, Debug, Clone)]
#[command(name = "tyche", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "TYCHE_CONFIG", default_value = "tyche.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "TYCHE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "TYCHE_PORT")]
    pub port: Option<u16>,
}
