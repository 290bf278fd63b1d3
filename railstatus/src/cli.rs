//! CLI module for railstatus
//!
//! Flags override the environment; anything not given on the command line
//! comes from [`ServerConfig::from_env`].

use crate::config::ServerConfig;
use clap::Parser;
use std::path::PathBuf;

/// railstatus - status page server
#[derive(Parser, Debug)]
#[command(name = "railstatus")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    PORT                    Listen port (default: 4000)
    RAILSTATUS_HOST         Bind address (default: 0.0.0.0)
    RAILSTATUS_PUBLIC_DIR   Static asset directory (default: public)
    RAILSTATUS_APP_NAME     Name shown on the page (default: StarRail-Auto)
    RAILSTATUS_LOG_LEVEL    Log level (default: info)
    RAILSTATUS_LOG_DIR      Directory for daily rotated log files
"#)]
pub struct Cli {
    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Static asset directory
    #[arg(long)]
    pub public_dir: Option<PathBuf>,
}

impl Cli {
    /// Overlay the command line flags on `base`.
    pub fn apply(self, mut base: ServerConfig) -> ServerConfig {
        if let Some(port) = self.port {
            base.port = port;
        }
        if let Some(host) = self.host {
            base.host = host;
        }
        if let Some(public_dir) = self.public_dir {
            base.public_dir = public_dir;
        }
        base
    }
}
