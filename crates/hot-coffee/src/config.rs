//! Command-line and environment configuration.

use clap::Parser;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 6002;
pub const DEFAULT_BUFFER: usize = 32;
const MIN_PORT: u16 = 1024;

/// Folders of the project itself that must never double as the storage root.
const RESTRICTED_DIRS: &[&str] = &["crates", "src", "target", ".git"];

/// Coffee shop management server
#[derive(Parser, Debug, Clone)]
#[command(name = "hot-coffee")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Port number to listen on
    #[arg(long, env = "HOT_COFFEE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Storage root; data files live in `<dir>/data`
    #[arg(long, alias = "directory", env = "HOT_COFFEE_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Mailbox capacity of each actor
    #[arg(long, default_value_t = DEFAULT_BUFFER)]
    pub buffer: usize,

    /// Seed for the item-of-the-day generator
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("port {0} is outside the allowed range 1024-65535")]
    PortOutOfRange(u16),

    #[error("storage directory {0} is not allowed")]
    RestrictedDir(PathBuf),

    #[error("actor buffer must be greater than zero")]
    ZeroBuffer,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub buffer: usize,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.port < MIN_PORT {
            return Err(ConfigError::PortOutOfRange(cli.port));
        }
        if cli.buffer == 0 {
            return Err(ConfigError::ZeroBuffer);
        }
        if is_restricted(&cli.dir) {
            return Err(ConfigError::RestrictedDir(cli.dir));
        }
        Ok(Self {
            port: cli.port,
            data_dir: cli.dir.join("data"),
            buffer: cli.buffer,
            seed: cli.seed,
        })
    }
}

fn is_restricted(dir: &Path) -> bool {
    dir.components().any(|component| match component {
        Component::ParentDir => true,
        Component::Normal(name) => RESTRICTED_DIRS.iter().any(|r| name == *r),
        _ => false,
    })
}
