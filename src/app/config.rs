use anyhow::Context;
use clap::Parser;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Service configuration. Every flag falls back to an environment variable,
/// which may come from a `.env` file (see `load_dotenv_from`).
#[derive(Debug, Clone, Parser)]
#[command(name = "index-lookup", version, about = "Serve index lookups over a sorted list of integers")]
pub struct Config {
    /// Port number to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Max log level: DEBUG, INFO, WARN or ERROR
    #[arg(long, env = "LOG_LEVEL", default_value = "INFO")]
    pub log_level: String,

    /// File with one sorted integer per line
    #[arg(long, env = "INPUT_FILE_NAME", default_value = "input.txt")]
    pub input_file_name: PathBuf,

    /// Deadline for a single search in milliseconds, 0 disables it
    #[arg(long, env = "SEARCH_TIMEOUT_MS", default_value_t = 1000)]
    pub search_timeout_ms: u64,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn search_timeout(&self) -> Option<Duration> {
        match self.search_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

/// Loads `KEY=value` pairs from a dotenv file into the process environment.
///
/// Variables already set in the environment are kept. Returns `false` when the
/// file does not exist; a file that exists but does not parse is an error.
pub fn load_dotenv_from(path: &Path) -> anyhow::Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to load {}", path.display())),
    }
}

/// Case-insensitive level name, `None` if unknown.
pub fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" | "WARNING" => Some(Level::WARN),
        "ERROR" => Some(Level::ERROR),
        _ => None,
    }
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logging(log_level: &str) {
    let level = parse_log_level(log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level.unwrap_or(Level::INFO)).into())
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if level.is_none() {
        tracing::info!("Unknown log level {:?}, using INFO", log_level);
    }
}
