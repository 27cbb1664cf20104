//! Runtime configuration.
//!
//! # Responsibility
//! - Read environment-supplied settings with documented defaults.
//! - Replace implicit global connection state with an explicit struct that
//!   front-ends construct once at startup and pass down.

use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "payledger.db";
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "public";

/// Environment-driven settings shared by the console and HTTP front-ends.
///
/// | Env var | Default | Meaning |
/// |---|---|---|
/// | `PAYLEDGER_DB` | `payledger.db` | SQLite database path |
/// | `PORT` | `8080` | HTTP listen port |
/// | `PAYLEDGER_STATIC_DIR` | `public` | static front-end directory |
/// | `PAYLEDGER_LOG_DIR` | unset | rolling log directory (stderr when unset) |
#[derive(Debug, Clone)]
pub struct PayLedgerConfig {
    pub db_path: PathBuf,
    pub http_port: u16,
    pub static_dir: PathBuf,
    pub log_dir: Option<PathBuf>,
}

impl PayLedgerConfig {
    /// Builds a configuration from the process environment, falling back to
    /// the documented defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("PAYLEDGER_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH)),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            static_dir: std::env::var("PAYLEDGER_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            log_dir: std::env::var("PAYLEDGER_LOG_DIR").ok().map(PathBuf::from),
        }
    }
}

impl Default for PayLedgerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            http_port: DEFAULT_HTTP_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_dir: None,
        }
    }
}
