//! Immutable process configuration.
//!
//! Built once in `main` from CLI flags, then shared read-only with every
//! request handler behind an `Arc`. Nothing here is mutated after startup.

use std::path::PathBuf;

use crate::fs::IgnoreFilter;

/// Default TCP port the server binds.
pub const DEFAULT_PORT: u16 = 8000;

/// Default origin allowed by the CORS headers on listing responses.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Placeholder path value the web client sends before it knows the root.
pub const PATH_PLACEHOLDER: &str = "undefined";

/// Read-only configuration shared by all request handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Root directory substituted for empty or placeholder listing paths.
    pub root_dir: PathBuf,
    /// TCP port the server binds.
    pub port: u16,
    /// Single origin allowed by the CORS headers on listing responses.
    pub cors_origin: String,
    /// Advertised `ip:port`, empty when LAN discovery failed.
    pub host_address: String,
    /// Directory holding the bundled web client assets.
    pub webapp_dir: PathBuf,
    /// Names excluded from listings and counts.
    pub ignore: IgnoreFilter,
}

impl ServerConfig {
    /// Create a configuration serving `root_dir` with default settings.
    pub fn new(root_dir: PathBuf) -> Self {
        Self {
            root_dir,
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            host_address: String::new(),
            webapp_dir: PathBuf::from("webapp"),
            ignore: IgnoreFilter::default(),
        }
    }

    /// Resolve a requested listing path.
    ///
    /// Empty, missing, or placeholder values fall back to the configured
    /// root directory; anything else passes through unchanged.
    pub fn resolve_path(&self, requested: Option<&str>) -> String {
        match requested {
            Some(path) if !path.is_empty() && path != PATH_PLACEHOLDER => path.to_string(),
            _ => self.root_dir.to_string_lossy().to_string(),
        }
    }
}
