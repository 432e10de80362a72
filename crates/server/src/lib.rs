//! # LanShare
//!
//! A local-network file-sharing server: exposes a directory tree over
//! HTTP, lets a browser-based client list directory contents (with
//! aggregate sub-item counts) and download individual files, and serves
//! the bundled static web client.
//!
//! ## Modules
//!
//! - [`config`]: immutable process configuration
//! - [`fs`]: filesystem core (ignore filtering, size formatting, child
//!   counting, directory listing)
//! - [`http`]: warp routes for listing, download, and static assets
//! - [`net`]: best-effort LAN address discovery
//! - [`launch`]: platform browser launch

pub mod config;
pub mod fs;
pub mod http;
pub mod launch;
pub mod net;

// Re-export the types handlers and tests reach for most often.
pub use config::ServerConfig;
pub use fs::{list_directory, FileEntry, IgnoreFilter, Listing};
