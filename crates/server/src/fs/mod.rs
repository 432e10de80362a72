//! Filesystem core: ignore filtering, size formatting, child counting,
//! and directory listing.
//!
//! Everything here is synchronous and operates on live filesystem state;
//! results are built fresh per request and never cached.

pub mod count;
pub mod ignore;
pub mod listing;
pub mod size;

pub use count::{count_children, ChildCounts};
pub use ignore::{IgnoreFilter, DEFAULT_IGNORED_NAMES};
pub use listing::{list_directory, FileEntry, Listing};
pub use size::format_size;
