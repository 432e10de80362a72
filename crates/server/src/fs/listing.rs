//! Directory listing with per-entry metadata.
//!
//! Produces the wire-level listing structure consumed by the web client.
//! Read failures are soft: they land in [`Listing::message`] and the
//! request still succeeds at the transport level.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::count::count_children;
use super::ignore::IgnoreFilter;
use super::size::format_size;

/// Timestamp layout used on the wire, in the server's local timezone.
const MODTIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One filesystem child reported in a listing.
///
/// Exactly one of `file_size` or the `sub_*_num` pair is meaningfully
/// populated, determined by `is_dir`: files carry a formatted size and
/// zero counts, directories carry one-level counts and an empty size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FileEntry {
    /// Base name of the entry, never a full path.
    pub file_name: String,
    /// Modification time, `YYYY/MM/DD HH:MM:SS` local time.
    pub file_modtime: String,
    pub is_dir: bool,
    /// Human-readable size; empty for directories.
    pub file_size: String,
    /// Immediate child file count; zero for files.
    pub sub_file_num: usize,
    /// Immediate child directory count; zero for files.
    pub sub_dir_num: usize,
}

/// Outcome of one listing request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Listing {
    /// Error description when the directory could not be read; empty on
    /// success.
    pub message: String,
    /// Advertised `ip:port` of the server, empty when discovery failed.
    pub local_ip: String,
    /// The requested directory, echoed back uncanonicalized.
    #[serde(rename = "path")]
    pub target_path: String,
    /// Directory entries first, then file entries, each group in
    /// filesystem enumeration order.
    pub files: Vec<FileEntry>,
}

/// List the immediate children of `path`.
///
/// Never fails: enumeration errors are captured into the result's
/// `message` and `files` stays empty. Ignored names are dropped, child
/// counts for directory entries are best-effort (counter failures leave
/// the counts at zero).
pub fn list_directory(path: &str, host_address: &str, filter: &IgnoreFilter) -> Listing {
    let mut listing = Listing {
        local_ip: host_address.to_string(),
        target_path: path.to_string(),
        ..Default::default()
    };

    match read_entries(Path::new(path), filter) {
        Ok(files) => listing.files = files,
        Err(err) => listing.message = err.to_string(),
    }

    listing
}

/// Enumerate `dir` into the directories-first entry sequence.
fn read_entries(dir: &Path, filter: &IgnoreFilter) -> std::io::Result<Vec<FileEntry>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if filter.is_ignored(&name) {
            continue;
        }

        // Entries whose metadata cannot be read are skipped, matching the
        // best-effort counter semantics.
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };

        let mut item = FileEntry {
            file_modtime: format_modtime(&metadata),
            file_name: name,
            ..Default::default()
        };

        if metadata.is_dir() {
            item.is_dir = true;
            // Counter failures are swallowed; the listing must still succeed.
            if let Ok(counts) = count_children(&dir.join(&item.file_name), filter) {
                item.sub_dir_num = counts.dirs;
                item.sub_file_num = counts.files;
            }
            dirs.push(item);
        } else {
            item.file_size = format_size(metadata.len());
            files.push(item);
        }
    }

    dirs.extend(files);
    Ok(dirs)
}

fn format_modtime(metadata: &std::fs::Metadata) -> String {
    let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
    DateTime::<Local>::from(modified)
        .format(MODTIME_FORMAT)
        .to_string()
}
