//! Best-effort launch of the platform default browser.

use std::process::Command;

use tracing::warn;

/// Spawn the platform opener pointed at `url`.
///
/// Launch failures are logged and otherwise ignored; the server keeps
/// serving regardless.
pub fn open_browser(url: &str) {
    let result = if cfg!(target_os = "macos") {
        Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/c", "start", url]).spawn()
    } else {
        Command::new("xdg-open").arg(url).spawn()
    };

    if let Err(err) = result {
        warn!("failed to open browser: {}", err);
    }
}
