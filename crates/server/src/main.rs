//! LanShare server binary.

use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use lanshare::config::{ServerConfig, DEFAULT_CORS_ORIGIN, DEFAULT_PORT};
use lanshare::{http, launch, net};

/// LAN file sharing server with a browser-based client.
#[derive(Parser, Debug)]
#[command(name = "lanshare")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root directory to serve; the literal value `home` selects the
    /// user's home directory
    #[arg(short = 't', long = "target")]
    target: Option<String>,

    /// TCP port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Origin allowed by the CORS headers on listing responses
    #[arg(long, default_value = DEFAULT_CORS_ORIGIN)]
    origin: String,

    /// Directory holding the bundled web client assets
    #[arg(long, default_value = "webapp")]
    webapp: PathBuf,

    /// Do not launch the local browser on startup
    #[arg(long)]
    no_browser: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let root_dir = resolve_root(cli.target.as_deref())?;

    let mut config = ServerConfig::new(root_dir);
    config.port = cli.port;
    config.cors_origin = cli.origin;
    config.webapp_dir = cli.webapp;

    // Best-effort: a failure here only blanks the advertised address.
    match net::discover_local_address() {
        Ok(ip) => {
            config.host_address = format!("{}:{}", ip, config.port);
            tracing::info!("local address: {}", ip);
        }
        Err(err) => {
            tracing::warn!("{}", err);
            tracing::warn!("could not determine the LAN address; look it up manually");
        }
    }

    tracing::info!(
        "serving {} on http://localhost:{}",
        config.root_dir.display(),
        config.port
    );
    if !config.host_address.is_empty() {
        tracing::info!("reachable on the LAN at http://{}", config.host_address);
    }
    if !config.webapp_dir.is_dir() {
        tracing::warn!(
            "webapp directory {} not found; static assets will 404",
            config.webapp_dir.display()
        );
    }

    if !cli.no_browser {
        launch::open_browser(&format!("http://localhost:{}", config.port));
    }

    let port = config.port;
    let routes = http::routes(Arc::new(config));
    warp::serve(routes).run((Ipv4Addr::UNSPECIFIED, port)).await;

    Ok(())
}

/// Resolve the served root from the CLI flag.
///
/// No flag means the current working directory; the literal `home`
/// selects the user's home directory.
fn resolve_root(target: Option<&str>) -> anyhow::Result<PathBuf> {
    match target {
        Some("home") => dirs::home_dir().context("could not determine the home directory"),
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => std::env::current_dir().context("could not determine the current directory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["lanshare"]).unwrap();

        assert!(cli.target.is_none());
        assert_eq!(cli.port, DEFAULT_PORT);
        assert_eq!(cli.origin, DEFAULT_CORS_ORIGIN);
        assert_eq!(cli.webapp, PathBuf::from("webapp"));
        assert!(!cli.no_browser);
        assert!(!cli.verbose);
    }

    #[test]
    fn target_short_flag() {
        let cli = Cli::try_parse_from(["lanshare", "-t", "/srv/share"]).unwrap();
        assert_eq!(cli.target.as_deref(), Some("/srv/share"));
    }

    #[test]
    fn target_long_flag() {
        let cli = Cli::try_parse_from(["lanshare", "--target", "home"]).unwrap();
        assert_eq!(cli.target.as_deref(), Some("home"));
    }

    #[test]
    fn port_override() {
        let cli = Cli::try_parse_from(["lanshare", "--port", "9000"]).unwrap();
        assert_eq!(cli.port, 9000);
    }

    #[test]
    fn no_browser_flag() {
        let cli = Cli::try_parse_from(["lanshare", "--no-browser"]).unwrap();
        assert!(cli.no_browser);
    }

    #[test]
    fn invalid_port_fails() {
        assert!(Cli::try_parse_from(["lanshare", "--port", "not-a-port"]).is_err());
    }

    #[test]
    fn resolve_root_explicit_path() {
        let root = resolve_root(Some("/srv/share")).unwrap();
        assert_eq!(root, PathBuf::from("/srv/share"));
    }

    #[test]
    fn resolve_root_home_literal() {
        let root = resolve_root(Some("home")).unwrap();
        assert_eq!(root, dirs::home_dir().unwrap());
    }

    #[test]
    fn resolve_root_default_is_cwd() {
        let root = resolve_root(None).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap());
    }

    #[test]
    fn resolve_root_empty_is_cwd() {
        let root = resolve_root(Some("")).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap());
    }
}
