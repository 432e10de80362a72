//! HTTP boundary: listing, download, and static asset routes.
//!
//! Three routes, matching the web client's expectations:
//!
//! - `GET /api/files?path=<dir>` — JSON directory listing
//! - `GET /api/download?fname=<path>` — single-file download
//! - `GET /*` — bundled static web client
//!
//! Handlers share only the read-only [`ServerConfig`]; warp's own
//! connection handling provides all concurrency.

pub mod download;

use std::convert::Infallible;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::config::ServerConfig;
use crate::fs::list_directory;

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
struct ListQuery {
    path: Option<String>,
}

/// Query parameters for the download endpoint.
#[derive(Debug, Deserialize)]
struct DownloadQuery {
    fname: Option<String>,
}

/// Build the complete route tree.
pub fn routes(
    config: Arc<ServerConfig>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    api_files(config.clone())
        .or(api_download())
        .or(static_assets(config))
        .recover(handle_rejection)
}

/// `GET /api/files?path=<dir>` — list a directory as JSON.
fn api_files(
    config: Arc<ServerConfig>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "files")
        .and(warp::get())
        .and(warp::query::<ListQuery>())
        .and(with_config(config))
        .map(|query: ListQuery, config: Arc<ServerConfig>| {
            let target = config.resolve_path(query.path.as_deref());
            info!(dir = %target, "listing request");

            let listing = list_directory(&target, &config.host_address, &config.ignore);

            let reply = warp::reply::json(&listing);
            let reply = warp::reply::with_header(
                reply,
                "Access-Control-Allow-Origin",
                config.cors_origin.clone(),
            );
            let reply =
                warp::reply::with_header(reply, "Access-Control-Allow-Methods", "GET, POST, OPTIONS");
            warp::reply::with_header(reply, "Access-Control-Allow-Headers", "Content-Type")
        })
}

/// `GET /api/download?fname=<path>` — stream one file as an attachment.
fn api_download() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "download")
        .and(warp::get())
        .and(warp::query::<DownloadQuery>())
        .and_then(|query: DownloadQuery| async move {
            let fname = query.fname.unwrap_or_default();
            info!(file = %fname, "download request");

            Ok::<_, Rejection>(download::download_response(&fname).await)
        })
}

/// Fallback: serve the bundled web client from the asset directory.
fn static_assets(
    config: Arc<ServerConfig>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::get().and(warp::fs::dir(config.webapp_dir.clone()))
}

/// Map unmatched requests to 404 and anything unexpected to a generic 500.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    if err.is_not_found() {
        Ok(warp::reply::with_status(
            "Not Found".to_string(),
            StatusCode::NOT_FOUND,
        ))
    } else {
        tracing::error!(?err, "unhandled rejection");
        Ok(warp::reply::with_status(
            "Internal Server Error".to_string(),
            StatusCode::INTERNAL_SERVER_ERROR,
        ))
    }
}

fn with_config(
    config: Arc<ServerConfig>,
) -> impl Filter<Extract = (Arc<ServerConfig>,), Error = Infallible> + Clone {
    warp::any().map(move || config.clone())
}
