//! Single-file download streaming.

use std::path::Path;

use tokio::fs::File;
use tokio_util::io::ReaderStream;
use warp::http::{header, Response, StatusCode};
use warp::hyper::Body;

/// Build the download response for `fname`.
///
/// An empty name is a silent no-op: an empty 200 body, no error, nothing
/// logged beyond the request line. Open failures surface as a 500 with a
/// plain-text message. On success the file is streamed sequentially to
/// EOF; the handle is dropped with the stream on every exit path,
/// including a client disconnect mid-transfer.
pub async fn download_response(fname: &str) -> Response<Body> {
    if fname.is_empty() {
        return Response::new(Body::empty());
    }

    let file = match File::open(fname).await {
        Ok(file) => file,
        Err(err) => return plain_error(format!("Error opening file: {}", err)),
    };

    let base_name = Path::new(fname)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| fname.to_string());

    let response = Response::builder()
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", base_name),
        )
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .body(Body::wrap_stream(ReaderStream::new(file)));

    match response {
        Ok(response) => response,
        // Header construction fails only for names that are not valid
        // header values.
        Err(err) => plain_error(format!("Error building response: {}", err)),
    }
}

/// A 500 response with a plain-text message body.
fn plain_error(message: String) -> Response<Body> {
    let mut response = Response::new(Body::from(message));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_name_is_a_silent_no_op() {
        let response = download_response("").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_file_is_a_hard_error() {
        let response = download_response("/definitely/not/here.bin").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn existing_file_gets_attachment_headers() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("report.pdf");
        std::fs::write(&path, b"content").unwrap();

        let response = download_response(&path.to_string_lossy()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=report.pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/octet-stream"
        );
    }
}
