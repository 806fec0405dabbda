//! Response builders
//!
//! Every status the server can produce is built here. Builder failures
//! cannot happen with these fixed header sets, but the fallback keeps the
//! connection alive instead of panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// 200 with the full file body. `HEAD` callers pass an empty body but the
/// real length.
pub fn build_file_ok_response(
    body: Bytes,
    content_type: &str,
    etag: &str,
    total_size: usize,
) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(200)
            .header("Content-Type", content_type)
            .header("Content-Length", total_size)
            .header("Accept-Ranges", "bytes")
            .header("ETag", etag),
        body,
        "200",
    )
}

/// 206 Partial Content for a satisfiable range.
pub fn build_partial_response(
    body: Bytes,
    content_type: &str,
    etag: &str,
    start: usize,
    end: usize,
    total_size: usize,
) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(206)
            .header("Content-Type", content_type)
            .header("Content-Length", end - start + 1)
            .header("Content-Range", format!("bytes {start}-{end}/{total_size}"))
            .header("Accept-Ranges", "bytes")
            .header("ETag", etag),
        body,
        "206",
    )
}

/// 304 Not Modified for a matching `If-None-Match`.
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    finish(
        Response::builder().status(304).header("ETag", etag),
        Bytes::new(),
        "304",
    )
}

/// 404 Not Found. Traversal attempts get this same answer.
pub fn build_404_response() -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(404)
            .header("Content-Type", "text/plain"),
        Bytes::from("404 Not Found"),
        "404",
    )
}

/// 405 Method Not Allowed.
pub fn build_405_response() -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(405)
            .header("Content-Type", "text/plain")
            .header("Allow", ALLOWED_METHODS),
        Bytes::from("405 Method Not Allowed"),
        "405",
    )
}

/// 416 Range Not Satisfiable.
pub fn build_416_response(total_size: usize) -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(416)
            .header("Content-Type", "text/plain")
            .header("Content-Range", format!("bytes */{total_size}")),
        Bytes::from("Range Not Satisfiable"),
        "416",
    )
}

/// 204 answer for OPTIONS preflight.
pub fn build_options_response() -> Response<Full<Bytes>> {
    finish(
        Response::builder()
            .status(204)
            .header("Allow", ALLOWED_METHODS),
        Bytes::new(),
        "OPTIONS",
    )
}

fn finish(
    builder: hyper::http::response::Builder,
    body: Bytes,
    label: &str,
) -> Response<Full<Bytes>> {
    builder.body(Full::new(body)).unwrap_or_else(|e| {
        crate::logger::log_error(&format!("failed to build {label} response: {e}"));
        Response::new(Full::new(Bytes::new()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_carries_length_and_etag() {
        let resp = build_file_ok_response(Bytes::from("hello"), "text/plain", "\"tag\"", 5);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "5");
        assert_eq!(resp.headers()["ETag"], "\"tag\"");
        assert_eq!(resp.headers()["Accept-Ranges"], "bytes");
    }

    #[test]
    fn partial_response_describes_range() {
        let resp = build_partial_response(Bytes::from("ell"), "text/plain", "\"tag\"", 1, 3, 5);
        assert_eq!(resp.status(), 206);
        assert_eq!(resp.headers()["Content-Range"], "bytes 1-3/5");
        assert_eq!(resp.headers()["Content-Length"], "3");
    }

    #[test]
    fn not_found_is_plain_text() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
    }

    #[test]
    fn method_not_allowed_names_the_allowed_set() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn unsatisfiable_range_reports_size() {
        let resp = build_416_response(100);
        assert_eq!(resp.status(), 416);
        assert_eq!(resp.headers()["Content-Range"], "bytes */100");
    }
}
