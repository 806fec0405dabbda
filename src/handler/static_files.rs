//! Static file serving
//!
//! Maps a request path to a file under the configured root and builds the
//! response, including conditional and range handling.

use crate::config::ResourcesConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeParse};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a request from the static root. Anything that fails to resolve
/// to a readable file inside the root is a 404.
pub async fn serve(ctx: &RequestContext<'_>, resources: &ResourcesConfig) -> Response<Full<Bytes>> {
    match load(resources, ctx.path).await {
        Some((content, content_type)) => build_file_response(&content, content_type, ctx),
        None => http::build_404_response(),
    }
}

/// Resolve a request path to file contents and a content type.
async fn load(resources: &ResourcesConfig, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = path.trim_start_matches('/');

    // Parent-directory segments never make it to the filesystem.
    if relative.split('/').any(|segment| segment == "..") {
        logger::log_warning(&format!("path traversal attempt blocked: {path}"));
        return None;
    }

    // A root that does not exist (or is unreadable) turns every request
    // into a 404; it must not kill the process.
    let root = match Path::new(&resources.root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "static root '{}' not accessible: {e}",
                resources.root
            ));
            return None;
        }
    };

    let mut file_path = root.join(relative);

    if relative.is_empty() || relative.ends_with('/') || file_path.is_dir() {
        file_path = resolve_index(&file_path, &resources.index_files)?;
    }

    // Canonicalize and re-check containment so symlinks cannot escape the
    // root either.
    let file_path = file_path.canonicalize().ok()?;
    if !file_path.starts_with(&root) {
        logger::log_warning(&format!(
            "resolved path escapes static root: {} -> {}",
            path,
            file_path.display()
        ));
        return None;
    }

    if !file_path.is_file() {
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("failed to read '{}': {e}", file_path.display()));
            return None;
        }
    };

    let content_type = mime::for_path(&file_path);
    Some((content, content_type))
}

/// First index file that exists under `dir`, if any.
fn resolve_index(dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    index_files
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Build the response for a loaded file: 304 for a matching `ETag`,
/// 206/416 for range requests, otherwise a full 200.
fn build_file_response(
    data: &[u8],
    content_type: &'static str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::content_etag(data);
    let total_size = data.len();

    if cache::none_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    match http::range::parse(ctx.range.as_deref(), total_size) {
        RangeParse::Satisfiable(range) => {
            let start = range.start;
            let end = range.resolved_end(total_size);

            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data[start..=end].to_vec())
            };

            http::build_partial_response(body, content_type, &etag, start, end, total_size)
        }
        RangeParse::Unsatisfiable => http::build_416_response(total_size),
        RangeParse::Ignored => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data.to_owned())
            };

            http::build_file_ok_response(body, content_type, &etag, total_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    /// Fresh directory under the system temp dir, usable as a static root.
    fn temp_root(tag: &str) -> (ResourcesConfig, PathBuf) {
        let dir = std::env::temp_dir().join(format!("staticserve-{tag}-{}", std::process::id()));
        let _ = std_fs::remove_dir_all(&dir);
        std_fs::create_dir_all(&dir).unwrap();
        let resources = ResourcesConfig {
            root: dir.to_str().unwrap().to_string(),
            index_files: vec!["index.html".to_string()],
        };
        (resources, dir)
    }

    #[tokio::test]
    async fn serves_exact_file_bytes() {
        let (resources, dir) = temp_root("exact");
        std_fs::write(dir.join("index.html"), "<h1>hi</h1>").unwrap();

        let (content, content_type) = load(&resources, "/index.html").await.unwrap();
        assert_eq!(content, b"<h1>hi</h1>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn directory_request_resolves_index() {
        let (resources, dir) = temp_root("index");
        std_fs::write(dir.join("index.html"), "<h1>hi</h1>").unwrap();

        let (content, _) = load(&resources, "/").await.unwrap();
        assert_eq!(content, b"<h1>hi</h1>");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let (resources, _dir) = temp_root("missing");
        assert!(load(&resources, "/missing.txt").await.is_none());
    }

    #[tokio::test]
    async fn parent_segments_cannot_escape_root() {
        let (resources, dir) = temp_root("traversal");
        // A file next to the root that must stay unreachable.
        std_fs::write(dir.parent().unwrap().join("outside-secret.txt"), "secret").unwrap();

        assert!(load(&resources, "/../outside-secret.txt").await.is_none());
        assert!(load(&resources, "/a/../../outside-secret.txt").await.is_none());
    }

    #[tokio::test]
    async fn directory_without_index_is_not_found() {
        let (resources, dir) = temp_root("noindex");
        std_fs::create_dir_all(dir.join("assets")).unwrap();

        assert!(load(&resources, "/assets/").await.is_none());
        assert!(load(&resources, "/assets").await.is_none());
    }

    #[tokio::test]
    async fn missing_root_is_not_found_not_fatal() {
        let resources = ResourcesConfig {
            root: "/nonexistent-staticserve-root".to_string(),
            index_files: vec!["index.html".to_string()],
        };
        assert!(load(&resources, "/index.html").await.is_none());
    }

    #[tokio::test]
    async fn subdirectory_files_are_served() {
        let (resources, dir) = temp_root("subdir");
        std_fs::create_dir_all(dir.join("css")).unwrap();
        std_fs::write(dir.join("css/site.css"), "body{}").unwrap();

        let (content, content_type) = load(&resources, "/css/site.css").await.unwrap();
        assert_eq!(content, b"body{}");
        assert_eq!(content_type, "text/css");
    }
}
