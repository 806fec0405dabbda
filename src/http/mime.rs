//! Content-Type detection from file extensions.

use std::path::Path;

/// Content-Type for a file path, derived from its extension. Unknown and
/// missing extensions fall back to `application/octet-stream`.
pub fn for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("wasm") => "application/wasm",

        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",

        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz") => "application/gzip",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_web_assets() {
        assert_eq!(for_path(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(for_path(Path::new("css/site.css")), "text/css");
        assert_eq!(for_path(Path::new("app.js")), "application/javascript");
        assert_eq!(for_path(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(for_path(Path::new("photo.jpeg")), "image/jpeg");
    }

    #[test]
    fn extension_case_is_ignored() {
        assert_eq!(for_path(Path::new("BANNER.PNG")), "image/png");
        assert_eq!(for_path(Path::new("Index.HTML")), "text/html; charset=utf-8");
    }

    #[test]
    fn unknown_or_missing_extension_is_octet_stream() {
        assert_eq!(for_path(Path::new("data.xyz")), "application/octet-stream");
        assert_eq!(for_path(Path::new("Makefile")), "application/octet-stream");
    }
}
