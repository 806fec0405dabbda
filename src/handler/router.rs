//! Request dispatch
//!
//! Validates the method, captures the handful of headers the static file
//! path cares about, and hands off to the file resolver.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Per-request information carried into the static file path.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range: Option<String>,
}

pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let access_log = state.config.logging.access_log;

    if access_log {
        logger::log_request(method.as_str(), path);
    }

    if let Some(resp) = check_method(method) {
        return Ok(resp);
    }

    let ctx = RequestContext {
        path,
        is_head: *method == Method::HEAD,
        if_none_match: header_value(&req, "if-none-match"),
        range: header_value(&req, "range"),
    };

    let response = static_files::serve(&ctx, &state.config.resources).await;

    if access_log {
        logger::log_response(response.status().as_u16());
    }

    Ok(response)
}

/// Only GET and HEAD reach the filesystem. OPTIONS gets its preflight
/// answer, everything else is 405.
fn check_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
