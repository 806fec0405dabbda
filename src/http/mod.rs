//! HTTP protocol layer
//!
//! Content-type detection, conditional requests, range parsing, and
//! response builders. Nothing in here knows about the filesystem.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

pub use response::{
    build_304_response, build_404_response, build_405_response, build_416_response,
    build_file_ok_response, build_options_response, build_partial_response,
};
