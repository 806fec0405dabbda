//! Request handler module
//!
//! There is a single route: every GET/HEAD request is resolved against
//! the static root.

pub mod router;
pub mod static_files;

pub use router::handle_request;
