//! Range header parsing
//!
//! Single-range `bytes=` parsing per RFC 7233. Multi-range and non-byte
//! units are ignored rather than rejected, so the client gets the full
//! body with a 200.

/// A byte range requested by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    /// Inclusive end. `None` means "through the last byte".
    pub end: Option<usize>,
}

impl ByteRange {
    /// Inclusive end position for a body of `size` bytes.
    #[inline]
    pub fn resolved_end(&self, size: usize) -> usize {
        self.end.unwrap_or_else(|| size.saturating_sub(1))
    }
}

/// Outcome of looking at a request's Range header.
#[derive(Debug)]
pub enum RangeParse {
    /// A usable range. Serve 206.
    Satisfiable(ByteRange),
    /// Syntactically a byte range but outside the body. Serve 416.
    Unsatisfiable,
    /// Absent, malformed, or a form this server does not do. Serve 200.
    Ignored,
}

/// Parse a Range header against a body of `size` bytes.
///
/// Accepted forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
pub fn parse(header: Option<&str>, size: usize) -> RangeParse {
    let Some(header) = header else {
        return RangeParse::Ignored;
    };
    let Some(spec) = header.strip_prefix("bytes=") else {
        return RangeParse::Ignored;
    };
    if spec.contains(',') {
        return RangeParse::Ignored;
    }

    // No byte of an empty body is addressable.
    if size == 0 {
        return RangeParse::Unsatisfiable;
    }

    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeParse::Ignored;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if start_str.is_empty() {
        return parse_suffix(end_str, size);
    }

    let Ok(start) = start_str.parse::<usize>() else {
        return RangeParse::Ignored;
    };
    if start >= size {
        return RangeParse::Unsatisfiable;
    }

    let end = if end_str.is_empty() {
        None
    } else {
        match end_str.parse::<usize>() {
            // An end past the body is clamped, not refused.
            Ok(e) => Some(e.min(size - 1)),
            Err(_) => return RangeParse::Ignored,
        }
    };

    if let Some(e) = end {
        if start > e {
            return RangeParse::Unsatisfiable;
        }
    }

    RangeParse::Satisfiable(ByteRange { start, end })
}

/// `bytes=-N`: the last N bytes of the body.
fn parse_suffix(suffix_str: &str, size: usize) -> RangeParse {
    let Ok(suffix) = suffix_str.parse::<usize>() else {
        return RangeParse::Ignored;
    };
    if suffix == 0 {
        return RangeParse::Unsatisfiable;
    }

    RangeParse::Satisfiable(ByteRange {
        start: size.saturating_sub(suffix),
        end: Some(size - 1),
    })
}
