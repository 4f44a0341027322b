use http::StatusCode;
use std::io;
use thiserror::Error;

/// Errors raised while decoding a chunked body.
///
/// Every variant is terminal for the body being decoded: the decoder must be
/// discarded once one is returned.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("bad request: {reason}")]
    BadRequest { reason: &'static str },

    #[error("chunk is too large, size exceed the limit {max_size}")]
    TooLargeChunk { max_size: u64 },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn bad_request(reason: &'static str) -> Self {
        Self::BadRequest { reason }
    }

    pub fn too_large_chunk(max_size: u64) -> Self {
        Self::TooLargeChunk { max_size }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }

    #[inline]
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest { .. })
    }

    #[inline]
    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::TooLargeChunk { .. })
    }

    /// The response status a server would usually answer with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::TooLargeChunk { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
