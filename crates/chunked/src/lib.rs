//! Incremental decoder for HTTP chunked transfer-encoded bodies
//!
//! This crate decodes the chunked transfer coding of HTTP/1.1
//! ([RFC 9112 Section 7.1](https://www.rfc-editor.org/rfc/rfc9112#section-7.1))
//! without buffering the body. Network reads are fed to the decoder as they
//! arrive, split at arbitrary points, and decoded payload is handed back as
//! views into the caller's buffer.
//!
//! # Example
//!
//! ```
//! use micro_chunked::codec::ChunkedDecoder;
//! use micro_chunked::protocol::{Decoded, Settings};
//!
//! let mut decoder = ChunkedDecoder::new(Settings::default());
//! let mut body = Vec::new();
//!
//! let mut data: &[u8] = b"4\r\nWiki\r\n5\r\npedia\r\n0\r\n\r\nnext request";
//! let extra = loop {
//!     match decoder.decode(data, false).expect("valid chunked body") {
//!         Decoded::Chunk { chunk, extra } => {
//!             body.extend_from_slice(chunk);
//!             data = extra;
//!         }
//!         Decoded::Incomplete => unreachable!("the whole body is in one buffer"),
//!         Decoded::Eof { extra } => break extra,
//!     }
//! };
//!
//! assert_eq!(body, b"Wikipedia");
//! assert_eq!(extra, b"next request");
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: the decoder state machine and its `tokio_util` codec adapters
//! - [`protocol`]: settings, decoding outcomes and errors
//! - [`hex`]: hex digit classification used for chunk sizes
//!
//! # Error Handling
//!
//! [`protocol::ParseError`] separates malformed input from chunks exceeding the
//! configured size limit, so servers can answer `400` and `413` respectively.
//! Both are final for the body being decoded.

pub mod codec;
pub mod hex;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
