//! Chunked transfer coding codecs.
//!
//! - [`ChunkedDecoder`]: resumable decoder over borrowed byte slices
//! - [`PayloadDecoder`]: `tokio_util` decoder over a `BytesMut` read buffer
//! - [`ChunkedEncoder`]: `tokio_util` encoder producing chunked bodies

mod chunked_decoder;
mod chunked_encoder;
mod payload_decoder;

pub use chunked_decoder::ChunkedDecoder;
pub use chunked_encoder::ChunkedEncoder;
pub use payload_decoder::PayloadDecoder;
