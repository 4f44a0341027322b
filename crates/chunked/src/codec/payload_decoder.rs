//! [`tokio_util::codec::Decoder`] adapter over [`ChunkedDecoder`].
//!
//! Lets a body reader pull decoded chunks straight out of its `BytesMut` read
//! buffer, for example through `FramedRead`.

use crate::codec::ChunkedDecoder;
use crate::protocol::{Decoded, ParseError, PayloadItem, Settings};
use bytes::{Buf, BytesMut};
use std::io;
use std::io::ErrorKind;
use tokio_util::codec::Decoder;
use tracing::{debug, trace};

/// Decodes a chunked body held in a `BytesMut` buffer.
///
/// Chunk payload is split off the buffer without copying. When the body ends,
/// the bytes that follow it stay in the buffer for the next protocol layer and
/// every further call returns [`PayloadItem::Eof`] without touching them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadDecoder {
    decoder: ChunkedDecoder,
    trailer: bool,
    finished: bool,
}

impl PayloadDecoder {
    /// Creates a decoder for one chunked body; `trailer` tells whether a
    /// trailer section follows the last chunk.
    pub fn new(settings: Settings, trailer: bool) -> Self {
        Self { decoder: ChunkedDecoder::new(settings), trailer, finished: false }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Decoder for PayloadDecoder {
    type Item = PayloadItem;
    type Error = ParseError;

    /// # Returns
    /// - `Ok(Some(PayloadItem::Chunk(bytes)))` when chunk payload is available
    /// - `Ok(Some(PayloadItem::Eof))` once the whole body has been read
    /// - `Ok(None)` when more data is needed
    /// - `Err(ParseError)` if the chunked encoding is invalid
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if self.finished {
            return Ok(Some(PayloadItem::Eof));
        }

        let total = src.len();
        match self.decoder.decode(&**src, self.trailer)? {
            Decoded::Chunk { chunk, extra } => {
                let end = total - extra.len();
                let start = end - chunk.len();

                src.advance(start);
                let bytes = src.split_to(end - start).freeze();
                Ok(Some(PayloadItem::Chunk(bytes)))
            }
            Decoded::Incomplete => {
                src.clear();
                Ok(None)
            }
            Decoded::Eof { extra } => {
                let consumed = total - extra.len();
                src.advance(consumed);
                self.finished = true;
                trace!(remaining = src.len(), "chunked payload finished");
                Ok(Some(PayloadItem::Eof))
            }
        }
    }

    /// Like [`decode`](Decoder::decode), but the input has ended: a body that
    /// is not complete yet is an `UnexpectedEof` error.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(item) => Ok(Some(item)),
            None => {
                debug!("stream closed before the chunked body was complete");
                Err(ParseError::io(io::Error::new(ErrorKind::UnexpectedEof, "incomplete chunked body")))
            }
        }
    }
}
