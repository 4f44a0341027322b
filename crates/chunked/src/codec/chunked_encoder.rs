//! Encoder producing the chunked transfer coding.

use crate::protocol::PayloadItem;
use bytes::{Buf, BytesMut};
use std::fmt::Write;
use std::io;
use tokio_util::codec::Encoder;

/// Writes each payload item as one chunk, and `Eof` as the last chunk.
///
/// Empty chunks are skipped since a zero size line would end the body, and
/// anything encoded after `Eof` is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkedEncoder {
    eof: bool,
}

impl ChunkedEncoder {
    pub fn new() -> Self {
        Self { eof: false }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.eof
    }
}

impl<D: Buf> Encoder<PayloadItem<D>> for ChunkedEncoder {
    type Error = io::Error;

    fn encode(&mut self, item: PayloadItem<D>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        if self.eof {
            return Ok(());
        }

        match item {
            PayloadItem::Chunk(mut data) => {
                if !data.has_remaining() {
                    return Ok(());
                }

                let len = data.remaining();
                write!(dst, "{len:X}\r\n").map_err(io::Error::other)?;
                dst.reserve(len + 2);
                while data.has_remaining() {
                    let chunk = data.chunk();
                    let n = chunk.len();
                    dst.extend_from_slice(chunk);
                    data.advance(n);
                }
                dst.extend_from_slice(b"\r\n");
                Ok(())
            }
            PayloadItem::Eof => {
                self.eof = true;
                dst.extend_from_slice(b"0\r\n\r\n");
                Ok(())
            }
        }
    }
}
