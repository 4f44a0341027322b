//! Streaming decoder for the HTTP chunked transfer coding.
//!
//! Implements the grammar of [RFC 9112 Section 7.1](https://www.rfc-editor.org/rfc/rfc9112#section-7.1)
//! including an optional trailer section. Input may be split at any byte, the
//! decoder keeps its position in the grammar between calls.
//!
//! Bare LF is accepted wherever CRLF is expected.

use crate::ensure;
use crate::hex;
use crate::protocol::{Decoded, ParseError, Settings};
use tracing::{debug, trace};
use ChunkedState::*;

/// A resumable decoder for chunked bodies.
///
/// Each call to [`decode`](ChunkedDecoder::decode) processes the given slice
/// until it can report something: a piece of chunk payload, the end of the
/// body, or an error. Returned slices borrow from the input, nothing is copied.
///
/// One decoder is meant to be used for one body. After the body completes it
/// returns to its initial state, but after an error it must be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkedDecoder {
    state: ChunkedState,
    /// size being read while in the size line, remaining bytes while in the body
    chunk_length: u64,
    settings: Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkedState {
    /// Read the first hex digit of a chunk size
    SizeFirst,
    /// Read the rest of the chunk size
    Size,
    /// Read LF after the chunk size CR
    SizeLf,
    /// Size line finished, decide between body and last chunk
    SizeEnd,
    /// Read chunk data
    Body,
    /// Read CR (or bare LF) after chunk data
    BodyCr,
    /// Read LF after chunk data
    BodyLf,
    /// Chunk finished, the next byte starts a size or the end
    BodyEnd,
    /// Read LF after the CR that ends the last chunk
    EndLf,
    /// Skip a trailer line
    Trailer,
    /// Read LF after a trailer line CR
    TrailerLf,
    /// Trailer line finished, a blank line ends the section
    TrailerEnd,
    /// Read the final LF of the trailer section
    TrailerEndLf,
}

impl ChunkedDecoder {
    pub fn new(settings: Settings) -> Self {
        Self { state: SizeFirst, chunk_length: 0, settings }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns true if the decoder waits for the very first byte of a body,
    /// either because it is new or because the previous body completed.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == SizeFirst
    }

    /// Decodes the next piece of a chunked body from `data`.
    ///
    /// `trailer` tells whether the last chunk is followed by a trailer section.
    /// It should be the same for every call on one body.
    ///
    /// # Returns
    /// - `Ok(Decoded::Chunk { chunk, extra })` when payload is available; `extra`
    ///   has not been looked at and must be passed to the next call
    /// - `Ok(Decoded::Incomplete)` when all of `data` was consumed without output
    /// - `Ok(Decoded::Eof { extra })` when the body is complete; `extra` follows it
    /// - `Err(ParseError::BadRequest)` if the input violates the chunked grammar
    /// - `Err(ParseError::TooLargeChunk)` if a chunk size exceeds the limit
    pub fn decode<'a>(&mut self, data: &'a [u8], trailer: bool) -> Result<Decoded<'a>, ParseError> {
        self.step(data, trailer).inspect_err(|e| debug!(cause = %e, "rejected chunked body"))
    }

    fn step<'a>(&mut self, data: &'a [u8], trailer: bool) -> Result<Decoded<'a>, ParseError> {
        let mut offset = 0;

        while let Some(&b) = data.get(offset) {
            match self.state {
                SizeFirst => {
                    self.chunk_length = 0;
                    self.push_size_digit(b)?;
                    offset += 1;
                    self.state = Size;
                }

                Size => {
                    offset += 1;
                    match b {
                        b'\r' => self.state = SizeLf,
                        b'\n' => self.state = SizeEnd,
                        _ => self.push_size_digit(b)?,
                    }
                }

                SizeLf => {
                    ensure!(b == b'\n', ParseError::bad_request("invalid chunk size LF"));
                    offset += 1;
                    self.state = SizeEnd;
                }

                SizeEnd if self.chunk_length != 0 => self.state = Body,

                SizeEnd => match b {
                    b'\r' => {
                        offset += 1;
                        self.state = EndLf;
                    }
                    b'\n' if !trailer => return Ok(self.finish(data, offset + 1)),
                    b'\n' => {
                        offset += 1;
                        self.state = Trailer;
                    }
                    // already the first byte of a trailer line
                    _ if trailer => self.state = Trailer,
                    _ => return Err(ParseError::bad_request("unexpected trailer without trailer mode")),
                },

                Body => {
                    let rest = &data[offset..];
                    let remaining = usize::try_from(self.chunk_length).unwrap_or(usize::MAX);

                    if rest.len() < remaining {
                        self.chunk_length -= rest.len() as u64;
                        trace!(len = rest.len(), remaining = self.chunk_length, "read chunked bytes");
                        return Ok(Decoded::Chunk { chunk: rest, extra: &[] });
                    }

                    self.chunk_length = 0;
                    self.state = BodyCr;
                    let (chunk, extra) = rest.split_at(remaining);
                    trace!(len = chunk.len(), "read last bytes of chunk");
                    return Ok(Decoded::Chunk { chunk, extra });
                }

                BodyCr => {
                    offset += 1;
                    match b {
                        b'\r' => self.state = BodyLf,
                        b'\n' => self.state = BodyEnd,
                        _ => return Err(ParseError::bad_request("invalid chunk body end")),
                    }
                }

                BodyLf => {
                    ensure!(b == b'\n', ParseError::bad_request("invalid chunk body LF"));
                    offset += 1;
                    self.state = BodyEnd;
                }

                BodyEnd => match b {
                    b'\r' => {
                        offset += 1;
                        self.state = EndLf;
                    }
                    b'\n' if !trailer => return Ok(self.finish(data, offset + 1)),
                    b'\n' => {
                        offset += 1;
                        self.state = Trailer;
                    }
                    _ => {
                        self.chunk_length = 0;
                        self.push_size_digit(b)?;
                        offset += 1;
                        self.state = Size;
                    }
                },

                EndLf => {
                    ensure!(b == b'\n', ParseError::bad_request("invalid last chunk LF"));
                    if !trailer {
                        return Ok(self.finish(data, offset + 1));
                    }
                    offset += 1;
                    self.state = Trailer;
                }

                Trailer => match data[offset..].iter().position(|&c| c == b'\r' || c == b'\n') {
                    Some(pos) => {
                        offset += pos + 1;
                        self.state = if data[offset - 1] == b'\r' { TrailerLf } else { TrailerEnd };
                    }
                    None => offset = data.len(),
                },

                TrailerLf => {
                    ensure!(b == b'\n', ParseError::bad_request("invalid trailer LF"));
                    offset += 1;
                    self.state = TrailerEnd;
                }

                TrailerEnd => match b {
                    b'\r' => {
                        offset += 1;
                        self.state = TrailerEndLf;
                    }
                    b'\n' => return Ok(self.finish(data, offset + 1)),
                    // a new trailer line, rescanned from its first byte
                    _ => self.state = Trailer,
                },

                TrailerEndLf => {
                    ensure!(b == b'\n', ParseError::bad_request("invalid trailer end LF"));
                    return Ok(self.finish(data, offset + 1));
                }
            }
        }

        Ok(Decoded::Incomplete)
    }

    /// Shifts one more hex digit into the chunk size.
    ///
    /// The limit is checked after every digit, and `Settings` caps it so the
    /// shift cannot overflow.
    fn push_size_digit(&mut self, b: u8) -> Result<(), ParseError> {
        ensure!(hex::is_hex(b), ParseError::bad_request("invalid chunk size"));

        self.chunk_length = (self.chunk_length << 4) | u64::from(hex::unhex(b));

        let max_size = self.settings.max_chunk_size();
        ensure!(self.chunk_length <= max_size, ParseError::too_large_chunk(max_size));
        Ok(())
    }

    fn finish<'a>(&mut self, data: &'a [u8], end: usize) -> Decoded<'a> {
        self.state = SizeFirst;
        self.chunk_length = 0;

        let extra = &data[end..];
        trace!(extra = extra.len(), "finished reading chunked body");
        Decoded::Eof { extra }
    }
}

impl Default for ChunkedDecoder {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
