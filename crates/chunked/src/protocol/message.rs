use bytes::{Buf, Bytes};

/// Outcome of a single [`ChunkedDecoder::decode`](crate::codec::ChunkedDecoder::decode) call.
///
/// All slices borrow from the buffer handed to `decode`. Whenever a chunk is
/// returned, `extra` is exactly the rest of that buffer after the chunk bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decoded<'a> {
    /// Payload bytes of the current chunk, plus the unprocessed rest of the input.
    ///
    /// `extra` must be fed back to the decoder. It is empty when the chunk
    /// continues past the end of the input.
    Chunk { chunk: &'a [u8], extra: &'a [u8] },
    /// The input was consumed without producing payload; more data is expected.
    Incomplete,
    /// The body is complete. `extra` holds the bytes following the terminator,
    /// which belong to whatever comes after the body.
    Eof { extra: &'a [u8] },
}

impl<'a> Decoded<'a> {
    /// Decoded payload bytes, empty unless this is [`Decoded::Chunk`].
    #[inline]
    pub fn chunk(&self) -> &'a [u8] {
        match self {
            Decoded::Chunk { chunk, .. } => chunk,
            Decoded::Incomplete | Decoded::Eof { .. } => &[],
        }
    }

    /// Leftover bytes handed back to the caller.
    #[inline]
    pub fn extra(&self) -> &'a [u8] {
        match self {
            Decoded::Chunk { extra, .. } | Decoded::Eof { extra } => extra,
            Decoded::Incomplete => &[],
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Decoded::Eof { .. })
    }

    #[inline]
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Decoded::Incomplete)
    }

    #[inline]
    pub fn is_chunk(&self) -> bool {
        matches!(self, Decoded::Chunk { .. })
    }
}

/// Represents an item in the decoded payload stream.
///
/// Produced by [`PayloadDecoder`](crate::codec::PayloadDecoder): either a chunk
/// of body data or the end of the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadItem<Data: Buf = Bytes> {
    /// A chunk of payload data
    Chunk(Data),
    /// Marks the end of the payload stream
    Eof,
}

impl<D: Buf> PayloadItem<D> {
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, PayloadItem::Eof)
    }

    #[inline]
    pub fn is_chunk(&self) -> bool {
        matches!(self, PayloadItem::Chunk(_))
    }
}

impl PayloadItem {
    /// Returns a reference to the contained bytes if this is a Chunk
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            PayloadItem::Chunk(bytes) => Some(bytes),
            PayloadItem::Eof => None,
        }
    }

    /// Consumes the item and returns the contained bytes if this is a Chunk
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            PayloadItem::Chunk(bytes) => Some(bytes),
            PayloadItem::Eof => None,
        }
    }
}

impl From<Bytes> for PayloadItem {
    fn from(bytes: Bytes) -> Self {
        Self::Chunk(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_accessors() {
        let data = b"abc\r\n";
        let chunk = Decoded::Chunk { chunk: &data[..3], extra: &data[3..] };
        assert!(chunk.is_chunk());
        assert_eq!(chunk.chunk(), b"abc");
        assert_eq!(chunk.extra(), b"\r\n");

        let eof = Decoded::Eof { extra: b"GET" };
        assert!(eof.is_eof());
        assert!(eof.chunk().is_empty());
        assert_eq!(eof.extra(), b"GET");

        assert!(Decoded::Incomplete.is_incomplete());
        assert!(Decoded::Incomplete.chunk().is_empty());
        assert!(Decoded::Incomplete.extra().is_empty());
    }

    #[test]
    fn test_payload_item() {
        let item = PayloadItem::from(Bytes::from_static(b"hello"));
        assert!(item.is_chunk());
        assert_eq!(item.as_bytes().unwrap(), &Bytes::from_static(b"hello"));
        assert_eq!(item.into_bytes().unwrap(), Bytes::from_static(b"hello"));

        let eof: PayloadItem = PayloadItem::Eof;
        assert!(eof.is_eof());
        assert!(eof.into_bytes().is_none());
    }
}
