//! Limits applied while decoding a chunked body.

/// Configuration of a [`ChunkedDecoder`](crate::codec::ChunkedDecoder).
///
/// `max_chunk_size` bounds the announced size of every single chunk. It is
/// checked after each hex digit of the size line, so an overlong size token is
/// rejected as soon as its value crosses the limit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawSettings"))]
pub struct Settings {
    max_chunk_size: u64,
}

impl Settings {
    /// Default chunk size limit: 1 MiB.
    pub const DEFAULT_MAX_CHUNK_SIZE: u64 = 1024 * 1024;

    /// Largest accepted limit. One more hex digit shifted into a value at or
    /// below this bound still fits in a `u64`.
    pub const MAX_CHUNK_SIZE_LIMIT: u64 = u64::MAX >> 4;

    /// Creates settings with the given chunk size limit, clamped to
    /// [`Settings::MAX_CHUNK_SIZE_LIMIT`].
    ///
    /// A limit of 0 only admits the terminal chunk.
    pub const fn new(max_chunk_size: u64) -> Self {
        let max_chunk_size =
            if max_chunk_size > Self::MAX_CHUNK_SIZE_LIMIT { Self::MAX_CHUNK_SIZE_LIMIT } else { max_chunk_size };
        Self { max_chunk_size }
    }

    #[inline]
    pub const fn max_chunk_size(&self) -> u64 {
        self.max_chunk_size
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CHUNK_SIZE)
    }
}

/// Unvalidated form read from configuration files, clamped through [`Settings::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawSettings {
    max_chunk_size: u64,
}

#[cfg(feature = "serde")]
impl Default for RawSettings {
    fn default() -> Self {
        Self { max_chunk_size: Settings::DEFAULT_MAX_CHUNK_SIZE }
    }
}

#[cfg(feature = "serde")]
impl From<RawSettings> for Settings {
    fn from(raw: RawSettings) -> Self {
        Self::new(raw.max_chunk_size)
    }
}
