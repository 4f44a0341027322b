/// A chunked body to benchmark, one chunk per payload string.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    chunks: &'static [&'static str],
    repeat: usize,
}

impl TestCase {
    pub const fn new(name: &'static str, chunks: &'static [&'static str]) -> Self {
        Self { name, chunks, repeat: 1 }
    }

    /// The same chunk sent `repeat` times.
    pub const fn repeated(name: &'static str, chunk: &'static [&'static str; 1], repeat: usize) -> Self {
        Self { name, chunks: chunk, repeat }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Payload length once decoded.
    pub fn payload_len(&self) -> usize {
        self.chunks.iter().map(|c| c.len()).sum::<usize>() * self.repeat
    }

    /// The chunked encoding of the body, terminated by the last chunk.
    pub fn encoded(&self) -> Vec<u8> {
        let mut encoded = Vec::with_capacity(self.payload_len() + 8 * self.chunks.len() * self.repeat + 5);
        for _ in 0..self.repeat {
            for chunk in self.chunks {
                encoded.extend_from_slice(format!("{:x}\r\n", chunk.len()).as_bytes());
                encoded.extend_from_slice(chunk.as_bytes());
                encoded.extend_from_slice(b"\r\n");
            }
        }
        encoded.extend_from_slice(b"0\r\n\r\n");
        encoded
    }
}
