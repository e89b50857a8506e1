use crate::{
    codec::{FrameEncoder, RlncFrameEncoder},
    errors::TxqrError,
};

/// Fountain-encodes payloads into frames meant to be shown one QR code at a time, keeping the
/// frames of the most recent successful `encode` call around for retrieval.
pub struct ChunkProducer<E = RlncFrameEncoder> {
    chunk_len: usize,
    encoder: E,
    chunks: Vec<String>,
}

impl ChunkProducer {
    /// Creates a producer around an RLNC frame encoder, splitting payloads into source pieces of
    /// roughly `chunk_len` bytes. Values of 100-500 scan reliably.
    ///
    /// # Returns
    ///
    /// Returns a `Result` which is:
    /// - `Ok(ChunkProducer)` holding no chunks yet.
    /// - `Err(TxqrError::InvalidChunkLength)` if `chunk_len` is zero.
    pub fn new(chunk_len: usize) -> Result<Self, TxqrError> {
        Ok(Self::with_encoder(chunk_len, RlncFrameEncoder::new(chunk_len)?))
    }
}

impl<E: FrameEncoder> ChunkProducer<E> {
    /// Wraps an already configured encoder. `chunk_len` is informational, the encoder decides how
    /// payloads are split.
    pub fn with_encoder(chunk_len: usize, encoder: E) -> Self {
        ChunkProducer {
            chunk_len,
            encoder,
            chunks: Vec::new(),
        }
    }

    /// Encodes `data`, replacing previously produced chunks. On failure, they're left untouched.
    pub fn encode(&mut self, data: &[u8]) -> Result<(), TxqrError> {
        self.chunks = self.encoder.encode(data)?;
        Ok(())
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk(&self, idx: usize) -> Option<&str> {
        self.chunks.get(idx).map(String::as_str)
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// Affects subsequent `encode` calls only. Higher values produce more frames, which makes
    /// reconstruction on the receiving side more likely and faster.
    pub fn set_redundancy_factor(&mut self, redundancy_factor: f64) {
        self.encoder.set_redundancy_factor(redundancy_factor);
    }

    pub fn redundancy_factor(&self) -> f64 {
        self.encoder.redundancy_factor()
    }
}
