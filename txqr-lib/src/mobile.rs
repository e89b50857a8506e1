//! Bindings for embedding hosts which can only pass primitive values across their boundary, such
//! as mobile apps. Collections are exposed through index-based accessors, errors as strings.

use crate::{ingest::FrameIngestor, produce::ChunkProducer};

/// Frame decoder for a camera-scanning host.
#[derive(Default)]
pub struct MobileDecoder {
    ingestor: FrameIngestor,
}

impl MobileDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one scanned QR code. Errors are expected for unrelated QR codes in view and can
    /// simply be ignored by the scanning loop.
    pub fn decode(&mut self, frame: &str) -> Result<(), String> {
        self.ingestor.ingest(frame).map_err(|err| err.to_string())
    }

    pub fn is_completed(&self) -> bool {
        self.ingestor.is_completed()
    }

    /// Reconstructed payload, empty until completed.
    pub fn data(&self) -> Vec<u8> {
        self.ingestor.data().map(<[u8]>::to_vec).unwrap_or_default()
    }

    pub fn progress(&self) -> i64 {
        i64::from(self.ingestor.progress())
    }

    pub fn speed(&self) -> String {
        self.ingestor.throughput_estimate()
    }

    pub fn read_interval(&self) -> i64 {
        i64::try_from(self.ingestor.last_inter_frame_interval_ms()).unwrap_or(i64::MAX)
    }

    pub fn total_time(&self) -> String {
        self.ingestor.elapsed_human()
    }

    pub fn total_time_ms(&self) -> i64 {
        i64::try_from(self.ingestor.elapsed_ms()).unwrap_or(i64::MAX)
    }

    pub fn total_size(&self) -> String {
        self.ingestor.total_size_human()
    }

    pub fn reset(&mut self) {
        self.ingestor.reset();
    }
}

/// Frame encoder for a QR-displaying host.
pub struct MobileEncoder {
    producer: ChunkProducer,
}

impl MobileEncoder {
    pub fn new(chunk_len: i64) -> Result<Self, String> {
        let chunk_len = usize::try_from(chunk_len).map_err(|_| format!("invalid chunk length: {}", chunk_len))?;
        let producer = ChunkProducer::new(chunk_len).map_err(|err| err.to_string())?;

        Ok(MobileEncoder { producer })
    }

    /// Encodes `data`. Retrieve the frames with `chunk_count` and `get_chunk` afterwards.
    pub fn encode(&mut self, data: &str) -> Result<(), String> {
        self.producer.encode(data.as_bytes()).map_err(|err| err.to_string())
    }

    pub fn chunk_count(&self) -> i64 {
        i64::try_from(self.producer.chunk_count()).unwrap_or(i64::MAX)
    }

    /// Frame at `idx`, or an empty string if `idx` isn't in `0..chunk_count()`.
    pub fn get_chunk(&self, idx: i64) -> String {
        usize::try_from(idx)
            .ok()
            .and_then(|idx| self.producer.chunk(idx))
            .map(str::to_string)
            .unwrap_or_default()
    }

    pub fn set_redundancy_factor(&mut self, redundancy_factor: f64) {
        self.producer.set_redundancy_factor(redundancy_factor);
    }
}
