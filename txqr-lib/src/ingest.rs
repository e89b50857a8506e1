use crate::{
    clock::{Clock, MonotonicClock},
    codec::{FrameDecoder, RlncFrameDecoder},
    consts::{TXQR_MAX_PROGRESS_BEFORE_COMPLETION, TXQR_PROGRESS_OVERSHOOT_FACTOR},
    errors::TxqrError,
    frame::parse_frame_header,
    humanize::{format_bytes, format_duration, format_rate},
};
use std::{
    collections::HashSet,
    time::{Duration, Instant},
};
use tracing::{debug, info};

/// Bookkeeping for one decode attempt. Replaced wholesale on reset.
#[derive(Debug, Default)]
struct IngestSession {
    unique_blocks: usize,
    // Latched from the first frame whose header parses with a non-zero chunk length.
    chunk_len: usize,
    total_bytes: usize,
    started_at: Option<Instant>,
    last_frame_at: Option<Instant>,
    last_interval: Duration,
    seen_headers: HashSet<String>,
    progress: u8,
    bytes_per_sec: u64,
}

/// Bytes per second, computed in integer nanoseconds. `None` if no time has passed.
fn bytes_per_sec(bytes: u128, elapsed: Duration) -> Option<u64> {
    let elapsed_nanos = elapsed.as_nanos();
    if elapsed_nanos == 0 {
        return None;
    }

    Some(u64::try_from(bytes * 1_000_000_000 / elapsed_nanos).unwrap_or(u64::MAX))
}

/// Receives scanned frames one at a time, forwards them to a fountain decoder and estimates how
/// far along the transfer is, without any insight into the decoder's internal state.
///
/// The estimate only counts unique frame headers, so it's a heuristic. It's capped at 99% until
/// the decoder itself confirms that the payload has been reconstructed.
pub struct FrameIngestor<D = RlncFrameDecoder, C = MonotonicClock> {
    decoder: D,
    clock: C,
    session: IngestSession,
}

impl FrameIngestor {
    /// Creates an ingestor around a fresh RLNC frame decoder, timed by the monotonic system clock.
    pub fn new() -> Self {
        Self::with_decoder(RlncFrameDecoder::new(), MonotonicClock)
    }
}

impl Default for FrameIngestor {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: FrameDecoder, C: Clock> FrameIngestor<D, C> {
    pub fn with_decoder(decoder: D, clock: C) -> Self {
        FrameIngestor {
            decoder,
            clock,
            session: IngestSession::default(),
        }
    }

    /// Ingests a single scanned frame.
    ///
    /// Once the transfer has completed, every call is a no-op returning `Ok(())`, since a scanning
    /// loop usually keeps delivering frames for a moment after completion. Frames whose header
    /// can't be parsed are still forwarded to the decoder, they're just left out of the progress
    /// bookkeeping.
    ///
    /// # Arguments
    ///
    /// * `frame` - Text of the scanned QR code, expected as `blockCode/chunkLen/total|payload`.
    ///
    /// # Returns
    ///
    /// Returns a `Result` which is:
    /// - `Ok(())` if the frame was accepted, or the transfer is already complete.
    /// - `Err(TxqrError)` exactly as reported by the decoder, if it failed validation or decoding.
    ///   Neither is fatal, callers should keep scanning.
    pub fn ingest(&mut self, frame: &str) -> Result<(), TxqrError> {
        if self.decoder.is_completed() {
            return Ok(());
        }

        self.decoder.validate(frame)?;

        let (header, chunk_len, total) = match parse_frame_header(frame) {
            Some((header, parsed)) => (header, parsed.get_chunk_len(), parsed.get_total()),
            None => {
                debug!("frame header didn't parse, skipping progress bookkeeping");
                ("", 0, 0)
            }
        };

        let session = &mut self.session;
        let is_new_block = !header.is_empty() && session.seen_headers.insert(header.to_string());

        if chunk_len > 0 && session.chunk_len == 0 {
            session.chunk_len = chunk_len;
            session.total_bytes = total;
        }

        let now = self.clock.now();
        session.started_at.get_or_insert(now);

        if let Some(last_frame_at) = session.last_frame_at {
            session.last_interval = now.saturating_duration_since(last_frame_at);
        }
        session.last_frame_at = Some(now);

        self.decoder.decode(frame)?;

        if is_new_block {
            self.session.unique_blocks += 1;
            self.recalc_progress(now);

            debug!(
                header,
                unique_blocks = self.session.unique_blocks,
                progress = self.session.progress,
                "accepted new block"
            );
        }

        if self.decoder.is_completed() {
            info!(
                total_bytes = self.session.total_bytes,
                unique_blocks = self.session.unique_blocks,
                elapsed_ms = self.elapsed_ms(),
                "transfer completed"
            );
        }

        Ok(())
    }

    fn recalc_progress(&mut self, now: Instant) {
        let session = &mut self.session;
        if session.total_bytes == 0 || session.chunk_len == 0 || session.unique_blocks == 0 {
            return;
        }

        if let Some(started_at) = session.started_at {
            // Each block carries at most `chunk_len` payload bytes.
            let bytes_approx = session.unique_blocks as u128 * session.chunk_len as u128;
            if let Some(rate) = bytes_per_sec(bytes_approx, now.saturating_duration_since(started_at)) {
                session.bytes_per_sec = rate;
            }
        }

        let source_chunks = session.total_bytes.div_ceil(session.chunk_len);
        let expected_blocks = ((source_chunks as f64 * TXQR_PROGRESS_OVERSHOOT_FACTOR).round() as usize).max(1);

        let progress = session.unique_blocks.saturating_mul(100) / expected_blocks;
        session.progress = progress.min(TXQR_MAX_PROGRESS_BEFORE_COMPLETION as usize) as u8;
    }

    /// Transfer progress as a percentage in `0..=100`. Only ever 100 once the decoder has
    /// reconstructed the payload.
    pub fn progress(&self) -> u8 {
        if self.decoder.is_completed() {
            return 100;
        }

        self.session.progress
    }

    /// Throughput in bytes per second. Exact, i.e. total payload size over elapsed time, once the
    /// transfer has completed, otherwise the estimate made when the last new block arrived.
    pub fn throughput(&self) -> u64 {
        if self.decoder.is_completed() && self.session.total_bytes > 0 {
            if let Some(rate) = self.session.started_at.and_then(|started_at| {
                bytes_per_sec(self.session.total_bytes as u128, self.clock.now().saturating_duration_since(started_at))
            }) {
                return rate;
            }
        }

        self.session.bytes_per_sec
    }

    /// Human-readable throughput, e.g. `"45.2 KB/s"`.
    pub fn throughput_estimate(&self) -> String {
        format_rate(self.throughput())
    }

    /// Time between the two most recent frames, duplicates included. Zero until two frames arrived.
    pub fn last_inter_frame_interval(&self) -> Duration {
        self.session.last_interval
    }

    pub fn last_inter_frame_interval_ms(&self) -> u64 {
        u64::try_from(self.session.last_interval.as_millis()).unwrap_or(u64::MAX)
    }

    /// Time since the first accepted frame. Zero if the session never started.
    pub fn elapsed(&self) -> Duration {
        self.session
            .started_at
            .map(|started_at| self.clock.now().saturating_duration_since(started_at))
            .unwrap_or_default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn elapsed_human(&self) -> String {
        format_duration(self.elapsed())
    }

    pub fn total_size_human(&self) -> String {
        format_bytes(self.session.total_bytes as u64)
    }

    pub fn is_completed(&self) -> bool {
        self.decoder.is_completed()
    }

    /// Number of distinct frame headers which were accepted by the decoder.
    pub fn unique_blocks(&self) -> usize {
        self.session.unique_blocks
    }

    pub fn chunk_len(&self) -> usize {
        self.session.chunk_len
    }

    pub fn total_bytes(&self) -> usize {
        self.session.total_bytes
    }

    /// The reconstructed payload, once completed.
    pub fn data(&self) -> Option<&[u8]> {
        self.decoder.data()
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Drops all session state and resets the decoder, preparing for the next transfer.
    pub fn reset(&mut self) {
        self.decoder.reset();
        self.session = IngestSession::default();
    }
}
