//! # TXQR-lib: Data Transfer over Animated QR Codes
//!
//! `txqr-lib` moves arbitrary payloads over a sequence of QR codes, shown one after another on a screen
//! and scanned by a camera. Payloads are fountain-coded, using Random Linear Network Coding (RLNC), so the
//! receiver can reconstruct them from any sufficiently large subset of frames, regardless of scan order or
//! frames missed along the way.
//!
//! Every frame is a string `blockCode/chunkLen/total|payload`. The library itself is split in two halves:
//!
//! - [`ChunkProducer`] encodes a payload into frames, retrievable by index.
//! - [`FrameIngestor`] takes scanned frames one at a time, deduplicates them, forwards them to the decoder,
//!   and keeps track of progress, throughput and timing without any insight into the decoder's state.
//!
//! Both are generic over the codec, see [`FrameEncoder`] and [`FrameDecoder`]. Hosts which can't handle
//! anything but primitive values should use [`MobileEncoder`] and [`MobileDecoder`].
//!
//! ## How to Use
//!
//! ### 1. Produce Frames
//!
//! ```rust
//! use txqr_lib::ChunkProducer;
//!
//! let payload = b"Hello from the other side of the screen!".repeat(50);
//!
//! let mut producer = ChunkProducer::new(200).expect("Failed to create producer");
//! producer.set_redundancy_factor(3.0);
//! producer.encode(&payload).expect("Failed to encode payload");
//!
//! println!("Produced {} frames", producer.chunk_count());
//! for _frame in producer.chunks() {
//!     // Render each frame as a QR code, and display them in a loop.
//! }
//! ```
//!
//! ### 2. Ingest Scanned Frames
//!
//! Most QR codes a camera sees while scanning won't be frames of the transfer, and some frames will be seen
//! many times. Errors returned by [`FrameIngestor::ingest`] are therefore never fatal, just keep scanning.
//!
//! ```rust
//! use txqr_lib::{ChunkProducer, FrameIngestor};
//!
//! let payload = b"Hello from the other side of the screen!".repeat(50);
//!
//! let mut producer = ChunkProducer::new(200).expect("Failed to create producer");
//! producer.set_redundancy_factor(3.0);
//! producer.encode(&payload).expect("Failed to encode payload");
//!
//! let mut ingestor = FrameIngestor::new();
//! let _ = ingestor.ingest("https://not-a-frame.example.com");
//!
//! for frame in producer.chunks().iter().cycle().take(10 * producer.chunk_count()) {
//!     if ingestor.is_completed() {
//!         break;
//!     }
//!
//!     if let Err(e) = ingestor.ingest(frame) {
//!         eprintln!("Skipping frame: {}", e);
//!     }
//!     println!("{}% @ {}", ingestor.progress(), ingestor.throughput_estimate());
//! }
//!
//! assert!(ingestor.is_completed());
//! assert_eq!(ingestor.progress(), 100);
//! assert_eq!(ingestor.data(), Some(payload.as_slice()));
//! println!("Received {} in {}", ingestor.total_size_human(), ingestor.elapsed_human());
//! ```

mod clock;
mod codec;
mod consts;
mod errors;
mod frame;
mod humanize;
mod ingest;
mod mobile;
mod produce;


pub use clock::{Clock, ManualClock, MonotonicClock};
pub use codec::{FrameDecoder, FrameEncoder, RlncFrameDecoder, RlncFrameEncoder};
pub use consts::{TXQR_DEFAULT_REDUNDANCY_FACTOR, TXQR_MAX_PROGRESS_BEFORE_COMPLETION, TXQR_PROGRESS_OVERSHOOT_FACTOR};
pub use errors::TxqrError;
pub use frame::{FrameHeader, frame_payload, parse_frame_header};
pub use humanize::{format_bytes, format_duration, format_rate};
pub use ingest::FrameIngestor;
pub use mobile::{MobileDecoder, MobileEncoder};
pub use produce::ChunkProducer;
