/// Redundancy factor a freshly constructed encoder starts with.
pub const TXQR_DEFAULT_REDUNDANCY_FACTOR: f64 = 2.0;

/// Multiplier applied to the number of source pieces when estimating how many unique frames a
/// receiver needs before the payload can be reconstructed. Deliberately above the code's typical
/// overhead, so the displayed bar approaches ~90% before reconstruction rather than stalling at 99%.
pub const TXQR_PROGRESS_OVERSHOOT_FACTOR: f64 = 1.2;

/// Highest progress percentage reported while reconstruction has not been confirmed.
pub const TXQR_MAX_PROGRESS_BEFORE_COMPLETION: u8 = 99;

/// Separates the frame header from its payload.
pub const TXQR_HEADER_SEPARATOR: char = '|';

/// Separates the integer fields within a frame header.
pub const TXQR_HEADER_FIELD_SEPARATOR: char = '/';

/// Shortest string which can possibly be a frame.
pub const TXQR_MIN_FRAME_LEN: usize = 4;

/// Largest payload a frame header may announce. Receivers size their decoders from untrusted
/// headers, anything above this is rejected before allocating.
pub const TXQR_MAX_PAYLOAD_BYTE_LEN: usize = 1usize << 24;

/// Largest number of source pieces a payload may be split into.
pub const TXQR_MAX_SOURCE_PIECES: usize = 1usize << 16;

/// Source pieces are coded in independent generations of at most this many pieces, which bounds
/// the coding vector carried by every frame.
pub const TXQR_MAX_GENERATION_PIECES: usize = 32;

/// Largest number of frames a single `encode` call may produce.
pub const TXQR_MAX_FRAMES: usize = 1usize << 20;
