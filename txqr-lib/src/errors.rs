use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TxqrError {
    /// Scanned text can't be a frame at all.
    #[error("invalid frame: {0:?}")]
    InvalidFrame(String),

    /// Frame header isn't `blockCode/chunkLen/total`, or announces a payload shape out of bounds.
    #[error("malformed frame header: {0:?}")]
    MalformedFrameHeader(String),
    /// Frame belongs to a payload of a different shape than the one being decoded.
    #[error(
        "frame metadata mismatch: expected chunk length {expected_chunk_len}B and total {expected_total}B, got {chunk_len}B and {total}B"
    )]
    FrameMetadataMismatch {
        expected_chunk_len: usize,
        expected_total: usize,
        chunk_len: usize,
        total: usize,
    },
    /// Frame payload isn't a hex-encoded coded piece.
    #[error("invalid payload in frame {0}: {1}")]
    InvalidFramePayload(u64, String),
    /// The codec refused the coded piece carried by a frame, or reconstruction from it failed.
    #[error("decoding frame {0} failed: {1}")]
    FrameDecodingFailed(u64, String),

    /// Nothing to encode.
    #[error("empty payload can't be encoded")]
    EmptyPayload,
    /// Chunk length must be positive.
    #[error("invalid chunk length: {0}")]
    InvalidChunkLength(usize),
    /// Payload is larger than a transfer may be.
    #[error("payload of {0}B is too large to be encoded")]
    PayloadTooLarge(usize),
    /// Payload would be split into too many source pieces for the chosen chunk length.
    #[error("payload would be split into {0} source pieces, too many to be encoded")]
    TooManySourcePieces(usize),
    /// Redundancy factor asks for more frames than a single encoding may produce.
    #[error("encoding would produce {0} frames, too many to be displayed")]
    TooManyFrames(usize),
    /// The codec refused the payload.
    #[error("payload encoding failed: {0}")]
    PayloadEncodingFailed(String),
}

impl TxqrError {
    /// Scanned text doesn't look like a frame at all. Expected while a camera is pointed at
    /// unrelated QR codes, callers should keep scanning.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, TxqrError::InvalidFrame(_))
    }

    /// A frame looked right but couldn't be fed to the decoder. Not fatal to the transfer.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            TxqrError::MalformedFrameHeader(_)
                | TxqrError::FrameMetadataMismatch { .. }
                | TxqrError::InvalidFramePayload(_, _)
                | TxqrError::FrameDecodingFailed(_, _)
        )
    }

    /// The encoder rejected a payload or its configuration.
    pub fn is_encode_error(&self) -> bool {
        matches!(
            self,
            TxqrError::EmptyPayload
                | TxqrError::InvalidChunkLength(_)
                | TxqrError::PayloadTooLarge(_)
                | TxqrError::TooManySourcePieces(_)
                | TxqrError::TooManyFrames(_)
                | TxqrError::PayloadEncodingFailed(_)
        )
    }
}
