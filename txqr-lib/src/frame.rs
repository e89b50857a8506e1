use crate::consts::{TXQR_HEADER_FIELD_SEPARATOR, TXQR_HEADER_SEPARATOR};

/// Metadata carried in front of every frame, rendered on the wire as `blockCode/chunkLen/total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHeader {
    block_code: u64,
    chunk_len: usize,
    total: usize,
}

impl FrameHeader {
    pub fn new(block_code: u64, chunk_len: usize, total: usize) -> Self {
        FrameHeader { block_code, chunk_len, total }
    }

    /// Opaque per-block code, unique within one encoding run.
    pub fn get_block_code(&self) -> u64 {
        self.block_code
    }

    /// Nominal number of payload bytes carried by each source piece.
    pub fn get_chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// Size of the whole transferred payload in bytes.
    pub fn get_total(&self) -> usize {
        self.total
    }

    /// Renders a complete frame, `header|payload`.
    pub fn to_frame(&self, payload: &str) -> String {
        format!(
            "{}{sep}{}{sep}{}{}{}",
            self.block_code,
            self.chunk_len,
            self.total,
            TXQR_HEADER_SEPARATOR,
            payload,
            sep = TXQR_HEADER_FIELD_SEPARATOR
        )
    }
}

/// Splits a frame at its first `|` and parses the three header integers.
///
/// # Returns
///
/// - `Some((header, parsed))` where `header` is the raw text before `|`, usable as a dedup key.
/// - `None` if there's no separator, or the header isn't exactly three unsigned decimal integers.
pub fn parse_frame_header(frame: &str) -> Option<(&str, FrameHeader)> {
    let (header, _) = frame.split_once(TXQR_HEADER_SEPARATOR)?;

    let mut fields = header.split(TXQR_HEADER_FIELD_SEPARATOR);
    let block_code = parse_field::<u64>(fields.next()?)?;
    let chunk_len = parse_field::<usize>(fields.next()?)?;
    let total = parse_field::<usize>(fields.next()?)?;

    if fields.next().is_some() {
        return None;
    }

    Some((header, FrameHeader::new(block_code, chunk_len, total)))
}

/// Returns the payload part of a frame, everything after the first `|`.
pub fn frame_payload(frame: &str) -> Option<&str> {
    frame.split_once(TXQR_HEADER_SEPARATOR).map(|(_, payload)| payload)
}

fn parse_field<T: std::str::FromStr>(field: &str) -> Option<T> {
    // `FromStr` for integers tolerates a leading `+`, the wire format doesn't.
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    field.parse::<T>().ok()
}
