use crate::{
    consts::{
        TXQR_DEFAULT_REDUNDANCY_FACTOR, TXQR_HEADER_SEPARATOR, TXQR_MAX_FRAMES, TXQR_MAX_GENERATION_PIECES,
        TXQR_MAX_PAYLOAD_BYTE_LEN, TXQR_MAX_SOURCE_PIECES, TXQR_MIN_FRAME_LEN,
    },
    errors::TxqrError,
    frame::{FrameHeader, frame_payload, parse_frame_header},
};
use rayon::prelude::*;
use std::{collections::HashSet, ops::Range};
use tracing::{debug, info, warn};

/// Receiving half of the fountain codec. Frames are fed one at a time, in any order, until the
/// codec reports that the payload has been reconstructed.
pub trait FrameDecoder {
    /// Cheap check that `frame` looks like a frame of this codec at all.
    fn validate(&self, frame: &str) -> Result<(), TxqrError>;

    /// Feeds one frame to the decoder.
    fn decode(&mut self, frame: &str) -> Result<(), TxqrError>;

    /// Whether the payload has been reconstructed.
    fn is_completed(&self) -> bool;

    /// Drops all received state, preparing for the next transfer.
    fn reset(&mut self);

    /// The reconstructed payload, once completed.
    fn data(&self) -> Option<&[u8]>;
}

/// Sending half of the fountain codec.
pub trait FrameEncoder {
    /// Encodes `payload` into an ordered sequence of frames.
    fn encode(&self, payload: &[u8]) -> Result<Vec<String>, TxqrError>;

    /// Changes how many frames subsequent `encode` calls produce, relative to the number of source pieces.
    fn set_redundancy_factor(&mut self, redundancy_factor: f64);

    fn redundancy_factor(&self) -> f64;
}

/// How a payload of `total` bytes is split into source pieces of `chunk_len` bytes, and those into
/// generations which are coded independently. Derived from the frame header alone, so both sides
/// agree on it. Frame with block code `i` belongs to generation `i % num_generations`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GenerationLayout {
    chunk_len: usize,
    total: usize,
    piece_count: usize,
    num_generations: usize,
}

impl GenerationLayout {
    fn new(chunk_len: usize, total: usize) -> Result<Self, TxqrError> {
        if chunk_len == 0 {
            return Err(TxqrError::InvalidChunkLength(chunk_len));
        }
        if total == 0 {
            return Err(TxqrError::EmptyPayload);
        }
        if total > TXQR_MAX_PAYLOAD_BYTE_LEN {
            return Err(TxqrError::PayloadTooLarge(total));
        }

        let piece_count = total.div_ceil(chunk_len);
        if piece_count > TXQR_MAX_SOURCE_PIECES {
            return Err(TxqrError::TooManySourcePieces(piece_count));
        }

        Ok(GenerationLayout {
            chunk_len,
            total,
            piece_count,
            num_generations: piece_count.div_ceil(TXQR_MAX_GENERATION_PIECES),
        })
    }

    fn generation_of(&self, block_code: u64) -> usize {
        (block_code % self.num_generations as u64) as usize
    }

    /// Generations hold a balanced share of pieces, differing by at most one.
    fn pieces_in(&self, generation: usize) -> usize {
        let base = self.piece_count / self.num_generations;
        base + usize::from(generation < self.piece_count % self.num_generations)
    }

    fn max_pieces_per_generation(&self) -> usize {
        self.piece_count.div_ceil(self.num_generations)
    }

    fn byte_range(&self, generation: usize) -> Range<usize> {
        let base = self.piece_count / self.num_generations;
        let first_piece = generation * base + generation.min(self.piece_count % self.num_generations);

        let from = first_piece.saturating_mul(self.chunk_len).min(self.total);
        let to = (first_piece + self.pieces_in(generation)).saturating_mul(self.chunk_len).min(self.total);
        from..to
    }

    /// Byte length of each piece of a generation, after the codec appends its end-of-data marker
    /// and pads.
    fn piece_byte_len(&self, generation: usize) -> usize {
        (self.byte_range(generation).len() + 1).div_ceil(self.pieces_in(generation))
    }
}

fn preview(frame: &str) -> String {
    const PREVIEW_CHAR_LEN: usize = 32;
    frame.chars().take(PREVIEW_CHAR_LEN).collect()
}

/// Fountain encoder backed by Random Linear Network Coding. Source pieces are grouped into
/// generations of at most `TXQR_MAX_GENERATION_PIECES`, and every frame carries one coded piece of
/// one generation, i.e. a random linear combination of its source pieces prefixed by the coding
/// vector. Any large enough set of linearly independent frames per generation reconstructs it.
#[derive(Clone, Debug)]
pub struct RlncFrameEncoder {
    chunk_len: usize,
    redundancy_factor: f64,
}

impl RlncFrameEncoder {
    /// Creates an encoder splitting payloads into source pieces of roughly `chunk_len` bytes.
    ///
    /// # Returns
    ///
    /// Returns a `Result` which is:
    /// - `Ok(RlncFrameEncoder)` configured with the default redundancy factor.
    /// - `Err(TxqrError::InvalidChunkLength)` if `chunk_len` is zero.
    pub fn new(chunk_len: usize) -> Result<Self, TxqrError> {
        if chunk_len == 0 {
            return Err(TxqrError::InvalidChunkLength(chunk_len));
        }

        Ok(RlncFrameEncoder {
            chunk_len,
            redundancy_factor: TXQR_DEFAULT_REDUNDANCY_FACTOR,
        })
    }

    pub fn get_chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// Number of frames `encode` produces for a payload of `total` bytes.
    ///
    /// # Returns
    ///
    /// Returns a `Result` which is:
    /// - `Ok(usize)`, at least one frame.
    /// - `Err(TxqrError)` if such a payload can't be encoded, or would need more than `TXQR_MAX_FRAMES` frames.
    pub fn get_num_frames(&self, total: usize) -> Result<usize, TxqrError> {
        let layout = GenerationLayout::new(self.chunk_len, total)?;
        self.num_frames_for(&layout).map(|frames_per_generation| frames_per_generation * layout.num_generations)
    }

    /// Frames produced per generation. Every generation gets as many frames as the largest one
    /// needs, so a full display loop gives each of them the configured redundancy.
    fn num_frames_for(&self, layout: &GenerationLayout) -> Result<usize, TxqrError> {
        let frames_per_generation = (layout.max_pieces_per_generation() as f64 * self.redundancy_factor).ceil().max(1.0);
        let num_frames = frames_per_generation * layout.num_generations as f64;

        if num_frames > TXQR_MAX_FRAMES as f64 {
            return Err(TxqrError::TooManyFrames(num_frames as usize));
        }

        Ok(frames_per_generation as usize)
    }
}

impl FrameEncoder for RlncFrameEncoder {
    fn encode(&self, payload: &[u8]) -> Result<Vec<String>, TxqrError> {
        let total = payload.len();
        let layout = GenerationLayout::new(self.chunk_len, total)?;
        let num_frames = self.num_frames_for(&layout)? * layout.num_generations;

        let encoders = (0..layout.num_generations)
            .map(|generation| {
                let data = payload[layout.byte_range(generation)].to_vec();

                rlnc::full::encoder::Encoder::new(data, layout.pieces_in(generation))
                    .map_err(|err| TxqrError::PayloadEncodingFailed(err.to_string()))
            })
            .collect::<Result<Vec<rlnc::full::encoder::Encoder>, TxqrError>>()?;

        let frames = (0..num_frames)
            .into_par_iter()
            .map(|block_code| {
                let block_code = block_code as u64;
                let mut rng = rand::rng();
                let coded_piece = encoders[layout.generation_of(block_code)].code(&mut rng);

                FrameHeader::new(block_code, self.chunk_len, total).to_frame(&const_hex::encode(coded_piece))
            })
            .collect::<Vec<String>>();

        info!(
            total,
            piece_count = layout.piece_count,
            num_generations = layout.num_generations,
            num_frames,
            redundancy_factor = self.redundancy_factor,
            "encoded payload"
        );
        Ok(frames)
    }

    fn set_redundancy_factor(&mut self, redundancy_factor: f64) {
        if !redundancy_factor.is_finite() || redundancy_factor <= 0.0 {
            warn!(redundancy_factor, keeping = self.redundancy_factor, "ignoring invalid redundancy factor");
            return;
        }

        self.redundancy_factor = redundancy_factor;
    }

    fn redundancy_factor(&self) -> f64 {
        self.redundancy_factor
    }
}

/// Decoding state of one generation. The RLNC decoder is only allocated once a frame of the
/// generation arrives.
#[derive(Default)]
struct RepairingGeneration {
    decoder: Option<rlnc::full::decoder::Decoder>,
    seen_block_codes: HashSet<u64>,
    data: Option<Vec<u8>>,
}

impl RepairingGeneration {
    fn is_repaired(&self) -> bool {
        self.data.is_some()
    }
}

/// Fountain decoder counterpart of `RlncFrameEncoder`. It sizes itself from the header of the
/// first frame it decodes and rejects frames belonging to a payload of a different shape.
#[derive(Default)]
pub struct RlncFrameDecoder {
    layout: Option<GenerationLayout>,
    generations: Vec<RepairingGeneration>,
    num_repaired: usize,
    data: Option<Vec<u8>>,
}

impl RlncFrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct frames which were successfully fed to the codec.
    pub fn get_num_decoded_frames(&self) -> usize {
        self.generations.iter().map(|generation| generation.seen_block_codes.len()).sum()
    }

    fn prepare(&mut self, header: &FrameHeader, frame: &str) -> Result<GenerationLayout, TxqrError> {
        let (chunk_len, total) = (header.get_chunk_len(), header.get_total());

        if let Some(layout) = self.layout {
            if layout.chunk_len != chunk_len || layout.total != total {
                return Err(TxqrError::FrameMetadataMismatch {
                    expected_chunk_len: layout.chunk_len,
                    expected_total: layout.total,
                    chunk_len,
                    total,
                });
            }

            return Ok(layout);
        }

        let layout = GenerationLayout::new(chunk_len, total).map_err(|_| TxqrError::MalformedFrameHeader(preview(frame)))?;
        debug!(
            chunk_len,
            total,
            piece_count = layout.piece_count,
            num_generations = layout.num_generations,
            "sized decoder from first frame"
        );

        self.layout = Some(layout);
        self.generations = (0..layout.num_generations).map(|_| RepairingGeneration::default()).collect();
        Ok(layout)
    }

    fn assemble(&mut self) {
        let data = self
            .generations
            .iter_mut()
            .flat_map(|generation| generation.data.take().unwrap_or_default())
            .collect::<Vec<u8>>();

        info!(total = data.len(), num_frames = self.get_num_decoded_frames(), "payload reconstructed");
        self.data = Some(data);
    }
}

impl FrameDecoder for RlncFrameDecoder {
    fn validate(&self, frame: &str) -> Result<(), TxqrError> {
        if frame.len() < TXQR_MIN_FRAME_LEN || !frame.contains(TXQR_HEADER_SEPARATOR) {
            return Err(TxqrError::InvalidFrame(preview(frame)));
        }

        Ok(())
    }

    fn decode(&mut self, frame: &str) -> Result<(), TxqrError> {
        if self.is_completed() {
            return Ok(());
        }

        let (_, header) = parse_frame_header(frame).ok_or_else(|| TxqrError::MalformedFrameHeader(preview(frame)))?;
        let layout = self.prepare(&header, frame)?;

        let block_code = header.get_block_code();
        let generation_id = layout.generation_of(block_code);
        let generation = &mut self.generations[generation_id];

        if generation.is_repaired() || generation.seen_block_codes.contains(&block_code) {
            debug!(block_code, generation_id, "frame not needed");
            return Ok(());
        }

        let payload = frame_payload(frame).unwrap_or_default();
        let coded_piece = const_hex::decode(payload).map_err(|err| TxqrError::InvalidFramePayload(block_code, err.to_string()))?;

        let decoder = match generation.decoder.take() {
            Some(decoder) => decoder,
            None => {
                let (piece_byte_len, piece_count) = (layout.piece_byte_len(generation_id), layout.pieces_in(generation_id));

                rlnc::full::decoder::Decoder::new(piece_byte_len, piece_count)
                    .map_err(|err| TxqrError::FrameDecodingFailed(block_code, err.to_string()))?
            }
        };
        let decoder = generation.decoder.insert(decoder);

        decoder
            .decode(&coded_piece)
            .map_err(|err| TxqrError::FrameDecodingFailed(block_code, err.to_string()))?;
        generation.seen_block_codes.insert(block_code);

        if !decoder.is_already_decoded() {
            return Ok(());
        }

        let expected_len = layout.byte_range(generation_id).len();
        let repaired = generation.decoder.take().map(|decoder| decoder.get_decoded_data());

        match repaired {
            Some(Ok(data)) if data.len() == expected_len => {
                generation.data = Some(data);
                self.num_repaired += 1;
            }
            outcome => {
                // Pieces of some other payload of the same shape got mixed in. Start the generation
                // over, so genuine frames scanned later can still complete it.
                generation.seen_block_codes.clear();

                let reason = match outcome {
                    Some(Err(err)) => format!("RLNC decoding error: {}", err),
                    Some(Ok(data)) => format!("repaired {}B, expected {}B", data.len(), expected_len),
                    None => "decoder isn't prepared".to_string(),
                };

                warn!(block_code, generation_id, %reason, "generation repair failed, starting it over");
                return Err(TxqrError::FrameDecodingFailed(block_code, reason));
            }
        }

        if self.num_repaired == layout.num_generations {
            self.assemble();
        }

        Ok(())
    }

    fn is_completed(&self) -> bool {
        self.data.is_some()
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameDecoder, FrameEncoder, GenerationLayout, RlncFrameDecoder, RlncFrameEncoder};
    use crate::{
        FrameIngestor,
        consts::{TXQR_MAX_GENERATION_PIECES, TXQR_MAX_PAYLOAD_BYTE_LEN},
        errors::TxqrError,
        frame::{FrameHeader, parse_frame_header},
    };
    use rand::{Rng, seq::SliceRandom};

    fn random_payload(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random()).collect()
    }

    fn encode(chunk_len: usize, payload: &[u8]) -> Vec<String> {
        RlncFrameEncoder::new(chunk_len)
            .expect("Must build encoder")
            .encode(payload)
            .expect("Must encode payload")
    }

    fn decode_all(frames: &[String]) -> RlncFrameDecoder {
        let mut decoder = RlncFrameDecoder::new();

        for frame in frames {
            if decoder.is_completed() {
                break;
            }

            decoder.validate(frame).expect("Encoded frame must be valid");
            let _ = decoder.decode(frame);
        }

        decoder
    }

    #[test]
    fn rejects_zero_chunk_len() {
        assert_eq!(RlncFrameEncoder::new(0).unwrap_err(), TxqrError::InvalidChunkLength(0));
    }

    #[test]
    fn rejects_empty_payload() {
        let encoder = RlncFrameEncoder::new(100).expect("Must build encoder");
        assert_eq!(encoder.encode(&[]).unwrap_err(), TxqrError::EmptyPayload);
    }

    #[test]
    fn rejects_oversized_payloads() {
        let encoder = RlncFrameEncoder::new(1).expect("Must build encoder");

        let too_large = TXQR_MAX_PAYLOAD_BYTE_LEN + 1;

        assert_eq!(encoder.get_num_frames(too_large), Err(TxqrError::PayloadTooLarge(too_large)));
        assert_eq!(encoder.get_num_frames(1 << 20), Err(TxqrError::TooManySourcePieces(1 << 20)));
    }

    #[test]
    fn layout_balances_generations() {
        let layout = GenerationLayout::new(100, 6_950).expect("Must build layout");

        assert_eq!(layout.piece_count, 70);
        assert_eq!(layout.num_generations, 3);
        assert_eq!((0..3).map(|g| layout.pieces_in(g)).collect::<Vec<usize>>(), vec![24, 23, 23]);
        assert_eq!(layout.byte_range(0), 0..2_400);
        assert_eq!(layout.byte_range(1), 2_400..4_700);
        assert_eq!(layout.byte_range(2), 4_700..6_950);
        assert_eq!(layout.piece_byte_len(2), 98);
    }

    #[test]
    fn frame_count_follows_redundancy_factor() {
        let mut encoder = RlncFrameEncoder::new(200).expect("Must build encoder");
        assert_eq!(encoder.get_num_frames(1000), Ok(10));

        encoder.set_redundancy_factor(1.5);
        assert_eq!(encoder.get_num_frames(1000), Ok(8));

        encoder.set_redundancy_factor(0.1);
        assert_eq!(encoder.get_num_frames(1000), Ok(1));

        encoder.set_redundancy_factor(f64::NAN);
        encoder.set_redundancy_factor(-3.0);
        encoder.set_redundancy_factor(0.0);
        assert_eq!(encoder.redundancy_factor(), 0.1);
    }

    #[test]
    fn huge_redundancy_factor_is_an_encode_error() {
        let mut encoder = RlncFrameEncoder::new(200).expect("Must build encoder");
        encoder.set_redundancy_factor(1e9);

        let err = encoder.encode(&random_payload(1000)).unwrap_err();
        assert_eq!(err, TxqrError::TooManyFrames(5_000_000_000));
        assert!(err.is_encode_error());

        encoder.set_redundancy_factor(f64::MAX);
        assert!(matches!(encoder.get_num_frames(1000), Err(TxqrError::TooManyFrames(_))));
    }

    #[test]
    fn frames_carry_consistent_headers() {
        let frames = encode(200, &random_payload(1000));

        assert_eq!(frames.len(), 10);
        for (idx, frame) in frames.iter().enumerate() {
            let (_, header) = parse_frame_header(frame).expect("Encoded frame must carry a header");

            assert_eq!(header.get_block_code(), idx as u64);
            assert_eq!(header.get_chunk_len(), 200);
            assert_eq!(header.get_total(), 1000);
        }
    }

    #[test]
    fn frame_len_is_bounded_by_chunk_len() {
        const CHUNK_LEN: usize = 300;

        for total in [1_000, 16_000, 64_000, 256_000] {
            let frames = encode(CHUNK_LEN, &random_payload(total));

            for frame in frames.iter() {
                let (header, _) = parse_frame_header(frame).expect("Encoded frame must carry a header");
                let max_coded_piece_len = TXQR_MAX_GENERATION_PIECES + CHUNK_LEN + 1;

                assert!(
                    frame.len() <= header.len() + 1 + 2 * max_coded_piece_len,
                    "{}B frame for {}B payload",
                    frame.len(),
                    total
                );
            }
        }
    }

    #[test]
    fn prop_test_shuffled_frames_reconstruct_payload() {
        const NUM_TEST_ITERATIONS: usize = 10;
        let mut rng = rand::rng();

        (0..NUM_TEST_ITERATIONS).for_each(|_| {
            let payload_len = rng.random_range(1..=4096);
            let chunk_len = rng.random_range(16..=512);
            let payload = random_payload(payload_len);

            let mut frames = encode(chunk_len, &payload);
            frames.shuffle(&mut rng);

            let decoder = decode_all(&frames);

            assert!(decoder.is_completed());
            assert_eq!(decoder.data(), Some(payload.as_slice()));
        });
    }

    #[test]
    fn multi_generation_payload_round_trip() {
        let payload = random_payload(20_000);
        let frames = encode(100, &payload);

        assert_eq!(frames.len(), 7 * 2 * 29);

        let decoder = decode_all(&frames);
        assert!(decoder.is_completed());
        assert_eq!(decoder.data(), Some(payload.as_slice()));
    }

    #[test]
    fn duplicate_frames_are_no_ops() {
        let frames = encode(100, &random_payload(1000));

        let mut decoder = RlncFrameDecoder::new();
        decoder.decode(&frames[0]).expect("First frame must decode");
        decoder.decode(&frames[0]).expect("Repeated frame must be accepted");

        assert_eq!(decoder.get_num_decoded_frames(), 1);
        assert!(!decoder.is_completed());
    }

    #[test]
    fn validation_is_cheap_and_permissive() {
        let decoder = RlncFrameDecoder::new();

        assert!(decoder.validate("https://example.com").unwrap_err().is_validation_error());
        assert!(decoder.validate("a|").unwrap_err().is_validation_error());
        assert!(decoder.validate("ab|c").is_ok());
    }

    #[test]
    fn rejects_frames_of_another_transfer() {
        let first = encode(100, &random_payload(1000));
        let second = encode(50, &random_payload(1000));

        let mut decoder = RlncFrameDecoder::new();
        decoder.decode(&first[0]).expect("First frame must decode");

        assert_eq!(
            decoder.decode(&second[0]).unwrap_err(),
            TxqrError::FrameMetadataMismatch {
                expected_chunk_len: 100,
                expected_total: 1000,
                chunk_len: 50,
                total: 1000,
            }
        );
    }

    #[test]
    fn malformed_frames_are_decode_errors() {
        let mut decoder = RlncFrameDecoder::new();

        let err = decoder.decode("not a header|00").unwrap_err();
        assert!(err.is_decode_error());
        assert!(matches!(err, TxqrError::MalformedFrameHeader(_)));

        let err = decoder.decode("0/100/1000|not hex").unwrap_err();
        assert!(matches!(err, TxqrError::InvalidFramePayload(0, _)));

        let err = decoder.decode("1/100/1000|00ff").unwrap_err();
        assert!(matches!(err, TxqrError::FrameDecodingFailed(1, _)));
    }

    #[test]
    fn out_of_bounds_headers_are_rejected_before_allocating() {
        let oversized = [
            "0/1/100000000|00",
            "0/1/18446744073709551615|00",
            "0/18446744073709551615/18446744073709551615|00",
            "0/1/16777216|00",
            "0/0/1000|00",
            "0/100/0|00",
        ];

        for frame in oversized {
            let mut decoder = RlncFrameDecoder::new();
            assert!(matches!(decoder.decode(frame), Err(TxqrError::MalformedFrameHeader(_))), "{frame:?}");

            let mut ingestor = FrameIngestor::new();
            assert!(matches!(ingestor.ingest(frame), Err(TxqrError::MalformedFrameHeader(_))), "{frame:?}");
        }

        // A header which sizes many generations only allocates the one its frame belongs to.
        let mut decoder = RlncFrameDecoder::new();
        assert!(matches!(decoder.decode("0/256/16777216|00"), Err(TxqrError::FrameDecodingFailed(0, _))));
    }

    #[test]
    fn failed_repair_restarts_generation() {
        let payload = random_payload(10);

        let mut encoder = RlncFrameEncoder::new(10).expect("Must build encoder");
        encoder.set_redundancy_factor(8.0);
        let frames = encoder.encode(&payload).expect("Must encode payload");

        // Single-piece generation of 11B padded pieces. An all-zero piece under a unit coding
        // vector repairs to data without an end-of-data marker.
        let mut bogus_piece = vec![1u8];
        bogus_piece.extend_from_slice(&[0u8; 11]);
        let bogus = FrameHeader::new(0, 10, 10).to_frame(&const_hex::encode(bogus_piece));

        let mut decoder = RlncFrameDecoder::new();
        assert!(matches!(decoder.decode(&bogus), Err(TxqrError::FrameDecodingFailed(0, _))));
        assert!(!decoder.is_completed());
        assert_eq!(decoder.get_num_decoded_frames(), 0);

        for frame in frames.iter() {
            if decoder.is_completed() {
                break;
            }
            let _ = decoder.decode(frame);
        }

        assert!(decoder.is_completed());
        assert_eq!(decoder.data(), Some(payload.as_slice()));
    }

    #[test]
    fn mixed_payloads_of_same_shape_do_not_wedge_decoder() {
        let wanted = random_payload(1000);
        let wanted_frames = encode(100, &wanted);
        let other_frames = encode(100, &random_payload(1000));

        // Ten pieces of two different payloads fill the generation, but don't repair into either.
        let mut ingestor = FrameIngestor::new();
        for frame in wanted_frames[..5].iter().chain(other_frames[5..10].iter()) {
            let _ = ingestor.ingest(frame);
        }
        assert!(!ingestor.is_completed());

        for frame in wanted_frames.iter().cycle().take(5 * wanted_frames.len()) {
            if ingestor.is_completed() {
                break;
            }
            let _ = ingestor.ingest(frame);
        }

        assert!(ingestor.is_completed());
        assert_eq!(ingestor.data(), Some(wanted.as_slice()));
    }

    #[test]
    fn reset_forgets_transfer() {
        let payload = random_payload(600);
        let frames = encode(100, &payload);

        let mut decoder = decode_all(&frames);
        assert!(decoder.is_completed());

        decoder.reset();
        assert!(!decoder.is_completed());
        assert_eq!(decoder.data(), None);
        assert_eq!(decoder.get_num_decoded_frames(), 0);

        let other = encode(64, &payload);
        assert!(decoder.decode(&other[0]).is_ok());
    }
}
