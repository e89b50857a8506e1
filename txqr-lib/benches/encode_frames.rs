use rand::Rng;
use std::{fmt::Debug, time::Duration};
use txqr_lib::{ChunkProducer, format_bytes};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::Divan::default().bytes_format(divan::counter::BytesFormat::Binary).main();
}

struct EncodeConfig {
    payload_byte_len: usize,
    chunk_len: usize,
}

impl Debug for EncodeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!(
            "Fountain-encode {} payload into {}B chunks",
            &format_bytes(self.payload_byte_len as u64),
            self.chunk_len
        ))
    }
}

const ARGS: &[EncodeConfig] = &[
    EncodeConfig {
        payload_byte_len: 1usize << 10,
        chunk_len: 100,
    },
    EncodeConfig {
        payload_byte_len: 1usize << 14,
        chunk_len: 300,
    },
    EncodeConfig {
        payload_byte_len: 1usize << 16,
        chunk_len: 500,
    },
];

#[divan::bench(args = ARGS, max_time = Duration::from_secs(100), skip_ext_time = true)]
fn encode_frames(bencher: divan::Bencher, config: &EncodeConfig) {
    let mut producer = ChunkProducer::new(config.chunk_len).expect("Must be able to build producer");

    bencher
        .with_inputs(|| {
            let mut rng = rand::rng();
            (0..config.payload_byte_len).map(|_| rng.random()).collect::<Vec<u8>>()
        })
        .input_counter(|data| divan::counter::BytesCount::new(data.len()))
        .bench_local_refs(|data| divan::black_box(producer.encode(divan::black_box(data))));
}
