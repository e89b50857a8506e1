use crate::utils::{get_target_path, write_or_exit};
use std::{
    path::{Path, PathBuf},
    process::exit,
};
use txqr_lib::{ChunkProducer, format_bytes};

pub fn handle_encode_command(input_path: &Path, chunk_len: usize, redundancy: f64, opt_target_path: &Option<PathBuf>) {
    let payload = match std::fs::read(input_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    println!("Read {:?}", input_path);
    println!("Size {}", format_bytes(payload.len() as u64));
    println!("BLAKE3 Digest: {}", blake3::hash(&payload));

    let mut producer = match ChunkProducer::new(chunk_len) {
        Ok(producer) => producer,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    producer.set_redundancy_factor(redundancy);

    if let Err(e) = producer.encode(&payload) {
        eprintln!("Error: {}", e);
        exit(1);
    }

    println!("Chunk length: {}B", producer.chunk_len());
    println!("Redundancy factor: {}", producer.redundancy_factor());
    println!("Number of frames: {}", producer.chunk_count());

    let mut rng = rand::rng();
    let target_path = get_target_path(input_path, opt_target_path, "txqr", &mut rng);

    let mut frames = producer.chunks().join("\n");
    frames.push('\n');
    write_or_exit(&target_path, frames.as_bytes());

    println!("Frames placed in {:?}", &target_path);
}
