use crate::utils::{get_target_path, read_frames, write_or_exit};
use rand::{Rng, seq::SliceRandom};
use std::{
    path::{Path, PathBuf},
    process::exit,
    time::Duration,
};
use tracing::debug;
use txqr_lib::FrameIngestor;

/// How the looping display and the camera are simulated.
pub struct ScanConfig {
    pub shuffle: bool,
    pub drop_ratio: f64,
    pub interval_ms: u64,
    pub max_loops: usize,
}

pub fn handle_decode_command(input_path: &Path, opt_target_path: &Option<PathBuf>, config: &ScanConfig) {
    if !(0.0..1.0).contains(&config.drop_ratio) {
        eprintln!("Drop ratio must be in [0, 1), got {}", config.drop_ratio);
        exit(1);
    }

    let mut frames = match read_frames(input_path) {
        Ok(frames) => frames,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    println!("Read {} frames from {:?}", frames.len(), input_path);

    let mut rng = rand::rng();
    if config.shuffle {
        frames.shuffle(&mut rng);
    }

    let mut ingestor = FrameIngestor::new();

    let mut num_displayed = 0usize;
    let mut num_missed = 0usize;
    let mut num_invalid = 0usize;
    let mut num_rejected = 0usize;
    let mut last_progress = 0u8;

    'display: for _ in 0..config.max_loops {
        for frame in frames.iter() {
            if ingestor.is_completed() {
                break 'display;
            }

            if config.interval_ms > 0 {
                std::thread::sleep(Duration::from_millis(config.interval_ms));
            }
            num_displayed += 1;

            if rng.random_bool(config.drop_ratio) {
                num_missed += 1;
                continue;
            }

            match ingestor.ingest(frame) {
                Ok(()) => {}
                Err(e) if e.is_validation_error() => num_invalid += 1,
                Err(e) => {
                    debug!(error = %e, "frame rejected by decoder");
                    num_rejected += 1;
                }
            }

            if ingestor.progress() != last_progress {
                last_progress = ingestor.progress();
                println!(
                    "Progress {:>3}% @ {} (last frame {}ms ago)",
                    last_progress,
                    ingestor.throughput_estimate(),
                    ingestor.last_inter_frame_interval_ms()
                );
            }
        }
    }

    println!("Displayed frames: {}", num_displayed);
    println!("Missed frames: {}", num_missed);
    println!("Invalid frames: {}", num_invalid);
    println!("Rejected frames: {}", num_rejected);
    println!("Unique blocks: {}", ingestor.unique_blocks());

    let Some(data) = ingestor.data() else {
        eprintln!("Failed to reconstruct {:?} after displaying all frames {} times", input_path, config.max_loops);
        exit(1);
    };

    let target_path = get_target_path(input_path, opt_target_path, "decoded", &mut rng);
    write_or_exit(&target_path, data);

    println!("Size {}", ingestor.total_size_human());
    println!("Time {}", ingestor.elapsed_human());
    println!("Speed {}", ingestor.throughput_estimate());
    println!("Reconstructed file @ {:?}", target_path);
    println!("BLAKE3 Digest of {:?}: {}", target_path, blake3::hash(data));
}
