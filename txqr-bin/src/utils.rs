use crate::errors::TxqrCLIError;
use rand::Rng;
use std::{
    path::{Path, PathBuf},
    process::exit,
};

/// Reads a frames file, one frame per line. Blank lines are skipped.
pub fn read_frames(frames_path: &Path) -> Result<Vec<String>, TxqrCLIError> {
    let text = std::fs::read_to_string(frames_path).map_err(|e| TxqrCLIError::FailedToReadFrames(frames_path.display().to_string(), e.to_string()))?;

    let frames = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect::<Vec<String>>();

    if frames.is_empty() {
        return Err(TxqrCLIError::NoFramesFound(frames_path.display().to_string()));
    }

    Ok(frames)
}

/// Picks where to write output derived from `input_path`. Never overwrites an existing file: if
/// the preferred path exists, a random suffix is appended.
pub fn get_target_path<R: Rng + ?Sized>(input_path: &Path, opt_target_path: &Option<PathBuf>, extension: &str, rng: &mut R) -> PathBuf {
    let preferred = match opt_target_path {
        Some(path) => path.clone(),
        None => {
            let mut path = input_path.as_os_str().to_owned();
            path.push(".");
            path.push(extension);
            PathBuf::from(path)
        }
    };

    match preferred.try_exists() {
        Ok(false) => preferred,
        Ok(true) => prepare_random_target_path(&preferred, rng),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn prepare_random_target_path<R: Rng + ?Sized>(preferred: &Path, rng: &mut R) -> PathBuf {
    let mut rand_suffix = [0u8; 4];
    rng.fill_bytes(&mut rand_suffix);

    let mut path = preferred.as_os_str().to_owned();
    path.push("-");
    path.push(const_hex::encode(rand_suffix));

    PathBuf::from(path)
}

pub fn write_or_exit(path: &Path, bytes: &[u8]) {
    if let Err(e) = std::fs::write(path, bytes) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
