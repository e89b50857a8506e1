mod errors;
mod handlers;
mod utils;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "txqr", version, about, long_about = None)]
struct TxqrCLI {
    #[command(subcommand)]
    command: TxqrCommand,
}

#[derive(Subcommand)]
enum TxqrCommand {
    /// Fountain-encodes a file into QR frames, written one frame per line
    Encode {
        /// Path of source file
        #[arg(short)]
        input_path: PathBuf,
        /// Number of payload bytes carried by each source piece
        #[arg(short, long, default_value_t = 300)]
        chunk_len: usize,
        /// Number of frames produced, relative to the number of source pieces
        #[arg(short, long, default_value_t = txqr_lib::TXQR_DEFAULT_REDUNDANCY_FACTOR)]
        redundancy: f64,
        /// Optional target path for produced frames
        #[arg(short)]
        opt_target_path: Option<PathBuf>,
    },
    /// Replays frames as a looping QR display would, scanning them until the file is reconstructed
    Decode {
        /// Path of frames file, one frame per line
        #[arg(short)]
        input_path: PathBuf,
        /// Optional target path for the reconstructed file
        #[arg(short)]
        opt_target_path: Option<PathBuf>,
        /// Shuffle frames before displaying them
        #[arg(long)]
        shuffle: bool,
        /// Probability of the camera missing a displayed frame, in [0, 1)
        #[arg(long, default_value_t = 0.0)]
        drop_ratio: f64,
        /// Time between two displayed frames, in milliseconds
        #[arg(long, default_value_t = 0)]
        interval_ms: u64,
        /// Give up after displaying all frames this many times
        #[arg(long, default_value_t = 8)]
        max_loops: usize,
    },
    /// Reports on frames without decoding them
    Inspect {
        /// Path of frames file, one frame per line
        #[arg(short)]
        input_path: PathBuf,
    },
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "txqr=info,txqr_lib=info".into());

    tracing_subscriber::fmt().with_writer(std::io::stderr).with_env_filter(env_filter).init();

    let cli = TxqrCLI::parse();
    match &cli.command {
        TxqrCommand::Encode {
            input_path,
            chunk_len,
            redundancy,
            opt_target_path,
        } => handlers::handle_encode_command(input_path, *chunk_len, *redundancy, opt_target_path),
        TxqrCommand::Decode {
            input_path,
            opt_target_path,
            shuffle,
            drop_ratio,
            interval_ms,
            max_loops,
        } => handlers::handle_decode_command(
            input_path,
            opt_target_path,
            &handlers::ScanConfig {
                shuffle: *shuffle,
                drop_ratio: *drop_ratio,
                interval_ms: *interval_ms,
                max_loops: *max_loops,
            },
        ),
        TxqrCommand::Inspect { input_path } => handlers::handle_inspect_command(input_path),
    }
}
