use crate::utils::read_frames;
use std::{collections::HashSet, path::Path, process::exit};
use txqr_lib::{FrameDecoder, RlncFrameDecoder, format_bytes, parse_frame_header};

pub fn handle_inspect_command(input_path: &Path) {
    let frames = match read_frames(input_path) {
        Ok(frames) => frames,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let validator = RlncFrameDecoder::new();

    let mut num_invalid = 0;
    let mut num_unparsed = 0;
    let mut headers = HashSet::new();
    let mut shapes = HashSet::new();

    for frame in frames.iter() {
        if validator.validate(frame).is_err() {
            num_invalid += 1;
            continue;
        }

        match parse_frame_header(frame) {
            Some((header, parsed)) => {
                headers.insert(header);
                shapes.insert((parsed.get_chunk_len(), parsed.get_total()));
            }
            None => num_unparsed += 1,
        }
    }

    println!("Inspected {:?}", input_path);
    println!("Number of frames: {}", frames.len());
    println!("Invalid frames: {}", num_invalid);
    println!("Frames with unparseable header: {}", num_unparsed);
    println!("Unique headers: {}", headers.len());

    let mut shapes = shapes.into_iter().collect::<Vec<(usize, usize)>>();
    shapes.sort_unstable();

    match shapes.as_slice() {
        [] => println!("No transfer found"),
        [(chunk_len, total)] => {
            println!("Chunk length: {}B", chunk_len);
            println!("Total size: {}", format_bytes(*total as u64));
            println!("Source pieces: {}", total.div_ceil((*chunk_len).max(1)));
        }
        _ => {
            println!("Frames belong to {} different transfers:", shapes.len());
            for (chunk_len, total) in shapes {
                println!("  chunk length {}B, total size {}", chunk_len, format_bytes(total as u64));
            }
        }
    }
}
