//! Decodes a playlist from a file (or stdin) and prints what was found.
//!
//! ```text
//! RUST_LOG=debug cargo run --example decode -- playlist.m3u8
//! ```

use std::{env, fs::File, io};

use log::error;
use m3u8_codec::{ParseError, Playlist, decode_playlist};

fn print_playlist(playlist: &Playlist) {
    println!("Type: {}", playlist.playlist_type());

    match playlist {
        Playlist::Master(master) => {
            println!("Tags: {}", master.tags.len());
            for (name, values) in master.tags.iter() {
                println!("  {}: {}", name, values.len());
            }
            println!("Streams:");
            for (index, stream) in master.streams.iter().enumerate() {
                let (width, height) = stream.attributes.resolution().unwrap_or_default();
                println!("  {}:", index);
                println!("    Width: {}", width);
                println!("    Height: {}", height);
                println!("    URI: {}", stream.uri);
            }
            println!("Alternatives: {}", master.alternatives.len());
            println!("I-frame streams: {}", master.iframe_streams.len());
        }
        Playlist::Media(media) => {
            println!("Target duration: {}", media.tags.target_duration());
            println!("End list: {}", media.end_list);
            println!("Segments:");
            for segment in media.segments.iter() {
                println!(
                    "  #{} (discontinuity {}) {}s {}",
                    segment.sequence,
                    segment.discontinuity_sequence,
                    segment.tags.ext_inf_value(),
                    segment.uri
                );
            }
        }
    }
}

fn main() {
    env_logger::init();

    let result = match env::args().nth(1) {
        Some(path) => File::open(&path)
            .map_err(ParseError::from)
            .and_then(|file| decode_playlist(file)),
        None => decode_playlist(io::stdin().lock()),
    };

    match result {
        Ok(playlist) => {
            print_playlist(&playlist);
            println!();
            print!("{}", playlist);
        }
        Err(e) => {
            error!("Failed to decode playlist: {}", e);
            std::process::exit(1);
        }
    }
}
