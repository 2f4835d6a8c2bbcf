//! # m3u8-codec
//! A library for decoding and encoding HLS (m3u8) playlists
//!
//! Tags are kept as raw text, so unknown and vendor tags survive a round trip.
//! Encoding writes tags in a canonical order; attribute values are written back
//! exactly as they were read.
//!
//! # Example
//! ```rust
//! use m3u8_codec::{PlaylistType, decode_playlist};
//!
//! // 1. Decode
//! let playlist = decode_playlist(r#"#EXTM3U
//! #EXT-X-STREAM-INF:BANDWIDTH=1280000,AVERAGE-BANDWIDTH=1000000
//! http://example.com/low.m3u8
//! #EXT-X-STREAM-INF:BANDWIDTH=2560000,AVERAGE-BANDWIDTH=2000000
//! http://example.com/mid.m3u8
//! "#.as_bytes()).unwrap();
//! assert_eq!(playlist.playlist_type(), PlaylistType::Master);
//!
//! let master = playlist.master().unwrap();
//! assert_eq!(master.streams[1].attributes.bandwidth().unwrap(), 2560000);
//!
//! // 2. Encode
//! let mut output = Vec::new();
//! playlist.encode(&mut output).unwrap();
//! println!("{}", String::from_utf8(output).unwrap());
//! ```

mod attributes;
mod builder;
mod error;
pub mod format;
mod parser;

use std::{
    io::{BufRead, Cursor, Read},
    str::FromStr,
};

pub use attributes::*;
pub use error::*;
pub use format::{
    Alternative, Alternatives, DateRangeAttrs, DateRangeValues, MasterPlaylist, MediaAttrs,
    MediaPlaylist, MediaPlaylistTags, MediaType, Playlist, PlaylistType, Segment, SegmentTags,
    Stream, StreamInfAttrs, Tag, TagTable,
};
pub use parser::*;

/// Decodes a playlist, detecting whether it is a master or a media playlist.
///
/// The whole input is buffered first because detection reads it twice.
pub fn decode_playlist(mut reader: impl Read) -> Result<Playlist, ParseError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    Parser::new(Cursor::new(buffer)).parse()
}

pub fn decode_master_playlist(reader: impl BufRead) -> Result<MasterPlaylist, ParseError> {
    Parser::new(reader).parse_master()
}

/// Decodes a media playlist. See [`Parser::parse_media`] for the handling of
/// trailing segment tags.
pub fn decode_media_playlist(reader: impl BufRead) -> Result<MediaPlaylist, ParseError> {
    Parser::new(reader).parse_media()
}

impl FromStr for Playlist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(Cursor::new(s)).parse()
    }
}

impl FromStr for MasterPlaylist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_master_playlist(s.as_bytes())
    }
}

impl FromStr for MediaPlaylist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_media_playlist(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER: &str = r#"#EXTM3U
#EXT-X-STREAM-INF:BANDWIDTH=1280000,AVERAGE-BANDWIDTH=1000000
http://example.com/low.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=65000,CODECS="mp4a.40.5"
http://example.com/audio-only.m3u8
"#;

    const MEDIA: &str = r#"#EXTM3U
#EXT-X-VERSION:3
#EXT-X-TARGETDURATION:15
#EXT-X-KEY:METHOD=NONE
#EXTINF:2.833,
http://media.example.com/sequence1-A.ts
#EXTINF:15.0,
http://media.example.com/sequence1-B.ts
#EXT-X-ENDLIST
"#;

    #[test]
    fn test_decode_playlist() {
        for (input, playlist_type) in [
            ("#EXTM3U\n", PlaylistType::Master),
            (MASTER, PlaylistType::Master),
            (MEDIA, PlaylistType::Media),
        ] {
            let playlist = decode_playlist(input.as_bytes()).unwrap();
            assert_eq!(playlist.playlist_type(), playlist_type);
            assert_eq!(playlist.master().is_some(), playlist_type == PlaylistType::Master);
            assert_eq!(playlist.media().is_some(), playlist_type == PlaylistType::Media);
        }
    }

    #[test]
    fn test_decode_only_header() {
        let playlist = decode_playlist("#EXTM3U\n".as_bytes()).unwrap();
        let master = playlist.into_master().unwrap();
        assert!(master.streams.is_empty());
        assert!(master.alternatives.is_empty());
        assert!(master.iframe_streams.is_empty());
        assert_eq!(master.to_string(), "#EXTM3U\n");
    }

    #[test]
    fn test_from_str() {
        let master: MasterPlaylist = MASTER.parse().unwrap();
        assert_eq!(master.streams.len(), 2);

        let media: MediaPlaylist = MEDIA.parse().unwrap();
        assert_eq!(media.segments.len(), 2);
        assert!(media.end_list);

        let playlist: Playlist = MEDIA.parse().unwrap();
        assert_eq!(playlist.into_media().unwrap(), media);
    }

    #[test]
    fn test_round_trip() {
        for input in [MASTER, MEDIA] {
            let first: Playlist = input.parse().unwrap();
            let second: Playlist = first.to_string().parse().unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_decode_io_error() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("connection reset"))
            }
        }

        assert!(matches!(decode_playlist(Broken), Err(ParseError::Io(_))));
    }
}
