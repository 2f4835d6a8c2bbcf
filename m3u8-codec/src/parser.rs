use std::{
    io::{self, BufRead, Seek, SeekFrom},
    mem::take,
    str::FromStr,
};

use log::{debug, warn};
use smol_str::SmolStr;

use crate::{
    ParseError, parse_attributes,
    format::{
        Alternative, MasterPlaylist, MediaAttrs, MediaPlaylist, MediaType, Playlist, PlaylistType,
        Segment, SegmentTags, Stream, StreamInfAttrs, Tag,
        directives::{self, EXT_X_ENDLIST, EXT_X_I_FRAME_STREAM_INF, EXT_X_MEDIA, EXT_X_STREAM_INF},
    },
    unquote,
};

/// A line of a playlist document.
enum Line {
    Tag(Tag),
    Uri(SmolStr),
}

/// Reads playlists line by line from `reader`.
///
/// Decoding with type detection needs to read the input twice, hence the
/// `Seek` bound on [`Parser::detect`] and [`Parser::parse`].
pub struct Parser<T> {
    reader: T,
    buffer: String,
}

impl<T: BufRead> Parser<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    pub fn into_inner(self) -> T {
        self.reader
    }

    /// Next non-blank line without its line terminator.
    fn next_line(&mut self) -> Result<Option<Line>, io::Error> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }

            let line = self.buffer.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            return Ok(Some(match Tag::from_line(line) {
                Some(tag) => Line::Tag(tag),
                None => Line::Uri(SmolStr::new(line)),
            }));
        }
    }

    /// Decodes the rest of the input as a master playlist.
    pub fn parse_master(&mut self) -> Result<MasterPlaylist, ParseError> {
        let mut playlist = MasterPlaylist::default();
        let mut pending_stream: Option<StreamInfAttrs> = None;

        while let Some(line) = self.next_line()? {
            let tag = match line {
                Line::Uri(uri) => {
                    // A URI without a preceding EXT-X-STREAM-INF still makes a stream.
                    playlist.streams.push(Stream {
                        attributes: pending_stream.take().unwrap_or_default(),
                        uri,
                    });
                    continue;
                }
                Line::Tag(tag) => tag,
            };

            if pending_stream.is_some() {
                return Err(ParseError::MisplacedStreamInf);
            }

            match tag.name.as_str() {
                EXT_X_STREAM_INF => {
                    pending_stream = Some(parse_attributes(&tag.attributes)?.into());
                }
                EXT_X_I_FRAME_STREAM_INF => {
                    let mut attributes = parse_attributes(&tag.attributes)?;
                    let uri = attributes
                        .remove("URI")
                        .map(|x| SmolStr::new(unquote(&x)))
                        .unwrap_or_default();
                    playlist.iframe_streams.push(Stream {
                        attributes: attributes.into(),
                        uri,
                    });
                }
                EXT_X_MEDIA => {
                    let attributes = MediaAttrs::from(parse_attributes(&tag.attributes)?);
                    let group_id = attributes.group_id();
                    if group_id.is_empty() {
                        return Err(ParseError::MissingGroupId);
                    }
                    let group_id = SmolStr::new(group_id);
                    let media_type = MediaType::from_str(attributes.raw("TYPE"))?;
                    playlist
                        .alternatives
                        .push(media_type, group_id, Alternative { attributes });
                }
                _ => playlist.tags.add(tag),
            }
        }

        if pending_stream.is_some() {
            warn!("{} at the end of the playlist has no URI, dropped", EXT_X_STREAM_INF);
        }

        debug!(
            "decoded master playlist: {} streams, {} alternatives, {} i-frame streams",
            playlist.streams.len(),
            playlist.alternatives.len(),
            playlist.iframe_streams.len()
        );
        Ok(playlist)
    }

    /// Decodes the rest of the input as a media playlist.
    ///
    /// Segment tags left without a URI at the end of the input produce
    /// [`ParseError::UnexpectedSegmentTags`], which still carries the playlist.
    pub fn parse_media(&mut self) -> Result<MediaPlaylist, ParseError> {
        let mut playlist = MediaPlaylist::default();
        let mut segment_tags = SegmentTags::new();

        while let Some(line) = self.next_line()? {
            match line {
                Line::Uri(uri) => {
                    playlist
                        .segments
                        .push(Segment::new(take(&mut segment_tags), uri));
                }
                Line::Tag(tag) if directives::is_segment_tag(&tag.name) => segment_tags.add(tag),
                Line::Tag(tag) if tag.name == EXT_X_ENDLIST => playlist.end_list = true,
                Line::Tag(tag) => playlist.tags.add(tag),
            }
        }

        playlist.assign_sequences();
        debug!(
            "decoded media playlist: {} segments, end list: {}",
            playlist.segments.len(),
            playlist.end_list
        );

        if !segment_tags.is_empty() {
            warn!(
                "{} segment tags without URI at the end of the playlist",
                segment_tags.len()
            );
            return Err(ParseError::UnexpectedSegmentTags(Box::new(playlist)));
        }

        Ok(playlist)
    }
}

impl<T: BufRead + Seek> Parser<T> {
    /// Guesses the playlist type by counting master and media tags, then
    /// seeks back to where the scan started. Ties, including a document without any of those
    /// tags, count as master.
    pub fn detect(&mut self) -> Result<PlaylistType, ParseError> {
        let start = self.reader.stream_position()?;
        let mut master_tags = 0usize;
        let mut media_tags = 0usize;

        while let Some(line) = self.next_line()? {
            let Line::Tag(tag) = line else {
                continue;
            };

            if directives::is_master_tag(&tag.name) {
                master_tags += 1;
            } else if directives::is_media_tag(&tag.name) || directives::is_segment_tag(&tag.name) {
                media_tags += 1;
            }
        }
        self.reader.seek(SeekFrom::Start(start))?;

        let playlist_type = if master_tags >= media_tags {
            PlaylistType::Master
        } else {
            PlaylistType::Media
        };
        debug!(
            "detected {} playlist ({} master tags, {} media tags)",
            playlist_type, master_tags, media_tags
        );

        Ok(playlist_type)
    }

    /// Detects the playlist type and decodes the input with the matching builder.
    pub fn parse(&mut self) -> Result<Playlist, ParseError> {
        Ok(match self.detect()? {
            PlaylistType::Master => Playlist::Master(self.parse_master()?),
            PlaylistType::Media => Playlist::Media(self.parse_media()?),
        })
    }
}
