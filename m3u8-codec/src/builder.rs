use std::{fmt::Display, io};

use crate::format::{
    MasterPlaylist, MediaPlaylist, Playlist, Tag,
    directives::{EXT_X_ENDLIST, EXT_X_I_FRAME_STREAM_INF, EXT_X_MEDIA, EXT_X_STREAM_INF},
};

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.name)?;
        if !self.attributes.is_empty() {
            write!(f, ":{}", self.attributes)?;
        }

        Ok(())
    }
}

impl Display for MasterPlaylist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // playlist tags
        for tag in self.tags.list() {
            writeln!(f, "{}", tag)?;
        }

        // alternative renditions
        for (media_type, group_id, alternative) in self.alternatives.iter() {
            let attributes = alternative
                .attributes
                .to_tag_attributes(media_type, group_id);
            writeln!(f, "{}", Tag::new(EXT_X_MEDIA, attributes))?;
        }

        // variant streams
        for stream in self.streams.iter() {
            writeln!(f, "#{}:{}", EXT_X_STREAM_INF, stream.attributes.0)?;
            writeln!(f, "{}", stream.uri)?;
        }

        // i-frame streams
        for stream in self.iframe_streams.iter() {
            write!(f, "#{}:", EXT_X_I_FRAME_STREAM_INF)?;
            if !stream.attributes.is_empty() {
                write!(f, "{},", stream.attributes.0)?;
            }
            writeln!(f, "URI=\"{}\"", stream.uri)?;
        }

        Ok(())
    }
}

impl Display for MediaPlaylist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // playlist tags
        for tag in self.tags.list() {
            writeln!(f, "{}", tag)?;
        }

        // segments
        for segment in self.segments.iter() {
            for tag in segment.tags.list() {
                writeln!(f, "{}", tag)?;
            }
            writeln!(f, "{}", segment.uri)?;
        }

        if self.end_list {
            writeln!(f, "#{}", EXT_X_ENDLIST)?;
        }

        Ok(())
    }
}

impl Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Master(x) => x.fmt(f),
            Self::Media(x) => x.fmt(f),
        }
    }
}

impl MasterPlaylist {
    /// Writes the playlist in canonical order.
    pub fn encode<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl MediaPlaylist {
    /// Writes the playlist in canonical order.
    pub fn encode<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl Playlist {
    pub fn encode<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}
