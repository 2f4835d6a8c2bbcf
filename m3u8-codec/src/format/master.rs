use std::{fmt::Display, str::FromStr};

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::{
    ParseError,
    format::{MediaAttrs, StreamInfAttrs, TagTable},
};

/// A master playlist: variant streams and their alternative renditions.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasterPlaylist {
    /// Playlist level tags, without stream and media tags
    pub tags: TagTable,
    /// Variant streams, in playlist order
    pub streams: Vec<Stream>,
    /// Renditions from `EXT-X-MEDIA` tags
    pub alternatives: Alternatives,
    /// Streams from `EXT-X-I-FRAME-STREAM-INF` tags
    pub iframe_streams: Vec<Stream>,
}

/// A variant stream.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stream {
    pub attributes: StreamInfAttrs,
    /// URI of the media playlist
    pub uri: SmolStr,
}

/// An alternative rendition.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    pub attributes: MediaAttrs,
}

/// Alternative renditions, grouped by media type and then by group id.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternatives {
    pub video: IndexMap<SmolStr, Vec<Alternative>>,
    pub audio: IndexMap<SmolStr, Vec<Alternative>>,
    pub subtitles: IndexMap<SmolStr, Vec<Alternative>>,
    pub closed_captions: IndexMap<SmolStr, Vec<Alternative>>,
}

impl Alternatives {
    pub fn groups(&self, media_type: MediaType) -> &IndexMap<SmolStr, Vec<Alternative>> {
        match media_type {
            MediaType::Video => &self.video,
            MediaType::Audio => &self.audio,
            MediaType::Subtitles => &self.subtitles,
            MediaType::ClosedCaptions => &self.closed_captions,
        }
    }

    pub fn groups_mut(&mut self, media_type: MediaType) -> &mut IndexMap<SmolStr, Vec<Alternative>> {
        match media_type {
            MediaType::Video => &mut self.video,
            MediaType::Audio => &mut self.audio,
            MediaType::Subtitles => &mut self.subtitles,
            MediaType::ClosedCaptions => &mut self.closed_captions,
        }
    }

    /// Appends a rendition to its group, creating the group if needed.
    pub fn push(
        &mut self,
        media_type: MediaType,
        group_id: impl Into<SmolStr>,
        alternative: Alternative,
    ) {
        self.groups_mut(media_type)
            .entry(group_id.into())
            .or_default()
            .push(alternative);
    }

    /// Every rendition, ordered by media type, then group, then insertion.
    pub fn iter(&self) -> impl Iterator<Item = (MediaType, &SmolStr, &Alternative)> {
        MediaType::ALL.into_iter().flat_map(move |media_type| {
            self.groups(media_type).iter().flat_map(move |(group_id, list)| {
                list.iter()
                    .map(move |alternative| (media_type, group_id, alternative))
            })
        })
    }

    pub fn len(&self) -> usize {
        MediaType::ALL
            .into_iter()
            .map(|x| self.groups(x).values().map(Vec::len).sum::<usize>())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The `TYPE` of an `EXT-X-MEDIA` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaType {
    Video,
    Audio,
    Subtitles,
    ClosedCaptions,
}

impl MediaType {
    /// All media types, in output order.
    pub const ALL: [MediaType; 4] = [
        MediaType::Video,
        MediaType::Audio,
        MediaType::Subtitles,
        MediaType::ClosedCaptions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "VIDEO",
            Self::Audio => "AUDIO",
            Self::Subtitles => "SUBTITLES",
            Self::ClosedCaptions => "CLOSED-CAPTIONS",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VIDEO" => Ok(Self::Video),
            "AUDIO" => Ok(Self::Audio),
            "SUBTITLES" => Ok(Self::Subtitles),
            "CLOSED-CAPTIONS" => Ok(Self::ClosedCaptions),
            _ => Err(ParseError::InvalidMediaType(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type() {
        for media_type in MediaType::ALL {
            assert_eq!(media_type.as_str().parse::<MediaType>().unwrap(), media_type);
        }
        assert!(matches!(
            "audio".parse::<MediaType>(),
            Err(ParseError::InvalidMediaType(_))
        ));
    }

    #[test]
    fn test_alternatives_iter() {
        let mut alternatives = Alternatives::default();
        alternatives.push(MediaType::Audio, "aac", Alternative::default());
        alternatives.push(MediaType::Video, "low", Alternative::default());
        alternatives.push(MediaType::Audio, "ac3", Alternative::default());
        alternatives.push(MediaType::Audio, "aac", Alternative::default());

        let order = alternatives
            .iter()
            .map(|(media_type, group_id, _)| format!("{}/{}", media_type, group_id))
            .collect::<Vec<_>>();
        assert_eq!(order, ["VIDEO/low", "AUDIO/aac", "AUDIO/aac", "AUDIO/ac3"]);
        assert_eq!(alternatives.len(), 4);
        assert_eq!(alternatives.audio.get("aac").unwrap().len(), 2);
    }
}
