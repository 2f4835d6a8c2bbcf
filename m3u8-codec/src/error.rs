use std::{
    io,
    num::{ParseFloatError, ParseIntError},
};

use thiserror::Error;

use crate::format::MediaPlaylist;

/// Errors produced while decoding a playlist.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A tag's attribute list does not follow the `KEY=VALUE,...` grammar.
    #[error("invalid HLS tag attributes: {0:?}")]
    InvalidAttributes(String),

    /// An `EXT-X-MEDIA` tag without a usable `GROUP-ID`.
    #[error("missing GROUP-ID in EXT-X-MEDIA tag")]
    MissingGroupId,

    /// An `EXT-X-MEDIA` tag whose `TYPE` is not a known media type.
    #[error("invalid EXT-X-MEDIA TYPE: {0:?}")]
    InvalidMediaType(String),

    /// An `EXT-X-STREAM-INF` tag followed by another tag instead of its URI.
    #[error("EXT-X-STREAM-INF tag is not immediately followed by a URI")]
    MisplacedStreamInf,

    /// Segment tags were left over at the end of a media playlist.
    ///
    /// The playlist decoded up to the last complete segment is kept and can be
    /// recovered with [`ParseError::into_partial_playlist`].
    #[error("unexpected segment tags without a segment URI")]
    UnexpectedSegmentTags(Box<MediaPlaylist>),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ParseError {
    /// The playlist decoded before the error, if the error carries one.
    pub fn partial_playlist(&self) -> Option<&MediaPlaylist> {
        match self {
            Self::UnexpectedSegmentTags(playlist) => Some(playlist),
            _ => None,
        }
    }

    pub fn into_partial_playlist(self) -> Option<MediaPlaylist> {
        match self {
            Self::UnexpectedSegmentTags(playlist) => Some(*playlist),
            _ => None,
        }
    }
}

/// Errors produced by the typed attribute accessors.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid resolution: {0:?}")]
    InvalidResolution(String),

    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    #[error("invalid decimal: {0}")]
    InvalidFloat(#[from] ParseFloatError),

    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("invalid hexadecimal sequence: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("hexadecimal sequence without 0x prefix: {0:?}")]
    UnknownHexPrefix(String),
}
