use std::fmt::Display;

use crate::format::{MasterPlaylist, MediaPlaylist};

/// Kind of a playlist document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlaylistType {
    Master,
    Media,
}

impl Display for PlaylistType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Master => write!(f, "master"),
            Self::Media => write!(f, "media"),
        }
    }
}

/// A decoded playlist of either kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Playlist {
    Master(MasterPlaylist),
    Media(MediaPlaylist),
}

impl Playlist {
    pub fn playlist_type(&self) -> PlaylistType {
        match self {
            Self::Master(_) => PlaylistType::Master,
            Self::Media(_) => PlaylistType::Media,
        }
    }

    /// The master playlist, `None` for a media playlist.
    pub fn master(&self) -> Option<&MasterPlaylist> {
        match self {
            Self::Master(x) => Some(x),
            Self::Media(_) => None,
        }
    }

    /// The media playlist, `None` for a master playlist.
    pub fn media(&self) -> Option<&MediaPlaylist> {
        match self {
            Self::Master(_) => None,
            Self::Media(x) => Some(x),
        }
    }

    pub fn into_master(self) -> Option<MasterPlaylist> {
        match self {
            Self::Master(x) => Some(x),
            Self::Media(_) => None,
        }
    }

    pub fn into_media(self) -> Option<MediaPlaylist> {
        match self {
            Self::Master(_) => None,
            Self::Media(x) => Some(x),
        }
    }
}

impl From<MasterPlaylist> for Playlist {
    fn from(value: MasterPlaylist) -> Self {
        Self::Master(value)
    }
}

impl From<MediaPlaylist> for Playlist {
    fn from(value: MediaPlaylist) -> Self {
        Self::Media(value)
    }
}
