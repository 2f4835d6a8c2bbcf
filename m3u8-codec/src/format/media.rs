use smol_str::SmolStr;

use crate::format::{MediaPlaylistTags, SegmentTags};

/// A media playlist: an ordered list of segments.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaPlaylist {
    /// Playlist level tags, without segment tags and `EXT-X-ENDLIST`
    pub tags: MediaPlaylistTags,
    /// Segments, in playlist order
    pub segments: Vec<Segment>,
    /// Set by `EXT-X-ENDLIST`: no more segments will be added to the playlist
    pub end_list: bool,
}

/// A media segment with the tags preceding its URI.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub tags: SegmentTags,
    pub uri: SmolStr,
    /// Media sequence number, assigned when decoding and ignored when encoding
    pub sequence: i64,
    /// Discontinuity sequence number, assigned when decoding and ignored when encoding
    pub discontinuity_sequence: i64,
}

impl Segment {
    pub fn new(tags: SegmentTags, uri: impl Into<SmolStr>) -> Self {
        Self {
            tags,
            uri: uri.into(),
            sequence: 0,
            discontinuity_sequence: 0,
        }
    }
}

impl MediaPlaylist {
    /// Numbers the segments, starting from `EXT-X-MEDIA-SEQUENCE` and
    /// `EXT-X-DISCONTINUITY-SEQUENCE`. A segment carrying `EXT-X-DISCONTINUITY`
    /// opens the next discontinuity sequence.
    pub fn assign_sequences(&mut self) {
        let mut sequence = self.tags.media_sequence();
        let mut discontinuity_sequence = self.tags.discontinuity_sequence();

        for segment in self.segments.iter_mut() {
            if segment.tags.is_discontinuity() {
                discontinuity_sequence = discontinuity_sequence.wrapping_add(1);
            }
            segment.sequence = sequence;
            segment.discontinuity_sequence = discontinuity_sequence;
            sequence = sequence.wrapping_add(1);
        }
    }

    /// Sum of the `EXTINF` durations.
    pub fn duration(&self) -> f64 {
        self.segments.iter().map(|x| x.tags.ext_inf_value()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Tag, TagTable};

    fn segment(tags: &[(&str, &str)], uri: &str) -> Segment {
        Segment::new(
            SegmentTags::from(TagTable::from_iter(
                tags.iter().map(|(name, value)| Tag::new(*name, *value)),
            )),
            uri,
        )
    }

    #[test]
    fn test_assign_sequences() {
        let mut playlist = MediaPlaylist {
            tags: MediaPlaylistTags::from(TagTable::from_iter([
                Tag::new("EXT-X-MEDIA-SEQUENCE", "100"),
                Tag::new("EXT-X-DISCONTINUITY-SEQUENCE", "7"),
            ])),
            segments: vec![
                segment(&[("EXTINF", "4,")], "a.ts"),
                segment(&[("EXT-X-DISCONTINUITY", ""), ("EXTINF", "4,")], "b.ts"),
                segment(&[("EXTINF", "4,")], "c.ts"),
                segment(&[("EXT-X-DISCONTINUITY", "")], "d.ts"),
            ],
            end_list: false,
        };
        playlist.assign_sequences();

        let sequences = playlist
            .segments
            .iter()
            .map(|x| (x.sequence, x.discontinuity_sequence))
            .collect::<Vec<_>>();
        assert_eq!(sequences, [(100, 7), (101, 8), (102, 8), (103, 9)]);
        assert_eq!(playlist.duration(), 12.0);
    }

    #[test]
    fn test_assign_sequences_at_limit() {
        let mut playlist = MediaPlaylist {
            tags: MediaPlaylistTags::from(TagTable::from_iter([
                Tag::new("EXT-X-MEDIA-SEQUENCE", "9223372036854775807"),
                Tag::new("EXT-X-DISCONTINUITY-SEQUENCE", "9223372036854775807"),
            ])),
            segments: vec![
                segment(&[("EXTINF", "5,")], "a.ts"),
                segment(&[("EXT-X-DISCONTINUITY", ""), ("EXTINF", "5,")], "b.ts"),
            ],
            end_list: false,
        };
        playlist.assign_sequences();

        assert_eq!(playlist.segments[0].sequence, i64::MAX);
        assert_eq!(playlist.segments[0].discontinuity_sequence, i64::MAX);
        assert_eq!(playlist.segments[1].sequence, i64::MIN);
        assert_eq!(playlist.segments[1].discontinuity_sequence, i64::MIN);
    }

    #[test]
    fn test_assign_sequences_defaults() {
        let mut playlist = MediaPlaylist {
            segments: vec![segment(&[], "a.ts"), segment(&[], "b.ts")],
            ..Default::default()
        };
        playlist.assign_sequences();

        assert_eq!(playlist.segments[0].sequence, 0);
        assert_eq!(playlist.segments[1].sequence, 1);
        assert_eq!(playlist.segments[1].discontinuity_sequence, 0);
    }
}
