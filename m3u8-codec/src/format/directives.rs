//! Known tag names, their classification and their canonical output order.

use std::collections::HashMap;

use lazy_static::lazy_static;

// Basic tags
pub const EXTM3U: &str = "EXTM3U";
pub const EXT_X_VERSION: &str = "EXT-X-VERSION";

// Master playlist tags
pub const EXT_X_MEDIA: &str = "EXT-X-MEDIA";
pub const EXT_X_STREAM_INF: &str = "EXT-X-STREAM-INF";
pub const EXT_X_I_FRAME_STREAM_INF: &str = "EXT-X-I-FRAME-STREAM-INF";
pub const EXT_X_SESSION_DATA: &str = "EXT-X-SESSION-DATA";
pub const EXT_X_SESSION_KEY: &str = "EXT-X-SESSION-KEY";

// Media playlist tags
pub const EXT_X_TARGETDURATION: &str = "EXT-X-TARGETDURATION";
pub const EXT_X_MEDIA_SEQUENCE: &str = "EXT-X-MEDIA-SEQUENCE";
pub const EXT_X_DISCONTINUITY_SEQUENCE: &str = "EXT-X-DISCONTINUITY-SEQUENCE";
pub const EXT_X_ENDLIST: &str = "EXT-X-ENDLIST";
pub const EXT_X_PLAYLIST_TYPE: &str = "EXT-X-PLAYLIST-TYPE";
pub const EXT_X_I_FRAMES_ONLY: &str = "EXT-X-I-FRAMES-ONLY";

// Media or master playlist tags
pub const EXT_X_INDEPENDENT_SEGMENTS: &str = "EXT-X-INDEPENDENT-SEGMENTS";
pub const EXT_X_START: &str = "EXT-X-START";

// Segment tags
pub const EXTINF: &str = "EXTINF";
pub const EXT_X_BYTERANGE: &str = "EXT-X-BYTERANGE";
pub const EXT_X_DISCONTINUITY: &str = "EXT-X-DISCONTINUITY";
pub const EXT_X_KEY: &str = "EXT-X-KEY";
pub const EXT_X_MAP: &str = "EXT-X-MAP";
pub const EXT_X_PROGRAM_DATE_TIME: &str = "EXT-X-PROGRAM-DATE-TIME";
pub const EXT_X_DATERANGE: &str = "EXT-X-DATERANGE";

// Cue tags
pub const EXT_OATCLS_SCTE35: &str = "EXT-OATCLS-SCTE35";
pub const EXT_X_ASSET: &str = "EXT-X-ASSET";
pub const EXT_X_CUE_OUT: &str = "EXT-X-CUE-OUT";
pub const EXT_X_CUE_OUT_CONT: &str = "EXT-X-CUE-OUT-CONT";
pub const EXT_X_CUE_IN: &str = "EXT-X-CUE-IN";
pub const EXT_X_BLACKOUT: &str = "EXT-X-BLACKOUT";

/// Order of `EXT-X-ENDLIST` among playlist tags. The media playlist encoder
/// writes the marker itself after the last segment.
pub const ENDLIST_ORDER: u32 = u32::MAX - 1;

/// Order given to tags missing from the registry.
pub const UNKNOWN_ORDER: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    Basic,
    Master,
    Media,
    /// Allowed in both master and media playlists.
    Shared,
    Segment,
    Cue,
    Unknown,
}

lazy_static! {
    static ref TAG_REGISTRY: HashMap<&'static str, (TagCategory, u32)> = {
        use TagCategory::*;

        HashMap::from([
            (EXTM3U, (Basic, 0)),
            (EXT_X_VERSION, (Basic, 1)),
            (EXT_X_TARGETDURATION, (Media, 100)),
            (EXT_X_PLAYLIST_TYPE, (Media, 101)),
            (EXT_X_I_FRAMES_ONLY, (Media, 102)),
            (EXT_X_MEDIA_SEQUENCE, (Media, 103)),
            (EXT_X_DISCONTINUITY_SEQUENCE, (Media, 104)),
            (EXT_X_ENDLIST, (Media, ENDLIST_ORDER)),
            (EXT_X_INDEPENDENT_SEGMENTS, (Shared, 200)),
            (EXT_X_START, (Shared, 201)),
            (EXT_X_CUE_IN, (Cue, 300)),
            (EXT_OATCLS_SCTE35, (Cue, 301)),
            (EXT_X_ASSET, (Cue, 302)),
            (EXT_X_CUE_OUT, (Cue, 303)),
            (EXT_X_CUE_OUT_CONT, (Cue, 304)),
            (EXT_X_BLACKOUT, (Cue, 305)),
            (EXT_X_DISCONTINUITY, (Segment, 400)),
            (EXT_X_KEY, (Segment, 401)),
            (EXT_X_MAP, (Segment, 402)),
            (EXT_X_PROGRAM_DATE_TIME, (Segment, 403)),
            (EXT_X_DATERANGE, (Segment, 404)),
            (EXTINF, (Segment, 405)),
            (EXT_X_BYTERANGE, (Segment, 406)),
            (EXT_X_MEDIA, (Master, 500)),
            (EXT_X_STREAM_INF, (Master, 501)),
            (EXT_X_I_FRAME_STREAM_INF, (Master, 502)),
            (EXT_X_SESSION_DATA, (Master, 503)),
            (EXT_X_SESSION_KEY, (Master, 504)),
        ])
    };
}

pub fn category(name: &str) -> TagCategory {
    TAG_REGISTRY
        .get(name)
        .map(|(category, _)| *category)
        .unwrap_or(TagCategory::Unknown)
}

/// Output priority of a tag; lower values are written first.
pub fn order(name: &str) -> u32 {
    TAG_REGISTRY
        .get(name)
        .map(|(_, order)| *order)
        .unwrap_or(UNKNOWN_ORDER)
}

/// Whether the tag belongs to the segment that follows it.
pub fn is_segment_tag(name: &str) -> bool {
    matches!(category(name), TagCategory::Segment | TagCategory::Cue)
}

pub fn is_master_tag(name: &str) -> bool {
    category(name) == TagCategory::Master
}

pub fn is_media_tag(name: &str) -> bool {
    category(name) == TagCategory::Media
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        assert_eq!(category(EXTM3U), TagCategory::Basic);
        assert_eq!(category(EXT_X_STREAM_INF), TagCategory::Master);
        assert_eq!(category(EXT_X_ENDLIST), TagCategory::Media);
        assert_eq!(category(EXT_X_START), TagCategory::Shared);
        assert_eq!(category(EXT_X_CUE_OUT), TagCategory::Cue);
        assert_eq!(category(EXTINF), TagCategory::Segment);
        assert_eq!(category("EXT-X-VENDOR"), TagCategory::Unknown);
    }

    #[test]
    fn test_segment_tags() {
        assert!(is_segment_tag(EXT_X_KEY));
        assert!(is_segment_tag(EXT_X_BLACKOUT));
        assert!(!is_segment_tag(EXT_X_MEDIA_SEQUENCE));
        assert!(!is_segment_tag("EXT-X-VENDOR"));
    }

    #[test]
    fn test_order() {
        assert!(order(EXTM3U) < order(EXT_X_VERSION));
        assert!(order(EXT_X_VERSION) < order(EXT_X_TARGETDURATION));
        assert!(order(EXT_X_DISCONTINUITY_SEQUENCE) < order(EXT_X_INDEPENDENT_SEGMENTS));
        assert!(order(EXT_X_BLACKOUT) < order(EXT_X_DISCONTINUITY));
        assert!(order(EXT_X_KEY) < order(EXTINF));
        assert!(order(EXT_X_BYTERANGE) < order(EXT_X_MEDIA));
        assert!(order(EXT_X_SESSION_KEY) < order(EXT_X_ENDLIST));
        assert_eq!(order("EXT-X-VENDOR"), UNKNOWN_ORDER);
    }
}
