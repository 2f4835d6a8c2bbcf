use chrono::{DateTime, FixedOffset};
use smol_str::format_smolstr;

use crate::{
    Attributes, ValueError,
    format::{
        Tag, TagTable,
        directives::{
            EXT_X_DISCONTINUITY_SEQUENCE, EXT_X_MEDIA_SEQUENCE, EXT_X_TARGETDURATION, EXT_X_VERSION,
        },
        macros::typed_wrapper,
    },
};

typed_wrapper!(
    /// Playlist level tags of a media playlist.
    MediaPlaylistTags(TagTable)
);

typed_wrapper!(
    /// Attributes of an `EXT-X-DATERANGE` tag.
    DateRangeAttrs(Attributes)
);

impl MediaPlaylistTags {
    fn first_value<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name)?.first()?.parse().ok()
    }

    /// `EXT-X-VERSION`, 1 when missing or invalid.
    pub fn version(&self) -> u32 {
        self.first_value(EXT_X_VERSION).unwrap_or(1)
    }

    /// `EXT-X-TARGETDURATION`, 0 when missing or invalid.
    pub fn target_duration(&self) -> u64 {
        self.first_value(EXT_X_TARGETDURATION).unwrap_or(0)
    }

    /// `EXT-X-MEDIA-SEQUENCE`, 0 when missing or invalid.
    pub fn media_sequence(&self) -> i64 {
        self.first_value(EXT_X_MEDIA_SEQUENCE).unwrap_or(0)
    }

    pub fn set_media_sequence(&mut self, sequence: i64) {
        self.set(Tag::new(EXT_X_MEDIA_SEQUENCE, format_smolstr!("{}", sequence)));
    }

    /// `EXT-X-DISCONTINUITY-SEQUENCE`, 0 when missing or invalid.
    pub fn discontinuity_sequence(&self) -> i64 {
        self.first_value(EXT_X_DISCONTINUITY_SEQUENCE).unwrap_or(0)
    }

    pub fn set_discontinuity_sequence(&mut self, sequence: i64) {
        self.set(Tag::new(
            EXT_X_DISCONTINUITY_SEQUENCE,
            format_smolstr!("{}", sequence),
        ));
    }
}

/// Every `EXT-X-DATERANGE` attribute this crate knows how to interpret.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRangeValues {
    pub event_id: String,
    pub start_date: Option<DateTime<FixedOffset>>,
    pub end_date: Option<DateTime<FixedOffset>>,
    pub duration: f64,
    pub planned_duration: f64,
    pub scte35_out: Option<Vec<u8>>,
}

impl DateRangeAttrs {
    pub fn event_id(&self) -> &str {
        self.unquoted("ID")
    }

    pub fn start_date(&self) -> Result<Option<DateTime<FixedOffset>>, ValueError> {
        parse_date(self.unquoted("START-DATE"))
    }

    pub fn end_date(&self) -> Result<Option<DateTime<FixedOffset>>, ValueError> {
        parse_date(self.unquoted("END-DATE"))
    }

    /// `DURATION` in seconds, 0 when missing.
    pub fn duration(&self) -> Result<f64, ValueError> {
        parse_decimal(self.raw("DURATION"))
    }

    /// `PLANNED-DURATION` in seconds, 0 when missing.
    pub fn planned_duration(&self) -> Result<f64, ValueError> {
        parse_decimal(self.raw("PLANNED-DURATION"))
    }

    /// `SCTE35-OUT` as bytes. The value must be a `0x` prefixed hexadecimal sequence.
    pub fn scte35_out(&self) -> Result<Option<Vec<u8>>, ValueError> {
        let value = self.raw("SCTE35-OUT");
        if value.is_empty() {
            return Ok(None);
        }

        let digits = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .ok_or_else(|| ValueError::UnknownHexPrefix(value.to_owned()))?;
        Ok(Some(hex::decode(digits)?))
    }

    /// Interprets every known attribute, failing on the first invalid one.
    pub fn decode(&self) -> Result<DateRangeValues, ValueError> {
        Ok(DateRangeValues {
            event_id: self.event_id().to_owned(),
            start_date: self.start_date()?,
            end_date: self.end_date()?,
            duration: self.duration()?,
            planned_duration: self.planned_duration()?,
            scte35_out: self.scte35_out()?,
        })
    }
}

fn parse_date(value: &str) -> Result<Option<DateTime<FixedOffset>>, ValueError> {
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(DateTime::parse_from_rfc3339(value)?))
}

fn parse_decimal(value: &str) -> Result<f64, ValueError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    Ok(value.parse()?)
}
