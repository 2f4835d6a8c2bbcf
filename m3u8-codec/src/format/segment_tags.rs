use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use smol_str::format_smolstr;

use crate::{
    format::{
        DateRangeAttrs, Tag, TagTable,
        directives::{EXT_X_DATERANGE, EXT_X_DISCONTINUITY, EXT_X_PROGRAM_DATE_TIME, EXTINF},
        macros::typed_wrapper,
    },
    parse_attributes,
};

typed_wrapper!(
    /// Tags attached to a single media segment.
    SegmentTags(TagTable)
);

impl SegmentTags {
    /// `EXT-X-PROGRAM-DATE-TIME`, `None` when missing or invalid.
    pub fn program_date_time(&self) -> Option<DateTime<FixedOffset>> {
        let value = self.get(EXT_X_PROGRAM_DATE_TIME)?.first()?;
        DateTime::parse_from_rfc3339(value).ok()
    }

    pub fn set_program_date_time(&mut self, time: DateTime<Utc>) {
        self.set(Tag::new(
            EXT_X_PROGRAM_DATE_TIME,
            time.to_rfc3339_opts(SecondsFormat::Millis, true),
        ));
    }

    /// Duration from the `EXTINF` tag, 0 when missing or invalid.
    pub fn ext_inf_value(&self) -> f64 {
        self.get(EXTINF)
            .and_then(|x| x.first())
            .and_then(|x| x.split_once(','))
            .and_then(|(duration, _)| duration.parse().ok())
            .unwrap_or(0.0)
    }

    /// Writes `EXTINF` with the duration and an empty title.
    pub fn set_ext_inf_value(&mut self, duration: f64) {
        self.set(Tag::new(EXTINF, format_smolstr!("{},", duration)));
    }

    /// Whether the segment starts a new discontinuity.
    pub fn is_discontinuity(&self) -> bool {
        self.contains(EXT_X_DISCONTINUITY)
    }

    /// Attribute lists of every `EXT-X-DATERANGE` tag; entries which fail to
    /// parse are left out.
    pub fn date_ranges(&self) -> Vec<DateRangeAttrs> {
        self.get(EXT_X_DATERANGE)
            .unwrap_or_default()
            .iter()
            .filter_map(|x| parse_attributes(x).ok())
            .map(DateRangeAttrs::from)
            .collect()
    }
}
