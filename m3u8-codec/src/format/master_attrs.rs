use smol_str::{SmolStr, format_smolstr};

use crate::{
    Attributes, ValueError,
    format::{MediaType, macros::typed_wrapper},
};

typed_wrapper!(
    /// Attributes of an `EXT-X-STREAM-INF` or `EXT-X-I-FRAME-STREAM-INF` tag.
    StreamInfAttrs(Attributes)
);

typed_wrapper!(
    /// Attributes of an `EXT-X-MEDIA` tag.
    MediaAttrs(Attributes)
);

impl StreamInfAttrs {
    /// `RESOLUTION` as `(width, height)`.
    pub fn resolution(&self) -> Result<(u32, u32), ValueError> {
        parse_resolution(self.raw("RESOLUTION"))
    }

    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.set("RESOLUTION", format_smolstr!("{}x{}", width, height));
    }

    pub fn bandwidth(&self) -> Result<i64, ValueError> {
        Ok(self.raw("BANDWIDTH").parse()?)
    }

    pub fn set_bandwidth(&mut self, bandwidth: i64) {
        self.set("BANDWIDTH", format_smolstr!("{}", bandwidth));
    }

    pub fn average_bandwidth(&self) -> Result<i64, ValueError> {
        Ok(self.raw("AVERAGE-BANDWIDTH").parse()?)
    }

    pub fn set_average_bandwidth(&mut self, bandwidth: i64) {
        self.set("AVERAGE-BANDWIDTH", format_smolstr!("{}", bandwidth));
    }

    pub fn codecs(&self) -> Vec<SmolStr> {
        self.unquoted("CODECS").split(',').map(SmolStr::from).collect()
    }

    pub fn set_codecs<T: AsRef<str>>(&mut self, codecs: &[T]) {
        let joined = codecs.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        self.set_quoted("CODECS", joined);
    }

    pub fn frame_rate(&self) -> Result<f64, ValueError> {
        Ok(self.raw("FRAME-RATE").parse()?)
    }

    pub fn set_frame_rate(&mut self, frame_rate: f64) {
        self.set("FRAME-RATE", format_smolstr!("{}", frame_rate));
    }

    /// Group id of the audio renditions.
    pub fn audio(&self) -> &str {
        self.unquoted("AUDIO")
    }

    pub fn set_audio(&mut self, group_id: impl AsRef<str>) {
        self.set_quoted("AUDIO", group_id);
    }

    pub fn video(&self) -> &str {
        self.unquoted("VIDEO")
    }

    pub fn set_video(&mut self, group_id: impl AsRef<str>) {
        self.set_quoted("VIDEO", group_id);
    }

    pub fn subtitles(&self) -> &str {
        self.unquoted("SUBTITLES")
    }

    pub fn set_subtitles(&mut self, group_id: impl AsRef<str>) {
        self.set_quoted("SUBTITLES", group_id);
    }

    pub fn closed_captions(&self) -> &str {
        self.unquoted("CLOSED-CAPTIONS")
    }

    pub fn set_closed_captions(&mut self, group_id: impl AsRef<str>) {
        self.set_quoted("CLOSED-CAPTIONS", group_id);
    }
}

/// Parses a `<width>x<height>` resolution.
pub fn parse_resolution(resolution: &str) -> Result<(u32, u32), ValueError> {
    let (width, height) = resolution
        .split_once('x')
        .filter(|(width, height)| !width.is_empty() && !height.is_empty())
        .ok_or_else(|| ValueError::InvalidResolution(resolution.to_owned()))?;

    Ok((width.parse()?, height.parse()?))
}

impl MediaAttrs {
    /// `TYPE`, `None` when missing or unknown.
    pub fn media_type(&self) -> Option<MediaType> {
        self.raw("TYPE").parse().ok()
    }

    pub fn set_media_type(&mut self, media_type: MediaType) {
        self.set("TYPE", media_type.as_str());
    }

    pub fn uri(&self) -> &str {
        self.unquoted("URI")
    }

    pub fn set_uri(&mut self, uri: impl AsRef<str>) {
        self.set_quoted("URI", uri);
    }

    pub fn group_id(&self) -> &str {
        self.unquoted("GROUP-ID")
    }

    pub fn set_group_id(&mut self, group_id: impl AsRef<str>) {
        self.set_quoted("GROUP-ID", group_id);
    }

    pub fn language(&self) -> &str {
        self.unquoted("LANGUAGE")
    }

    pub fn set_language(&mut self, language: impl AsRef<str>) {
        self.set_quoted("LANGUAGE", language);
    }

    pub fn assoc_language(&self) -> &str {
        self.unquoted("ASSOC-LANGUAGE")
    }

    pub fn set_assoc_language(&mut self, language: impl AsRef<str>) {
        self.set_quoted("ASSOC-LANGUAGE", language);
    }

    pub fn name(&self) -> &str {
        self.unquoted("NAME")
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.set_quoted("NAME", name);
    }

    pub fn is_default(&self) -> bool {
        self.raw("DEFAULT") == "YES"
    }

    pub fn set_default(&mut self, value: bool) {
        self.set("DEFAULT", yes_no(value));
    }

    pub fn autoselect(&self) -> bool {
        self.raw("AUTOSELECT") == "YES"
    }

    pub fn set_autoselect(&mut self, value: bool) {
        self.set("AUTOSELECT", yes_no(value));
    }

    /// The attribute list as written in an `EXT-X-MEDIA` line, with `TYPE` and
    /// `GROUP-ID` moved to the front.
    pub(crate) fn to_tag_attributes(&self, media_type: MediaType, group_id: &str) -> SmolStr {
        let raw_group_id = match self.get("GROUP-ID") {
            Some(raw) if crate::unquote(raw) == group_id => raw.clone(),
            _ => format_smolstr!("\"{}\"", group_id),
        };

        let mut rest = self.0.clone();
        rest.remove("TYPE");
        rest.remove("GROUP-ID");

        if rest.is_empty() {
            format_smolstr!("TYPE={},GROUP-ID={}", media_type, raw_group_id)
        } else {
            format_smolstr!("TYPE={},GROUP-ID={},{}", media_type, raw_group_id, rest)
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "YES" } else { "NO" }
}
