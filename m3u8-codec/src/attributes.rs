use std::{
    collections::BTreeMap,
    fmt::Display,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::ParseError;

lazy_static! {
    /// Matches one attribute at the start of the input together with its separator.
    /// A value is either a quoted run without inner quotes, or an unquoted run of
    /// anything but `,` and `"` which does not start with `=`.
    static ref FIRST_ATTRIBUTE_REGEX: Regex =
        Regex::new(r#"^([0-9A-Za-z-]+)(?:=("[^"]*"|[^",=][^",]*|))?(?:,|$)"#)
            .expect("Regular expression error");
}

/// The attribute list of a tag, e.g. `BANDWIDTH=1280000,CODECS="avc1.4d401e"`.
///
/// Values are kept exactly as they appear in the playlist, quotes included.
/// An empty value stands for a flag-style attribute without `=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes(BTreeMap<SmolStr, SmolStr>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of `key` with surrounding quotes removed. Missing keys read as empty.
    pub fn unquoted(&self, key: &str) -> &str {
        self.0.get(key).map(|x| unquote(x)).unwrap_or_default()
    }

    /// Raw value of `key`, empty when missing.
    pub fn raw(&self, key: &str) -> &str {
        self.0.get(key).map(|x| x.as_str()).unwrap_or_default()
    }

    pub fn set(&mut self, key: impl Into<SmolStr>, value: impl Into<SmolStr>) {
        self.0.insert(key.into(), value.into());
    }

    /// Stores `value` wrapped in double quotes.
    pub fn set_quoted(&mut self, key: impl Into<SmolStr>, value: impl AsRef<str>) {
        self.0
            .insert(key.into(), smol_str::format_smolstr!("\"{}\"", value.as_ref()));
    }

    pub fn into_inner(self) -> BTreeMap<SmolStr, SmolStr> {
        self.0
    }
}

impl Deref for Attributes {
    type Target = BTreeMap<SmolStr, SmolStr>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Attributes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<BTreeMap<SmolStr, SmolStr>> for Attributes {
    fn from(value: BTreeMap<SmolStr, SmolStr>) -> Self {
        Self(value)
    }
}

impl<K: Into<SmolStr>, V: Into<SmolStr>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl FromStr for Attributes {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_attributes(s)
    }
}

impl Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (key, value)) in self.0.iter().enumerate() {
            if index != 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", key)?;
            if !value.is_empty() {
                write!(f, "={}", value)?;
            }
        }

        Ok(())
    }
}

/// Parses an attribute list.
///
/// Either the whole input is consumed or an error is returned; an empty input
/// gives an empty list.
pub fn parse_attributes(input: impl AsRef<str>) -> Result<Attributes, ParseError> {
    let input = input.as_ref();
    let mut rest = input;
    let mut result = Attributes::new();

    while !rest.is_empty() {
        let captures = FIRST_ATTRIBUTE_REGEX
            .captures(rest)
            .ok_or_else(|| ParseError::InvalidAttributes(input.to_owned()))?;

        let whole = captures.get(0).map(|x| x.as_str()).unwrap_or_default();
        let key = captures.get(1).map(|x| x.as_str()).unwrap_or_default();
        let value = captures.get(2).map(|x| x.as_str()).unwrap_or_default();
        result.set(key, value);

        rest = &rest[whole.len()..];
    }

    Ok(result)
}

/// Strips surrounding double quotes.
pub fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}
