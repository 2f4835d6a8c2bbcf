use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::format::directives;

/// A single tag line, e.g. `#EXT-X-KEY:METHOD=NONE`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    /// Name without the leading `#`
    pub name: SmolStr,
    /// Raw text after the first `:`, empty when there is none
    pub attributes: SmolStr,
}

impl Tag {
    pub fn new(name: impl Into<SmolStr>, attributes: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.into(),
        }
    }

    /// Splits a tag line into name and attribute text.
    /// Returns `None` for lines that are not tags (URIs).
    pub fn from_line(line: &str) -> Option<Self> {
        let body = line.strip_prefix('#')?;
        let mut splited_body = body.splitn(2, ':');
        let name = splited_body.next().unwrap_or_default();
        let attributes = splited_body.next().unwrap_or_default();

        Some(Self::new(name, attributes))
    }
}

/// Tags keyed by name, keeping every occurrence of repeated tags in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TagTable(IndexMap<SmolStr, Vec<SmolStr>>);

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the tag, keeping earlier tags of the same name.
    pub fn add(&mut self, tag: Tag) {
        self.0.entry(tag.name).or_default().push(tag.attributes);
    }

    /// Replaces every tag of the same name with this one.
    pub fn set(&mut self, tag: Tag) {
        self.0.insert(tag.name, vec![tag.attributes]);
    }

    /// Removes every tag with the name.
    pub fn remove(&mut self, name: &str) -> Option<Vec<SmolStr>> {
        self.0.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&[SmolStr]> {
        self.0.get(name).map(|x| x.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn first(&self, name: &str) -> Option<Tag> {
        self.0
            .get_key_value(name)
            .and_then(|(name, values)| Some(Tag::new(name.clone(), values.first()?.clone())))
    }

    pub fn last(&self, name: &str) -> Option<Tag> {
        self.0
            .get_key_value(name)
            .and_then(|(name, values)| Some(Tag::new(name.clone(), values.last()?.clone())))
    }

    /// Number of distinct tag names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &Vec<SmolStr>)> {
        self.0.iter()
    }

    /// All tags, sorted into output order. Tags with the same priority keep
    /// the order they were added in.
    pub fn list(&self) -> Vec<Tag> {
        let mut result = self
            .0
            .iter()
            .flat_map(|(name, values)| {
                values
                    .iter()
                    .map(|value| Tag::new(name.clone(), value.clone()))
            })
            .collect::<Vec<_>>();

        result.sort_by_key(|tag| directives::order(&tag.name));
        result
    }
}

impl FromIterator<Tag> for TagTable {
    fn from_iter<T: IntoIterator<Item = Tag>>(iter: T) -> Self {
        let mut result = Self::new();
        for tag in iter {
            result.add(tag);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line() {
        assert_eq!(
            Tag::from_line("#EXT-X-KEY:METHOD=AES-128,URI=\"https://example.com/k:1\""),
            Some(Tag::new("EXT-X-KEY", "METHOD=AES-128,URI=\"https://example.com/k:1\""))
        );
        assert_eq!(Tag::from_line("#EXTM3U"), Some(Tag::new("EXTM3U", "")));
        assert_eq!(Tag::from_line("#EXTINF:10,"), Some(Tag::new("EXTINF", "10,")));
        assert_eq!(Tag::from_line("http://example.com/a.ts"), None);
    }

    #[test]
    fn test_tag_table() {
        let mut tags = TagTable::from_iter([Tag::new("EXT-X-FOO", "foo")]);
        assert_eq!(tags.last("EXT-X-FOO"), Some(Tag::new("EXT-X-FOO", "foo")));

        tags.set(Tag::new("EXT-X-BAR", "bar"));
        assert_eq!(tags.len(), 2);

        tags.remove("EXT-X-FOO");
        assert!(!tags.contains("EXT-X-FOO"));
        assert_eq!(tags, TagTable::from_iter([Tag::new("EXT-X-BAR", "bar")]));

        tags.add(Tag::new("EXT-X-BAR", "bar2"));
        assert_eq!(tags.get("EXT-X-BAR").unwrap(), ["bar", "bar2"]);
        assert_eq!(tags.first("EXT-X-BAR"), Some(Tag::new("EXT-X-BAR", "bar")));
        assert_eq!(tags.last("EXT-X-BAR"), Some(Tag::new("EXT-X-BAR", "bar2")));

        tags.set(Tag::new("EXT-X-BAR", "bar3"));
        assert_eq!(tags.get("EXT-X-BAR").unwrap(), ["bar3"]);
        assert_eq!(tags.first("EXT-X-MISSING"), None);
    }

    #[test]
    fn test_list_order() {
        let tags = TagTable::from_iter([
            Tag::new("EXT-X-VENDOR-B", "1"),
            Tag::new("EXT-X-MEDIA-SEQUENCE", "10"),
            Tag::new("EXT-X-VENDOR-A", "2"),
            Tag::new("EXT-X-TARGETDURATION", "6"),
            Tag::new("EXTM3U", ""),
            Tag::new("EXT-X-VENDOR-B", "3"),
        ]);

        let names = tags
            .list()
            .into_iter()
            .map(|x| format!("{}:{}", x.name, x.attributes))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "EXTM3U:",
                "EXT-X-TARGETDURATION:6",
                "EXT-X-MEDIA-SEQUENCE:10",
                "EXT-X-VENDOR-B:1",
                "EXT-X-VENDOR-B:3",
                "EXT-X-VENDOR-A:2",
            ]
        );
    }
}
