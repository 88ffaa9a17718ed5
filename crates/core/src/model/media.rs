use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Media attached to a question.
///
/// The wire encoding of `media_url` is ad hoc: either a bare path string or a
/// JSON-encoded array of path strings (distinguished by a leading `[`). This
/// type decodes that once, at the serde boundary; downstream code only ever
/// sees the variant and never re-parses the raw value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MediaSource {
    #[default]
    Empty,
    Single(String),
    Multiple(Vec<String>),
}

impl MediaSource {
    /// Decodes the raw `media_url` value.
    ///
    /// A value with a leading `[` is attempted as a JSON array of strings; on
    /// parse failure the whole value is one literal path.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        if raw.starts_with('[') {
            return match serde_json::from_str::<Vec<String>>(raw) {
                Ok(paths) => Self::Multiple(paths),
                Err(_) => Self::Single(raw.to_string()),
            };
        }
        Self::Single(raw.to_string())
    }

    /// Re-encodes the variant into the wire representation.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Single(path) => path.clone(),
            Self::Multiple(paths) => serde_json::to_string(paths).unwrap_or_default(),
        }
    }

    /// The attached paths in order, empty for `Empty`.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(path) => vec![path.as_str()],
            Self::Multiple(paths) => paths.iter().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Serialize for MediaSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for MediaSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Empty, Self::decode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_json_array_value() {
        let media = MediaSource::decode(r#"["a.png","b.png"]"#);
        assert_eq!(
            media,
            MediaSource::Multiple(vec!["a.png".into(), "b.png".into()])
        );
        assert_eq!(media.paths(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn decodes_bare_path_value() {
        let media = MediaSource::decode("a.png");
        assert_eq!(media, MediaSource::Single("a.png".into()));
        assert_eq!(media.paths(), vec!["a.png"]);
    }

    #[test]
    fn malformed_array_falls_back_to_literal_path() {
        let media = MediaSource::decode("[invalid");
        assert_eq!(media, MediaSource::Single("[invalid".into()));
    }

    #[test]
    fn empty_value_decodes_to_empty() {
        assert_eq!(MediaSource::decode(""), MediaSource::Empty);
        assert!(MediaSource::decode("").is_empty());
    }

    #[test]
    fn encodes_back_to_wire_shape() {
        let multiple = MediaSource::Multiple(vec!["a.png".into(), "b.png".into()]);
        assert_eq!(multiple.encode(), r#"["a.png","b.png"]"#);
        assert_eq!(MediaSource::Single("a.png".into()).encode(), "a.png");
        assert_eq!(MediaSource::Empty.encode(), "");
    }

    #[test]
    fn null_deserializes_to_empty() {
        let media: MediaSource = serde_json::from_str("null").unwrap();
        assert_eq!(media, MediaSource::Empty);
    }

    #[test]
    fn serde_round_trip_preserves_wire_value() {
        let media: MediaSource = serde_json::from_str(r#""[\"a.png\",\"b.png\"]""#).unwrap();
        assert_eq!(
            media,
            MediaSource::Multiple(vec!["a.png".into(), "b.png".into()])
        );
        let encoded = serde_json::to_string(&media).unwrap();
        assert_eq!(encoded, r#""[\"a.png\",\"b.png\"]""#);
    }
}
