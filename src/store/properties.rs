//! Content properties for stored values

use serde::{Deserialize, Serialize};

/// Media type assigned when an entry is constructed without an explicit one
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Fixed-schema description of a stored value's representation
///
/// All fields are optional except `content_length`, which defaults to 0.
/// `Clone` yields a fully independent instance; mutating a returned copy
/// never affects stored state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    /// Media type of the value (e.g. "application/json")
    pub content_type: Option<String>,

    /// Transfer encoding applied to the value (e.g. "gzip")
    pub content_encoding: Option<String>,

    /// Natural language of the content (e.g. "en-US")
    pub content_language: Option<String>,

    /// Presentation hint (e.g. "attachment")
    pub content_disposition: Option<String>,

    /// Declared length of the value in bytes
    pub content_length: i64,

    /// MD5 checksum of the value, if the caller supplied one
    pub content_md5: Option<String>,

    /// CRC64 checksum of the value, if the caller supplied one
    pub content_crc64: Option<String>,
}

impl Properties {
    /// Create properties with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill in the default media type if none is set
    pub(crate) fn apply_content_type_default(&mut self) {
        if self.content_type.is_none() {
            self.content_type = Some(OCTET_STREAM.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Properties {
        Properties {
            content_type: Some("application/json".to_string()),
            content_encoding: Some("gzip".to_string()),
            content_language: Some("en-US".to_string()),
            content_disposition: Some("attachment".to_string()),
            content_length: 3,
            content_md5: Some("12345".to_string()),
            content_crc64: Some("ABCDE".to_string()),
        }
    }

    #[test]
    fn test_default_has_no_content_type_and_zero_length() {
        let properties = Properties::new();
        assert_eq!(properties.content_type, None);
        assert_eq!(properties.content_length, 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.content_type = Some("text/plain".to_string());
        copy.content_length = 99;

        assert_eq!(original.content_type.as_deref(), Some("application/json"));
        assert_eq!(original.content_length, 3);
    }

    #[test]
    fn test_content_type_default_only_fills_unset() {
        let mut unset = Properties::new();
        unset.apply_content_type_default();
        assert_eq!(unset.content_type.as_deref(), Some(OCTET_STREAM));

        let mut explicit = sample();
        explicit.apply_content_type_default();
        assert_eq!(explicit.content_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_serde_round_trip() {
        let original = sample();
        let json = serde_json::to_string(&original).unwrap();
        let restored: Properties = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
